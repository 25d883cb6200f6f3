use chart_sketch::data::{Element, Record, ReshapedRecord, WideTable};

fn cocoa(year: i32, area: &str, element: &str, value: Option<f64>) -> Record {
    Record::new(year, area, "Cocoa, beans", element, value)
}

#[test]
fn pivot_spreads_elements_into_columns() {
    let records = vec![
        cocoa(2020, "Ghana", "Area harvested", Some(1_480_000.0)),
        cocoa(2020, "Ghana", "Yield", Some(5_470.0)),
        cocoa(2020, "Ghana", "Production", Some(800_000.0)),
    ];

    let table = WideTable::pivot(&records);

    assert_eq!(table.len(), 1);
    let row = &table.rows()[0];
    assert_eq!(row.area_harvested, Some(1_480_000.0));
    assert_eq!(row.yield_hg_per_ha, Some(5_470.0));
    assert_eq!(row.production, Some(800_000.0));
}

#[test]
fn first_non_missing_value_wins_for_repeated_elements() {
    let records = vec![
        cocoa(2020, "Ghana", "Yield", None),
        cocoa(2020, "Ghana", "Yield", Some(500.0)),
        cocoa(2020, "Ghana", "Yield", Some(600.0)),
    ];

    let table = WideTable::pivot(&records);
    assert_eq!(table.rows()[0].get(Element::Yield), Some(500.0));
}

#[test]
fn non_finite_values_count_as_missing() {
    let records = vec![
        cocoa(2020, "Ghana", "Yield", Some(f64::NAN)),
        cocoa(2020, "Ghana", "Yield", Some(500.0)),
        cocoa(2020, "Ghana", "Area harvested", Some(10.0)),
        cocoa(2020, "Ghana", "Production", Some(f64::NAN)),
        cocoa(2021, "Ghana", "Production", Some(f64::INFINITY)),
    ];

    let table = WideTable::pivot(&records);

    assert_eq!(table.len(), 1);
    let row = &table.rows()[0];
    assert_eq!(row.yield_hg_per_ha, Some(500.0));
    assert_eq!(row.area_harvested, Some(10.0));
    assert_eq!(row.production, None);
}

#[test]
fn from_rows_drops_non_finite_cells_before_merging() {
    let mut first = ReshapedRecord::empty(2020, "Ghana", "Cocoa, beans");
    first.yield_hg_per_ha = Some(f64::NAN);
    let mut second = ReshapedRecord::empty(2020, "Ghana", "Cocoa, beans");
    second.yield_hg_per_ha = Some(500.0);
    let mut blank = ReshapedRecord::empty(2021, "Ghana", "Cocoa, beans");
    blank.production = Some(f64::NAN);

    let table = WideTable::from_rows([first, second, blank]);

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].yield_hg_per_ha, Some(500.0));
}

#[test]
fn rows_with_only_missing_values_are_dropped() {
    let records = vec![
        cocoa(2019, "Ghana", "Yield", None),
        cocoa(2019, "Ghana", "Production", None),
        cocoa(2020, "Ghana", "Yield", Some(500.0)),
    ];

    let table = WideTable::pivot(&records);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].year, 2020);
}

#[test]
fn unknown_elements_are_ignored() {
    let records = vec![
        cocoa(2020, "Ghana", "Stocks", Some(12.0)),
        cocoa(2020, "Togo", "Yield", Some(300.0)),
    ];

    let table = WideTable::pivot(&records);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].area, "Togo");
}

#[test]
fn rows_are_ordered_by_year_area_item() {
    let records = vec![
        cocoa(2021, "Ghana", "Yield", Some(1.0)),
        cocoa(2020, "Togo", "Yield", Some(2.0)),
        cocoa(2020, "Ghana", "Yield", Some(3.0)),
    ];

    let keys: Vec<(i32, String)> = WideTable::pivot(&records)
        .rows()
        .iter()
        .map(|row| (row.year, row.area.clone()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (2020, "Ghana".to_owned()),
            (2020, "Togo".to_owned()),
            (2021, "Ghana".to_owned()),
        ]
    );
}

#[test]
fn repivot_and_melt_round_trip_are_idempotent() {
    let records = vec![
        cocoa(2019, "Ghana", "Area harvested", Some(1_450_000.0)),
        cocoa(2019, "Ghana", "Production", None),
        cocoa(2019, "Côte d'Ivoire", "Yield", Some(5_400.0)),
        cocoa(2020, "Côte d'Ivoire", "Production", Some(2_200_000.0)),
    ];
    let table = WideTable::pivot(&records);

    assert_eq!(table.repivot(), table);
    assert_eq!(WideTable::pivot(&table.melt()), table);
}

#[test]
fn from_rows_merges_duplicate_keys() {
    let mut first = ReshapedRecord::empty(2020, "Ghana", "Cocoa, beans");
    first.yield_hg_per_ha = Some(500.0);
    let mut second = ReshapedRecord::empty(2020, "Ghana", "Cocoa, beans");
    second.yield_hg_per_ha = Some(900.0);
    second.production = Some(800_000.0);

    let table = WideTable::from_rows([first, second]);

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].yield_hg_per_ha, Some(500.0));
    assert_eq!(table.rows()[0].production, Some(800_000.0));
}

#[test]
fn empty_input_gives_empty_table() {
    let table = WideTable::pivot(&[]);
    assert!(table.is_empty());
    assert!(table.melt().is_empty());
}
