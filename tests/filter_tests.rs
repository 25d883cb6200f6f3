use chart_sketch::data::{COCOA_ITEM, COTE_DIVOIRE, CropFilter, GHANA, Record, WideTable};

fn table(records: &[Record]) -> WideTable {
    WideTable::pivot(records)
}

#[test]
fn keeps_ghana_and_drops_togo() {
    let wide = table(&[
        Record::new(2020, "Ghana", "Cocoa, beans", "Yield", Some(500.0)),
        Record::new(2020, "Togo", "Cocoa, beans", "Yield", Some(500.0)),
    ]);

    let subset = CropFilter::default().apply(&wide);

    assert_eq!(subset.len(), 1);
    let rows = subset.rows_for(GHANA);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].yield_hg_per_ha, Some(500.0));
    assert!(subset.rows_for("Togo").is_empty());
}

#[test]
fn other_commodities_are_excluded() {
    let wide = table(&[
        Record::new(2020, "Ghana", "Cocoa, beans", "Production", Some(800_000.0)),
        Record::new(2020, "Ghana", "Coffee, green", "Production", Some(1_000.0)),
    ]);

    let subset = CropFilter::default().apply(&wide);
    assert_eq!(subset.item(), COCOA_ITEM);
    assert!(subset.rows().all(|row| row.item == COCOA_ITEM));
    assert_eq!(subset.len(), 1);
}

#[test]
fn areas_follow_filter_order_and_rows_follow_year() {
    let wide = table(&[
        Record::new(2021, "Ghana", "Cocoa, beans", "Yield", Some(3.0)),
        Record::new(2019, "Côte d'Ivoire", "Cocoa, beans", "Yield", Some(1.0)),
        Record::new(2019, "Ghana", "Cocoa, beans", "Yield", Some(2.0)),
    ]);

    let subset = CropFilter::default().apply(&wide);

    let areas: Vec<&str> = subset.areas().collect();
    assert_eq!(areas, vec![GHANA, COTE_DIVOIRE]);
    let ghana_years: Vec<i32> = subset.rows_for(GHANA).iter().map(|row| row.year).collect();
    assert_eq!(ghana_years, vec![2019, 2021]);
}

#[test]
fn empty_match_keeps_requested_areas() {
    let wide = table(&[Record::new(2020, "Togo", "Cocoa, beans", "Yield", Some(1.0))]);
    let subset = CropFilter::default().apply(&wide);

    assert!(subset.is_empty());
    assert_eq!(subset.areas().count(), 2);
}

#[test]
fn custom_filter_selects_other_crops_and_countries() {
    let wide = table(&[
        Record::new(2020, "Brazil", "Coffee, green", "Production", Some(3_700_000.0)),
        Record::new(2020, "Viet Nam", "Coffee, green", "Production", Some(1_760_000.0)),
        Record::new(2020, "Ghana", "Coffee, green", "Production", Some(400.0)),
    ]);

    let filter = CropFilter::new("Coffee, green", ["Viet Nam", "Brazil"]);
    let subset = filter.apply(&wide);

    assert_eq!(subset.areas().collect::<Vec<_>>(), vec!["Viet Nam", "Brazil"]);
    assert_eq!(subset.len(), 2);
}
