use chart_sketch::ChartError;
use chart_sketch::data::{
    DataSource, Element, Record, WideTable, load_records, parse_records, preview_csv,
    preview_records, preview_wide, read_source,
};
use std::time::Duration;

const FAOSTAT_SAMPLE: &str = "\
\"Domain Code\",\"Domain\",\"Area Code (M49)\",\"Area\",\"Element Code\",\"Element\",\"Item Code (CPC)\",\"Item\",\"Year Code\",\"Year\",\"Unit\",\"Value\",\"Flag\",\"Flag Description\"
\"QCL\",\"Crops and livestock products\",\"288\",\"Ghana\",\"5312\",\"Area harvested\",\"01640\",\"Cocoa, beans\",\"2019\",\"2019\",\"ha\",\"1450000\",\"A\",\"Official figure\"
\"QCL\",\"Crops and livestock products\",\"288\",\"Ghana\",\"5419\",\"Yield\",\"01640\",\"Cocoa, beans\",\"2019\",\"2019\",\"hg/ha\",\"5655\",\"E\",\"Estimated value\"
\"QCL\",\"Crops and livestock products\",\"288\",\"Ghana\",\"5510\",\"Production\",\"01640\",\"Cocoa, beans\",\"2019\",\"2019\",\"tonnes\",\"\",\"M\",\"Missing value\"
";

#[test]
fn parse_keeps_only_the_five_relevant_columns() {
    let records = parse_records(FAOSTAT_SAMPLE.as_bytes()).expect("parse sample");

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        Record::new(2019, "Ghana", "Cocoa, beans", "Area harvested", Some(1_450_000.0))
    );
    assert_eq!(records[1].element, "Yield");
    assert_eq!(records[1].value, Some(5655.0));
}

#[test]
fn blank_value_cell_becomes_missing() {
    let records = parse_records(FAOSTAT_SAMPLE.as_bytes()).expect("parse sample");
    assert_eq!(records[2].element, "Production");
    assert_eq!(records[2].value, None);
}

#[test]
fn byte_order_mark_and_padded_headers_are_tolerated() {
    let input = "\u{feff}Year, Area ,Item,Element,Value\n2020,Ghana,\"Cocoa, beans\",Yield,500\n";
    let records = parse_records(input.as_bytes()).expect("parse with bom");
    assert_eq!(
        records,
        vec![Record::new(2020, "Ghana", "Cocoa, beans", "Yield", Some(500.0))]
    );
}

#[test]
fn missing_required_column_is_reported_by_name() {
    let input = "Year,Area,Item,Element\n2020,Ghana,\"Cocoa, beans\",Yield\n";
    let err = parse_records(input.as_bytes()).expect_err("value column is required");
    assert!(matches!(err, ChartError::MissingColumn("Value")));
}

#[test]
fn unparsable_year_reports_the_source_line() {
    let input = "Year,Area,Item,Element,Value\n2020,Ghana,Cocoa,Yield,1\nnineteen,Ghana,Cocoa,Yield,2\n";
    let err = parse_records(input.as_bytes()).expect_err("bad year must fail");
    match err {
        ChartError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("nineteen"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparsable_value_is_an_error_not_a_missing_cell() {
    let input = "Year,Area,Item,Element,Value\n2020,Ghana,Cocoa,Yield,lots\n";
    let err = parse_records(input.as_bytes()).expect_err("bad value must fail");
    assert!(matches!(err, ChartError::Parse { .. }));
}

#[test]
fn header_only_input_yields_no_records() {
    let records =
        parse_records("Year,Area,Item,Element,Value\n".as_bytes()).expect("header only");
    assert!(records.is_empty());
}

#[test]
fn load_records_reads_a_local_file() {
    let path = std::env::temp_dir().join(format!(
        "chart-sketch-loader-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, FAOSTAT_SAMPLE).expect("write fixture");

    let records =
        load_records(&DataSource::File(path.clone()), Duration::from_secs(1)).expect("load file");
    std::fs::remove_file(&path).expect("remove fixture");

    assert_eq!(records.len(), 3);
}

#[test]
fn load_records_surfaces_io_errors() {
    let source = DataSource::File("/definitely/not/here/faostat.csv".into());
    let err = load_records(&source, Duration::from_secs(1)).expect_err("missing file");
    assert!(matches!(err, ChartError::Io(_)));
}

#[test]
fn default_source_is_the_faostat_url() {
    match DataSource::default() {
        DataSource::Url(url) => assert!(url.ends_with("FAOSTAT_data_7-23-2022.csv")),
        DataSource::File(path) => panic!("unexpected file source {}", path.display()),
    }
}

#[test]
fn previews_print_headers_and_missing_cells() {
    let records = parse_records(FAOSTAT_SAMPLE.as_bytes()).expect("parse sample");

    let long = preview_records(&records, 2);
    let long_lines: Vec<&str> = long.lines().collect();
    assert!(long_lines[0].contains("Element"));
    assert_eq!(long.matches("Ghana").count(), 2);

    let wide = preview_wide(WideTable::pivot(&records).rows(), 10);
    assert!(wide.contains(Element::AreaHarvested.column_name()));
    assert!(wide.contains("NaN"));
}

#[test]
fn raw_preview_keeps_every_source_column() {
    let raw = preview_csv(FAOSTAT_SAMPLE, 2).expect("raw preview");
    let lines: Vec<&str> = raw.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Domain Code"));
    assert!(lines[0].contains("Flag Description"));
    assert!(lines[1].contains("Official figure"));
    assert!(!raw.contains("Missing value"));

    let projected = preview_records(&parse_records(FAOSTAT_SAMPLE.as_bytes()).expect("parse"), 2);
    assert!(!projected.contains("Flag Description"));
}

#[test]
fn read_source_returns_file_text_unchanged() {
    let path = std::env::temp_dir().join(format!(
        "chart-sketch-raw-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, FAOSTAT_SAMPLE).expect("write fixture");

    let text = read_source(&DataSource::File(path.clone()), Duration::from_secs(1)).expect("read");
    std::fs::remove_file(&path).expect("remove fixture");

    assert_eq!(text, FAOSTAT_SAMPLE);
}
