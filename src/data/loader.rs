use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::data::{Element, Record, ReshapedRecord};
use crate::error::{ChartError, ChartResult};

/// FAOSTAT crop export used by the cocoa comparison.
pub const DEFAULT_FAOSTAT_URL: &str = "https://raw.githubusercontent.com/sci2pro/code-fastfoundations/refs/heads/main/day3/FAOSTAT_data_7-23-2022.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_FAOSTAT_URL.to_owned())
    }
}

/// Downloads CSV text. Non-success HTTP status is an error; there is no retry.
pub fn fetch_csv(url: &str, timeout: Duration) -> ChartResult<String> {
    info!(url, "fetching csv");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    debug!(bytes = body.len(), "fetched csv body");
    Ok(body)
}

/// Raw CSV text of `source`.
pub fn read_source(source: &DataSource, timeout: Duration) -> ChartResult<String> {
    match source {
        DataSource::Url(url) => fetch_csv(url, timeout),
        DataSource::File(path) => {
            info!(path = %path.display(), "reading csv");
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// Loads every record from `source`.
pub fn load_records(source: &DataSource, timeout: Duration) -> ChartResult<Vec<Record>> {
    let records = parse_records(read_source(source, timeout)?.as_bytes())?;
    info!(rows = records.len(), "loaded records");
    Ok(records)
}

/// Parses long-format rows, keeping only Year, Area, Item, Element and Value.
///
/// Extra columns are ignored. A blank Value cell becomes `None`.
pub fn parse_records<R: Read>(input: R) -> ChartResult<Vec<Record>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let columns = ColumnIndex::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let raw = result?;
        let line = raw
            .position()
            .map_or(row as u64 + 2, |position| position.line());
        records.push(columns.record(&raw, line)?);
    }
    debug!(rows = records.len(), "parsed csv records");
    Ok(records)
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    area: usize,
    item: usize,
    element: usize,
    value: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> ChartResult<Self> {
        let find = |name: &'static str| -> ChartResult<usize> {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
                .ok_or(ChartError::MissingColumn(name))
        };
        Ok(Self {
            year: find("Year")?,
            area: find("Area")?,
            item: find("Item")?,
            element: find("Element")?,
            value: find("Value")?,
        })
    }

    fn record(self, raw: &StringRecord, line: u64) -> ChartResult<Record> {
        let field = |index: usize| raw.get(index).unwrap_or("").trim();

        let year = field(self.year)
            .parse::<i32>()
            .map_err(|err| ChartError::Parse {
                line,
                message: format!("year `{}`: {err}", field(self.year)),
            })?;
        let value = match field(self.value) {
            "" => None,
            text => {
                let parsed = text.parse::<f64>().map_err(|err| ChartError::Parse {
                    line,
                    message: format!("value `{text}`: {err}"),
                })?;
                parsed.is_finite().then_some(parsed)
            }
        };

        Ok(Record::new(
            year,
            field(self.area),
            field(self.item),
            field(self.element),
            value,
        ))
    }
}

/// Renders the header and first `limit` rows of raw CSV text, every column
/// included.
pub fn preview_csv(text: &str, limit: usize) -> ChartResult<String> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_owned())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records().take(limit) {
        rows.push(result?.iter().map(str::to_owned).collect());
    }
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    Ok(format_table(&headers, rows))
}

/// Renders the first `limit` long-format rows as a text table.
#[must_use]
pub fn preview_records(records: &[Record], limit: usize) -> String {
    let rows = records
        .iter()
        .take(limit)
        .map(|record| {
            vec![
                record.year.to_string(),
                record.area.clone(),
                record.item.clone(),
                record.element.clone(),
                format_cell(record.value),
            ]
        })
        .collect();
    format_table(&["Year", "Area", "Item", "Element", "Value"], rows)
}

/// Renders the first `limit` wide rows as a text table.
#[must_use]
pub fn preview_wide(rows: &[ReshapedRecord], limit: usize) -> String {
    let mut headers = vec!["Year", "Area", "Item"];
    headers.extend(Element::ALL.iter().map(|element| element.column_name()));

    let body = rows
        .iter()
        .take(limit)
        .map(|row| {
            let mut cells = vec![row.year.to_string(), row.area.clone(), row.item.clone()];
            cells.extend(Element::ALL.iter().map(|element| format_cell(row.get(*element))));
            cells
        })
        .collect();
    format_table(&headers, body)
}

fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_owned(), |value| value.to_string())
}

fn format_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = render_row(headers.to_vec());
    for row in &rows {
        out.push('\n');
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }
    out
}
