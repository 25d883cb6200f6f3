use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{Element, Record, ReshapedRecord};

type RowKey = (i32, String, String);

/// Wide-format table: one row per `(year, area, item)`, sorted by that key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    rows: Vec<ReshapedRecord>,
}

impl WideTable {
    /// Pivots long rows so each element becomes a column.
    ///
    /// The first non-missing value wins when a key repeats an element;
    /// non-finite values count as missing.
    /// Unknown elements are skipped and rows with no values are dropped.
    #[must_use]
    pub fn pivot(records: &[Record]) -> Self {
        let mut grouped: BTreeMap<RowKey, ReshapedRecord> = BTreeMap::new();
        let mut skipped_elements = 0usize;

        for record in records {
            let Some(element) = Element::from_source_name(&record.element) else {
                skipped_elements += 1;
                continue;
            };
            let row = grouped
                .entry((record.year, record.area.clone(), record.item.clone()))
                .or_insert_with(|| {
                    ReshapedRecord::empty(record.year, record.area.clone(), record.item.clone())
                });
            let slot = row.slot_mut(element);
            if slot.is_none() {
                *slot = present(record.value);
            }
        }

        let rows: Vec<ReshapedRecord> = grouped
            .into_values()
            .filter(|row| !row.is_blank())
            .collect();
        debug!(
            input_rows = records.len(),
            wide_rows = rows.len(),
            skipped_elements,
            "pivoted records"
        );
        Self { rows }
    }

    /// Re-keys already-wide rows, merging duplicate keys first-value-wins.
    ///
    /// A table produced by `pivot` comes back unchanged.
    #[must_use]
    pub fn repivot(&self) -> Self {
        Self::from_rows(self.rows.iter().cloned())
    }

    /// Builds a table from wide rows in any order. Non-finite cells are dropped.
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ReshapedRecord>,
    {
        let mut grouped: BTreeMap<RowKey, ReshapedRecord> = BTreeMap::new();
        for mut row in rows {
            for element in Element::ALL {
                let slot = row.slot_mut(element);
                *slot = present(*slot);
            }
            let key = (row.year, row.area.clone(), row.item.clone());
            match grouped.get_mut(&key) {
                Some(existing) => {
                    for element in Element::ALL {
                        let slot = existing.slot_mut(element);
                        if slot.is_none() {
                            *slot = row.get(element);
                        }
                    }
                }
                None => {
                    grouped.insert(key, row);
                }
            }
        }
        Self {
            rows: grouped
                .into_values()
                .filter(|row| !row.is_blank())
                .collect(),
        }
    }

    /// Unpivots back to long rows, one per present cell.
    #[must_use]
    pub fn melt(&self) -> Vec<Record> {
        self.rows
            .iter()
            .flat_map(|row| {
                Element::ALL.into_iter().filter_map(move |element| {
                    row.get(element).map(|value| {
                        Record::new(
                            row.year,
                            row.area.clone(),
                            row.item.clone(),
                            element.source_name(),
                            Some(value),
                        )
                    })
                })
            })
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[ReshapedRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Non-finite cells are treated as absent.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}
