use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{ReshapedRecord, WideTable};

pub const COCOA_ITEM: &str = "Cocoa, beans";
pub const GHANA: &str = "Ghana";
pub const COTE_DIVOIRE: &str = "Côte d'Ivoire";

/// Commodity and country predicates applied to a wide table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropFilter {
    pub item: String,
    pub areas: Vec<String>,
}

impl Default for CropFilter {
    fn default() -> Self {
        Self {
            item: COCOA_ITEM.to_owned(),
            areas: vec![GHANA.to_owned(), COTE_DIVOIRE.to_owned()],
        }
    }
}

impl CropFilter {
    #[must_use]
    pub fn new<S>(item: impl Into<String>, areas: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            item: item.into(),
            areas: areas.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn matches_item(&self, row: &ReshapedRecord) -> bool {
        row.item == self.item
    }

    #[must_use]
    pub fn matches_area(&self, row: &ReshapedRecord) -> bool {
        self.areas.iter().any(|area| *area == row.area)
    }

    /// Keeps rows passing both predicates, grouped by area in filter order.
    #[must_use]
    pub fn apply(&self, table: &WideTable) -> FilteredSubset {
        let mut by_area: IndexMap<String, Vec<ReshapedRecord>> = self
            .areas
            .iter()
            .map(|area| (area.clone(), Vec::new()))
            .collect();

        for row in table
            .rows()
            .iter()
            .filter(|row| self.matches_item(row))
            .filter(|row| self.matches_area(row))
        {
            if let Some(rows) = by_area.get_mut(&row.area) {
                rows.push(row.clone());
            }
        }

        for rows in by_area.values_mut() {
            rows.sort_by_key(|row| row.year);
        }

        let subset = FilteredSubset {
            item: self.item.clone(),
            by_area,
        };
        debug!(
            item = %self.item,
            areas = self.areas.len(),
            rows = subset.len(),
            "filtered wide table"
        );
        subset
    }
}

/// Rows of one commodity for a fixed set of areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSubset {
    item: String,
    by_area: IndexMap<String, Vec<ReshapedRecord>>,
}

impl FilteredSubset {
    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Areas in filter order, including those without rows.
    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.by_area.keys().map(String::as_str)
    }

    /// Rows for `area` sorted by year; empty when the area has no rows.
    #[must_use]
    pub fn rows_for(&self, area: &str) -> &[ReshapedRecord] {
        self.by_area.get(area).map_or(&[], Vec::as_slice)
    }

    /// All rows, area-major in filter order.
    pub fn rows(&self) -> impl Iterator<Item = &ReshapedRecord> {
        self.by_area.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_area.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
