use serde::{Deserialize, Serialize};

/// One long-format FAOSTAT row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub area: String,
    pub item: String,
    pub element: String,
    /// `None` when the source cell is blank.
    pub value: Option<f64>,
}

impl Record {
    #[must_use]
    pub fn new(
        year: i32,
        area: impl Into<String>,
        item: impl Into<String>,
        element: impl Into<String>,
        value: Option<f64>,
    ) -> Self {
        Self {
            year,
            area: area.into(),
            item: item.into(),
            element: element.into(),
            value,
        }
    }
}

/// Measurement spread into its own column by the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    AreaHarvested,
    Yield,
    Production,
}

impl Element {
    pub const ALL: [Self; 3] = [Self::AreaHarvested, Self::Yield, Self::Production];

    /// Matches the FAOSTAT element name.
    #[must_use]
    pub fn from_source_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Area harvested" => Some(Self::AreaHarvested),
            "Yield" => Some(Self::Yield),
            "Production" => Some(Self::Production),
            _ => None,
        }
    }

    /// Name used in the FAOSTAT long format.
    #[must_use]
    pub fn source_name(self) -> &'static str {
        match self {
            Self::AreaHarvested => "Area harvested",
            Self::Yield => "Yield",
            Self::Production => "Production",
        }
    }

    /// Column heading in the wide table.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Self::AreaHarvested => "Area Harvested",
            Self::Yield => "Yield",
            Self::Production => "Production",
        }
    }
}

/// Wide-format row keyed by `(year, area, item)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReshapedRecord {
    pub year: i32,
    pub area: String,
    pub item: String,
    pub area_harvested: Option<f64>,
    pub yield_hg_per_ha: Option<f64>,
    pub production: Option<f64>,
}

impl ReshapedRecord {
    #[must_use]
    pub fn empty(year: i32, area: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            year,
            area: area.into(),
            item: item.into(),
            area_harvested: None,
            yield_hg_per_ha: None,
            production: None,
        }
    }

    #[must_use]
    pub fn get(&self, element: Element) -> Option<f64> {
        match element {
            Element::AreaHarvested => self.area_harvested,
            Element::Yield => self.yield_hg_per_ha,
            Element::Production => self.production,
        }
    }

    pub fn slot_mut(&mut self, element: Element) -> &mut Option<f64> {
        match element {
            Element::AreaHarvested => &mut self.area_harvested,
            Element::Yield => &mut self.yield_hg_per_ha,
            Element::Production => &mut self.production,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        Element::ALL.iter().all(|element| self.get(*element).is_none())
    }
}
