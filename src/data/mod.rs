//! FAOSTAT ingestion: load long rows, pivot them wide, keep one commodity
//! for a fixed set of countries.

pub mod filter;
pub mod loader;
pub mod record;
pub mod reshape;

pub use filter::{COCOA_ITEM, COTE_DIVOIRE, CropFilter, FilteredSubset, GHANA};
pub use loader::{
    DEFAULT_FAOSTAT_URL, DataSource, fetch_csv, load_records, parse_records, preview_csv,
    preview_records, preview_wide, read_source,
};
pub use record::{Element, Record, ReshapedRecord};
pub use reshape::WideTable;
