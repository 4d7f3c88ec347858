//! Mapping module for icon records and the dataset loader.

pub mod loader;
pub mod record;

pub use loader::load_mapping;
pub use record::IconRecord;
