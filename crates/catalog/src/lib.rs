//! Persisted population representations.
//!
//! Explicitly-keyed, versioned JSON records replace the old positional
//! text dumps: fields are named, the format carries a version number, and
//! parse failures surface as errors instead of quietly becoming empty
//! results.

pub mod dump;
pub mod error;
pub mod record;

#[cfg(test)]
mod record_test;

pub use dump::PopulationDump;
pub use error::FormatError;
pub use record::{PopulationRecord, StarRecord, CATALOG_VERSION};
