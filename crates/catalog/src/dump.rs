//! The full per-star attribute dump.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use population::Population;

use crate::error::FormatError;
use crate::record::{unix_now, CATALOG_VERSION};

/// Complete per-star attribute dump of a generated population, for
/// offline inspection. Unlike [`crate::PopulationRecord`] this keeps
/// every true and measured field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationDump {
    pub version: u32,
    /// Generation timestamp, unix seconds.
    pub generated_at: u64,
    pub population: Population,
}

impl PopulationDump {
    pub fn new(population: Population) -> Self {
        Self {
            version: CATALOG_VERSION,
            generated_at: unix_now(),
            population,
        }
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        let dump: Self = serde_json::from_str(text)?;
        if dump.version != CATALOG_VERSION {
            return Err(FormatError::UnsupportedVersion {
                found: dump.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(dump)
    }

    pub fn write(&self, path: &Path) -> Result<(), FormatError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, FormatError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
