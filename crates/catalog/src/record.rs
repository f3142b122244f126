//! The per-trial population record.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use inclination::lower_limit;
use population::Population;

use crate::error::FormatError;

/// Current record format version.
pub const CATALOG_VERSION: u32 = 1;

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// One star's persisted measurement pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub sin_i: f64,
    pub sin_i_uncertainty: f64,
}

/// The externally visible representation of one generated population:
/// the measured (sin(i), uncertainty) pairs plus the ground-truth transit
/// index list, ready for reuse by the cutoff evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    pub version: u32,
    /// Generation timestamp, unix seconds.
    pub generated_at: u64,
    pub stars: Vec<StarRecord>,
    pub transit_indices: Vec<usize>,
}

impl PopulationRecord {
    /// Capture a generated population.
    ///
    /// sin(i) values are stored with the lower-limit correction already
    /// applied, matching what the survey carries forward after its bias
    /// pass.
    pub fn from_population(population: &Population) -> Self {
        let stars = population
            .stars
            .iter()
            .map(|s| {
                let sin_i = if s.measured_sin_i > 1.0 {
                    lower_limit(s.measured_sin_i, s.sin_i_uncertainty)
                } else {
                    s.measured_sin_i
                };
                StarRecord {
                    sin_i,
                    sin_i_uncertainty: s.sin_i_uncertainty,
                }
            })
            .collect();
        Self {
            version: CATALOG_VERSION,
            generated_at: unix_now(),
            stars,
            transit_indices: population.transit_indices.clone(),
        }
    }

    /// The sin(i) column, in star order.
    pub fn sin_is(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.sin_i).collect()
    }

    /// The uncertainty column, in star order.
    pub fn sin_i_uncertainties(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.sin_i_uncertainty).collect()
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        let record: Self = serde_json::from_str(text)?;
        if record.version != CATALOG_VERSION {
            return Err(FormatError::UnsupportedVersion {
                found: record.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(record)
    }

    pub fn write(&self, path: &Path) -> Result<(), FormatError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, FormatError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
