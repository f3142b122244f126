//! M-dwarf planet occurrence table.
//!
//! Kepler-derived per-star planet probabilities keyed by orbital period
//! bins. Held as an immutable configuration value passed to the generator,
//! never as module-level state.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use selection::ConfigurationError;

use crate::sampling::MDWARF_RADIUS_KM;

const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11; // N m^2 / kg^2
const SOLAR_MASS_KG: f64 = 2.0e30;
const MDWARF_MASS_KG: f64 = 0.2 * SOLAR_MASS_KG;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Orbital distance a/R* for a planet of the given period around a
/// reference M-dwarf (M = 0.2 solar masses, R = 0.3 solar radii).
///
/// Kepler's third law gives the semimajor axis; dividing by the stellar
/// radius yields the dimensionless distance governing transit geometry.
pub fn a_over_r(period_days: f64) -> f64 {
    let period_s = period_days * SECONDS_PER_DAY;
    let a_m = (period_s.powi(2) * GRAVITATIONAL_CONSTANT * MDWARF_MASS_KG / (4.0 * PI * PI))
        .powf(1.0 / 3.0);
    let a_km = a_m / 1000.0;
    a_km / MDWARF_RADIUS_KM
}

/// Per-period-bin planet occurrence probabilities (in percent) with the
/// orbital distances they imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdwarfPlanetTable {
    probabilities: Vec<f64>,
    distances: Vec<f64>,
}

impl MdwarfPlanetTable {
    /// Build a table from occurrence probabilities (percent) and their
    /// orbital period bins (days).
    pub fn new(
        probabilities: Vec<f64>,
        periods_days: Vec<f64>,
    ) -> Result<Self, ConfigurationError> {
        if probabilities.len() != periods_days.len() {
            return Err(ConfigurationError::LengthMismatch {
                left: probabilities.len(),
                right: periods_days.len(),
            });
        }
        Ok(Self::from_parts(probabilities, &periods_days))
    }

    fn from_parts(probabilities: Vec<f64>, periods_days: &[f64]) -> Self {
        let distances = periods_days
            .iter()
            .map(|&p| a_over_r(p).round())
            .collect();
        Self {
            probabilities,
            distances,
        }
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Draw one star's planets: each bin contributes a planet at its
    /// orbital distance with the bin's probability (uniform percent roll).
    pub fn choose_planets(&self, rng: &mut ChaChaRng) -> Vec<f64> {
        let mut planets = Vec::new();
        for (probability, distance) in self.probabilities.iter().zip(&self.distances) {
            let roll: f64 = rng.random_range(0.0..100.0);
            if roll <= *probability {
                planets.push(*distance);
            }
        }
        planets
    }
}

impl Default for MdwarfPlanetTable {
    /// The literature occurrence-rate grid: planet radius classes by
    /// orbital period bins, flattened row-major. Probabilities are in
    /// percent of stars hosting such a planet.
    fn default() -> Self {
        #[rustfmt::skip]
        let probabilities = vec![
            0.000, 0.008, 0.18, 0.18, 0.36, 0.51, 0.32, 0.21, 0.42, 0.080,
            0.000, 0.006, 0.17, 0.42, 1.1, 1.4, 0.81, 1.6, 1.7, 0.16,
            0.000, 0.004, 0.23, 0.96, 2.7, 3.8, 4.6, 5.8, 4.2, 1.1,
            0.002, 0.009, 0.42, 1.8, 6.4, 9.3, 10.0, 12.0, 9.6, 4.5,
            0.061, 0.27, 1.2, 2.5, 6.7, 13.0, 14.0, 12.0, 8.3, 10.0,
            0.46, 1.4, 3.5, 5.7, 10.0, 13.0, 16.0, 6.4, 10.0, 19.0,
            0.40, 1.5, 4.4, 5.5, 10.0, 12.0, 11.0,
        ];
        #[rustfmt::skip]
        let periods_days = [
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0, 40.0, 80.0, 100.0,
            0.7, 1.0, 2.0, 4.0, 7.0, 12.0, 20.0,
        ];
        Self::from_parts(probabilities, &periods_days)
    }
}
