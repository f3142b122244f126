//! Sampling distributions for stellar truths.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use selection::ConfigurationError;

/// 1 Jupiter radius in km (NASA fact sheet).
pub const JUPITER_RADIUS_KM: f64 = 71492.0;

/// 1 solar radius in km (NASA fact sheet).
pub const SOLAR_RADIUS_KM: f64 = 695_700.0;

/// Reference M-dwarf radius: 0.3 solar radii.
pub const MDWARF_RADIUS_KM: f64 = 0.3 * SOLAR_RADIUS_KM;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Which stellar population's parameters to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DwarfMode {
    /// Ordinary (brown) dwarfs: Jupiter-sized, fast rotators.
    #[default]
    Ordinary,
    /// M-dwarfs: 0.3 solar radii, slower rotators.
    MDwarf,
}

impl DwarfMode {
    /// The radius a survey would assume for every member of this
    /// population, in km.
    pub fn reference_radius_km(&self) -> f64 {
        match self {
            Self::Ordinary => JUPITER_RADIUS_KM,
            Self::MDwarf => MDWARF_RADIUS_KM,
        }
    }

    /// Rotational period range in seconds.
    pub fn period_range_s(&self) -> (f64, f64) {
        match self {
            Self::Ordinary => (2.0 * SECONDS_PER_HOUR, 8.0 * SECONDS_PER_HOUR),
            Self::MDwarf => (2.4 * SECONDS_PER_HOUR, 24.0 * SECONDS_PER_HOUR),
        }
    }
}

/// Discretized inverse CDF for the isotropic inclination distribution.
///
/// Isotropically oriented spin axes have sin-weighted inclination density,
/// `P(i) = sin(i) / 2` on [0, pi], not flat density. Uniform draws are
/// inverted through a tabulated `CDF(x) = (1 - cos x) / 2` with linear
/// interpolation between table points.
#[derive(Debug, Clone, PartialEq)]
pub struct InclinationCdf {
    angles: Vec<f64>,
    cumulative: Vec<f64>,
}

impl InclinationCdf {
    /// Default table resolution.
    pub const DEFAULT_RESOLUTION: usize = 100;

    /// Build a table with `resolution` points across [0, pi].
    pub fn new(resolution: usize) -> Result<Self, ConfigurationError> {
        if resolution < 2 {
            return Err(ConfigurationError::CdfResolution { resolution });
        }
        Ok(Self::build(resolution))
    }

    fn build(resolution: usize) -> Self {
        let angles: Vec<f64> = (0..resolution)
            .map(|k| PI * k as f64 / (resolution - 1) as f64)
            .collect();
        let cumulative = angles.iter().map(|&x| (1.0 - x.cos()) / 2.0).collect();
        Self { angles, cumulative }
    }

    pub fn resolution(&self) -> usize {
        self.angles.len()
    }

    /// Draw one inclination in radians on [0, pi].
    pub fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        let draw: f64 = rng.random();
        self.invert(draw)
    }

    /// Invert a quantile through the table by linear interpolation.
    ///
    /// A quantile of exactly 0.0 is floored to the smallest positive
    /// value: it would otherwise land on the degenerate pole at
    /// inclination 0, where sin(i) = 0 breaks the vsini derivation.
    pub(crate) fn invert(&self, quantile: f64) -> f64 {
        let quantile = quantile.max(f64::MIN_POSITIVE);
        let last = self.cumulative.len() - 1;
        if quantile >= self.cumulative[last] {
            return self.angles[last];
        }
        // The cumulative table is strictly increasing on (0, pi), and the
        // floor and guard above keep `upper` inside [1, last].
        let upper = self.cumulative.partition_point(|&c| c < quantile);
        let (c0, c1) = (self.cumulative[upper - 1], self.cumulative[upper]);
        let (a0, a1) = (self.angles[upper - 1], self.angles[upper]);
        a0 + (quantile - c0) / (c1 - c0) * (a1 - a0)
    }
}

impl Default for InclinationCdf {
    fn default() -> Self {
        Self::build(Self::DEFAULT_RESOLUTION)
    }
}

/// Sample from a Gaussian (normal) distribution using Box-Muller.
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample a rotational period in seconds, uniform within the mode's range.
pub fn sample_period(rng: &mut ChaChaRng, mode: DwarfMode) -> f64 {
    let (low, high) = mode.period_range_s();
    rng.random_range(low..high)
}

/// Sample a stellar radius in km.
///
/// Gaussian around the mode's reference radius with a standard deviation
/// of 10%/3 of the reference, so ~99.7% of draws land within 10%.
pub fn sample_radius(rng: &mut ChaChaRng, mode: DwarfMode) -> f64 {
    let reference = mode.reference_radius_km();
    sample_gaussian(rng, reference, reference * 0.1 / 3.0)
}
