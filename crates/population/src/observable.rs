//! Data model for one simulated star and a generated population.

use serde::{Deserialize, Serialize};

/// One simulated planet around a star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetAssignment {
    /// Orbital semimajor axis over stellar radius.
    pub a_over_r: f64,
    /// Whether the planet's orbit geometrically occults the star,
    /// computed from the star's **true** inclination.
    pub transit_visible: bool,
}

/// One simulated star or brown dwarf.
///
/// True values are what the star actually is; measured values carry the
/// configured deterministic relative errors. `measured_sin_i` may
/// legitimately exceed 1.0: that is the propagated-noise signal the bias
/// engine reinterprets, while `true_sin_i` is always in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarObservable {
    /// True inclination in radians, on [0, pi].
    pub true_inclination: f64,
    /// True projected rotational velocity (km/s).
    pub true_vsini: f64,
    /// True rotational period (seconds).
    pub true_period: f64,
    /// True radius (km).
    pub true_radius: f64,
    /// sin of the true inclination, always in [0, 1].
    pub true_sin_i: f64,

    /// Inclination derived from the measured values (radians, clamped).
    pub measured_inclination: f64,
    /// vsini with the configured relative error applied.
    pub measured_vsini: f64,
    /// Period with the configured relative error applied.
    pub measured_period: f64,
    /// The radius the survey assumes (the mode's reference radius).
    pub measured_radius: f64,
    /// sin(i) derived from measured values; may exceed 1.0.
    pub measured_sin_i: f64,
    /// Quadrature-propagated absolute uncertainty, non-negative.
    pub sin_i_uncertainty: f64,

    /// Planets assigned to this star.
    pub planets: Vec<PlanetAssignment>,
    /// Ground truth: at least one planet's transit is geometrically
    /// visible.
    pub has_transit: bool,

    /// Diagnostic: the measured sin(i) landed within one uncertainty of
    /// the truth. Not consulted by downstream selection.
    pub recovered: bool,
    /// The bias pass at the configured cutoff chose this star.
    pub selected: bool,
    /// The star was selected and its transit is visible.
    pub transit_detected: bool,
}

impl StellarObservable {
    pub fn has_planet(&self) -> bool {
        !self.planets.is_empty()
    }
}

/// An ordered, fixed-size population of simulated stars.
///
/// Immutable once generated; the selection pipeline reads it and works on
/// copies of the measured sin(i) values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Population {
    pub stars: Vec<StellarObservable>,
    /// Sorted, deduplicated indices of stars with a visible transit.
    pub transit_indices: Vec<usize>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// The measured sin(i) column, in star order.
    pub fn measured_sin_is(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.measured_sin_i).collect()
    }

    /// The sin(i) uncertainty column, in star order.
    pub fn sin_i_uncertainties(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.sin_i_uncertainty).collect()
    }
}
