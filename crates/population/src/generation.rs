//! Population generation pipeline.
//!
//! Truths first (isotropic inclinations, mode-dependent periods and radii),
//! then planet assignment with geometric transit visibility, then the
//! deterministic measurement errors and derived sin(i) columns, and finally
//! one bias pass at the configured cutoff to tag each star.

use std::f64::consts::PI;

use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use inclination::{inclination, sin_inclination, sin_uncertainty, DomainError};
use selection::{bias, ConfigurationError};

use crate::mdwarf::MdwarfPlanetTable;
use crate::observable::{PlanetAssignment, Population, StellarObservable};
use crate::sampling::{sample_period, sample_radius, DwarfMode, InclinationCdf};

/// Failure while generating a population.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Parameters for one generated population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationConfig {
    /// Number of stars.
    pub size: usize,
    /// sin(i) cutoff for the tagging bias pass.
    pub cutoff: f64,
    /// a/R* per planet slot (ordinary mode); length must equal
    /// `planets_per_star`.
    pub orbital_distances: Vec<f64>,
    /// Fraction of stars hosting a planet in each slot (ordinary mode).
    pub intrinsic_frequency: f64,
    /// Relative error applied to vsini (0.1 from the literature).
    pub vsini_error: f64,
    /// Relative error applied to the period (0.05, literature average).
    pub period_error: f64,
    /// Relative error on the assumed radius (0.1).
    pub radius_error: f64,
    /// Restrict the tagging bias pass to the top quantile.
    pub top_quantile: bool,
    /// Ordinary dwarfs or M-dwarfs.
    pub mode: DwarfMode,
    /// Occurrence table used in M-dwarf mode.
    pub mdwarf_table: MdwarfPlanetTable,
    /// Planets generated per star (ordinary mode).
    pub planets_per_star: usize,
    /// Resolution of the isotropic-inclination CDF table.
    pub cdf_resolution: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            cutoff: 0.95,
            orbital_distances: vec![20.0],
            intrinsic_frequency: 1.0,
            vsini_error: 0.1,
            period_error: 0.05,
            radius_error: 0.1,
            top_quantile: true,
            mode: DwarfMode::Ordinary,
            mdwarf_table: MdwarfPlanetTable::default(),
            planets_per_star: 1,
            cdf_resolution: InclinationCdf::DEFAULT_RESOLUTION,
        }
    }
}

struct Truth {
    inclination: f64,
    vsini: f64,
    period: f64,
    radius: f64,
    sin_i: f64,
}

/// Generate a population of `config.size` stars.
///
/// Measured values carry fixed relative offsets (`measured = true +
/// rate * true`), not resampled noise, and the assumed radius is the
/// mode's reference radius rather than each star's true radius. That
/// mismatch is the whole point: it is what pushes measured sin(i) past
/// 1.0 for highly inclined stars.
pub fn generate_population(
    rng: &mut ChaChaRng,
    config: &PopulationConfig,
) -> Result<Population, GenerationError> {
    if config.size == 0 {
        return Err(ConfigurationError::EmptyPopulation.into());
    }
    let n = config.size;
    tracing::debug!(size = n, mode = ?config.mode, "generating stellar population");

    let cdf = InclinationCdf::new(config.cdf_resolution)?;
    let mut truths = Vec::with_capacity(n);
    for _ in 0..n {
        let inc = cdf.sample(rng);
        let radius = sample_radius(rng, config.mode);
        let period = sample_period(rng, config.mode);
        // vsini chosen so the equatorial velocity matches the rotation.
        let vsini = (2.0 * PI * radius / period) * inc.sin();
        let sin_i = sin_inclination(vsini, period, radius, false)?;
        truths.push(Truth {
            inclination: inc,
            vsini,
            period,
            radius,
            sin_i,
        });
    }

    let (planet_lists, transit_indices) = match config.mode {
        DwarfMode::Ordinary => assign_planets(rng, config, &truths)?,
        DwarfMode::MDwarf => evaluate_table_planets(rng, &config.mdwarf_table, &truths),
    };

    let reference_radius = config.mode.reference_radius_km();
    let mut stars = Vec::with_capacity(n);
    for (truth, planets) in truths.iter().zip(planet_lists) {
        let measured_radius = reference_radius;
        let radius_err = config.radius_error * measured_radius;
        let period_err = config.period_error * truth.period;
        let measured_period = truth.period + period_err;
        let vsini_err = config.vsini_error * truth.vsini;
        let measured_vsini = truth.vsini + vsini_err;

        let measured_sin_i =
            sin_inclination(measured_vsini, measured_period, measured_radius, false)?;
        let sin_i_uncertainty = sin_uncertainty(
            measured_vsini,
            measured_period,
            measured_radius,
            vsini_err,
            period_err,
            radius_err,
            false,
        )?;
        let measured_inclination =
            inclination(measured_vsini, measured_period, measured_radius, false)?;

        let recovered = (measured_sin_i - truth.sin_i).abs() <= sin_i_uncertainty;
        let has_transit = planets.iter().any(|p| p.transit_visible);

        stars.push(StellarObservable {
            true_inclination: truth.inclination,
            true_vsini: truth.vsini,
            true_period: truth.period,
            true_radius: truth.radius,
            true_sin_i: truth.sin_i,
            measured_inclination,
            measured_vsini,
            measured_period,
            measured_radius,
            measured_sin_i,
            sin_i_uncertainty,
            planets,
            has_transit,
            recovered,
            selected: false,
            transit_detected: false,
        });
    }

    // Tag each star with the survey's decision at the configured cutoff.
    let mut sin_is: Vec<f64> = stars.iter().map(|s| s.measured_sin_i).collect();
    let uncertainties: Vec<f64> = stars.iter().map(|s| s.sin_i_uncertainty).collect();
    let decision = bias(
        &mut sin_is,
        &uncertainties,
        config.cutoff,
        &transit_indices,
        config.top_quantile,
    )?;
    for &i in &decision.selected {
        stars[i].selected = true;
    }
    for &i in &decision.detected {
        stars[i].transit_detected = true;
    }

    tracing::debug!(
        transits = transit_indices.len(),
        selected = decision.selected.len(),
        "population generated"
    );

    Ok(Population {
        stars,
        transit_indices,
    })
}

/// Ordinary mode: population-level binomial planet assignment.
///
/// Each planet slot hosts `floor(freq * n)` stars chosen by shuffling, and
/// slot `k` orbits at `orbital_distances[k]`. A transit is visible iff
/// `|a/R* * cos(i_true)| < 1`.
fn assign_planets(
    rng: &mut ChaChaRng,
    config: &PopulationConfig,
    truths: &[Truth],
) -> Result<(Vec<Vec<PlanetAssignment>>, Vec<usize>), ConfigurationError> {
    if config.orbital_distances.len() != config.planets_per_star {
        return Err(ConfigurationError::PlanetDistanceMismatch {
            planets: config.planets_per_star,
            distances: config.orbital_distances.len(),
        });
    }

    let n = truths.len();
    let hosts = (config.intrinsic_frequency * n as f64) as usize;
    let mut planet_lists = vec![Vec::new(); n];
    let mut transit_indices = Vec::new();

    for &a_over_r in &config.orbital_distances {
        let mut assignment: Vec<bool> = (0..n).map(|j| j < hosts).collect();
        assignment.shuffle(rng);
        for (j, has_planet) in assignment.iter().enumerate() {
            if !has_planet {
                continue;
            }
            let transit_visible = (a_over_r * truths[j].inclination.cos()).abs() < 1.0;
            if transit_visible {
                transit_indices.push(j);
            }
            planet_lists[j].push(PlanetAssignment {
                a_over_r,
                transit_visible,
            });
        }
    }

    transit_indices.sort_unstable();
    transit_indices.dedup();
    Ok((planet_lists, transit_indices))
}

/// M-dwarf mode: per-star draws from the occurrence table.
fn evaluate_table_planets(
    rng: &mut ChaChaRng,
    table: &MdwarfPlanetTable,
    truths: &[Truth],
) -> (Vec<Vec<PlanetAssignment>>, Vec<usize>) {
    let mut planet_lists = Vec::with_capacity(truths.len());
    let mut transit_indices = Vec::new();

    for (j, truth) in truths.iter().enumerate() {
        let mut planets = Vec::new();
        for a_over_r in table.choose_planets(rng) {
            let transit_visible = (a_over_r * truth.inclination.cos()).abs() < 1.0;
            if transit_visible {
                transit_indices.push(j);
            }
            planets.push(PlanetAssignment {
                a_over_r,
                transit_visible,
            });
        }
        planet_lists.push(planets);
    }

    transit_indices.sort_unstable();
    transit_indices.dedup();
    (planet_lists, transit_indices)
}
