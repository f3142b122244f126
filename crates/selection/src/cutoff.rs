//! Sweeping the bias engine across a grid of sin(i) cutoffs.

use crate::bias::bias;
use crate::error::ConfigurationError;

/// Generate `count` evenly spaced cutoff values on [0, 1] inclusive.
pub fn cutoff_grid(count: usize) -> Result<Vec<f64>, ConfigurationError> {
    if count == 0 {
        return Err(ConfigurationError::NoCutoffs);
    }
    if count == 1 {
        return Ok(vec![0.0]);
    }
    Ok((0..count)
        .map(|k| k as f64 / (count - 1) as f64)
        .collect())
}

/// The best transit yield seen during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitYield {
    /// Highest number of detected transits at any single cutoff.
    pub detected: usize,
    /// Total objects observed at the cutoff that achieved it.
    pub observed: usize,
}

/// Fractional-increase tracking, present when requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FractionalSweep {
    /// Per-cutoff increase of the hit rate over the whole-population
    /// transit fraction. Same length as the cutoff grid.
    pub increases: Vec<f64>,
    /// Cutoff maximizing the fractional increase (0.0 if none exceeded it).
    pub ideal_cutoff: f64,
}

/// Aggregate result of evaluating a population across all cutoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffSweep {
    /// Hit rate per cutoff, in cutoff order.
    pub hit_rates: Vec<f64>,
    /// Cutoff achieving the maximum hit rate. Stays at the 0.0 default
    /// when no cutoff produced a positive rate.
    pub ideal_cutoff: f64,
    /// Best transit yield across the sweep.
    pub best: TransitYield,
    /// Fractional-increase analysis, when enabled.
    pub fractional: Option<FractionalSweep>,
}

/// Evaluate every cutoff against one population's measured sin(i) values.
///
/// Hit-rate denominators differ by mode, a policy preserved deliberately:
/// with `top_quantile` the rate is detected transits over the *retained*
/// selection (0 when nothing was detected); without it, detected transits
/// over every object passing the cutoff (0 when nothing passed).
///
/// Lower-limit corrections are applied to a working copy of `sin_is` that
/// persists across the sweep, so an invalid measurement is corrected once
/// and its substituted value is what later cutoffs see.
///
/// When `fractional_increase` is set, each cutoff's hit rate is also
/// compared against the whole-population transit fraction; the increase is
/// defined as exactly 0 whenever either term is exactly 0. The sweep always
/// covers the full cutoff grid regardless of this flag.
pub fn evaluate_cutoffs(
    cutoffs: &[f64],
    sin_is: &[f64],
    sin_i_uncs: &[f64],
    transit_indices: &[usize],
    fractional_increase: bool,
    top_quantile: bool,
) -> Result<CutoffSweep, ConfigurationError> {
    if cutoffs.is_empty() {
        return Err(ConfigurationError::NoCutoffs);
    }
    if sin_is.is_empty() {
        return Err(ConfigurationError::EmptyPopulation);
    }
    if sin_is.len() != sin_i_uncs.len() {
        return Err(ConfigurationError::LengthMismatch {
            left: sin_is.len(),
            right: sin_i_uncs.len(),
        });
    }

    let n = sin_is.len();
    tracing::debug!(
        cutoffs = cutoffs.len(),
        population = n,
        transits = transit_indices.len(),
        "sweeping sin(i) cutoffs"
    );

    let mut working = sin_is.to_vec();
    let baseline = transit_indices.len() as f64 / n as f64;

    let mut hit_rates = Vec::with_capacity(cutoffs.len());
    let mut ideal_cutoff = 0.0;
    let mut best_rate = 0.0;
    let mut best = TransitYield::default();
    let mut increases = Vec::with_capacity(if fractional_increase { cutoffs.len() } else { 0 });
    let mut ideal_fractional = 0.0;
    let mut best_increase = 0.0;

    for &cut in cutoffs {
        let selection = bias(&mut working, sin_i_uncs, cut, transit_indices, top_quantile)?;

        let hit_rate = if top_quantile {
            if selection.detected.is_empty() {
                0.0
            } else {
                selection.detected.len() as f64 / selection.selected.len() as f64
            }
        } else if selection.selected.is_empty() {
            0.0
        } else {
            selection.detected.len() as f64 / selection.observed_count as f64
        };
        hit_rates.push(hit_rate);

        if hit_rate > best_rate {
            best_rate = hit_rate;
            ideal_cutoff = cut;
        }
        if selection.detected.len() > best.detected {
            best = TransitYield {
                detected: selection.detected.len(),
                observed: selection.observed_count,
            };
        }

        if fractional_increase {
            let increase = if hit_rate == 0.0 || baseline == 0.0 {
                0.0
            } else {
                hit_rate - baseline
            };
            increases.push(increase);
            if increase > best_increase {
                best_increase = increase;
                ideal_fractional = cut;
            }
        }
    }

    let fractional = fractional_increase.then_some(FractionalSweep {
        increases,
        ideal_cutoff: ideal_fractional,
    });

    Ok(CutoffSweep {
        hit_rates,
        ideal_cutoff,
        best,
        fractional,
    })
}
