//! The per-object and per-population selection decisions.

use std::cmp::Ordering;

use inclination::lower_limit;

use crate::error::ConfigurationError;

/// Fraction of the population retained when quantile restriction is on.
pub const TOP_QUANTILE: f64 = 0.2;

/// The outcome of assessing a single object against a cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    /// True only when the lower-limit correction actually changed the value.
    /// An uncorrectable measurement (lower bound still above 1.0) leaves
    /// this false even though the correction was attempted.
    pub lower_limit_used: bool,

    /// Whether the survey would have chosen this object.
    pub selected: bool,

    /// The object's sin(i) after any lower-limit substitution.
    pub sin_i: f64,
}

/// Assess one object's measured sin(i) against a survey cutoff.
///
/// Two decisions in sequence: if the measurement exceeds the physical
/// ceiling of 1.0, substitute its lower limit; then select the object iff
/// `cutoff <= sin(i) <= 1.0`.
///
/// # Example
/// ```
/// use selection::assess;
///
/// // Below the cutoff, no correction triggered.
/// let res = assess(0.8338721104131719, 0.11948557079946316, 0.95);
/// assert!(!res.lower_limit_used);
/// assert!(!res.selected);
/// assert_eq!(res.sin_i, 0.8338721104131719);
///
/// // Correction attempted but the lower bound stays above 1.0.
/// let res = assess(1.199411835930064, 0.1718637738930092, 0.95);
/// assert!(!res.lower_limit_used);
/// assert!(!res.selected);
/// assert_eq!(res.sin_i, 1.199411835930064);
/// ```
pub fn assess(sin_i: f64, sin_i_unc: f64, cutoff: f64) -> Assessment {
    let mut corrected = sin_i;
    let mut lower_limit_used = false;
    if sin_i > 1.0 {
        let low = lower_limit(sin_i, sin_i_unc);
        if low != sin_i {
            lower_limit_used = true;
        }
        corrected = low;
    }
    let selected = cutoff <= corrected && corrected <= 1.0;
    Assessment {
        lower_limit_used,
        selected,
        sin_i: corrected,
    }
}

/// Which objects a survey would observe under one cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Population indices passing the cutoff, optionally restricted to the
    /// top quantile. Without restriction these are in ascending index
    /// order; with it, in descending corrected-sin(i) order.
    pub selected: Vec<usize>,

    /// Indices of selected objects whose ground-truth transit is visible,
    /// in selected order. Always a subset of `selected`.
    pub detected: Vec<usize>,

    /// Every object passing the cutoff, counted before any quantile
    /// restriction.
    pub observed_count: usize,
}

/// Bias a population to the objects a survey would observe.
///
/// Objects whose measured sin(i) exceeds 1.0 have the lower-limit
/// correction applied, and `sin_is` is updated in place when the correction
/// changed the value; this mirrors the survey's practice of carrying the
/// corrected estimate forward.
///
/// When `top_quantile` is set, only the top `0.2 * n` (truncated) selected
/// objects are retained, ordered by `(sin_i, index)` descending. The
/// tie-break is deliberate and documented: among equal sin(i) values the
/// higher original index wins, keeping repeated sweeps reproducible.
pub fn bias(
    sin_is: &mut [f64],
    sin_i_uncs: &[f64],
    cutoff: f64,
    transit_indices: &[usize],
    top_quantile: bool,
) -> Result<Selection, ConfigurationError> {
    if sin_is.len() != sin_i_uncs.len() {
        return Err(ConfigurationError::LengthMismatch {
            left: sin_is.len(),
            right: sin_i_uncs.len(),
        });
    }
    if sin_is.is_empty() {
        return Err(ConfigurationError::EmptyPopulation);
    }

    let n = sin_is.len();
    let mut candidates: Vec<(f64, usize)> = Vec::new();
    for i in 0..n {
        let res = assess(sin_is[i], sin_i_uncs[i], cutoff);
        if res.lower_limit_used {
            sin_is[i] = res.sin_i;
        }
        if res.selected {
            candidates.push((sin_is[i], i));
        }
    }

    let observed_count = candidates.len();
    if top_quantile {
        let keep = (TOP_QUANTILE * n as f64) as usize;
        tracing::debug!(observed = observed_count, keep, "restricting to top quantile");
        candidates.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        candidates.truncate(keep);
    }

    let selected: Vec<usize> = candidates.iter().map(|&(_, i)| i).collect();
    let detected: Vec<usize> = selected
        .iter()
        .copied()
        .filter(|i| transit_indices.contains(i))
        .collect();

    Ok(Selection {
        selected,
        detected,
        observed_count,
    })
}
