//! Lower-limit correction for noise-invalidated sin(i) measurements.
//!
//! When a derived sin(i) exceeds the physical ceiling of 1.0 the survey does
//! not discard the measurement; it substitutes the most conservative value
//! consistent with the 1-sigma error bar instead.

use crate::error::DomainError;
use crate::geometry::{sin_inclination, sin_uncertainty};

/// Calculate the lower limit of a sin(i) measurement.
///
/// Returns `sin_i - sin_i_unc` whenever that is at most 1.0 (the corrected,
/// physically plausible lower bound, which may be negative). If even the
/// lower bound stays above 1.0 the measurement is uncorrectable and the
/// original sin(i) is returned unchanged so downstream classification can
/// still see it.
///
/// Note this is only idempotent while the uncertainty is held fixed: a
/// corrected value re-submitted with a fresh uncertainty moves again.
///
/// # Example
/// ```
/// use inclination::lower_limit;
///
/// let low = lower_limit(1.0908342487974698, 0.12651281002313186);
/// assert!((low - 0.9643214387743379).abs() < 1e-12);
///
/// // Uncertainty too small to reach the valid range: unchanged.
/// let same = lower_limit(1.199411835930064, 0.1718637738930092);
/// assert_eq!(same, 1.199411835930064);
/// ```
pub fn lower_limit(sin_i: f64, sin_i_unc: f64) -> f64 {
    let low = sin_i - sin_i_unc;
    if low <= 1.0 {
        return low;
    }
    sin_i
}

/// Calculate the inclination implied by the lower-limit sin(i).
///
/// Fails when the lower bound falls outside the arcsine domain, including
/// the uncorrectable case where `sin_i - sin_i_unc` is still above 1.0.
///
/// # Example
/// ```
/// use inclination::lower_limit_inclination;
///
/// let inc = lower_limit_inclination(1.0908342487974698, 0.12651281002313186).unwrap();
/// assert!((inc - 1.3028681155989101).abs() < 1e-12);
/// ```
pub fn lower_limit_inclination(sin_i: f64, sin_i_unc: f64) -> Result<f64, DomainError> {
    let low = sin_i - sin_i_unc;
    if !(-1.0..=1.0).contains(&low) {
        return Err(DomainError::ArcsineDomain { value: low });
    }
    Ok(low.asin())
}

/// Derive sin(i) and its uncertainty from raw observables and apply the
/// lower-limit correction in one step.
pub fn corrected_sin_i(
    vsini: f64,
    period: f64,
    radius: f64,
    vsini_err: f64,
    period_err: f64,
    radius_err: f64,
) -> Result<f64, DomainError> {
    let sin_i = sin_inclination(vsini, period, radius, false)?;
    let unc = sin_uncertainty(vsini, period, radius, vsini_err, period_err, radius_err, false)?;
    Ok(lower_limit(sin_i, unc))
}
