//! sin(i) geometry and quadrature uncertainty propagation.

use std::f64::consts::PI;

use crate::error::DomainError;

fn require_positive(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositive { name, value });
    }
    Ok(())
}

/// Round to 4 decimal places, used for degree-valued outputs.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Calculate sin(i) of an object from its projected rotational velocity.
///
/// ```text
/// sin(i) = vsini * period / (2 * pi * radius)
/// ```
///
/// With `clamp_to_one` set, results at or above 1.0 are clamped to exactly
/// 1.0 (the physical ceiling). Unclamped results above 1.0 are legitimate
/// outputs: they signal noise-induced invalidity that downstream selection
/// reinterprets via the lower-limit correction.
///
/// # Arguments
/// * `vsini` - Projected rotational velocity (km/s)
/// * `period` - Rotational period (seconds)
/// * `radius` - Stellar radius (km)
/// * `clamp_to_one` - Clamp results >= 1.0 to exactly 1.0
///
/// # Example
/// ```
/// use inclination::sin_inclination;
///
/// let raw = sin_inclination(35.0, 14000.0, 71492.0, false).unwrap();
/// assert!((raw - 1.0908342487974698).abs() < 1e-12);
///
/// let clamped = sin_inclination(35.0, 14000.0, 71492.0, true).unwrap();
/// assert_eq!(clamped, 1.0);
/// ```
pub fn sin_inclination(
    vsini: f64,
    period: f64,
    radius: f64,
    clamp_to_one: bool,
) -> Result<f64, DomainError> {
    require_positive("vsini", vsini)?;
    require_positive("period", period)?;
    require_positive("radius", radius)?;

    let sin_i = vsini * period / (2.0 * PI * radius);
    if clamp_to_one && sin_i >= 1.0 {
        return Ok(1.0);
    }
    Ok(sin_i)
}

/// Calculate the inclination of an object in radians (or degrees).
///
/// Uses the clamped sin(i) so that noisy measurements slightly above the
/// physical ceiling still yield a 90-degree inclination. Degree output is
/// rounded to 4 decimal places.
///
/// # Example
/// ```
/// use inclination::inclination;
///
/// let rad = inclination(23.0, 14000.0, 71492.0, false).unwrap();
/// assert!((rad - 0.79925082577082).abs() < 1e-12);
///
/// let deg = inclination(23.0, 14000.0, 71492.0, true).unwrap();
/// assert_eq!(deg, 45.7937);
/// ```
pub fn inclination(
    vsini: f64,
    period: f64,
    radius: f64,
    in_degrees: bool,
) -> Result<f64, DomainError> {
    let sin_i = sin_inclination(vsini, period, radius, true)?;
    // Clamping keeps sin(i) <= 1, but guard against caller misuse anyway.
    if !(-1.0..=1.0).contains(&sin_i) {
        return Err(DomainError::ArcsineDomain { value: sin_i });
    }
    let result = sin_i.asin();
    if in_degrees {
        return Ok(round4(result.to_degrees()));
    }
    Ok(result)
}

/// Calculate the absolute uncertainty of a derived sin(i).
///
/// Relative uncertainties combine in quadrature:
///
/// ```text
/// unc = sin(i) * sqrt((vsini_err/vsini)^2 + (period_err/period)^2 + (radius_err/radius)^2)
/// ```
///
/// The **unclamped** sin(i) is used here; clamping would understate the
/// uncertainty of measurements already past the ceiling. Degree output is
/// rounded to 4 decimal places.
///
/// # Example
/// ```
/// use inclination::sin_uncertainty;
///
/// let unc = sin_uncertainty(23.0, 14000.0, 71492.0, 3.0, 900.0, 7150.0, false).unwrap();
/// assert!((unc - 0.12651281002313186).abs() < 1e-12);
///
/// let deg = sin_uncertainty(23.0, 14000.0, 71492.0, 3.0, 900.0, 7150.0, true).unwrap();
/// assert_eq!(deg, 7.2487);
/// ```
pub fn sin_uncertainty(
    vsini: f64,
    period: f64,
    radius: f64,
    vsini_err: f64,
    period_err: f64,
    radius_err: f64,
    in_degrees: bool,
) -> Result<f64, DomainError> {
    let sin_i = sin_inclination(vsini, period, radius, false)?;
    let quadrature = ((vsini_err / vsini).powi(2)
        + (period_err / period).powi(2)
        + (radius_err / radius).powi(2))
    .sqrt();
    let result = sin_i * quadrature;
    if in_degrees {
        return Ok(round4(result.to_degrees()));
    }
    Ok(result)
}
