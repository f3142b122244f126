use thiserror::Error;

/// Physically invalid input to a geometry calculation.
///
/// These are programming or input errors, never transient conditions, so
/// callers are expected to propagate them rather than retry or default.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// vsini, period, or radius was zero or negative where a division
    /// would be physically undefined.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// An arcsine argument fell outside [-1, 1].
    #[error("arcsine argument {value} is outside [-1, 1]")]
    ArcsineDomain { value: f64 },
}
