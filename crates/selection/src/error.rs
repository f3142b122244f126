use thiserror::Error;

/// Malformed selection or generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("population is empty")]
    EmptyPopulation,

    #[error("cutoff count must be positive")]
    NoCutoffs,

    #[error("trial count must be positive")]
    NoTrials,

    #[error("input length mismatch: {left} sin(i) values vs {right} uncertainties")]
    LengthMismatch { left: usize, right: usize },

    #[error("{planets} planets per star but {distances} orbital distances configured")]
    PlanetDistanceMismatch { planets: usize, distances: usize },

    #[error("inclination CDF table needs at least 2 points, got {resolution}")]
    CdfResolution { resolution: usize },
}
