use thiserror::Error;

/// Failure reading or writing a persisted population.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed catalog record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unsupported catalog version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}
