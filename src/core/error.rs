use thiserror::Error;

/// Errors for API misuse and host I/O.
///
/// Bad lineups are not errors: the validator reports them as violations.
#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("No candidates to choose from")]
    EmptyCandidates,

    #[error("Invalid rotation slot: {0} (expected 1-6)")]
    InvalidSlot(u8),

    #[error("Invalid lineup: {0}")]
    InvalidLineup(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OverlapError>;
