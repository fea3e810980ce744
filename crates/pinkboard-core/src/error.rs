//! Error types for Pinkboard

use thiserror::Error;

/// The main error type for Pinkboard operations
#[derive(Debug, Error)]
pub enum PinkboardError {
    #[error("Cannot scale a zero-length vector to length {target}")]
    DegenerateVector { target: f32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

/// Result type alias for Pinkboard operations
pub type Result<T> = std::result::Result<T, PinkboardError>;

impl From<toml::de::Error> for PinkboardError {
    fn from(err: toml::de::Error) -> Self {
        PinkboardError::TomlParse(err.to_string())
    }
}

impl From<toml::ser::Error> for PinkboardError {
    fn from(err: toml::ser::Error) -> Self {
        PinkboardError::TomlSer(err.to_string())
    }
}
