//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
///
/// The first three variants are validation failures reported by
/// [`resolve`](super::resolve); the rest come from reading and parsing the
/// config file before validation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("invalid format for `{0}`")]
    InvalidFormat(&'static str),

    #[error("value out of range for `{0}`")]
    OutOfRange(&'static str),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error (json)")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Name of the offending field, for validation errors.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField(name) | Self::InvalidFormat(name) | Self::OutOfRange(name) => {
                Some(*name)
            }
            Self::Io(..) | Self::Toml(_) | Self::Json(_) => None,
        }
    }
}
