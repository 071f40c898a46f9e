//! Error types for gesture configuration and scenario loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid gesture config: {0}")]
    InvalidConfig(String),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("unknown debug key: {0}")]
    UnknownKey(String),
}
