//! Error types for rehl

use thiserror::Error;

/// Result type alias for highlighter configuration
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors raised while configuring a highlighter.
///
/// Classification and rendering never fail, so everything here surfaces
/// at setup time: registering a pattern or loading a config file.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("A pattern style pair with the name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}
