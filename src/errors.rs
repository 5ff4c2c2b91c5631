//! Unified error types for the bot and its marketplace core.

use crate::core::validate::Shape;
use thiserror::Error;

/// Every failure the crate can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or a non-2xx response from an upstream API.
    #[error("Transport error: {message}")]
    Transport {
        /// HTTP status when the upstream answered at all
        status: Option<u16>,
        /// Human-readable cause
        message: String,
    },

    /// The upstream payload did not have the expected shape.
    #[error("Unexpected response shape: expected {expected}, got {actual}")]
    Shape {
        /// Shape the caller asked for
        expected: Shape,
        /// Shape actually received
        actual: Shape,
    },

    /// A well-formed but empty result.
    #[error("No {what} found")]
    EmptyResult {
        /// What was being looked up (e.g. "inscriptions")
        what: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport {
            status: value.status().map(|s| s.as_u16()),
            message: value.to_string(),
        }
    }
}

impl Error {
    /// Message shown to the Discord user when a command fails with this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Shape { .. } | Self::Json(_) => "Unexpected API response format.".to_string(),
            Self::EmptyResult { what } => format!("No {what} found for this collection."),
            Self::Transport {
                status: Some(404), ..
            } => "Collection not found on the marketplace.".to_string(),
            Self::Transport { .. } => {
                "An error occurred while contacting the marketplace API.".to_string()
            }
            Self::Csv(_) | Self::Io(_) => {
                "An error occurred while generating the CSV file.".to_string()
            }
            _ => format!("An error occurred: {self}"),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
