//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid configuration, element registry failures, image
//! persistence, IO, and generic errors. A placement planner returning fewer
//! positions than requested is deliberately not represented here; it is
//! expected backpressure, not a failure.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown element type '{name}'")]
    UnknownElementType { name: String },

    #[error("invalid element type '{name}': {reason}")]
    InvalidElementType { name: String, reason: String },

    #[error("failed to persist image to '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn unknown_element_message_names_the_type() {
        let err = Error::UnknownElementType {
            name: "castle".into(),
        };
        assert_eq!(err.to_string(), "unknown element type 'castle'");
    }
}
