//! Error Types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid platform version '{input}': {reason}")]
    InvalidPlatformVersion { input: String, reason: String },

    #[error("Invalid version range '{input}': {reason}")]
    InvalidVersionRange { input: String, reason: String },

    #[error("Unknown language '{0}' (expected one of: java, kotlin, groovy)")]
    UnknownLanguage(String),

    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid project description: {0}")]
    InvalidDescription(#[from] serde_json::Error),
}
