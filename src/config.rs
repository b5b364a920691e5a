use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

const CONFIG_FILE_NAMES: &[&str] = &["jvm-compat.toml", ".jvm-compat.toml"];

/// Output rendering for resolved descriptions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Project-level defaults loaded from `jvm-compat.toml` or `.jvm-compat.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompatConfig {
    /// Language used when none is given on the command line.
    pub language: Option<String>,
    /// Platform version used when none is given on the command line.
    pub platform_version: Option<String>,
    /// Requested Java version used when none is given on the command line.
    pub java_version: Option<String>,
    /// Default output format.
    pub format: Option<OutputFormat>,
}

impl CompatConfig {
    /// Search for a config file in the current directory and ancestors.
    /// A file that fails to load is an error rather than skipped.
    pub fn discover() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn find_config_path() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        find_config_in(&cwd)
    }
}

fn find_config_in(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
