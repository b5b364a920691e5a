use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The source languages a project can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LanguageKind {
    Java,
    Kotlin,
    Groovy,
}

impl LanguageKind {
    pub const ALL: [LanguageKind; 3] = [
        LanguageKind::Java,
        LanguageKind::Kotlin,
        LanguageKind::Groovy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LanguageKind::Java => "java",
            LanguageKind::Kotlin => "kotlin",
            LanguageKind::Groovy => "groovy",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageKind::Java => "Java",
            LanguageKind::Kotlin => "Kotlin",
            LanguageKind::Groovy => "Groovy",
        }
    }
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LanguageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        language_alias_lookup(s).ok_or_else(|| Error::UnknownLanguage(s.trim().to_string()))
    }
}

impl TryFrom<String> for LanguageKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LanguageKind> for &'static str {
    fn from(value: LanguageKind) -> Self {
        value.id()
    }
}

static ALIASES: Lazy<HashMap<&'static str, LanguageKind>> = Lazy::new(|| {
    let pairs: &[(&str, LanguageKind)] = &[
        ("java", LanguageKind::Java),
        ("jdk", LanguageKind::Java),
        ("kotlin", LanguageKind::Kotlin),
        ("kt", LanguageKind::Kotlin),
        ("kts", LanguageKind::Kotlin),
        ("groovy", LanguageKind::Groovy),
        ("grv", LanguageKind::Groovy),
    ];
    pairs.iter().cloned().collect()
});

pub fn language_alias_lookup(token: &str) -> Option<LanguageKind> {
    let normalized = token.trim().to_ascii_lowercase();
    ALIASES.get(normalized.as_str()).copied()
}

pub fn known_language_ids() -> Vec<&'static str> {
    LanguageKind::ALL.iter().map(|kind| kind.id()).collect()
}

/// A source language together with the JVM version it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(rename = "id")]
    kind: LanguageKind,
    jvm_version: String,
}

impl Language {
    pub fn new(kind: LanguageKind, jvm_version: impl Into<String>) -> Self {
        Self {
            kind,
            jvm_version: jvm_version.into(),
        }
    }

    /// Build a language from its id (or an alias) and a JVM version.
    pub fn for_id(id: &str, jvm_version: impl Into<String>) -> Result<Self> {
        Ok(Self::new(id.parse()?, jvm_version))
    }

    pub fn kind(&self) -> LanguageKind {
        self.kind
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn jvm_version(&self) -> &str {
        &self.jvm_version
    }

    pub fn is_kotlin(&self) -> bool {
        matches!(self.kind, LanguageKind::Kotlin)
    }

    /// The same language targeting another JVM version.
    pub fn with_jvm_version(&self, jvm_version: impl Into<String>) -> Self {
        Self::new(self.kind, jvm_version)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (java {})", self.kind.display_name(), self.jvm_version)
    }
}
