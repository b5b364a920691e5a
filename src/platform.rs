//! Platform versions and version ranges.
//!
//! Platform releases follow `MAJOR.MINOR.PATCH` with an optional qualifier
//! written either semver style (`3.2.0-RC2`) or in the older dotted style
//! (`2.1.0.M1`, `2.7.18.RELEASE`). Qualifiers are mapped onto semver
//! pre-release identifiers so that milestones sort before release
//! candidates, release candidates before snapshots, and snapshots before the
//! release itself.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:[.-]([0-9A-Za-z][0-9A-Za-z.-]*))?$").unwrap()
});

const RELEASE_QUALIFIERS: &[&str] = &["RELEASE", "FINAL", "GA"];

/// A parsed platform version. Ordering and equality ignore how the
/// qualifier was spelled; the original text is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlatformVersion {
    raw: String,
    version: Version,
}

impl PlatformVersion {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let captures = VERSION_PATTERN.captures(trimmed).ok_or_else(|| {
            Error::InvalidPlatformVersion {
                input: input.to_string(),
                reason: "expected MAJOR.MINOR.PATCH with an optional qualifier".to_string(),
            }
        })?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse()
                .map_err(|e| Error::InvalidPlatformVersion {
                    input: input.to_string(),
                    reason: format!("version component out of range: {e}"),
                })
        };

        let pre = match captures.get(4) {
            Some(qualifier) => qualifier_to_prerelease(qualifier.as_str()).map_err(|reason| {
                Error::InvalidPlatformVersion {
                    input: input.to_string(),
                    reason,
                }
            })?,
            None => Prerelease::EMPTY,
        };

        Ok(Self {
            raw: trimmed.to_string(),
            version: Version {
                major: component(1)?,
                minor: component(2)?,
                patch: component(3)?,
                pre,
                build: BuildMetadata::EMPTY,
            },
        })
    }
}

fn qualifier_to_prerelease(qualifier: &str) -> std::result::Result<Prerelease, String> {
    let upper = qualifier.to_ascii_uppercase();
    if RELEASE_QUALIFIERS.contains(&upper.as_str()) {
        return Ok(Prerelease::EMPTY);
    }
    // Legacy snapshots must still sort after release candidates.
    let upper = if upper == "BUILD-SNAPSHOT" {
        "SNAPSHOT".to_string()
    } else {
        upper
    };

    let mut identifiers = Vec::new();
    for part in upper.split(['.', '-']).filter(|part| !part.is_empty()) {
        let mut run = String::new();
        let mut run_is_digit = None;
        for ch in part.chars() {
            let is_digit = ch.is_ascii_digit();
            if run_is_digit.is_some_and(|previous| previous != is_digit) {
                identifiers.push(normalize_identifier(&run));
                run.clear();
            }
            run.push(ch);
            run_is_digit = Some(is_digit);
        }
        if !run.is_empty() {
            identifiers.push(normalize_identifier(&run));
        }
    }

    Prerelease::new(&identifiers.join(".")).map_err(|e| format!("invalid qualifier: {e}"))
}

fn normalize_identifier(run: &str) -> String {
    if run.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = run.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    } else {
        run.to_string()
    }
}

impl PartialEq for PlatformVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for PlatformVersion {}

impl PartialOrd for PlatformVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlatformVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl Hash for PlatformVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PlatformVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlatformVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PlatformVersion> for String {
    fn from(value: PlatformVersion) -> Self {
        value.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bound {
    version: PlatformVersion,
    inclusive: bool,
}

/// A predicate over platform versions.
///
/// A bare version (`3.2.4`) means "at least this version". Interval notation
/// bounds both ends: `[3.2.0,3.3.0)` includes 3.2.0 and excludes 3.3.0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Bound,
    upper: Option<Bound>,
}

impl VersionRange {
    pub fn at_least(version: PlatformVersion) -> Self {
        Self {
            lower: Bound {
                version,
                inclusive: true,
            },
            upper: None,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| Error::InvalidVersionRange {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let lower_inclusive = match trimmed.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                let version = PlatformVersion::parse(trimmed)
                    .map_err(|e| invalid(&e.to_string()))?;
                return Ok(Self::at_least(version));
            }
        };
        let upper_inclusive = match trimmed.chars().last() {
            Some(']') if trimmed.len() > 1 => true,
            Some(')') if trimmed.len() > 1 => false,
            _ => return Err(invalid("interval must end with ']' or ')'")),
        };

        let inner = &trimmed[1..trimmed.len() - 1];
        let (low, high) = inner
            .split_once(',')
            .ok_or_else(|| invalid("interval must contain two comma-separated versions"))?;
        let lower = PlatformVersion::parse(low).map_err(|e| invalid(&e.to_string()))?;
        let upper = PlatformVersion::parse(high).map_err(|e| invalid(&e.to_string()))?;

        match lower.cmp(&upper) {
            Ordering::Greater => return Err(invalid("lower bound exceeds upper bound")),
            Ordering::Equal if !(lower_inclusive && upper_inclusive) => {
                return Err(invalid("interval is empty"));
            }
            _ => {}
        }

        Ok(Self {
            lower: Bound {
                version: lower,
                inclusive: lower_inclusive,
            },
            upper: Some(Bound {
                version: upper,
                inclusive: upper_inclusive,
            }),
        })
    }

    pub fn matches(&self, version: &PlatformVersion) -> bool {
        let above_lower = match version.cmp(&self.lower.version) {
            Ordering::Greater => true,
            Ordering::Equal => self.lower.inclusive,
            Ordering::Less => false,
        };
        let below_upper = match &self.upper {
            None => true,
            Some(upper) => match version.cmp(&upper.version) {
                Ordering::Less => true,
                Ordering::Equal => upper.inclusive,
                Ordering::Greater => false,
            },
        };
        above_lower && below_upper
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.upper {
            None => write!(f, ">={}", self.lower.version),
            Some(upper) => write!(
                f,
                "{}{},{}{}",
                if self.lower.inclusive { '[' } else { '(' },
                self.lower.version,
                upper.version,
                if upper.inclusive { ']' } else { ')' },
            ),
        }
    }
}

impl FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(input: &str) -> PlatformVersion {
        PlatformVersion::parse(input).unwrap()
    }

    #[test]
    fn parses_plain_and_qualified_versions() {
        assert!(v("3.2.0-RC2") < v("3.2.0"));
        assert!(v("2.1.0.M1") < v("2.1.0"));
        assert_eq!(v("2.7.18.RELEASE").to_string(), "2.7.18.RELEASE");
        assert_eq!(v("3.2.0-RC2").to_string(), "3.2.0-RC2");
    }

    #[test]
    fn rejects_malformed_versions() {
        for input in ["", "3", "3.2", "3.2.x", "v3.2.0", "3.2.0-", "3.2.0-RC_2"] {
            assert!(PlatformVersion::parse(input).is_err(), "{input} should fail");
        }
    }

    #[test]
    fn release_qualifier_equals_plain_release() {
        assert_eq!(v("2.7.18.RELEASE"), v("2.7.18"));
        assert_eq!(v("3.0.0.FINAL"), v("3.0.0"));
    }

    #[test]
    fn qualifier_ordering() {
        assert!(v("3.2.0-M1") < v("3.2.0-M2"));
        assert!(v("3.2.0-M3") < v("3.2.0-RC1"));
        assert!(v("3.2.0-RC1") < v("3.2.0-RC2"));
        assert!(v("3.2.0-RC2") < v("3.2.0-RC10"));
        assert!(v("3.2.0-RC2") < v("3.2.0-SNAPSHOT"));
        assert!(v("3.2.0.RC2") < v("3.2.0.BUILD-SNAPSHOT"));
        assert!(v("3.2.0-SNAPSHOT") < v("3.2.0"));
        assert!(v("3.2.0") < v("3.2.1-M1"));
        assert!(v("3.1.12") < v("3.2.0-M1"));
    }

    #[test]
    fn non_ascii_digits_are_malformed() {
        let err = PlatformVersion::parse("\u{663}.\u{662}.\u{664}").unwrap_err();
        assert!(err.to_string().contains("expected MAJOR.MINOR.PATCH"));
    }

    #[test]
    fn dotted_and_dashed_qualifiers_are_equivalent() {
        assert_eq!(v("3.2.0.RC2"), v("3.2.0-RC2"));
        assert_eq!(v("3.2.0-rc2"), v("3.2.0-RC2"));
    }

    #[test]
    fn serde_keeps_original_text() {
        let version: PlatformVersion = serde_json::from_str("\"2.1.0.M1\"").unwrap();
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"2.1.0.M1\"");
        assert!(serde_json::from_str::<PlatformVersion>("\"latest\"").is_err());
    }

    #[test]
    fn minimum_range_matches_at_and_above() {
        let range = VersionRange::parse("3.2.4").unwrap();
        assert!(!range.matches(&v("3.2.3")));
        assert!(!range.matches(&v("3.2.4-RC1")));
        assert!(range.matches(&v("3.2.4")));
        assert!(range.matches(&v("3.3.0-M1")));
        assert_eq!(range.to_string(), ">=3.2.4");
    }

    #[test]
    fn prerelease_minimum_range() {
        let range = VersionRange::parse("3.2.0-RC2").unwrap();
        assert!(!range.matches(&v("3.2.0-RC1")));
        assert!(!range.matches(&v("3.1.9")));
        assert!(range.matches(&v("3.2.0-RC2")));
        assert!(range.matches(&v("3.2.0")));
    }

    #[test]
    fn interval_ranges_honour_bound_kinds() {
        let range = VersionRange::parse("[3.2.0,3.3.0)").unwrap();
        assert!(range.matches(&v("3.2.0")));
        assert!(range.matches(&v("3.2.12")));
        assert!(!range.matches(&v("3.3.0")));
        assert!(!range.matches(&v("3.1.0")));
        assert_eq!(range.to_string(), "[3.2.0,3.3.0)");

        let range = VersionRange::parse("(3.1.0,3.2.4]").unwrap();
        assert!(!range.matches(&v("3.1.0")));
        assert!(range.matches(&v("3.2.4")));
    }

    #[test]
    fn rejects_malformed_ranges() {
        for input in ["[3.2.0,3.3.0", "[3.2.0]", "[3.3.0,3.2.0]", "(3.2.0,3.2.0)", "[", "foo"] {
            assert!(VersionRange::parse(input).is_err(), "{input} should fail");
        }
    }
}
