//! Java version resolution.
//!
//! Validates that the requested Java version is compatible with the chosen
//! platform generation and language, and lowers it when it is not. The
//! resolver never raises the requested version and never changes the
//! language itself.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, trace};

use crate::customizer::ProjectDescriptionCustomizer;
use crate::description::ProjectDescription;
use crate::language::Language;
use crate::platform::{PlatformVersion, VersionRange};

/// Platform line that ships Kotlin 1.9.20, the first Kotlin release
/// targeting Java 21.
static KOTLIN_1_9_20_OR_LATER: Lazy<VersionRange> =
    Lazy::new(|| VersionRange::parse("3.2.0-RC2").unwrap());

/// First platform release supporting Java 22.
static PLATFORM_3_2_4_OR_LATER: Lazy<VersionRange> =
    Lazy::new(|| VersionRange::parse("3.2.4").unwrap());

const UNSUPPORTED_VERSIONS: &[&str] = &["1.6", "1.7", "1.8"];

const JAVA_17: &str = "17";
const JAVA_21: &str = "21";

/// Why a requested Java version was lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    LegacyVersion,
    BelowMinimum,
    KotlinRequiresNewerPlatform,
    PlatformTooOld,
    KotlinUnsupported,
}

impl Reason {
    pub fn describe(self) -> &'static str {
        match self {
            Reason::LegacyVersion => "legacy Java versions are no longer supported",
            Reason::BelowMinimum => "Java 17 is the minimum supported version",
            Reason::KotlinRequiresNewerPlatform => {
                "Kotlin on this platform predates 1.9.20 and cannot target the requested Java version"
            }
            Reason::PlatformTooOld => "Java 22 requires platform 3.2.4 or later",
            Reason::KotlinUnsupported => "Kotlin 1.9 does not support Java 22",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The net change applied to a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub from: String,
    pub to: String,
    pub reason: Reason,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JavaVersionResolver;

impl JavaVersionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Lower the description's Java version when the platform or language
    /// cannot support it. Returns the change made, if any.
    pub fn resolve(&self, description: &mut ProjectDescription) -> Option<Adjustment> {
        let (to, reason) = decide(description.platform_version(), description.language())?;
        let from = description.language().jvm_version().to_string();
        if from == to {
            return None;
        }

        debug!(
            language = description.language().id(),
            platform = %description.platform_version(),
            from = %from,
            to = to,
            rule = ?reason,
            "lowering requested java version"
        );
        let language = description.language().with_jvm_version(to);
        description.set_language(language);

        Some(Adjustment {
            from,
            to: to.to_string(),
            reason,
        })
    }
}

impl ProjectDescriptionCustomizer for JavaVersionResolver {
    fn id(&self) -> &'static str {
        "java-version"
    }

    fn customize(&self, description: &mut ProjectDescription) {
        self.resolve(description);
    }
}

/// Every rule reads the originally requested version; when several rules
/// fire, the last one wins.
fn decide(platform: &PlatformVersion, language: &Language) -> Option<(&'static str, Reason)> {
    let java_version = language.jvm_version();
    if UNSUPPORTED_VERSIONS.contains(&java_version) {
        return Some((JAVA_17, Reason::LegacyVersion));
    }
    let Some(generation) = java_generation(java_version) else {
        trace!(java_version, "java version outside the known generations, leaving as is");
        return None;
    };

    let mut target = None;
    if generation < 17 {
        target = Some((JAVA_17, Reason::BelowMinimum));
    }
    if generation == 21 && language.is_kotlin() && !KOTLIN_1_9_20_OR_LATER.matches(platform) {
        target = Some((JAVA_17, Reason::KotlinRequiresNewerPlatform));
    }
    if generation == 22 {
        if !PLATFORM_3_2_4_OR_LATER.matches(platform) {
            target = Some((JAVA_21, Reason::PlatformTooOld));
        }
        if language.is_kotlin() {
            target = if KOTLIN_1_9_20_OR_LATER.matches(platform) {
                Some((JAVA_21, Reason::KotlinUnsupported))
            } else {
                Some((JAVA_17, Reason::KotlinRequiresNewerPlatform))
            };
        }
    }
    target
}

/// The integer generation of a Java version, when it is one this resolver
/// knows about (10 through 22).
pub fn java_generation(java_version: &str) -> Option<i32> {
    let generation: i32 = java_version.parse().ok()?;
    (generation > 9 && generation <= 22).then_some(generation)
}
