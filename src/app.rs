use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::cli::{Command, InputSource, ResolveSpec};
use crate::config::CompatConfig;
use crate::description::{DescriptionInput, ProjectDescription};
use crate::language::{Language, LanguageKind, known_language_ids};
use crate::output::{self, Resolution};
use crate::platform::PlatformVersion;
use crate::resolver::JavaVersionResolver;
use crate::version;

const DEFAULT_LANGUAGE: &str = "java";
const DEFAULT_JAVA_VERSION: &str = "17";

/// Exit status used with `--strict` when a Java version was lowered.
pub const EXIT_ADJUSTED: i32 = 3;

pub fn run(command: Command) -> Result<i32> {
    match command {
        Command::Resolve(spec) => resolve(spec),
        Command::ListLanguages => {
            for id in known_language_ids() {
                println!("{id}");
            }
            Ok(0)
        }
        Command::ShowVersion => {
            println!("{}", version::describe());
            Ok(0)
        }
    }
}

fn resolve(spec: ResolveSpec) -> Result<i32> {
    let config = match &spec.config {
        Some(path) => CompatConfig::load(path)?,
        None => CompatConfig::discover().context("failed to load jvm-compat config")?,
    };
    let descriptions = load_descriptions(&spec.source, &config)?;
    debug!(count = descriptions.len(), "resolving project descriptions");

    let resolver = JavaVersionResolver::new();
    let resolutions: Vec<Resolution> = descriptions
        .into_iter()
        .map(|mut description| {
            let adjustment = resolver.resolve(&mut description);
            Resolution {
                description,
                adjustment,
            }
        })
        .collect();

    let format = spec.format.or(config.format).unwrap_or_default();
    let rendered = output::render(&resolutions, format).context("failed to render output")?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    if spec.strict && resolutions.iter().any(Resolution::is_adjusted) {
        return Ok(EXIT_ADJUSTED);
    }
    Ok(0)
}

fn load_descriptions(
    source: &InputSource,
    config: &CompatConfig,
) -> Result<Vec<ProjectDescription>> {
    let content = match source {
        InputSource::Flags {
            platform,
            language,
            java,
        } => {
            let description = description_from_flags(
                platform.as_deref(),
                language.as_deref(),
                java.as_deref(),
                config,
            )?;
            return Ok(vec![description]);
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read descriptions from stdin")?;
            buffer
        }
    };

    Ok(DescriptionInput::from_json(&content)?.into_vec())
}

fn description_from_flags(
    platform: Option<&str>,
    language: Option<&str>,
    java: Option<&str>,
    config: &CompatConfig,
) -> Result<ProjectDescription> {
    let Some(platform) = platform.or(config.platform_version.as_deref()) else {
        bail!(
            "a platform version is required: pass --platform or set platform_version in jvm-compat.toml"
        );
    };
    let platform = PlatformVersion::parse(platform)?;

    let language = language
        .or(config.language.as_deref())
        .unwrap_or(DEFAULT_LANGUAGE);
    let kind: LanguageKind = language.parse()?;
    let java = java
        .or(config.java_version.as_deref())
        .unwrap_or(DEFAULT_JAVA_VERSION);

    Ok(ProjectDescription::new(platform, Language::new(kind, java)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = CompatConfig {
            language: Some("groovy".into()),
            platform_version: Some("3.1.0".into()),
            java_version: Some("21".into()),
            format: None,
        };
        let description =
            description_from_flags(Some("3.2.4"), Some("kotlin"), None, &config).unwrap();
        assert_eq!(description.platform_version().to_string(), "3.2.4");
        assert_eq!(description.language().kind(), LanguageKind::Kotlin);
        assert_eq!(description.language().jvm_version(), "21");
    }

    #[test]
    fn defaults_apply_without_config() {
        let description =
            description_from_flags(Some("3.2.4"), None, None, &CompatConfig::default()).unwrap();
        assert_eq!(description.language().kind(), LanguageKind::Java);
        assert_eq!(description.language().jvm_version(), "17");
    }

    #[test]
    fn platform_is_required() {
        let err = description_from_flags(None, None, None, &CompatConfig::default()).unwrap_err();
        assert!(err.to_string().contains("platform version is required"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err =
            description_from_flags(Some("3.2.4"), Some("scala"), None, &CompatConfig::default())
                .unwrap_err();
        assert!(err.to_string().contains("Unknown language 'scala'"));
    }
}
