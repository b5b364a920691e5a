use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;
use crate::platform::PlatformVersion;

/// The parts of a project-generation request that decide which JVM version
/// the generated project targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescription {
    platform_version: PlatformVersion,
    language: Language,
}

impl ProjectDescription {
    pub fn new(platform_version: PlatformVersion, language: Language) -> Self {
        Self {
            platform_version,
            language,
        }
    }

    pub fn platform_version(&self) -> &PlatformVersion {
        &self.platform_version
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

/// JSON input accepted by the command line: one description or a list.
#[derive(Debug, Clone)]
pub enum DescriptionInput {
    Single(ProjectDescription),
    Batch(Vec<ProjectDescription>),
}

impl DescriptionInput {
    pub fn from_json(content: &str) -> Result<Self> {
        // Pick the shape up front so field errors keep their own message.
        let value: serde_json::Value = serde_json::from_str(content)?;
        let input = if value.is_array() {
            DescriptionInput::Batch(serde_json::from_value(value)?)
        } else {
            DescriptionInput::Single(serde_json::from_value(value)?)
        };
        Ok(input)
    }

    pub fn into_vec(self) -> Vec<ProjectDescription> {
        match self {
            DescriptionInput::Single(description) => vec![description],
            DescriptionInput::Batch(descriptions) => descriptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::language::LanguageKind;

    #[test]
    fn reads_single_description() {
        let input = DescriptionInput::from_json(
            r#"{"platformVersion":"3.2.0-RC2","language":{"id":"kotlin","jvmVersion":"22"}}"#,
        )
        .unwrap();
        let descriptions = input.into_vec();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0].platform_version().to_string(), "3.2.0-RC2");
        assert_eq!(descriptions[0].language().kind(), LanguageKind::Kotlin);
    }

    #[test]
    fn reads_batch_of_descriptions() {
        let input = DescriptionInput::from_json(
            r#"[
                {"platformVersion":"3.2.4","language":{"id":"java","jvmVersion":"22"}},
                {"platformVersion":"3.1.0","language":{"id":"groovy","jvmVersion":"1.8"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(input.into_vec().len(), 2);
    }

    #[test]
    fn rejects_bad_platform_version() {
        let err = DescriptionInput::from_json(
            r#"{"platformVersion":"three","language":{"id":"java","jvmVersion":"17"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDescription(_)));
        assert!(
            err.to_string().contains("Invalid platform version 'three'"),
            "{err}"
        );
    }

    #[test]
    fn batch_error_names_unknown_language() {
        let err = DescriptionInput::from_json(
            r#"[
                {"platformVersion":"3.2.4","language":{"id":"java","jvmVersion":"22"}},
                {"platformVersion":"3.2.4","language":{"id":"scala","jvmVersion":"17"}}
            ]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown language 'scala'"), "{err}");
    }

    #[test]
    fn malformed_json_is_invalid_description() {
        let err = DescriptionInput::from_json("{").unwrap_err();
        assert!(matches!(err, Error::InvalidDescription(_)));
    }

    #[test]
    fn set_language_replaces_language() {
        let mut description = ProjectDescription::new(
            PlatformVersion::parse("3.2.4").unwrap(),
            Language::new(LanguageKind::Java, "22"),
        );
        description.set_language(Language::new(LanguageKind::Java, "21"));
        assert_eq!(description.language().jvm_version(), "21");
    }
}
