use serde::Serialize;

use crate::config::OutputFormat;
use crate::description::ProjectDescription;
use crate::resolver::Adjustment;

/// A description after resolution, with the change that was made to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    #[serde(flatten)]
    pub description: ProjectDescription,
    pub adjustment: Option<Adjustment>,
}

impl Resolution {
    pub fn is_adjusted(&self) -> bool {
        self.adjustment.is_some()
    }
}

pub fn render(resolutions: &[Resolution], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(resolutions
            .iter()
            .map(render_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(resolutions),
    }
}

fn render_line(resolution: &Resolution) -> String {
    let description = &resolution.description;
    let prefix = format!(
        "{} {}",
        description.language().id(),
        description.platform_version()
    );
    match &resolution.adjustment {
        Some(adjustment) => format!(
            "{prefix}: java {} -> {} ({})",
            adjustment.from, adjustment.to, adjustment.reason
        ),
        None => format!(
            "{prefix}: java {} (unchanged)",
            description.language().jvm_version()
        ),
    }
}
