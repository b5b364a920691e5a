const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
const PKG_REPOSITORY: Option<&str> = option_env!("CARGO_PKG_REPOSITORY");
const PKG_LICENSE: Option<&str> = option_env!("CARGO_PKG_LICENSE");

pub fn describe() -> String {
    let mut lines = Vec::new();
    lines.push(format!("{PKG_NAME} {PKG_VERSION}"));
    lines.push(PKG_DESCRIPTION.to_string());

    if let Some(repo) = PKG_REPOSITORY.filter(|repo| !repo.is_empty()) {
        lines.push(format!("repository: {repo}"));
    }
    if let Some(license) = PKG_LICENSE.filter(|license| !license.is_empty()) {
        lines.push(format!("license: {license}"));
    }
    lines.join("\n")
}
