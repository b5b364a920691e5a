pub mod app;
pub mod cli;
pub mod config;
pub mod customizer;
pub mod description;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod platform;
pub mod resolver;
pub mod version;

pub use description::ProjectDescription;
pub use error::{Error, Result};
pub use language::{Language, LanguageKind};
pub use platform::{PlatformVersion, VersionRange};
pub use resolver::{Adjustment, JavaVersionResolver, Reason};
