use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::{Parser, ValueHint, builder::NonEmptyStringValueParser};

use crate::config::OutputFormat;

/// Where the project descriptions to resolve come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single description assembled from flags, with config defaults
    /// filling whatever is missing.
    Flags {
        platform: Option<String>,
        language: Option<String>,
        java: Option<String>,
    },
    File(PathBuf),
    Stdin,
}

/// A resolution request derived from CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSpec {
    pub source: InputSource,
    pub format: Option<OutputFormat>,
    pub strict: bool,
    pub config: Option<PathBuf>,
}

/// The top-level command requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Resolve(ResolveSpec),
    ListLanguages,
    ShowVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

/// Parse CLI arguments into a high-level command.
pub fn parse() -> Result<Invocation> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let verbose = cli.verbose;

    if cli.version {
        return Ok(Invocation {
            command: Command::ShowVersion,
            verbose,
        });
    }
    if cli.list_languages {
        return Ok(Invocation {
            command: Command::ListLanguages,
            verbose,
        });
    }

    let source = match cli.input {
        Some(input) => {
            ensure!(
                cli.platform.is_none() && cli.lang.is_none() && cli.java.is_none(),
                "--input cannot be combined with --platform, --lang or --java"
            );
            if input.as_os_str() == "-" {
                InputSource::Stdin
            } else {
                InputSource::File(input)
            }
        }
        None => InputSource::Flags {
            platform: cli.platform,
            language: cli.lang,
            java: cli.java,
        },
    };

    Ok(Invocation {
        command: Command::Resolve(ResolveSpec {
            source,
            format: cli.format,
            strict: cli.strict,
            config: cli.config,
        }),
        verbose,
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "jvm-compat",
    about = "Resolve a Java version compatible with a platform generation and language",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print version information and exit.
    #[arg(short = 'V', long = "version", action = clap::ArgAction::SetTrue)]
    version: bool,

    /// List the supported language ids and exit.
    #[arg(long = "list-languages", action = clap::ArgAction::SetTrue)]
    list_languages: bool,

    /// Platform version the project is generated for (e.g. 3.2.4).
    #[arg(
        short,
        long,
        value_name = "VERSION",
        value_parser = NonEmptyStringValueParser::new()
    )]
    platform: Option<String>,

    /// Source language: java, kotlin or groovy.
    #[arg(
        short,
        long,
        value_name = "LANG",
        value_parser = NonEmptyStringValueParser::new()
    )]
    lang: Option<String>,

    /// Requested Java version.
    #[arg(
        short,
        long,
        value_name = "VERSION",
        value_parser = NonEmptyStringValueParser::new()
    )]
    java: Option<String>,

    /// Read descriptions as JSON from a file, or `-` for stdin.
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Exit with status 3 when any Java version was lowered.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    strict: bool,

    /// Load defaults from this file instead of discovering jvm-compat.toml.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log each rule that fires.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}
