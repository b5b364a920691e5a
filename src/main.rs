use anyhow::Result;
use jvm_compat::{app, cli, logging};

fn main() -> Result<()> {
    let invocation = cli::parse()?;
    logging::init(invocation.verbose);
    let exit_code = app::run(invocation.command)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
