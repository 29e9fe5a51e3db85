#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;

use crate::cli::{Cli, RunError};

mod cli;

#[snafu::report]
fn main() -> Result<(), RunError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    cli::run(cli_args)?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.as_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}
