use std::path::PathBuf;

use clap::Parser;

use crate::cli::LogLevel;

/// Builds an in-memory tree from a directory, optionally prunes it,
/// prints it, and optionally writes it back out under a fresh root.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The directory to build the tree from
    pub root: PathBuf,

    /// Keep only files whose name contains one of these values
    /// (directories always survive)
    #[clap(long, short)]
    pub keep: Vec<String>,

    /// Write the tree under this not-yet-existing directory
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
