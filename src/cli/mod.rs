mod cli;
mod log_level;
mod run;

pub use cli::Cli;
pub use log_level::LogLevel;
pub use run::{RunError, run};
