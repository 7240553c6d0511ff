use clap::Parser;
use std::path::PathBuf;

/// Browse expert recommendations and request calls with them.
#[derive(Parser, Debug)]
#[command(name = "expertconnect", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON catalog of projects and experts (overrides config)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Path to open at startup, e.g. /project/2 or /project-list
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,
}
