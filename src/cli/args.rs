use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config YAML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging for internal details
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI and REST API (default)
    Serve,
    /// Print a YAML file with highlighted keys
    Format(FormatArgs),
    /// Show the effective configuration and stored queues
    Show,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// YAML file to format
    pub file: PathBuf,
}
