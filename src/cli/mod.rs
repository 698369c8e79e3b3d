pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FormatArgs};
pub use commands::{format_file, run_serve, run_show};
