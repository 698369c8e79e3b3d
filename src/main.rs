use anyhow::{Context, Result};
use clap::Parser;
use queue_admin::cli::{self, Cli, Commands};
use queue_admin::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first to get debug flag
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!("Effective config: {:?}", config);

    match cli.command {
        None | Some(Commands::Serve) => cli::run_serve(&config).await?,
        Some(Commands::Format(args)) => {
            let formatted = cli::format_file(&args.file, &config)?;
            print!("{}", formatted);
        }
        Some(Commands::Show) => cli::run_show(&config).await?,
    }

    Ok(())
}
