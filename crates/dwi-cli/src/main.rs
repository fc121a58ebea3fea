use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use dwi_cli::commands::{self, Cli};
use dwi_cli::config::{self, CURRENT_VERSION, LogFormat};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let loaded = config::load_config()?;
    let config = loaded.config;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    // Logs go to stderr so stdout stays pipeable JSON.
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    if let Some(from) = loaded.migrated_from {
        tracing::info!(from, to = CURRENT_VERSION, "migrated config");
    }

    let output = commands::run(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}
