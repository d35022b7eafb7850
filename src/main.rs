use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use ontraport::{Config, OntraportClient};

mod cli;

use cli::Cli;
use cli::app::Commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    info!("Starting ontraport-cli");

    let config = Config::load().context("Failed to load configuration")?;
    debug!("Using API base URL {}", config.api_base_url);

    let client = OntraportClient::from_config(config).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Contact(args) => cli::commands::handle_contact_command(&client, args, cli.format)?,
        Commands::Tags(args) => cli::commands::handle_tag_command(&client, args, cli.format)?,
        Commands::Sequences(args) => cli::commands::handle_sequence_command(&client, args, cli.format)?,
    }

    Ok(())
}
