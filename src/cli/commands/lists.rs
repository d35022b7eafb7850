//! Account-wide tag and sequence listings

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ontraport::api::{OntraportClient, Transport};

use super::format_output;
use crate::cli::app::OutputFormat;

#[derive(Args)]
pub struct TagCommands {
    #[command(subcommand)]
    pub command: TagSubcommands,
}

#[derive(Subcommand)]
pub enum TagSubcommands {
    /// Tag names in use
    Pull,
    /// Tags with their ids
    List,
}

#[derive(Args)]
pub struct SequenceCommands {
    #[command(subcommand)]
    pub command: SequenceSubcommands,
}

#[derive(Subcommand)]
pub enum SequenceSubcommands {
    /// Sequences with their ids
    List,
}

pub fn handle_tag_command<T: Transport>(
    client: &OntraportClient<T>,
    args: TagCommands,
    format: OutputFormat,
) -> Result<()> {
    let contacts = client.contacts();
    let output = match args.command {
        TagSubcommands::Pull => format_output(&contacts.pull_tags().context("Failed to pull tags")?, format)?,
        TagSubcommands::List => format_output(&contacts.fetch_tags().context("Failed to fetch tags")?, format)?,
    };
    println!("{}", output);
    Ok(())
}

pub fn handle_sequence_command<T: Transport>(
    client: &OntraportClient<T>,
    args: SequenceCommands,
    format: OutputFormat,
) -> Result<()> {
    let contacts = client.contacts();
    let output = match args.command {
        SequenceSubcommands::List => {
            format_output(&contacts.fetch_sequences().context("Failed to fetch sequences")?, format)?
        }
    };
    println!("{}", output);
    Ok(())
}
