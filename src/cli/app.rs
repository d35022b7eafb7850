use super::commands::{ContactCommands, SequenceCommands, TagCommands};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ontraport-cli")]
#[command(about = "A CLI tool for managing ONTRAPORT contacts through the legacy XML API")]
pub struct Cli {
    /// Enable debug logging (request parameters are logged with credentials redacted)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for entities and lists
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, fetch, update and delete contacts
    Contact(ContactCommands),
    /// Account-wide tag listings
    Tags(TagCommands),
    /// Account-wide sequence listings
    Sequences(SequenceCommands),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact JSON (no whitespace, for piping)
    JsonCompact,
}
