pub mod contact;
pub mod lists;

pub use contact::{ContactCommands, handle_contact_command};
pub use lists::{SequenceCommands, TagCommands, handle_sequence_command, handle_tag_command};

use anyhow::{Context, Result};
use serde::Serialize;

use super::app::OutputFormat;

/// Render a value according to the selected output format
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).context("Failed to format JSON output"),
        OutputFormat::JsonCompact => serde_json::to_string(data).context("Failed to format JSON output"),
    }
}
