pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_contact_command;

#[derive(Args)]
pub struct ContactCommands {
    #[command(subcommand)]
    pub command: ContactSubcommands,
}

#[derive(Subcommand)]
pub enum ContactSubcommands {
    /// Create a contact
    Create {
        /// Attribute assignment, e.g. --field first_name=Jane
        #[arg(short, long = "field", value_name = "ATTR=VALUE")]
        fields: Vec<String>,

        /// List attribute assignment with comma-separated members, e.g. --list tags=vip,lead
        #[arg(short, long = "list", value_name = "ATTR=A,B")]
        lists: Vec<String>,

        /// Ask the server to add a new contact even if one with the same email exists
        #[arg(long)]
        force: bool,
    },
    /// Fetch a contact by id
    Fetch {
        id: String,
    },
    /// Update attributes of an existing contact
    Update {
        id: String,

        #[arg(short, long = "field", value_name = "ATTR=VALUE")]
        fields: Vec<String>,

        #[arg(short, long = "list", value_name = "ATTR=A,B")]
        lists: Vec<String>,
    },
    /// Delete a contact by id
    Delete {
        id: String,
    },
    /// Print the raw notes payload for one or more contacts
    Notes {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Add or remove tags on a contact
    Tags {
        #[command(subcommand)]
        action: MembershipAction,
    },
    /// Add or remove a contact from sequences
    Sequences {
        #[command(subcommand)]
        action: MembershipAction,
    },
    /// Print the raw payload of contacts deleted in a date range
    Deleted {
        /// Range start (YYYY-MM-DD, RFC 3339 or epoch seconds)
        #[arg(long)]
        start: String,

        /// Range end (YYYY-MM-DD, RFC 3339 or epoch seconds)
        #[arg(long)]
        end: String,
    },
}

#[derive(Subcommand)]
pub enum MembershipAction {
    Add {
        /// Contact id
        id: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
    Remove {
        /// Contact id
        id: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}
