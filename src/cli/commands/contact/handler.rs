//! Contact command handler

use anyhow::{Context, Result, bail};
use log::warn;

use ontraport::api::{CONTACT_SCHEMA, OntraportClient, Transport};
use ontraport::mapping::{FieldValue, parse_date};
use ontraport::Entity;

use super::{ContactCommands, ContactSubcommands, MembershipAction};
use crate::cli::app::OutputFormat;
use crate::cli::commands::format_output;

pub fn handle_contact_command<T: Transport>(
    client: &OntraportClient<T>,
    args: ContactCommands,
    format: OutputFormat,
) -> Result<()> {
    let contacts = client.contacts();

    match args.command {
        ContactSubcommands::Create { fields, lists, force } => {
            let entity = build_entity(None, &fields, &lists)?;
            let result = if force {
                contacts.force_create(&entity)
            } else {
                contacts.create(&entity)
            };
            let created = result.context("Failed to create contact")?;
            print_entity(created.as_ref(), format)?;
        }
        ContactSubcommands::Fetch { id } => {
            let contact = contacts
                .retrieve(&id)
                .with_context(|| format!("Failed to fetch contact {}", id))?;
            print_entity(contact.as_ref(), format)?;
        }
        ContactSubcommands::Update { id, fields, lists } => {
            let entity = build_entity(Some(id.clone()), &fields, &lists)?;
            let updated = contacts
                .update(&entity)
                .with_context(|| format!("Failed to update contact {}", id))?;
            print_entity(updated.as_ref(), format)?;
        }
        ContactSubcommands::Delete { id } => {
            let entity = Entity::new().with_id(id.clone());
            let deleted = contacts
                .delete(&entity)
                .with_context(|| format!("Failed to delete contact {}", id))?;
            if deleted {
                println!("Deleted contact {}", id);
            } else {
                bail!("Server did not confirm deletion of contact {}", id);
            }
        }
        ContactSubcommands::Notes { ids } => {
            let resp = contacts.fetch_all_notes(&ids).context("Failed to fetch notes")?;
            println!("{}", resp.body);
        }
        ContactSubcommands::Tags { action } => {
            let result = match action {
                MembershipAction::Add { id, items } => contacts.add_tags(&Entity::new().with_id(id), &items),
                MembershipAction::Remove { id, items } => contacts.remove_tags(&Entity::new().with_id(id), &items),
            };
            let resp = result.context("Failed to update contact tags")?;
            println!("{}", resp.body);
        }
        ContactSubcommands::Sequences { action } => {
            let result = match action {
                MembershipAction::Add { id, items } => contacts.add_sequences(&Entity::new().with_id(id), &items),
                MembershipAction::Remove { id, items } => {
                    contacts.remove_sequences(&Entity::new().with_id(id), &items)
                }
            };
            let updated = result.context("Failed to update contact sequences")?;
            print_entity(updated.as_ref(), format)?;
        }
        ContactSubcommands::Deleted { start, end } => {
            let resp = contacts
                .get_deleted(date_arg(&start)?, date_arg(&end)?)
                .context("Failed to fetch deleted contacts")?;
            println!("{}", resp.body);
        }
    }

    Ok(())
}

fn print_entity(entity: Option<&Entity>, format: OutputFormat) -> Result<()> {
    match entity {
        Some(entity) => println!("{}", format_output(entity, format)?),
        None => println!("No contact returned"),
    }
    Ok(())
}

/// Split `attr=value` at the first `=`
pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (attr, value) = raw
        .split_once('=')
        .with_context(|| format!("Expected ATTR=VALUE, got '{}'", raw))?;
    let attr = attr.trim();
    if attr.is_empty() {
        bail!("Missing attribute name in '{}'", raw);
    }
    Ok((attr.to_string(), value.to_string()))
}

fn date_arg(raw: &str) -> Result<FieldValue> {
    parse_date(raw)
        .map(FieldValue::Date)
        .with_context(|| format!("Unrecognized date '{}'", raw))
}

/// Build an entity from CLI assignments; date fields are parsed when possible
pub(crate) fn build_entity(id: Option<String>, fields: &[String], lists: &[String]) -> Result<Entity> {
    let mut entity = Entity::new();
    entity.id = id;

    for raw in fields {
        let (attr, value) = parse_assignment(raw)?;
        warn_if_unmapped(&attr);
        let value = match CONTACT_SCHEMA.is_date_field(&attr).then(|| parse_date(&value)).flatten() {
            Some(date) => FieldValue::Date(date),
            None => FieldValue::Text(value),
        };
        entity.set(attr, value);
    }

    for raw in lists {
        let (attr, value) = parse_assignment(raw)?;
        warn_if_unmapped(&attr);
        let items: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        entity.set(attr, items);
    }

    Ok(entity)
}

fn warn_if_unmapped(attr: &str) {
    if !CONTACT_SCHEMA.contains(attr) {
        warn!("Attribute '{}' is not part of the contact schema and will not be sent", attr);
    }
}
