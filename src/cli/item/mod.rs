//! One-shot commands against the configured provider and store
//!
//! Results go to stdout as JSON; logs go to stderr.

use clap::Subcommand;
use serde_json::{Value, json};

use crate::config::{AppConfig, LogFormat, LoggingConfig};
use crate::infrastructure::logging;
use crate::infrastructure::services::PreservationService;

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// Look up preservation tips for an item
    Search { query: String },

    /// Show the details for one item
    Details { name: String },

    /// Add an item to the saved list
    Save { name: String },

    /// Remove saved items by id
    Remove { id: String },

    /// List saved items
    Saved,
}

/// Run one command and print its JSON result
pub async fn run(command: ItemCommand) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: LogFormat::Compact,
    });

    let (service, _store) = crate::create_preservation_service(&config)?;
    let output = execute(&service, command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

async fn execute(service: &PreservationService, command: ItemCommand) -> anyhow::Result<Value> {
    let output = match command {
        ItemCommand::Search { query } => json!({ "data": service.search_items(&query).await? }),
        ItemCommand::Details { name } => match service.get_item_details(&name).await? {
            Some(entry) => serde_json::to_value(entry)?,
            None => anyhow::bail!("No preservation data for '{}'", name),
        },
        ItemCommand::Save { name } => serde_json::to_value(service.save_item(&name).await?)?,
        ItemCommand::Remove { id } => json!({ "removed": service.remove_item(&id).await? }),
        ItemCommand::Saved => json!({ "data": service.get_saved_items().await? }),
    };

    Ok(output)
}
