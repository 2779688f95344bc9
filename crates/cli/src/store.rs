//! Opening the vessels collection

use anyhow::Context;
use mongodb::bson::Document;
use mongodb::{Client, Collection};
use shared::StoreConfig;
use std::path::Path;
use tracing::debug;

/// Resolve configuration: file (if given) or defaults, then environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<StoreConfig> {
    let config = match path {
        Some(path) => StoreConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StoreConfig::default(),
    }
    .apply_env();
    config.validate()?;
    Ok(config)
}

/// Connect to MongoDB and return the configured vessels collection
pub async fn connect(config: &StoreConfig) -> anyhow::Result<Collection<Document>> {
    debug!(database = %config.database, collection = %config.collection, "Connecting to MongoDB");
    let client = Client::with_uri_str(&config.uri)
        .await
        .context("Failed to create MongoDB client")?;
    Ok(client
        .database(&config.database)
        .collection::<Document>(&config.collection))
}
