//! Configuration types for the vessel store

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

pub const ENV_URI: &str = "VESSEL_MONGODB_URI";
pub const ENV_DATABASE: &str = "VESSEL_DATABASE";
pub const ENV_COLLECTION: &str = "VESSEL_COLLECTION";

/// Where vessel documents are stored
///
/// ```json
/// { "uri": "mongodb://localhost:27017", "database": "test", "collection": "Vessel" }
/// ```
///
/// Every key is optional in the file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,

    /// Database holding the vessels collection
    pub database: String,

    /// Name of the vessels collection
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "test".to_string(),
            collection: "Vessel".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override fields from `VESSEL_*` environment variables
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from any key lookup (environment, test map, ...)
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(uri) = lookup(ENV_URI) {
            self.uri = uri;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(collection) = lookup(ENV_COLLECTION) {
            self.collection = collection;
        }
        self
    }

    /// Check that the configuration can be used to open a collection
    pub fn validate(&self) -> Result<()> {
        if !(self.uri.starts_with("mongodb://") || self.uri.starts_with("mongodb+srv://")) {
            return Err(ConfigError::Invalid {
                field: "uri",
                reason: format!("'{}' is not a mongodb:// or mongodb+srv:// URI", self.uri),
            });
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "database",
                reason: "must not be empty".to_string(),
            });
        }
        if self.collection.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "collection",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
