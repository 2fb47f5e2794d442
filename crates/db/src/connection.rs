//! Database connection management
//!
//! Uses SurrealDB's `Surreal<Any>` for runtime engine selection, and exposes
//! a small string key-value API shaped like the browser's `localStorage`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::migrations;

const DATABASE_NAME: &str = "todo";
const KV_TABLE: &str = "kv";

/// Stored value for a single key
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    value: String,
}

/// Database connection wrapper
#[derive(Clone)]
pub struct Database {
    client: Surreal<Any>,
    schema_version: i64,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// # Arguments
    /// * `config` - Database configuration
    /// * `default_path` - Default path for embedded database if not specified in config
    pub async fn connect(config: &DatabaseConfig, default_path: Option<PathBuf>) -> Result<Self> {
        if config.url.is_some() && config.path.is_some() {
            bail!("Database config has both 'url' and 'path' set - this is ambiguous");
        }

        let endpoint = match &config.url {
            Some(url) => url.clone(),
            None => {
                let path = config
                    .path
                    .clone()
                    .or(default_path)
                    .context("No database path specified and no default provided")?;
                format!("rocksdb://{}", path.display())
            }
        };

        info!("Opening database at: {}", endpoint);
        let client = surrealdb::engine::any::connect(&endpoint)
            .await
            .with_context(|| format!("Failed to open database: {}", endpoint))?;

        let namespace = config.namespace();
        client
            .use_ns(namespace)
            .use_db(DATABASE_NAME)
            .await
            .context("Failed to select namespace/database")?;

        debug!("Connected to database: {}/{}", namespace, DATABASE_NAME);

        let schema_version = migrations::run_migrations(&client).await?;

        Ok(Self {
            client,
            schema_version,
        })
    }

    /// Open a fresh in-memory database
    pub async fn memory() -> Result<Self> {
        Self::connect(&DatabaseConfig::in_memory(), None).await
    }

    /// Timestamp of the last applied migration
    pub fn schema_version(&self) -> i64 {
        self.schema_version
    }

    // ========== Key-Value Operations ==========

    /// Read the value stored under `key`
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entry: Option<Entry> = self
            .client
            .select((KV_TABLE, key))
            .await
            .with_context(|| format!("Failed to read key: {}", key))?;

        Ok(entry.map(|e| e.value))
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _: Option<Entry> = self
            .client
            .upsert((KV_TABLE, key))
            .content(Entry {
                value: value.to_string(),
            })
            .await
            .with_context(|| format!("Failed to write key: {}", key))?;

        debug!("Stored {} bytes under {}", value.len(), key);
        Ok(())
    }

    /// Delete `key`, returning whether it existed
    pub async fn remove_item(&self, key: &str) -> Result<bool> {
        let removed: Option<Entry> = self
            .client
            .delete((KV_TABLE, key))
            .await
            .with_context(|| format!("Failed to delete key: {}", key))?;

        Ok(removed.is_some())
    }
}
