//! Database migrations
//!
//! Migrations use unix timestamps as version numbers. Schema version is
//! simply the timestamp of the last applied migration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;
use tracing::info;

/// Schema version record stored in the database
#[derive(Debug, Serialize, Deserialize)]
struct SchemaVersion {
    version: i64,
}

/// A migration with its timestamp and SQL content
struct Migration {
    timestamp: i64,
    name: &'static str,
    sql: &'static str,
}

/// Task storage migrations
const TODO_MIGRATIONS: &[Migration] = &[Migration {
    timestamp: 1760832000,
    name: "kv_schema",
    sql: include_str!("../migrations/todo/1760832000_kv_schema.surql"),
}];

/// Run all pending migrations
pub async fn run_migrations(db: &Surreal<Any>) -> Result<i64> {
    let current = get_current_version(db).await?;
    let pending: Vec<_> = TODO_MIGRATIONS
        .iter()
        .filter(|m| m.timestamp > current)
        .collect();

    if pending.is_empty() {
        info!("Database schema is up to date (version {})", current);
        return Ok(current);
    }

    info!(
        "Running {} migration(s) (from version {})",
        pending.len(),
        current
    );

    for migration in &pending {
        info!(
            "Applying migration {}: {}",
            migration.timestamp, migration.name
        );
        db.query(migration.sql)
            .await
            .and_then(|response| response.check())
            .with_context(|| format!("Failed to apply migration {}", migration.timestamp))?;
        set_version(db, migration.timestamp).await?;
    }

    let version = pending.last().map(|m| m.timestamp).unwrap_or(current);
    info!("Migrations complete (now at version {})", version);

    Ok(version)
}

/// Get the current schema version from the database
async fn get_current_version(db: &Surreal<Any>) -> Result<i64> {
    db.query("DEFINE TABLE IF NOT EXISTS schema_version SCHEMAFULL; DEFINE FIELD IF NOT EXISTS version ON schema_version TYPE int;")
        .await
        .context("Failed to ensure schema_version table")?;

    let result: Option<SchemaVersion> = db
        .select(("schema_version", "current"))
        .await
        .context("Failed to query schema version")?;

    Ok(result.map(|r| r.version).unwrap_or(0))
}

/// Set the schema version in the database
async fn set_version(db: &Surreal<Any>, version: i64) -> Result<()> {
    let _: Option<SchemaVersion> = db
        .upsert(("schema_version", "current"))
        .content(SchemaVersion { version })
        .await
        .context("Failed to update schema version")?;

    Ok(())
}
