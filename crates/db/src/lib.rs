//! Persistent key-value storage for Tickler
//!
//! Backed by SurrealDB, either embedded RocksDB on disk or an in-memory
//! engine. Schema migrations run on connect.

mod config;
mod connection;
mod migrations;

pub use config::DatabaseConfig;
pub use connection::Database;
