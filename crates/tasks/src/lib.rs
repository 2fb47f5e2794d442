//! Task list domain for Tickler
//!
//! Holds the in-memory list, its filters and view models, and the JSON
//! codecs used for storage and for import/export. Nothing here does IO;
//! front ends read and write the stored snapshot themselves.

pub mod error;
pub mod filter;
pub mod list;
pub mod snapshot;
pub mod task;
pub mod transfer;
pub mod view;

pub use error::{ImportError, Result, TaskError};
pub use filter::Filter;
pub use list::TaskList;
pub use snapshot::{Restored, STORAGE_KEY};
pub use task::{Task, TaskId};
pub use view::{EditSession, FilterTab, ListView, TaskRow};
