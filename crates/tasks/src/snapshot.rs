//! Persistence codec for the task list
//!
//! The whole list is stored as one JSON array under [`STORAGE_KEY`] in
//! whatever key-value store the front end has at hand. A missing or
//! unreadable value is replaced by the demo list, which the caller must
//! write back straight away. Stored entries are read as leniently as
//! imports, so a list saved by an older build survives.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::list::TaskList;
use crate::task::Task;
use crate::transfer;

/// Key the list is stored under
pub const STORAGE_KEY: &str = "todo-vanilla-v1";

/// Outcome of reading the stored list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub list: TaskList,
    /// True when the list was freshly seeded and has not been saved yet
    pub seeded: bool,
}

/// Serialize the list for storage
pub fn encode(list: &TaskList) -> Result<String> {
    Ok(serde_json::to_string(list)?)
}

/// Rebuild the list from a stored value
pub fn restore(raw: Option<&str>) -> Restored {
    let Some(raw) = raw else {
        debug!("No stored task list, seeding demo tasks");
        return seeded();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(Value::Null) => return seeded(),
        Ok(other) => {
            warn!("Stored task list is not an array, replacing with demo tasks: {}", other);
            return seeded();
        }
        Err(e) => {
            warn!("Stored task list is unreadable, replacing with demo tasks: {}", e);
            return seeded();
        }
    };

    let tasks: Vec<Task> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match transfer::task_from_value(item) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!("Dropping stored task at index {}: {}", index, e);
                None
            }
        })
        .collect();

    Restored {
        list: tasks.into(),
        seeded: false,
    }
}

/// Demo tasks shown on first use
pub fn seed() -> TaskList {
    vec![
        Task::new("Learn Rust (video course)"),
        Task::new("Build this to-do list").with_done(true),
        Task::new("Add filters and local storage"),
    ]
    .into()
}

fn seeded() -> Restored {
    Restored {
        list: seed(),
        seeded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_seeds() {
        let restored = restore(None);
        assert!(restored.seeded);
        assert_eq!(restored.list.len(), 3);
        assert_eq!(restored.list.remaining(), 2);
    }

    #[test]
    fn test_null_and_garbage_seed() {
        assert!(restore(Some("null")).seeded);
        assert!(restore(Some("{not json")).seeded);
        assert!(restore(Some(r#"{"id":"a"}"#)).seeded);
        assert!(restore(Some("42")).seeded);
    }

    #[test]
    fn test_loose_entries_are_kept() {
        let restored = restore(Some(
            r#"[{"id":42,"title":"keep me","done":false},{"id":"b","title":"and me","done":true}]"#,
        ));
        assert!(!restored.seeded);
        let tasks = restored.list.as_slice();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_str(), "42");
        assert_eq!(tasks[0].title, "keep me");
        assert!(!tasks[0].done);
        assert_eq!(tasks[1].id.as_str(), "b");
        assert!(tasks[1].done);
    }

    #[test]
    fn test_missing_done_is_open() {
        let restored = restore(Some(r#"[{"id":"a","title":"keep me"}]"#));
        assert!(!restored.seeded);
        assert_eq!(restored.list.len(), 1);
        assert_eq!(restored.list.as_slice()[0].id.as_str(), "a");
        assert!(!restored.list.as_slice()[0].done);
    }

    #[test]
    fn test_unusable_entries_are_dropped() {
        let restored = restore(Some(r#"[null, {"title": 1}, {"id":"a","title":"ok"}]"#));
        assert!(!restored.seeded);
        assert_eq!(restored.list.len(), 1);
        assert_eq!(restored.list.as_slice()[0].title, "ok");
    }

    #[test]
    fn test_empty_array_is_not_reseeded() {
        let restored = restore(Some("[]"));
        assert!(!restored.seeded);
        assert!(restored.list.is_empty());
    }

    #[test]
    fn test_encode_restore() {
        let mut list = TaskList::new();
        list.add("first");
        list.add("second");
        let first = list.resolve("2").unwrap().id.clone();
        list.toggle(&first);

        let raw = encode(&list).unwrap();
        let restored = restore(Some(&raw));

        assert!(!restored.seeded);
        assert_eq!(restored.list, list);
    }
}
