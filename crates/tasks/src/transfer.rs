//! Import and export of task files
//!
//! Exports are the full list as pretty-printed JSON. Imports are more
//! forgiving than the storage format: ids and done flags are optional and
//! coerced, only a string title is required.

use serde_json::Value;

use crate::error::{ImportError, Result};
use crate::list::TaskList;
use crate::task::{Task, TaskId};

/// Suggested file name for exports
pub const EXPORT_FILE_NAME: &str = "todos.json";

/// Render the full list for download
pub fn export(list: &TaskList) -> Result<String> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Parse an import file into a replacement list
pub fn import(text: &str) -> std::result::Result<TaskList, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ImportError::Unreadable)?;

    let Value::Array(items) = value else {
        return Err(ImportError::Invalid);
    };

    let tasks = items
        .iter()
        .map(task_from_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(tasks.into())
}

/// Build a task from one loosely-typed JSON entry
///
/// Only a string title is required. A missing or falsy id gets a fresh
/// one, and `done` is coerced by truthiness.
pub(crate) fn task_from_value(item: &Value) -> std::result::Result<Task, ImportError> {
    let fields = match item {
        Value::Object(fields) => fields,
        // An entry that cannot even be inspected for a title
        Value::Null => return Err(ImportError::Unreadable),
        _ => return Err(ImportError::Invalid),
    };

    let Some(Value::String(title)) = fields.get("title") else {
        return Err(ImportError::Invalid);
    };

    let id = match fields.get("id") {
        Some(Value::String(s)) if !s.is_empty() => TaskId::from(s.as_str()),
        Some(v) if truthy(v) => TaskId::from(v.to_string()),
        _ => TaskId::new(),
    };

    Ok(Task {
        id,
        title: title.clone(),
        done: fields.get("done").is_some_and(truthy),
    })
}

/// Loose truthiness as used by hand-written JSON files
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
