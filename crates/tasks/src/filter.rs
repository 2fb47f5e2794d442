//! Visibility filters for the task list

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::task::Task;

/// Which tasks are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Tasks still to do
    Active,
    /// Completed tasks
    Done,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Done];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.done,
            Filter::Done => task.done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Done => "done",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Done => "Done",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "done" => Ok(Filter::Done),
            other => Err(TaskError::UnknownFilter(other.to_string())),
        }
    }
}
