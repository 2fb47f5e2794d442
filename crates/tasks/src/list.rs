//! The ordered task list and its operations
//!
//! Order is display order and is chosen by the user: new tasks go to the
//! front and drag-and-drop moves tasks around. Every mutating operation
//! reports whether it changed anything so callers only persist real
//! changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TaskError};
use crate::filter::Filter;
use crate::task::{Task, TaskId};

/// The user's tasks, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Number of tasks not yet done
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    /// Tasks passing the filter, in list order
    pub fn visible(&self, filter: Filter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    // ========== Mutations ==========

    /// Add a task at the front of the list
    ///
    /// The title is trimmed. Returns `None` and leaves the list untouched
    /// when nothing is left after trimming.
    pub fn add(&mut self, title: &str) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let task = Task::new(title);
        debug!("Adding task {}", task.id);
        self.tasks.insert(0, task);
        self.tasks.first()
    }

    /// Set the done flag of a task
    pub fn set_done(&mut self, id: &TaskId, done: bool) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) if task.done != done => {
                task.done = done;
                true
            }
            _ => false,
        }
    }

    /// Flip the done flag of a task
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Rename a task
    ///
    /// The new title is trimmed; an empty result keeps the old title.
    pub fn edit(&mut self, id: &TaskId, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) if task.title != title => {
                task.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    /// Delete a task
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        Some(self.tasks.remove(idx))
    }

    /// Delete every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    /// Move a task onto another one, as a drag-and-drop does
    ///
    /// The dragged task is taken out and reinserted at the target's index
    /// as it was before the removal, so dragging down lands after the
    /// target and dragging up lands before it.
    pub fn move_task(&mut self, from: &TaskId, to: &TaskId) -> bool {
        if from.as_str().is_empty() || from == to {
            return false;
        }

        let (Some(from_idx), Some(to_idx)) = (self.position(from), self.position(to)) else {
            return false;
        };

        let moved = self.tasks.remove(from_idx);
        self.tasks.insert(to_idx, moved);
        debug!("Moved task {} from {} to {}", from, from_idx, to_idx);
        true
    }

    // ========== Lookup ==========

    /// Find a task from a user-supplied reference
    ///
    /// Accepts a 1-based position in the full list, a full id, or a prefix
    /// matching exactly one id.
    pub fn resolve(&self, selector: &str) -> Result<&Task> {
        let selector = selector.trim();

        if let Ok(pos) = selector.parse::<usize>() {
            if pos >= 1 && pos <= self.tasks.len() {
                return Ok(&self.tasks[pos - 1]);
            }
        }

        if let Some(task) = self.tasks.iter().find(|t| t.id.as_str() == selector) {
            return Ok(task);
        }

        if selector.is_empty() {
            return Err(TaskError::NotFound(selector.to_string()));
        }

        let mut matches = self
            .tasks
            .iter()
            .filter(|t| t.id.as_str().starts_with(selector));

        match (matches.next(), matches.count()) {
            (Some(task), 0) => Ok(task),
            (Some(_), extra) => Err(TaskError::Ambiguous(selector.to_string(), extra + 1)),
            (None, _) => Err(TaskError::NotFound(selector.to_string())),
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(titles: &[&str]) -> TaskList {
        titles
            .iter()
            .map(|t| Task::new(*t).with_id(*t))
            .collect::<Vec<_>>()
            .into()
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let mut list = list_of(&["a"]);
        let added = list.add("  buy milk  ").unwrap();
        assert_eq!(added.title, "buy milk");
        assert!(!added.done);
        assert_eq!(titles(&list), vec!["buy milk", "a"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_of(&["a"]);
        assert!(list.add("   ").is_none());
        assert!(list.add("").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_and_set_done() {
        let mut list = list_of(&["a", "b"]);
        let a = TaskId::from("a");

        assert!(list.toggle(&a));
        assert!(list.get(&a).unwrap().done);
        assert!(list.toggle(&a));
        assert!(!list.get(&a).unwrap().done);

        assert!(list.set_done(&a, true));
        assert!(!list.set_done(&a, true));
        assert!(!list.toggle(&TaskId::from("missing")));
    }

    #[test]
    fn test_edit() {
        let mut list = list_of(&["a"]);
        let a = TaskId::from("a");

        assert!(list.edit(&a, "  renamed "));
        assert_eq!(list.get(&a).unwrap().title, "renamed");

        // Blank edits keep the previous title
        assert!(!list.edit(&a, "   "));
        assert_eq!(list.get(&a).unwrap().title, "renamed");

        assert!(!list.edit(&TaskId::from("missing"), "x"));
    }

    #[test]
    fn test_remove() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(&TaskId::from("b")).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&list), vec!["a", "c"]);
        assert!(list.remove(&TaskId::from("b")).is_none());
    }

    #[test]
    fn test_clear_completed_keeps_order() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.set_done(&TaskId::from("b"), true);
        list.set_done(&TaskId::from("d"), true);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(titles(&list), vec!["a", "c"]);
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_move_down_lands_after_target() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert!(list.move_task(&TaskId::from("a"), &TaskId::from("c")));
        assert_eq!(titles(&list), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up_lands_before_target() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert!(list.move_task(&TaskId::from("d"), &TaskId::from("b")));
        assert_eq!(titles(&list), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_noops() {
        let mut list = list_of(&["a", "b"]);
        assert!(!list.move_task(&TaskId::from("a"), &TaskId::from("a")));
        assert!(!list.move_task(&TaskId::from(""), &TaskId::from("a")));
        assert!(!list.move_task(&TaskId::from("x"), &TaskId::from("a")));
        assert!(!list.move_task(&TaskId::from("a"), &TaskId::from("x")));
        assert_eq!(titles(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_visible_and_remaining() {
        let mut list = list_of(&["a", "b", "c"]);
        list.set_done(&TaskId::from("b"), true);

        let active: Vec<_> = list.visible(Filter::Active).map(|t| t.title.as_str()).collect();
        let done: Vec<_> = list.visible(Filter::Done).map(|t| t.title.as_str()).collect();

        assert_eq!(active, vec!["a", "c"]);
        assert_eq!(done, vec!["b"]);
        assert_eq!(list.visible(Filter::All).count(), 3);
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn test_resolve() {
        let list: TaskList = vec![
            Task::new("one").with_id("abc123"),
            Task::new("two").with_id("abd456"),
            Task::new("three").with_id("x9"),
        ]
        .into();

        assert_eq!(list.resolve("2").unwrap().title, "two");
        assert_eq!(list.resolve("x9").unwrap().title, "three");
        assert_eq!(list.resolve("abc").unwrap().title, "one");
        assert!(matches!(list.resolve("ab"), Err(TaskError::Ambiguous(_, 2))));
        assert!(matches!(list.resolve("zzz"), Err(TaskError::NotFound(_))));
        assert!(matches!(list.resolve("4"), Err(TaskError::NotFound(_))));
        assert!(matches!(list.resolve(""), Err(TaskError::NotFound(_))));
    }
}
