//! View models for rendering the task list
//!
//! Front ends render these rather than walking the list themselves, so the
//! web UI and the terminal show the same rows, tabs and counter.

use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::list::TaskList;
use crate::task::{Task, TaskId};

/// One rendered row
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    /// 1-based position in the full list
    pub position: usize,
}

impl TaskRow {
    /// CSS class for the row element
    pub fn class(&self) -> &'static str {
        if self.done {
            "item done"
        } else {
            "item"
        }
    }

    /// Checkbox glyph for terminal output
    pub fn marker(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// One filter button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

impl FilterTab {
    pub fn class(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            ""
        }
    }

    /// Value for the `aria-selected` attribute
    pub fn aria_selected(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// Everything needed to draw the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
    pub tabs: [FilterTab; 3],
    pub counter: String,
}

impl ListView {
    pub fn render(list: &TaskList, filter: Filter) -> Self {
        let rows = list
            .iter()
            .enumerate()
            .filter(|(_, task)| filter.matches(task))
            .map(|(idx, task)| row(task, idx + 1))
            .collect();

        Self {
            rows,
            tabs: tabs(filter),
            counter: counter(list),
        }
    }
}

/// Filter buttons with the selected one marked active
pub fn tabs(selected: Filter) -> [FilterTab; 3] {
    Filter::ALL.map(|filter| FilterTab {
        filter,
        label: filter.label(),
        active: filter == selected,
    })
}

/// Summary line, always counted over the full list
pub fn counter(list: &TaskList) -> String {
    let total = list.len();
    format!(
        "{} task{} • {} remaining",
        total,
        if total != 1 { "s" } else { "" },
        list.remaining()
    )
}

fn row(task: &Task, position: usize) -> TaskRow {
    TaskRow {
        id: task.id.clone(),
        title: task.title.clone(),
        done: task.done,
        position,
    }
}

/// In-place title editing for a single row
///
/// Enter and focus loss commit, Escape cancels. Committing an empty draft
/// leaves the title unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    editing: Option<(TaskId, String)>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin editing with the current title as the draft
    pub fn start(&mut self, task: &Task) {
        self.editing = Some((task.id.clone(), task.title.clone()));
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        matches!(&self.editing, Some((current, _)) if current == id)
    }

    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|(_, draft)| draft.as_str())
    }

    /// Draft text for the row with this id, if that row is being edited
    pub fn draft_for(&self, id: &TaskId) -> Option<&str> {
        match &self.editing {
            Some((current, draft)) if current == id => Some(draft.as_str()),
            _ => None,
        }
    }

    pub fn update(&mut self, text: impl Into<String>) {
        if let Some((_, draft)) = &mut self.editing {
            *draft = text.into();
        }
    }

    /// Apply the draft to the list and close the editor
    pub fn commit(&mut self, list: &mut TaskList) -> bool {
        match self.editing.take() {
            Some((id, draft)) => list.edit(&id, &draft),
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_pluralization() {
        let mut list = TaskList::new();
        assert_eq!(counter(&list), "0 tasks • 0 remaining");

        list.add("one");
        assert_eq!(counter(&list), "1 task • 1 remaining");

        list.add("two");
        let id = list.resolve("1").unwrap().id.clone();
        list.toggle(&id);
        assert_eq!(counter(&list), "2 tasks • 1 remaining");
    }

    #[test]
    fn test_render_filters_rows_but_counts_everything() {
        let mut list = TaskList::new();
        list.add("c");
        list.add("b");
        list.add("a");
        let b = list.resolve("2").unwrap().id.clone();
        list.toggle(&b);

        let view = ListView::render(&list, Filter::Active);
        let titles: Vec<_> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(view.rows[1].position, 3);
        assert_eq!(view.counter, "3 tasks • 2 remaining");

        let done = ListView::render(&list, Filter::Done);
        assert_eq!(done.rows.len(), 1);
        assert_eq!(done.rows[0].class(), "item done");
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let tabs = tabs(Filter::Done);
        let active: Vec<_> = tabs.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].filter, Filter::Done);
        assert_eq!(active[0].aria_selected(), "true");
        assert_eq!(tabs[0].aria_selected(), "false");
    }

    #[test]
    fn test_draft_survives_list_changes() {
        let mut list = TaskList::new();
        list.add("edit me");
        let task = list.resolve("1").unwrap().clone();

        let mut session = EditSession::new();
        session.start(&task);
        session.update("half typed");

        // Unrelated changes rebuild every row; the editor reads its text back
        list.add("another");
        let other = list.resolve("1").unwrap().id.clone();
        assert_eq!(session.draft_for(&task.id), Some("half typed"));
        assert_eq!(session.draft_for(&other), None);

        assert!(session.commit(&mut list));
        assert_eq!(list.get(&task.id).unwrap().title, "half typed");
        assert_eq!(session.draft_for(&task.id), None);
    }

    #[test]
    fn test_edit_session_commit_and_cancel() {
        let mut list = TaskList::new();
        list.add("original");
        let task = list.resolve("1").unwrap().clone();

        let mut session = EditSession::new();
        session.start(&task);
        assert!(session.is_editing(&task.id));
        assert_eq!(session.draft(), Some("original"));

        session.update("  changed ");
        assert!(session.commit(&mut list));
        assert_eq!(list.get(&task.id).unwrap().title, "changed");
        assert!(!session.is_editing(&task.id));

        session.start(list.get(&task.id).unwrap());
        session.update("discarded");
        session.cancel();
        assert!(!session.commit(&mut list));
        assert_eq!(list.get(&task.id).unwrap().title, "changed");

        session.start(list.get(&task.id).unwrap());
        session.update("   ");
        assert!(!session.commit(&mut list));
        assert_eq!(list.get(&task.id).unwrap().title, "changed");
    }
}
