use leptos::*;
use leptos_meta::*;
use tasks::{EditSession, Filter, ListView, TaskList};

use crate::components::*;
use crate::storage;

/// Reactive state shared by every component
///
/// All list mutations go through [`TodoStore::update`], which saves to
/// local storage whenever the list actually changed.
#[derive(Clone, Copy)]
pub struct TodoStore {
    pub tasks: RwSignal<TaskList>,
    pub filter: RwSignal<Filter>,
    pub edit: RwSignal<EditSession>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            tasks: create_rw_signal(storage::load()),
            filter: create_rw_signal(Filter::default()),
            edit: create_rw_signal(EditSession::new()),
        }
    }

    /// Apply a mutation and persist it if it changed anything
    pub fn update(&self, f: impl FnOnce(&mut TaskList) -> bool) -> bool {
        let mut changed = false;
        self.tasks.update(|list| changed = f(list));
        if changed {
            self.tasks.with_untracked(storage::save);
        }
        changed
    }

    /// Commit the open editor, if any
    pub fn commit_edit(&self) {
        let mut session = self.edit.get_untracked();
        if session.draft().is_none() {
            return;
        }
        self.update(|list| session.commit(list));
        self.edit.set(session);
    }

    pub fn cancel_edit(&self) {
        self.edit.update(EditSession::cancel);
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TodoStore::new();
    let view = create_memo(move |_| {
        let filter = store.filter.get();
        store.tasks.with(|list| ListView::render(list, filter))
    });

    view! {
        <Title text="Tickler"/>

        <main class="app">
            <header>
                <h1>"To-do"</h1>
                <NewTaskInput store=store/>
            </header>

            <FilterBar store=store view=view/>

            <ul id="list" class="list">
                {move || {
                    view.with(|v| v.rows.clone())
                        .into_iter()
                        .map(|row| view! { <TaskItem row=row store=store/> })
                        .collect_view()
                }}
            </ul>

            <footer>
                <span id="counter">{move || view.with(|v| v.counter.clone())}</span>
                <Toolbar store=store/>
            </footer>
        </main>
    }
}
