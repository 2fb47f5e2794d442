//! Leptos components for the task list page

use leptos::ev::{DragEvent, KeyboardEvent};
use leptos::logging::warn;
use leptos::*;
use tasks::{transfer, ImportError, ListView, TaskId, TaskRow};

use crate::app::TodoStore;
use crate::files;

// =============================================================================
// Input and filters
// =============================================================================

/// Text box that adds a task on Enter
#[component]
pub fn NewTaskInput(store: TodoStore) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let title = input.value();
        if store.update(|list| list.add(&title).is_some()) {
            input.set_value("");
        }
    };

    view! {
        <input
            id="newTask"
            class="new-task"
            type="text"
            placeholder="What needs doing? Press Enter to add"
            autofocus=true
            on:keydown=on_keydown
        />
    }
}

/// All / Active / Done buttons
#[component]
pub fn FilterBar(store: TodoStore, view: Memo<ListView>) -> impl IntoView {
    view! {
        <div class="filters" role="tablist">
            {move || {
                view.with(|v| v.tabs)
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                class=tab.class()
                                data-filter=tab.filter.as_str()
                                aria-selected=tab.aria_selected()
                                on:click=move |_| store.filter.set(tab.filter)
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One task: checkbox, title, inline editor, edit and delete buttons
///
/// Rows can be dragged onto each other to reorder the list.
#[component]
pub fn TaskItem(row: TaskRow, store: TodoStore) -> impl IntoView {
    let id = row.id.clone();
    let editor = create_node_ref::<html::Input>();
    let (dragging, set_dragging) = create_signal(false);
    let (drag_over, set_drag_over) = create_signal(false);

    let is_editing = {
        let id = id.clone();
        move || store.edit.with(|session| session.is_editing(&id))
    };

    let start_edit = {
        let id = id.clone();
        move || {
            let Some(task) = store.tasks.with_untracked(|list| list.get(&id).cloned()) else {
                return;
            };
            store.edit.update(|session| session.start(&task));
            if let Some(input) = editor.get_untracked() {
                input.set_value(&task.title);
                let _ = input.focus();
                let end = task.title.encode_utf16().count() as u32;
                let _ = input.set_selection_range(end, end);
            }
        }
    };
    let start_edit_dblclick = start_edit.clone();

    let on_toggle = {
        let id = id.clone();
        move |ev| {
            let checked = event_target_checked(&ev);
            store.update(|list| list.set_done(&id, checked));
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_| {
            store.update(|list| list.remove(&id).is_some());
        }
    };

    let on_editor_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => store.commit_edit(),
        "Escape" => store.cancel_edit(),
        _ => {}
    };

    let on_dragstart = {
        let id = id.clone();
        move |ev: DragEvent| {
            if let Some(dt) = ev.data_transfer() {
                let _ = dt.set_data("text/plain", id.as_str());
            }
            set_dragging.set(true);
        }
    };

    let on_drop = {
        let id = id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_drag_over.set(false);
            let from = ev
                .data_transfer()
                .and_then(|dt| dt.get_data("text/plain").ok())
                .unwrap_or_default();
            store.update(|list| list.move_task(&TaskId::from(from), &id));
        }
    };

    let text_hidden = is_editing.clone();
    let draft = {
        let id = id.clone();
        move || store.edit.with(|session| session.draft_for(&id).map(str::to_owned))
    };

    view! {
        <li
            class=row.class()
            draggable="true"
            style:opacity=move || if dragging.get() { "0.5" } else { "1" }
            style:outline=move || {
                if drag_over.get() { "2px dashed rgba(255,255,255,.15)" } else { "none" }
            }
            on:dragstart=on_dragstart
            on:dragend=move |_| set_dragging.set(false)
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_drag_over.set(true);
            }
            on:dragleave=move |_| set_drag_over.set(false)
            on:drop=on_drop
        >
            <input type="checkbox" class="check" prop:checked=row.done on:change=on_toggle/>
            <span
                class="txt"
                style:display=move || if text_hidden() { "none" } else { "" }
                on:dblclick=move |_| start_edit_dblclick()
            >
                {row.title.clone()}
            </span>
            <input
                type="text"
                node_ref=editor
                class=move || if is_editing() { "edit editing" } else { "edit sr-only" }
                prop:value=move || draft().unwrap_or_default()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store.edit.update(|session| session.update(text));
                }
                on:keydown=on_editor_keydown
                on:blur=move |_| store.commit_edit()
            />
            <button class="editBtn" title="Edit" on:click=move |_| start_edit()>"✎"</button>
            <button class="deleteBtn" title="Delete" on:click=on_delete>"✕"</button>
        </li>
    }
}

// =============================================================================
// Footer actions
// =============================================================================

/// Clear completed, export and import
#[component]
pub fn Toolbar(store: TodoStore) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    let on_export = move |_| {
        let text = match store.tasks.with_untracked(transfer::export) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to export tasks: {}", e);
                return;
            }
        };
        if let Err(e) = files::download_json(transfer::EXPORT_FILE_NAME, &text) {
            warn!("Failed to start download: {:?}", e);
        }
    };

    let on_file_picked = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|picked| picked.get(0)) else {
            return;
        };
        input.set_value("");

        spawn_local(async move {
            let result = match files::read_text(file).await {
                Some(text) => transfer::import(&text),
                None => Err(ImportError::Unreadable),
            };
            match result {
                Ok(imported) => {
                    store.update(move |list| {
                        *list = imported;
                        true
                    });
                }
                Err(e) => files::alert(&e.to_string()),
            }
        });
    };

    view! {
        <div class="toolbar">
            <button
                id="clearCompleted"
                on:click=move |_| {
                    store.update(|list| list.clear_completed() > 0);
                }
            >
                "Clear completed"
            </button>
            <button id="exportBtn" on:click=on_export>"Export"</button>
            <button
                id="importBtn"
                on:click=move |_| {
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
            >
                "Import"
            </button>
            <input
                id="fileInput"
                type="file"
                accept="application/json,.json"
                class="sr-only"
                node_ref=file_input
                on:change=on_file_picked
            />
        </div>
    }
}
