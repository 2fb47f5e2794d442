//! Command handlers for task list management
//!
//! Every handler loads the list, applies one operation, saves when the
//! list changed, and prints the result.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use db::Database;
use tasks::{transfer, Filter, ListView, TaskError, TaskId, TaskList};

use crate::commands::TaskCommand;
use crate::session::Session;

/// Handle a task command
pub async fn handle_task_command(
    cmd: TaskCommand,
    db: &Database,
    default_filter: Filter,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = Session::open(db).await?;

    match cmd {
        TaskCommand::Add { title } => {
            let title = title.join(" ");
            let id = session
                .list_mut()
                .add(&title)
                .map(|task| task.id.clone())
                .ok_or(TaskError::EmptyTitle)?;
            session.save().await?;
            writeln!(out, "Added task: {}", id)?;
        }

        TaskCommand::List { filter } => {
            print_list(out, session.list(), filter.unwrap_or(default_filter))?;
            return Ok(());
        }

        TaskCommand::Done { task } => {
            set_done(&mut session, &task, true, out).await?;
        }

        TaskCommand::Undo { task } => {
            set_done(&mut session, &task, false, out).await?;
        }

        TaskCommand::Toggle { task } => {
            let id = resolve(session.list(), &task)?;
            session.list_mut().toggle(&id);
            session.save().await?;
            let done = session.list().get(&id).is_some_and(|t| t.done);
            writeln!(
                out,
                "Marked task {} as {}",
                id,
                if done { "done" } else { "not done" }
            )?;
        }

        TaskCommand::Edit { task, title } => {
            let id = resolve(session.list(), &task)?;
            let title = title.join(" ");
            if session.list_mut().edit(&id, &title) {
                session.save().await?;
                writeln!(out, "Renamed task: {}", id)?;
            } else if title.trim().is_empty() {
                writeln!(out, "Title cannot be empty; kept the previous title")?;
            } else {
                writeln!(out, "Title unchanged")?;
            }
        }

        TaskCommand::Rm { task } => {
            let id = resolve(session.list(), &task)?;
            if let Some(removed) = session.list_mut().remove(&id) {
                session.save().await?;
                writeln!(out, "Deleted task: {}", removed.title)?;
            }
        }

        TaskCommand::Move { from, to } => {
            let from = resolve(session.list(), &from)?;
            let to = resolve(session.list(), &to)?;
            if session.list_mut().move_task(&from, &to) {
                session.save().await?;
                writeln!(out, "Moved task: {}", from)?;
            } else {
                writeln!(out, "Nothing to move")?;
            }
        }

        TaskCommand::Clear => {
            let removed = session.list_mut().clear_completed();
            if removed > 0 {
                session.save().await?;
            }
            writeln!(
                out,
                "Cleared {} completed task{}",
                removed,
                if removed != 1 { "s" } else { "" }
            )?;
        }

        TaskCommand::Export { path } => {
            let text = transfer::export(session.list())?;
            if path == Path::new("-") {
                writeln!(out, "{}", text)?;
            } else {
                fs::write(&path, format!("{}\n", text))
                    .with_context(|| format!("Failed to write export file: {}", path.display()))?;
                writeln!(
                    out,
                    "Exported {} tasks to {}",
                    session.list().len(),
                    path.display()
                )?;
            }
            return Ok(());
        }

        TaskCommand::Import { path } => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read import file: {}", path.display()))?;
            let imported = transfer::import(&text)?;
            *session.list_mut() = imported;
            session.save().await?;
            writeln!(
                out,
                "Imported {} tasks from {}",
                session.list().len(),
                path.display()
            )?;
        }
    }

    writeln!(out)?;
    print_list(out, session.list(), default_filter)
}

async fn set_done(
    session: &mut Session<'_>,
    selector: &str,
    done: bool,
    out: &mut impl Write,
) -> Result<()> {
    let id = resolve(session.list(), selector)?;
    let state = if done { "done" } else { "not done" };

    if session.list_mut().set_done(&id, done) {
        session.save().await?;
        writeln!(out, "Marked task {} as {}", id, state)?;
    } else {
        writeln!(out, "Task {} is already {}", id, state)?;
    }
    Ok(())
}

fn resolve(list: &TaskList, selector: &str) -> Result<TaskId> {
    Ok(list.resolve(selector)?.id.clone())
}

fn print_list(out: &mut impl Write, list: &TaskList, filter: Filter) -> Result<()> {
    let view = ListView::render(list, filter);

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label.to_string()
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if view.rows.is_empty() {
        writeln!(out, "  No tasks")?;
    }
    for row in &view.rows {
        let short_id: String = row.id.as_str().chars().take(8).collect();
        writeln!(
            out,
            "{:>3}. {} {}  ({})",
            row.position,
            row.marker(),
            row.title,
            short_id
        )?;
    }

    writeln!(out, "{}", view.counter)?;
    Ok(())
}
