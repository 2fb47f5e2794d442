//! CLI command definitions for task list management

use std::path::PathBuf;

use clap::Subcommand;
use tasks::Filter;

/// Task list commands
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task to the top of the list
    #[command(display_order = 1)]
    Add {
        /// Task title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List tasks
    #[command(display_order = 2, visible_alias = "ls")]
    List {
        /// Which tasks to show (all, active, done)
        #[arg(short, long)]
        filter: Option<Filter>,
    },

    /// Mark a task as done
    #[command(display_order = 3)]
    Done {
        /// Task position, id or id prefix
        task: String,
    },

    /// Mark a task as not done
    #[command(display_order = 4)]
    Undo {
        /// Task position, id or id prefix
        task: String,
    },

    /// Flip a task between done and not done
    #[command(display_order = 5)]
    Toggle {
        /// Task position, id or id prefix
        task: String,
    },

    /// Rename a task
    #[command(display_order = 6)]
    Edit {
        /// Task position, id or id prefix
        task: String,
        /// New title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete a task
    #[command(display_order = 7, visible_alias = "delete")]
    Rm {
        /// Task position, id or id prefix
        task: String,
    },

    /// Move a task onto another task's place
    #[command(display_order = 8, name = "move")]
    Move {
        /// Task to move
        from: String,
        /// Task whose place it takes
        to: String,
    },

    /// Delete all completed tasks
    #[command(display_order = 9)]
    Clear,

    /// Write the full list as JSON
    #[command(display_order = 10)]
    Export {
        /// Output file, or '-' for stdout
        #[arg(default_value = tasks::transfer::EXPORT_FILE_NAME)]
        path: PathBuf,
    },

    /// Replace the list with tasks from a JSON file
    #[command(display_order = 11)]
    Import {
        /// File to read
        path: PathBuf,
    },
}
