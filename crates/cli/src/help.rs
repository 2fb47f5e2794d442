//! Custom help system with categorized command sections
//!
//! Commands are grouped into logical sections. The command registry must be
//! kept in sync with the actual subcommand definitions.

use std::collections::BTreeMap;

/// Command categories for help grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Everyday list editing
    Main,
    /// Moving tasks in and out of the list
    Transfer,
    /// Setup and configuration
    Configure,
}

impl Category {
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::Transfer => "Transfer",
            Category::Configure => "Configure",
        }
    }
}

/// Metadata for a single command
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// Registry of all commands with their metadata
///
/// IMPORTANT: This must be kept in sync with the Commands enum.
/// The `test_command_registry_matches_enum` test verifies this.
pub fn command_registry() -> Vec<CommandInfo> {
    let main = [
        ("add", "Add a task"),
        ("list", "Show tasks"),
        ("done", "Mark done"),
        ("undo", "Mark not done"),
        ("toggle", "Flip done state"),
        ("edit", "Rename a task"),
        ("rm", "Delete a task"),
        ("move", "Reorder tasks"),
        ("clear", "Delete completed tasks"),
    ];
    let transfer = [("export", "Save tasks to JSON"), ("import", "Load tasks from JSON")];
    let configure = [
        ("init", "Initialize"),
        ("config", "Settings"),
        ("completions", "Shell completions"),
    ];

    [
        (Category::Main, &main[..]),
        (Category::Transfer, &transfer[..]),
        (Category::Configure, &configure[..]),
    ]
    .into_iter()
    .flat_map(|(category, entries)| {
        entries.iter().map(move |&(name, description)| CommandInfo {
            name,
            description,
            category,
        })
    })
    .collect()
}

/// Generate the complete help text with categorized sections
pub fn generate_help() -> String {
    let mut output = String::new();

    output.push_str("tickler - A small task list\n");
    output.push('\n');
    output.push_str("Usage: tickler <command> [options]\n");
    output.push('\n');

    let commands = command_registry();
    let mut by_category: BTreeMap<Category, Vec<&CommandInfo>> = BTreeMap::new();
    for cmd in &commands {
        by_category.entry(cmd.category).or_default().push(cmd);
    }

    for (category, cmds) in &by_category {
        output.push_str(category.heading());
        output.push_str(":\n");

        let max_name_len = cmds.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for cmd in cmds {
            output.push_str(&format!(
                "  {:width$}  {}\n",
                cmd.name,
                cmd.description,
                width = max_name_len
            ));
        }

        output.push('\n');
    }

    output.push_str("Tasks are referred to by list position, id or id prefix.\n");
    output.push_str("Run 'tickler <command> --help' for more information on a command.\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_command_registry_matches_enum() {
        let cli = Cli::command();
        let mut clap_commands: Vec<String> = cli
            .get_subcommands()
            .filter(|c| !c.is_hide_set())
            .map(|c| c.get_name().to_string())
            .collect();
        clap_commands.sort();

        let mut registry_commands: Vec<String> = command_registry()
            .iter()
            .map(|c| c.name.to_string())
            .collect();
        registry_commands.sort();

        assert_eq!(
            clap_commands, registry_commands,
            "Command registry is out of sync with Commands enum!"
        );
    }

    #[test]
    fn test_help_generation() {
        let help = generate_help();

        assert!(help.contains("Main:"));
        assert!(help.contains("Transfer:"));
        assert!(help.contains("Configure:"));
        assert!(help.contains("  add "));
        assert!(help.contains("  completions  Shell completions"));

        // Sections are rendered in declaration order
        let main = help.find("Main:").unwrap();
        let configure = help.find("Configure:").unwrap();
        assert!(main < configure);
    }
}
