use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::{Cli, CompletionShell};

const BIN_NAME: &str = "tickler";

pub fn generate_completions(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Elvish => Shell::Elvish,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Install => {
            print_install_instructions();
            return;
        }
    };
    generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

fn print_install_instructions() {
    match detect_shell() {
        Some(name) => {
            println!("For {} completions, add this to your shell rc:", name);
            println!();
            match name {
                "zsh" => println!("  source <(COMPLETE=zsh {})", BIN_NAME),
                "bash" => println!("  source <(COMPLETE=bash {})", BIN_NAME),
                "fish" => println!("  COMPLETE=fish {} | source", BIN_NAME),
                _ => println!("  # See: {} completions --help", BIN_NAME),
            }
            println!();
        }
        None => {
            println!("Could not detect shell. Generate completions manually:");
            println!("  {} completions <shell>", BIN_NAME);
            println!();
            println!("Available shells: bash, zsh, fish, powershell, elvish");
        }
    }
}

fn detect_shell() -> Option<&'static str> {
    std::env::var("SHELL").ok().and_then(|s| {
        if s.contains("zsh") {
            Some("zsh")
        } else if s.contains("bash") {
            Some("bash")
        } else if s.contains("fish") {
            Some("fish")
        } else {
            None
        }
    })
}
