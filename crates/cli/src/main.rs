mod commands;
mod completions;
mod config;
mod handler;
mod help;
mod session;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::env::CompleteEnv;
use db::Database;

use crate::commands::TaskCommand;

/// Supported shells for completion generation
#[derive(Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
    /// Print setup instructions for the current shell
    Install,
}

#[derive(Parser)]
#[command(name = "tickler")]
#[command(about = "A small task list")]
#[command(version)]
struct Cli {
    /// Use a throwaway in-memory store instead of the configured database
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Tasks(TaskCommand),

    #[command(flatten)]
    System(SystemCommands),
}

#[derive(Subcommand)]
enum SystemCommands {
    /// Configuration management
    #[command(display_order = 20)]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Initialize tickler configuration
    #[command(display_order = 21)]
    Init,
    /// Generate shell completions
    #[command(display_order = 22)]
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Show configuration file path
    Path,
}

fn main() -> Result<()> {
    // Handle dynamic shell completions (if triggered by shell completion request)
    CompleteEnv::with_factory(Cli::command).complete();

    // Top-level help is our own; subcommands use clap's
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 1 || (args.len() == 2 && (args[1] == "-h" || args[1] == "--help")) {
        print!("{}", help::generate_help());
        return Ok(());
    }

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print!("{}", help::generate_help());
        return Ok(());
    };

    // Default to WARN level for quiet CLI output
    // Use RUST_LOG=info or RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match command {
        Commands::Tasks(cmd) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_task_command(cmd, cli.ephemeral))
        }
        Commands::System(cmd) => match cmd {
            SystemCommands::Config { action } => handle_config(action),
            SystemCommands::Init => handle_init(),
            SystemCommands::Completions { shell } => {
                completions::generate_completions(shell);
                Ok(())
            }
        },
    }
}

async fn run_task_command(cmd: TaskCommand, ephemeral: bool) -> Result<()> {
    let cfg = config::load_config()?;

    let db = if ephemeral {
        Database::memory().await?
    } else {
        Database::connect(&cfg.database, Some(config::get_db_path(&cfg)?)).await?
    };

    let mut stdout = std::io::stdout().lock();
    handler::handle_task_command(cmd, &db, config::default_filter(&cfg), &mut stdout).await
}

fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = config::load_config()?;
            let toml_str = toml::to_string_pretty(&cfg)?;
            println!("{}", toml_str);
            Ok(())
        }
        ConfigAction::Get { key } => {
            let cfg = config::load_config()?;
            match config::get_config_value(&cfg, &key) {
                Some(value) => println!("{}", value),
                None => {
                    if config::CONFIG_KEYS.contains(&key.as_str()) {
                        println!("(not set)");
                    } else {
                        anyhow::bail!("Unknown config key: {}", key);
                    }
                }
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = config::load_config()?;
            config::set_config_value(&mut cfg, &key, &value)?;
            config::save_config(&cfg)?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::get_config_file()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn handle_init() -> Result<()> {
    let config_file = config::get_config_file()?;

    if config_file.exists() {
        println!("Config file already exists: {}", config_file.display());
        return Ok(());
    }

    let cfg = config::Config::default();
    config::save_config(&cfg)?;
    println!("Created config file: {}", config_file.display());

    println!();
    println!("Default paths:");
    println!("  Database: {}", config::get_db_path(&cfg)?.display());

    Ok(())
}
