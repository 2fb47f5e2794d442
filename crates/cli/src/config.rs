use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tasks::Filter;

const APP_NAME: &str = "tickler";

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "database.path",
    "database.url",
    "database.namespace",
    "ui.default_filter",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Filter used when a command doesn't ask for one
    pub default_filter: Option<Filter>,
}

/// Database configuration - re-exported from db crate
pub use db::DatabaseConfig;

pub fn get_config_dir() -> Result<PathBuf> {
    // TICKLER_CONFIG_PATH overrides the default config directory
    if let Ok(path) = std::env::var("TICKLER_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("Could not determine config directory")
}

pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

pub fn get_db_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.database.path {
        return Ok(path.clone());
    }
    Ok(get_config_dir()?.join("db"))
}

pub fn default_filter(config: &Config) -> Filter {
    config.ui.default_filter.unwrap_or_default()
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file()?)
}

fn load_config_from(config_file: &Path) -> Result<Config> {
    if !config_file.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_file)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &get_config_dir()?)
}

fn save_config_to(config: &Config, config_dir: &Path) -> Result<()> {
    let config_file = config_dir.join("config.toml");

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o700);
            fs::set_permissions(config_dir, perms)?;
        }
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&config_file, contents)
        .with_context(|| format!("Failed to write config file: {}", config_file.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(&config_file, perms)?;
    }

    Ok(())
}

pub fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "database.path" => config.database.path.as_ref().map(|p| p.display().to_string()),
        "database.url" => config.database.url.clone(),
        "database.namespace" => config.database.namespace.clone(),
        "ui.default_filter" => config.ui.default_filter.map(|f| f.to_string()),
        _ => None,
    }
}

pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "database.path" => config.database.path = Some(PathBuf::from(value)),
        "database.url" => config.database.url = Some(value.to_string()),
        "database.namespace" => config.database.namespace = Some(value.to_string()),
        "ui.default_filter" => config.ui.default_filter = Some(value.parse()?),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(cfg.database.path.is_none());
        assert_eq!(default_filter(&cfg), Filter::All);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("tickler");

        let mut cfg = Config::default();
        set_config_value(&mut cfg, "ui.default_filter", "active").unwrap();
        set_config_value(&mut cfg, "database.path", "/tmp/tickler-db").unwrap();
        save_config_to(&cfg, &config_dir).unwrap();

        let loaded = load_config_from(&config_dir.join("config.toml")).unwrap();
        assert_eq!(default_filter(&loaded), Filter::Active);
        assert_eq!(
            get_config_value(&loaded, "database.path").as_deref(),
            Some("/tmp/tickler-db")
        );
        assert_eq!(get_db_path(&loaded).unwrap(), PathBuf::from("/tmp/tickler-db"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut cfg = Config::default();
        assert!(set_config_value(&mut cfg, "ui.default_filter", "someday").is_err());
        assert!(set_config_value(&mut cfg, "daemon.socket_path", "/x").is_err());
        assert!(get_config_value(&cfg, "ui.default_filter").is_none());
    }

    #[test]
    fn test_parse_toml() {
        let cfg: Config = toml::from_str(
            r#"
            [database]
            url = "mem://"

            [ui]
            default_filter = "done"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.url.as_deref(), Some("mem://"));
        assert_eq!(cfg.ui.default_filter, Some(Filter::Done));
    }
}
