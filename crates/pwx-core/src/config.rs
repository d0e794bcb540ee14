//! Configuration management for pwx.
//!
//! Loads configuration from ${PWX_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for pwx configuration and data directories.
    //!
    //! PWX_HOME resolution order:
    //! 1. PWX_HOME environment variable (if set)
    //! 2. ~/.config/pwx (default)

    use std::path::PathBuf;

    /// Returns the pwx home directory.
    ///
    /// Checks PWX_HOME env var first, falls back to ~/.config/pwx
    pub fn pwx_home() -> PathBuf {
        if let Ok(home) = std::env::var("PWX_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("pwx"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        pwx_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        pwx_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Password keeper service settings.
    pub server: ServerConfig,
}

/// Connection settings for the password keeper service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the service (the PWX_SERVER_URL env var wins over this).
    pub url: Option<String>,
}

impl ServerConfig {
    /// Returns the configured URL if set and non-empty.
    pub fn effective_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Saves only the server URL to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_server_url(url: &str) -> Result<()> {
        Self::save_server_url_to(&paths::config_path(), url)
    }

    /// Saves only the server URL to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    pub fn save_server_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["server"]["url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.server.url, None);
    }

    /// Config loading: server section parses into the server field.
    #[test]
    fn test_load_server_url_from_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[server]\nurl = \"https://keeper.example.com\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.server.effective_url(),
            Some("https://keeper.example.com")
        );
    }

    /// Server URL: empty/whitespace treated as unset.
    #[test]
    fn test_server_url_empty_is_none() {
        let config = Config {
            server: ServerConfig {
                url: Some("   ".to_string()),
            },
        };
        assert_eq!(config.server.effective_url(), None);
    }

    /// Config init: creates file with template, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# pwx Configuration"));
        assert!(contents.contains("# url ="));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// An init'd config parses back to defaults (the url stays commented).
    #[test]
    fn test_init_config_round_trips_to_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::init(&config_path).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.server.effective_url(), None);
    }

    /// save_server_url: creates new config file with template if missing.
    #[test]
    fn test_save_server_url_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_server_url_to(&config_path, "https://keeper.example.com").unwrap();

        assert!(config_path.exists());

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.server.effective_url(),
            Some("https://keeper.example.com")
        );

        // Template comments are preserved
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# pwx Configuration"));
    }

    /// save_server_url: preserves other fields in existing config.
    #[test]
    fn test_save_server_url_preserves_existing_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[server]\nurl = \"http://old.example.com\"\n").unwrap();

        Config::save_server_url_to(&config_path, "http://new.example.com").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.server.effective_url(),
            Some("http://new.example.com")
        );

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# pwx Configuration"));
    }

    /// save_server_url: creates parent directories if needed.
    #[test]
    fn test_save_server_url_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("dir").join("config.toml");

        Config::save_server_url_to(&config_path, "http://keeper.local").unwrap();

        assert!(config_path.exists());
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.server.effective_url(), Some("http://keeper.local"));
    }
}
