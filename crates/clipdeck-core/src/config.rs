//! Configuration management for clipdeck.
//!
//! Loads configuration from ${CLIPDECK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "CLIPDECK_API_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments from the template are always present while the user's
/// values win.
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
    //! Path resolution for clipdeck configuration and data directories.
    //!
    //! CLIPDECK_HOME resolution order:
    //! 1. CLIPDECK_HOME environment variable (if set)
    //! 2. ~/.config/clipdeck (default)

    use std::path::PathBuf;

    /// Returns the clipdeck home directory.
    pub fn clipdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("CLIPDECK_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".clipdeck"),
            |h| h.join(".config").join("clipdeck"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        clipdeck_home().join("config.toml")
    }

    /// Returns the path to the persisted credential store.
    pub fn session_path() -> PathBuf {
        clipdeck_home().join("session.json")
    }

    /// Returns the directory holding rolling log files.
    pub fn logs_dir() -> PathBuf {
        clipdeck_home().join("logs")
    }

    /// Returns the default playback cache directory.
    pub fn cache_dir() -> PathBuf {
        clipdeck_home().join("cache")
    }
}

/// clipdeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL (e.g. `http://localhost:8080/api`).
    pub api_url: String,
    /// Per-request timeout; 0 disables it.
    pub request_timeout_secs: u32,
    /// Role claim value that maps to the admin screen tree.
    pub admin_role: String,
    /// Override for the playback cache directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
}

impl Config {
    pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
    const DEFAULT_TIMEOUT_SECS: u32 = 30;
    const DEFAULT_ADMIN_ROLE: &str = "admin";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
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

    /// Saves only the `api_url` field to the config file.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_api_url(url: &str) -> Result<()> {
        Self::save_api_url_to(&paths::config_path(), url)
    }

    /// Saves only the `api_url` field to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist.
    /// If the file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_api_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let url = url.trim();
        validate_url(url)?;

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
        doc["api_url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Resolves the API base URL with precedence: env > config > default.
    ///
    /// # Errors
    /// Returns an error if the chosen URL does not parse.
    pub fn effective_api_url(&self) -> Result<String> {
        let env_url = std::env::var(API_URL_ENV).ok();
        resolve_api_url(env_url.as_deref(), &self.api_url)
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Directory for decoded playback files.
    pub fn media_cache_dir(&self) -> PathBuf {
        match self.cache_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => paths::cache_dir(),
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
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

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            admin_role: Self::DEFAULT_ADMIN_ROLE.to_string(),
            cache_dir: None,
        }
    }
}

/// Picks the first non-blank URL from env, then config, then the default.
fn resolve_api_url(env_url: Option<&str>, config_url: &str) -> Result<String> {
    let chosen = env_url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .or_else(|| Some(config_url.trim()).filter(|u| !u.is_empty()))
        .unwrap_or(Config::DEFAULT_API_URL);

    validate_url(chosen)?;
    Ok(chosen.trim_end_matches('/').to_string())
}

fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    Ok(())
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
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8080/api");
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "admin_role = \"ROLE_ADMIN\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.admin_role, "ROLE_ADMIN");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.api_url, Config::DEFAULT_API_URL);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "api_url = [").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    /// Config init: creates file with defaults and parent dirs.
    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("api_url = \"http://localhost:8080/api\""));
        assert!(contents.contains("# cache_dir ="));
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::default());
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_save_api_url_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "api_url = \"http://old:8080/api\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        Config::save_api_url_to(&config_path, "https://videos.example.com/api").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_url, "https://videos.example.com/api");
        assert_eq!(config.request_timeout_secs, 5);
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# clipdeck Configuration"));
    }

    #[test]
    fn test_save_api_url_rejects_invalid_url() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let err = Config::save_api_url_to(&config_path, "not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid API base URL"));
        assert!(!config_path.exists());
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), None);
        assert_eq!(
            Config::default().request_timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_resolve_api_url_precedence() {
        assert_eq!(
            resolve_api_url(Some("http://env:1/api/"), "http://cfg:2/api").unwrap(),
            "http://env:1/api"
        );
        assert_eq!(
            resolve_api_url(Some("   "), "http://cfg:2/api").unwrap(),
            "http://cfg:2/api"
        );
        assert_eq!(
            resolve_api_url(None, "").unwrap(),
            Config::DEFAULT_API_URL
        );
        assert!(resolve_api_url(Some("::nope"), "http://cfg:2/api").is_err());
    }

    #[test]
    fn test_media_cache_dir_override() {
        let config = Config {
            cache_dir: Some("/tmp/clipdeck-cache".to_string()),
            ..Default::default()
        };
        assert_eq!(config.media_cache_dir(), PathBuf::from("/tmp/clipdeck-cache"));
    }
}
