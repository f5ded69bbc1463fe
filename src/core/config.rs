//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.videostream/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::catalog::DEFAULT_EMBED_BASE_URL;
use crate::core::navigation::Tab;
use crate::core::profile::{ProfileInfo, Settings};
use crate::core::saved::DEFAULT_DATE_FORMAT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VideostreamConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<Tab>,
    pub catalog_path: Option<String>,
    pub date_format: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub embed_base_url: Option<String>,
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub plan: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SettingsConfig {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
    pub auto_download: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROFILE_NAME: &str = "John Doe";
pub const DEFAULT_PROFILE_EMAIL: &str = "john.doe@example.com";
pub const DEFAULT_AVATAR_URL: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg";
pub const DEFAULT_PLAN: &str = "Premium";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_tab: Tab,
    /// None = built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub date_format: String,
    pub embed_base_url: String,
    pub player_command: Option<String>,
    pub profile: ProfileInfo,
    pub settings: Settings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.videostream/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".videostream").join("config.toml"))
}

/// Load config from `~/.videostream/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VideostreamConfig::default()`.
pub fn load_config() -> Result<VideostreamConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(VideostreamConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<VideostreamConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(VideostreamConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: VideostreamConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# VideoStream Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                  # "home", "explore", "saved", "profile"
# catalog_path = "/path/to/catalog.json"   # Or VIDEOSTREAM_CATALOG / --catalog
# date_format = "%b %-d, %Y"          # Label format for newly saved videos

# [player]
# embed_base_url = "https://www.youtube.com/embed"   # Or VIDEOSTREAM_EMBED_BASE_URL
# command = "mpv"                     # Or VIDEOSTREAM_PLAYER; URL is passed as last argument

# [profile]
# name = "John Doe"
# email = "john.doe@example.com"
# avatar_url = "https://..."
# plan = "Premium"

# [settings]
# dark_mode = true
# notifications = true
# auto_download = true
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &VideostreamConfig,
    cli_tab: Option<Tab>,
    cli_catalog: Option<&Path>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_tab, cli_catalog, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &VideostreamConfig,
    cli_tab: Option<Tab>,
    cli_catalog: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → built-in
    let catalog_path = cli_catalog
        .map(Path::to_path_buf)
        .or_else(|| env("VIDEOSTREAM_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog_path.as_ref().map(PathBuf::from));

    // Embed base: env → config → default
    let embed_base_url = env("VIDEOSTREAM_EMBED_BASE_URL")
        .or_else(|| config.player.embed_base_url.clone())
        .unwrap_or_else(|| DEFAULT_EMBED_BASE_URL.to_string());

    let player_command = env("VIDEOSTREAM_PLAYER")
        .or_else(|| config.player.command.clone())
        .filter(|cmd| !cmd.trim().is_empty());

    let profile = ProfileInfo {
        name: config
            .profile
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        email: config
            .profile
            .email
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_EMAIL.to_string()),
        avatar_url: config
            .profile
            .avatar_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        plan: config
            .profile
            .plan
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAN.to_string()),
    };

    let defaults = Settings::default();
    let settings = Settings {
        dark_mode: config.settings.dark_mode.unwrap_or(defaults.dark_mode),
        notifications: config
            .settings
            .notifications
            .unwrap_or(defaults.notifications),
        auto_download: config
            .settings
            .auto_download
            .unwrap_or(defaults.auto_download),
    };

    ResolvedConfig {
        start_tab: cli_tab.or(config.general.start_tab).unwrap_or_default(),
        catalog_path,
        date_format: config
            .general
            .date_format
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        embed_base_url,
        player_command,
        profile,
        settings,
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&VideostreamConfig::default(), None, None, |_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&VideostreamConfig::default(), None, None, no_env);
        assert_eq!(resolved.start_tab, Tab::Home);
        assert!(resolved.catalog_path.is_none());
        assert_eq!(resolved.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(resolved.embed_base_url, DEFAULT_EMBED_BASE_URL);
        assert!(resolved.player_command.is_none());
        assert_eq!(resolved.profile.name, DEFAULT_PROFILE_NAME);
        assert_eq!(resolved.settings, Settings::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VideostreamConfig {
            general: GeneralConfig {
                start_tab: Some(Tab::Saved),
                catalog_path: Some("/tmp/catalog.json".to_string()),
                date_format: Some("%Y-%m-%d".to_string()),
            },
            player: PlayerConfig {
                embed_base_url: Some("https://embed.example".to_string()),
                command: Some("mpv".to_string()),
            },
            settings: SettingsConfig {
                dark_mode: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.start_tab, Tab::Saved);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(resolved.date_format, "%Y-%m-%d");
        assert_eq!(resolved.embed_base_url, "https://embed.example");
        assert_eq!(resolved.player_command.as_deref(), Some("mpv"));
        assert!(!resolved.settings.dark_mode);
        assert!(resolved.settings.notifications);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = VideostreamConfig {
            general: GeneralConfig {
                start_tab: Some(Tab::Saved),
                catalog_path: Some("from-config.json".to_string()),
                ..Default::default()
            },
            player: PlayerConfig {
                embed_base_url: Some("https://config.example".to_string()),
                command: None,
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "VIDEOSTREAM_CATALOG" => Some("from-env.json".to_string()),
            "VIDEOSTREAM_EMBED_BASE_URL" => Some("https://env.example".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, None, None, env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-env.json")));
        assert_eq!(resolved.embed_base_url, "https://env.example");

        let resolved = resolve_with_env(
            &config,
            Some(Tab::Profile),
            Some(Path::new("from-cli.json")),
            env,
        );
        assert_eq!(resolved.start_tab, Tab::Profile);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-cli.json")));
    }

    #[test]
    fn test_blank_player_command_is_ignored() {
        let config = VideostreamConfig {
            player: PlayerConfig {
                command: Some("   ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert!(resolved.player_command.is_none());
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
start_tab = "explore"
date_format = "%d/%m/%Y"

[player]
command = "mpv"

[profile]
name = "Ada"
plan = "Free"

[settings]
notifications = false
"#;
        let config: VideostreamConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_tab, Some(Tab::Explore));
        assert_eq!(config.player.command.as_deref(), Some("mpv"));
        assert_eq!(config.profile.name.as_deref(), Some("Ada"));
        assert!(config.profile.email.is_none());
        assert_eq!(config.settings.notifications, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: VideostreamConfig = toml::from_str("[player]\nembed_base_url = \"x\"\n").unwrap();
        assert_eq!(config.player.embed_base_url.as_deref(), Some("x"));
        assert!(config.general.start_tab.is_none());
    }

    #[test]
    fn test_unknown_tab_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nstart_tab = \"library\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.start_tab.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# VideoStream Configuration"));
        // Everything is commented out, so it parses back to defaults.
        let reparsed: VideostreamConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.player.command.is_none());
    }
}
