//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--menu`)
//! 2. Environment variables (`DUNN_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup, so it is passed around by reference.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default receipt header.
pub const DEFAULT_STORE_NAME: &str = "Dunn Delivery";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Shown at the top of every order summary.
    pub store_name: String,

    /// Custom catalog JSON. `None` uses the standard campus menu.
    pub menu_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            menu_path: None,
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DUNN_STORE_NAME`: Override the receipt header
    /// - `DUNN_MENU_PATH`: Load the menu from a JSON file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("DUNN_STORE_NAME").filter(|v| !v.trim().is_empty()) {
            config.store_name = name;
        }

        if let Some(path) = lookup("DUNN_MENU_PATH").filter(|v| !v.trim().is_empty()) {
            config.menu_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Applies a `--menu` flag on top of the environment.
    pub fn with_menu_override(mut self, menu: Option<PathBuf>) -> Self {
        if menu.is_some() {
            self.menu_path = menu;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store_name, "Dunn Delivery");
    }

    #[test]
    fn test_environment_overrides() {
        let vars = HashMap::from([
            ("DUNN_STORE_NAME", "Night Owl Delivery"),
            ("DUNN_MENU_PATH", "/etc/dunn/menu.json"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Night Owl Delivery");
        assert_eq!(config.menu_path, Some(PathBuf::from("/etc/dunn/menu.json")));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flag_beats_environment() {
        let config = AppConfig::from_lookup(|key| {
            (key == "DUNN_MENU_PATH").then(|| "env.json".to_string())
        });

        let kept = config.clone().with_menu_override(None);
        assert_eq!(kept.menu_path, Some(PathBuf::from("env.json")));

        let replaced = config.with_menu_override(Some(PathBuf::from("flag.json")));
        assert_eq!(replaced.menu_path, Some(PathBuf::from("flag.json")));
    }
}
