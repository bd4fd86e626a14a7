//! Configuration loading from `.tweenfix.toml` or `package.json`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_EXTENSIONS, PACKAGE_JSON_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for tweenfix.
    pub tweenfix: TweenfixConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Configuration options for tweenfix.
pub struct TweenfixConfig {
    /// Extra directory names to skip, on top of the defaults.
    pub exclude_folders: Option<Vec<String>>,
    /// Directory names to scan even if excluded by default.
    pub include_folders: Option<Vec<String>>,
    /// File extensions to scan (`"tsx"` or `".tsx"`).
    pub extensions: Option<Vec<String>>,
    /// Whether `.gitignore` files prune the walk.
    pub respect_gitignore: Option<bool>,
}

impl TweenfixConfig {
    /// Configured extensions without leading dots, or the defaults.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        match &self.extensions {
            Some(exts) if !exts.is_empty() => exts
                .iter()
                .map(|e| e.trim_start_matches('.').to_owned())
                .collect(),
            _ => DEFAULT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
struct PackageJson {
    tweenfix: TweenfixConfig,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// In each directory `.tweenfix.toml` is tried first, then a `"tweenfix"`
    /// object in `package.json`. Unreadable or malformed files are skipped.
    /// Relative paths are canonicalized first so `.` still reaches its parents.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        loop {
            let tweenfix_toml = current.join(CONFIG_FILENAME);
            if tweenfix_toml.exists() {
                if let Ok(content) = fs::read_to_string(&tweenfix_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(tweenfix_toml);
                        return config;
                    }
                }
            }

            let package_json = current.join(PACKAGE_JSON_FILENAME);
            if package_json.exists() {
                if let Ok(content) = fs::read_to_string(&package_json) {
                    if let Ok(package) = serde_json::from_str::<PackageJson>(&content) {
                        return Config {
                            tweenfix: package.tweenfix,
                            config_file_path: Some(package_json),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
