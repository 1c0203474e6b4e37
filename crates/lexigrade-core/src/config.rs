//! Configuration loading and discovery.
//!
//! Discovery works by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from the XDG config directory
//! 3. Merging with defaults, then environment variables
//!
//! # Supported formats
//!
//! TOML (`.toml`), YAML (`.yaml`, `.yml`), and JSON (`.json`).
//!
//! # Config file locations (in order of precedence, highest first):
//! - `lexigrade.<ext>` in current directory or any parent
//! - `.lexigrade.<ext>` in current directory or any parent
//! - `~/.config/lexigrade/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via
//! figment. Later extensions override earlier: toml < yaml < yml < json.
//! Environment variables with the `LEXIGRADE_` prefix override everything.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::formulas::Formula;

/// The configuration for lexigrade.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Minimum word count enforced by the CLI before scoring.
    ///
    /// Omit to use the default (100). Scores on shorter texts are degraded
    /// per the formulas' design assumptions.
    pub min_words: Option<usize>,
    /// Default formula selection for the `score` command. Omit for all five.
    pub formulas: Option<Vec<Formula>>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Use
    /// `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "lexigrade";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/lexigrade/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `LEXIGRADE_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/lexigrade/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // LEXIGRADE_MIN_WORDS=150, LEXIGRADE_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("LEXIGRADE_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && Self::find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that
    /// has any match, ordered low-to-high precedence: dotfiles before
    /// regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Search order (low→high precedence, figment merges last-wins):
            //   1. .lexigrade.{toml,yaml,yml,json}
            //   2. lexigrade.{toml,yaml,yml,json}
            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let file = dir.join(format!("{APP_NAME}.{ext}"));
                if file.is_file() {
                    found.push(file);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Stop at the boundary marker
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
            {
                return Vec::new();
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in the XDG config directory.
    fn find_user_config() -> Option<Utf8PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()?;
        for ext in CONFIG_EXTENSIONS {
            let candidate = config_dir.join(format!("config.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    /// Merge a config file into the figment by extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("toml") => figment.merge(Toml::file(path.as_std_path())),
            Some("yaml" | "yml") => figment.merge(Yaml::file(path.as_std_path())),
            Some("json") => figment.merge(Json::file(path.as_std_path())),
            _ => figment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    #[test]
    fn defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(dir.path()))
            .without_boundary_marker()
            .load()
            .unwrap();
        // a parent dir on the host could shadow the temp dir; accept only
        // project files found inside it
        if sources.project_files.is_empty() {
            assert_eq!(config.min_words, None);
            assert_eq!(config.log_level, LogLevel::Info);
        }
    }

    #[test]
    fn loads_project_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexigrade.toml");
        fs::write(&path, "min_words = 150\nlog_level = \"debug\"\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(dir.path()))
            .load()
            .unwrap();
        assert_eq!(config.min_words, Some(150));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.primary_file(), Some(utf8(&path).as_path()));
    }

    #[test]
    fn explicit_file_wins_over_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lexigrade.toml"), "min_words = 150\n").unwrap();
        let explicit = dir.path().join("override.toml");
        fs::write(&explicit, "min_words = 50\n").unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(dir.path()))
            .with_file(utf8(&explicit))
            .load()
            .unwrap();
        assert_eq!(config.min_words, Some(50));
    }

    #[test]
    fn formula_list_deserializes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexigrade.toml");
        fs::write(&path, "formulas = [\"flesch\", \"dale-chall\"]\n").unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(dir.path()))
            .load()
            .unwrap();
        assert_eq!(
            config.formulas,
            Some(vec![Formula::Flesch, Formula::DaleChall])
        );
    }

    #[test]
    fn boundary_marker_stops_search() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lexigrade.toml"), "min_words = 150\n").unwrap();
        let child = dir.path().join("sub");
        fs::create_dir(&child).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(&child))
            .load()
            .unwrap();
        // the marker in `sub` hides the parent's config
        assert_eq!(config.min_words, None);
    }

    #[test]
    fn load_or_error_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(utf8(dir.path()))
            .with_boundary_marker("definitely-missing-marker")
            .load_or_error();
        // no config anywhere up the temp tree
        if let Err(err) = result {
            assert!(matches!(err, ConfigError::NotFound));
        }
    }
}
