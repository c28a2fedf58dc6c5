//! Configuration loader with tier-based merging.
//!
//! Loads configuration documents from multiple tiers and merges them
//! field-by-field before deserializing the result once. Individual tier
//! files may be partial; only the merged whole must satisfy the schema.

use super::merge::deep_merge_all;
use super::types::{SpecConfig, SpecStatus};
use crate::error::ConfigError;
use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Base name of configuration files.
pub const CONFIG_STEM: &str = "respec";

/// Recognized configuration file extensions, in lookup order.
pub const CONFIG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// Per-user defaults (`~/.respec/`), e.g. a working group's shared
    /// editors and mailing list (lowest priority)
    User = 0,
    /// The document's own configuration file
    Project = 1,
    /// Named profile overlay (`respec.<name>.yaml`)
    Profile = 2,
    /// Environment variables (highest priority)
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::Profile => write!(f, "profile"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Directories searched for configuration files.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Directory holding the document's own config file
    pub project_dir: Option<PathBuf>,
    /// Per-user defaults directory
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        // User dir: RESPEC_USER_DIR or ~/.respec
        let user_dir = std::env::var("RESPEC_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".respec")));

        // Project dir: RESPEC_PROJECT_DIR or the current directory
        let project_dir = std::env::var("RESPEC_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from(".")));

        Self {
            project_dir,
            user_dir,
        }
    }

    /// Create paths with explicit directories.
    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }
}

/// Find a config file `<stem>.{yaml,yml,json}` in a directory.
fn find_config_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.exists())
}

/// Read and parse one configuration document into a raw JSON value.
///
/// JSON files go through `serde_json`, everything else through `serde_yaml`.
fn read_document(path: &Path) -> std::result::Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let parsed = if is_json {
        serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directories that were searched
    pub paths: ConfigPaths,
    /// Loaded configuration
    config: SpecConfig,
    /// Path to the project config file that was used (if any)
    config_path: Option<PathBuf>,
    /// Profile overlay that was applied (if any)
    profile: Option<String>,
}

impl ConfigLoader {
    /// Load configuration from discovered paths, without a profile overlay.
    pub fn load() -> Result<Self> {
        Self::load_with_paths(ConfigPaths::discover(), None)
    }

    /// Load configuration with explicit paths and an optional profile.
    pub fn load_with_paths(paths: ConfigPaths, profile: Option<&str>) -> Result<Self> {
        // Explicit config path bypasses tier discovery entirely
        if let Ok(explicit_path) = std::env::var("RESPEC_CONFIG_PATH") {
            let path = PathBuf::from(&explicit_path);
            let document = read_document(&path)?;
            let mut config: SpecConfig =
                serde_json::from_value(document).map_err(ConfigError::Invalid)?;
            Self::apply_env_overrides(&mut config);
            return Ok(Self {
                paths,
                config,
                config_path: Some(path),
                profile: None,
            });
        }

        // Collect raw documents from each tier, lowest priority first
        let mut documents: Vec<Value> = Vec::new();

        // Tier: user defaults. A broken user file should not brick every
        // project that user touches, so it is skipped with a warning.
        if let Some(ref user_dir) = paths.user_dir {
            if let Some(file) = find_config_file(user_dir, CONFIG_STEM) {
                match read_document(&file) {
                    Ok(document) => {
                        debug!(path = %file.display(), tier = %ConfigTier::User, "loaded configuration document");
                        documents.push(document);
                    }
                    Err(e) => warn!(path = %file.display(), error = %e, "skipping user configuration"),
                }
            }
        }

        // Tier: project. Errors here are fatal; silently rendering a
        // document with half its metadata missing is worse than failing.
        let mut config_path = None;
        if let Some(ref project_dir) = paths.project_dir {
            if let Some(file) = find_config_file(project_dir, CONFIG_STEM) {
                let document = read_document(&file)?;
                debug!(path = %file.display(), tier = %ConfigTier::Project, "loaded configuration document");
                documents.push(document);
                config_path = Some(file);
            }
        }

        // Tier: profile overlay, only looked up next to the project file
        if let Some(name) = profile {
            let stem = format!("{}.{}", CONFIG_STEM, name);
            let file = paths
                .project_dir
                .as_ref()
                .and_then(|dir| find_config_file(dir, &stem));
            match file {
                Some(file) => {
                    let document = read_document(&file)?;
                    debug!(path = %file.display(), tier = %ConfigTier::Profile, profile = name, "loaded configuration document");
                    documents.push(document);
                }
                None => {
                    return Err(ConfigError::ProfileNotFound {
                        profile: name.to_string(),
                        dir: paths
                            .project_dir
                            .clone()
                            .unwrap_or_else(|| PathBuf::from(".")),
                    }
                    .into());
                }
            }
        }

        if documents.is_empty() {
            return Err(ConfigError::NotFound {
                searched: Self::searched_description(&paths),
            }
            .into());
        }

        // Merge all documents, deserialize once
        let merged = deep_merge_all(documents);
        let mut config: SpecConfig =
            serde_json::from_value(merged).map_err(ConfigError::Invalid)?;

        // Tier: environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(Self {
            paths,
            config,
            config_path,
            profile: profile.map(String::from),
        })
    }

    /// Apply environment variable overrides to the merged configuration.
    ///
    /// These exist so CI can bump the status or stamp the publication date
    /// at publish time without editing the checked-in file.
    fn apply_env_overrides(config: &mut SpecConfig) {
        if let Ok(status) = std::env::var("RESPEC_SPEC_STATUS") {
            match SpecStatus::from_str(&status) {
                Some(parsed) => config.spec_status = parsed,
                None => warn!(value = %status, "ignoring unrecognized RESPEC_SPEC_STATUS"),
            }
        }

        if let Ok(short_name) = std::env::var("RESPEC_SHORT_NAME") {
            config.short_name = short_name;
        }

        if let Ok(date) = std::env::var("RESPEC_PUBLISH_DATE") {
            match date.parse::<NaiveDate>() {
                Ok(parsed) => config.publish_date = Some(parsed),
                Err(_) => warn!(value = %date, "ignoring unparseable RESPEC_PUBLISH_DATE"),
            }
        }
    }

    /// Human-readable list of locations that were searched, for errors.
    fn searched_description(paths: &ConfigPaths) -> String {
        let mut locations = Vec::new();
        if let Some(ref dir) = paths.project_dir {
            locations.push(format!("{}/{}.{{yaml,yml,json}}", dir.display(), CONFIG_STEM));
        }
        if let Some(ref dir) = paths.user_dir {
            locations.push(format!("{}/{}.{{yaml,yml,json}}", dir.display(), CONFIG_STEM));
        }
        locations.join(", ")
    }

    /// List profile overlays available next to the project config file.
    pub fn list_profiles(&self) -> Vec<String> {
        let Some(ref project_dir) = self.paths.project_dir else {
            return Vec::new();
        };
        let Ok(entries) = std::fs::read_dir(project_dir) else {
            return Vec::new();
        };

        let prefix = format!("{}.", CONFIG_STEM);
        let mut profiles: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let stem = name.strip_suffix(".yaml")
                    .or_else(|| name.strip_suffix(".yml"))
                    .or_else(|| name.strip_suffix(".json"))?;
                stem.strip_prefix(&prefix).map(String::from)
            })
            .filter(|profile| !profile.is_empty())
            .collect();
        profiles.sort();
        profiles.dedup();
        profiles
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &SpecConfig {
        &self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> SpecConfig {
        self.config
    }

    /// Get the project config file path that was used.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get the profile overlay that was applied.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}
