//! Configuration handling for astro-craft
//!
//! Configuration is stored in `craft.toml` (project root) and
//! `~/.config/astro-craft/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Conventions;

/// Project configuration file name
pub const CONFIG_FILE: &str = "craft.toml";

/// Written by `astro-craft init`
pub const DEFAULT_CONFIG: &str = r#"# astro-craft configuration

[conventions]
# Extension for components, layouts and pages
component_extension = "astro"

# Extension for API route files
route_extension = "ts"

# Import aliases used when wiring items into pages
components_alias = "@components"
layouts_alias = "@layouts"

# Element wrapping every page body
wrapper = "Layout"

# Method used by add-api when --method is omitted
default_method = "GET"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// File naming and page wiring conventions
    pub conventions: Conventions,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration for a specific project root
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project_config(project_root)?;

        Ok(Self { project, global })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "astro-craft", "astro-craft").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads and validates `craft.toml` from a project root
    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        Self::parse_project_config(&content)
            .with_context(|| format!("Failed to load project config: {}", config_path.display()))
    }

    fn parse_project_config(content: &str) -> Result<ProjectConfig, ConfigError> {
        let config: ProjectConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .conventions
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(config)
    }

    /// Finds the project root by looking for `craft.toml` from `start` upwards
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HttpMethod;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_defaults() {
        let config = Config::parse_project_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn parse_partial_project_config() {
        let toml = r#"
[conventions]
route_extension = "js"
default_method = "post"
"#;

        let config = Config::parse_project_config(toml).unwrap();
        assert_eq!(config.conventions.route_extension, "js");
        assert_eq!(config.conventions.component_extension, "astro");
        assert_eq!(config.conventions.method().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn invalid_conventions_are_rejected() {
        let toml = r#"
[conventions]
wrapper = "main"
"#;

        let err = Config::parse_project_config(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_project_config("[conventions\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn parse_global_config() {
        let config: GlobalConfig = toml::from_str("default_format = \"json\"\n").unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn find_project_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), DEFAULT_CONFIG).unwrap();

        let sub_dir = dir.path().join("src").join("pages");
        fs::create_dir_all(&sub_dir).unwrap();

        let root = Config::find_project_root(&sub_dir);
        assert_eq!(root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn find_project_root_without_config() {
        let dir = TempDir::new().unwrap();
        let sub_dir = dir.path().join("nested");
        fs::create_dir_all(&sub_dir).unwrap();

        // Ancestors of a temp dir are not expected to hold a craft.toml
        let root = Config::find_project_root(&sub_dir);
        assert!(root.map_or(true, |r| !r.starts_with(dir.path())));
    }
}
