//! Project management
//!
//! Resolves the project root, its configuration and where each kind of
//! generated file lives.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::{Config, CONFIG_FILE, DEFAULT_CONFIG};
use crate::domain::{Conventions, Identifier};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// An Astro project being scaffolded
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens the project rooted exactly at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(ProjectError::NotADirectory(root).into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the nearest project at or above `start`
    ///
    /// Without a `craft.toml` anywhere up the tree, `start` itself is used
    /// with default conventions.
    pub fn discover(start: &Path) -> Result<Self> {
        let root = Config::find_project_root(start).unwrap_or_else(|| start.to_path_buf());
        Self::open(root)
    }

    /// Writes a default `craft.toml` unless one exists
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create project directory: {}", root.display()))?;

        let config_path = Self::config_path(&root);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Location of the project configuration file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn conventions(&self) -> &Conventions {
        &self.config.project.conventions
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join("src").join("components")
    }

    pub fn layouts_dir(&self) -> PathBuf {
        self.root.join("src").join("layouts")
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join("src").join("pages")
    }

    pub fn routes_dir(&self) -> PathBuf {
        self.pages_dir().join("api")
    }

    /// `src/components/<dash>.<ext>`
    pub fn component_path(&self, name: &Identifier) -> PathBuf {
        let ext = &self.conventions().component_extension;
        self.components_dir().join(format!("{}.{}", name.dash(), ext))
    }

    /// `src/layouts/<Pascal>.<ext>`
    pub fn layout_path(&self, name: &Identifier) -> PathBuf {
        let ext = &self.conventions().component_extension;
        self.layouts_dir().join(format!("{}.{}", name.pascal(), ext))
    }

    /// `src/pages/api/<dash>.<route-ext>`
    pub fn route_path(&self, name: &Identifier) -> PathBuf {
        let ext = &self.conventions().route_extension;
        self.routes_dir().join(format!("{}.{}", name.dash(), ext))
    }

    /// `src/pages/<dash>.<ext>`
    pub fn page_path(&self, name: &Identifier) -> PathBuf {
        let ext = &self.conventions().component_extension;
        self.pages_dir().join(format!("{}.{}", name.dash(), ext))
    }
}
