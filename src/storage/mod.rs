//! # Storage Layer
//!
//! File-system boundary for astro-craft. The domain layer only maps text to
//! text; reading, writing and path layout live here.
//!
//! ## Generated Files
//!
//! | Item | Location |
//! |------|----------|
//! | Components | `src/components/{dash-name}.astro` |
//! | Layouts | `src/layouts/{PascalName}.astro` |
//! | API routes | `src/pages/api/{dash-name}.ts` |
//! | Pages | `src/pages/{dash-name}.astro` |
//!
//! Extensions come from `craft.toml` when present.
//!
//! ## Write Safety
//!
//! - Files are always rewritten whole, never patched in place
//! - Writes go through a temp file and a rename
//! - No locking: concurrent runs against the same files are unsupported
//!
//! ## Key Types
//!
//! - [`Project`] - Root directory, configuration and path layout
//! - [`Config`] - Project and global configuration

mod config;
mod files;
mod project;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, CONFIG_FILE};
pub use files::{ensure_dir, read_existing, write_atomic};
pub use project::{Project, ProjectError};
