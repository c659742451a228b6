//! astro-craft - Scaffolding for Astro projects
//!
//! Creates components, layouts and API routes from fixed templates and wires
//! them into existing pages. Re-running a command never duplicates imports,
//! usage tags or route handlers.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{HttpMethod, Identifier, ItemKind, MergeError, MergeRequest, ValidationError};
