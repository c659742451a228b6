//! Error kinds raised by the domain layer

use thiserror::Error;

use super::method::HttpMethod;

/// Input rejected before any file is touched
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid HTTP method: {0}. Must be one of: {methods}", methods = HttpMethod::names().join(", "))]
    InvalidMethod(String),

    #[error("At least one item name is required")]
    EmptyItems,

    #[error("Invalid item name '{0}': use letters, digits, hyphens and spaces")]
    InvalidName(String),

    #[error("Invalid convention '{key}': {reason}")]
    InvalidConvention { key: &'static str, reason: String },
}

/// Failure to merge new content into an existing file
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Method {0} already exists")]
    DuplicateMethod(HttpMethod),

    #[error("Malformed file: {0}")]
    Malformed(String),

    #[error("Invalid structural pattern: {0}")]
    Pattern(#[from] regex::Error),
}
