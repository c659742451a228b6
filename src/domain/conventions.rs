//! Project naming conventions shared by templates and merges

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::method::HttpMethod;

/// File extensions, import aliases and the page wrapper element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Extension for components, layouts and pages
    pub component_extension: String,

    /// Extension for API route files
    pub route_extension: String,

    /// Import alias resolving to `src/components`
    pub components_alias: String,

    /// Import alias resolving to `src/layouts`
    pub layouts_alias: String,

    /// Element wrapping every page body
    pub wrapper: String,

    /// Method used by `add-api` when `--method` is omitted
    pub default_method: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            component_extension: "astro".to_string(),
            route_extension: "ts".to_string(),
            components_alias: "@components".to_string(),
            layouts_alias: "@layouts".to_string(),
            wrapper: "Layout".to_string(),
            default_method: "GET".to_string(),
        }
    }
}

impl Conventions {
    /// Checks every field, reporting the first offending key
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (key, value) in [
            ("component_extension", &self.component_extension),
            ("route_extension", &self.route_extension),
        ] {
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ValidationError::InvalidConvention {
                    key,
                    reason: format!("'{}' is not a file extension", value),
                });
            }
        }

        for (key, value) in [
            ("components_alias", &self.components_alias),
            ("layouts_alias", &self.layouts_alias),
        ] {
            if value.is_empty() || value.ends_with('/') || value.contains('\'') {
                return Err(ValidationError::InvalidConvention {
                    key,
                    reason: format!("'{}' is not an import prefix", value),
                });
            }
        }

        let mut wrapper = self.wrapper.chars();
        let wrapper_ok = wrapper.next().is_some_and(|c| c.is_ascii_uppercase())
            && wrapper.all(|c| c.is_ascii_alphanumeric());
        if !wrapper_ok {
            return Err(ValidationError::InvalidConvention {
                key: "wrapper",
                reason: format!("'{}' is not a component element name", self.wrapper),
            });
        }

        self.method()?;
        Ok(())
    }

    /// The configured default method
    pub fn method(&self) -> Result<HttpMethod, ValidationError> {
        self.default_method.parse()
    }
}
