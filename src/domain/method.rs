//! HTTP methods accepted for API route handlers

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    /// Every accepted method, in help-text order
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(HttpMethod::as_str).collect()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or(ValidationError::InvalidMethod(upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert_eq!(" HEAD ".parse::<HttpMethod>().unwrap(), HttpMethod::Head);
    }

    #[test]
    fn rejects_unknown_methods() {
        let err = "fetch".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidMethod("FETCH".to_string()));
        assert!(err.to_string().contains("GET, POST, PUT, DELETE, PATCH, OPTIONS, HEAD"));
    }

    #[test]
    fn display_round_trips() {
        for method in HttpMethod::ALL {
            assert_eq!(method.to_string().parse::<HttpMethod>().unwrap(), method);
        }
    }
}
