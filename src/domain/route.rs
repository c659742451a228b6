//! Read-only view over an API route file

use std::sync::OnceLock;

use regex::Regex;

use super::method::HttpMethod;

/// Import every route file needs for its handler type annotations
pub const ROUTE_IMPORT: &str = "import type { APIRoute } from 'astro';";

fn declaration_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"export const (GET|POST|PUT|DELETE|PATCH|OPTIONS|HEAD)\s*:\s*APIRoute")
            .expect("route declaration pattern is valid")
    })
}

/// An API route file as found on disk
///
/// Handler detection is a structural match on the declaration the template
/// renderer emits, not a TypeScript parse.
#[derive(Debug, Clone, Copy)]
pub struct RouteFile<'a> {
    text: &'a str,
}

impl<'a> RouteFile<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Declared handler methods, in file order, without repeats
    pub fn methods(&self) -> Vec<HttpMethod> {
        let mut methods = Vec::new();
        for caps in declaration_pattern().captures_iter(self.text) {
            if let Ok(method) = caps[1].parse::<HttpMethod>() {
                if !methods.contains(&method) {
                    methods.push(method);
                }
            }
        }
        methods
    }

    /// Whether a handler for `method` is already exported
    pub fn declares(&self, method: HttpMethod) -> bool {
        self.methods().contains(&method)
    }

    pub fn has_import(&self) -> bool {
        self.text.contains(ROUTE_IMPORT)
    }
}
