//! Idempotent insertion into existing route and page files
//!
//! Every operation takes the current file text and returns the new text, or
//! an error, without touching the file system. Presence checks are literal:
//! content that differs only in formatting counts as absent.
//!
//! | Operation | Already applied when | On replay |
//! |-----------|----------------------|-----------|
//! | [`merge_route_method`] | handler for the method is declared | `DuplicateMethod` error |
//! | [`merge_page_import`] | import statement appears verbatim | no-op |
//! | [`merge_page_usage`] | `<Tag` appears anywhere | no-op |

use regex::{Captures, Regex};

use super::conventions::Conventions;
use super::error::MergeError;
use super::method::HttpMethod;
use super::naming::Identifier;
use super::page::{self, PageFile};
use super::route::{RouteFile, ROUTE_IMPORT};
use super::template::{self, ItemKind};

/// Adds a handler for `method` to a route file
///
/// Fails with [`MergeError::DuplicateMethod`] when the method is already
/// declared, so hand-written handlers are never overwritten. The route type
/// import is prepended when missing; the handler is appended at the end.
pub fn merge_route_method<F>(text: &str, method: HttpMethod, render_handler: F) -> Result<String, MergeError>
where
    F: FnOnce(HttpMethod) -> String,
{
    let route = RouteFile::new(text);
    if route.declares(method) {
        return Err(MergeError::DuplicateMethod(method));
    }

    let handler = render_handler(method);
    let mut merged = String::with_capacity(ROUTE_IMPORT.len() + text.len() + handler.len() + 3);

    if !route.has_import() {
        merged.push_str(ROUTE_IMPORT);
        merged.push('\n');
    }
    merged.push_str(text);

    // Blank line between the existing text and the new block
    if merged.ends_with('\n') {
        merged.push('\n');
    } else if !merged.is_empty() {
        merged.push_str("\n\n");
    }
    merged.push_str(&handler);

    Ok(merged)
}

/// Inserts `statement` as the first line of the page frontmatter
pub fn merge_page_import(text: &str, statement: &str) -> Result<String, MergeError> {
    if page::has_import(text, statement) {
        return Ok(text.to_string());
    }

    let (at, ending) = PageFile::parse(text)?.first_line()?;

    let mut merged = String::with_capacity(text.len() + statement.len() + ending.len());
    merged.push_str(&text[..at]);
    merged.push_str(statement);
    merged.push_str(ending);
    merged.push_str(&text[at..]);
    Ok(merged)
}

/// Places a usage of `tag` inside the page's `wrapper` element
///
/// Components are inserted before the last closing wrapper tag. Layouts wrap
/// the inner content of the first wrapper element only.
pub fn merge_page_usage(text: &str, kind: ItemKind, tag: &str, wrapper: &str) -> Result<String, MergeError> {
    if page::has_usage(text, tag) {
        return Ok(text.to_string());
    }

    match kind {
        ItemKind::Component => {
            let closing = format!("</{}>", wrapper);
            let at = text
                .rfind(&closing)
                .ok_or_else(|| MergeError::Malformed(format!("no closing {} tag", closing)))?;

            Ok(format!("{}  <{} />\n{}", &text[..at], tag, &text[at..]))
        }
        ItemKind::Layout => {
            let wrapper_re = Regex::new(&format!(
                r"(?s)<{w}(\s[^>]*)?>(.*?)</{w}>",
                w = regex::escape(wrapper)
            ))?;

            if !wrapper_re.is_match(text) {
                return Err(MergeError::Malformed(format!("no <{w}>...</{w}> element", w = wrapper)));
            }

            let wrapped = wrapper_re.replacen(text, 1, |caps: &Captures| {
                format!(
                    "<{w}{attrs}>\n  <{tag}>\n{inner}  </{tag}>\n</{w}>",
                    w = wrapper,
                    attrs = caps.get(1).map_or("", |m| m.as_str()),
                    inner = &caps[2],
                    tag = tag,
                )
            });
            Ok(wrapped.into_owned())
        }
    }
}

/// One insertion against an existing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequest {
    /// Append a rendered handler for `method`
    RouteMethod { method: HttpMethod, handler: String },

    /// Add an import to the page frontmatter
    PageImport { statement: String },

    /// Reference an item from the page body
    PageUsage { kind: ItemKind, tag: String, wrapper: String },
}

impl MergeRequest {
    /// The rendered form of what the request inserts
    ///
    /// For routes this is the canonical declaration only; a spacing variant
    /// such as `export const GET : APIRoute` still counts as applied. Use
    /// [`MergeRequest::is_applied`] for the actual presence check.
    pub fn idempotency_key(&self) -> String {
        match self {
            MergeRequest::RouteMethod { method, .. } => format!("export const {}: APIRoute", method),
            MergeRequest::PageImport { statement } => statement.clone(),
            MergeRequest::PageUsage { tag, .. } => format!("<{}", tag),
        }
    }

    /// Whether `text` already holds what this request would insert
    pub fn is_applied(&self, text: &str) -> bool {
        match self {
            MergeRequest::RouteMethod { method, .. } => RouteFile::new(text).declares(*method),
            MergeRequest::PageImport { statement } => page::has_import(text, statement),
            MergeRequest::PageUsage { tag, .. } => page::has_usage(text, tag),
        }
    }

    pub fn apply(&self, text: &str) -> Result<String, MergeError> {
        match self {
            MergeRequest::RouteMethod { method, handler } => {
                merge_route_method(text, *method, |_| handler.clone())
            }
            MergeRequest::PageImport { statement } => merge_page_import(text, statement),
            MergeRequest::PageUsage { kind, tag, wrapper } => merge_page_usage(text, *kind, tag, wrapper),
        }
    }
}

/// Import then usage of `item`, in the order they must be applied
pub fn page_item_requests(kind: ItemKind, item: &Identifier, conventions: &Conventions) -> [MergeRequest; 2] {
    [
        MergeRequest::PageImport {
            statement: template::import_statement(kind, item, conventions),
        },
        MergeRequest::PageUsage {
            kind,
            tag: item.pascal().to_string(),
            wrapper: conventions.wrapper.clone(),
        },
    ]
}
