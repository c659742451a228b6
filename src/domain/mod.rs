//! Domain logic for astro-craft
//!
//! Naming, templates and the merge engine. Nothing here touches the file
//! system: every operation maps text to text.

mod conventions;
mod error;
mod merge;
mod method;
mod naming;
mod page;
mod route;
pub mod template;

pub use conventions::Conventions;
pub use error::{MergeError, ValidationError};
pub use merge::{merge_page_import, merge_page_usage, merge_route_method, page_item_requests, MergeRequest};
pub use method::HttpMethod;
pub use naming::{capitalize, to_camel, to_dash, to_pascal, Identifier};
pub use page::PageFile;
pub use route::{RouteFile, ROUTE_IMPORT};
pub use template::ItemKind;
