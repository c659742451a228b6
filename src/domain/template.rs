//! Templates for newly created files
//!
//! Every generated file ends with a newline. Route handlers are rendered as
//! standalone blocks so the merge engine can append them to existing files.

use serde::Serialize;
use std::fmt;

use super::conventions::Conventions;
use super::method::HttpMethod;
use super::naming::{capitalize, Identifier};
use super::route::ROUTE_IMPORT;

/// Kind of item that can be referenced from a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Component,
    Layout,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Component => f.write_str("component"),
            ItemKind::Layout => f.write_str("layout"),
        }
    }
}

pub fn component(name: &Identifier) -> String {
    format!(
        "---\n// {pascal} component\n---\n\n<div class=\"{dash}\">\n  <!-- Your content here -->\n</div>\n",
        pascal = name.pascal(),
        dash = name.dash(),
    )
}

pub fn layout(name: &Identifier) -> String {
    format!(
        "---\n// {pascal} layout\n---\n\n<div class=\"{dash}-layout\">\n  <slot />\n</div>\n",
        pascal = name.pascal(),
        dash = name.dash(),
    )
}

/// A single exported handler, as appended to route files
pub fn route_handler(name: &Identifier, method: HttpMethod) -> String {
    format!(
        "export const {method}: APIRoute = ({{ params, request }}) => {{\n  \
         return new Response(\n    \
         JSON.stringify({{\n      \
         message: 'This is the {method} method for {name}'\n    \
         }})\n  \
         );\n\
         }};\n",
        method = method,
        name = name.raw(),
    )
}

pub fn route_file(name: &Identifier, method: HttpMethod) -> String {
    format!("{}\n\n{}", ROUTE_IMPORT, route_handler(name, method))
}

/// Import line that brings an item into a page's frontmatter
pub fn import_statement(kind: ItemKind, name: &Identifier, conventions: &Conventions) -> String {
    match kind {
        ItemKind::Component => format!(
            "import {} from '{}/{}.{}';",
            name.pascal(),
            conventions.components_alias,
            name.dash(),
            conventions.component_extension
        ),
        ItemKind::Layout => format!(
            "import {} from '{}/{}.{}';",
            name.pascal(),
            conventions.layouts_alias,
            name.pascal(),
            conventions.component_extension
        ),
    }
}

/// Import line for the wrapper element every page is built on
pub fn wrapper_import(conventions: &Conventions) -> String {
    format!(
        "import {wrapper} from '{alias}/{wrapper}.{ext}';",
        wrapper = conventions.wrapper,
        alias = conventions.layouts_alias,
        ext = conventions.component_extension,
    )
}

/// A new page that already imports and uses `item`
pub fn page(title: &Identifier, kind: ItemKind, item: &Identifier, conventions: &Conventions) -> String {
    let tag = item.pascal();
    let usage = match kind {
        ItemKind::Component => format!("  <{} />\n", tag),
        ItemKind::Layout => format!("  <{tag}>\n    <!-- Page content -->\n  </{tag}>\n"),
    };

    format!(
        "---\n{wrapper_import}\n{item_import}\n---\n\n<{wrapper}>\n  <h1>{heading}</h1>\n{usage}</{wrapper}>\n",
        wrapper_import = wrapper_import(conventions),
        item_import = import_statement(kind, item, conventions),
        wrapper = conventions.wrapper,
        heading = capitalize(title.raw()),
        usage = usage,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(raw: &str) -> Identifier {
        Identifier::parse(raw).unwrap()
    }

    #[test]
    fn component_uses_dash_class() {
        let text = component(&ident("UserCard"));
        assert!(text.starts_with("---\n// UserCard component\n---\n"));
        assert!(text.contains("<div class=\"user-card\">"));
    }

    #[test]
    fn layout_renders_slot() {
        let text = layout(&ident("main-layout"));
        assert!(text.contains("// MainLayout layout"));
        assert!(text.contains("<div class=\"main-layout-layout\">\n  <slot />\n</div>\n"));
    }

    #[test]
    fn route_file_has_import_then_handler() {
        let text = route_file(&ident("users"), HttpMethod::Post);
        assert_eq!(
            text,
            "import type { APIRoute } from 'astro';\n\n\
             export const POST: APIRoute = ({ params, request }) => {\n  \
             return new Response(\n    \
             JSON.stringify({\n      \
             message: 'This is the POST method for users'\n    \
             })\n  \
             );\n\
             };\n"
        );
    }

    #[test]
    fn import_paths_follow_conventions() {
        let conventions = Conventions::default();
        assert_eq!(
            import_statement(ItemKind::Component, &ident("UserCard"), &conventions),
            "import UserCard from '@components/user-card.astro';"
        );
        assert_eq!(
            import_statement(ItemKind::Layout, &ident("blog post"), &conventions),
            "import BlogPost from '@layouts/BlogPost.astro';"
        );
        assert_eq!(
            wrapper_import(&conventions),
            "import Layout from '@layouts/Layout.astro';"
        );
    }

    #[test]
    fn page_with_component() {
        let text = page(&ident("home"), ItemKind::Component, &ident("Card"), &Conventions::default());
        assert_eq!(
            text,
            "---\nimport Layout from '@layouts/Layout.astro';\n\
             import Card from '@components/card.astro';\n---\n\n\
             <Layout>\n  <h1>Home</h1>\n  <Card />\n</Layout>\n"
        );
    }

    #[test]
    fn page_with_layout_wraps_placeholder() {
        let text = page(&ident("about"), ItemKind::Layout, &ident("Narrow"), &Conventions::default());
        assert!(text.contains("  <Narrow>\n    <!-- Page content -->\n  </Narrow>\n</Layout>\n"));
    }
}
