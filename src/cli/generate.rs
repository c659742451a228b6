//! File orchestration for the add-* commands
//!
//! Each target file is either rendered from a template (absent) or loaded,
//! merged and written back whole (present). Items are processed in order and
//! the first failure aborts the run; files written for earlier items stay.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{page_item_requests, template, HttpMethod, Identifier, ItemKind, MergeRequest, RouteFile};
use crate::storage::{ensure_dir, read_existing, write_atomic, Project};

/// Kind of file touched by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Component,
    Layout,
    Route,
    Page,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Component => f.write_str("Component"),
            FileKind::Layout => f.write_str("Layout"),
            FileKind::Route => f.write_str("API endpoint"),
            FileKind::Page => f.write_str("Page"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Updated,
    Unchanged,
}

/// What happened to one file
#[derive(Debug, Clone, Serialize)]
pub struct FileChange {
    pub kind: FileKind,
    pub path: PathBuf,
    pub action: Action,

    /// Handler method, for API routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
}

impl FileChange {
    /// Human-readable status line
    pub fn describe(&self) -> String {
        let path = self.path.display();
        match (self.kind, self.action, self.method) {
            (FileKind::Route, Action::Created, Some(method)) => {
                format!("API endpoint created: {} with {} method", path, method)
            }
            (FileKind::Route, Action::Updated, Some(method)) => {
                format!("API endpoint {} added to {}", method, path)
            }
            (kind, Action::Created, _) => format!("{} created: {}", kind, path),
            (kind, Action::Updated, _) => format!("{} updated: {}", kind, path),
            (kind, Action::Unchanged, _) => format!("{} unchanged (already up to date): {}", kind, path),
        }
    }
}

/// Applies create-or-merge decisions against one project
pub struct Generator<'a> {
    project: &'a Project,
    output: &'a Output,
    dry_run: bool,
    changes: Vec<FileChange>,

    /// Contents a dry run would have written, so later items see them
    pending: HashMap<PathBuf, String>,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, output: &'a Output, dry_run: bool) -> Self {
        Self {
            project,
            output,
            dry_run,
            changes: Vec::new(),
            pending: HashMap::new(),
        }
    }

    /// Changes recorded so far, in processing order
    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<FileChange> {
        self.changes
    }

    /// Creates the component file unless it already exists
    pub fn add_component(&mut self, name: &Identifier) -> Result<()> {
        let path = self.project.component_path(name);
        self.create_if_absent(FileKind::Component, &path, || template::component(name))
    }

    /// Creates the layout file unless it already exists
    pub fn add_layout(&mut self, name: &Identifier) -> Result<()> {
        let path = self.project.layout_path(name);
        self.create_if_absent(FileKind::Layout, &path, || template::layout(name))
    }

    /// Creates the route file, or adds a handler for `method` to it
    pub fn add_api(&mut self, name: &Identifier, method: HttpMethod) -> Result<()> {
        let path = self.project.route_path(name);

        let Some(existing) = self.load(&path)? else {
            self.write(&path, &template::route_file(name, method))?;
            self.record(FileKind::Route, &path, Action::Created, Some(method));
            return Ok(());
        };

        self.output.verbose_ctx(
            "route",
            &format!(
                "{} already handles: {:?}",
                path.display(),
                RouteFile::new(&existing).methods()
            ),
        );

        let request = MergeRequest::RouteMethod {
            method,
            handler: template::route_handler(name, method),
        };
        let merged = request
            .apply(&existing)
            .with_context(|| format!("Cannot add {} to {}", method, path.display()))?;

        self.write(&path, &merged)?;
        self.record(FileKind::Route, &path, Action::Updated, Some(method));
        Ok(())
    }

    /// Imports and uses `item` in `page`, creating the page if needed
    pub fn wire_into_page(&mut self, page: &Identifier, kind: ItemKind, item: &Identifier) -> Result<()> {
        let project = self.project;
        let path = project.page_path(page);
        let conventions = project.conventions();

        let Some(existing) = self.load(&path)? else {
            self.write(&path, &template::page(page, kind, item, conventions))?;
            self.record(FileKind::Page, &path, Action::Created, None);
            return Ok(());
        };

        let mut merged = existing.clone();
        for request in page_item_requests(kind, item, conventions) {
            if request.is_applied(&merged) {
                self.output.verbose_ctx(
                    "page",
                    &format!("already present: {}", request.idempotency_key()),
                );
                continue;
            }

            merged = request
                .apply(&merged)
                .with_context(|| format!("Cannot add {} {} to {}", kind, item.pascal(), path.display()))?;
        }

        if merged == existing {
            self.record(FileKind::Page, &path, Action::Unchanged, None);
            return Ok(());
        }

        self.write(&path, &merged)?;
        self.record(FileKind::Page, &path, Action::Updated, None);
        Ok(())
    }

    fn create_if_absent<F>(&mut self, kind: FileKind, path: &Path, render: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        if self.pending.contains_key(path) || path.exists() {
            self.output
                .verbose_ctx("create", &format!("keeping existing file {}", path.display()));
            self.record(kind, path, Action::Unchanged, None);
            return Ok(());
        }

        self.write(path, &render())?;
        self.record(kind, path, Action::Created, None);
        Ok(())
    }

    /// Current contents of `path`, including writes held back by a dry run
    fn load(&self, path: &Path) -> Result<Option<String>> {
        if let Some(contents) = self.pending.get(path) {
            return Ok(Some(contents.clone()));
        }
        read_existing(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        if self.dry_run {
            self.output
                .verbose_ctx("dry-run", &format!("skipping write of {}", path.display()));
            self.pending.insert(path.to_path_buf(), contents.to_string());
            return Ok(());
        }

        if let Some(dir) = path.parent() {
            if ensure_dir(dir)? {
                self.output
                    .verbose_ctx("create", &format!("Directory created: {}", dir.display()));
            }
        }

        write_atomic(path, contents)
    }

    fn record(&mut self, kind: FileKind, path: &Path, action: Action, method: Option<HttpMethod>) {
        let change = FileChange {
            kind,
            path: path.to_path_buf(),
            action,
            method,
        };

        if self.dry_run {
            self.output.line(&format!("(dry run) {}", change.describe()));
        } else {
            self.output.line(&change.describe());
        }

        self.changes.push(change);
    }
}
