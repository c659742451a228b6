//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Short | Creates |
//! |---------|-------|---------|
//! | `add-component` | `-c` | `src/components/{name}.astro` |
//! | `add-layout` | `-l` | `src/layouts/{Name}.astro` |
//! | `add-api` | `-a` | `src/pages/api/{name}.ts` |
//! | `init` | | `craft.toml` |
//!
//! `--page <name>` wires new components or layouts into
//! `src/pages/{name}.astro`; `--method <verb>` picks the API handler.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - One status line per file
//! - `json` - A JSON array of file changes
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! astro-craft --verbose add-component Button -p home
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod generate;
mod output;

pub use app::{run, Cli, Commands, ItemArgs};
pub use generate::{Action, FileChange, FileKind, Generator};
pub use output::{Output, OutputFormat};
