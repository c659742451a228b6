//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use super::generate::Generator;
use super::output::{Output, OutputFormat};
use crate::domain::{HttpMethod, Identifier, ItemKind, ValidationError};
use crate::storage::{Project, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "astro-craft")]
#[command(author, version, about = "Generate Astro components, layouts and API endpoints")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the nearest directory with a craft.toml)
    #[arg(long, short = 'r', global = true, env = "ASTRO_CRAFT_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Report what would change without writing files
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Item names and the optional page to wire them into
#[derive(Args)]
pub struct ItemArgs {
    /// Item names (e.g. Button user-card "blog post")
    pub items: Vec<String>,

    /// Page to add the items to
    #[arg(long, short = 'p')]
    pub page: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a craft.toml with the default conventions
    Init,

    /// Create new component(s)
    #[command(short_flag = 'c')]
    AddComponent(ItemArgs),

    /// Create new layout(s)
    #[command(short_flag = 'l')]
    AddLayout(ItemArgs),

    /// Create new API endpoint(s)
    #[command(short_flag = 'a')]
    AddApi {
        /// Endpoint names (e.g. users UserAPI)
        items: Vec<String>,

        /// HTTP method for the handler (default: GET)
        #[arg(long, short = 'm')]
        method: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let start = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    if matches!(cli.command, Commands::Init) {
        let output = Output::new(cli.format.unwrap_or_default(), cli.verbose);
        return init(&output, &start);
    }

    // An explicit root is used as-is; otherwise search upwards for craft.toml
    let project = if cli.root.is_some() {
        Project::open(&start)?
    } else {
        Project::discover(&start)?
    };

    let format = cli.format.unwrap_or(project.config().global.default_format);
    let output = Output::new(format, cli.verbose);
    output.verbose_ctx("project", &format!("Using project root: {}", project.root().display()));

    match cli.command {
        Commands::Init => init(&output, project.root())?,
        Commands::AddComponent(args) => add_items(&project, &output, cli.dry_run, ItemKind::Component, &args)?,
        Commands::AddLayout(args) => add_items(&project, &output, cli.dry_run, ItemKind::Layout, &args)?,
        Commands::AddApi { items, method } => add_apis(&project, &output, cli.dry_run, &items, method.as_deref())?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Validates every item name before any file is touched
fn parse_items(items: &[String]) -> Result<Vec<Identifier>, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    items.iter().map(|item| Identifier::parse(item)).collect()
}

fn add_items(project: &Project, output: &Output, dry_run: bool, kind: ItemKind, args: &ItemArgs) -> Result<()> {
    let names = parse_items(&args.items)?;
    let page = args.page.as_deref().map(Identifier::parse).transpose()?;

    output.verbose_ctx(
        "generate",
        &format!("Adding {} {}(s), page: {:?}", names.len(), kind, page.as_ref().map(Identifier::dash)),
    );

    let mut generator = Generator::new(project, output, dry_run);
    for name in &names {
        match kind {
            ItemKind::Component => generator.add_component(name)?,
            ItemKind::Layout => generator.add_layout(name)?,
        }

        if let Some(page) = &page {
            generator.wire_into_page(page, kind, name)?;
        }
    }

    output.data(&generator.into_changes());
    Ok(())
}

fn add_apis(project: &Project, output: &Output, dry_run: bool, items: &[String], method: Option<&str>) -> Result<()> {
    let method: HttpMethod = match method {
        Some(method) => method.parse()?,
        None => project.conventions().method()?,
    };
    let names = parse_items(items)?;

    output.verbose_ctx("generate", &format!("Adding {} endpoint(s) with {}", names.len(), method));

    let mut generator = Generator::new(project, output, dry_run);
    for name in &names {
        generator.add_api(name, method)?;
    }

    output.data(&generator.into_changes());
    Ok(())
}

fn init(output: &Output, root: &Path) -> Result<()> {
    let config_path = Project::config_path(root);
    if config_path.exists() {
        output.success(&format!("{} already exists at {}", CONFIG_FILE, config_path.display()));
        return Ok(());
    }

    let project = Project::init(root)?;
    output.verbose_ctx("init", &format!("Conventions: {:?}", project.conventions()));
    output.success(&format!("Initialized {} at {}", CONFIG_FILE, config_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_select_commands() {
        let cli = Cli::try_parse_from(["astro-craft", "-c", "Button", "Card", "-p", "home"]).unwrap();
        match cli.command {
            Commands::AddComponent(args) => {
                assert_eq!(args.items, vec!["Button", "Card"]);
                assert_eq!(args.page.as_deref(), Some("home"));
            }
            _ => panic!("expected add-component"),
        }

        let cli = Cli::try_parse_from(["astro-craft", "-a", "users", "-m", "post"]).unwrap();
        assert!(matches!(cli.command, Commands::AddApi { method: Some(ref m), .. } if m == "post"));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert_eq!(parse_items(&[]).unwrap_err(), ValidationError::EmptyItems);
    }

    #[test]
    fn one_bad_name_rejects_the_batch() {
        let items = vec!["Good".to_string(), "bad/name".to_string()];
        assert_eq!(
            parse_items(&items).unwrap_err(),
            ValidationError::InvalidName("bad/name".to_string())
        );
    }
}
