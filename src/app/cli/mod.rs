//! CLI Adapter.

mod commands;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::{ConfigOverrides, DialoguerInteraction};
use crate::app::api;
use crate::domain::{AppError, RenderMode};

pub use commands::{CatalogCommand, EditField, execute};
pub use shell::run_shell;

const SHELL_PROMPT: &str = "catalog";

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "Manage a REST-backed products catalog", long_about = None)]
struct Cli {
    /// Config file (defaults to ./catalog.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Server root URL, e.g. http://localhost:3000
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
    /// How edits are reflected: incremental or full
    #[arg(long, global = true, value_name = "MODE", value_parser = parse_render_mode)]
    render: Option<RenderMode>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommand),
    /// Start an interactive session
    #[clap(visible_alias = "sh")]
    Shell,
}

fn parse_render_mode(value: &str) -> Result<RenderMode, String> {
    RenderMode::parse(value)
        .ok_or_else(|| format!("expected 'incremental' or 'full', got '{}'", value))
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let overrides =
        ConfigOverrides { config_path: cli.config, api_url: cli.api_url, render: cli.render };

    let result = match cli.command {
        Commands::Catalog(command) => run_once(&overrides, command),
        Commands::Shell => run_interactive(&overrides),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_once(overrides: &ConfigOverrides, command: CatalogCommand) -> Result<(), AppError> {
    let config = api::resolve_config(overrides)?;
    let mut service = api::connect(&config)?;

    if let CatalogCommand::List = command {
        service.load()?;
        return Ok(());
    }

    // Startup listing only matters for `list`; later mutations still render.
    service.view_mut().set_listings(false);
    let loaded = service.load();
    service.view_mut().set_listings(true);

    if let Err(err) = loaded {
        if command.needs_listing() {
            return Err(err);
        }
        service.report(&err);
    }

    execute(&mut service, command, &mut DialoguerInteraction, false)
}

fn run_interactive(overrides: &ConfigOverrides) -> Result<(), AppError> {
    let config = api::resolve_config(overrides)?;
    let mut service = api::connect(&config)?;
    println!("Connected to {}. Type 'help' for commands, 'exit' to leave.", config.api.base_url);

    let mut reader = DialoguerInteraction;
    let lines = std::iter::from_fn(move || match reader.read_command(SHELL_PROMPT) {
        Ok(line) => line,
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    });

    run_shell(&mut service, &mut DialoguerInteraction, lines);
    Ok(())
}
