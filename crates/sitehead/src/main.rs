//! sitehead - responsive site header toolkit

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sitehead_core::{classify, HeaderConfig, NavigationSet, ScrollLock};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sitehead",
    version,
    about = "Responsive site header toolkit",
    long_about = "Validate header navigation data and replay pointer, viewport and menu\n\
                  interactions through the header visibility state machine.\n\
                  \n\
                  Examples:\n\
                    sitehead check --nav nav.json            # Validate navigation\n\
                    sitehead classify 768                    # mobile or not-mobile\n\
                    sitehead replay trace.txt --nav nav.json # Replay an interaction trace\n\
                  \n\
                  Environment Variables:\n\
                    SITEHEAD_NAV                     # Navigation file (.json/.yaml/.toml)\n\
                    SITEHEAD_CONFIG                  # Header config file (.toml)\n\
                    SITEHEAD_BREAKPOINT              # Override mobile breakpoint (px)\n\
                    SITEHEAD_NO_COLOR                # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (e.g. sitehead_core=debug)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Header config file (TOML)
    #[arg(long, global = true, env = "SITEHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// Override the mobile breakpoint in pixels
    #[arg(long, global = true, env = "SITEHEAD_BREAKPOINT")]
    breakpoint: Option<u32>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SITEHEAD_NO_COLOR")]
    no_color: bool,

    /// Log state machine transitions (debug level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a navigation file and print its tree
    Check {
        /// Navigation file (.json, .yaml, .yml or .toml)
        #[arg(long, env = "SITEHEAD_NAV")]
        nav: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a viewport width against the breakpoint
    Classify {
        /// Viewport width in pixels
        width: u32,
    },
    /// Replay an interaction script through the header state machine
    Replay {
        /// Script file, one step per line
        script: PathBuf,
        /// Navigation file (.json, .yaml, .yml or .toml)
        #[arg(long, env = "SITEHEAD_NAV")]
        nav: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, breakpoint: Option<u32>) -> Result<HeaderConfig> {
    let mut config = match path {
        Some(path) => HeaderConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => HeaderConfig::default(),
    };

    if let Some(breakpoint) = breakpoint {
        config.breakpoint_px = breakpoint;
        config.validate().context("Invalid --breakpoint")?;
    }

    Ok(config)
}

fn load_navigation(path: &Path) -> Result<NavigationSet> {
    NavigationSet::load(path)
        .with_context(|| format!("Failed to load navigation from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let config = load_config(cli.config.as_deref(), cli.breakpoint)?;

    match cli.command {
        Command::Check { nav, json } => run_check(&nav, json),
        Command::Classify { width } => {
            let class = classify(width, config.breakpoint_px);
            println!(
                "{}px -> {} (breakpoint {}px)",
                width,
                if class.is_mobile() { "mobile" } else { "not-mobile" },
                config.breakpoint_px
            );
            Ok(())
        }
        Command::Replay { script, nav, json } => {
            run_replay(&script, &nav, config, json, cli.no_color).await
        }
    }
}

fn run_check(nav: &Path, json: bool) -> Result<()> {
    let navigation = load_navigation(nav)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&navigation)?);
        return Ok(());
    }

    cli::print_navigation_table(&navigation);
    let children: usize = navigation.items().iter().map(|i| i.children.len()).sum();
    println!(
        "{} top-level items, {} children - OK",
        navigation.len(),
        children
    );
    Ok(())
}

async fn run_replay(
    script_path: &Path,
    nav: &Path,
    config: HeaderConfig,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let navigation = Arc::new(load_navigation(nav)?);
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script = cli::parse_script(&content)?;

    info!(steps = script.len(), "Replaying interaction script");

    let (header, task) = sitehead_core::runtime::spawn(navigation, config, ScrollLock::detached());
    let records = cli::replay(&header, &script).await?;

    drop(header);
    task.await.context("Header runtime panicked")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        cli::print_replay_table(&records, no_color);
    }
    Ok(())
}
