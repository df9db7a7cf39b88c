//! GAIA UI docs CLI.
//!
//! Provides commands for:
//! - `build`: write sitemap.xml and robots.txt for the site
//! - `nav`: print the sidebar navigation tree
//! - `slugs`: list every addressable document path
//! - `page`: resolve a single page and print its metadata

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, NavArgs, PageArgs, SlugsArgs};
use output::Output;

/// GAIA UI - documentation site tooling.
#[derive(Parser)]
#[command(name = "gaiadocs", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sitemap.xml and robots.txt.
    Build(BuildArgs),
    /// Print the sidebar navigation as JSON.
    Nav(NavArgs),
    /// List every addressable document path.
    Slugs(SlugsArgs),
    /// Resolve a single page and print its metadata as JSON.
    Page(PageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Slugs(args) => args.execute(),
        Commands::Page(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
