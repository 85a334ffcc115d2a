//! elm-layout CLI - build path resolution for Elm front-end projects

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use elm_layout::ProjectLayout;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("elm_layout=debug")
    } else {
        EnvFilter::new("elm_layout=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Resolve the layout
    let layout = if let Some(root) = cli.root {
        ProjectLayout::from_root(root)?
    } else {
        let entry = match cli.entry {
            Some(entry) => entry,
            None => std::env::current_exe().context("failed to locate the running executable")?,
        };
        ProjectLayout::from_entry_script(&entry)?
    };

    // Emit
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        for (name, path) in layout.entries() {
            println!("{:<12} {}", name, path.display());
        }
    }

    Ok(())
}
