//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// elm-layout - resolve the build paths of an Elm front-end project
#[derive(Parser)]
#[command(name = "elm-layout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Entry script to anchor resolution; the project root is the parent
    /// of its directory (defaults to the running executable)
    pub entry: Option<PathBuf>,

    /// Resolve from an explicit project root instead of an entry script
    #[arg(long, conflicts_with = "entry")]
    pub root: Option<PathBuf>,

    /// Print the resolved layout as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
