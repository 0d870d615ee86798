use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "assetinit", version, about = "Ensure the standard Assets folders exist")]
pub struct Cli {
    /// Directory the Assets folders are resolved against.
    #[arg(short = 'C', long = "chdir", global = true)]
    pub chdir: Option<PathBuf>,
    /// Options for the default `init` run when no subcommand is given.
    #[command(flatten)]
    pub init: InitArgs,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Create any missing Assets folders (the default).
    Init(InitArgs),
    /// Print the folder list in creation order.
    List,
    /// Show which folders exist without creating anything.
    Status,
}

#[derive(Args, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InitArgs {
    /// Report what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
