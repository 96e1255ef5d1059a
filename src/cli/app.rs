//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::record;
use crate::storage::Workspace;

#[derive(Parser)]
#[command(name = "adr")]
#[command(author, version, about = "Work with Architecture Decision Records (ADRs)")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Home directory holding `.adr/` (defaults to the user's home)
    #[arg(long, global = true, env = "ADR_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the ADR configuration
    ///
    /// Creates the ADR base directory, resets the counter and installs the
    /// default template. This is a prerequisite to running any other
    /// command. Re-running it resets the counter to 0.
    #[command(visible_alias = "i", after_help = "Example: adr init /home/user/adrs")]
    Init {
        /// Directory to store ADRs in (defaults to ~/adr)
        base_directory: Option<PathBuf>,
    },

    /// Create a new ADR
    #[command(visible_alias = "c")]
    New {
        /// Title words, joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "TITLE")]
        title: Vec<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("ADR CLI starting");

    let workspace = Workspace::open(cli.home)?;
    output.verbose_ctx(
        "paths",
        &format!("Config directory: {}", workspace.paths().config_dir().display()),
    );

    match cli.command {
        Commands::Init { base_directory } => {
            record::init(&workspace, &output, base_directory.as_deref())?
        }
        Commands::New { title } => record::new(&workspace, &output, &title)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
