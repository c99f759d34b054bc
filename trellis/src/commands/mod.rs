mod completions;
mod create;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use create::CreateCommand;
use eyre::Result;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version)]
#[command(about = "Scaffold Vue 3 front-end projects from composable template fragments")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Create(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new project
    Create(CreateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
