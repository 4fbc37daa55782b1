use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::command;
use crate::command::config::ConfigArgs;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "wsm")]
#[command(about = "Create, list, remove and enter workspace directories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new workspace directory under the root
    Add {
        /// Workspace name, used as the directory name
        name: String,
    },

    /// List all workspaces under the root
    #[command(visible_alias = "ls")]
    List,

    /// Delete a workspace and everything inside it
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the workspace to delete
        name: String,
    },

    /// Start a shell inside a workspace, with $WORKSPACE set to its path
    Open {
        /// Name of the workspace to enter
        name: String,
    },

    /// Manage the global configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Add { name } => command::add::run(&Config::load()?, &name),
        Commands::List => command::list::run(&Config::load()?),
        Commands::Remove { name } => command::remove::run(&Config::load()?, &name),
        Commands::Open { name } => command::open::run(&Config::load()?, &name),
        Commands::Config(args) => command::config::run(args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "wsm", &mut io::stdout());
            Ok(())
        }
    }
}
