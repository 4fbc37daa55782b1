use anyhow::Result;

use crate::config::Config;
use crate::workspace::{AddOutcome, WorkspaceStore};

pub fn run(config: &Config, name: &str) -> Result<()> {
    let store = WorkspaceStore::new(config.root()?);

    match store.add(name)? {
        AddOutcome::Created(workspace) => {
            println!(
                "✓ Created workspace '{}'\n  Path: {}",
                workspace.name,
                workspace.path.display()
            );
        }
        AddOutcome::AlreadyExists(workspace) => {
            println!(
                "Workspace '{}' already exists\n  Path: {}",
                workspace.name,
                workspace.path.display()
            );
        }
    }

    Ok(())
}
