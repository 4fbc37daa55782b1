use anyhow::Result;

use crate::config::Config;
use crate::workspace::{RemoveOutcome, WorkspaceStore};

pub fn run(config: &Config, name: &str) -> Result<()> {
    let store = WorkspaceStore::new(config.root()?);

    match store.remove(name)? {
        RemoveOutcome::Removed(workspace) => {
            println!("✓ Removed workspace '{}'", workspace.name);
        }
        RemoveOutcome::NotFound => {
            println!("Workspace '{}' not found, nothing to remove", name);
        }
    }

    Ok(())
}
