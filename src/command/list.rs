use anyhow::Result;

use crate::config::Config;
use crate::workspace::WorkspaceStore;

/// Print every workspace under the root. An empty root is not an error.
pub fn run(config: &Config) -> Result<()> {
    let store = WorkspaceStore::new(config.root()?);
    let workspaces = store.list()?;

    if workspaces.is_empty() {
        println!("No workspaces found in {}", store.root().display());
        return Ok(());
    }

    for workspace in workspaces {
        println!("  - 📦 {}", workspace.name);
    }

    Ok(())
}
