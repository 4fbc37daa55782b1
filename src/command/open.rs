use anyhow::Result;

use crate::config::Config;
use crate::workspace::{ShellLauncher, WorkspaceStore, validate_name};

/// Enter a workspace in a subshell and wait for it to exit.
///
/// The shell's own exit status does not become ours: leaving the session
/// always counts as success.
pub fn run(config: &Config, name: &str) -> Result<()> {
    validate_name(name)?;
    let store = WorkspaceStore::new(config.root()?);

    let Some(workspace) = store.find_by_name(name)? else {
        println!("Workspace '{}' not found", name);
        return Ok(());
    };

    println!(
        "Entering workspace '{}' (exit the shell to leave)\n  Path: {}",
        workspace.name,
        workspace.path.display()
    );

    ShellLauncher::new(config.shell()).enter(&workspace)?;
    Ok(())
}
