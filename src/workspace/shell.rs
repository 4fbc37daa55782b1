//! Interactive subshell scoped to a workspace.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

use super::error::WorkspaceError;
use super::types::Workspace;
use crate::config::ROOT_ENV;

/// Launches the configured shell inside a workspace.
pub struct ShellLauncher {
    shell: String,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Build the shell command without running it.
    ///
    /// The shell string is split with POSIX word rules so values like
    /// `zsh -l` work. The child inherits the full environment and stdio,
    /// with `$WORKSPACE` pointing at the workspace itself so nested tooling
    /// can find it.
    pub fn command(&self, workspace_dir: &Path) -> Result<Command, WorkspaceError> {
        let parts = shlex::split(&self.shell)
            .ok_or_else(|| WorkspaceError::InvalidShell(self.shell.clone()))?;
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| WorkspaceError::InvalidShell(self.shell.clone()))?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(workspace_dir)
            .env(ROOT_ENV, workspace_dir);
        Ok(cmd)
    }

    /// Enter the workspace: change this process's directory into it, then
    /// block on an interactive shell until the user exits.
    ///
    /// The shell's exit status is returned for logging only.
    pub fn enter(&self, workspace: &Workspace) -> Result<ExitStatus, WorkspaceError> {
        // Resolve before chdir so a relative root still points at the right place
        let dir = canon_or_self(&workspace.path);

        std::env::set_current_dir(&dir).map_err(|source| {
            WorkspaceError::DirectoryChangeFailed {
                path: dir.clone(),
                source,
            }
        })?;

        let mut cmd = self.command(&dir)?;
        debug!(shell = %self.shell, dir = %dir.display(), "spawning workspace shell");

        let status = cmd.status().map_err(|source| WorkspaceError::SpawnFailed {
            shell: self.shell.clone(),
            source,
        })?;

        debug!(name = %workspace.name, code = ?status.code(), "workspace shell exited");
        if !status.success() {
            info!(name = %workspace.name, code = ?status.code(), "shell exited with non-zero status");
        }
        Ok(status)
    }
}

/// Canonicalize a path, falling back to the original if canonicalization fails.
fn canon_or_self(p: &Path) -> PathBuf {
    p.canonicalize().unwrap_or_else(|_| p.to_path_buf())
}
