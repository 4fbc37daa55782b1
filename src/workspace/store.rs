//! Filesystem-backed workspace catalog.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::WorkspaceError;
use super::types::Workspace;

/// Result of [`WorkspaceStore::add`].
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Created(Workspace),
    /// Nothing was created; an entry with this name is already under root
    AlreadyExists(Workspace),
}

/// Result of [`WorkspaceStore::remove`].
#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Workspace),
    NotFound,
}

/// Maps the entries directly under a root directory to workspaces.
///
/// Directory structure:
/// ```text
/// $WORKSPACE/
/// ├── alpha/      # workspace "alpha"
/// └── beta/       # workspace "beta"
/// ```
///
/// Nothing is cached. Two invocations racing on the same name are not
/// guarded against.
pub struct WorkspaceStore {
    root: PathBuf,
}

impl WorkspaceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every entry under root, in directory-read order.
    pub fn list(&self) -> Result<Vec<Workspace>, WorkspaceError> {
        let unreadable = |source| WorkspaceError::RootUnreadable {
            path: self.root.clone(),
            source,
        };

        let mut workspaces = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let file_name = entry.file_name();
            match file_name.to_str() {
                Some(name) => workspaces.push(Workspace::new(&self.root, name)),
                None => {
                    warn!(entry = ?file_name, "skipping entry with non-UTF-8 name");
                }
            }
        }

        debug!(root = %self.root.display(), count = workspaces.len(), "listed workspaces");
        Ok(workspaces)
    }

    /// Find a workspace by exact, case-sensitive name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Workspace>, WorkspaceError> {
        Ok(self.list()?.into_iter().find(|ws| ws.name == name))
    }

    /// Create the workspace directory. Root itself must already exist.
    pub fn add(&self, name: &str) -> Result<AddOutcome, WorkspaceError> {
        validate_name(name)?;

        if let Some(existing) = self.find_by_name(name)? {
            debug!(name, "workspace already exists");
            return Ok(AddOutcome::AlreadyExists(existing));
        }

        let workspace = Workspace::new(&self.root, name);
        fs::create_dir(&workspace.path).map_err(|source| WorkspaceError::CreateFailed {
            path: workspace.path.clone(),
            source,
        })?;

        info!(name, path = %workspace.path.display(), "created workspace");
        Ok(AddOutcome::Created(workspace))
    }

    /// Delete the workspace and everything inside it. No confirmation.
    pub fn remove(&self, name: &str) -> Result<RemoveOutcome, WorkspaceError> {
        validate_name(name)?;

        let Some(workspace) = self.find_by_name(name)? else {
            debug!(name, "workspace not found, nothing to remove");
            return Ok(RemoveOutcome::NotFound);
        };

        // symlink_metadata so a symlinked workspace removes the link, not its target
        let is_dir = fs::symlink_metadata(&workspace.path)
            .map(|m| m.is_dir())
            .unwrap_or(false);
        let result = if is_dir {
            fs::remove_dir_all(&workspace.path)
        } else {
            fs::remove_file(&workspace.path)
        };
        result.map_err(|source| WorkspaceError::DeleteFailed {
            path: workspace.path.clone(),
            source,
        })?;

        info!(name, path = %workspace.path.display(), "removed workspace");
        Ok(RemoveOutcome::Removed(workspace))
    }
}

/// Reject names that would not map to a single entry directly under root.
///
/// Rejects:
/// - empty names
/// - `.` and `..`
/// - names containing a path separator or NUL
pub fn validate_name(name: &str) -> Result<(), WorkspaceError> {
    let has_separator = name.chars().any(|c| c == '\0' || std::path::is_separator(c));
    if name.is_empty() || matches!(name, "." | "..") || has_separator {
        return Err(WorkspaceError::InvalidName(name.to_string()));
    }
    Ok(())
}
