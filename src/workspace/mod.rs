//! Workspace directories under a configured root.
//!
//! The root's directory listing is the whole catalog: there is no manifest,
//! index or cache. Every lookup re-reads the filesystem.

mod error;
mod shell;
mod store;
mod types;

pub use shell::ShellLauncher;
pub use store::{AddOutcome, RemoveOutcome, WorkspaceStore, validate_name};
