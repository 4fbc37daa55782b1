use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Failed to read workspace root {}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create workspace at {}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to delete workspace at {}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to change directory to {}", path.display())]
    DirectoryChangeFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start shell '{shell}'")]
    SpawnFailed {
        shell: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid workspace name '{0}'")]
    InvalidName(String),
    #[error("Invalid shell '{0}'")]
    InvalidShell(String),
}
