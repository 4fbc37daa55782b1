use std::path::{Path, PathBuf};

/// A named directory directly under the workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory name, used verbatim as the workspace identity
    pub name: String,

    /// Always `root.join(name)`
    pub path: PathBuf,
}

impl Workspace {
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: root.join(name),
        }
    }
}
