//! Startup configuration.
//!
//! Built once in `main` from the environment and the optional global config
//! file, then passed down. Nothing below the command layer reads environment
//! variables.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Names the workspace root. Also set inside an opened workspace's shell.
pub const ROOT_ENV: &str = "WORKSPACE";

/// Interactive shell used by `open`.
pub const SHELL_ENV: &str = "SHELL";

const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one subdirectory per workspace
    pub root: Option<PathBuf>,

    /// Shell command for `open`, split with shell word rules
    pub shell: Option<String>,
}

impl Config {
    /// Load the global config file and apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::resolve(global_config_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Combine an optional config file with environment values.
    ///
    /// A broken file only fails resolution when `$WORKSPACE` does not already
    /// name the root; otherwise it is logged and skipped.
    pub fn resolve(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root_from_env = env(ROOT_ENV).is_some_and(|v| !v.is_empty());

        let file_config = match path.map(Self::load_file).transpose() {
            Ok(config) => config.unwrap_or_default(),
            Err(e) if root_from_env => {
                warn!(error = %format!("{:#}", e), "ignoring config file, root set by ${}", ROOT_ENV);
                Self::default()
            }
            Err(e) => return Err(e),
        };
        Ok(file_config.with_overrides(env))
    }

    /// Parse a config file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        // An empty or comment-only file parses as null
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }

        let mut config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        let home = home::home_dir();
        config.root = config.root.map(|root| expand_home(&root, home.as_deref()));
        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Environment values win over file values. Empty values are ignored.
    pub fn with_overrides(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(root) = non_empty(ROOT_ENV) {
            self.root = Some(PathBuf::from(root));
        }
        if let Some(shell) = non_empty(SHELL_ENV) {
            self.shell = Some(shell);
        }
        self
    }

    /// The workspace root, or an error explaining how to set one.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or_else(|| {
            anyhow!(
                "Workspace root is not configured. Set ${} or `root:` in {}",
                ROOT_ENV,
                global_config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "the global config file".to_string())
            )
        })
    }

    pub fn shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(DEFAULT_SHELL)
    }
}

/// Location of the global config file.
///
/// Checks XDG_CONFIG_HOME first, falls back to ~/.config.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".config")))?;
    Some(config_home.join("wsm").join("config.yaml"))
}

/// Replace a leading `~` component with the home directory.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
