//! `wsm config` subcommands.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::config::global_config_path;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print where the global config file lives (it may not exist yet)
    Path,
    /// Edit the global config file, creating it from a template first if needed
    Edit,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let path = global_config_path()
        .context("Could not locate a config directory; set $XDG_CONFIG_HOME or $HOME")?;

    match args.command {
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Edit => {
            if write_template_if_missing(&path)? {
                println!("Created {}", path.display());
            }
            open_in_editor(&path)
        }
    }
}

/// Write the commented template unless a file is already there.
///
/// Returns whether the file was created.
fn write_template_if_missing(path: &Path) -> Result<bool> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e).with_context(|| format!("Failed to create {}", path.display())),
    };
    file.write_all(DEFAULT_GLOBAL_CONFIG.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn open_in_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());
    let (program, mut args) = editor_command(&editor)?;
    args.push(path.as_os_str().to_owned());

    debug!(%editor, path = %path.display(), "launching editor");
    let status = Command::new(&program)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }
    Ok(())
}

/// Split an editor setting such as `code --wait` into program and arguments.
fn editor_command(editor: &str) -> Result<(String, Vec<OsString>)> {
    let mut words = shlex::split(editor)
        .with_context(|| format!("Cannot parse editor '{}'", editor))?
        .into_iter();
    let program = words.next().context("Editor setting is empty")?;
    Ok((program, words.map(OsString::from).collect()))
}

pub(crate) const DEFAULT_GLOBAL_CONFIG: &str = r#"# wsm global configuration
# $WORKSPACE and $SHELL take precedence over the values below.

# Directory holding one subdirectory per workspace.
# root: ~/workspaces

# Shell started by `wsm open`. Defaults to /bin/sh.
# shell: zsh -l
"#;
