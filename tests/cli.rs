//! End-to-end tests against the built `wsm` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

struct Env {
    root: TempDir,
    home: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wsm"));
        cmd.env("WORKSPACE", self.root.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env("XDG_STATE_HOME", self.home.path().join("state"))
            .env_remove("WSM_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().unwrap()
    }

    fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn add_list_remove_roundtrip() {
    let env = Env::new();

    let out = env.run(&["add", "alpha"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Created workspace 'alpha'"));
    assert!(env.root.path().join("alpha").is_dir());

    let out = env.run(&["list"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "  - 📦 alpha\n");

    let out = env.run(&["add", "alpha"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("already exists"));
    assert_eq!(env.entries(), vec!["alpha"]);

    let out = env.run(&["remove", "alpha"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Removed workspace 'alpha'"));
    assert!(env.entries().is_empty());

    let out = env.run(&["ls"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("No workspaces found"));
}

#[test]
fn remove_missing_workspace_succeeds() {
    let env = Env::new();

    let out = env.run(&["rm", "ghost"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("not found"));
}

#[test]
fn missing_root_fails_with_status_one() {
    let env = Env::new();
    let missing = env.root.path().join("missing");

    let cases: [&[&str]; 3] = [&["list"], &["add", "alpha"], &["remove", "alpha"]];
    for args in cases {
        let out = env.cmd().env("WORKSPACE", &missing).args(args).output().unwrap();
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(stderr(&out).contains("Failed to read workspace root"));
    }
    assert!(!missing.exists());
}

#[cfg(unix)]
#[test]
fn remove_failure_exits_with_status_one() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let env = Env::new();
    // Permission bits do not stop root
    if fs::metadata(env.root.path()).unwrap().uid() == 0 {
        return;
    }
    env.run(&["add", "alpha"]);
    fs::set_permissions(env.root.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let out = env.run(&["remove", "alpha"]);

    fs::set_permissions(env.root.path(), fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Failed to delete workspace"));
    assert_eq!(env.entries(), vec!["alpha"]);
}

#[test]
fn env_root_survives_malformed_config_file() {
    let env = Env::new();
    let config_dir = env.home.path().join("config").join("wsm");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "root: [unclosed\n").unwrap();
    env.run(&["add", "alpha"]);

    let out = env.run(&["list"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "  - 📦 alpha\n");

    let out = env.cmd().env_remove("WORKSPACE").arg("list").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid config file"));
}

#[test]
fn unset_root_is_reported() {
    let env = Env::new();

    let out = env.cmd().env_remove("WORKSPACE").arg("list").output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Workspace root is not configured"));
}

#[test]
fn root_from_config_file() {
    let env = Env::new();
    let config_dir = env.home.path().join("config").join("wsm");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.yaml"),
        format!("root: {}\n", env.root.path().display()),
    )
    .unwrap();

    let out = env.cmd().env_remove("WORKSPACE").args(["add", "beta"]).output().unwrap();

    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(env.entries(), vec!["beta"]);
}

#[test]
fn invalid_name_is_rejected() {
    let env = Env::new();

    let out = env.run(&["add", "../escape"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid workspace name"));
    assert!(!env.root.path().parent().unwrap().join("escape").exists());
}

#[test]
fn open_missing_workspace_does_not_spawn() {
    let env = Env::new();
    let marker = env.home.path().join("spawned");

    let out = env
        .cmd()
        .env("SHELL", format!("touch {}", marker.display()))
        .args(["open", "ghost"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert!(stdout(&out).contains("Workspace 'ghost' not found"));
    assert!(!marker.exists());
}

#[cfg(unix)]
#[test]
fn open_runs_shell_inside_workspace() {
    let env = Env::new();
    env.run(&["add", "alpha"]);
    let report = env.home.path().join("report");
    let script = format!(
        "sh -c 'pwd > \"{0}\"; echo \"$WORKSPACE\" >> \"{0}\"; exit 3'",
        report.display()
    );

    let out = env.cmd().env("SHELL", script).args(["open", "alpha"]).output().unwrap();

    // The shell's exit status is not propagated
    assert!(out.status.success(), "{}", stderr(&out));
    let expected = env.root.path().join("alpha").canonicalize().unwrap();
    let report = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(Path::new(lines[0]).canonicalize().unwrap(), expected);
    assert_eq!(Path::new(lines[1]), expected);
}

#[test]
fn completions_are_generated() {
    let env = Env::new();

    let out = env.run(&["completions", "bash"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("wsm"));
}

#[test]
fn config_path_honors_xdg_config_home() {
    let env = Env::new();

    let out = env.run(&["config", "path"]);

    assert!(out.status.success());
    let expected = env.home.path().join("config").join("wsm").join("config.yaml");
    assert_eq!(stdout(&out).trim(), expected.display().to_string());
}
