//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const TEMPLATE: &str = r#"# Plugin settings
settings:
  enabled: true
  # How often to check, in hours
  interval: 6

# Chat messages
messages:
  reload: "&aReloaded"
  # Shown to operators on join
  update-available: "&eNew version {new_version}"

# Reward settings
rewards:
  enabled: true

# ---------------------
# Do not edit this value
# ---------------------
config-version: 2
"#;

/// A temp directory holding `default.yml` and optionally `config.yml`
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(user: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.yml"), TEMPLATE).unwrap();
        if let Some(user) = user {
            std::fs::write(dir.path().join("config.yml"), user).unwrap();
        }
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self) -> PathBuf {
        self.path("config.yml")
    }

    pub fn template(&self) -> PathBuf {
        self.path("default.yml")
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config()).unwrap()
    }

    /// Run the binary inside the workspace with a clean environment
    pub fn run(&self, args: &[&str]) -> Output {
        cfgmigrate_cmd(self.dir.path()).args(args).output().unwrap()
    }
}

pub fn cfgmigrate_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cfgmigrate"));
    cmd.current_dir(cwd)
        .env_remove("CFGMIGRATE_VERSION_KEY")
        .env_remove("CFGMIGRATE_FALLBACK")
        .env_remove("CFGMIGRATE_VERBOSITY")
        .env_remove("CFGMIGRATE_LOG")
        .env("NO_COLOR", "1")
        .env("TERM", "dumb");
    cmd
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
