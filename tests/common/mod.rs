//! Common test utilities for dockerbuild CLI tests.
//!
//! `TestEnv` gives each test an isolated project directory and HOME, and
//! runs the built binary with all `DOCKERBUILD_*` variables cleared.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const INHERITED_VARS: &[&str] = &[
    "DOCKERBUILD_DEPLOY_TO",
    "DOCKERBUILD_CURRENT_DIRECTORY",
    "DOCKERBUILD_BUILD_DIR",
    "DOCKERBUILD_VERBOSITY",
    "RUST_LOG",
];

/// Result of running the dockerbuild CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Project directory anchored by an empty `.git` so config discovery stops there
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");
        std::fs::create_dir_all(project_root.path().join(".git"))
            .expect("Failed to create .git");
        Self {
            project_root,
            home_dir,
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("dockerbuild")
            .join("config.toml")
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    pub fn write_user_config(&self, content: &str) {
        write_file(&self.user_config_path(), content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dockerbuild"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute dockerbuild");
        to_result(output)
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
