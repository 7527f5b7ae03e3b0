//! Test environment for running the `pujan` binary in isolation.
//!
//! `TestEnv` owns a temp project directory (the working directory of every
//! run) and a temp home, so neither the developer's config nor their
//! `PUJAN_*` variables leak into a test.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const PUJAN_VARS: &[&str] = &[
    "PUJAN_CATALOG",
    "PUJAN_SORT",
    "PUJAN_PRICE_CEILING",
    "PUJAN_FESTIVAL_MATCH",
    "PUJAN_VERBOSITY",
    "RUST_LOG",
];

/// Result of one `pujan` invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse the single NDJSON `data` line printed under `--json`
    pub fn json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no JSON on stdout:\n{}", self.combined_output()));
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pujan_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            pujan_bin: PathBuf::from(env!("CARGO_BIN_EXE_pujan")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Write `.pujan/config.toml` in the project
    pub fn with_project_config(self, toml: &str) -> Self {
        self.write_project_file(".pujan/config.toml", toml);
        self
    }

    /// Write the per-user config under the isolated XDG config home
    pub fn with_user_config(self, toml: &str) -> Self {
        self.write_home_file(".config/pujan/config.toml", toml);
        self
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(self.project_path(relative_path), content);
    }

    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(self.home_path(relative_path), content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.pujan_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("NO_COLOR", "1");
        for key in PUJAN_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pujan");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
