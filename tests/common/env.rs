//! Test environment for isolated Blitz runs.
//!
//! Every run starts from an empty process environment so the caller's `USER`,
//! `HOST` and friends never leak into the configuration under test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Service name used by the default layout
pub const SERVICE: &str = "api";

/// Result of running the blitz binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON object
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated project directory.
///
/// Layout created by `TestEnv::new()`:
/// - `bin/api`
/// - `remote/production/api.service`
pub struct TestEnv {
    pub project_root: TempDir,
    extra_env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_file(&format!("bin/{SERVICE}"), "#!/bin/sh\n");
        env.write_file(
            &format!("remote/production/{SERVICE}.service"),
            "[Service]\nExecStart=/home/deploy/api\n",
        );
        env
    }

    /// Project directory without any files
    pub fn empty() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            extra_env: Vec::new(),
        }
    }

    /// Set a process environment variable for every run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.extra_env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write the `.env` overlay in the project root
    pub fn write_overlay(&self, content: &str) {
        self.write_file(".env", content);
    }

    /// Flags for a complete, valid deploy against the default layout
    pub fn deploy_args(&self) -> Vec<String> {
        [
            "deploy",
            "--service-name",
            SERVICE,
            "--binary-dir",
            "bin",
            "--unit-dir",
            "remote/production",
            "--user",
            "deploy",
            "--host",
            "10.0.0.5",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Run blitz from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_blitz"));
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("LANG", "C")
            .env("NO_COLOR", "1");

        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        for (key, value) in &self.extra_env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute blitz");
        output_to_result(output)
    }

    /// Run `deploy_args()` plus `extra`
    pub fn run_deploy(&self, extra: &[&str]) -> TestResult {
        let mut args = self.deploy_args();
        args.extend(extra.iter().map(|s| s.to_string()));
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
