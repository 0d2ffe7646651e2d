//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including an
//! isolated test environment and command builders that run scripted
//! sessions over stdin.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// The environment keeps tests hermetic: the command runs from a fresh
/// temporary directory (so no project `perch.yaml` leaks in), with a
/// fresh `HOME` (so no user config leaks in) and all `PERCH_*`
/// environment variables cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the perch binary, isolated to this
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("perch").expect("Failed to find perch binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("PERCH_SEATS")
            .env_remove("PERCH_CONFIG")
            .env_remove("PERCH_OUTPUT_FORMAT")
            .env_remove("PERCH_LOG_MODE");
        cmd
    }

    /// Write a file into the test environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a session with the given commands piped through stdin.
    pub fn run_session(&self, commands: &str) -> assert_cmd::assert::Assert {
        self.command().write_stdin(commands.to_string()).assert()
    }

    /// Run a session from a script file.
    pub fn run_script_file(&self, commands: &str) -> assert_cmd::assert::Assert {
        let script = self.write_file("session.txt", commands);
        self.command().arg("--script").arg(script).assert()
    }
}
