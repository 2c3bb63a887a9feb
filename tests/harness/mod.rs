//! Test harness utilities for keylift integration tests.
//!
//! Provides an isolated temp directory per test plus a preconfigured
//! command builder. No network and no az CLI are required by any test;
//! commands that would reach them run with an empty PATH instead.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
pub struct TestEnv {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a keylift command running inside the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("keylift").expect("failed to find keylift binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create a keylift command with an empty PATH, so `az` can never be found.
    pub fn cmd_without_az(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("PATH", "");
        cmd
    }

    /// Write a file into the test directory and return its absolute path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write test file");
        path
    }

    /// Absolute path of a file in the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read a file from the test directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read test file")
    }
}
