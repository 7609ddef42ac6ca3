#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run ticketgrid commands with an isolated config directory
pub struct TicketGridTest {
    pub temp_dir: TempDir,
}

impl TicketGridTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketGridTest { temp_dir }
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ticketgrid"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKETGRID_HOME", self.home())
            .env_remove("TICKETGRID_URL")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute ticketgrid command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a snapshot file into the temp dir and return its path
    pub fn write_board(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write board file");
        path.to_string_lossy().to_string()
    }

    pub fn read_preferences(&self) -> Option<String> {
        fs::read_to_string(self.home().join("preferences.yaml")).ok()
    }
}

/// Path to the shared board fixture
pub fn fixture_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/board.json").to_string()
}

/// Byte offset of the first occurrence of `needle`, panicking if absent
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output:\n{haystack}"))
}
