//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Builder for card config files in a temp directory
pub struct ConfigFileBuilder {
    temp_dir: TempDir,
    fields: Vec<String>,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, fields: Vec::new() }
    }

    pub fn timezones(mut self, zones: &[&str]) -> Self {
        let list = zones.iter().map(|z| format!("\"{}\"", z)).collect::<Vec<_>>().join(", ");
        self.fields.push(format!("\"timezones\": [{}]", list));
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.fields.push(format!("\"locale\": \"{}\"", locale));
        self
    }

    pub fn update_interval_ms(mut self, ms: u64) -> Self {
        self.fields.push(format!("\"updateIntervalMs\": {}", ms));
        self
    }

    /// Write `card.json` and return (temp dir guard, path)
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("card.json");
        fs::write(&path, format!("{{{}}}", self.fields.join(", ")))
            .expect("Failed to write card.json");
        (self.temp_dir, path)
    }

    pub fn write_raw(self, content: &str) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("card.json");
        fs::write(&path, content).expect("Failed to write card.json");
        (self.temp_dir, path)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// The binary with a pinned environment: UTC local zone and en-US locale
pub fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relative-time-card"));
    cmd.env("TZ", "UTC")
        .env("LANG", "en_US.UTF-8")
        .env_remove("LC_ALL")
        .env_remove("LC_TIME")
        .env_remove("RUST_LOG");
    cmd
}
