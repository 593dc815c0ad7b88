use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary store
pub struct CliTestHarness {
    temp_dir: TempDir,
    store_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("store.json");
        Self {
            temp_dir,
            store_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        // Point the store at the temp dir and keep any cadence.toml in the
        // repo from leaking into the test.
        cmd.env("CADENCE_STORE_PATH", &self.store_path);
        cmd.current_dir(self.temp_dir.path());
        cmd
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Parses the store file as JSON for direct state assertions.
    pub fn store_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.store_path).expect("store file missing");
        serde_json::from_str(&raw).expect("store file is not valid JSON")
    }

    pub fn task_count(&self) -> usize {
        self.store_json()["tasks"].as_array().map_or(0, Vec::len)
    }

    pub fn rule_count(&self) -> usize {
        self.store_json()["rules"].as_array().map_or(0, Vec::len)
    }
}
