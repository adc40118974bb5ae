//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{sample_ingredients, sample_products, sample_suits};

/// Isolated data directory for one test.
///
/// # Example
/// ```no_run
/// use tecuro_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog();
/// let result = world.run(&["browse", "--concern", "acne"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty data directory. Nothing is written until asked.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Config path handed to the CLI. The file only exists once written.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// `products.json`, `suits.json` and `ingredients.json` from the fixtures.
    pub fn with_sample_catalog(self) -> Self {
        self.with_json("products.json", &sample_products())
            .with_json("suits.json", &sample_suits())
            .with_json("ingredients.json", &sample_ingredients())
    }

    pub fn with_json<T: serde::Serialize + ?Sized>(self, name: &str, value: &T) -> Self {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.with_raw(name, &content)
    }

    /// Write a resource verbatim, e.g. to plant malformed JSON.
    pub fn with_raw(self, name: &str, content: &str) -> Self {
        std::fs::write(self.data_dir.join(name), content).expect("Failed to write resource");
        self
    }

    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    /// Extra environment for the spawned binary, applied after the scrub.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a CLI command at this world's config and data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.configure_command_with_format(cmd, "plain")
    }

    pub fn configure_command_with_format<'a>(
        &self,
        cmd: &'a mut Command,
        format: &str,
    ) -> &'a mut Command {
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--data-root")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TECURO_CONFIG");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `tecuro` binary against this world.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "plain")
    }

    /// Like [`TestWorld::run`] with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "json")
    }

    #[allow(deprecated)]
    fn run_with_format(&self, args: &[&str], format: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tecuro")
            .map_err(|e| anyhow::anyhow!("Failed to find tecuro binary: {}", e))?;
        self.configure_command_with_format(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
