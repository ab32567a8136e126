use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_REPORT_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = ".rcscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_policies_dir")]
    pub policies_dir: String,
    #[serde(default = "default_registry")]
    pub registry: String,
    /// Where the spreadsheet is written. `None` means the platform temp directory.
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_open_report")]
    pub open_report: bool,
    /// Viewer program to use instead of the platform default.
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_policies_dir() -> String {
    "policies".to_string()
}

fn default_registry() -> String {
    "azurerm-4.53.0-resource-types.json".to_string()
}

fn default_report_file_name() -> String {
    DEFAULT_REPORT_FILE_NAME.to_string()
}

fn default_open_report() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policies_dir: default_policies_dir(),
            registry: default_registry(),
            output_dir: None,
            report_file_name: default_report_file_name(),
            ignores: Vec::new(),
            open_report: default_open_report(),
            open_command: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the report file
    /// name is not a plain file name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.report_file_name.trim().is_empty() {
            bail!("'reportFileName' must not be empty");
        }
        if self.report_file_name.contains(['/', '\\']) {
            bail!(
                "'reportFileName' must be a file name, not a path: \"{}\"",
                self.report_file_name
            );
        }

        if let Some(program) = &self.open_command
            && program.trim().is_empty()
        {
            bail!("'openCommand' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
