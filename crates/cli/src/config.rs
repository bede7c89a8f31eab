//! Layered configuration: defaults < config file < JOBBOARD_* env vars.
//! Command-line flags are applied on top by `main`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use jobboard_core::domain::{FieldMapping, SchemaChoice, SchemaKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Job document used when neither --url nor --file is given
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/SE2202-001/miniproject-3-0g00d/main/upwork_jobs.JSON";

const CONFIG_FILE_NAME: &str = "jobboard.toml";
const ENV_PREFIX: &str = "JOBBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source_url: String,
    pub schema: SchemaKind,
    /// "pretty" or "json"
    pub log_format: String,
    /// Custom key mapping; overrides `schema` when present
    #[serde(default)]
    pub fields: Option<FieldMapping>,
}

impl AppConfig {
    /// Build the configuration.
    ///
    /// An explicit `path` must exist; the default location
    /// (`<config dir>/jobboard/jobboard.toml`) is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("source_url", DEFAULT_SOURCE_URL)?
            .set_default("schema", "auto")?
            .set_default("log_format", "pretty")?;

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn schema_choice(&self) -> SchemaChoice {
        match &self.fields {
            Some(mapping) => SchemaChoice::Custom(mapping.clone()),
            None => SchemaChoice::Preset(self.schema),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jobboard").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
