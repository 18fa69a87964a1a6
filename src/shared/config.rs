use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

use super::dirs;
use super::env_var::EnvVars;

/// Top-level configuration for pr-help-cli.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub CLI settings.
    #[serde(default)]
    pub gh: GhConfig,

    /// Settings for the static LLM instruction blocks.
    #[serde(default)]
    pub instructions: InstructionsConfig,
}

/// GitHub CLI configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GhConfig {
    /// Program used for every GitHub call (default: "gh").
    #[serde(default = "default_gh_command")]
    #[schemars(default = "default_gh_command")]
    pub command: String,
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            command: default_gh_command(),
        }
    }
}

/// Instruction text configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstructionsConfig {
    /// Command the fix instructions tell the agent to compile with.
    #[serde(default = "default_compile_command")]
    #[schemars(default = "default_compile_command")]
    pub compile_command: String,
}

impl Default for InstructionsConfig {
    fn default() -> Self {
        Self {
            compile_command: default_compile_command(),
        }
    }
}

impl Config {
    /// Apply PR_HELP_* overrides on top of file values.
    pub fn with_env(mut self, env: &EnvVars) -> Self {
        if let Some(gh) = &env.gh {
            self.gh.command = gh.clone();
        }
        self
    }
}

fn default_gh_command() -> String {
    "gh".to_string()
}

fn default_compile_command() -> String {
    "./gradlew wallet_solution:compileDebugSources -q".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/pr-help/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("pr-help"))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
