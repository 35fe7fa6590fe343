//! Configuration management for the nanofs shell
//!
//! Settings come from built-in defaults, an optional `config.toml`, and
//! `NANOFS_*` environment variables, in increasing order of precedence.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "NANOFS";

/// Shell settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Text written before every input line
    pub prompt: String,

    /// Input line that ends the session
    pub exit_command: String,

    /// Longest accepted input line, in bytes
    pub max_command_length: usize,

    /// Line printed once at startup; empty to skip
    pub greeting: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "$: ".to_string(),
            exit_command: "exit".to_string(),
            max_command_length: 512,
            greeting: "nanofs: type help for commands".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from `config.toml` in the working directory, if any,
    /// with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            File::with_name(DEFAULT_CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load configuration from an explicit file, with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(
            File::from(path).required(true),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn build<F, E>(file: F, env: E) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("prompt", defaults.prompt)?
            .set_default("exit_command", defaults.exit_command)?
            .set_default("max_command_length", defaults.max_command_length as i64)?
            .set_default("greeting", defaults.greeting)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.exit_command.trim().is_empty() {
            return Err(ConfigError::Message("exit_command cannot be empty".into()));
        }

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_validate() {
        assert!(ShellConfig::default().validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config("prompt = \"> \"\nmax_command_length = 64\n");
        let config = ShellConfig::load_from(file.path()).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.max_command_length, 64);
        assert_eq!(config.exit_command, "exit");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("exit_command = \"  \"\n");
        assert!(ShellConfig::load_from(file.path()).is_err());

        let file = write_config("max_command_length = 0\n");
        assert!(ShellConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ShellConfig::load_from(&path).is_err());
    }
}
