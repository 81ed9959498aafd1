use std::path::PathBuf;

use snafu::prelude::*;
use supports_color::Stream;

use crate::cli::Cli;
use crate::config::{ConfigFile, ConfigFileError};
use crate::filesystem::Limits;

const DEFAULT_PROMPT: &str = "$ ";

/// Settings for one run, merged from the command line and the optional
/// config file. Command line flags win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub commands: Vec<String>,
    pub limits: Limits,
    pub prompt: String,
    pub color: bool,
}

impl RuntimeConfig {
    pub fn merge(cli: Cli, file: ConfigFile) -> Self {
        let defaults = Limits::default();
        let limits = Limits {
            name: cli
                .name_limit
                .map(|limit| limit.get())
                .or(file.name_limit)
                .unwrap_or(defaults.name),
            path: cli
                .path_limit
                .map(|limit| limit.get())
                .or(file.path_limit)
                .unwrap_or(defaults.path),
        };

        Self {
            commands: cli.commands,
            limits,
            prompt: file.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            color: !cli.no_color && supports_color::on(Stream::Stdout).is_some(),
        }
    }
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = RuntimeConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = match &cli.config {
            Some(path) => ConfigFile::from_path(path).context(LoadSnafu {
                path: path.clone(),
            })?,
            None => ConfigFile::default(),
        };
        Ok(Self::merge(cli, file))
    }
}

#[derive(Debug, Snafu)]
pub enum RuntimeConfigError {
    #[snafu(display("Failed to load config from {}", path.display()))]
    LoadError {
        path: PathBuf,
        source: ConfigFileError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dirtree").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_config() {
        let config = RuntimeConfig::try_from(cli(&["--no-color", "mkdir /a"])).unwrap();
        assert_eq!(
            config,
            RuntimeConfig {
                commands: vec!["mkdir /a".to_string()],
                limits: Limits::default(),
                prompt: DEFAULT_PROMPT.to_string(),
                color: false,
            }
        );
    }

    #[test]
    fn cli_limits_override_file_limits() {
        let file = ConfigFile {
            name_limit: Some(10),
            path_limit: Some(100),
            prompt: Some("> ".to_string()),
        };
        let config = RuntimeConfig::merge(cli(&["--name-limit", "5"]), file);

        assert_eq!(config.limits, Limits { name: 5, path: 100 });
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn reads_config_file_from_cli_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "limits:\n  path: 64").expect("Failed to write to temp file");
        let path = temp_file.path().to_string_lossy().to_string();

        let config = RuntimeConfig::try_from(cli(&["--config", &path])).unwrap();
        assert_eq!(config.limits.path, 64);
        assert_eq!(config.limits.name, Limits::default().name);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = RuntimeConfig::try_from(cli(&["--config", "/this/does/not/exist.yaml"]));
        assert!(matches!(
            result,
            Err(RuntimeConfigError::LoadError {
                source: ConfigFileError::ReadError { .. },
                ..
            })
        ));
    }
}
