use std::{borrow::Cow, fs, path::Path};

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

/// Settings read from an optional YAML file.
///
/// ```yaml
/// limits:
///   name: 63
///   path: 511
/// prompt: "$ "
/// ```
///
/// Every key is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub name_limit: Option<usize>,
    pub path_limit: Option<usize>,
    pub prompt: Option<String>,
}

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

impl ConfigFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigFileError> {
        debug!("Reading config file: {}", path.display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read config file: {} bytes", contents.len());
        contents.as_str().try_into()
    }

    fn parse_limits(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(Option<usize>, Option<usize>), ConfigFileError> {
        let Some(limits) = top_level.get(&key("limits")) else {
            return Ok((None, None));
        };
        let limits = limits.as_mapping().context(LimitsNotMapSnafu)?;

        let name = Self::parse_limit(limits, "name")?;
        let path = Self::parse_limit(limits, "path")?;
        Ok((name, path))
    }

    fn parse_limit(
        limits: &LinkedHashMap<Yaml, Yaml>,
        limit: &'static str,
    ) -> Result<Option<usize>, ConfigFileError> {
        match limits.get(&key(limit)) {
            None => Ok(None),
            Some(Yaml::Value(Scalar::Integer(value))) if *value > 0 => usize::try_from(*value)
                .map(Some)
                .map_err(|_| ConfigFileError::InvalidLimit {
                    limit: limit.to_string(),
                }),
            Some(_) => InvalidLimitSnafu { limit }.fail(),
        }
    }

    fn parse_prompt(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Option<String>, ConfigFileError> {
        match top_level.get(&key("prompt")) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|prompt| Some(prompt.to_string()))
                .context(PromptNotStringSnafu),
        }
    }
}

impl TryFrom<&str> for ConfigFile {
    type Error = ConfigFileError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents)
            .map_err(|e| ConfigFileError::ParseError { source: e })?;
        let Some(document) = documents.first() else {
            // An empty file configures nothing
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        let (name_limit, path_limit) = Self::parse_limits(top_level)?;
        let prompt = Self::parse_prompt(top_level)?;

        Ok(ConfigFile {
            name_limit,
            path_limit,
            prompt,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigFileError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Limits section should be a map"))]
    LimitsNotMap,
    #[snafu(display("Limit '{}' should be a positive integer", limit))]
    InvalidLimit { limit: String },
    #[snafu(display("Prompt should be a string"))]
    PromptNotString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_returns_error_on_nonexistent_file() {
        let result = ConfigFile::from_path(Path::new("nonexistent.yaml"));
        assert!(matches!(result, Err(ConfigFileError::ReadError { .. })));
    }

    #[test]
    fn config_reads_from_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "limits:\n  name: 8\n  path: 128\nprompt: \"> \"")
            .expect("Failed to write to temp file");

        let config = ConfigFile::from_path(temp_file.path()).expect("Failed to read config");
        assert_eq!(
            config,
            ConfigFile {
                name_limit: Some(8),
                path_limit: Some(128),
                prompt: Some("> ".to_string()),
            }
        );
    }

    #[test]
    fn config_returns_error_on_invalid_yaml() {
        let result: Result<ConfigFile, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(ConfigFileError::ParseError { .. })));
    }

    #[test]
    fn config_handles_empty_file() {
        let result: Result<ConfigFile, _> = "".try_into();
        assert_eq!(result.unwrap(), ConfigFile::default());
    }

    #[rstest]
    #[case("- item1\n- item2")]
    #[case("just a string")]
    fn config_returns_error_when_top_level_is_not_map(#[case] contents: &str) {
        let result: Result<ConfigFile, _> = contents.try_into();
        assert!(matches!(result, Err(ConfigFileError::TopLevelNotMap)));
    }

    #[test]
    fn config_returns_error_when_limits_is_not_map() {
        let result: Result<ConfigFile, _> = "limits:\n  - 63".try_into();
        assert!(matches!(result, Err(ConfigFileError::LimitsNotMap)));
    }

    #[rstest]
    #[case("limits:\n  name: 0", "name")]
    #[case("limits:\n  name: -4", "name")]
    #[case("limits:\n  path: big", "path")]
    #[case("limits:\n  path: 1.5", "path")]
    fn config_rejects_invalid_limits(#[case] contents: &str, #[case] expected: &str) {
        let result: Result<ConfigFile, _> = contents.try_into();
        match result {
            Err(ConfigFileError::InvalidLimit { limit }) => assert_eq!(limit, expected),
            other => panic!("Expected InvalidLimit, got {other:?}"),
        }
    }

    #[test]
    fn config_returns_error_when_prompt_is_not_string() {
        let result: Result<ConfigFile, _> = "prompt:\n  nested: true".try_into();
        assert!(matches!(result, Err(ConfigFileError::PromptNotString)));
    }

    #[test]
    fn config_handles_partial_sections() {
        let result: Result<ConfigFile, _> = "limits:\n  name: 16\nother: value".try_into();
        assert_eq!(
            result.unwrap(),
            ConfigFile {
                name_limit: Some(16),
                ..ConfigFile::default()
            }
        );
    }
}
