//! Config readers
//!
//! Both formats deserialize straight into [`FieldConfig`]; missing keys keep
//! their defaults. Every config is validated before it is returned.

use std::fs;
use std::path::Path;

use sisterhood_field::FieldConfig;

use crate::io::{ConfigReader, IoError, IoResult};

/// Reader for YAML config files
pub struct YamlConfigReader;

impl YamlConfigReader {
    /// Create a new YAML reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader for YamlConfigReader {
    fn read(&self, input: &Path) -> IoResult<FieldConfig> {
        let content = fs::read_to_string(input)?;
        // An empty file means "all defaults"
        let config: FieldConfig = if content.trim().is_empty() {
            FieldConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Reader for JSON config files
pub struct JsonConfigReader;

impl JsonConfigReader {
    /// Create a new JSON reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader for JsonConfigReader {
    fn read(&self, input: &Path) -> IoResult<FieldConfig> {
        let content = fs::read_to_string(input)?;
        let config: FieldConfig =
            serde_json::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Serialize a config as YAML
pub fn to_yaml(config: &FieldConfig) -> IoResult<String> {
    serde_yaml::to_string(config).map_err(|e| IoError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from("tests/fixtures").join(name)
    }

    #[test]
    fn yaml_reader_supports_yaml_extensions() {
        let reader = YamlConfigReader::new();
        assert!(reader.supports_extension("yaml"));
        assert!(reader.supports_extension("YML"));
        assert!(!reader.supports_extension("json"));
    }

    #[test]
    fn yaml_reader_parses_partial_config() {
        let config = YamlConfigReader::new()
            .read(&fixture("dense.yaml"))
            .expect("Should parse YAML config");

        assert_eq!(config.node_area, 4_000);
        assert_eq!(config.link_distance, 120.0);
        // untouched keys keep defaults
        assert_eq!(config.star_area, 14_000);
        assert_eq!(config.time_step, 0.5);
    }

    #[test]
    fn json_reader_parses_config() {
        let config = JsonConfigReader::new()
            .read(&fixture("slow.json"))
            .expect("Should parse JSON config");
        assert_eq!(config.time_step, 0.25);
        assert_eq!(config.ring_area, 90_000);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = YamlConfigReader::new()
            .read(&fixture("invalid.yaml"))
            .unwrap_err();
        assert!(matches!(err, IoError::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonConfigReader::new().read(&path).unwrap_err();
        assert!(matches!(err, IoError::Parse(_)));
    }

    #[test]
    fn empty_yaml_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "\n").unwrap();

        let config = YamlConfigReader::new().read(&path).unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = YamlConfigReader::new()
            .read(&fixture("does-not-exist.yaml"))
            .unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn default_yaml_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.yaml");
        fs::write(&path, to_yaml(&FieldConfig::default()).unwrap()).unwrap();

        let config = YamlConfigReader::new().read(&path).unwrap();
        assert_eq!(config, FieldConfig::default());
    }
}
