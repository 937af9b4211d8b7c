//! Config reader / frame writer traits and format dispatch
//!
//! Config files are picked by extension (`.yaml`, `.yml`, `.json`); rendered
//! frames are written by format id (`svg`, `json`).

use std::path::Path;

use sisterhood_field::{ConfigError, FieldConfig, Recorder};
use thiserror::Error;

use crate::config_reader::{JsonConfigReader, YamlConfigReader};
use crate::json_writer::JsonWriter;
use crate::svg_writer::SvgWriter;

/// Errors that can occur while reading config or writing frames
#[derive(Error, Debug)]
pub enum IoError {
    /// No reader or writer handles this extension
    #[error("unsupported format: {ext} (expected one of: {})", .supported.join(", "))]
    UnsupportedFormat { ext: String, supported: Vec<String> },

    /// The file extension could not be determined
    #[error("could not determine file format from path: {0}")]
    UnknownExtension(String),

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsing error occurred
    #[error("parse error: {0}")]
    Parse(String),

    /// The config parsed but cannot drive a field
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A rendering/writing error occurred
    #[error("write error: {0}")]
    Write(String),
}

/// Result type for reader/writer operations
pub type IoResult<T> = Result<T, IoError>;

/// A reader parses a config file into a validated [`FieldConfig`]
pub trait ConfigReader {
    /// Parse the input file
    fn read(&self, input: &Path) -> IoResult<FieldConfig>;

    /// File extensions this reader can handle (e.g., ["yaml", "yml"])
    fn supported_extensions(&self) -> &[&str];

    /// Check if this reader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A writer outputs one recorded frame
pub trait FrameWriter {
    /// Write the frame to the output path
    fn write(&self, frame: &Recorder, output: &Path) -> IoResult<()>;

    /// Identifier for this output format (e.g., "svg", "json")
    fn format_id(&self) -> &str;
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Registry of available readers and writers
pub struct FormatRegistry {
    readers: Vec<Box<dyn ConfigReader>>,
    writers: Vec<Box<dyn FrameWriter>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            writers: Vec::new(),
        }
    }

    /// Create a registry with all default readers and writers registered
    ///
    /// Currently registers:
    /// - Readers: `YamlConfigReader` (yaml, yml), `JsonConfigReader` (json)
    /// - Writers: `SvgWriter` (svg), `JsonWriter` (json)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_reader(Box::new(YamlConfigReader::new()));
        registry.register_reader(Box::new(JsonConfigReader::new()));
        registry.register_writer(Box::new(SvgWriter::new()));
        registry.register_writer(Box::new(JsonWriter::new()));
        registry
    }

    /// Register a config reader
    pub fn register_reader(&mut self, reader: Box<dyn ConfigReader>) {
        self.readers.push(reader);
    }

    /// Register a frame writer
    pub fn register_writer(&mut self, writer: Box<dyn FrameWriter>) {
        self.writers.push(writer);
    }

    /// Find a reader for the given file extension
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn ConfigReader> {
        self.readers
            .iter()
            .find(|r| r.supports_extension(ext))
            .map(|r| r.as_ref())
    }

    /// Find a reader for the given file path (based on extension)
    pub fn reader_for_path(&self, path: &Path) -> IoResult<&dyn ConfigReader> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.reader_for_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat {
                ext: ext.to_string(),
                supported: owned(self.supported_config_extensions()),
            })
    }

    /// Find a writer by format id
    pub fn writer_for_format(&self, format: &str) -> Option<&dyn FrameWriter> {
        self.writers
            .iter()
            .find(|w| w.format_id().eq_ignore_ascii_case(format))
            .map(|w| w.as_ref())
    }

    /// Find a writer for the given output path (based on extension)
    pub fn writer_for_path(&self, path: &Path) -> IoResult<&dyn FrameWriter> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.writer_for_format(ext)
            .ok_or_else(|| IoError::UnsupportedFormat {
                ext: ext.to_string(),
                supported: owned(self.supported_output_formats()),
            })
    }

    /// Get all supported config extensions
    pub fn supported_config_extensions(&self) -> Vec<&str> {
        self.readers
            .iter()
            .flat_map(|r| r.supported_extensions().iter().copied())
            .collect()
    }

    /// Get all supported output formats
    pub fn supported_output_formats(&self) -> Vec<&str> {
        self.writers.iter().map(|w| w.format_id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn registry_with_defaults_has_readers_and_writers() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.supported_config_extensions(),
            vec!["yaml", "yml", "json"]
        );
        assert_eq!(registry.supported_output_formats(), vec!["svg", "json"]);
    }

    #[test]
    fn reader_lookup_is_case_insensitive() {
        let registry = FormatRegistry::with_defaults();
        assert!(registry.reader_for_extension("YML").is_some());
        assert!(registry.reader_for_extension("Json").is_some());
        assert!(registry.reader_for_extension("toml").is_none());
    }

    #[test]
    fn reader_for_path_without_extension_fails() {
        let registry = FormatRegistry::with_defaults();
        let err = registry
            .reader_for_path(&PathBuf::from("config"))
            .err()
            .unwrap();
        assert!(matches!(err, IoError::UnknownExtension(_)));
    }

    #[test]
    fn reader_for_unsupported_extension_fails() {
        let registry = FormatRegistry::with_defaults();
        let err = registry
            .reader_for_path(&PathBuf::from("config.toml"))
            .err()
            .unwrap();
        assert!(matches!(&err, IoError::UnsupportedFormat { ext, .. } if ext == "toml"));
        assert_eq!(
            err.to_string(),
            "unsupported format: toml (expected one of: yaml, yml, json)"
        );
    }

    #[test]
    fn writer_for_path_picks_by_extension() {
        let registry = FormatRegistry::with_defaults();
        let writer = registry
            .writer_for_path(&PathBuf::from("out/frame.SVG"))
            .unwrap();
        assert_eq!(writer.format_id(), "svg");

        let err = registry
            .writer_for_path(&PathBuf::from("frame.png"))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "unsupported format: png (expected one of: svg, json)"
        );
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let registry = FormatRegistry::new();
        assert!(registry.reader_for_extension("yaml").is_none());
        assert!(registry.writer_for_format("svg").is_none());
    }
}
