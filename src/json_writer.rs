//! JSON Writer
//!
//! Dumps a recorded frame as a list of draw commands, handy for diffing
//! frames between builds.

use std::fs;
use std::path::Path;

use serde::Serialize;
use sisterhood_field::{DrawCommand, Recorder};

use crate::io::{FrameWriter, IoError, IoResult};

#[derive(Serialize)]
struct FrameDocument<'a> {
    width: u32,
    height: u32,
    commands: &'a [DrawCommand],
}

/// Writer for JSON frame dumps
pub struct JsonWriter;

impl JsonWriter {
    /// Create a new JSON writer
    pub fn new() -> Self {
        Self
    }

    /// Render the frame as pretty-printed JSON
    pub fn render(&self, frame: &Recorder) -> IoResult<String> {
        let doc = FrameDocument {
            width: frame.width(),
            height: frame.height(),
            commands: frame.commands(),
        };
        serde_json::to_string_pretty(&doc).map_err(|e| IoError::Write(e.to_string()))
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameWriter for JsonWriter {
    fn write(&self, frame: &Recorder, output: &Path) -> IoResult<()> {
        let json = self.render(frame)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, json)?;
        Ok(())
    }

    fn format_id(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sisterhood_field::palette::colors;
    use sisterhood_field::{Point, Surface};

    #[test]
    fn commands_are_tagged_by_op() {
        let mut rec = Recorder::new();
        rec.resize(10, 10);
        rec.clear();
        rec.fill_circle(Point::new(1.0, 2.0), 0.5, colors::BLUSH.with_alpha(0.25));

        let json: serde_json::Value =
            serde_json::from_str(&JsonWriter::new().render(&rec).unwrap()).unwrap();
        assert_eq!(json["width"], 10);
        assert_eq!(json["commands"][0]["op"], "clear");
        assert_eq!(json["commands"][1]["op"], "circle");
        assert_eq!(json["commands"][1]["center"]["y"], 2.0);
        assert_eq!(json["commands"][1]["color"]["g"], 248);
    }
}
