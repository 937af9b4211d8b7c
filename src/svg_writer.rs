//! SVG Writer
//!
//! Turns one recorded frame into a standalone SVG document. The document
//! skeleton lives in `templates/frame.svg`; each draw command renders itself.

use std::fmt;
use std::fs;
use std::path::Path;

use askama::Template;
use sisterhood_field::{DrawCommand, Point, Recorder, Rgba};

use crate::io::{FrameWriter, IoError, IoResult};

#[derive(Template)]
#[template(path = "frame.svg", escape = "none")]
struct FrameTemplate<'a> {
    width: u32,
    height: u32,
    background: Option<&'a str>,
    elements: Vec<SvgElement<'a>>,
}

/// A draw command as an SVG element
struct SvgElement<'a>(&'a DrawCommand);

/// `fill`/`stroke` attributes for a color, split into rgb and opacity
struct Paint<'a> {
    attr: &'a str,
    color: Rgba,
}

impl fmt::Display for Paint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba { r, g, b, a } = self.color;
        write!(
            f,
            r#"{attr}="rgb({r}, {g}, {b})" {attr}-opacity="{a:.3}""#,
            attr = self.attr
        )
    }
}

fn fill(color: Rgba) -> Paint<'static> {
    Paint { attr: "fill", color }
}

fn stroke(color: Rgba) -> Paint<'static> {
    Paint {
        attr: "stroke",
        color,
    }
}

impl fmt::Display for SvgElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DrawCommand::Clear => Ok(()),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => write!(
                f,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" {}/>"#,
                center.x,
                center.y,
                fill(*color)
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                line_width,
            } => write!(
                f,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {} stroke-width="{line_width}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke(*color)
            ),
            DrawCommand::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
                color,
                line_width,
            } => write!(
                f,
                r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{radius_x:.2}" ry="{radius_y:.2}" transform="rotate({:.2} {:.2} {:.2})" fill="none" {} stroke-width="{line_width}"/>"#,
                center.x,
                center.y,
                rotation.to_degrees(),
                center.x,
                center.y,
                stroke(*color)
            ),
            DrawCommand::Polygon {
                points,
                color,
                line_width,
            } => write!(
                f,
                r#"<polygon points="{}" fill="none" {} stroke-width="{line_width}"/>"#,
                PointList(points),
                stroke(*color)
            ),
        }
    }
}

struct PointList<'a>(&'a [Point]);

impl fmt::Display for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:.2},{:.2}", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Writer for SVG frame snapshots
#[derive(Debug, Clone, Default)]
pub struct SvgWriter {
    background: Option<String>,
}

impl SvgWriter {
    /// Create a writer with a transparent background
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a solid background behind the frame (any SVG color)
    pub fn with_background(background: impl Into<String>) -> Self {
        Self {
            background: Some(background.into()),
        }
    }

    /// Render the frame as an SVG document
    pub fn render(&self, frame: &Recorder) -> IoResult<String> {
        let template = FrameTemplate {
            width: frame.width(),
            height: frame.height(),
            background: self.background.as_deref(),
            elements: frame
                .commands()
                .iter()
                .filter(|c| !matches!(c, DrawCommand::Clear))
                .map(SvgElement)
                .collect(),
        };
        template.render().map_err(|e| IoError::Write(e.to_string()))
    }
}

impl FrameWriter for SvgWriter {
    fn write(&self, frame: &Recorder, output: &Path) -> IoResult<()> {
        let svg = self.render(frame)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, svg)?;
        Ok(())
    }

    fn format_id(&self) -> &str {
        "svg"
    }
}
