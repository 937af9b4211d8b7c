//! sisterhood - headless tooling for the background particle field.
//!
//! The field itself lives in `sisterhood-field`; this crate adds config
//! files, seeded headless rendering and frame export (SVG, JSON).

pub mod cli;
pub mod config_reader;
pub mod io;
pub mod json_writer;
pub mod render;
pub mod svg_writer;
