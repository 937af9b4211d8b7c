use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Headless tooling for the sisterhood background particle field.
#[derive(Parser, Debug)]
#[command(name = "sisterhood")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Field config file (.yaml, .yml or .json); defaults are used if absent
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the field headlessly and write the last frame
    Render {
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Number of ticks to run before capturing
        #[arg(short, long, default_value = "1")]
        frames: u64,

        /// Seed for the random layout
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Solid background color behind the frame (SVG only)
        #[arg(long)]
        background: Option<String>,

        /// Output file; format follows the extension (.svg or .json)
        #[arg(short, long, default_value = "frame.svg")]
        output: PathBuf,
    },
    /// Print how many objects a viewport would hold
    Stats {
        /// Viewport width in pixels
        #[arg(long)]
        width: u32,

        /// Viewport height in pixels
        #[arg(long)]
        height: u32,
    },
    /// Print the effective config as YAML
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_render_with_defaults() {
        let cli = Cli::try_parse_from(["sisterhood", "render"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Render {
                width,
                height,
                frames,
                seed,
                background,
                output,
            } => {
                assert_eq!((width, height), (1280, 720));
                assert_eq!(frames, 1);
                assert_eq!(seed, 0);
                assert!(background.is_none());
                assert_eq!(output, PathBuf::from("frame.svg"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn cli_parses_render_options() {
        let cli = Cli::try_parse_from([
            "sisterhood",
            "render",
            "--width",
            "800",
            "--height",
            "600",
            "--frames",
            "120",
            "--seed",
            "7",
            "--output",
            "out/frame.json",
            "--config",
            "field.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("field.yaml")));
        match cli.command {
            Commands::Render {
                width,
                frames,
                seed,
                output,
                ..
            } => {
                assert_eq!(width, 800);
                assert_eq!(frames, 120);
                assert_eq!(seed, 7);
                assert_eq!(output, PathBuf::from("out/frame.json"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn cli_parses_stats_subcommand() {
        let cli = Cli::try_parse_from(["sisterhood", "stats", "--width", "1920", "--height", "1080"])
            .unwrap();
        match cli.command {
            Commands::Stats { width, height } => {
                assert_eq!((width, height), (1920, 1080));
            }
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn stats_requires_dimensions() {
        assert!(Cli::try_parse_from(["sisterhood", "stats", "--width", "10"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["sisterhood"]).is_err());
    }
}
