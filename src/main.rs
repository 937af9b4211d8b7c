use std::fs;
use std::path::Path;

use clap::Parser;
use sisterhood::cli::{Cli, Commands};
use sisterhood::config_reader::to_yaml;
use sisterhood::io::{FormatRegistry, FrameWriter};
use sisterhood::render::{RenderOptions, render_frame};
use sisterhood::svg_writer::SvgWriter;
use sisterhood_field::FieldConfig;
use tracing_subscriber::EnvFilter;

fn load_config(registry: &FormatRegistry, path: Option<&Path>) -> anyhow::Result<FieldConfig> {
    let Some(path) = path else {
        return Ok(FieldConfig::default());
    };
    let config = registry.reader_for_path(path)?.read(path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn render(
    registry: &FormatRegistry,
    config: FieldConfig,
    options: &RenderOptions,
    background: Option<String>,
    output: &Path,
) -> anyhow::Result<()> {
    // Resolve the writer before doing any work
    let custom_svg;
    let writer: &dyn FrameWriter = match background {
        Some(color) => {
            custom_svg = SvgWriter::with_background(color);
            let target = registry.writer_for_path(output)?;
            if target.format_id() != custom_svg.format_id() {
                anyhow::bail!("--background only applies to SVG output");
            }
            &custom_svg
        }
        None => registry.writer_for_path(output)?,
    };

    let frame = render_frame(config, options);
    writer.write(&frame, output)?;
    println!(
        "Rendered {}x{} frame after {} tick(s) to {}",
        options.width,
        options.height,
        options.frames,
        output.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = FormatRegistry::with_defaults();
    let config = load_config(&registry, cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            width,
            height,
            frames,
            seed,
            background,
            output,
        } => {
            let options = RenderOptions {
                width,
                height,
                frames,
                seed,
            };
            render(&registry, config, &options, background, &output)?;
        }
        Commands::Stats { width, height } => {
            let counts = config.counts(width, height);
            println!("{counts}");
            println!("total={}", counts.total());
        }
        Commands::Config { output } => {
            let yaml = to_yaml(&config)?;
            match output {
                Some(path) => {
                    fs::write(&path, yaml)?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{yaml}"),
            }
        }
    }

    Ok(())
}
