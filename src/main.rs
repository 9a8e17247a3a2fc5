use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

mod capture;
mod config;
mod draw;
mod input;
mod script;
mod util;

use draw::{RasterSurface, Surface};
use script::{Script, ScriptRunner};

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(version, about = "Freehand and shape drawing pad with rubber-band previews")]
struct Cli {
    /// Replay a recorded pointer script (JSON) onto the canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Paint an existing PNG onto the canvas at the origin first
    #[arg(long, value_name = "FILE")]
    open: Option<PathBuf>,

    /// Write the resulting PNG to this exact path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the result as a data URL on stdout instead of saving a file
    #[arg(long, action = ArgAction::SetTrue)]
    data_url: bool,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.script.is_none() && cli.open.is_none() && cli.output.is_none() && !cli.data_url {
        // No work requested: show usage
        println!("inkpad: Freehand and shape drawing pad with rubber-band previews");
        println!();
        println!("Usage:");
        println!("  inkpad --script <FILE>              Replay a pointer script and export the result");
        println!("  inkpad --open <FILE>                Start from an existing PNG instead of a blank canvas");
        println!("  inkpad --output <FILE>              Save the canvas to an exact path");
        println!("  inkpad --data-url                   Print the canvas as a data URL instead of saving");
        println!("  inkpad --width/--height <PIXELS>    Override the configured canvas size");
        println!("  inkpad --help                       Show help");
        println!();
        println!("With no --output or --data-url, the canvas is saved into the [export]");
        println!("directory from ~/.config/inkpad/config.toml using its filename template.");
        return Ok(());
    }

    let config = config::Config::load()?;

    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    let mut surface = RasterSurface::new(width, height);
    log::info!("Canvas ready at {}x{}", width, height);

    if let Some(path) = &cli.open {
        capture::import_png(&mut surface, path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;
    }

    if let Some(path) = &cli.script {
        let script = Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?;
        let tools = config.tools.to_tool_config()?;
        let mut runner = ScriptRunner::new(tools);
        let stats = runner
            .run(&mut surface, &script)
            .with_context(|| format!("Failed to replay script {}", path.display()))?;
        log::info!(
            "Replayed {}: {} shapes committed, {} brush samples dropped",
            path.display(),
            stats.shapes_committed,
            stats.dropped_samples
        );
    }

    let snapshot = surface.snapshot();

    if cli.data_url {
        let url = capture::to_data_url(&snapshot).context("Failed to encode data URL")?;
        println!("{}", url);
    }

    if let Some(path) = &cli.output {
        capture::export_to_path(&snapshot, path)
            .with_context(|| format!("Failed to save drawing to {}", path.display()))?;
        println!("Saved {}", path.display());
    } else if !cli.data_url {
        let save_config = capture::FileSaveConfig::from_export_config(&config.export);
        let saved = capture::export_to_directory(&snapshot, &save_config)
            .context("Failed to save drawing to the export directory")?;
        println!("Saved {}", saved.display());
    }

    Ok(())
}
