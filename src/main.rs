// inkpad: drive the headless sketch pad from the command line.
//
// Subcommands:
//   rasterize: paint a stroke file and print the 28x28 grid
//   predict:   paint a stroke file, submit it to the classifier, print
//              the predicted digit

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine as Base64Engine;
use clap::{Parser, Subcommand};

use inkpad::{OfflineClassifier, PadConfig, Sketchpad, Stroke};

#[derive(Parser)]
#[command(name = "inkpad", about = "Headless handwritten-digit sketch pad")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Rasterize a stroke file into the classifier grid and print it
    Rasterize {
        /// JSON stroke file: an array of strokes, each an array of {x, y}
        strokes: PathBuf,
        /// Print text art instead of the JSON grid
        #[arg(long)]
        text: bool,
        /// Also print the painted surface's alpha plane as base64
        #[arg(long)]
        dump_bitmap: bool,
    },
    /// Submit a stroke file to the classifier and print the predicted digit
    Predict {
        /// JSON stroke file: an array of strokes, each an array of {x, y}
        strokes: PathBuf,
        /// Classifier endpoint URL (defaults to the local model server)
        #[arg(long)]
        endpoint: Option<String>,
        /// Use the offline fixed-answer backend instead of HTTP
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Cmd::Rasterize {
            strokes,
            text,
            dump_bitmap,
        } => cmd_rasterize(&strokes, text, dump_bitmap),
        Cmd::Predict {
            strokes,
            endpoint,
            offline,
        } => cmd_predict(&strokes, endpoint, offline),
    }
}

fn load_strokes(path: &Path) -> anyhow::Result<Vec<Stroke>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read stroke file {}", path.display()))?;
    let strokes: Vec<Stroke> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid stroke JSON in {}", path.display()))?;
    Ok(strokes)
}

fn cmd_rasterize(path: &Path, text: bool, dump_bitmap: bool) -> anyhow::Result<()> {
    let strokes = load_strokes(path)?;
    let mut pad = Sketchpad::new(PadConfig::default());
    pad.replay_strokes(&strokes);

    let grid = pad.grid();
    if text {
        print!("{}", grid.to_text());
    } else {
        println!("{}", serde_json::to_string(&grid)?);
    }
    if dump_bitmap {
        let plane = pad.canvas().bitmap().alpha_plane();
        println!("{}", base64::engine::general_purpose::STANDARD.encode(plane));
    }
    Ok(())
}

fn cmd_predict(path: &Path, endpoint: Option<String>, offline: bool) -> anyhow::Result<()> {
    let strokes = load_strokes(path)?;
    let mut config = PadConfig::default();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    let mut pad = Sketchpad::new(config);
    pad.replay_strokes(&strokes);
    log::info!(
        "submitting {} strokes ({} inked cells)",
        pad.strokes().len(),
        pad.grid().inked_cells()
    );

    let label = if offline {
        pad.submit_with(&OfflineClassifier::default())?
    } else {
        if !cfg!(feature = "remote") {
            log::warn!("remote backend compiled out; answering with the offline classifier");
        }
        let classifier = inkpad::new_classifier(pad.config())?;
        pad.submit_with(&classifier)?
    };
    println!("{}", label);
    Ok(())
}
