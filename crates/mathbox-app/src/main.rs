//! mathbox command-line entry point.
//!
//! Reads a JSON array of semantic nodes, lays it out, and prints the box
//! tree as pretty JSON on stdout.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mathbox_layout::{LayoutConfig, SemanticNode};
use mathbox_types::error::MathboxError;

const USAGE: &str =
    "Usage: mathbox-app <tree.json | -> [--metrics FILE.json] [--config FILE.toml] [--display]";

// ---------------------------------------------------------------------------
// CLI parsing
// ---------------------------------------------------------------------------

struct Args {
    /// Input tree; `-` reads stdin.
    input: String,
    /// Metrics JSON merged over the built-in tables.
    metrics: Option<PathBuf>,
    /// Layout config TOML.
    config: Option<PathBuf>,
    /// Force display style.
    display: bool,
}

fn parse_args() -> Args {
    let mut input = None;
    let mut args = Args {
        input: String::new(),
        metrics: None,
        config: None,
        display: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--metrics" => args.metrics = iter.next().map(PathBuf::from),
            "--config" => args.config = iter.next().map(PathBuf::from),
            "--display" => args.display = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            },
            other if input.is_none() && (other == "-" || !other.starts_with('-')) => {
                input = Some(other.to_string());
            },
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("{USAGE}");
                std::process::exit(1);
            },
        }
    }
    match input {
        Some(input) => args.input = input,
        None => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        },
    }
    args
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading tree from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading tree from {input}"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();

    let mut config = match &args.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    if args.metrics.is_some() {
        config.metrics_path = args.metrics.clone();
    }
    if args.display {
        config.display_mode = true;
    }

    let text = read_input(&args.input)?;
    let nodes: Vec<SemanticNode> =
        serde_json::from_str(&text).map_err(MathboxError::from).context("parsing tree")?;
    log::info!("Read {} top-level nodes from {}", nodes.len(), args.input);

    let root = config.layout(&nodes)?;
    log::info!(
        "Layout: height {:.4}em, depth {:.4}em, {} boxes",
        root.height(),
        root.depth(),
        root.node_count()
    );

    println!("{}", serde_json::to_string_pretty(&root)?);
    Ok(())
}
