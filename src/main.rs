use std::{
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use ocr_lines::{merge_text_lines_with, parse_annotations, vision, MergeOptions};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Merge word-level text detections into lines.
///
/// Reads an image annotation response (or a bare annotation array) as JSON and prints the merged
/// line annotations.
#[derive(Parser)]
#[command(name = "ocr-lines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// JSON file to read; stdin when omitted
    input: Option<PathBuf>,

    /// Print the reduced `{text, boundingBox}` list instead of full annotations
    #[arg(long)]
    extracted: bool,

    #[arg(long)]
    pretty: bool,

    /// Fraction of the average word size below which centers share a line
    #[arg(long, env = "OCR_LINES_THRESHOLD_RATIO", default_value_t = 0.6)]
    threshold_ratio: f64,

    /// Treat the first annotation as a word instead of the whole-image aggregate
    #[arg(long, env = "OCR_LINES_KEEP_AGGREGATE")]
    keep_aggregate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let json = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let annotations = parse_annotations(&json)?;
    let options = MergeOptions {
        line_threshold_ratio: cli.threshold_ratio,
        skip_aggregate: !cli.keep_aggregate,
        ..Default::default()
    };

    let start = Instant::now();
    let merged = merge_text_lines_with(&annotations, options);
    tracing::info!(
        "Merged {} detections into {} lines in {:?}",
        annotations.len(),
        merged.len(),
        start.elapsed()
    );

    let output = if cli.extracted {
        vision::to_json(&vision::extracted_list(&merged), cli.pretty)?
    } else {
        vision::to_json(&merged, cli.pretty)?
    };
    println!("{output}");
    Ok(())
}
