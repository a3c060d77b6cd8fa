//! Lineup checker
//!
//! Reads a lineup snapshot (JSON array of player records in court meters),
//! runs the overlap validator and optionally prints drag bounds per slot.
//!
//! Usage:
//!   cargo run -- lineup.json --bounds --format text

use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use volley_overlap::constraints::OptimizedConstraintCalculator;
use volley_overlap::core::error::Result;
use volley_overlap::{CoordinateBounds, EngineConfig, OverlapResult, OverlapValidator, PlayerState};

/// Check a volleyball lineup against the overlap rules
#[derive(Parser, Debug)]
#[command(name = "volley_overlap")]
#[command(about = "Validate a six-player lineup against the overlap rules")]
struct Args {
    /// Lineup JSON file (array of player records)
    lineup: PathBuf,

    /// Engine config (TOML); defaults apply when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Also print per-slot constraint bounds
    #[arg(long)]
    bounds: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("volley_overlap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "lineup check failed");
            ExitCode::from(2)
        }
    }
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    result: &'a OverlapResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<BTreeMap<u8, CoordinateBounds>>,
}

/// Returns whether the lineup is legal
fn run(args: &Args) -> Result<bool> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let content = fs::read_to_string(&args.lineup)?;
    let players: Vec<PlayerState> = serde_json::from_str(&content)?;
    tracing::info!(players = players.len(), path = %args.lineup.display(), "lineup loaded");

    let validator = OverlapValidator::from_config(&config);
    let result = validator.validate(&players);

    let bounds = args
        .bounds
        .then(|| OptimizedConstraintCalculator::from_config(&config).bounds_for_all(&players));

    if args.format == "json" {
        let report = Report {
            result: &result,
            bounds: bounds
                .as_ref()
                .map(|table| table.iter().map(|(slot, b)| (slot.number(), b)).collect()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&result);
        if let Some(table) = &bounds {
            println!();
            println!("Constraint bounds:");
            for (slot, b) in table.iter() {
                println!(
                    "  {:<18} x [{:.2}, {:.2}]  y [{:.2}, {:.2}]",
                    slot.to_string(),
                    b.min_x,
                    b.max_x,
                    b.min_y,
                    b.max_y
                );
            }
        }
    }

    Ok(result.is_legal)
}

fn print_text(result: &OverlapResult) {
    if result.is_legal {
        println!("LEGAL: no overlap violations");
        return;
    }

    println!("ILLEGAL: {} violation(s)", result.violations.len());
    for v in &result.violations {
        let slots: Vec<String> = v.slots.iter().map(|s| s.number().to_string()).collect();
        println!("  [{}] slots [{}] {}", v.code, slots.join(", "), v.message);
    }
}
