//! CLI tool for chartgrid - prints the chart option for a layout config
//!
//! Usage:
//!   chartgrid_cli                          # Default config, JSON to stdout
//!   chartgrid_cli <config.json>            # Config from file
//!   chartgrid_cli <config.json> -o out.json

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use chartgrid::{initial_option, LayoutConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: chartgrid_cli [config.json] [-o output.json]");
        std::process::exit(0);
    }

    let (input_path, output_path) = match args.len() {
        1 => (None, None),
        2 => (Some(&args[1]), None),
        3 if args[1] == "-o" => (None, Some(&args[2])),
        4 if args[2] == "-o" => (Some(&args[1]), Some(&args[3])),
        _ => {
            eprintln!("Usage: chartgrid_cli [config.json] [-o output.json]");
            std::process::exit(1);
        }
    };

    // Read config
    let config = match input_path {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<LayoutConfig>(&text) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => LayoutConfig::default(),
    };
    info!(
        cells = config.cell_count,
        columns = config.columns,
        "generating option"
    );

    // Generate
    let option = match initial_option(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&option) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
