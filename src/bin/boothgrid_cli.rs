//! CLI tool for boothgrid - parses layout CSV files and outputs JSON
//!
//! Usage:
//!   boothgrid_cli <layout.csv>                               # JSON to stdout
//!   boothgrid_cli <layout.csv> --details <details.csv>       # include details
//!   boothgrid_cli <layout.csv> -o out.json                   # JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;

use boothgrid::{parse_details_csv, parse_layout_csv, Details, Layout};

#[derive(Serialize)]
struct Output {
    layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Details>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: boothgrid_cli <layout.csv> [--details details.csv] [-o output.json]");
        std::process::exit(1);
    }

    let layout_path = &args[1];
    let mut details_path: Option<&String> = None;
    let mut output_path: Option<&String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--details" if i + 1 < args.len() => {
                details_path = Some(&args[i + 1]);
                i += 2;
            }
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read and parse the layout sheet
    let layout_text = match fs::read_to_string(layout_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", layout_path, e);
            std::process::exit(1);
        }
    };
    let layout = match parse_layout_csv(&layout_text) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error parsing {}: {}", layout_path, e);
            std::process::exit(1);
        }
    };

    // Detail sheet is optional; its warnings are surfaced, not fatal
    let details = details_path.map(|path| {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        };
        let details = match parse_details_csv(&text) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error parsing {}: {}", path, e);
                std::process::exit(1);
            }
        };
        for w in &details.warnings {
            eprintln!("Warning: {}", w);
        }
        details
    });

    let json = match serde_json::to_string_pretty(&Output { layout, details }) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

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
