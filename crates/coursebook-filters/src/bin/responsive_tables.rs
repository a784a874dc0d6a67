/*
 * responsive_tables.rs
 * Copyright (c) 2025 Posit, PBC
 */

use clap::Parser;
use coursebook_filters::driver;
use coursebook_filters::transforms::responsive_tables;

/// Wrap tables for horizontal scrolling in HTML-family output.
#[derive(Parser, Debug)]
#[command(name = "responsive-tables")]
struct Args {
    /// Target output format, passed by the typesetting tool.
    format: Option<String>,
}

fn main() {
    let args = Args::parse();
    let result = driver::run(|doc| {
        Ok(responsive_tables::wrap_tables(doc, args.format.as_deref()))
    });
    if let Err(e) = result {
        eprintln!("responsive-tables: {}", e);
        std::process::exit(1);
    }
}
