/*
 * select_image_format.rs
 * Copyright (c) 2025 Posit, PBC
 */

use clap::Parser;
use coursebook_filters::driver;
use coursebook_filters::transforms::image_formats;

/// Rewrite dual-extension image URLs for the target output format.
#[derive(Parser, Debug)]
#[command(name = "select-image-format")]
struct Args {
    /// Target output format, passed by the typesetting tool.
    format: Option<String>,
}

fn main() {
    let args = Args::parse();
    let result = driver::run(|doc| {
        Ok(image_formats::select_image_urls(doc, args.format.as_deref()))
    });
    if let Err(e) = result {
        eprintln!("select-image-format: {}", e);
        std::process::exit(1);
    }
}
