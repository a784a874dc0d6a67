/*
 * relocate_solutions.rs
 * Copyright (c) 2025 Posit, PBC
 */

use clap::Parser;
use coursebook_filters::driver;
use coursebook_filters::transforms::solutions;

/// Move solution call-outs into the solutions appendix.
#[derive(Parser, Debug)]
#[command(name = "relocate-solutions")]
struct Args {
    /// Target output format, passed by the typesetting tool. Unused here.
    format: Option<String>,
}

fn main() {
    let _args = Args::parse();
    if let Err(e) = driver::run(|doc| solutions::relocate_solutions(doc).map_err(Into::into)) {
        eprintln!("relocate-solutions: {}", e);
        std::process::exit(1);
    }
}
