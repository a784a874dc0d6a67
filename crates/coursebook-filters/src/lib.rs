/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc JSON filters for the coursebook build.
 *
 * Each filter binary reads one serialized document from standard input,
 * rewrites it through the generic traversal engine in `traversals`, and
 * writes the result to standard output. The typesetting tool invokes the
 * binaries once per document, passing the target output format as the
 * single command-line argument.
 */

pub mod driver;
pub mod readers;
pub mod transforms;
pub mod traversals;
pub mod writers;
