/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The document transforms behind the filter binaries.
 */

//! The document transforms behind the filter binaries.
//!
//! - [`solutions`] - moves solution call-outs into the solutions appendix
//! - [`responsive_tables`] - wraps tables for horizontal scrolling in
//!   HTML-family output
//! - [`image_formats`] - picks one extension out of dual-extension image
//!   URLs per target format

pub mod image_formats;
pub mod responsive_tables;
pub mod solutions;
