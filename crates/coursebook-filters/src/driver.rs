/*
 * driver.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Shared stdin-to-stdout plumbing for the filter binaries.
 */

use crate::readers;
use crate::transforms::solutions::SolutionsError;
use crate::writers;
use coursebook_pandoc_types::pandoc::Pandoc;
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to decode document: {0}")]
    Read(#[from] readers::json::JsonReadError),
    #[error(transparent)]
    Solutions(#[from] SolutionsError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run one filter invocation over arbitrary streams.
///
/// Reads a whole serialized document, applies the transform, writes the
/// whole result. There is no partial output: any error leaves the output
/// stream untouched.
pub fn run_with<R, W, F>(input: &mut R, output: &mut W, apply: F) -> Result<(), FilterError>
where
    R: Read,
    W: Write,
    F: FnOnce(Pandoc) -> Result<Pandoc, FilterError>,
{
    let doc = readers::json::read(input)?;
    let doc = apply(doc)?;
    writers::json::write(&doc, output)?;
    output.flush()?;
    Ok(())
}

/// Run one filter invocation over stdin/stdout.
pub fn run<F>(apply: F) -> Result<(), FilterError>
where
    F: FnOnce(Pandoc) -> Result<Pandoc, FilterError>,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut stdin.lock(), &mut stdout.lock(), apply)
}
