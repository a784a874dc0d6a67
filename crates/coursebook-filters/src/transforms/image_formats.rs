/*
 * image_formats.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that picks one extension out of dual-extension image URLs.
 */

//! Image extension selection.
//!
//! Diagrams in the course are exported twice, once in a print format and
//! once in a screen format, and referenced with a dual extension:
//! `diagrams/fig1.pdf+svg`. This transform rewrites such URLs to the single
//! extension matching the target format. URLs without the dual extension
//! pass through verbatim, which also makes the rewrite idempotent.
//!
//! No check is made that the selected file exists; that is the build's
//! problem, not the filter's.

use crate::traversals::{FilterReturn, Transform, bottomup_traverse_pandoc};
use coursebook_pandoc_types::inline::Inline;
use coursebook_pandoc_types::pandoc::Pandoc;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<stem>.<print-ext>+<screen-ext>`
static DUAL_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<stem>.+)\.(?P<print>[A-Za-z0-9]+)\+(?P<screen>[A-Za-z0-9]+)$")
        .expect("dual extension pattern must compile")
});

/// Formats rendered through a print toolchain; these take the first extension.
pub const PRINT_FORMATS: &[&str] = &["latex", "beamer", "context", "pdf"];

/// Screen formats; these take the second extension.
pub const SCREEN_FORMATS: &[&str] = &[
    "html", "html4", "html5", "epub", "epub2", "epub3", "revealjs", "slidy",
];

#[derive(Clone, Copy)]
enum Chosen {
    Print,
    Screen,
}

/// Rewrite dual-extension image URLs for the target format.
///
/// Formats outside the print and screen families leave the document
/// untouched.
pub fn select_image_urls(doc: Pandoc, format: Option<&str>) -> Pandoc {
    let chosen = match format {
        Some(f) if PRINT_FORMATS.contains(&f) => Chosen::Print,
        Some(f) if SCREEN_FORMATS.contains(&f) => Chosen::Screen,
        _ => return doc,
    };

    let mut transform = Transform::new().with_inline(move |inline, _: &mut ()| match inline {
        Inline::Image(mut image) => {
            let rewritten = DUAL_EXTENSION.captures(&image.target.0).map(|caps| {
                let ext = match chosen {
                    Chosen::Print => &caps["print"],
                    Chosen::Screen => &caps["screen"],
                };
                format!("{}.{}", &caps["stem"], ext)
            });
            match rewritten {
                Some(url) => {
                    image.target.0 = url;
                    FilterReturn::FilterResult(vec![Inline::Image(image)], false)
                }
                None => FilterReturn::Unchanged(Inline::Image(image)),
            }
        }
        other => FilterReturn::Unchanged(other),
    });
    bottomup_traverse_pandoc(doc, &mut transform, &mut ())
}
