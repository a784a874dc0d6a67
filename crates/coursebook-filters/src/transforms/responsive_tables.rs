/*
 * responsive_tables.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that wraps tables for horizontal scrolling in HTML output.
 */

//! Responsive table wrapping.
//!
//! Wide tables overflow small screens, so for HTML-family output every
//! `Table` is wrapped in a `Div` carrying the `table-responsive` class; the
//! stylesheet turns that class into a horizontal scroll affordance. All
//! other formats pass through unchanged.
//!
//! The walk is bottom-up, so a table nested inside an existing marker Div
//! gets wrapped before the Div itself is offered; the Div hook collapses
//! exactly that double wrap, which keeps the transform idempotent.

use crate::traversals::{FilterReturn, Transform, bottomup_traverse_pandoc};
use coursebook_pandoc_types::attr::attr_has_class;
use coursebook_pandoc_types::block::{Block, Div};
use coursebook_pandoc_types::pandoc::Pandoc;
use coursebook_pandoc_types::table::Table;

/// Class the stylesheet keys on.
pub const MARKER_CLASS: &str = "table-responsive";

/// Formats where a horizontal scroll affordance is meaningful.
pub const RESPONSIVE_FORMATS: &[&str] = &["html", "html4", "html5", "epub", "epub2", "epub3"];

/// Wrap every table when targeting an HTML-family format.
pub fn wrap_tables(doc: Pandoc, format: Option<&str>) -> Pandoc {
    if !format.is_some_and(|f| RESPONSIVE_FORMATS.contains(&f)) {
        return doc;
    }
    let mut transform = Transform::new().with_block(on_block);
    bottomup_traverse_pandoc(doc, &mut transform, &mut ())
}

fn on_block(block: Block, _state: &mut ()) -> FilterReturn<Block> {
    match block {
        Block::Table(table) => FilterReturn::FilterResult(vec![wrap(table)], false),
        Block::Div(mut div) if attr_has_class(&div.attr, MARKER_CLASS) => {
            // A table that was already responsive got re-wrapped by the arm
            // above while this Div's children were processed; undo that.
            if div.content.len() == 1 && is_fresh_wrapper(&div.content[0]) {
                let Some(Block::Div(inner)) = div.content.pop() else {
                    unreachable!();
                };
                div.content = inner.content;
            }
            FilterReturn::Unchanged(Block::Div(div))
        }
        other => FilterReturn::Unchanged(other),
    }
}

fn wrap(table: Table) -> Block {
    Block::Div(Div {
        attr: (String::new(), vec![MARKER_CLASS.to_string()], vec![]),
        content: vec![Block::Table(table)],
    })
}

/// Exactly the shape `wrap` produces, and nothing else.
fn is_fresh_wrapper(block: &Block) -> bool {
    let Block::Div(div) = block else {
        return false;
    };
    div.attr.0.is_empty()
        && div.attr.1 == [MARKER_CLASS]
        && div.attr.2.is_empty()
        && div.content.len() == 1
        && matches!(div.content[0], Block::Table(_))
}
