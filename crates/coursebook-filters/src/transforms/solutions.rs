/*
 * solutions.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that moves solution call-outs into the solutions appendix.
 */

//! Solution relocation.
//!
//! Exercises in the course pages carry their solutions inline, as Divs with
//! the `solution` class. For the rendered book the solutions must not
//! interrupt the text: this transform removes each call-out from the main
//! flow and appends it, paired with the nearest preceding heading, to the
//! single Div carrying the `solutions` class (the appendix container).
//!
//! One top-down pass collects and splices in document order, so the
//! appendix lists solutions exactly as they appeared, each introduced by a
//! copy of the heading that was current when the call-out was seen.

use crate::traversals::{FilterReturn, Transform, topdown_traverse_pandoc};
use coursebook_pandoc_types::attr::attr_has_class;
use coursebook_pandoc_types::block::{Block, Blocks, Div, Header};
use coursebook_pandoc_types::pandoc::Pandoc;
use thiserror::Error;

/// Class marking a call-out to relocate.
pub const SOLUTION_CLASS: &str = "solution";
/// Class marking the appendix container the call-outs land in.
pub const CONTAINER_CLASS: &str = "solutions";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionsError {
    #[error("solution call-out appears before any heading")]
    SolutionBeforeHeader,
    #[error("document has more than one solutions container")]
    DuplicateContainer,
    #[error("{0} solution call-out(s) found no solutions container to land in")]
    UnplacedSolutions(usize),
}

#[derive(Default)]
struct SolutionState {
    /// Rebound at every heading, in document order.
    last_header: Option<Header>,
    /// Collected call-outs, in document order. Only grows.
    solutions: Vec<(Header, Blocks)>,
    /// How many solutions had been collected when the container was spliced.
    spliced: Option<usize>,
    /// First policy violation seen; the traversal still completes.
    error: Option<SolutionsError>,
}

/// Move every solution call-out into the solutions container.
pub fn relocate_solutions(doc: Pandoc) -> Result<Pandoc, SolutionsError> {
    let mut state = SolutionState::default();
    let mut transform = Transform::new().with_block(on_block);
    let doc = topdown_traverse_pandoc(doc, &mut transform, &mut state);

    if let Some(error) = state.error {
        return Err(error);
    }
    let placed = state.spliced.unwrap_or(0);
    if state.solutions.len() > placed {
        return Err(SolutionsError::UnplacedSolutions(
            state.solutions.len() - placed,
        ));
    }
    Ok(doc)
}

fn on_block(block: Block, state: &mut SolutionState) -> FilterReturn<Block> {
    match block {
        Block::Header(header) => {
            state.last_header = Some(header.clone());
            FilterReturn::Unchanged(Block::Header(header))
        }
        Block::Div(div) if attr_has_class(&div.attr, SOLUTION_CLASS) => {
            match &state.last_header {
                Some(header) => state.solutions.push((header.clone(), div.content)),
                None => {
                    state
                        .error
                        .get_or_insert(SolutionsError::SolutionBeforeHeader);
                }
            }
            // the call-out disappears from the main flow
            FilterReturn::FilterResult(vec![], false)
        }
        Block::Div(div) if attr_has_class(&div.attr, CONTAINER_CLASS) => {
            if state.spliced.is_some() {
                state
                    .error
                    .get_or_insert(SolutionsError::DuplicateContainer);
                return FilterReturn::FilterResult(vec![Block::Div(div)], false);
            }
            let mut content = div.content;
            for (header, blocks) in &state.solutions {
                content.push(Block::Header(header.clone()));
                content.extend(blocks.iter().cloned());
            }
            state.spliced = Some(state.solutions.len());
            FilterReturn::FilterResult(
                vec![Block::Div(Div {
                    attr: div.attr,
                    content,
                })],
                false,
            )
        }
        other => FilterReturn::Unchanged(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebook_pandoc_types::attr::empty_attr;
    use coursebook_pandoc_types::block::Paragraph;
    use coursebook_pandoc_types::inline::make_str_inline;

    fn header(level: usize, text: &str) -> Header {
        Header {
            level,
            attr: empty_attr(),
            content: vec![make_str_inline(text)],
        }
    }

    fn para(text: &str) -> Block {
        Block::Paragraph(Paragraph {
            content: vec![make_str_inline(text)],
        })
    }

    fn classed_div(class: &str, content: Blocks) -> Block {
        Block::Div(Div {
            attr: (String::new(), vec![class.to_string()], vec![]),
            content,
        })
    }

    fn doc(blocks: Blocks) -> Pandoc {
        Pandoc {
            blocks,
            ..Default::default()
        }
    }

    #[test]
    fn test_relocates_single_solution() {
        let input = doc(vec![
            Block::Header(header(2, "Ex 1")),
            classed_div(SOLUTION_CLASS, vec![para("answer")]),
            para("Body"),
            classed_div(CONTAINER_CLASS, vec![]),
        ]);
        let result = relocate_solutions(input).unwrap();

        assert_eq!(result.blocks.len(), 3);
        assert_eq!(result.blocks[0], Block::Header(header(2, "Ex 1")));
        assert_eq!(result.blocks[1], para("Body"));
        assert_eq!(
            result.blocks[2],
            classed_div(
                CONTAINER_CLASS,
                vec![Block::Header(header(2, "Ex 1")), para("answer")]
            )
        );
    }

    #[test]
    fn test_preserves_document_order() {
        let input = doc(vec![
            Block::Header(header(2, "Ex 1")),
            classed_div(SOLUTION_CLASS, vec![para("first")]),
            Block::Header(header(2, "Ex 2")),
            classed_div(SOLUTION_CLASS, vec![para("second")]),
            classed_div(SOLUTION_CLASS, vec![para("also second")]),
            classed_div(CONTAINER_CLASS, vec![para("intro")]),
        ]);
        let result = relocate_solutions(input).unwrap();

        assert_eq!(
            result.blocks.last().unwrap(),
            &classed_div(
                CONTAINER_CLASS,
                vec![
                    para("intro"),
                    Block::Header(header(2, "Ex 1")),
                    para("first"),
                    Block::Header(header(2, "Ex 2")),
                    para("second"),
                    Block::Header(header(2, "Ex 2")),
                    para("also second"),
                ]
            )
        );
    }

    #[test]
    fn test_pairs_with_nearest_preceding_header() {
        // A call-out nested in a Div still pairs with the heading that was
        // current at its position in document order.
        let input = doc(vec![
            Block::Header(header(3, "Outer")),
            Block::Div(Div {
                attr: empty_attr(),
                content: vec![classed_div(SOLUTION_CLASS, vec![para("nested")])],
            }),
            classed_div(CONTAINER_CLASS, vec![]),
        ]);
        let result = relocate_solutions(input).unwrap();

        assert_eq!(
            result.blocks.last().unwrap(),
            &classed_div(
                CONTAINER_CLASS,
                vec![Block::Header(header(3, "Outer")), para("nested")]
            )
        );
    }

    #[test]
    fn test_solution_before_header_fails() {
        let input = doc(vec![
            classed_div(SOLUTION_CLASS, vec![para("orphan")]),
            Block::Header(header(2, "Too late")),
            classed_div(CONTAINER_CLASS, vec![]),
        ]);
        assert_eq!(
            relocate_solutions(input),
            Err(SolutionsError::SolutionBeforeHeader)
        );
    }

    #[test]
    fn test_duplicate_container_fails() {
        let input = doc(vec![
            Block::Header(header(2, "Ex 1")),
            classed_div(CONTAINER_CLASS, vec![]),
            classed_div(CONTAINER_CLASS, vec![]),
        ]);
        assert_eq!(
            relocate_solutions(input),
            Err(SolutionsError::DuplicateContainer)
        );
    }

    #[test]
    fn test_missing_container_fails_when_solutions_pending() {
        let input = doc(vec![
            Block::Header(header(2, "Ex 1")),
            classed_div(SOLUTION_CLASS, vec![para("answer")]),
        ]);
        assert_eq!(
            relocate_solutions(input),
            Err(SolutionsError::UnplacedSolutions(1))
        );
    }

    #[test]
    fn test_container_before_late_solution_fails() {
        let input = doc(vec![
            Block::Header(header(2, "Ex 1")),
            classed_div(CONTAINER_CLASS, vec![]),
            classed_div(SOLUTION_CLASS, vec![para("too late")]),
        ]);
        assert_eq!(
            relocate_solutions(input),
            Err(SolutionsError::UnplacedSolutions(1))
        );
    }

    #[test]
    fn test_no_solutions_no_container_is_identity() {
        let input = doc(vec![Block::Header(header(1, "Only text")), para("Body")]);
        let result = relocate_solutions(input.clone()).unwrap();
        assert_eq!(result, input);
    }
}
