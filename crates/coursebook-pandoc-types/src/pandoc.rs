/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::meta::Meta;

/*
 * A data structure that mimics Pandoc's `data Pandoc` type.
 * One value of this type flows through each filter invocation.
 */

#[derive(Debug, Clone, PartialEq)]
pub struct Pandoc {
    /// The `pandoc-api-version` of the input, echoed verbatim on output.
    pub api_version: Vec<u64>,
    /// Document metadata (frontmatter). Round-tripped, never interpreted,
    /// by the filters in this workspace.
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Default for Pandoc {
    fn default() -> Self {
        Pandoc {
            api_version: vec![1, 23, 1],
            meta: Meta::new(),
            blocks: Vec::new(),
        }
    }
}
