/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc AST type definitions for the coursebook filters.
 *
 * This crate provides pure data type definitions for the Pandoc AST,
 * mirroring the types from pandoc-types in Haskell. It has minimal
 * dependencies (serde, hashlink) and carries no behavior beyond
 * construction and small predicates; the filters pattern-match on it.
 */

pub mod attr;
pub mod block;
pub mod caption;
pub mod inline;
pub mod list;
pub mod meta;
pub mod pandoc;
pub mod table;

// Re-export commonly used types at the crate root
pub use attr::{Attr, attr_has_class, empty_attr, is_empty_attr};
pub use block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, DefinitionList, Div, Header, LineBlock,
    OpaqueBlock, OrderedList, Paragraph, Plain, RawBlock,
};
pub use caption::Caption;
pub use inline::{
    Code, Emph, Image, Inline, Inlines, Link, Math, MathType, Note, OpaqueInline, QuoteType,
    Quoted, RawInline, SmallCaps, Span, Str, Strikeout, Strong, Subscript, Superscript, Target,
    Underline, make_str_inline,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use meta::{Meta, MetaValue};
pub use pandoc::Pandoc;
pub use table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};
