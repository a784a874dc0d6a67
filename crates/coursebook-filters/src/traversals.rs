/*
 * traversals.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Generic rewriting traversals over the Pandoc AST.
 */

//! Shape-preserving walks over a document tree.
//!
//! Two walk orders are provided. The bottom-up walk rewrites every child
//! before offering a node to the transform, so a hook that wraps a node
//! never re-enters content that is already final. The top-down walk offers
//! the node first, threading an explicit accumulator of type `S` in
//! document (left-to-right, depth-first) order: state written at one node
//! is visible at every later sibling and descendant, and never flows
//! backwards.
//!
//! Transforms take ownership of the nodes they are offered and may replace
//! one node with zero or more nodes. Nodes a transform does not match pass
//! through with only their children processed. Opaque nodes are never
//! entered.

use coursebook_pandoc_types::block::{
    Block, BlockQuote, Blocks, BulletList, DefinitionList, Div, Header, LineBlock, OrderedList,
    Paragraph, Plain,
};
use coursebook_pandoc_types::caption::Caption;
use coursebook_pandoc_types::inline::{
    Emph, Image, Inline, Inlines, Link, Note, Quoted, SmallCaps, Span, Strikeout, Strong,
    Subscript, Superscript, Underline,
};
use coursebook_pandoc_types::pandoc::Pandoc;
use coursebook_pandoc_types::table::{Cell, Row, Table, TableBody, TableFoot, TableHead};

/// What a transform hook reports back to the walk.
pub enum FilterReturn<T> {
    /// The hook did not act; the walk keeps the node and handles its children.
    Unchanged(T),
    /// Replacement content, plus whether a top-down walk should descend into
    /// it. Bottom-up walks ignore the flag: children are already final.
    FilterResult(Vec<T>, bool),
}

pub type BlockFn<'a, S> = Box<dyn FnMut(Block, &mut S) -> FilterReturn<Block> + 'a>;
pub type InlineFn<'a, S> = Box<dyn FnMut(Inline, &mut S) -> FilterReturn<Inline> + 'a>;

/// A transform registry: one optional hook per node family.
pub struct Transform<'a, S> {
    pub block: Option<BlockFn<'a, S>>,
    pub inline: Option<InlineFn<'a, S>>,
}

impl<'a, S> Transform<'a, S> {
    pub fn new() -> Transform<'a, S> {
        Transform {
            block: None,
            inline: None,
        }
    }

    pub fn with_block<F>(mut self, f: F) -> Transform<'a, S>
    where
        F: FnMut(Block, &mut S) -> FilterReturn<Block> + 'a,
    {
        self.block = Some(Box::new(f));
        self
    }

    pub fn with_inline<F>(mut self, f: F) -> Transform<'a, S>
    where
        F: FnMut(Inline, &mut S) -> FilterReturn<Inline> + 'a,
    {
        self.inline = Some(Box::new(f));
        self
    }
}

impl<S> Default for Transform<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    TopDown,
    BottomUp,
}

pub fn topdown_traverse_pandoc<S>(
    doc: Pandoc,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Pandoc {
    let Pandoc {
        api_version,
        meta,
        blocks,
    } = doc;
    Pandoc {
        api_version,
        meta,
        blocks: traverse_blocks(blocks, transform, state, Order::TopDown),
    }
}

pub fn bottomup_traverse_pandoc<S>(
    doc: Pandoc,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Pandoc {
    let Pandoc {
        api_version,
        meta,
        blocks,
    } = doc;
    Pandoc {
        api_version,
        meta,
        blocks: traverse_blocks(blocks, transform, state, Order::BottomUp),
    }
}

pub fn topdown_traverse_blocks<S>(
    blocks: Blocks,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Blocks {
    traverse_blocks(blocks, transform, state, Order::TopDown)
}

pub fn bottomup_traverse_blocks<S>(
    blocks: Blocks,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Blocks {
    traverse_blocks(blocks, transform, state, Order::BottomUp)
}

pub fn topdown_traverse_inlines<S>(
    inlines: Inlines,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Inlines {
    traverse_inlines(inlines, transform, state, Order::TopDown)
}

pub fn bottomup_traverse_inlines<S>(
    inlines: Inlines,
    transform: &mut Transform<S>,
    state: &mut S,
) -> Inlines {
    traverse_inlines(inlines, transform, state, Order::BottomUp)
}

fn traverse_blocks<S>(
    blocks: Blocks,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Blocks {
    let mut result = Vec::with_capacity(blocks.len());
    for block in blocks {
        result.extend(traverse_block(block, transform, state, order));
    }
    result
}

fn traverse_block<S>(
    block: Block,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Blocks {
    match order {
        Order::TopDown => match &mut transform.block {
            None => vec![block_structure(block, transform, state, order)],
            Some(f) => match f(block, state) {
                FilterReturn::Unchanged(block) => {
                    vec![block_structure(block, transform, state, order)]
                }
                FilterReturn::FilterResult(content, recurse) => {
                    if recurse {
                        traverse_blocks(content, transform, state, order)
                    } else {
                        content
                    }
                }
            },
        },
        Order::BottomUp => {
            let block = block_structure(block, transform, state, order);
            match &mut transform.block {
                None => vec![block],
                Some(f) => match f(block, state) {
                    FilterReturn::Unchanged(block) => vec![block],
                    FilterReturn::FilterResult(content, _) => content,
                },
            }
        }
    }
}

fn traverse_inlines<S>(
    inlines: Inlines,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Inlines {
    let mut result = Vec::with_capacity(inlines.len());
    for inline in inlines {
        result.extend(traverse_inline(inline, transform, state, order));
    }
    result
}

fn traverse_inline<S>(
    inline: Inline,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Inlines {
    match order {
        Order::TopDown => match &mut transform.inline {
            None => vec![inline_structure(inline, transform, state, order)],
            Some(f) => match f(inline, state) {
                FilterReturn::Unchanged(inline) => {
                    vec![inline_structure(inline, transform, state, order)]
                }
                FilterReturn::FilterResult(content, recurse) => {
                    if recurse {
                        traverse_inlines(content, transform, state, order)
                    } else {
                        content
                    }
                }
            },
        },
        Order::BottomUp => {
            let inline = inline_structure(inline, transform, state, order);
            match &mut transform.inline {
                None => vec![inline],
                Some(f) => match f(inline, state) {
                    FilterReturn::Unchanged(inline) => vec![inline],
                    FilterReturn::FilterResult(content, _) => content,
                },
            }
        }
    }
}

/// Rebuild a block with its children processed, leaving the node itself alone.
fn block_structure<S>(
    block: Block,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Block {
    match block {
        Block::Plain(plain) => Block::Plain(Plain {
            content: traverse_inlines(plain.content, transform, state, order),
        }),
        Block::Paragraph(para) => Block::Paragraph(Paragraph {
            content: traverse_inlines(para.content, transform, state, order),
        }),
        Block::LineBlock(lineblock) => {
            let mut content = Vec::with_capacity(lineblock.content.len());
            for line in lineblock.content {
                content.push(traverse_inlines(line, transform, state, order));
            }
            Block::LineBlock(LineBlock { content })
        }
        Block::CodeBlock(code) => Block::CodeBlock(code),
        Block::RawBlock(raw) => Block::RawBlock(raw),
        Block::BlockQuote(quote) => Block::BlockQuote(BlockQuote {
            content: traverse_blocks(quote.content, transform, state, order),
        }),
        Block::OrderedList(list) => {
            let mut content = Vec::with_capacity(list.content.len());
            for item in list.content {
                content.push(traverse_blocks(item, transform, state, order));
            }
            Block::OrderedList(OrderedList {
                attr: list.attr,
                content,
            })
        }
        Block::BulletList(list) => {
            let mut content = Vec::with_capacity(list.content.len());
            for item in list.content {
                content.push(traverse_blocks(item, transform, state, order));
            }
            Block::BulletList(BulletList { content })
        }
        Block::DefinitionList(deflist) => {
            let mut content = Vec::with_capacity(deflist.content.len());
            for (term, definitions) in deflist.content {
                let term = traverse_inlines(term, transform, state, order);
                let mut rewritten = Vec::with_capacity(definitions.len());
                for definition in definitions {
                    rewritten.push(traverse_blocks(definition, transform, state, order));
                }
                content.push((term, rewritten));
            }
            Block::DefinitionList(DefinitionList { content })
        }
        Block::Header(header) => Block::Header(Header {
            level: header.level,
            attr: header.attr,
            content: traverse_inlines(header.content, transform, state, order),
        }),
        Block::HorizontalRule => Block::HorizontalRule,
        Block::Table(table) => Block::Table(table_structure(table, transform, state, order)),
        Block::Div(div) => Block::Div(Div {
            attr: div.attr,
            content: traverse_blocks(div.content, transform, state, order),
        }),
        Block::Opaque(opaque) => Block::Opaque(opaque),
    }
}

/// Rebuild an inline with its children processed, leaving the node itself alone.
fn inline_structure<S>(
    inline: Inline,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Inline {
    match inline {
        Inline::Str(s) => Inline::Str(s),
        Inline::Emph(e) => Inline::Emph(Emph {
            content: traverse_inlines(e.content, transform, state, order),
        }),
        Inline::Underline(u) => Inline::Underline(Underline {
            content: traverse_inlines(u.content, transform, state, order),
        }),
        Inline::Strong(s) => Inline::Strong(Strong {
            content: traverse_inlines(s.content, transform, state, order),
        }),
        Inline::Strikeout(s) => Inline::Strikeout(Strikeout {
            content: traverse_inlines(s.content, transform, state, order),
        }),
        Inline::Superscript(s) => Inline::Superscript(Superscript {
            content: traverse_inlines(s.content, transform, state, order),
        }),
        Inline::Subscript(s) => Inline::Subscript(Subscript {
            content: traverse_inlines(s.content, transform, state, order),
        }),
        Inline::SmallCaps(s) => Inline::SmallCaps(SmallCaps {
            content: traverse_inlines(s.content, transform, state, order),
        }),
        Inline::Quoted(q) => Inline::Quoted(Quoted {
            quote_type: q.quote_type,
            content: traverse_inlines(q.content, transform, state, order),
        }),
        Inline::Code(c) => Inline::Code(c),
        Inline::Space => Inline::Space,
        Inline::SoftBreak => Inline::SoftBreak,
        Inline::LineBreak => Inline::LineBreak,
        Inline::Math(m) => Inline::Math(m),
        Inline::RawInline(r) => Inline::RawInline(r),
        Inline::Link(link) => Inline::Link(Link {
            attr: link.attr,
            content: traverse_inlines(link.content, transform, state, order),
            target: link.target,
        }),
        Inline::Image(image) => Inline::Image(Image {
            attr: image.attr,
            content: traverse_inlines(image.content, transform, state, order),
            target: image.target,
        }),
        Inline::Note(note) => Inline::Note(Note {
            content: traverse_blocks(note.content, transform, state, order),
        }),
        Inline::Span(span) => Inline::Span(Span {
            attr: span.attr,
            content: traverse_inlines(span.content, transform, state, order),
        }),
        Inline::Opaque(opaque) => Inline::Opaque(opaque),
    }
}

fn table_structure<S>(
    table: Table,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Table {
    let Table {
        attr,
        caption,
        colspec,
        head,
        bodies,
        foot,
    } = table;
    let caption = Caption {
        short: caption
            .short
            .map(|short| traverse_inlines(short, transform, state, order)),
        long: traverse_blocks(caption.long, transform, state, order),
    };
    let head = TableHead {
        attr: head.attr,
        rows: rows_structure(head.rows, transform, state, order),
    };
    let mut new_bodies = Vec::with_capacity(bodies.len());
    for body in bodies {
        new_bodies.push(TableBody {
            attr: body.attr,
            rowhead_columns: body.rowhead_columns,
            head: rows_structure(body.head, transform, state, order),
            body: rows_structure(body.body, transform, state, order),
        });
    }
    let foot = TableFoot {
        attr: foot.attr,
        rows: rows_structure(foot.rows, transform, state, order),
    };
    Table {
        attr,
        caption,
        colspec,
        head,
        bodies: new_bodies,
        foot,
    }
}

fn rows_structure<S>(
    rows: Vec<Row>,
    transform: &mut Transform<S>,
    state: &mut S,
    order: Order,
) -> Vec<Row> {
    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in row.cells {
            let Cell {
                attr,
                alignment,
                row_span,
                col_span,
                content,
            } = cell;
            cells.push(Cell {
                attr,
                alignment,
                row_span,
                col_span,
                content: traverse_blocks(content, transform, state, order),
            });
        }
        result.push(Row {
            attr: row.attr,
            cells,
        });
    }
    result
}
