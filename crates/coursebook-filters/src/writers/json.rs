/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Encoder for Pandoc's JSON AST interchange format.
 */

use coursebook_pandoc_types::attr::Attr;
use coursebook_pandoc_types::block::{Block, Blocks};
use coursebook_pandoc_types::caption::Caption;
use coursebook_pandoc_types::inline::{Inline, Inlines, MathType, QuoteType};
use coursebook_pandoc_types::list::{ListAttributes, ListNumberDelim, ListNumberStyle};
use coursebook_pandoc_types::meta::{Meta, MetaValue};
use coursebook_pandoc_types::pandoc::Pandoc;
use coursebook_pandoc_types::table::{
    Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead,
};
use serde_json::{Value, json};

fn write_attr(attr: &Attr) -> Value {
    json!([
        attr.0, // id
        attr.1, // classes
        attr.2
            .iter()
            .map(|(k, v)| json!([k, v]))
            .collect::<Vec<_>>()  // key-value pairs
    ])
}

fn write_opaque(tag: &str, content: &Option<Value>) -> Value {
    match content {
        Some(c) => json!({"t": tag, "c": c}),
        None => json!({"t": tag}),
    }
}

fn write_inline(inline: &Inline) -> Value {
    match inline {
        Inline::Str(s) => json!({"t": "Str", "c": s.text}),
        Inline::Space => json!({"t": "Space"}),
        Inline::SoftBreak => json!({"t": "SoftBreak"}),
        Inline::LineBreak => json!({"t": "LineBreak"}),
        Inline::Emph(e) => json!({"t": "Emph", "c": write_inlines(&e.content)}),
        Inline::Underline(u) => json!({"t": "Underline", "c": write_inlines(&u.content)}),
        Inline::Strong(s) => json!({"t": "Strong", "c": write_inlines(&s.content)}),
        Inline::Strikeout(s) => json!({"t": "Strikeout", "c": write_inlines(&s.content)}),
        Inline::Superscript(s) => json!({"t": "Superscript", "c": write_inlines(&s.content)}),
        Inline::Subscript(s) => json!({"t": "Subscript", "c": write_inlines(&s.content)}),
        Inline::SmallCaps(s) => json!({"t": "SmallCaps", "c": write_inlines(&s.content)}),
        Inline::Quoted(q) => {
            let quote_type = match q.quote_type {
                QuoteType::SingleQuote => json!({"t": "SingleQuote"}),
                QuoteType::DoubleQuote => json!({"t": "DoubleQuote"}),
            };
            json!({"t": "Quoted", "c": [quote_type, write_inlines(&q.content)]})
        }
        Inline::Code(c) => json!({"t": "Code", "c": [write_attr(&c.attr), c.text]}),
        Inline::Math(m) => {
            let math_type = match m.math_type {
                MathType::DisplayMath => json!({"t": "DisplayMath"}),
                MathType::InlineMath => json!({"t": "InlineMath"}),
            };
            json!({"t": "Math", "c": [math_type, m.text]})
        }
        Inline::RawInline(raw) => json!({"t": "RawInline", "c": [raw.format, raw.text]}),
        Inline::Link(link) => json!({
            "t": "Link",
            "c": [write_attr(&link.attr), write_inlines(&link.content), [link.target.0, link.target.1]]
        }),
        Inline::Image(image) => json!({
            "t": "Image",
            "c": [write_attr(&image.attr), write_inlines(&image.content), [image.target.0, image.target.1]]
        }),
        Inline::Note(note) => json!({"t": "Note", "c": write_blocks(&note.content)}),
        Inline::Span(span) => json!({
            "t": "Span",
            "c": [write_attr(&span.attr), write_inlines(&span.content)]
        }),
        Inline::Opaque(opaque) => write_opaque(&opaque.tag, &opaque.content),
    }
}

fn write_inlines(inlines: &Inlines) -> Value {
    json!(inlines.iter().map(write_inline).collect::<Vec<_>>())
}

fn write_list_attributes(attr: &ListAttributes) -> Value {
    let number_style = match attr.1 {
        ListNumberStyle::Default => json!({"t": "Default"}),
        ListNumberStyle::Example => json!({"t": "Example"}),
        ListNumberStyle::Decimal => json!({"t": "Decimal"}),
        ListNumberStyle::LowerRoman => json!({"t": "LowerRoman"}),
        ListNumberStyle::UpperRoman => json!({"t": "UpperRoman"}),
        ListNumberStyle::LowerAlpha => json!({"t": "LowerAlpha"}),
        ListNumberStyle::UpperAlpha => json!({"t": "UpperAlpha"}),
    };
    let number_delim = match attr.2 {
        ListNumberDelim::Default => json!({"t": "Default"}),
        ListNumberDelim::Period => json!({"t": "Period"}),
        ListNumberDelim::OneParen => json!({"t": "OneParen"}),
        ListNumberDelim::TwoParens => json!({"t": "TwoParens"}),
    };
    json!([attr.0, number_style, number_delim])
}

fn write_blockss(blockss: &[Blocks]) -> Value {
    json!(
        blockss
            .iter()
            .map(|blocks| write_blocks(blocks))
            .collect::<Vec<_>>()
    )
}

fn write_caption(caption: &Caption) -> Value {
    json!([
        caption.short.as_ref().map(write_inlines),
        write_blocks(&caption.long),
    ])
}

fn write_alignment(alignment: &Alignment) -> Value {
    match alignment {
        Alignment::Left => json!({"t": "AlignLeft"}),
        Alignment::Center => json!({"t": "AlignCenter"}),
        Alignment::Right => json!({"t": "AlignRight"}),
        Alignment::Default => json!({"t": "AlignDefault"}),
    }
}

fn write_colwidth(colwidth: &ColWidth) -> Value {
    match colwidth {
        ColWidth::Default => json!({"t": "ColWidthDefault"}),
        ColWidth::Percentage(p) => json!({"t": "ColWidth", "c": p}),
    }
}

fn write_colspec(colspec: &ColSpec) -> Value {
    json!([write_alignment(&colspec.0), write_colwidth(&colspec.1)])
}

fn write_cell(cell: &Cell) -> Value {
    json!([
        write_attr(&cell.attr),
        write_alignment(&cell.alignment),
        cell.row_span,
        cell.col_span,
        write_blocks(&cell.content)
    ])
}

fn write_row(row: &Row) -> Value {
    json!([
        write_attr(&row.attr),
        row.cells.iter().map(write_cell).collect::<Vec<_>>()
    ])
}

fn write_table_head(head: &TableHead) -> Value {
    json!([
        write_attr(&head.attr),
        head.rows.iter().map(write_row).collect::<Vec<_>>()
    ])
}

fn write_table_body(body: &TableBody) -> Value {
    json!([
        write_attr(&body.attr),
        body.rowhead_columns,
        body.head.iter().map(write_row).collect::<Vec<_>>(),
        body.body.iter().map(write_row).collect::<Vec<_>>()
    ])
}

fn write_table_foot(foot: &TableFoot) -> Value {
    json!([
        write_attr(&foot.attr),
        foot.rows.iter().map(write_row).collect::<Vec<_>>()
    ])
}

fn write_table(table: &Table) -> Value {
    json!([
        write_attr(&table.attr),
        write_caption(&table.caption),
        table.colspec.iter().map(write_colspec).collect::<Vec<_>>(),
        write_table_head(&table.head),
        table.bodies.iter().map(write_table_body).collect::<Vec<_>>(),
        write_table_foot(&table.foot)
    ])
}

fn write_block(block: &Block) -> Value {
    match block {
        Block::Plain(plain) => json!({"t": "Plain", "c": write_inlines(&plain.content)}),
        Block::Paragraph(para) => json!({"t": "Para", "c": write_inlines(&para.content)}),
        Block::LineBlock(lineblock) => json!({
            "t": "LineBlock",
            "c": lineblock.content.iter().map(write_inlines).collect::<Vec<_>>()
        }),
        Block::CodeBlock(codeblock) => json!({
            "t": "CodeBlock",
            "c": [write_attr(&codeblock.attr), codeblock.text]
        }),
        Block::RawBlock(raw) => json!({"t": "RawBlock", "c": [raw.format, raw.text]}),
        Block::BlockQuote(quote) => json!({"t": "BlockQuote", "c": write_blocks(&quote.content)}),
        Block::OrderedList(list) => json!({
            "t": "OrderedList",
            "c": [write_list_attributes(&list.attr), write_blockss(&list.content)]
        }),
        Block::BulletList(list) => json!({"t": "BulletList", "c": write_blockss(&list.content)}),
        Block::DefinitionList(deflist) => json!({
            "t": "DefinitionList",
            "c": deflist
                .content
                .iter()
                .map(|(term, definitions)| json!([write_inlines(term), write_blockss(definitions)]))
                .collect::<Vec<_>>()
        }),
        Block::Header(header) => json!({
            "t": "Header",
            "c": [header.level, write_attr(&header.attr), write_inlines(&header.content)]
        }),
        Block::HorizontalRule => json!({"t": "HorizontalRule"}),
        Block::Table(table) => json!({"t": "Table", "c": write_table(table)}),
        Block::Div(div) => json!({
            "t": "Div",
            "c": [write_attr(&div.attr), write_blocks(&div.content)]
        }),
        Block::Opaque(opaque) => write_opaque(&opaque.tag, &opaque.content),
    }
}

fn write_blocks(blocks: &[Block]) -> Value {
    json!(blocks.iter().map(write_block).collect::<Vec<_>>())
}

fn write_meta_value(value: &MetaValue) -> Value {
    match value {
        MetaValue::MetaString(s) => json!({"t": "MetaString", "c": s}),
        MetaValue::MetaBool(b) => json!({"t": "MetaBool", "c": b}),
        MetaValue::MetaInlines(content) => json!({"t": "MetaInlines", "c": write_inlines(content)}),
        MetaValue::MetaBlocks(content) => json!({"t": "MetaBlocks", "c": write_blocks(content)}),
        MetaValue::MetaList(items) => json!({
            "t": "MetaList",
            "c": items.iter().map(write_meta_value).collect::<Vec<_>>()
        }),
        MetaValue::MetaMap(map) => json!({"t": "MetaMap", "c": write_meta(map)}),
    }
}

fn write_meta(meta: &Meta) -> Value {
    let map: serde_json::Map<String, Value> = meta
        .iter()
        .map(|(key, value)| (key.clone(), write_meta_value(value)))
        .collect();
    Value::Object(map)
}

pub fn write_pandoc(pandoc: &Pandoc) -> Value {
    json!({
        "pandoc-api-version": pandoc.api_version,
        "meta": write_meta(&pandoc.meta),
        "blocks": write_blocks(&pandoc.blocks),
    })
}

pub fn write<W: std::io::Write>(pandoc: &Pandoc, writer: &mut W) -> std::io::Result<()> {
    let json = write_pandoc(pandoc);
    serde_json::to_writer(writer, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebook_pandoc_types::attr::empty_attr;
    use coursebook_pandoc_types::block::{Header, OpaqueBlock, Paragraph};
    use coursebook_pandoc_types::inline::make_str_inline;
    use serde_json::json;

    #[test]
    fn test_write_minimal_document() {
        let doc = Pandoc {
            api_version: vec![1, 23, 1],
            meta: Meta::new(),
            blocks: vec![
                Block::Header(Header {
                    level: 2,
                    attr: empty_attr(),
                    content: vec![make_str_inline("Title")],
                }),
                Block::Paragraph(Paragraph {
                    content: vec![make_str_inline("Body")],
                }),
            ],
        };
        assert_eq!(
            write_pandoc(&doc),
            json!({
                "pandoc-api-version": [1, 23, 1],
                "meta": {},
                "blocks": [
                    {"t": "Header", "c": [2, ["", [], []], [{"t": "Str", "c": "Title"}]]},
                    {"t": "Para", "c": [{"t": "Str", "c": "Body"}]}
                ]
            })
        );
    }

    #[test]
    fn test_write_opaque_without_payload() {
        let doc = Pandoc {
            blocks: vec![Block::Opaque(OpaqueBlock {
                tag: "Null".to_string(),
                content: None,
            })],
            ..Default::default()
        };
        assert_eq!(write_pandoc(&doc)["blocks"], json!([{"t": "Null"}]));
    }

    #[test]
    fn test_write_opaque_payload_verbatim() {
        let payload = json!([[["x", [], []], [{"t": "Str", "c": "unknown"}]]]);
        let doc = Pandoc {
            blocks: vec![Block::Opaque(OpaqueBlock {
                tag: "Custom".to_string(),
                content: Some(payload.clone()),
            })],
            ..Default::default()
        };
        assert_eq!(
            write_pandoc(&doc)["blocks"],
            json!([{"t": "Custom", "c": payload}])
        );
    }
}
