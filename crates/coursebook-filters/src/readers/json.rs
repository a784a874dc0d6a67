/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Decoder for Pandoc's JSON AST interchange format.
 */

//! Reads a serialized document from the typesetting tool.
//!
//! Variants the filters model are decoded strictly; any other node kind is
//! kept as an `Opaque` node holding its raw payload, so the document
//! re-serializes equivalently even when the filters do not understand it.

use coursebook_pandoc_types::attr::Attr;
use coursebook_pandoc_types::block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, DefinitionList, Div, Header, LineBlock,
    OpaqueBlock, OrderedList, Paragraph, Plain, RawBlock,
};
use coursebook_pandoc_types::caption::Caption;
use coursebook_pandoc_types::inline::{
    Code, Emph, Image, Inline, Inlines, Link, Math, MathType, Note, OpaqueInline, QuoteType,
    Quoted, RawInline, SmallCaps, Span, Str, Strikeout, Strong, Subscript, Superscript, Target,
    Underline,
};
use coursebook_pandoc_types::list::{ListAttributes, ListNumberDelim, ListNumberStyle};
use coursebook_pandoc_types::meta::{Meta, MetaValue};
use coursebook_pandoc_types::pandoc::Pandoc;
use coursebook_pandoc_types::table::{
    Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead,
};
use serde_json::Value;

#[derive(Debug)]
pub enum JsonReadError {
    InvalidJson(serde_json::Error),
    MissingField(String),
    InvalidType(String),
    UnsupportedApiVersion(String),
}

impl std::fmt::Display for JsonReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonReadError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
            JsonReadError::MissingField(field) => write!(f, "Missing required field: {}", field),
            JsonReadError::InvalidType(msg) => write!(f, "Invalid type: {}", msg),
            JsonReadError::UnsupportedApiVersion(version) => {
                write!(f, "Unsupported pandoc-api-version: {}", version)
            }
        }
    }
}

impl std::error::Error for JsonReadError {}

type Result<T> = std::result::Result<T, JsonReadError>;

/// Read a document from the typesetting tool's JSON encoding.
pub fn read<R: std::io::Read>(reader: &mut R) -> Result<Pandoc> {
    let value: Value = serde_json::from_reader(reader).map_err(JsonReadError::InvalidJson)?;
    read_pandoc(&value)
}

fn read_pandoc(value: &Value) -> Result<Pandoc> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType("Expected object for Pandoc".to_string()))?;

    let api_version = read_api_version(
        obj.get("pandoc-api-version")
            .ok_or_else(|| JsonReadError::MissingField("pandoc-api-version".to_string()))?,
    )?;

    let meta = read_meta(
        obj.get("meta")
            .ok_or_else(|| JsonReadError::MissingField("meta".to_string()))?,
    )?;

    let blocks = read_blocks(
        obj.get("blocks")
            .ok_or_else(|| JsonReadError::MissingField("blocks".to_string()))?,
    )?;

    Ok(Pandoc {
        api_version,
        meta,
        blocks,
    })
}

fn read_api_version(value: &Value) -> Result<Vec<u64>> {
    let arr = value.as_array().ok_or_else(|| {
        JsonReadError::InvalidType("pandoc-api-version must be an array".to_string())
    })?;
    let version = arr
        .iter()
        .map(|v| {
            v.as_u64().ok_or_else(|| {
                JsonReadError::InvalidType("pandoc-api-version entries must be integers".to_string())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // The 1.23 encoding is what we know how to round-trip.
    if version.len() < 2 || version[0] != 1 || version[1] != 23 {
        return Err(JsonReadError::UnsupportedApiVersion(
            version
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("."),
        ));
    }
    Ok(version)
}

fn content<'a>(obj: &'a serde_json::Map<String, Value>, tag: &str) -> Result<&'a Value> {
    obj.get("c")
        .ok_or_else(|| JsonReadError::MissingField(format!("c (in {})", tag)))
}

fn content_array<'a>(value: &'a Value, len: usize, what: &str) -> Result<&'a [Value]> {
    let arr = value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType(format!("Expected array for {}", what)))?;
    if arr.len() != len {
        return Err(JsonReadError::InvalidType(format!(
            "{} array must have {} elements",
            what, len
        )));
    }
    Ok(arr)
}

fn as_string(value: &Value, what: &str) -> Result<String> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be a string", what)))
}

fn as_usize(value: &Value, what: &str) -> Result<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be an integer", what)))
}

fn tag_of<'a>(value: &'a Value, what: &str) -> Result<(&'a serde_json::Map<String, Value>, &'a str)>
{
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType(format!("Expected object for {}", what)))?;
    let t = obj
        .get("t")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonReadError::MissingField(format!("t (in {})", what)))?;
    Ok((obj, t))
}

fn read_attr(value: &Value) -> Result<Attr> {
    let arr = content_array(value, 3, "Attr")?;
    let id = as_string(&arr[0], "Attr id")?;

    let classes = arr[1]
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Attr classes must be an array".to_string()))?
        .iter()
        .map(|v| as_string(v, "Attr class"))
        .collect::<Result<Vec<_>>>()?;

    let kvs = arr[2]
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Attr key-values must be an array".to_string()))?
        .iter()
        .map(|v| {
            let pair = content_array(v, 2, "Attr key-value pair")?;
            Ok((
                as_string(&pair[0], "Attr key")?,
                as_string(&pair[1], "Attr value")?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((id, classes, kvs))
}

fn read_target(value: &Value) -> Result<Target> {
    let arr = content_array(value, 2, "Target")?;
    Ok((
        as_string(&arr[0], "Target url")?,
        as_string(&arr[1], "Target title")?,
    ))
}

fn read_quote_type(value: &Value) -> Result<QuoteType> {
    let (_, t) = tag_of(value, "QuoteType")?;
    match t {
        "SingleQuote" => Ok(QuoteType::SingleQuote),
        "DoubleQuote" => Ok(QuoteType::DoubleQuote),
        _ => Err(JsonReadError::InvalidType(format!("QuoteType: {}", t))),
    }
}

fn read_math_type(value: &Value) -> Result<MathType> {
    let (_, t) = tag_of(value, "MathType")?;
    match t {
        "DisplayMath" => Ok(MathType::DisplayMath),
        "InlineMath" => Ok(MathType::InlineMath),
        _ => Err(JsonReadError::InvalidType(format!("MathType: {}", t))),
    }
}

fn read_inline(value: &Value) -> Result<Inline> {
    let (obj, t) = tag_of(value, "Inline")?;

    match t {
        "Str" => {
            let text = as_string(content(obj, "Str")?, "Str content")?;
            Ok(Inline::Str(Str { text }))
        }
        "Space" => Ok(Inline::Space),
        "SoftBreak" => Ok(Inline::SoftBreak),
        "LineBreak" => Ok(Inline::LineBreak),
        "Emph" => Ok(Inline::Emph(Emph {
            content: read_inlines(content(obj, "Emph")?)?,
        })),
        "Underline" => Ok(Inline::Underline(Underline {
            content: read_inlines(content(obj, "Underline")?)?,
        })),
        "Strong" => Ok(Inline::Strong(Strong {
            content: read_inlines(content(obj, "Strong")?)?,
        })),
        "Strikeout" => Ok(Inline::Strikeout(Strikeout {
            content: read_inlines(content(obj, "Strikeout")?)?,
        })),
        "Superscript" => Ok(Inline::Superscript(Superscript {
            content: read_inlines(content(obj, "Superscript")?)?,
        })),
        "Subscript" => Ok(Inline::Subscript(Subscript {
            content: read_inlines(content(obj, "Subscript")?)?,
        })),
        "SmallCaps" => Ok(Inline::SmallCaps(SmallCaps {
            content: read_inlines(content(obj, "SmallCaps")?)?,
        })),
        "Quoted" => {
            let c = content_array(content(obj, "Quoted")?, 2, "Quoted content")?;
            Ok(Inline::Quoted(Quoted {
                quote_type: read_quote_type(&c[0])?,
                content: read_inlines(&c[1])?,
            }))
        }
        "Code" => {
            let c = content_array(content(obj, "Code")?, 2, "Code content")?;
            Ok(Inline::Code(Code {
                attr: read_attr(&c[0])?,
                text: as_string(&c[1], "Code text")?,
            }))
        }
        "Math" => {
            let c = content_array(content(obj, "Math")?, 2, "Math content")?;
            Ok(Inline::Math(Math {
                math_type: read_math_type(&c[0])?,
                text: as_string(&c[1], "Math text")?,
            }))
        }
        "RawInline" => {
            let c = content_array(content(obj, "RawInline")?, 2, "RawInline content")?;
            Ok(Inline::RawInline(RawInline {
                format: as_string(&c[0], "RawInline format")?,
                text: as_string(&c[1], "RawInline text")?,
            }))
        }
        "Link" => {
            let c = content_array(content(obj, "Link")?, 3, "Link content")?;
            Ok(Inline::Link(Link {
                attr: read_attr(&c[0])?,
                content: read_inlines(&c[1])?,
                target: read_target(&c[2])?,
            }))
        }
        "Image" => {
            let c = content_array(content(obj, "Image")?, 3, "Image content")?;
            Ok(Inline::Image(Image {
                attr: read_attr(&c[0])?,
                content: read_inlines(&c[1])?,
                target: read_target(&c[2])?,
            }))
        }
        "Note" => Ok(Inline::Note(Note {
            content: read_blocks(content(obj, "Note")?)?,
        })),
        "Span" => {
            let c = content_array(content(obj, "Span")?, 2, "Span content")?;
            Ok(Inline::Span(Span {
                attr: read_attr(&c[0])?,
                content: read_inlines(&c[1])?,
            }))
        }
        _ => Ok(Inline::Opaque(OpaqueInline {
            tag: t.to_string(),
            content: obj.get("c").cloned(),
        })),
    }
}

fn read_inlines(value: &Value) -> Result<Inlines> {
    value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Expected array for Inlines".to_string()))?
        .iter()
        .map(read_inline)
        .collect()
}

fn read_list_number_style(value: &Value) -> Result<ListNumberStyle> {
    let (_, t) = tag_of(value, "ListNumberStyle")?;
    match t {
        "Default" => Ok(ListNumberStyle::Default),
        "Example" => Ok(ListNumberStyle::Example),
        "Decimal" => Ok(ListNumberStyle::Decimal),
        "LowerRoman" => Ok(ListNumberStyle::LowerRoman),
        "UpperRoman" => Ok(ListNumberStyle::UpperRoman),
        "LowerAlpha" => Ok(ListNumberStyle::LowerAlpha),
        "UpperAlpha" => Ok(ListNumberStyle::UpperAlpha),
        _ => Err(JsonReadError::InvalidType(format!(
            "ListNumberStyle: {}",
            t
        ))),
    }
}

fn read_list_number_delim(value: &Value) -> Result<ListNumberDelim> {
    let (_, t) = tag_of(value, "ListNumberDelim")?;
    match t {
        "Default" => Ok(ListNumberDelim::Default),
        "Period" => Ok(ListNumberDelim::Period),
        "OneParen" => Ok(ListNumberDelim::OneParen),
        "TwoParens" => Ok(ListNumberDelim::TwoParens),
        _ => Err(JsonReadError::InvalidType(format!(
            "ListNumberDelim: {}",
            t
        ))),
    }
}

fn read_list_attributes(value: &Value) -> Result<ListAttributes> {
    let arr = content_array(value, 3, "ListAttributes")?;
    Ok((
        as_usize(&arr[0], "ListAttributes start")?,
        read_list_number_style(&arr[1])?,
        read_list_number_delim(&arr[2])?,
    ))
}

fn read_blockss(value: &Value) -> Result<Vec<Blocks>> {
    value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Expected array of Blocks".to_string()))?
        .iter()
        .map(read_blocks)
        .collect()
}

fn read_alignment(value: &Value) -> Result<Alignment> {
    let (_, t) = tag_of(value, "Alignment")?;
    match t {
        "AlignLeft" => Ok(Alignment::Left),
        "AlignCenter" => Ok(Alignment::Center),
        "AlignRight" => Ok(Alignment::Right),
        "AlignDefault" => Ok(Alignment::Default),
        _ => Err(JsonReadError::InvalidType(format!("Alignment: {}", t))),
    }
}

fn read_colwidth(value: &Value) -> Result<ColWidth> {
    let (obj, t) = tag_of(value, "ColWidth")?;
    match t {
        "ColWidthDefault" => Ok(ColWidth::Default),
        "ColWidth" => {
            let p = content(obj, "ColWidth")?
                .as_f64()
                .ok_or_else(|| JsonReadError::InvalidType("ColWidth must be a number".to_string()))?;
            Ok(ColWidth::Percentage(p))
        }
        _ => Err(JsonReadError::InvalidType(format!("ColWidth: {}", t))),
    }
}

fn read_colspec(value: &Value) -> Result<ColSpec> {
    let arr = content_array(value, 2, "ColSpec")?;
    Ok((read_alignment(&arr[0])?, read_colwidth(&arr[1])?))
}

fn read_caption(value: &Value) -> Result<Caption> {
    let arr = content_array(value, 2, "Caption")?;
    let short = if arr[0].is_null() {
        None
    } else {
        Some(read_inlines(&arr[0])?)
    };
    Ok(Caption {
        short,
        long: read_blocks(&arr[1])?,
    })
}

fn read_cell(value: &Value) -> Result<Cell> {
    let arr = content_array(value, 5, "Cell")?;
    Ok(Cell {
        attr: read_attr(&arr[0])?,
        alignment: read_alignment(&arr[1])?,
        row_span: as_usize(&arr[2], "Cell row span")?,
        col_span: as_usize(&arr[3], "Cell col span")?,
        content: read_blocks(&arr[4])?,
    })
}

fn read_row(value: &Value) -> Result<Row> {
    let arr = content_array(value, 2, "Row")?;
    let cells = arr[1]
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Row cells must be an array".to_string()))?
        .iter()
        .map(read_cell)
        .collect::<Result<Vec<_>>>()?;
    Ok(Row {
        attr: read_attr(&arr[0])?,
        cells,
    })
}

fn read_rows(value: &Value, what: &str) -> Result<Vec<Row>> {
    value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be an array", what)))?
        .iter()
        .map(read_row)
        .collect()
}

fn read_table_head(value: &Value) -> Result<TableHead> {
    let arr = content_array(value, 2, "TableHead")?;
    Ok(TableHead {
        attr: read_attr(&arr[0])?,
        rows: read_rows(&arr[1], "TableHead rows")?,
    })
}

fn read_table_body(value: &Value) -> Result<TableBody> {
    let arr = content_array(value, 4, "TableBody")?;
    Ok(TableBody {
        attr: read_attr(&arr[0])?,
        rowhead_columns: as_usize(&arr[1], "TableBody row head columns")?,
        head: read_rows(&arr[2], "TableBody head")?,
        body: read_rows(&arr[3], "TableBody body")?,
    })
}

fn read_table_foot(value: &Value) -> Result<TableFoot> {
    let arr = content_array(value, 2, "TableFoot")?;
    Ok(TableFoot {
        attr: read_attr(&arr[0])?,
        rows: read_rows(&arr[1], "TableFoot rows")?,
    })
}

fn read_table(value: &Value) -> Result<Table> {
    let arr = content_array(value, 6, "Table")?;
    let colspec = arr[2]
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Table colspecs must be an array".to_string()))?
        .iter()
        .map(read_colspec)
        .collect::<Result<Vec<_>>>()?;
    let bodies = arr[4]
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Table bodies must be an array".to_string()))?
        .iter()
        .map(read_table_body)
        .collect::<Result<Vec<_>>>()?;
    Ok(Table {
        attr: read_attr(&arr[0])?,
        caption: read_caption(&arr[1])?,
        colspec,
        head: read_table_head(&arr[3])?,
        bodies,
        foot: read_table_foot(&arr[5])?,
    })
}

fn read_block(value: &Value) -> Result<Block> {
    let (obj, t) = tag_of(value, "Block")?;

    match t {
        "Plain" => Ok(Block::Plain(Plain {
            content: read_inlines(content(obj, "Plain")?)?,
        })),
        "Para" => Ok(Block::Paragraph(Paragraph {
            content: read_inlines(content(obj, "Para")?)?,
        })),
        "LineBlock" => {
            let lines = content(obj, "LineBlock")?
                .as_array()
                .ok_or_else(|| {
                    JsonReadError::InvalidType("LineBlock content must be an array".to_string())
                })?
                .iter()
                .map(read_inlines)
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::LineBlock(LineBlock { content: lines }))
        }
        "CodeBlock" => {
            let c = content_array(content(obj, "CodeBlock")?, 2, "CodeBlock content")?;
            Ok(Block::CodeBlock(CodeBlock {
                attr: read_attr(&c[0])?,
                text: as_string(&c[1], "CodeBlock text")?,
            }))
        }
        "RawBlock" => {
            let c = content_array(content(obj, "RawBlock")?, 2, "RawBlock content")?;
            Ok(Block::RawBlock(RawBlock {
                format: as_string(&c[0], "RawBlock format")?,
                text: as_string(&c[1], "RawBlock text")?,
            }))
        }
        "BlockQuote" => Ok(Block::BlockQuote(BlockQuote {
            content: read_blocks(content(obj, "BlockQuote")?)?,
        })),
        "OrderedList" => {
            let c = content_array(content(obj, "OrderedList")?, 2, "OrderedList content")?;
            Ok(Block::OrderedList(OrderedList {
                attr: read_list_attributes(&c[0])?,
                content: read_blockss(&c[1])?,
            }))
        }
        "BulletList" => Ok(Block::BulletList(BulletList {
            content: read_blockss(content(obj, "BulletList")?)?,
        })),
        "DefinitionList" => {
            let items = content(obj, "DefinitionList")?
                .as_array()
                .ok_or_else(|| {
                    JsonReadError::InvalidType(
                        "DefinitionList content must be an array".to_string(),
                    )
                })?
                .iter()
                .map(|item| {
                    let pair = content_array(item, 2, "DefinitionList item")?;
                    Ok((read_inlines(&pair[0])?, read_blockss(&pair[1])?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::DefinitionList(DefinitionList { content: items }))
        }
        "Header" => {
            let c = content_array(content(obj, "Header")?, 3, "Header content")?;
            Ok(Block::Header(Header {
                level: as_usize(&c[0], "Header level")?,
                attr: read_attr(&c[1])?,
                content: read_inlines(&c[2])?,
            }))
        }
        "HorizontalRule" => Ok(Block::HorizontalRule),
        "Table" => Ok(Block::Table(read_table(content(obj, "Table")?)?)),
        "Div" => {
            let c = content_array(content(obj, "Div")?, 2, "Div content")?;
            Ok(Block::Div(Div {
                attr: read_attr(&c[0])?,
                content: read_blocks(&c[1])?,
            }))
        }
        _ => Ok(Block::Opaque(OpaqueBlock {
            tag: t.to_string(),
            content: obj.get("c").cloned(),
        })),
    }
}

fn read_blocks(value: &Value) -> Result<Blocks> {
    value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType("Expected array for Blocks".to_string()))?
        .iter()
        .map(read_block)
        .collect()
}

fn read_meta_value(value: &Value) -> Result<MetaValue> {
    let (obj, t) = tag_of(value, "MetaValue")?;

    match t {
        "MetaString" => Ok(MetaValue::MetaString(as_string(
            content(obj, "MetaString")?,
            "MetaString content",
        )?)),
        "MetaBool" => {
            let b = content(obj, "MetaBool")?.as_bool().ok_or_else(|| {
                JsonReadError::InvalidType("MetaBool content must be a boolean".to_string())
            })?;
            Ok(MetaValue::MetaBool(b))
        }
        "MetaInlines" => Ok(MetaValue::MetaInlines(read_inlines(content(
            obj,
            "MetaInlines",
        )?)?)),
        "MetaBlocks" => Ok(MetaValue::MetaBlocks(read_blocks(content(
            obj,
            "MetaBlocks",
        )?)?)),
        "MetaList" => {
            let items = content(obj, "MetaList")?
                .as_array()
                .ok_or_else(|| {
                    JsonReadError::InvalidType("MetaList content must be an array".to_string())
                })?
                .iter()
                .map(read_meta_value)
                .collect::<Result<Vec<_>>>()?;
            Ok(MetaValue::MetaList(items))
        }
        "MetaMap" => read_meta(content(obj, "MetaMap")?).map(MetaValue::MetaMap),
        _ => Err(JsonReadError::InvalidType(format!("MetaValue: {}", t))),
    }
}

fn read_meta(value: &Value) -> Result<Meta> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType("Expected object for Meta".to_string()))?;
    let mut meta = Meta::new();
    for (key, entry) in obj {
        meta.insert(key.clone(), read_meta_value(entry)?);
    }
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_minimal_document() {
        let input = json!({
            "pandoc-api-version": [1, 23, 1],
            "meta": {},
            "blocks": [
                {"t": "Para", "c": [{"t": "Str", "c": "Hello"}]}
            ]
        });
        let doc = read(&mut input.to_string().as_bytes()).unwrap();
        assert_eq!(doc.api_version, vec![1, 23, 1]);
        assert!(doc.meta.is_empty());
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(Paragraph {
                content: vec![Inline::Str(Str {
                    text: "Hello".to_string()
                })],
            })]
        );
    }

    #[test]
    fn test_unknown_block_becomes_opaque() {
        let input = json!({
            "pandoc-api-version": [1, 23, 1],
            "meta": {},
            "blocks": [
                {"t": "Figure", "c": [["", [], []], [null, []], []]}
            ]
        });
        let doc = read(&mut input.to_string().as_bytes()).unwrap();
        let Block::Opaque(opaque) = &doc.blocks[0] else {
            panic!("expected Opaque, got {:?}", doc.blocks[0]);
        };
        assert_eq!(opaque.tag, "Figure");
        assert_eq!(opaque.content, Some(json!([["", [], []], [null, []], []])));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let result = read(&mut "{not json".as_bytes());
        assert!(matches!(result, Err(JsonReadError::InvalidJson(_))));
    }

    #[test]
    fn test_missing_blocks_field() {
        let input = json!({"pandoc-api-version": [1, 23, 1], "meta": {}});
        let result = read(&mut input.to_string().as_bytes());
        assert!(matches!(result, Err(JsonReadError::MissingField(f)) if f == "blocks"));
    }

    #[test]
    fn test_rejects_other_api_versions() {
        let input = json!({
            "pandoc-api-version": [1, 22],
            "meta": {},
            "blocks": []
        });
        let result = read(&mut input.to_string().as_bytes());
        assert!(matches!(
            result,
            Err(JsonReadError::UnsupportedApiVersion(v)) if v == "1.22"
        ));
    }

    #[test]
    fn test_read_meta_values() {
        let input = json!({
            "pandoc-api-version": [1, 23, 1],
            "meta": {
                "title": {"t": "MetaInlines", "c": [{"t": "Str", "c": "Notes"}]},
                "draft": {"t": "MetaBool", "c": true},
                "tags": {"t": "MetaList", "c": [{"t": "MetaString", "c": "intro"}]}
            },
            "blocks": []
        });
        let doc = read(&mut input.to_string().as_bytes()).unwrap();
        assert_eq!(doc.meta.len(), 3);
        assert_eq!(doc.meta.get("draft"), Some(&MetaValue::MetaBool(true)));
        assert_eq!(
            doc.meta.get("tags"),
            Some(&MetaValue::MetaList(vec![MetaValue::MetaString(
                "intro".to_string()
            )]))
        );
    }
}
