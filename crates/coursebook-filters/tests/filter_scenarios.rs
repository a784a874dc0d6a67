/*
 * filter_scenarios.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end scenarios over the JSON wire format, the way the typesetting
 * tool drives the filter binaries.
 */

use coursebook_filters::driver::{self, FilterError};
use coursebook_filters::transforms::{image_formats, responsive_tables, solutions};
use coursebook_pandoc_types::pandoc::Pandoc;
use serde_json::{Value, json};

fn apply<F>(input: &Value, transform: F) -> Value
where
    F: FnOnce(Pandoc) -> Result<Pandoc, FilterError>,
{
    let mut output = Vec::new();
    driver::run_with(&mut input.to_string().as_bytes(), &mut output, transform)
        .expect("filter invocation failed");
    serde_json::from_slice(&output).expect("filter produced invalid JSON")
}

fn doc(blocks: Value) -> Value {
    json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": blocks
    })
}

fn empty_table() -> Value {
    // [attr, caption, colspecs, head, bodies, foot]
    json!({"t": "Table", "c": [
        ["", [], []],
        [null, []],
        [],
        [["", [], []], []],
        [],
        [["", [], []], []]
    ]})
}

fn str_inline(text: &str) -> Value {
    json!({"t": "Str", "c": text})
}

#[test]
fn scenario_solution_moves_to_appendix() {
    let input = doc(json!([
        {"t": "Header", "c": [2, ["", [], []], [str_inline("Ex 1")]]},
        {"t": "Div", "c": [["", ["solution"], []], [{"t": "Para", "c": [str_inline("answer")]}]]},
        {"t": "Para", "c": [str_inline("More"), {"t": "Space"}, str_inline("text")]},
        {"t": "Div", "c": [["", ["solutions"], []], []]}
    ]));
    let output = apply(&input, |d| {
        solutions::relocate_solutions(d).map_err(Into::into)
    });
    assert_eq!(
        output,
        doc(json!([
            {"t": "Header", "c": [2, ["", [], []], [str_inline("Ex 1")]]},
            {"t": "Para", "c": [str_inline("More"), {"t": "Space"}, str_inline("text")]},
            {"t": "Div", "c": [["", ["solutions"], []], [
                {"t": "Header", "c": [2, ["", [], []], [str_inline("Ex 1")]]},
                {"t": "Para", "c": [str_inline("answer")]}
            ]]}
        ]))
    );
}

#[test]
fn scenario_solution_before_header_fails_the_invocation() {
    let input = doc(json!([
        {"t": "Div", "c": [["", ["solution"], []], []]},
        {"t": "Div", "c": [["", ["solutions"], []], []]}
    ]));
    let mut output = Vec::new();
    let result = driver::run_with(&mut input.to_string().as_bytes(), &mut output, |d| {
        solutions::relocate_solutions(d).map_err(Into::into)
    });
    assert!(matches!(result, Err(FilterError::Solutions(_))));
    assert!(output.is_empty());
}

#[test]
fn scenario_table_wrapped_for_html() {
    let input = doc(json!([empty_table()]));
    let output = apply(&input, |d| Ok(responsive_tables::wrap_tables(d, Some("html"))));
    assert_eq!(
        output,
        doc(json!([
            {"t": "Div", "c": [["", ["table-responsive"], []], [empty_table()]]}
        ]))
    );
}

#[test]
fn scenario_table_untouched_for_latex() {
    let input = doc(json!([empty_table()]));
    let output = apply(&input, |d| {
        Ok(responsive_tables::wrap_tables(d, Some("latex")))
    });
    assert_eq!(output, input);
}

#[test]
fn scenario_table_wrap_is_idempotent() {
    let input = doc(json!([empty_table()]));
    let once = apply(&input, |d| Ok(responsive_tables::wrap_tables(d, Some("html"))));
    let twice = apply(&once, |d| Ok(responsive_tables::wrap_tables(d, Some("html"))));
    assert_eq!(twice, once);
}

fn image_para(url: &str) -> Value {
    json!({"t": "Para", "c": [
        {"t": "Image", "c": [["", [], []], [str_inline("fig")], [url, ""]]}
    ]})
}

#[test]
fn scenario_dual_extension_print_format() {
    let input = doc(json!([image_para("diagrams/fig1.pdf+svg")]));
    let output = apply(&input, |d| Ok(image_formats::select_image_urls(d, Some("pdf"))));
    assert_eq!(output, doc(json!([image_para("diagrams/fig1.pdf")])));
}

#[test]
fn scenario_dual_extension_screen_format() {
    let input = doc(json!([image_para("diagrams/fig1.pdf+svg")]));
    let output = apply(&input, |d| Ok(image_formats::select_image_urls(d, Some("html"))));
    assert_eq!(output, doc(json!([image_para("diagrams/fig1.svg")])));
}

#[test]
fn scenario_single_extension_untouched() {
    let input = doc(json!([image_para("diagrams/fig1.png")]));
    let output = apply(&input, |d| Ok(image_formats::select_image_urls(d, Some("html"))));
    assert_eq!(output, input);

    let output = apply(&input, |d| Ok(image_formats::select_image_urls(d, Some("pdf"))));
    assert_eq!(output, input);
}

#[test]
fn scenario_image_rewrite_is_idempotent() {
    let input = doc(json!([image_para("diagrams/fig1.pdf+svg")]));
    let once = apply(&input, |d| Ok(image_formats::select_image_urls(d, Some("html"))));
    let twice = apply(&once, |d| Ok(image_formats::select_image_urls(d, Some("html"))));
    assert_eq!(twice, once);
}

#[test]
fn scenario_unknown_nodes_survive_every_filter() {
    // A node kind none of the filters model rides through all three
    // unchanged, payload and all.
    let input = doc(json!([
        {"t": "Header", "c": [1, ["", [], []], [str_inline("T")]]},
        {"t": "Figure", "c": [["fig-1", [], [["k", "v"]]], [null, []], [{"t": "Para", "c": []}]]},
        {"t": "Div", "c": [["", ["solutions"], []], []]}
    ]));
    let after_solutions = apply(&input, |d| {
        solutions::relocate_solutions(d).map_err(Into::into)
    });
    assert_eq!(after_solutions, input);

    let after_tables = apply(&input, |d| {
        Ok(responsive_tables::wrap_tables(d, Some("html")))
    });
    assert_eq!(after_tables, input);

    let after_images = apply(&input, |d| {
        Ok(image_formats::select_image_urls(d, Some("html")))
    });
    assert_eq!(after_images, input);
}

#[test]
fn scenario_api_version_and_meta_are_echoed() {
    let input = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {
            "title": {"t": "MetaInlines", "c": [str_inline("A"), {"t": "Space"}, str_inline("Course")]},
            "lang": {"t": "MetaString", "c": "en"}
        },
        "blocks": []
    });
    let output = apply(&input, |d| {
        Ok(responsive_tables::wrap_tables(d, Some("html")))
    });
    assert_eq!(output, input);
}
