//! Block-to-HTML rendering driven by lookup tables.
//!
//! The editable surface shows the engine's document value as an HTML
//! string. Every id-dependent rendering choice lives in a const table
//! here, so a preset can be audited by reading data instead of chasing
//! branch ladders.

use pulldown_cmark_escape::{escape_href, escape_html};
use serde_json::Value;
use vellum_core::DocumentValue;

/// How a block style renders: the wrapping element plus its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRender {
    pub tag: &'static str,
    pub class: &'static str,
}

/// How a decorator mark renders. `class` is only set for marks that
/// carry their meaning through CSS, like the alignment spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoratorRender {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

/// How an annotation renders. `href_field` names the object field
/// whose value becomes the link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationRender {
    pub tag: &'static str,
    pub class: &'static str,
    pub href_field: Option<&'static str>,
}

const DEFAULT_STYLE: StyleRender = StyleRender {
    tag: "p",
    class: "pt-style-normal",
};

const STYLES: &[(&str, StyleRender)] = &[
    ("normal", DEFAULT_STYLE),
    ("h1", StyleRender { tag: "h1", class: "pt-style-h1" }),
    ("h2", StyleRender { tag: "h2", class: "pt-style-h2" }),
    ("h3", StyleRender { tag: "h3", class: "pt-style-h3" }),
    ("h4", StyleRender { tag: "h4", class: "pt-style-h4" }),
    ("h5", StyleRender { tag: "h5", class: "pt-style-h5" }),
    ("h6", StyleRender { tag: "h6", class: "pt-style-h6" }),
    (
        "blockquote",
        StyleRender {
            tag: "blockquote",
            class: "pt-style-blockquote",
        },
    ),
];

const DECORATORS: &[(&str, DecoratorRender)] = &[
    ("strong", DecoratorRender { tag: "strong", class: None }),
    ("em", DecoratorRender { tag: "em", class: None }),
    ("underline", DecoratorRender { tag: "u", class: None }),
    ("strikethrough", DecoratorRender { tag: "del", class: None }),
    ("subscript", DecoratorRender { tag: "sub", class: None }),
    ("superscript", DecoratorRender { tag: "sup", class: None }),
    (
        "left",
        DecoratorRender {
            tag: "span",
            class: Some("pt-align-left"),
        },
    ),
    (
        "center",
        DecoratorRender {
            tag: "span",
            class: Some("pt-align-center"),
        },
    ),
    (
        "right",
        DecoratorRender {
            tag: "span",
            class: Some("pt-align-right"),
        },
    ),
    (
        "justify",
        DecoratorRender {
            tag: "span",
            class: Some("pt-align-justify"),
        },
    ),
];

const ANNOTATIONS: &[(&str, AnnotationRender)] = &[(
    "link",
    AnnotationRender {
        tag: "a",
        class: "pt-link",
        href_field: Some("href"),
    },
)];

/// Looks up how a block style renders. Unknown styles fall back to a
/// plain paragraph.
pub fn style_render(style: &str) -> StyleRender {
    STYLES
        .iter()
        .find(|(id, _)| *id == style)
        .map(|(_, render)| *render)
        .unwrap_or(DEFAULT_STYLE)
}

/// Looks up how a decorator renders. Unknown decorators leave their
/// text unwrapped.
pub fn decorator_render(decorator: &str) -> Option<DecoratorRender> {
    DECORATORS
        .iter()
        .find(|(id, _)| *id == decorator)
        .map(|(_, render)| *render)
}

/// Looks up how an annotation renders, keyed by the mark definition's
/// `_type`.
pub fn annotation_render(annotation: &str) -> Option<AnnotationRender> {
    ANNOTATIONS
        .iter()
        .find(|(id, _)| *id == annotation)
        .map(|(_, render)| *render)
}

/// Class list for a list-item block, following the
/// `pt-list-item-level-N` scheme the surface stylesheet targets.
pub fn list_item_classes(list: &str, level: u64) -> String {
    format!("pt-list-item pt-list-item-{list} pt-list-item-level-{level}")
}

/// Renders a document value to an HTML string, one element per block,
/// blocks separated by newlines.
///
/// Entries that are not text blocks and children that are not spans
/// are skipped.
pub fn render_blocks(value: &DocumentValue) -> String {
    let Some(blocks) = value.as_array() else {
        return String::new();
    };
    let mut out = String::new();
    for block in blocks {
        let Some(block) = block.as_object() else {
            continue;
        };
        if block.get("_type").and_then(Value::as_str) != Some("block") {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &serde_json::Map<String, Value>) {
    let style = block
        .get("style")
        .and_then(Value::as_str)
        .unwrap_or("normal");
    let render = style_render(style);

    let mut class = String::from(render.class);
    if let Some(list) = block.get("listItem").and_then(Value::as_str) {
        let level = block.get("level").and_then(Value::as_u64).unwrap_or(1);
        class.push(' ');
        class.push_str(&list_item_classes(list, level));
    }

    out.push('<');
    out.push_str(render.tag);
    out.push_str(" class=\"");
    out.push_str(&class);
    out.push_str("\">");

    let mark_defs = block
        .get("markDefs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    for child in block
        .get("children")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let Some(child) = child.as_object() else {
            continue;
        };
        if child.get("_type").and_then(Value::as_str) != Some("span") {
            continue;
        }
        render_span(out, child, mark_defs);
    }

    out.push_str("</");
    out.push_str(render.tag);
    out.push('>');
}

fn render_span(out: &mut String, span: &serde_json::Map<String, Value>, mark_defs: &[Value]) {
    let text = span.get("text").and_then(Value::as_str).unwrap_or("");
    let marks: &[Value] = span
        .get("marks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut close: Vec<&'static str> = Vec::new();

    // Annotations wrap outside decorators so one anchor spans the
    // whole decorated run.
    for mark in marks {
        let Some(mark) = mark.as_str() else {
            continue;
        };
        let Some(def) = mark_def_for(mark_defs, mark) else {
            continue;
        };
        let kind = def.get("_type").and_then(Value::as_str).unwrap_or("");
        let Some(render) = annotation_render(kind) else {
            continue;
        };
        out.push('<');
        out.push_str(render.tag);
        out.push_str(" class=\"");
        out.push_str(render.class);
        out.push('"');
        if let Some(field) = render.href_field {
            if let Some(href) = def.get(field).and_then(Value::as_str) {
                out.push_str(" href=\"");
                let _ = escape_href(&mut *out, href);
                out.push('"');
            }
        }
        out.push('>');
        close.push(render.tag);
    }

    for mark in marks {
        let Some(mark) = mark.as_str() else {
            continue;
        };
        if mark_def_for(mark_defs, mark).is_some() {
            continue;
        }
        let Some(render) = decorator_render(mark) else {
            continue;
        };
        out.push('<');
        out.push_str(render.tag);
        if let Some(class) = render.class {
            out.push_str(" class=\"");
            out.push_str(class);
            out.push('"');
        }
        out.push('>');
        close.push(render.tag);
    }

    let _ = escape_html(&mut *out, text);

    for tag in close.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn mark_def_for<'a>(mark_defs: &'a [Value], key: &str) -> Option<&'a Value> {
    mark_defs
        .iter()
        .find(|def| def.get("_key").and_then(Value::as_str) == Some(key))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_styles_resolve_with_paragraph_fallback() {
        assert_eq!(style_render("h3").tag, "h3");
        assert_eq!(style_render("blockquote").class, "pt-style-blockquote");
        assert_eq!(style_render("mystery").tag, "p");
    }

    #[test]
    fn test_unknown_marks_leave_text_unwrapped() {
        assert_eq!(decorator_render("sparkle"), None);
        assert_eq!(annotation_render("comment"), None);
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "markDefs": [],
            "children": [
                { "_type": "span", "_key": "s0", "text": "plain", "marks": ["sparkle"] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal\">plain</p>"
        );
    }

    #[test]
    fn test_decorators_nest_in_mark_order() {
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "markDefs": [],
            "children": [
                { "_type": "span", "_key": "s0", "text": "both", "marks": ["strong", "em"] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal\"><strong><em>both</em></strong></p>"
        );
    }

    #[test]
    fn test_alignment_marks_render_as_classed_spans() {
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "markDefs": [],
            "children": [
                { "_type": "span", "_key": "s0", "text": "centered", "marks": ["center"] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal\"><span class=\"pt-align-center\">centered</span></p>"
        );
    }

    #[test]
    fn test_annotations_wrap_outside_decorators() {
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "markDefs": [
                { "_key": "l0", "_type": "link", "href": "https://rust-lang.org" },
            ],
            "children": [
                { "_type": "span", "_key": "s0", "text": "Rust", "marks": ["strong", "l0"] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal\"><a class=\"pt-link\" href=\"https://rust-lang.org\"><strong>Rust</strong></a></p>"
        );
    }

    #[test]
    fn test_list_items_carry_level_classes() {
        assert_eq!(
            list_item_classes("bullet", 2),
            "pt-list-item pt-list-item-bullet pt-list-item-level-2"
        );
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "listItem": "number",
            "level": 3,
            "markDefs": [],
            "children": [
                { "_type": "span", "_key": "s0", "text": "third", "marks": [] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal pt-list-item pt-list-item-number pt-list-item-level-3\">third</p>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let value = json!([{
            "_type": "block",
            "_key": "b0",
            "style": "normal",
            "markDefs": [],
            "children": [
                { "_type": "span", "_key": "s0", "text": "a < b & \"c\"", "marks": [] },
            ],
        }]);
        assert_eq!(
            render_blocks(&value),
            "<p class=\"pt-style-normal\">a &lt; b &amp; &quot;c&quot;</p>"
        );
    }

    #[test]
    fn test_non_blocks_are_skipped() {
        let value = json!([{ "_type": "image", "_key": "i0" }]);
        assert_eq!(render_blocks(&value), "");
        assert_eq!(render_blocks(&json!({ "not": "an array" })), "");
    }

    #[test]
    fn test_documents_render_one_element_per_block() {
        let value = json!([
            {
                "_type": "block",
                "_key": "b0",
                "style": "h1",
                "markDefs": [],
                "children": [
                    { "_type": "span", "_key": "s0", "text": "Title", "marks": [] },
                ],
            },
            {
                "_type": "block",
                "_key": "b1",
                "style": "normal",
                "listItem": "bullet",
                "level": 1,
                "markDefs": [
                    { "_key": "l0", "_type": "link", "href": "https://example.com" },
                ],
                "children": [
                    { "_type": "span", "_key": "s1", "text": "See ", "marks": [] },
                    { "_type": "span", "_key": "s2", "text": "the docs", "marks": ["l0"] },
                ],
            },
        ]);
        insta::assert_snapshot!(render_blocks(&value), @r#"
        <h1 class="pt-style-h1">Title</h1>
        <p class="pt-style-normal pt-list-item pt-list-item-bullet pt-list-item-level-1">See <a class="pt-link" href="https://example.com">the docs</a></p>
        "#);
    }
}
