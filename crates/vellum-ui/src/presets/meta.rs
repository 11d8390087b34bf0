//! Shared presentation metadata for the preset schemas.
//!
//! One id-keyed table replaces per-preset extension callbacks: a preset
//! declares ids, and every declared id picks up the same glyph,
//! shortcut, exclusion group, and draft defaults from here. Ids the
//! table does not know render bare.

use vellum_core::shortcut::combos;
use vellum_core::{Platform, SchemaDefinition};
use vellum_toolbar::schema::{CommandMeta, MetaTable};

/// Metadata for every id `definition` declares.
pub(crate) fn standard_meta(definition: &SchemaDefinition, platform: Platform) -> MetaTable {
    let mut meta = MetaTable::new();
    for decorator in &definition.decorators {
        if let Some(entry) = decorator_meta(decorator.name.as_str(), platform) {
            meta = meta.with_decorator(decorator.name.clone(), entry);
        }
    }
    for style in &definition.styles {
        if let Some(entry) = style_meta(style.name.as_str(), platform) {
            meta = meta.with_style(style.name.clone(), entry);
        }
    }
    for list in &definition.lists {
        if let Some(entry) = list_meta(list.name.as_str()) {
            meta = meta.with_list(list.name.clone(), entry);
        }
    }
    for annotation in &definition.annotations {
        if let Some(entry) = annotation_meta(annotation.name.as_str(), platform) {
            meta = meta.with_annotation(annotation.name.clone(), entry);
        }
    }
    meta
}

fn decorator_meta(id: &str, platform: Platform) -> Option<CommandMeta> {
    let meta = match id {
        "strong" => CommandMeta::new()
            .with_icon("B")
            .with_shortcut(combos::bold(platform)),
        "em" => CommandMeta::new()
            .with_icon("I")
            .with_shortcut(combos::italic(platform)),
        "underline" => CommandMeta::new()
            .with_icon("U")
            .with_shortcut(combos::underline(platform)),
        "strikethrough" => CommandMeta::new()
            .with_icon("S")
            .with_shortcut(combos::strike_through(platform)),
        "subscript" => CommandMeta::new()
            .with_icon("x₂")
            .exclusive_with(["superscript"]),
        "superscript" => CommandMeta::new()
            .with_icon("x²")
            .exclusive_with(["subscript"]),
        "left" => CommandMeta::new()
            .with_icon("⇤")
            .exclusive_with(["center", "right", "justify"]),
        "center" => CommandMeta::new()
            .with_icon("↔")
            .exclusive_with(["left", "right", "justify"]),
        "right" => CommandMeta::new()
            .with_icon("⇥")
            .exclusive_with(["left", "center", "justify"]),
        "justify" => CommandMeta::new()
            .with_icon("≡")
            .exclusive_with(["left", "center", "right"]),
        _ => return None,
    };
    Some(meta)
}

fn style_meta(id: &str, platform: Platform) -> Option<CommandMeta> {
    let meta = match id {
        "normal" => CommandMeta::new().with_shortcut(combos::normal(platform)),
        "h1" => CommandMeta::new().with_shortcut(combos::heading(1, platform)),
        "h2" => CommandMeta::new().with_shortcut(combos::heading(2, platform)),
        "h3" => CommandMeta::new().with_shortcut(combos::heading(3, platform)),
        "h4" => CommandMeta::new().with_shortcut(combos::heading(4, platform)),
        "h5" => CommandMeta::new().with_shortcut(combos::heading(5, platform)),
        "h6" => CommandMeta::new().with_shortcut(combos::heading(6, platform)),
        "blockquote" => CommandMeta::new().with_shortcut(combos::blockquote(platform)),
        _ => return None,
    };
    Some(meta)
}

fn list_meta(id: &str) -> Option<CommandMeta> {
    let meta = match id {
        "bullet" => CommandMeta::new().with_icon("•"),
        "number" => CommandMeta::new().with_icon("1."),
        _ => return None,
    };
    Some(meta)
}

fn annotation_meta(id: &str, platform: Platform) -> Option<CommandMeta> {
    let meta = match id {
        "link" => CommandMeta::new()
            .with_icon("🔗")
            .with_shortcut(combos::link(platform))
            .with_default("name", "")
            .with_default("href", "https://example.com"),
        _ => return None,
    };
    Some(meta)
}
