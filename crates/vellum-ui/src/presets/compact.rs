//! Compact preset: every command this crate ships glyphs for, sized for
//! dense layouts.

use std::rc::Rc;

use dioxus::prelude::*;
use vellum_core::{
    AnnotationDefinition, DecoratorDefinition, FieldDefinition, FieldType, ListDefinition,
    Platform, SchemaDefinition, StyleDefinition,
};
use vellum_toolbar::{ScriptedEngine, ToolbarSchema};

use crate::annotation::AnnotationButton;
use crate::editor::{Editor, use_editor};
use crate::presets::meta::standard_meta;
use crate::surface::EditableSurface;
use crate::toolbar::{
    ButtonGroup, DecoratorButton, HistoryButton, HistoryDirection, ListButton, StyleDropdown,
    Toolbar,
};

/// Ten decorators (including alignment), eight styles, links, and both
/// list kinds.
pub fn schema(platform: Platform) -> Rc<ToolbarSchema> {
    let definition = SchemaDefinition {
        decorators: vec![
            DecoratorDefinition::new("strong").with_title("Bold"),
            DecoratorDefinition::new("em").with_title("Italic"),
            DecoratorDefinition::new("underline").with_title("Underline"),
            DecoratorDefinition::new("strikethrough").with_title("Strikethrough"),
            DecoratorDefinition::new("subscript").with_title("Subscript"),
            DecoratorDefinition::new("superscript").with_title("Superscript"),
            DecoratorDefinition::new("left").with_title("Align Left"),
            DecoratorDefinition::new("center").with_title("Align Center"),
            DecoratorDefinition::new("right").with_title("Align Right"),
            DecoratorDefinition::new("justify").with_title("Justify"),
        ],
        styles: vec![
            StyleDefinition::new("normal").with_title("Paragraph"),
            StyleDefinition::new("h1").with_title("Heading 1"),
            StyleDefinition::new("h2").with_title("Heading 2"),
            StyleDefinition::new("h3").with_title("Heading 3"),
            StyleDefinition::new("h4").with_title("Heading 4"),
            StyleDefinition::new("h5").with_title("Heading 5"),
            StyleDefinition::new("h6").with_title("Heading 6"),
            StyleDefinition::new("blockquote").with_title("Blockquote"),
        ],
        annotations: vec![
            AnnotationDefinition::new("link")
                .with_title("Link")
                .with_field(FieldDefinition::new("href", "URL").with_type(FieldType::Url)),
        ],
        lists: vec![
            ListDefinition::new("bullet").with_title("Bullet List"),
            ListDefinition::new("number").with_title("Numbered List"),
        ],
    };
    let meta = standard_meta(&definition, platform);
    Rc::new(ToolbarSchema::new(definition, meta))
}

/// Props for the compact toolbar layout.
#[derive(Props, Clone, PartialEq)]
pub struct CompactToolbarProps {
    pub editor: Editor,
}

/// Grouped toolbar: history, standard decorators, style dropdown,
/// script marks, alignment, lists, and the link dialog button.
#[component]
pub fn CompactToolbar(props: CompactToolbarProps) -> Element {
    let editor = props.editor;
    rsx! {
        Toolbar {
            ButtonGroup {
                HistoryButton { editor: editor.clone(), direction: HistoryDirection::Undo }
                HistoryButton { editor: editor.clone(), direction: HistoryDirection::Redo }
            }
            ButtonGroup {
                for id in ["strong", "em", "underline", "strikethrough"] {
                    DecoratorButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            StyleDropdown { editor: editor.clone() }
            ButtonGroup {
                for id in ["subscript", "superscript"] {
                    DecoratorButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            ButtonGroup {
                for id in ["left", "center", "right", "justify"] {
                    DecoratorButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            ButtonGroup {
                for id in ["bullet", "number"] {
                    ListButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            AnnotationButton { editor: editor.clone(), id: "link" }
        }
    }
}

/// Props for [`CompactEditor`].
#[derive(Props, Clone, PartialEq)]
pub struct CompactEditorProps {
    /// Host platform, for primary-modifier selection and shortcut hints.
    #[props(default)]
    pub platform: Platform,
}

/// Self-contained compact editor running a scripted demo engine.
#[component]
pub fn CompactEditor(props: CompactEditorProps) -> Element {
    let platform = props.platform;
    let editor = use_editor(move || {
        let schema = schema(platform);
        let engine = ScriptedEngine::new(schema.definition.clone());
        (schema, engine, platform)
    });

    rsx! {
        div { class: "pt-editor pt-editor-compact",
            CompactToolbar { editor: editor.clone() }
            EditableSurface { editor }
        }
    }
}

#[cfg(test)]
mod tests {
    use vellum_core::{CommandKind, FieldType, Platform};

    use super::schema;

    #[test]
    fn test_declares_the_full_command_set() {
        let schema = schema(Platform::Other);
        assert_eq!(schema.definition.decorators.len(), 10);
        assert_eq!(schema.definition.styles.len(), 8);
        assert_eq!(schema.definition.lists.len(), 2);
        let link = schema.definition.annotation("link").expect("link");
        assert_eq!(link.fields.len(), 1);
        assert_eq!(link.fields[0].field_type, FieldType::Url);
    }

    #[test]
    fn test_script_marks_exclude_each_other() {
        let schema = schema(Platform::Other);
        let others: Vec<&str> = schema
            .exclusive_decorators(&"subscript".into())
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(others, ["superscript"]);
        let others: Vec<&str> = schema
            .exclusive_decorators(&"superscript".into())
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(others, ["subscript"]);
    }

    #[test]
    fn test_alignment_excludes_the_other_three() {
        let schema = schema(Platform::Other);
        let others = schema.exclusive_decorators(&"center".into());
        assert_eq!(others.len(), 3);
        assert!(!others.contains(&&"center".into()));
    }

    #[test]
    fn test_link_draft_seeds_the_example_origin() {
        let schema = schema(Platform::Other);
        let draft = schema.initial_draft(&"link".into());
        assert_eq!(
            draft.get("href").and_then(|v| v.as_str()),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_every_style_carries_a_shortcut() {
        let schema = schema(Platform::Mac);
        for style in &schema.definition.styles {
            assert!(
                schema.shortcut(CommandKind::Style, &style.name).is_some(),
                "missing shortcut for {}",
                style.name
            );
        }
    }
}
