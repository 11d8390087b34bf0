//! Small preset: the extended command set behind a tighter toolbar,
//! with links collected through an inline popover instead of a dialog.

use std::rc::Rc;

use dioxus::prelude::*;
use vellum_core::{
    AnnotationDefinition, DecoratorDefinition, FieldDefinition, FieldType, ListDefinition,
    Platform, SchemaDefinition, StyleDefinition,
};
use vellum_toolbar::{ScriptedEngine, ToolbarSchema};

use crate::annotation::LinkPopoverButton;
use crate::editor::{Editor, use_editor};
use crate::presets::meta::standard_meta;
use crate::surface::EditableSurface;
use crate::toolbar::{
    ButtonGroup, DecoratorButton, HistoryButton, HistoryDirection, ListButton, StyleDropdown,
    Toolbar,
};

/// Standard and alignment decorators, eight styles, a one-field link,
/// and both list kinds.
pub fn schema(platform: Platform) -> Rc<ToolbarSchema> {
    let definition = SchemaDefinition {
        decorators: vec![
            DecoratorDefinition::new("strong").with_title("Bold"),
            DecoratorDefinition::new("em").with_title("Italic"),
            DecoratorDefinition::new("underline").with_title("Underline"),
            DecoratorDefinition::new("strikethrough").with_title("Strikethrough"),
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

/// Props for the small toolbar layout.
#[derive(Props, Clone, PartialEq)]
pub struct SmallToolbarProps {
    pub editor: Editor,
}

/// Grouped toolbar ending in the link popover button.
#[component]
pub fn SmallToolbar(props: SmallToolbarProps) -> Element {
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
                for id in ["left", "center", "right", "justify"] {
                    DecoratorButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            ButtonGroup {
                for id in ["bullet", "number"] {
                    ListButton { key: "{id}", editor: editor.clone(), id: "{id}" }
                }
            }
            LinkPopoverButton { editor: editor.clone(), id: "link" }
        }
    }
}

/// Props for [`SmallEditor`].
#[derive(Props, Clone, PartialEq)]
pub struct SmallEditorProps {
    /// Host platform, for primary-modifier selection and shortcut hints.
    #[props(default)]
    pub platform: Platform,
}

/// Self-contained small editor running a scripted demo engine.
#[component]
pub fn SmallEditor(props: SmallEditorProps) -> Element {
    let platform = props.platform;
    let editor = use_editor(move || {
        let schema = schema(platform);
        let engine = ScriptedEngine::new(schema.definition.clone());
        (schema, engine, platform)
    });

    rsx! {
        div { class: "pt-editor pt-editor-small",
            SmallToolbar { editor: editor.clone() }
            EditableSurface { editor }
        }
    }
}
