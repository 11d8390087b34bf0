//! Simple preset: three decorators, three styles, nothing else.

use std::rc::Rc;

use dioxus::prelude::*;
use vellum_core::{DecoratorDefinition, Platform, SchemaDefinition, StyleDefinition};
use vellum_toolbar::{ScriptedEngine, ToolbarSchema};

use crate::editor::{Editor, use_editor};
use crate::presets::meta::standard_meta;
use crate::surface::EditableSurface;
use crate::toolbar::{DecoratorButton, StyleDropdown, Toolbar};

/// Bold, italic, underline; paragraph and two heading levels.
pub fn schema(platform: Platform) -> Rc<ToolbarSchema> {
    let definition = SchemaDefinition {
        decorators: vec![
            DecoratorDefinition::new("strong").with_title("Bold"),
            DecoratorDefinition::new("em").with_title("Italic"),
            DecoratorDefinition::new("underline").with_title("Underline"),
        ],
        styles: vec![
            StyleDefinition::new("normal").with_title("Paragraph"),
            StyleDefinition::new("h1").with_title("Heading 1"),
            StyleDefinition::new("h2").with_title("Heading 2"),
        ],
        annotations: Vec::new(),
        lists: Vec::new(),
    };
    let meta = standard_meta(&definition, platform);
    Rc::new(ToolbarSchema::new(definition, meta))
}

/// Props for the preset toolbar layouts.
#[derive(Props, Clone, PartialEq)]
pub struct SimpleToolbarProps {
    pub editor: Editor,
}

/// Flat toolbar: the three decorator buttons and the style dropdown.
#[component]
pub fn SimpleToolbar(props: SimpleToolbarProps) -> Element {
    let editor = props.editor;
    rsx! {
        Toolbar {
            for id in ["strong", "em", "underline"] {
                DecoratorButton { key: "{id}", editor: editor.clone(), id: "{id}" }
            }
            StyleDropdown { editor: editor.clone() }
        }
    }
}

/// Props for the preset editors.
#[derive(Props, Clone, PartialEq)]
pub struct SimpleEditorProps {
    /// Host platform, for primary-modifier selection and shortcut hints.
    #[props(default)]
    pub platform: Platform,
}

/// Self-contained simple editor running a scripted demo engine.
#[component]
pub fn SimpleEditor(props: SimpleEditorProps) -> Element {
    let platform = props.platform;
    let editor = use_editor(move || {
        let schema = schema(platform);
        let engine = ScriptedEngine::new(schema.definition.clone());
        (schema, engine, platform)
    });

    rsx! {
        div { class: "pt-editor pt-editor-simple",
            SimpleToolbar { editor: editor.clone() }
            EditableSurface { editor }
        }
    }
}
