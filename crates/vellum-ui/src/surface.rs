//! The editable document surface.

use dioxus::prelude::*;

use crate::editor::Editor;
use crate::keymap::combo_from_keyboard;
use crate::render::render_blocks;

/// Props for the editable surface.
#[derive(Props, Clone, PartialEq)]
pub struct EditableSurfaceProps {
    /// Editor this surface renders and feeds keystrokes to.
    pub editor: Editor,
    /// Placeholder shown while the document is empty.
    #[props(default)]
    pub placeholder: String,
}

/// The contenteditable document view.
///
/// Keystrokes are matched against the schema's shortcuts first; only
/// unmatched keys fall through to the browser's native editing.
#[component]
pub fn EditableSurface(props: EditableSurfaceProps) -> Element {
    let editor = props.editor.clone();
    let html = editor
        .value()
        .map(|value| render_blocks(&value))
        .unwrap_or_default();
    let editable = if editor.read_only() { "false" } else { "true" };

    rsx! {
        div { class: "pt-editable-container",
            if html.is_empty() && !props.placeholder.is_empty() {
                span { class: "pt-placeholder", "{props.placeholder}" }
            }
            div {
                class: "pt-editable",
                role: "textbox",
                contenteditable: "{editable}",
                onkeydown: {
                    let editor = props.editor.clone();
                    move |evt| {
                        let combo = combo_from_keyboard(&evt);
                        if editor.keydown(&combo.key, combo.modifiers) {
                            tracing::debug!(key = ?combo.key, "keydown handled by shortcut");
                            evt.prevent_default();
                        }
                    }
                },
                dangerous_inner_html: "{html}",
            }
        }
    }
}
