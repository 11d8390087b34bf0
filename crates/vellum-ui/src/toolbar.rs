//! Toolbar building blocks wired to the command bindings.

use dioxus::prelude::*;
use vellum_core::shortcut::combos;
use vellum_core::{CommandKind, KeyCombo, Platform};

use crate::editor::Editor;

/// Toolbar container row.
#[component]
pub fn Toolbar(children: Element) -> Element {
    rsx! {
        div { class: "pt-toolbar", role: "toolbar", {children} }
    }
}

/// Visual grouping of related buttons.
#[component]
pub fn ButtonGroup(children: Element) -> Element {
    rsx! {
        div { class: "pt-button-group", {children} }
    }
}

/// Props for [`ToolbarButton`].
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarButtonProps {
    /// Glyph or short text shown on the button face.
    pub label: String,
    /// Tooltip text, shortcut hint included.
    pub title: String,
    #[props(default)]
    pub active: bool,
    #[props(default)]
    pub disabled: bool,
    pub onpress: EventHandler<()>,
}

/// One toolbar button. Purely presentational; the kind-specific
/// wrappers below decide state and dispatch.
#[component]
pub fn ToolbarButton(props: ToolbarButtonProps) -> Element {
    let class = if props.active {
        "pt-toolbar-button pt-active"
    } else {
        "pt-toolbar-button"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{props.title}",
            disabled: props.disabled,
            onclick: move |_| props.onpress.call(()),
            "{props.label}"
        }
    }
}

/// Props for the per-command toggle buttons.
#[derive(Props, Clone, PartialEq)]
pub struct CommandButtonProps {
    /// Editor the button dispatches through.
    pub editor: Editor,
    /// Command id within the schema.
    pub id: String,
}

/// Toggle button for one decorator.
#[component]
pub fn DecoratorButton(props: CommandButtonProps) -> Element {
    let binding = props.editor.decorator(props.id.as_str());
    let state = props.editor.state(CommandKind::Decorator, binding.id());
    let title = props
        .editor
        .schema()
        .definition
        .decorator(props.id.as_str())
        .and_then(|def| def.title.clone())
        .unwrap_or_else(|| props.id.clone());
    let label = binding
        .meta()
        .and_then(|meta| meta.icon.clone())
        .map(String::from)
        .unwrap_or_else(|| title.clone());
    let title = match binding.meta().and_then(|meta| meta.shortcut.as_ref()) {
        Some(combo) => format!(
            "{title} ({})",
            shortcut_hint(combo, props.editor.platform())
        ),
        None => title,
    };

    rsx! {
        ToolbarButton {
            label,
            title,
            active: state.active,
            disabled: state.disabled(),
            onpress: move |_| {
                if let Err(error) = binding.press() {
                    tracing::warn!(%error, "decorator press rejected");
                }
            },
        }
    }
}

/// Toggle button for one list kind.
#[component]
pub fn ListButton(props: CommandButtonProps) -> Element {
    let binding = props.editor.list(props.id.as_str());
    let state = props.editor.state(CommandKind::ListItem, binding.id());
    let title = props
        .editor
        .schema()
        .definition
        .list(props.id.as_str())
        .and_then(|def| def.title.clone())
        .unwrap_or_else(|| props.id.clone());
    let label = binding
        .meta()
        .and_then(|meta| meta.icon.clone())
        .map(String::from)
        .unwrap_or_else(|| title.clone());
    let title = match binding.meta().and_then(|meta| meta.shortcut.as_ref()) {
        Some(combo) => format!(
            "{title} ({})",
            shortcut_hint(combo, props.editor.platform())
        ),
        None => title,
    };

    rsx! {
        ToolbarButton {
            label,
            title,
            active: state.active,
            disabled: state.disabled(),
            onpress: move |_| {
                if let Err(error) = binding.press() {
                    tracing::warn!(%error, "list press rejected");
                }
            },
        }
    }
}

/// Which way a [`HistoryButton`] walks the edit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

/// Props for [`HistoryButton`].
#[derive(Props, Clone, PartialEq)]
pub struct HistoryButtonProps {
    pub editor: Editor,
    pub direction: HistoryDirection,
}

/// Undo or redo button. The shortcut hint mirrors the combos the
/// keydown path consumes.
#[component]
pub fn HistoryButton(props: HistoryButtonProps) -> Element {
    let enabled = !props.editor.read_only();
    let platform = props.editor.platform();
    let (label, name, combo) = match props.direction {
        HistoryDirection::Undo => ("↶", "Undo", combos::undo(platform)),
        HistoryDirection::Redo => ("↷", "Redo", combos::redo(platform)),
    };
    let title = format!("{name} ({})", shortcut_hint(&combo, platform));
    let binding = props.editor.history();
    let direction = props.direction;

    rsx! {
        ToolbarButton {
            label: "{label}",
            title,
            disabled: !enabled,
            onpress: move |_| match direction {
                HistoryDirection::Undo => binding.undo(),
                HistoryDirection::Redo => binding.redo(),
            },
        }
    }
}

/// Props for [`StyleDropdown`].
#[derive(Props, Clone, PartialEq)]
pub struct StyleDropdownProps {
    pub editor: Editor,
}

/// Block style selector. Selecting an entry toggles that style and
/// returns focus to the surface.
#[component]
pub fn StyleDropdown(props: StyleDropdownProps) -> Element {
    let binding = props.editor.styles();
    let active_id = props
        .editor
        .active_style()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let options: Vec<(String, String)> = binding
        .styles()
        .iter()
        .map(|style| {
            let id = style.name.to_string();
            let title = style.title.clone().unwrap_or_else(|| id.clone());
            (id, title)
        })
        .collect();

    rsx! {
        select {
            class: "pt-style-dropdown",
            aria_label: "Text style",
            value: "{active_id}",
            onchange: move |e| {
                if let Err(error) = binding.select(&e.value().into()) {
                    tracing::warn!(%error, "style select rejected");
                }
            },
            for (id, title) in options {
                option { value: "{id}", selected: id == active_id, "{title}" }
            }
        }
    }
}

/// Props for [`ShortcutPreview`].
#[derive(Props, Clone, PartialEq)]
pub struct ShortcutPreviewProps {
    /// Combo to render as keycap badges, modifiers first.
    pub combo: KeyCombo,
    pub platform: Platform,
}

/// Keycap badges for one shortcut.
#[component]
pub fn ShortcutPreview(props: ShortcutPreviewProps) -> Element {
    rsx! {
        span { class: "pt-shortcut-preview",
            for key in props.combo.display_keys(props.platform) {
                kbd { class: "pt-shortcut-key", "{key}" }
            }
        }
    }
}

/// Tooltip-style hint like `Ctrl+B`, or the run-together `⌘B` form on Mac.
pub(crate) fn shortcut_hint(combo: &KeyCombo, platform: Platform) -> String {
    let keys = combo.display_keys(platform);
    if platform.is_mac() {
        keys.concat()
    } else {
        keys.join("+")
    }
}
