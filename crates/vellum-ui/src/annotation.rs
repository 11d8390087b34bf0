//! Annotation controls: the toolbar button, its input dialog, the
//! single-input popover variant, and the active-annotation card.

use dioxus::prelude::*;
use serde_json::Value;
use vellum_core::{AnnotationDefinition, CommandId, CommandKind, FieldType};
use vellum_toolbar::AnnotationBinding;

use crate::toolbar::{CommandButtonProps, ToolbarButton, shortcut_hint};

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; z-index: 1000; background: rgba(0,0,0,0.3); display: flex; align-items: center; justify-content: center;";

/// Button for one annotation. While the annotation is active at the
/// selection, pressing removes it; otherwise pressing opens the input
/// dialog for a fresh draft.
#[component]
pub fn AnnotationButton(props: CommandButtonProps) -> Element {
    let editor = props.editor.clone();
    let id = CommandId::from(props.id.as_str());
    let mut binding = use_signal({
        let editor = editor.clone();
        let id = id.clone();
        move || editor.annotation(id)
    });
    let mut error = use_signal(|| None::<String>);

    let state = editor.state(CommandKind::Annotation, &id);
    let definition = editor
        .schema()
        .definition
        .annotation(props.id.as_str())
        .cloned();
    let title = definition
        .as_ref()
        .and_then(|def| def.title.clone())
        .unwrap_or_else(|| props.id.clone());
    let meta = editor.schema().meta(CommandKind::Annotation, &id).cloned();
    let label = meta
        .as_ref()
        .and_then(|m| m.icon.clone())
        .map(String::from)
        .unwrap_or_else(|| title.clone());
    let button_title = match meta.as_ref().and_then(|m| m.shortcut.as_ref()) {
        Some(combo) => format!("{title} ({})", shortcut_hint(combo, editor.platform())),
        None => title.clone(),
    };

    let open = binding.read().is_open();
    let editing = binding.read().editing();
    let fields = if open {
        draft_fields(definition.as_ref(), &binding.read())
    } else {
        Vec::new()
    };
    let dialog_title = if editing {
        format!("Edit {title}")
    } else {
        format!("Create a {title}")
    };
    let submit_label = if editing { "Save" } else { "Add" }.to_string();
    let active = state.active;

    rsx! {
        ToolbarButton {
            label,
            title: button_title,
            active,
            disabled: state.disabled(),
            onpress: move |_| {
                if active {
                    if let Err(err) = binding.read().remove() {
                        tracing::warn!(%err, "annotation remove rejected");
                    }
                } else {
                    error.set(None);
                    binding.with_mut(|b| b.open());
                }
            },
        }
        if open {
            AnnotationDialog {
                title: dialog_title,
                onclose: move |_| binding.with_mut(|b| b.cancel()),
                ObjectForm {
                    fields,
                    submit_label,
                    error: error(),
                    oninput: move |(name, value): (String, String)| {
                        binding.with_mut(|b| b.set_field(&name, Value::String(value)));
                    },
                    onsubmit: move |_| match binding.with_mut(|b| b.submit()) {
                        Ok(()) => error.set(None),
                        Err(err) => error.set(Some(err.to_string())),
                    },
                    oncancel: move |_| binding.with_mut(|b| b.cancel()),
                }
            }
        }
    }
}

/// Compact annotation control: the button plus an inline popover with a
/// single input, for presets without room for a dialog.
#[component]
pub fn LinkPopoverButton(props: CommandButtonProps) -> Element {
    let editor = props.editor.clone();
    let id = CommandId::from(props.id.as_str());
    let mut binding = use_signal({
        let editor = editor.clone();
        let id = id.clone();
        move || editor.annotation(id)
    });
    let mut error = use_signal(|| None::<String>);

    let state = editor.state(CommandKind::Annotation, &id);
    let definition = editor
        .schema()
        .definition
        .annotation(props.id.as_str())
        .cloned();
    let title = definition
        .as_ref()
        .and_then(|def| def.title.clone())
        .unwrap_or_else(|| props.id.clone());
    let meta = editor.schema().meta(CommandKind::Annotation, &id).cloned();
    let label = meta
        .as_ref()
        .and_then(|m| m.icon.clone())
        .map(String::from)
        .unwrap_or_else(|| title.clone());
    let button_title = match meta.as_ref().and_then(|m| m.shortcut.as_ref()) {
        Some(combo) => format!("{title} ({})", shortcut_hint(combo, editor.platform())),
        None => title.clone(),
    };

    let open = binding.read().is_open();
    let field = definition
        .as_ref()
        .and_then(|def| def.fields.first())
        .cloned();
    let field_name = field
        .as_ref()
        .map(|f| f.name.to_string())
        .unwrap_or_else(|| "href".to_string());
    let input_kind = field
        .as_ref()
        .map(|f| input_type(f.field_type))
        .unwrap_or("url");
    let value = binding
        .read()
        .draft()
        .get(field_name.as_str())
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    rsx! {
        div { class: "pt-popover-anchor",
            ToolbarButton {
                label,
                title: button_title,
                active: state.active,
                disabled: state.disabled(),
                onpress: move |_| {
                    if open {
                        binding.with_mut(|b| b.cancel());
                    } else {
                        error.set(None);
                        binding.with_mut(|b| b.open());
                    }
                },
            }
            if open {
                div { class: "pt-popover",
                    p { class: "pt-popover-label", "Enter a URL" }
                    form {
                        class: "pt-popover-form",
                        onsubmit: move |e: FormEvent| {
                            e.prevent_default();
                            match binding.with_mut(|b| b.submit()) {
                                Ok(()) => error.set(None),
                                Err(err) => error.set(Some(err.to_string())),
                            }
                        },
                        input {
                            r#type: "{input_kind}",
                            value: "{value}",
                            autofocus: true,
                            oninput: {
                                let field_name = field_name.clone();
                                move |e: FormEvent| {
                                    binding
                                        .with_mut(|b| b.set_field(&field_name, Value::String(e.value())));
                                }
                            },
                        }
                        if let Some(err) = error() {
                            div { class: "error-message", "{err}" }
                        }
                        button { class: "pt-button-primary", r#type: "submit", "Submit" }
                    }
                }
            }
        }
    }
}

/// Edit/remove card shown while an annotation is active at the
/// selection. Flat-surface adaptation of an anchored popover: shows the
/// first field's value, an edit pencil seeding the dialog from the
/// engine, and a remove action.
#[component]
pub fn ActiveAnnotationCard(props: CommandButtonProps) -> Element {
    let editor = props.editor.clone();
    let id = CommandId::from(props.id.as_str());
    let mut binding = use_signal({
        let editor = editor.clone();
        let id = id.clone();
        move || editor.annotation(id)
    });
    let mut error = use_signal(|| None::<String>);

    let state = editor.state(CommandKind::Annotation, &id);
    let open = binding.read().is_open();
    if !state.active && !open {
        return rsx! {};
    }

    let definition = editor
        .schema()
        .definition
        .annotation(props.id.as_str())
        .cloned();
    let title = definition
        .as_ref()
        .and_then(|def| def.title.clone())
        .unwrap_or_else(|| props.id.clone());
    let values = editor.handle().read(|snap| snap.annotation_values(&id));
    let preview = definition
        .as_ref()
        .and_then(|def| def.fields.first())
        .and_then(|field| {
            values
                .as_ref()?
                .get(field.name.as_str())?
                .as_str()
                .map(String::from)
        })
        .unwrap_or_default();

    let fields = if open {
        draft_fields(definition.as_ref(), &binding.read())
    } else {
        Vec::new()
    };
    let dialog_title = format!("Edit {title}");
    let edit_title = format!("Edit {title}");
    let remove_title = format!("Remove {title}");

    rsx! {
        div { class: "pt-annotation-card",
            span { class: "pt-annotation-value", title: "{preview}", "{preview}" }
            button {
                class: "pt-toolbar-button",
                r#type: "button",
                title: "{edit_title}",
                onclick: move |_| {
                    error.set(None);
                    binding.with_mut(|b| b.open());
                },
                "✎"
            }
            button {
                class: "pt-toolbar-button",
                r#type: "button",
                title: "{remove_title}",
                onclick: move |_| {
                    if let Err(err) = binding.read().remove() {
                        tracing::warn!(%err, "annotation remove rejected");
                    }
                },
                "🗑"
            }
        }
        if open {
            AnnotationDialog {
                title: dialog_title,
                onclose: move |_| binding.with_mut(|b| b.cancel()),
                ObjectForm {
                    fields,
                    submit_label: "Save".to_string(),
                    error: error(),
                    oninput: move |(name, value): (String, String)| {
                        binding.with_mut(|b| b.set_field(&name, Value::String(value)));
                    },
                    onsubmit: move |_| match binding.with_mut(|b| b.submit()) {
                        Ok(()) => error.set(None),
                        Err(err) => error.set(Some(err.to_string())),
                    },
                    oncancel: move |_| binding.with_mut(|b| b.cancel()),
                }
            }
        }
    }
}

/// Props for [`AnnotationDialog`].
#[derive(Props, Clone, PartialEq)]
struct AnnotationDialogProps {
    title: String,
    onclose: EventHandler<()>,
    children: Element,
}

/// Fixed-position overlay dialog. Clicking the backdrop closes it;
/// clicks inside the content do not bubble out.
#[component]
fn AnnotationDialog(props: AnnotationDialogProps) -> Element {
    rsx! {
        div {
            style: "{OVERLAY_STYLE}",
            onclick: move |_| props.onclose.call(()),
            div {
                class: "pt-dialog",
                onclick: move |e| e.stop_propagation(),
                h2 { class: "pt-dialog-title", "{props.title}" }
                {props.children}
            }
        }
    }
}

/// One input row of an [`ObjectForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input_type: &'static str,
    pub value: String,
}

/// Props for [`ObjectForm`].
#[derive(Props, Clone, PartialEq)]
pub struct ObjectFormProps {
    /// Input rows, in declaration order.
    pub fields: Vec<FormField>,
    /// Label on the submit button.
    pub submit_label: String,
    /// Error from the last rejected submit, if any.
    #[props(default)]
    pub error: Option<String>,
    pub oninput: EventHandler<(String, String)>,
    pub onsubmit: EventHandler<()>,
    pub oncancel: EventHandler<()>,
}

/// Declared-fields input form for a parameterized command.
#[component]
pub fn ObjectForm(props: ObjectFormProps) -> Element {
    rsx! {
        form {
            class: "pt-object-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                props.onsubmit.call(());
            },
            for (index, field) in props.fields.iter().enumerate() {
                div { class: "form-field", key: "{field.name}",
                    label { r#for: "{field.name}", "{field.label}" }
                    input {
                        id: "{field.name}",
                        name: "{field.name}",
                        r#type: "{field.input_type}",
                        value: "{field.value}",
                        autofocus: index == 0,
                        oninput: {
                            let name = field.name.clone();
                            move |e: FormEvent| props.oninput.call((name.clone(), e.value()))
                        },
                    }
                }
            }
            if let Some(error) = props.error.as_ref() {
                div { class: "error-message", "{error}" }
            }
            div { class: "dialog-actions",
                button { class: "pt-button-primary", r#type: "submit", "{props.submit_label}" }
                button {
                    class: "pt-button-ghost",
                    r#type: "button",
                    onclick: move |_| props.oncancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

fn input_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "text",
        FieldType::Url => "url",
    }
}

fn draft_fields(
    definition: Option<&AnnotationDefinition>,
    binding: &AnnotationBinding,
) -> Vec<FormField> {
    definition
        .into_iter()
        .flat_map(|def| def.fields.iter())
        .map(|field| FormField {
            name: field.name.to_string(),
            label: field.title.clone(),
            input_type: input_type(field.field_type),
            value: binding
                .draft()
                .get(field.name.as_str())
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use vellum_core::{AnnotationDefinition, FieldDefinition, FieldType, SchemaDefinition};
    use vellum_toolbar::schema::{CommandMeta, MetaTable};
    use vellum_toolbar::{AnnotationBinding, EditorHandle, ScriptedEngine, ToolbarSchema};

    use super::{draft_fields, input_type};

    #[test]
    fn test_field_types_map_to_input_kinds() {
        assert_eq!(input_type(FieldType::Text), "text");
        assert_eq!(input_type(FieldType::Url), "url");
    }

    #[test]
    fn test_draft_rows_follow_declaration_order_and_defaults() {
        let definition = SchemaDefinition::new().with_annotations([
            AnnotationDefinition::new("link")
                .with_title("Link")
                .with_field(FieldDefinition::new("name", "Name"))
                .with_field(FieldDefinition::new("href", "URL").with_type(FieldType::Url)),
        ]);
        let meta = MetaTable::new().with_annotation(
            "link",
            CommandMeta::new().with_default("href", "https://example.com"),
        );
        let schema = Rc::new(ToolbarSchema::new(definition.clone(), meta));
        let engine = ScriptedEngine::new(definition);
        let handle = EditorHandle::new(engine);
        let mut binding = AnnotationBinding::new(handle, Rc::clone(&schema), "link");
        binding.open();

        let annotation = schema.definition.annotation("link").cloned();
        let rows = draft_fields(annotation.as_ref(), &binding);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "name");
        assert_eq!(rows[0].label, "Name");
        assert_eq!(rows[0].value, "");
        assert_eq!(rows[1].input_type, "url");
        assert_eq!(rows[1].value, "https://example.com");
    }
}
