//! Instruction planning for toolbar gestures.
//!
//! Plan functions are pure: given the schema and a snapshot they produce the
//! ordered operations one gesture implies, or reject it before anything is
//! sent. `execute` then walks the plan fire-and-forget; the engine applies
//! instructions synchronously or queues them internally, and this layer never
//! waits for acknowledgment.

use serde_json::{Map, Value};
use tracing::debug;
use vellum_core::shortcut::combos;
use vellum_core::{CommandId, CommandKind, EditorSnapshot, Instruction, Key, Modifiers, Platform};

use crate::error::DispatchError;
use crate::handle::EditorHandle;
use crate::schema::ToolbarSchema;

/// One step of a dispatch plan.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOp {
    /// Send an instruction to the engine.
    Send(Instruction),
    /// Close the gesturing control's input surface. Layer-owned state, not
    /// an engine instruction, but sequenced with them so the surface closes
    /// between the annotation instruction and the focus restore.
    CloseSurface,
}

fn unknown(kind: CommandKind, id: &CommandId) -> DispatchError {
    DispatchError::UnknownCommand {
        kind,
        id: id.clone(),
    }
}

/// Plan a decorator toggle.
///
/// When the decorator belongs to a mutual-exclusion group and is not active,
/// every other currently-active member is removed first, in schema
/// declaration order. Toggling an already-active member plans no removals.
pub fn decorator_toggle(
    schema: &ToolbarSchema,
    snapshot: &dyn EditorSnapshot,
    id: &CommandId,
) -> Result<Vec<DispatchOp>, DispatchError> {
    if schema.definition.decorator(id.as_str()).is_none() {
        return Err(unknown(CommandKind::Decorator, id));
    }

    let mut plan = Vec::new();
    if !snapshot.is_active(CommandKind::Decorator, id) {
        for sibling in schema.exclusive_decorators(id) {
            if snapshot.is_active(CommandKind::Decorator, sibling) {
                plan.push(DispatchOp::Send(Instruction::RemoveDecorator {
                    decorator: sibling.clone(),
                }));
            }
        }
    }
    plan.push(DispatchOp::Send(Instruction::ToggleDecorator {
        decorator: id.clone(),
    }));
    plan.push(DispatchOp::Send(Instruction::Focus));
    Ok(plan)
}

/// Plan a style toggle. The engine keeps styles exclusive per block, so no
/// removal step is planned here, unlike decorator groups.
pub fn style_toggle(
    schema: &ToolbarSchema,
    id: &CommandId,
) -> Result<Vec<DispatchOp>, DispatchError> {
    if schema.definition.style(id.as_str()).is_none() {
        return Err(unknown(CommandKind::Style, id));
    }
    Ok(vec![
        DispatchOp::Send(Instruction::ToggleStyle { style: id.clone() }),
        DispatchOp::Send(Instruction::Focus),
    ])
}

/// Plan a list-membership toggle.
pub fn list_toggle(
    schema: &ToolbarSchema,
    id: &CommandId,
) -> Result<Vec<DispatchOp>, DispatchError> {
    if schema.definition.list(id.as_str()).is_none() {
        return Err(unknown(CommandKind::ListItem, id));
    }
    Ok(vec![
        DispatchOp::Send(Instruction::ToggleListItem { list: id.clone() }),
        DispatchOp::Send(Instruction::Focus),
    ])
}

/// Plan an annotation creation from submitted field values.
///
/// The values are checked against the annotation's declared fields before
/// anything is planned; on rejection no partial sequence exists. The surface
/// closes after the add and before the focus restore.
pub fn annotation_add(
    schema: &ToolbarSchema,
    id: &CommandId,
    values: Map<String, Value>,
) -> Result<Vec<DispatchOp>, DispatchError> {
    let def = schema
        .definition
        .annotation(id.as_str())
        .ok_or_else(|| unknown(CommandKind::Annotation, id))?;
    def.check_values(&values)?;
    Ok(vec![
        DispatchOp::Send(Instruction::AddAnnotation {
            annotation: id.clone(),
            values,
        }),
        DispatchOp::CloseSurface,
        DispatchOp::Send(Instruction::Focus),
    ])
}

/// Plan replacing the field values of an already-applied annotation. Same
/// validation and sequencing as [`annotation_add`].
pub fn annotation_edit(
    schema: &ToolbarSchema,
    id: &CommandId,
    values: Map<String, Value>,
) -> Result<Vec<DispatchOp>, DispatchError> {
    let def = schema
        .definition
        .annotation(id.as_str())
        .ok_or_else(|| unknown(CommandKind::Annotation, id))?;
    def.check_values(&values)?;
    Ok(vec![
        DispatchOp::Send(Instruction::EditAnnotation {
            annotation: id.clone(),
            values,
        }),
        DispatchOp::CloseSurface,
        DispatchOp::Send(Instruction::Focus),
    ])
}

/// Plan removing the annotation active at the selection. No params needed.
pub fn annotation_remove(
    schema: &ToolbarSchema,
    id: &CommandId,
) -> Result<Vec<DispatchOp>, DispatchError> {
    if schema.definition.annotation(id.as_str()).is_none() {
        return Err(unknown(CommandKind::Annotation, id));
    }
    Ok(vec![
        DispatchOp::Send(Instruction::RemoveAnnotation {
            annotation: id.clone(),
        }),
        DispatchOp::Send(Instruction::Focus),
    ])
}

/// Plan an undo press.
pub fn history_undo() -> Vec<DispatchOp> {
    vec![
        DispatchOp::Send(Instruction::Undo),
        DispatchOp::Send(Instruction::Focus),
    ]
}

/// Plan a redo press.
pub fn history_redo() -> Vec<DispatchOp> {
    vec![
        DispatchOp::Send(Instruction::Redo),
        DispatchOp::Send(Instruction::Focus),
    ]
}

/// Resolve a keydown from the editing surface into the plan it implies:
/// history combos first, then the schema's declared shortcuts.
///
/// `None` means the event is not a binding and the platform default should
/// run. Annotation shortcuts also resolve to `None` here - parameterized
/// commands need an input surface, which is the rendering layer's concern.
/// Nothing resolves while the engine is read-only.
pub fn keydown_plan(
    schema: &ToolbarSchema,
    snapshot: &dyn EditorSnapshot,
    key: &Key,
    modifiers: Modifiers,
    platform: Platform,
) -> Option<Vec<DispatchOp>> {
    if snapshot.read_only() {
        return None;
    }
    if combos::undo(platform).matches(key, modifiers) {
        return Some(history_undo());
    }
    if combos::redo(platform).matches(key, modifiers) {
        return Some(history_redo());
    }
    let command = schema.command_for(key, modifiers)?;
    match command.kind {
        CommandKind::Decorator => decorator_toggle(schema, snapshot, &command.id).ok(),
        CommandKind::Style => style_toggle(schema, &command.id).ok(),
        CommandKind::ListItem => list_toggle(schema, &command.id).ok(),
        CommandKind::Annotation => None,
    }
}

/// Execute a plan against `handle`, in order. `close_surface` runs once per
/// `CloseSurface` op; controls without an input surface pass a no-op.
pub fn execute(handle: &EditorHandle, plan: Vec<DispatchOp>, mut close_surface: impl FnMut()) {
    debug!(ops = plan.len(), "executing dispatch plan");
    for op in plan {
        match op {
            DispatchOp::Send(instruction) => handle.send(instruction),
            DispatchOp::CloseSurface => close_surface(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CommandMeta, MetaTable};
    use serde_json::json;
    use vellum_core::{AnnotationDefinition, FieldDefinition, SchemaDefinition, SelectionScope};

    #[derive(Default)]
    struct FakeSnapshot {
        active_decorators: Vec<CommandId>,
        read_only: bool,
    }

    impl EditorSnapshot for FakeSnapshot {
        fn is_active(&self, kind: CommandKind, id: &CommandId) -> bool {
            kind == CommandKind::Decorator && self.active_decorators.contains(id)
        }
        fn active_style(&self) -> Option<CommandId> {
            None
        }
        fn selection(&self) -> SelectionScope {
            SelectionScope::Range
        }
        fn read_only(&self) -> bool {
            self.read_only
        }
        fn annotation_values(&self, _id: &CommandId) -> Option<Map<String, Value>> {
            None
        }
    }

    fn alignment_schema() -> ToolbarSchema {
        let definition = SchemaDefinition::new().with_decorators([
            "text-left",
            "text-center",
            "text-right",
            "text-justify",
        ]);
        let group = ["text-left", "text-center", "text-right", "text-justify"];
        let mut meta = MetaTable::new();
        for member in group {
            meta = meta.with_decorator(
                member,
                CommandMeta::new().exclusive_with(group.iter().copied().filter(|m| *m != member)),
            );
        }
        ToolbarSchema::new(definition, meta)
    }

    fn rendered(plan: &[DispatchOp]) -> Vec<String> {
        plan.iter()
            .map(|op| match op {
                DispatchOp::Send(i) => i.to_string(),
                DispatchOp::CloseSurface => "close-input-surface".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_exclusion_removals_precede_toggle() {
        let schema = alignment_schema();
        // Two group members active at once; both must be removed, schema order.
        let snap = FakeSnapshot {
            active_decorators: vec!["text-right".into(), "text-left".into()],
            ..Default::default()
        };
        let plan = decorator_toggle(&schema, &snap, &"text-center".into()).unwrap();
        insta::assert_compact_debug_snapshot!(
            rendered(&plan),
            @r#"["decorator.remove(text-left)", "decorator.remove(text-right)", "decorator.toggle(text-center)", "focus"]"#
        );
    }

    #[test]
    fn test_active_member_toggles_without_removals() {
        let schema = alignment_schema();
        let snap = FakeSnapshot {
            active_decorators: vec!["text-center".into()],
            ..Default::default()
        };
        let plan = decorator_toggle(&schema, &snap, &"text-center".into()).unwrap();
        insta::assert_compact_debug_snapshot!(
            rendered(&plan),
            @r#"["decorator.toggle(text-center)", "focus"]"#
        );
    }

    #[test]
    fn test_plain_decorator_ignores_other_actives() {
        let definition = SchemaDefinition::new().with_decorators(["strong", "em"]);
        let schema = ToolbarSchema::bare(definition);
        let snap = FakeSnapshot {
            active_decorators: vec!["em".into()],
            ..Default::default()
        };
        let plan = decorator_toggle(&schema, &snap, &"strong".into()).unwrap();
        assert_eq!(
            rendered(&plan),
            vec!["decorator.toggle(strong)", "focus"]
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        let schema = ToolbarSchema::bare(SchemaDefinition::new());
        let snap = FakeSnapshot::default();
        let err = decorator_toggle(&schema, &snap, &"strong".into()).unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownCommand {
                kind: CommandKind::Decorator,
                id: "strong".into(),
            }
        );
    }

    #[test]
    fn test_style_plan_has_no_removals() {
        let schema =
            ToolbarSchema::bare(SchemaDefinition::new().with_styles(["normal", "h1", "h2"]));
        let plan = style_toggle(&schema, &"h2".into()).unwrap();
        assert_eq!(rendered(&plan), vec!["style.toggle(h2)", "focus"]);
    }

    #[test]
    fn test_annotation_add_sequences_close_before_focus() {
        let schema = ToolbarSchema::bare(SchemaDefinition::new().with_annotations([
            AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL")),
        ]));
        let mut values = Map::new();
        values.insert("href".into(), json!("https://example.com"));

        let plan = annotation_add(&schema, &"link".into(), values).unwrap();
        insta::assert_compact_debug_snapshot!(
            rendered(&plan),
            @r#"["annotation.add(link, href=\"https://example.com\")", "close-input-surface", "focus"]"#
        );
    }

    #[test]
    fn test_annotation_add_rejects_bad_values() {
        let schema = ToolbarSchema::bare(SchemaDefinition::new().with_annotations([
            AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL")),
        ]));

        let mut values = Map::new();
        values.insert("href".into(), json!(17));
        assert_eq!(
            annotation_add(&schema, &"link".into(), values),
            Err(DispatchError::NonStringField {
                field: "href".into()
            })
        );

        assert_eq!(
            annotation_add(&schema, &"link".into(), Map::new()),
            Err(DispatchError::MissingField {
                field: "href".into()
            })
        );
    }

    #[test]
    fn test_history_plans() {
        assert_eq!(rendered(&history_undo()), vec!["history.undo", "focus"]);
        assert_eq!(rendered(&history_redo()), vec!["history.redo", "focus"]);
    }

    #[test]
    fn test_keydown_routing() {
        use vellum_core::Platform;

        let definition = SchemaDefinition::new()
            .with_decorators(["strong"])
            .with_annotations([AnnotationDefinition::new("link")
                .with_field(FieldDefinition::new("href", "URL"))]);
        let platform = Platform::Other;
        let meta = MetaTable::new()
            .with_decorator(
                "strong",
                CommandMeta::new().with_shortcut(vellum_core::shortcut::combos::bold(platform)),
            )
            .with_annotation(
                "link",
                CommandMeta::new().with_shortcut(vellum_core::shortcut::combos::link(platform)),
            );
        let schema = ToolbarSchema::new(definition, meta);
        let snap = FakeSnapshot::default();

        let plan = keydown_plan(&schema, &snap, &Key::character("b"), Modifiers::CTRL, platform)
            .unwrap();
        assert_eq!(rendered(&plan), vec!["decorator.toggle(strong)", "focus"]);

        let plan =
            keydown_plan(&schema, &snap, &Key::character("z"), Modifiers::CTRL, platform).unwrap();
        assert_eq!(rendered(&plan), vec!["history.undo", "focus"]);

        // Annotation shortcuts need an input surface; not handled here.
        assert!(
            keydown_plan(&schema, &snap, &Key::character("k"), Modifiers::CTRL, platform).is_none()
        );
        // Unbound keys pass through.
        assert!(
            keydown_plan(&schema, &snap, &Key::character("q"), Modifiers::CTRL, platform).is_none()
        );
    }

    #[test]
    fn test_keydown_resolves_nothing_while_read_only() {
        use vellum_core::Platform;

        let platform = Platform::Other;
        let definition = SchemaDefinition::new().with_decorators(["strong"]);
        let meta = MetaTable::new().with_decorator(
            "strong",
            CommandMeta::new().with_shortcut(vellum_core::shortcut::combos::bold(platform)),
        );
        let schema = ToolbarSchema::new(definition, meta);
        let snap = FakeSnapshot {
            read_only: true,
            ..Default::default()
        };

        // Bound shortcut and the history combos alike: no plan on a
        // read-only engine.
        for key in ["b", "z"] {
            assert!(
                keydown_plan(&schema, &snap, &Key::character(key), Modifiers::CTRL, platform)
                    .is_none()
            );
        }
    }
}
