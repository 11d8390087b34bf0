//! Derivation of per-command UI state from an engine snapshot.
//!
//! Projection is a pure read: recomputed on every render, never stored or
//! diffed. The projector reports whatever the snapshot reports; it does not
//! enforce mutual exclusion (that is the dispatcher's job when applying
//! changes).

use vellum_core::{CommandId, CommandKind, EditorSnapshot, SelectionScope};

use crate::schema::ToolbarSchema;

/// Derived UI state for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarState {
    /// Whether the command may legally be invoked right now.
    pub applicable: bool,
    /// Whether the engine reports the command applied at the selection.
    pub active: bool,
}

impl ToolbarState {
    /// The state of a command the schema does not know.
    pub const INERT: Self = Self {
        applicable: false,
        active: false,
    };

    /// Disabled rendering state.
    pub fn disabled(self) -> bool {
        !self.applicable
    }
}

/// Compute `{applicable, active}` for `id` under `kind`.
///
/// Ids absent from the schema are inert, never an error. Applicability:
/// everything is inapplicable while the engine is read-only; annotations
/// additionally need an expanded selection (or a caret on an already-active
/// annotation, the edit case) and never apply inside a block object;
/// decorators, styles, and lists stay applicable with caret, range, or no
/// selection.
pub fn project(
    schema: &ToolbarSchema,
    snapshot: &dyn EditorSnapshot,
    kind: CommandKind,
    id: &CommandId,
) -> ToolbarState {
    if !schema.definition.contains(kind, id.as_str()) {
        return ToolbarState::INERT;
    }

    let active = match kind {
        CommandKind::Style => snapshot.active_style().is_some_and(|style| style == *id),
        _ => snapshot.is_active(kind, id),
    };

    if snapshot.read_only() {
        // Still reflect activation so a disabled toolbar reads truthfully.
        return ToolbarState {
            applicable: false,
            active,
        };
    }

    let applicable = match kind {
        CommandKind::Annotation => {
            let scope = snapshot.selection();
            !scope.in_block_object()
                && (scope.is_expanded() || (scope == SelectionScope::Caret && active))
        }
        _ => true,
    };

    ToolbarState { applicable, active }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};
    use vellum_core::{AnnotationDefinition, SchemaDefinition};

    struct FakeSnapshot {
        active: Vec<(CommandKind, CommandId)>,
        style: Option<CommandId>,
        selection: SelectionScope,
        read_only: bool,
    }

    impl Default for FakeSnapshot {
        fn default() -> Self {
            Self {
                active: Vec::new(),
                style: None,
                selection: SelectionScope::Caret,
                read_only: false,
            }
        }
    }

    impl EditorSnapshot for FakeSnapshot {
        fn is_active(&self, kind: CommandKind, id: &CommandId) -> bool {
            self.active.iter().any(|(k, i)| *k == kind && i == id)
        }

        fn active_style(&self) -> Option<CommandId> {
            self.style.clone()
        }

        fn selection(&self) -> SelectionScope {
            self.selection
        }

        fn read_only(&self) -> bool {
            self.read_only
        }

        fn annotation_values(&self, _id: &CommandId) -> Option<Map<String, Value>> {
            None
        }
    }

    fn schema() -> ToolbarSchema {
        ToolbarSchema::bare(
            SchemaDefinition::new()
                .with_decorators(["strong", "em"])
                .with_styles(["normal", "h1"])
                .with_lists(["bullet"])
                .with_annotations([AnnotationDefinition::new("link")]),
        )
    }

    #[test]
    fn test_unknown_id_is_inert() {
        let snap = FakeSnapshot::default();
        let state = project(&schema(), &snap, CommandKind::Decorator, &"comment".into());
        assert_eq!(state, ToolbarState::INERT);

        // Known id under the wrong category is just as inert.
        let state = project(&schema(), &snap, CommandKind::Style, &"strong".into());
        assert_eq!(state, ToolbarState::INERT);
    }

    #[test]
    fn test_active_follows_snapshot() {
        let snap = FakeSnapshot {
            active: vec![(CommandKind::Decorator, "strong".into())],
            ..Default::default()
        };
        let strong = project(&schema(), &snap, CommandKind::Decorator, &"strong".into());
        assert!(strong.applicable && strong.active);

        let em = project(&schema(), &snap, CommandKind::Decorator, &"em".into());
        assert!(em.applicable && !em.active);
    }

    #[test]
    fn test_style_uses_active_style() {
        let snap = FakeSnapshot {
            style: Some("h1".into()),
            ..Default::default()
        };
        assert!(project(&schema(), &snap, CommandKind::Style, &"h1".into()).active);
        assert!(!project(&schema(), &snap, CommandKind::Style, &"normal".into()).active);
    }

    #[test]
    fn test_read_only_disables_everything() {
        let snap = FakeSnapshot {
            active: vec![(CommandKind::Decorator, "strong".into())],
            read_only: true,
            ..Default::default()
        };
        let state = project(&schema(), &snap, CommandKind::Decorator, &"strong".into());
        assert!(!state.applicable);
        assert!(state.active); // still reflected while disabled
    }

    #[test]
    fn test_annotation_needs_range_or_active_caret() {
        let mut snap = FakeSnapshot::default();

        // Caret, not active: nothing to annotate.
        assert!(project(&schema(), &snap, CommandKind::Annotation, &"link".into()).disabled());

        // Expanded selection: applicable.
        snap.selection = SelectionScope::Range;
        assert!(project(&schema(), &snap, CommandKind::Annotation, &"link".into()).applicable);

        // Caret on an active link: edit case, applicable.
        snap.selection = SelectionScope::Caret;
        snap.active = vec![(CommandKind::Annotation, "link".into())];
        let state = project(&schema(), &snap, CommandKind::Annotation, &"link".into());
        assert!(state.applicable && state.active);

        // Inside a block object: never applicable.
        snap.selection = SelectionScope::BlockObject;
        assert!(project(&schema(), &snap, CommandKind::Annotation, &"link".into()).disabled());
    }

    #[test]
    fn test_decorators_stay_applicable_without_selection() {
        let snap = FakeSnapshot {
            selection: SelectionScope::None,
            ..Default::default()
        };
        assert!(project(&schema(), &snap, CommandKind::Decorator, &"strong".into()).applicable);
        assert!(project(&schema(), &snap, CommandKind::Style, &"h1".into()).applicable);
        assert!(project(&schema(), &snap, CommandKind::ListItem, &"bullet".into()).applicable);
    }
}
