//! The `Editor` handle components receive as a prop.
//!
//! `Editor` bundles the engine handle, the toolbar schema, the forwarded
//! document value, and a revision signal that engine events bump. Components
//! read projected state through the methods here; every read touches the
//! revision signal, so any component that renders from an `Editor` re-renders
//! when the engine reports a change. Dispatch goes through the same handle,
//! making the whole loop explicit: no component reaches for ambient context.

use std::rc::Rc;

use dioxus::prelude::*;
use vellum_core::{CommandId, CommandKind, DocumentValue, Key, KeyCombo, Modifiers, Platform};
use vellum_toolbar::{
    AnnotationBinding, DecoratorBinding, EditorHandle, HistoryBinding, ListBinding,
    PortableTextEngine, StyleBinding, Subscription, ToolbarSchema, ToolbarState, ValueHolder,
    dispatch, forward_mutations, project,
};

/// Explicit wiring between one engine and the components rendering it.
///
/// Cheap to clone; clones share the engine, schema, and revision signal.
#[derive(Clone)]
pub struct Editor {
    handle: EditorHandle,
    schema: Rc<ToolbarSchema>,
    platform: Platform,
    value: ValueHolder,
    revision: Signal<u64>,
    _feeds: Rc<(Subscription, Subscription)>,
}

impl PartialEq for Editor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.schema, &other.schema) && self.revision == other.revision
    }
}

impl Editor {
    /// Wire an engine up for rendering. Normally called through
    /// [`use_editor`], which owns the revision signal.
    pub fn new(
        schema: Rc<ToolbarSchema>,
        engine: impl PortableTextEngine + 'static,
        platform: Platform,
        mut revision: Signal<u64>,
    ) -> Self {
        let handle = EditorHandle::new(engine);
        let value = ValueHolder::new();
        let mutations = forward_mutations(&handle, &value);
        // Any engine event can change projection, so all of them mark dirty.
        let wake = handle.subscribe(move |_event| revision += 1);
        Self {
            handle,
            schema,
            platform,
            value,
            revision,
            _feeds: Rc::new((mutations, wake)),
        }
    }

    pub fn handle(&self) -> &EditorHandle {
        &self.handle
    }

    pub fn schema(&self) -> &Rc<ToolbarSchema> {
        &self.schema
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The engine's last reported document value.
    pub fn value(&self) -> Option<DocumentValue> {
        self.observe();
        self.value.get()
    }

    /// Projected `{applicable, active}` for one command.
    pub fn state(&self, kind: CommandKind, id: &CommandId) -> ToolbarState {
        self.observe();
        self.handle
            .read(|snap| project(&self.schema, snap, kind, id))
    }

    pub fn active_style(&self) -> Option<CommandId> {
        self.observe();
        self.handle.read(|snap| snap.active_style())
    }

    pub fn read_only(&self) -> bool {
        self.observe();
        self.handle.read(|snap| snap.read_only())
    }

    pub fn shortcut(&self, kind: CommandKind, id: &CommandId) -> Option<&KeyCombo> {
        self.schema.shortcut(kind, id)
    }

    // === Bindings, constructed on demand ===

    pub fn decorator(&self, id: impl Into<CommandId>) -> DecoratorBinding {
        DecoratorBinding::new(self.handle.clone(), Rc::clone(&self.schema), id)
    }

    pub fn styles(&self) -> StyleBinding {
        StyleBinding::new(self.handle.clone(), Rc::clone(&self.schema))
    }

    pub fn list(&self, id: impl Into<CommandId>) -> ListBinding {
        ListBinding::new(self.handle.clone(), Rc::clone(&self.schema), id)
    }

    pub fn annotation(&self, id: impl Into<CommandId>) -> AnnotationBinding {
        AnnotationBinding::new(self.handle.clone(), Rc::clone(&self.schema), id)
    }

    pub fn history(&self) -> HistoryBinding {
        HistoryBinding::new(self.handle.clone())
    }

    /// Route a keydown through the shortcut table. Returns whether the event
    /// was consumed, so the caller can prevent the default action.
    pub fn keydown(&self, key: &Key, modifiers: Modifiers) -> bool {
        let plan = self.handle.read(|snap| {
            dispatch::keydown_plan(&self.schema, snap, key, modifiers, self.platform)
        });
        match plan {
            Some(plan) => {
                dispatch::execute(&self.handle, plan, || {});
                true
            }
            None => false,
        }
    }

    /// Register the calling component on the revision signal.
    fn observe(&self) {
        self.revision.read();
    }
}

/// Hook wiring an engine into the component tree.
///
/// `init` runs once, on first render; the returned [`Editor`] is cached for
/// the life of the component and cheap to clone into children.
pub fn use_editor<E, F>(init: F) -> Editor
where
    E: PortableTextEngine + 'static,
    F: FnOnce() -> (Rc<ToolbarSchema>, E, Platform),
{
    let revision = use_signal(|| 0u64);
    use_hook(move || {
        let (schema, engine, platform) = init();
        Editor::new(schema, engine, platform, revision)
    })
}
