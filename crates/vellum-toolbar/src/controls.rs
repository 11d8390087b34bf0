//! Headless toolbar controls.
//!
//! Each binding composes the schema, the projector, and the dispatcher
//! around one command and one injected `EditorHandle`. Visual state is a pure
//! function of `state()`; interaction handlers call the press/submit methods.
//! Every control except `AnnotationBinding` is a stateless reflection of
//! engine state.

use std::rc::Rc;

use serde_json::{Map, Value};
use tracing::warn;
use vellum_core::{CommandId, CommandKind, StyleDefinition};

use crate::dispatch;
use crate::error::DispatchError;
use crate::handle::EditorHandle;
use crate::project::{ToolbarState, project};
use crate::schema::{CommandMeta, ToolbarSchema};

/// A toggle button bound to one decorator.
pub struct DecoratorBinding {
    handle: EditorHandle,
    schema: Rc<ToolbarSchema>,
    id: CommandId,
}

impl DecoratorBinding {
    pub fn new(handle: EditorHandle, schema: Rc<ToolbarSchema>, id: impl Into<CommandId>) -> Self {
        Self {
            handle,
            schema,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn meta(&self) -> Option<&CommandMeta> {
        self.schema.meta(CommandKind::Decorator, &self.id)
    }

    pub fn state(&self) -> ToolbarState {
        self.handle
            .read(|snap| project(&self.schema, snap, CommandKind::Decorator, &self.id))
    }

    /// Toggle the decorator, removing active mutual-exclusion siblings first.
    pub fn press(&self) -> Result<(), DispatchError> {
        let plan = self
            .handle
            .read(|snap| dispatch::decorator_toggle(&self.schema, snap, &self.id))?;
        dispatch::execute(&self.handle, plan, || {});
        Ok(())
    }
}

/// A single-select control over the schema's styles, mirroring the engine's
/// one-style-per-block rule. Selecting a value toggles that style; the engine
/// keeps styles exclusive, so no removal step is issued here.
pub struct StyleBinding {
    handle: EditorHandle,
    schema: Rc<ToolbarSchema>,
}

impl StyleBinding {
    pub fn new(handle: EditorHandle, schema: Rc<ToolbarSchema>) -> Self {
        Self { handle, schema }
    }

    pub fn styles(&self) -> &[StyleDefinition] {
        &self.schema.definition.styles
    }

    /// The style the engine reports active, the control's selected value.
    pub fn active(&self) -> Option<CommandId> {
        self.handle.read(|snap| snap.active_style())
    }

    pub fn state(&self, id: &CommandId) -> ToolbarState {
        self.handle
            .read(|snap| project(&self.schema, snap, CommandKind::Style, id))
    }

    pub fn select(&self, id: &CommandId) -> Result<(), DispatchError> {
        let plan = dispatch::style_toggle(&self.schema, id)?;
        dispatch::execute(&self.handle, plan, || {});
        Ok(())
    }
}

/// A toggle button bound to one list kind.
pub struct ListBinding {
    handle: EditorHandle,
    schema: Rc<ToolbarSchema>,
    id: CommandId,
}

impl ListBinding {
    pub fn new(handle: EditorHandle, schema: Rc<ToolbarSchema>, id: impl Into<CommandId>) -> Self {
        Self {
            handle,
            schema,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn meta(&self) -> Option<&CommandMeta> {
        self.schema.meta(CommandKind::ListItem, &self.id)
    }

    pub fn state(&self) -> ToolbarState {
        self.handle
            .read(|snap| project(&self.schema, snap, CommandKind::ListItem, &self.id))
    }

    pub fn press(&self) -> Result<(), DispatchError> {
        let plan = dispatch::list_toggle(&self.schema, &self.id)?;
        dispatch::execute(&self.handle, plan, || {});
        Ok(())
    }
}

/// Undo/redo presses. Stateless; enabled whenever the engine accepts edits.
pub struct HistoryBinding {
    handle: EditorHandle,
}

impl HistoryBinding {
    pub fn new(handle: EditorHandle) -> Self {
        Self { handle }
    }

    pub fn enabled(&self) -> bool {
        !self.handle.read(|snap| snap.read_only())
    }

    pub fn undo(&self) {
        dispatch::execute(&self.handle, dispatch::history_undo(), || {});
    }

    pub fn redo(&self) {
        dispatch::execute(&self.handle, dispatch::history_redo(), || {});
    }
}

/// Input-surface phase of an [`AnnotationBinding`].
///
/// The only transitions are open (`Idle` to `CollectingInput`) and
/// submit/cancel (back to `Idle`). Validation failures stay in
/// `CollectingInput`; there is no error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfacePhase {
    #[default]
    Idle,
    CollectingInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftMode {
    Add,
    Edit,
}

/// A two-phase control for one parameterized command.
///
/// Opening seeds a transient draft - from the engine's current values when
/// the annotation is already active at the selection (edit mode), otherwise
/// from the schema's declared defaults - and submit validates the draft
/// before dispatching `add` or `edit`. The draft is discarded on submit or
/// cancel, never persisted.
pub struct AnnotationBinding {
    handle: EditorHandle,
    schema: Rc<ToolbarSchema>,
    id: CommandId,
    phase: SurfacePhase,
    mode: DraftMode,
    draft: Map<String, Value>,
}

impl AnnotationBinding {
    pub fn new(handle: EditorHandle, schema: Rc<ToolbarSchema>, id: impl Into<CommandId>) -> Self {
        Self {
            handle,
            schema,
            id: id.into(),
            phase: SurfacePhase::Idle,
            mode: DraftMode::Add,
            draft: Map::new(),
        }
    }

    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn meta(&self) -> Option<&CommandMeta> {
        self.schema.meta(CommandKind::Annotation, &self.id)
    }

    pub fn state(&self) -> ToolbarState {
        self.handle
            .read(|snap| project(&self.schema, snap, CommandKind::Annotation, &self.id))
    }

    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == SurfacePhase::CollectingInput
    }

    /// Whether submitting will edit the active annotation instead of adding
    /// a new one. Meaningful only while open.
    pub fn editing(&self) -> bool {
        self.mode == DraftMode::Edit
    }

    /// The current draft, for rendering inputs.
    pub fn draft(&self) -> &Map<String, Value> {
        &self.draft
    }

    /// Open the input surface and seed the draft.
    pub fn open(&mut self) {
        let current = self.handle.read(|snap| snap.annotation_values(&self.id));
        match current {
            Some(values) => {
                self.draft = values;
                self.mode = DraftMode::Edit;
            }
            None => {
                self.draft = self.schema.initial_draft(&self.id);
                self.mode = DraftMode::Add;
            }
        }
        self.phase = SurfacePhase::CollectingInput;
    }

    /// Update one draft field. Ignored while the surface is closed.
    pub fn set_field(&mut self, field: &str, value: Value) {
        if self.phase != SurfacePhase::CollectingInput {
            return;
        }
        self.draft.insert(field.to_string(), value);
    }

    /// Validate the draft and dispatch `add` or `edit`.
    ///
    /// On rejection nothing is sent and the surface stays open with the
    /// draft intact; the caller simply sees the error.
    pub fn submit(&mut self) -> Result<(), DispatchError> {
        if self.phase != SurfacePhase::CollectingInput {
            return Err(DispatchError::SurfaceClosed);
        }
        let values = self.draft.clone();
        let planned = match self.mode {
            DraftMode::Add => dispatch::annotation_add(&self.schema, &self.id, values),
            DraftMode::Edit => dispatch::annotation_edit(&self.schema, &self.id, values),
        };
        let plan = match planned {
            Ok(plan) => plan,
            Err(err) => {
                warn!(annotation = %self.id, %err, "rejected annotation draft");
                return Err(err);
            }
        };

        let mut closed = false;
        dispatch::execute(&self.handle, plan, || closed = true);
        if closed {
            self.phase = SurfacePhase::Idle;
            self.draft = Map::new();
        }
        Ok(())
    }

    /// Discard the draft without dispatching. Idempotent, so outside-dismiss
    /// handlers can call it unconditionally.
    pub fn cancel(&mut self) {
        self.phase = SurfacePhase::Idle;
        self.draft = Map::new();
    }

    /// Remove the annotation active at the selection.
    pub fn remove(&self) -> Result<(), DispatchError> {
        let plan = dispatch::annotation_remove(&self.schema, &self.id)?;
        dispatch::execute(&self.handle, plan, || {});
        Ok(())
    }
}
