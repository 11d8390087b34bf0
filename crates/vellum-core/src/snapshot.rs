//! Read-only engine state queries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{CommandId, CommandKind};

/// Where the selection currently sits, as coarsely as the toolbar needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionScope {
    /// No selection; the surface may not be focused yet.
    #[default]
    None,
    /// Collapsed selection inside text.
    Caret,
    /// Expanded selection over text.
    Range,
    /// Selection on a block object (image, embed); inline commands do not
    /// apply there.
    BlockObject,
}

impl SelectionScope {
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Range)
    }

    pub fn in_block_object(self) -> bool {
        matches!(self, Self::BlockObject)
    }
}

/// Read-only queries against the engine's current state.
///
/// Snapshots are consulted synchronously at render time and never cached
/// across renders; engine state may change between any two interactions.
pub trait EditorSnapshot {
    /// Whether the command `id` under `kind` is applied at the selection.
    fn is_active(&self, kind: CommandKind, id: &CommandId) -> bool;

    /// The style of the block at the selection, if the engine reports one.
    fn active_style(&self) -> Option<CommandId>;

    /// Coarse classification of the current selection.
    fn selection(&self) -> SelectionScope;

    /// Whether the engine currently refuses edits.
    fn read_only(&self) -> bool;

    /// Field values of the annotation `id` active at the selection, used to
    /// seed editing surfaces. `None` when that annotation is not active.
    fn annotation_values(&self, id: &CommandId) -> Option<Map<String, Value>>;
}
