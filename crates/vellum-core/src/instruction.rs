//! Instructions sent to the editing engine.
//!
//! Instructions are fire-and-forget: the binding layer sends them in plan
//! order and never waits for acknowledgment. The engine applies them
//! synchronously or queues them internally; either way, ordering within one
//! dispatch is preserved.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::CommandId;

/// A single command for the editing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Instruction {
    /// Toggle an inline decorator at the selection.
    ToggleDecorator { decorator: CommandId },
    /// Remove an inline decorator at the selection, if applied.
    RemoveDecorator { decorator: CommandId },
    /// Toggle a block style. The engine keeps styles exclusive per block, so
    /// no removal instruction exists for styles.
    ToggleStyle { style: CommandId },
    /// Toggle list membership for the selected blocks.
    ToggleListItem { list: CommandId },
    /// Wrap the selection in an annotation with the given field values.
    AddAnnotation {
        annotation: CommandId,
        values: Map<String, Value>,
    },
    /// Replace the field values of the annotation active at the selection.
    EditAnnotation {
        annotation: CommandId,
        values: Map<String, Value>,
    },
    /// Remove the annotation active at the selection.
    RemoveAnnotation { annotation: CommandId },
    /// Return input focus to the editing surface.
    Focus,
    /// Undo the last change.
    Undo,
    /// Redo the last undone change.
    Redo,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn values_suffix(
            f: &mut std::fmt::Formatter<'_>,
            values: &Map<String, Value>,
        ) -> std::fmt::Result {
            for (name, value) in values {
                write!(f, ", {name}={value}")?;
            }
            write!(f, ")")
        }

        match self {
            Self::ToggleDecorator { decorator } => write!(f, "decorator.toggle({decorator})"),
            Self::RemoveDecorator { decorator } => write!(f, "decorator.remove({decorator})"),
            Self::ToggleStyle { style } => write!(f, "style.toggle({style})"),
            Self::ToggleListItem { list } => write!(f, "list-item.toggle({list})"),
            Self::AddAnnotation { annotation, values } => {
                write!(f, "annotation.add({annotation}")?;
                values_suffix(f, values)
            }
            Self::EditAnnotation { annotation, values } => {
                write!(f, "annotation.edit({annotation}")?;
                values_suffix(f, values)
            }
            Self::RemoveAnnotation { annotation } => write!(f, "annotation.remove({annotation})"),
            Self::Focus => write!(f, "focus"),
            Self::Undo => write!(f, "history.undo"),
            Self::Redo => write!(f, "history.redo"),
        }
    }
}
