//! Rejection reasons for toolbar dispatch.

use smol_str::SmolStr;
use thiserror::Error;
use vellum_core::{CommandId, CommandKind, FieldValueError};

/// Why a gesture was rejected before anything reached the engine.
///
/// All of these are local and recoverable: the control stays in its current
/// state (an open input surface simply does not close) and no partial
/// instruction sequence is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The control references an id the active schema does not declare.
    #[error("unknown {kind} command `{id}`")]
    UnknownCommand { kind: CommandKind, id: CommandId },

    /// A declared annotation field has no value in the submitted draft.
    #[error("missing value for field `{field}`")]
    MissingField { field: SmolStr },

    /// A submitted field value is not a plain string.
    #[error("value for field `{field}` is not a plain string")]
    NonStringField { field: SmolStr },

    /// Submit or field edits arrived while the input surface was closed.
    #[error("input surface is not open")]
    SurfaceClosed,
}

impl From<FieldValueError> for DispatchError {
    fn from(err: FieldValueError) -> Self {
        match err {
            FieldValueError::Missing(field) => Self::MissingField { field },
            FieldValueError::NotAString(field) => Self::NonStringField { field },
        }
    }
}
