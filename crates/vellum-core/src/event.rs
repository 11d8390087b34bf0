//! The engine's notification feed.

use serde::{Deserialize, Serialize};

/// The current document value as reported by the engine: a JSON array of
/// portable-text blocks. Opaque to the binding layer, which forwards it
/// without transformation; only the rendering surface looks inside.
pub type DocumentValue = serde_json::Value;

/// An event emitted by the editing engine.
///
/// The change listener forwards `Mutation` values to the host and ignores
/// every other kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EditorEvent {
    /// The document content changed; carries the full new value.
    Mutation { value: DocumentValue },
    /// The selection moved without a content change.
    SelectionChanged,
    /// The editing surface gained focus.
    Focused,
    /// The editing surface lost focus.
    Blurred,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutation_wire_shape() {
        let event: EditorEvent =
            serde_json::from_value(json!({"type": "mutation", "value": [{"_type": "block"}]}))
                .unwrap();
        match event {
            EditorEvent::Mutation { value } => assert_eq!(value, json!([{"_type": "block"}])),
            other => panic!("wrong event kind: {other:?}"),
        }
    }
}
