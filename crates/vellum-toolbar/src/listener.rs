//! Host-facing change propagation.
//!
//! The host application observes the document through a `ValueHolder`: the
//! listener forwards every mutation's reported value into it verbatim - no
//! filtering, debouncing, or transformation - and ignores every other event
//! kind. Dropping the subscription (with the owning surface) stops the
//! forwarding.

use std::cell::RefCell;
use std::rc::Rc;

use vellum_core::{DocumentValue, EditorEvent};

use crate::handle::{EditorHandle, Subscription};

/// Shared holder for the latest document value. Starts empty; set on the
/// first mutation.
#[derive(Debug, Clone, Default)]
pub struct ValueHolder {
    inner: Rc<RefCell<Option<DocumentValue>>>,
}

impl ValueHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<DocumentValue> {
        self.inner.borrow().clone()
    }

    pub fn set(&self, value: DocumentValue) {
        *self.inner.borrow_mut() = Some(value);
    }

    /// Run `f` against the held value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(Option<&DocumentValue>) -> R) -> R {
        f(self.inner.borrow().as_ref())
    }
}

/// Forward every mutation's document value from `handle` into `holder`.
pub fn forward_mutations(handle: &EditorHandle, holder: &ValueHolder) -> Subscription {
    let holder = holder.clone();
    handle.subscribe(move |event| {
        if let EditorEvent::Mutation { value } = event {
            holder.set(value.clone());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::ScriptedEngine;
    use serde_json::json;
    use vellum_core::{Instruction, SchemaDefinition};

    #[test]
    fn test_mutations_update_holder() {
        let engine = ScriptedEngine::new(SchemaDefinition::new().with_decorators(["strong"]));
        engine.set_text("hello");
        let handle = EditorHandle::new(engine);
        let holder = ValueHolder::new();
        assert_eq!(holder.get(), None);

        let _sub = forward_mutations(&handle, &holder);
        handle.send(Instruction::ToggleDecorator {
            decorator: "strong".into(),
        });

        let value = holder.get().unwrap();
        assert_eq!(value[0]["children"][0]["text"], json!("hello"));
        assert_eq!(value[0]["children"][0]["marks"], json!(["strong"]));
    }

    #[test]
    fn test_non_mutation_events_leave_holder_unchanged() {
        let engine = ScriptedEngine::new(SchemaDefinition::new());
        let handle = EditorHandle::new(engine);
        let holder = ValueHolder::new();
        let _sub = forward_mutations(&handle, &holder);

        handle.emit(EditorEvent::Mutation {
            value: json!([{"_type": "block"}]),
        });
        handle.emit(EditorEvent::SelectionChanged);
        handle.emit(EditorEvent::Focused);
        handle.emit(EditorEvent::Blurred);

        assert_eq!(holder.get(), Some(json!([{"_type": "block"}])));
    }

    #[test]
    fn test_teardown_stops_forwarding() {
        let engine = ScriptedEngine::new(SchemaDefinition::new());
        let handle = EditorHandle::new(engine);
        let holder = ValueHolder::new();

        let sub = forward_mutations(&handle, &holder);
        handle.emit(EditorEvent::Mutation { value: json!(1) });
        drop(sub);
        handle.emit(EditorEvent::Mutation { value: json!(2) });

        assert_eq!(holder.get(), Some(json!(1)));
    }
}
