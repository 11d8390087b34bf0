//! Scriptable stand-in engine for tests and demos.
//!
//! `ScriptedEngine` fakes just enough engine behavior to exercise toolbar
//! flows end to end: it logs every instruction it receives, flips scripted
//! activation state, and reports a synthesized single-block document on each
//! mutation. It is not an editor - no text editing, no selection math, no
//! history model.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde_json::{Map, Value, json};
use vellum_core::{
    CommandId, CommandKind, DocumentValue, EditorEvent, EditorSnapshot, Instruction,
    SchemaDefinition, SelectionScope,
};

use crate::handle::PortableTextEngine;

/// Shared record of every instruction an engine received, in order.
#[derive(Debug, Clone, Default)]
pub struct InstructionLog {
    entries: Rc<RefCell<Vec<Instruction>>>,
}

impl InstructionLog {
    pub fn entries(&self) -> Vec<Instruction> {
        self.entries.borrow().clone()
    }

    /// The log in display form, one line per instruction.
    pub fn rendered(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|i| i.to_string()).collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, instruction: Instruction) {
        self.entries.borrow_mut().push(instruction);
    }
}

#[derive(Debug, Default)]
struct ScriptedState {
    decorators: BTreeSet<CommandId>,
    style: Option<CommandId>,
    lists: BTreeSet<CommandId>,
    annotations: BTreeMap<CommandId, Map<String, Value>>,
    selection: SelectionScope,
    read_only: bool,
    text: String,
}

/// A scriptable engine. Clones share state, so a test can keep one clone for
/// arranging and hand the other to an `EditorHandle`.
#[derive(Clone)]
pub struct ScriptedEngine {
    schema: Rc<SchemaDefinition>,
    state: Rc<RefCell<ScriptedState>>,
    log: InstructionLog,
}

impl ScriptedEngine {
    pub fn new(schema: SchemaDefinition) -> Self {
        let style = schema.style("normal").map(|s| s.name.clone());
        Self {
            schema: Rc::new(schema),
            state: Rc::new(RefCell::new(ScriptedState {
                style,
                ..Default::default()
            })),
            log: InstructionLog::default(),
        }
    }

    /// Handle on the shared instruction log.
    pub fn log(&self) -> InstructionLog {
        self.log.clone()
    }

    // === Scripted arrangement, bypassing the instruction path ===

    pub fn set_selection(&self, selection: SelectionScope) {
        self.state.borrow_mut().selection = selection;
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.state.borrow_mut().read_only = read_only;
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().text = text.into();
    }

    pub fn set_decorator_active(&self, id: impl Into<CommandId>, active: bool) {
        let id = id.into();
        let mut state = self.state.borrow_mut();
        if active {
            state.decorators.insert(id);
        } else {
            state.decorators.remove(&id);
        }
    }

    pub fn set_style(&self, id: impl Into<CommandId>) {
        self.state.borrow_mut().style = Some(id.into());
    }

    pub fn set_annotation_active(&self, id: impl Into<CommandId>, values: Map<String, Value>) {
        self.state.borrow_mut().annotations.insert(id.into(), values);
    }

    /// The document the scripted state implies: one block, one span.
    fn synthesize_value(&self) -> DocumentValue {
        let state = self.state.borrow();
        let style = state
            .style
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "normal".to_string());

        let mut marks: Vec<String> = state
            .decorators
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        let mut mark_defs = Vec::new();
        for (id, values) in &state.annotations {
            let mut def = Map::new();
            def.insert("_key".into(), json!(id.as_str()));
            def.insert("_type".into(), json!(id.as_str()));
            for (field, value) in values {
                def.insert(field.clone(), value.clone());
            }
            mark_defs.push(Value::Object(def));
            marks.push(id.as_str().to_string());
        }

        let mut block = Map::new();
        block.insert("_type".into(), json!("block"));
        block.insert("_key".into(), json!("b0"));
        block.insert("style".into(), json!(style));
        if let Some(list) = state.lists.iter().next() {
            block.insert("listItem".into(), json!(list.as_str()));
            block.insert("level".into(), json!(1));
        }
        block.insert("markDefs".into(), Value::Array(mark_defs));
        block.insert(
            "children".into(),
            json!([{
                "_type": "span",
                "_key": "s0",
                "text": state.text,
                "marks": marks,
            }]),
        );

        Value::Array(vec![Value::Object(block)])
    }

    fn mutation(&self) -> Vec<EditorEvent> {
        vec![EditorEvent::Mutation {
            value: self.synthesize_value(),
        }]
    }
}

impl PortableTextEngine for ScriptedEngine {
    fn apply(&mut self, instruction: Instruction) -> Vec<EditorEvent> {
        self.log.push(instruction.clone());
        match instruction {
            Instruction::ToggleDecorator { decorator } => {
                if self.schema.decorator(decorator.as_str()).is_none() {
                    return Vec::new(); // engine validates against its schema
                }
                {
                    let mut state = self.state.borrow_mut();
                    if !state.decorators.remove(&decorator) {
                        state.decorators.insert(decorator);
                    }
                }
                self.mutation()
            }
            Instruction::RemoveDecorator { decorator } => {
                let changed = self.state.borrow_mut().decorators.remove(&decorator);
                if changed { self.mutation() } else { Vec::new() }
            }
            Instruction::ToggleStyle { style } => {
                if self.schema.style(style.as_str()).is_none() {
                    return Vec::new();
                }
                {
                    let mut state = self.state.borrow_mut();
                    if state.style.as_ref() == Some(&style) {
                        // Toggling the active style reverts to normal.
                        state.style = self.schema.style("normal").map(|s| s.name.clone());
                    } else {
                        state.style = Some(style);
                    }
                }
                self.mutation()
            }
            Instruction::ToggleListItem { list } => {
                if self.schema.list(list.as_str()).is_none() {
                    return Vec::new();
                }
                {
                    let mut state = self.state.borrow_mut();
                    if !state.lists.remove(&list) {
                        state.lists.insert(list);
                    }
                }
                self.mutation()
            }
            Instruction::AddAnnotation { annotation, values }
            | Instruction::EditAnnotation { annotation, values } => {
                if self.schema.annotation(annotation.as_str()).is_none() {
                    return Vec::new();
                }
                self.state.borrow_mut().annotations.insert(annotation, values);
                self.mutation()
            }
            Instruction::RemoveAnnotation { annotation } => {
                let changed = self
                    .state
                    .borrow_mut()
                    .annotations
                    .remove(&annotation)
                    .is_some();
                if changed { self.mutation() } else { Vec::new() }
            }
            Instruction::Focus => vec![EditorEvent::Focused],
            // No history model; receipt is still logged above.
            Instruction::Undo | Instruction::Redo => Vec::new(),
        }
    }

    fn snapshot(&self) -> &dyn EditorSnapshot {
        self
    }
}

impl EditorSnapshot for ScriptedEngine {
    fn is_active(&self, kind: CommandKind, id: &CommandId) -> bool {
        let state = self.state.borrow();
        match kind {
            CommandKind::Decorator => state.decorators.contains(id),
            CommandKind::Style => state.style.as_ref() == Some(id),
            CommandKind::ListItem => state.lists.contains(id),
            CommandKind::Annotation => state.annotations.contains_key(id),
        }
    }

    fn active_style(&self) -> Option<CommandId> {
        self.state.borrow().style.clone()
    }

    fn selection(&self) -> SelectionScope {
        self.state.borrow().selection
    }

    fn read_only(&self) -> bool {
        self.state.borrow().read_only
    }

    fn annotation_values(&self, id: &CommandId) -> Option<Map<String, Value>> {
        self.state.borrow().annotations.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> SchemaDefinition {
        SchemaDefinition::new()
            .with_decorators(["strong", "em"])
            .with_styles(["normal", "h1"])
            .with_lists(["bullet"])
    }

    #[test]
    fn test_toggle_flips_activation() {
        let mut engine = ScriptedEngine::new(schema());
        let strong: CommandId = "strong".into();

        engine.apply(Instruction::ToggleDecorator {
            decorator: strong.clone(),
        });
        assert!(engine.is_active(CommandKind::Decorator, &strong));

        engine.apply(Instruction::ToggleDecorator {
            decorator: strong.clone(),
        });
        assert!(!engine.is_active(CommandKind::Decorator, &strong));
    }

    #[test]
    fn test_unknown_ids_are_ignored_but_logged() {
        let mut engine = ScriptedEngine::new(schema());
        let events = engine.apply(Instruction::ToggleDecorator {
            decorator: "sparkle".into(),
        });

        assert!(events.is_empty());
        assert!(!engine.is_active(CommandKind::Decorator, &"sparkle".into()));
        assert_eq!(engine.log().rendered(), vec!["decorator.toggle(sparkle)"]);
    }

    #[test]
    fn test_style_toggle_reverts_to_normal() {
        let mut engine = ScriptedEngine::new(schema());
        assert_eq!(engine.active_style(), Some("normal".into()));

        engine.apply(Instruction::ToggleStyle { style: "h1".into() });
        assert_eq!(engine.active_style(), Some("h1".into()));

        engine.apply(Instruction::ToggleStyle { style: "h1".into() });
        assert_eq!(engine.active_style(), Some("normal".into()));
    }

    #[test]
    fn test_synthesized_value_carries_state() {
        let mut engine = ScriptedEngine::new(schema());
        engine.set_text("abc");
        engine.apply(Instruction::ToggleListItem {
            list: "bullet".into(),
        });
        let events = engine.apply(Instruction::ToggleDecorator {
            decorator: "em".into(),
        });

        let [EditorEvent::Mutation { value }] = events.as_slice() else {
            panic!("expected a single mutation, got {events:?}");
        };
        assert_eq!(value[0]["listItem"], json!("bullet"));
        assert_eq!(value[0]["level"], json!(1));
        assert_eq!(value[0]["children"][0]["marks"], json!(["em"]));
        assert_eq!(value[0]["children"][0]["text"], json!("abc"));
    }
}
