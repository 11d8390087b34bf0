//! vellum-core: Engine-facing contract for the portable-text toolbar kit.
//!
//! This crate provides:
//! - Schema declaration types (`SchemaDefinition` and the per-category definitions)
//! - `Instruction` - commands sent to the editing engine
//! - `EditorEvent` - the engine's notification feed
//! - `EditorSnapshot` - read-only state queries for UI reflection
//! - Keyboard shortcut types (`Key`, `Modifiers`, `KeyCombo`)
//!
//! The engine itself (document model, mutation application, undo history,
//! selection math) lives behind these types and is consumed, never authored,
//! by the crates above this one.

pub mod event;
pub mod instruction;
pub mod schema;
pub mod shortcut;
pub mod snapshot;

pub use event::{DocumentValue, EditorEvent};
pub use instruction::Instruction;
pub use schema::{
    AnnotationDefinition, CommandId, CommandKind, DecoratorDefinition, FieldDefinition,
    FieldType, FieldValueError, ListDefinition, SchemaDefinition, StyleDefinition,
};
pub use shortcut::{Key, KeyCombo, Modifiers, Platform};
pub use smol_str::SmolStr;
pub use snapshot::{EditorSnapshot, SelectionScope};
