//! vellum-toolbar: the reactive binding layer between declarative toolbar
//! definitions and a live portable-text editing engine.
//!
//! This crate provides:
//! - `ToolbarSchema` - an engine schema joined with presentation metadata
//! - `project` - per-command `{applicable, active}` derived from a snapshot
//! - `dispatch` - pure plan functions producing ordered instruction sequences
//! - Control bindings (`DecoratorBinding`, `StyleBinding`, `ListBinding`,
//!   `AnnotationBinding`, `HistoryBinding`) gluing the above to an explicit
//!   `EditorHandle`
//! - `forward_mutations` - republishes engine mutations to a host `ValueHolder`
//! - `ScriptedEngine` - a scriptable stand-in engine for tests and demos
//!
//! Everything here is single-threaded and synchronous: plans execute in
//! declared order inside the calling UI event handler, fire-and-forget.

pub mod controls;
pub mod dispatch;
pub mod error;
pub mod handle;
pub mod harness;
pub mod listener;
pub mod project;
pub mod schema;

pub use controls::{
    AnnotationBinding, DecoratorBinding, HistoryBinding, ListBinding, StyleBinding, SurfacePhase,
};
pub use dispatch::DispatchOp;
pub use error::DispatchError;
pub use handle::{EditorHandle, PortableTextEngine, Subscription};
pub use harness::{InstructionLog, ScriptedEngine};
pub use listener::{ValueHolder, forward_mutations};
pub use project::{ToolbarState, project};
pub use schema::{CommandMeta, CommandRef, MetaTable, ToolbarSchema};
