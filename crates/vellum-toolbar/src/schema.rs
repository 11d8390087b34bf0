//! Toolbar-facing schema: the engine schema joined with presentation metadata.
//!
//! Presentation concerns (icons, shortcuts, mutual-exclusion groups, default
//! draft values) never reach the engine; they are declared here as an
//! id-keyed table applied at construction time, so adding a command means two
//! declarations and zero branching code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smol_str::SmolStr;
use vellum_core::{CommandId, CommandKind, Key, KeyCombo, Modifiers, SchemaDefinition};

/// Presentation metadata for one command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandMeta {
    /// Opaque icon reference, resolved by the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<KeyCombo>,

    /// Commands in the same category that must not stay active alongside
    /// this one. The dispatcher removes active members before toggling.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mutually_exclusive: Vec<CommandId>,

    /// Values seeding a fresh annotation draft, overriding the empty-string
    /// default per declared field.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub default_values: Map<String, Value>,
}

impl CommandMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, icon: impl Into<SmolStr>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_shortcut(mut self, shortcut: KeyCombo) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn exclusive_with<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CommandId>,
    {
        self.mutually_exclusive = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_values
            .insert(field.into(), Value::String(value.into()));
        self
    }
}

/// Presentation metadata keyed by category and id.
///
/// Commands without an entry fall back to bare defaults; entries for ids the
/// schema does not declare are simply never consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaTable {
    #[serde(default)]
    pub decorators: BTreeMap<CommandId, CommandMeta>,
    #[serde(default)]
    pub styles: BTreeMap<CommandId, CommandMeta>,
    #[serde(default)]
    pub lists: BTreeMap<CommandId, CommandMeta>,
    #[serde(default)]
    pub annotations: BTreeMap<CommandId, CommandMeta>,
}

impl MetaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decorator(mut self, id: impl Into<CommandId>, meta: CommandMeta) -> Self {
        self.decorators.insert(id.into(), meta);
        self
    }

    pub fn with_style(mut self, id: impl Into<CommandId>, meta: CommandMeta) -> Self {
        self.styles.insert(id.into(), meta);
        self
    }

    pub fn with_list(mut self, id: impl Into<CommandId>, meta: CommandMeta) -> Self {
        self.lists.insert(id.into(), meta);
        self
    }

    pub fn with_annotation(mut self, id: impl Into<CommandId>, meta: CommandMeta) -> Self {
        self.annotations.insert(id.into(), meta);
        self
    }

    pub fn get(&self, kind: CommandKind, id: &CommandId) -> Option<&CommandMeta> {
        match kind {
            CommandKind::Decorator => self.decorators.get(id),
            CommandKind::Style => self.styles.get(id),
            CommandKind::ListItem => self.lists.get(id),
            CommandKind::Annotation => self.annotations.get(id),
        }
    }
}

/// A category-qualified command reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandRef {
    pub kind: CommandKind,
    pub id: CommandId,
}

impl CommandRef {
    pub fn new(kind: CommandKind, id: impl Into<CommandId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn decorator(id: impl Into<CommandId>) -> Self {
        Self::new(CommandKind::Decorator, id)
    }

    pub fn style(id: impl Into<CommandId>) -> Self {
        Self::new(CommandKind::Style, id)
    }

    pub fn list_item(id: impl Into<CommandId>) -> Self {
        Self::new(CommandKind::ListItem, id)
    }

    pub fn annotation(id: impl Into<CommandId>) -> Self {
        Self::new(CommandKind::Annotation, id)
    }
}

/// An engine schema joined with its presentation metadata.
///
/// Controls reference this (shared behind `Rc`); it owns nothing the engine
/// needs and is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolbarSchema {
    pub definition: SchemaDefinition,
    #[serde(default)]
    pub meta: MetaTable,
}

impl ToolbarSchema {
    pub fn new(definition: SchemaDefinition, meta: MetaTable) -> Self {
        Self { definition, meta }
    }

    /// A schema with no presentation metadata at all.
    pub fn bare(definition: SchemaDefinition) -> Self {
        Self {
            definition,
            meta: MetaTable::new(),
        }
    }

    pub fn meta(&self, kind: CommandKind, id: &CommandId) -> Option<&CommandMeta> {
        self.meta.get(kind, id)
    }

    pub fn shortcut(&self, kind: CommandKind, id: &CommandId) -> Option<&KeyCombo> {
        self.meta.get(kind, id).and_then(|m| m.shortcut.as_ref())
    }

    /// Decorators that must not stay active alongside `id`, in schema
    /// declaration order. Empty when `id` has no exclusion set.
    pub fn exclusive_decorators(&self, id: &CommandId) -> Vec<&CommandId> {
        let Some(meta) = self.meta.decorators.get(id) else {
            return Vec::new();
        };
        self.definition
            .decorators
            .iter()
            .map(|d| &d.name)
            .filter(|name| *name != id && meta.mutually_exclusive.contains(name))
            .collect()
    }

    /// Draft seed for the annotation `id`: one empty string per declared
    /// field, overlaid with the command's declared default values.
    pub fn initial_draft(&self, id: &CommandId) -> Map<String, Value> {
        let mut draft = Map::new();
        if let Some(def) = self.definition.annotation(id.as_str()) {
            for field in &def.fields {
                draft.insert(field.name.to_string(), Value::String(String::new()));
            }
        }
        if let Some(meta) = self.meta.annotations.get(id) {
            for (field, value) in &meta.default_values {
                draft.insert(field.clone(), value.clone());
            }
        }
        draft
    }

    /// Resolve a key event against the declared shortcuts, categories in
    /// schema order (decorators, styles, lists, annotations).
    pub fn command_for(&self, key: &Key, modifiers: Modifiers) -> Option<CommandRef> {
        let decorators = self
            .definition
            .decorators
            .iter()
            .map(|d| CommandRef::decorator(d.name.clone()));
        let styles = self
            .definition
            .styles
            .iter()
            .map(|s| CommandRef::style(s.name.clone()));
        let lists = self
            .definition
            .lists
            .iter()
            .map(|l| CommandRef::list_item(l.name.clone()));
        let annotations = self
            .definition
            .annotations
            .iter()
            .map(|a| CommandRef::annotation(a.name.clone()));

        decorators
            .chain(styles)
            .chain(lists)
            .chain(annotations)
            .find(|cmd| {
                self.shortcut(cmd.kind, &cmd.id)
                    .is_some_and(|combo| combo.matches(key, modifiers))
            })
    }
}
