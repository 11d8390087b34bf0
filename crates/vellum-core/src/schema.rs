//! Schema declaration types for the portable-text engine.
//!
//! A `SchemaDefinition` enumerates which decorators, styles, annotations, and
//! lists an editing surface supports. Schemas are declared once at
//! configuration time and never mutated; presentation concerns (icons,
//! shortcuts, mutual-exclusion groups) live in the toolbar layer, not here.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

/// Stable identifier for a command, unique within one schema category.
///
/// The same id may appear in different categories (a `code` decorator and a
/// `code` style are distinct commands).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(SmolStr);

impl CommandId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommandId {
    fn from(id: &str) -> Self {
        Self(SmolStr::new(id))
    }
}

impl From<String> for CommandId {
    fn from(id: String) -> Self {
        Self(SmolStr::new(id))
    }
}

impl From<SmolStr> for CommandId {
    fn from(id: SmolStr) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for CommandId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommandId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The schema category a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// Inline character-level mark (bold, italic, alignment).
    Decorator,
    /// Block-level paragraph classification (heading level, blockquote, normal).
    Style,
    /// Block membership in an ordered or unordered list.
    ListItem,
    /// Inline range with structured data (a link with an href field).
    Annotation,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Decorator => "decorator",
            Self::Style => "style",
            Self::ListItem => "list-item",
            Self::Annotation => "annotation",
        })
    }
}

/// Value shape for an annotation input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    Text,
    Url,
}

/// One user-supplied input field on an annotation (e.g. `href` on a link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: SmolStr,
    /// Label shown next to the input.
    pub title: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

impl FieldDefinition {
    pub fn new(name: impl Into<SmolStr>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            field_type: FieldType::Text,
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }
}

/// An inline character-level mark the engine can toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratorDefinition {
    pub name: CommandId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl DecoratorDefinition {
    pub fn new(name: impl Into<CommandId>) -> Self {
        Self {
            name: name.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A block-level paragraph style. The engine keeps at most one style per block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: CommandId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl StyleDefinition {
    pub fn new(name: impl Into<CommandId>) -> Self {
        Self {
            name: name.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A list kind blocks can belong to (`bullet`, `number`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefinition {
    pub name: CommandId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ListDefinition {
    pub fn new(name: impl Into<CommandId>) -> Self {
        Self {
            name: name.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// An inline range carrying structured data, collected from the user through
/// the declared `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDefinition {
    pub name: CommandId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl AnnotationDefinition {
    pub fn new(name: impl Into<CommandId>) -> Self {
        Self {
            name: name.into(),
            title: None,
            fields: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Check a submitted value record against this annotation's contract:
    /// every declared field present, every value a plain string.
    ///
    /// Extra keys beyond the declared fields are allowed but must still be
    /// strings.
    pub fn check_values(
        &self,
        values: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), FieldValueError> {
        for field in &self.fields {
            if !values.contains_key(field.name.as_str()) {
                return Err(FieldValueError::Missing(field.name.clone()));
            }
        }
        for (name, value) in values {
            if !value.is_string() {
                return Err(FieldValueError::NotAString(SmolStr::new(name)));
            }
        }
        Ok(())
    }
}

/// Rejection reasons for an annotation value record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValueError {
    #[error("missing value for field `{0}`")]
    Missing(SmolStr),
    #[error("value for field `{0}` is not a plain string")]
    NotAString(SmolStr),
}

/// The full set of commands an editing surface supports.
///
/// Order matters: mutual-exclusion removal sequences and toolbar layouts both
/// follow declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(default)]
    pub decorators: Vec<DecoratorDefinition>,
    #[serde(default)]
    pub styles: Vec<StyleDefinition>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDefinition>,
    #[serde(default)]
    pub lists: Vec<ListDefinition>,
}

impl SchemaDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decorators<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CommandId>,
    {
        self.decorators = names.into_iter().map(DecoratorDefinition::new).collect();
        self
    }

    pub fn with_styles<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CommandId>,
    {
        self.styles = names.into_iter().map(StyleDefinition::new).collect();
        self
    }

    pub fn with_lists<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CommandId>,
    {
        self.lists = names.into_iter().map(ListDefinition::new).collect();
        self
    }

    pub fn with_annotations(
        mut self,
        annotations: impl IntoIterator<Item = AnnotationDefinition>,
    ) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    /// Look up a decorator by id.
    pub fn decorator(&self, id: &str) -> Option<&DecoratorDefinition> {
        self.decorators.iter().find(|d| d.name == id)
    }

    /// Look up a style by id.
    pub fn style(&self, id: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|s| s.name == id)
    }

    /// Look up a list kind by id.
    pub fn list(&self, id: &str) -> Option<&ListDefinition> {
        self.lists.iter().find(|l| l.name == id)
    }

    /// Look up an annotation by id.
    pub fn annotation(&self, id: &str) -> Option<&AnnotationDefinition> {
        self.annotations.iter().find(|a| a.name == id)
    }

    /// Whether `id` is declared under `kind`.
    pub fn contains(&self, kind: CommandKind, id: &str) -> bool {
        match kind {
            CommandKind::Decorator => self.decorator(id).is_some(),
            CommandKind::Style => self.style(id).is_some(),
            CommandKind::ListItem => self.list(id).is_some(),
            CommandKind::Annotation => self.annotation(id).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> SchemaDefinition {
        SchemaDefinition::new()
            .with_decorators(["strong", "em"])
            .with_styles(["normal", "h1", "blockquote"])
            .with_lists(["bullet", "number"])
            .with_annotations([AnnotationDefinition::new("link")
                .with_field(FieldDefinition::new("href", "URL").with_type(FieldType::Url))])
    }

    #[test]
    fn test_contains_by_kind() {
        let schema = sample_schema();
        assert!(schema.contains(CommandKind::Decorator, "strong"));
        assert!(schema.contains(CommandKind::Style, "h1"));
        assert!(schema.contains(CommandKind::ListItem, "bullet"));
        assert!(schema.contains(CommandKind::Annotation, "link"));

        // Same id, wrong category
        assert!(!schema.contains(CommandKind::Style, "strong"));
        // Unknown id
        assert!(!schema.contains(CommandKind::Decorator, "comment"));
    }

    #[test]
    fn test_check_values_accepts_strings() {
        let link = AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL"));
        let mut values = serde_json::Map::new();
        values.insert("href".into(), json!("https://example.com"));
        assert_eq!(link.check_values(&values), Ok(()));
    }

    #[test]
    fn test_check_values_rejects_missing_field() {
        let link = AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL"));
        let values = serde_json::Map::new();
        assert_eq!(
            link.check_values(&values),
            Err(FieldValueError::Missing("href".into()))
        );
    }

    #[test]
    fn test_check_values_rejects_non_string() {
        let link = AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL"));
        let mut values = serde_json::Map::new();
        values.insert("href".into(), json!(42));
        assert_eq!(
            link.check_values(&values),
            Err(FieldValueError::NotAString("href".into()))
        );
    }

    #[test]
    fn test_schema_from_json_config() {
        let schema: SchemaDefinition = serde_json::from_value(json!({
            "decorators": [{"name": "strong"}, {"name": "em", "title": "Italic"}],
            "styles": [{"name": "normal"}],
            "annotations": [{
                "name": "link",
                "fields": [{"name": "href", "title": "URL", "type": "url"}]
            }]
        }))
        .unwrap();

        assert_eq!(schema.decorators.len(), 2);
        assert_eq!(schema.decorators[1].title.as_deref(), Some("Italic"));
        assert!(schema.lists.is_empty());
        let link = schema.annotation("link").unwrap();
        assert_eq!(link.fields[0].field_type, FieldType::Url);
    }
}
