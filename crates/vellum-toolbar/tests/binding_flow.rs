//! End-to-end binding flows against the scripted engine: schema in, ordered
//! instructions out, with projection and the value holder observing the
//! results through the same handle the controls dispatch through.

use std::rc::Rc;

use serde_json::json;
use vellum_core::{
    AnnotationDefinition, CommandKind, FieldDefinition, SchemaDefinition, SelectionScope,
};
use vellum_toolbar::{
    AnnotationBinding, CommandMeta, DecoratorBinding, EditorHandle, MetaTable, ScriptedEngine,
    ToolbarSchema, ToolbarState, ValueHolder, forward_mutations, project,
};

fn full_schema() -> Rc<ToolbarSchema> {
    let definition = SchemaDefinition::new()
        .with_decorators([
            "strong",
            "em",
            "text-left",
            "text-center",
            "text-right",
        ])
        .with_styles(["normal", "h1", "blockquote"])
        .with_lists(["bullet", "number"])
        .with_annotations([
            AnnotationDefinition::new("link").with_field(FieldDefinition::new("href", "URL")),
        ]);

    let alignment = ["text-left", "text-center", "text-right"];
    let mut meta = MetaTable::new().with_annotation(
        "link",
        CommandMeta::new().with_default("href", "https://example.com"),
    );
    for member in alignment {
        meta = meta.with_decorator(
            member,
            CommandMeta::new().exclusive_with(alignment.iter().copied().filter(|m| *m != member)),
        );
    }
    Rc::new(ToolbarSchema::new(definition, meta))
}

fn session() -> (ScriptedEngine, EditorHandle, Rc<ToolbarSchema>) {
    let schema = full_schema();
    let engine = ScriptedEngine::new(schema.definition.clone());
    engine.set_selection(SelectionScope::Range);
    engine.set_text("hello world");
    let handle = EditorHandle::new(engine.clone());
    (engine, handle, schema)
}

#[test]
fn test_unknown_commands_stay_inert() {
    let (_engine, handle, schema) = session();
    for kind in [
        CommandKind::Decorator,
        CommandKind::Style,
        CommandKind::ListItem,
        CommandKind::Annotation,
    ] {
        let state = handle.read(|snap| project(&schema, snap, kind, &"nonexistent".into()));
        assert_eq!(state, ToolbarState::INERT);
    }
}

#[test]
fn test_exclusion_group_press_removes_active_siblings_in_order() {
    let (engine, handle, schema) = session();
    // Scripted into a contradictory multi-active arrangement on purpose.
    engine.set_decorator_active("text-right", true);
    engine.set_decorator_active("text-left", true);
    let log = engine.log();

    let center = DecoratorBinding::new(handle, schema, "text-center");
    center.press().unwrap();

    insta::assert_compact_debug_snapshot!(
        log.rendered(),
        @r#"["decorator.remove(text-left)", "decorator.remove(text-right)", "decorator.toggle(text-center)", "focus"]"#
    );
    assert!(center.state().active);
}

#[test]
fn test_active_member_press_skips_removals() {
    let (engine, handle, schema) = session();
    engine.set_decorator_active("text-center", true);
    engine.set_decorator_active("text-left", true);
    let log = engine.log();

    let center = DecoratorBinding::new(handle, schema, "text-center");
    center.press().unwrap();

    insta::assert_compact_debug_snapshot!(
        log.rendered(),
        @r#"["decorator.toggle(text-center)", "focus"]"#
    );
}

#[test]
fn test_annotation_submit_dispatches_once_and_closes() {
    let (engine, handle, schema) = session();
    let log = engine.log();

    let mut link = AnnotationBinding::new(handle, schema, "link");
    link.open();
    link.set_field("href", json!("https://example.com"));
    link.submit().unwrap();

    assert!(!link.is_open());
    insta::assert_compact_debug_snapshot!(
        log.rendered(),
        @r#"["annotation.add(link, href=\"https://example.com\")", "focus"]"#
    );
}

#[test]
fn test_rejected_draft_sends_nothing_and_stays_open() {
    let (engine, handle, schema) = session();
    let log = engine.log();

    let mut link = AnnotationBinding::new(handle, schema, "link");
    link.open();
    link.set_field("href", json!({"nested": "object"}));
    assert!(link.submit().is_err());

    assert!(link.is_open());
    assert!(log.entries().is_empty());
}

#[test]
fn test_holder_tracks_mutations_through_the_full_path() {
    let (_engine, handle, schema) = session();
    let holder = ValueHolder::new();
    let _sub = forward_mutations(&handle, &holder);
    assert_eq!(holder.get(), None);

    let strong = DecoratorBinding::new(handle.clone(), schema, "strong");
    strong.press().unwrap();

    let value = holder.get().unwrap();
    assert_eq!(value[0]["children"][0]["marks"], json!(["strong"]));
    assert_eq!(value[0]["children"][0]["text"], json!("hello world"));
}

#[test]
fn test_activation_survives_the_round_trip() {
    let (_engine, handle, schema) = session();
    let strong = DecoratorBinding::new(handle.clone(), schema.clone(), "strong");
    let em = DecoratorBinding::new(handle, schema, "em");

    // Nothing active at the selection: both enabled, both off.
    for control in [&strong, &em] {
        let state = control.state();
        assert!(!state.disabled());
        assert!(!state.active);
    }

    strong.press().unwrap();

    assert!(strong.state().active);
    assert!(!em.state().active);
}
