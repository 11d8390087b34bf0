//! Dioxus toolbar and editable-surface components for portable-text engines.
//!
//! Everything here is presentation: the components own no editor state
//! beyond transient input drafts. They project engine snapshots into
//! button/dropdown state through `vellum-toolbar` and dispatch instruction
//! plans back through an [`Editor`] handle passed in as an explicit prop.
//! Ready-made editors with schema, metadata, and layout included live in
//! [`presets`].

mod annotation;
mod editor;
mod keymap;
mod render;
mod surface;
mod toolbar;

pub mod presets;

// Editor wiring
pub use editor::{Editor, use_editor};

// Keyboard conversion
pub use keymap::{combo_from_keyboard, key_from_keyboard};

// Render lookup tables
pub use render::{
    AnnotationRender, DecoratorRender, StyleRender, annotation_render, decorator_render,
    list_item_classes, render_blocks, style_render,
};

// Components
pub use annotation::{
    ActiveAnnotationCard, AnnotationButton, FormField, LinkPopoverButton, ObjectForm,
};
pub use surface::EditableSurface;
pub use toolbar::{
    ButtonGroup, CommandButtonProps, DecoratorButton, HistoryButton, HistoryDirection, ListButton,
    ShortcutPreview, StyleDropdown, Toolbar, ToolbarButton,
};
