//! Ready-made editors: schema, metadata, and toolbar layout included.
//!
//! Each preset is a declarative `schema` function (a [`ToolbarSchema`]
//! with titles, glyphs, shortcuts, exclusion groups, and draft defaults
//! filled in) plus a toolbar layout and a self-contained `*Editor`
//! component running against a scripted demo engine. Embedders bringing
//! their own engine call the `schema` function with [`use_editor`] and
//! compose the toolbar components directly.
//!
//! [`ToolbarSchema`]: vellum_toolbar::ToolbarSchema
//! [`use_editor`]: crate::use_editor

pub mod compact;
pub mod extended;
mod meta;
pub mod simple;
pub mod small;

pub use compact::CompactEditor;
pub use extended::ExtendedEditor;
pub use simple::SimpleEditor;
pub use small::SmallEditor;

/// Descriptive entry for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// The presets in this module, smallest schema first.
pub const PRESETS: &[PresetInfo] = &[
    PresetInfo {
        name: "simple",
        description: "Three decorators and three styles; a first-run toolbar.",
    },
    PresetInfo {
        name: "small",
        description: "Tight toolbar with a single-input link popover.",
    },
    PresetInfo {
        name: "compact",
        description: "Every command, sized for dense layouts.",
    },
    PresetInfo {
        name: "extended",
        description: "Every command plus a two-field link dialog and an active-link card.",
    },
];
