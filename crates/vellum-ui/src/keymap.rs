//! Conversion from Dioxus keyboard events to the shortcut types.

use dioxus::events::KeyboardData;
use dioxus::prelude::{keyboard_types, ModifiersInteraction};
use vellum_core::{Key, KeyCombo, Modifiers};

/// Convert a `keyboard_types` key. Keys the toolbar layer has no use for
/// collapse to `Unidentified`, which never matches a shortcut.
pub fn key_from_keyboard(key: keyboard_types::Key) -> Key {
    use keyboard_types::Key as KT;

    match key {
        KT::Character(s) if s == " " => Key::Space,
        KT::Character(s) => Key::character(s.as_str()),
        KT::Backspace => Key::Backspace,
        KT::Delete => Key::Delete,
        KT::Enter => Key::Enter,
        KT::Tab => Key::Tab,
        KT::Escape => Key::Escape,
        KT::ArrowLeft => Key::ArrowLeft,
        KT::ArrowRight => Key::ArrowRight,
        KT::ArrowUp => Key::ArrowUp,
        KT::ArrowDown => Key::ArrowDown,
        KT::Home => Key::Home,
        KT::End => Key::End,
        KT::PageUp => Key::PageUp,
        KT::PageDown => Key::PageDown,
        KT::Alt => Key::Alt,
        KT::CapsLock => Key::CapsLock,
        KT::Control => Key::Control,
        KT::Meta => Key::Meta,
        KT::Shift => Key::Shift,
        _ => Key::Unidentified,
    }
}

/// Build a combo from a Dioxus keyboard event.
pub fn combo_from_keyboard(event: &KeyboardData) -> KeyCombo {
    let key = key_from_keyboard(event.key());
    let modifiers = Modifiers {
        ctrl: event.modifiers().ctrl(),
        alt: event.modifiers().alt(),
        shift: event.modifiers().shift(),
        meta: event.modifiers().meta(),
    };
    KeyCombo::with_modifiers(key, modifiers)
}
