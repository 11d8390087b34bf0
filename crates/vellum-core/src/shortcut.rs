//! Keyboard shortcut types.
//!
//! Platform-agnostic key representation plus the standard formatting combos.
//! Platform-specific code (browser keydown events, native key events)
//! converts into these types; the toolbar layer matches them against its
//! shortcut table and renders them as `kbd` previews.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Host platform, for primary-modifier selection and display keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Mac,
    #[default]
    Other,
}

impl Platform {
    pub fn is_mac(self) -> bool {
        matches!(self, Self::Mac)
    }

    /// Classify from a user-agent or platform string.
    pub fn from_user_agent(ua: &str) -> Self {
        if ua.contains("Mac") || ua.contains("iPhone") || ua.contains("iPad") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// Key values for keyboard input.
///
/// Only the keys the toolbar layer reacts to; anything else maps to
/// `Unidentified` and passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Key {
    /// A character key, lowercased for matching.
    Character(SmolStr),

    /// Unknown key; never matches a shortcut.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    CapsLock,
    Control,
    Meta,
    Shift,
}

impl Key {
    /// Create a character key, lowercased so `B` and `b` match the same combo.
    pub fn character(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        if s.chars().any(|c| c.is_uppercase()) {
            Self::Character(SmolStr::new(s.to_lowercase()))
        } else {
            Self::Character(SmolStr::new(s))
        }
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Alt | Self::CapsLock | Self::Control | Self::Meta | Self::Shift
        )
    }

    /// Display label for `kbd` previews.
    pub fn display(&self, platform: Platform) -> SmolStr {
        match self {
            Self::Character(c) => SmolStr::new(c.to_uppercase()),
            Self::Unidentified => SmolStr::new_static("?"),
            Self::Backspace => {
                if platform.is_mac() {
                    SmolStr::new_static("⌫")
                } else {
                    SmolStr::new_static("Backspace")
                }
            }
            Self::Delete => SmolStr::new_static("Del"),
            Self::Enter => {
                if platform.is_mac() {
                    SmolStr::new_static("↵")
                } else {
                    SmolStr::new_static("Enter")
                }
            }
            Self::Tab => SmolStr::new_static("Tab"),
            Self::Escape => SmolStr::new_static("Esc"),
            Self::Space => SmolStr::new_static("Space"),
            Self::ArrowLeft => SmolStr::new_static("←"),
            Self::ArrowRight => SmolStr::new_static("→"),
            Self::ArrowUp => SmolStr::new_static("↑"),
            Self::ArrowDown => SmolStr::new_static("↓"),
            Self::Home => SmolStr::new_static("Home"),
            Self::End => SmolStr::new_static("End"),
            Self::PageUp => SmolStr::new_static("PgUp"),
            Self::PageDown => SmolStr::new_static("PgDn"),
            Self::Alt => {
                if platform.is_mac() {
                    SmolStr::new_static("⌥")
                } else {
                    SmolStr::new_static("Alt")
                }
            }
            Self::CapsLock => SmolStr::new_static("CapsLock"),
            Self::Control => SmolStr::new_static("Ctrl"),
            Self::Meta => SmolStr::new_static("⌘"),
            Self::Shift => {
                if platform.is_mac() {
                    SmolStr::new_static("⇧")
                } else {
                    SmolStr::new_static("Shift")
                }
            }
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    pub const CTRL_ALT: Self = Self {
        ctrl: true,
        alt: true,
        shift: false,
        meta: false,
    };

    pub const META_ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
        meta: true,
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Get the primary modifier + Shift for the platform.
    pub fn primary_shift(is_mac: bool) -> Self {
        if is_mac {
            Self::META_SHIFT
        } else {
            Self::CTRL_SHIFT
        }
    }

    /// Get the primary modifier + Alt for the platform.
    pub fn primary_alt(is_mac: bool) -> Self {
        if is_mac { Self::META_ALT } else { Self::CTRL_ALT }
    }
}

/// A key combination for triggering a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn primary(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary(is_mac),
        }
    }

    pub fn primary_shift(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary_shift(is_mac),
        }
    }

    pub fn primary_alt(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary_alt(is_mac),
        }
    }

    /// Whether a key event matches this combo exactly (no extra modifiers).
    pub fn matches(&self, key: &Key, modifiers: Modifiers) -> bool {
        self.key == *key && self.modifiers == modifiers
    }

    /// Display keys for `kbd` previews, modifiers first.
    pub fn display_keys(&self, platform: Platform) -> Vec<SmolStr> {
        let mut keys = Vec::new();
        if self.modifiers.ctrl {
            keys.push(Key::Control.display(platform));
        }
        if self.modifiers.alt {
            keys.push(Key::Alt.display(platform));
        }
        if self.modifiers.shift {
            keys.push(Key::Shift.display(platform));
        }
        if self.modifiers.meta {
            keys.push(Key::Meta.display(platform));
        }
        keys.push(self.key.display(platform));
        keys
    }
}

/// The standard formatting combos, in the convention shared by most editors:
/// primary+B/I/U for the basic marks, primary+Alt+digit for heading levels,
/// primary+K for links, primary(+Shift)+Z for history.
pub mod combos {
    use super::{Key, KeyCombo, Platform};

    pub fn bold(platform: Platform) -> KeyCombo {
        KeyCombo::primary(Key::character("b"), platform.is_mac())
    }

    pub fn italic(platform: Platform) -> KeyCombo {
        KeyCombo::primary(Key::character("i"), platform.is_mac())
    }

    pub fn underline(platform: Platform) -> KeyCombo {
        KeyCombo::primary(Key::character("u"), platform.is_mac())
    }

    pub fn strike_through(platform: Platform) -> KeyCombo {
        KeyCombo::primary_shift(Key::character("s"), platform.is_mac())
    }

    pub fn normal(platform: Platform) -> KeyCombo {
        KeyCombo::primary_alt(Key::character("0"), platform.is_mac())
    }

    /// Heading shortcut for `level` 1 through 6.
    pub fn heading(level: u8, platform: Platform) -> KeyCombo {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        KeyCombo::primary_alt(Key::character(digit.to_string()), platform.is_mac())
    }

    pub fn blockquote(platform: Platform) -> KeyCombo {
        KeyCombo::primary_shift(Key::character("b"), platform.is_mac())
    }

    pub fn link(platform: Platform) -> KeyCombo {
        KeyCombo::primary(Key::character("k"), platform.is_mac())
    }

    pub fn undo(platform: Platform) -> KeyCombo {
        KeyCombo::primary(Key::character("z"), platform.is_mac())
    }

    pub fn redo(platform: Platform) -> KeyCombo {
        KeyCombo::primary_shift(Key::character("z"), platform.is_mac())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_modifier_per_platform() {
        assert_eq!(Modifiers::primary(true), Modifiers::META);
        assert_eq!(Modifiers::primary(false), Modifiers::CTRL);
        assert_eq!(Modifiers::primary_shift(true), Modifiers::META_SHIFT);
        assert_eq!(Modifiers::primary_alt(false), Modifiers::CTRL_ALT);
    }

    #[test]
    fn test_character_keys_lowercased() {
        assert_eq!(Key::character("B"), Key::character("b"));
        let combo = combos::bold(Platform::Other);
        assert!(combo.matches(&Key::character("B"), Modifiers::CTRL));
        assert!(!combo.matches(&Key::character("b"), Modifiers::NONE));
    }

    #[test]
    fn test_display_keys() {
        let bold_mac = combos::bold(Platform::Mac);
        assert_eq!(bold_mac.display_keys(Platform::Mac), vec!["⌘", "B"]);

        let bold_other = combos::bold(Platform::Other);
        assert_eq!(bold_other.display_keys(Platform::Other), vec!["Ctrl", "B"]);

        let redo = combos::redo(Platform::Mac);
        assert_eq!(redo.display_keys(Platform::Mac), vec!["⇧", "⌘", "Z"]);
    }

    #[test]
    fn test_heading_combo_digits() {
        let h3 = combos::heading(3, Platform::Other);
        assert!(h3.matches(&Key::character("3"), Modifiers::CTRL_ALT));
    }

    #[test]
    fn test_navigation_classification() {
        assert!(Key::ArrowLeft.is_navigation());
        assert!(Key::Shift.is_modifier());
        assert!(!Key::character("x").is_navigation());
    }
}
