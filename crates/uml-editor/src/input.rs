//! Input abstraction layer.
//!
//! Normalizes browser pointer and keyboard events into a unified
//! `InputEvent` enum consumed by the editor. Coordinates are in screen
//! space; the editor divides them by its zoom factor.

/// `PointerEvent.pointerId`. Mouse, each finger, and each pen get their own.
pub type PointerId = i32;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Ctrl on Linux/Windows, ⌘ on macOS.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { pointer: PointerId, x: f64, y: f64 },

    PointerMove { pointer: PointerId, x: f64, y: f64 },

    PointerUp { pointer: PointerId, x: f64, y: f64 },

    /// The platform took the pointer away (touch cancelled, window lost focus).
    PointerCancel { pointer: PointerId },

    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            InputEvent::PointerDown { pointer, .. }
            | InputEvent::PointerMove { pointer, .. }
            | InputEvent::PointerUp { pointer, .. }
            | InputEvent::PointerCancel { pointer } => Some(*pointer),
            InputEvent::Key { .. } => None,
        }
    }
}
