//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The shortcut map lives in Rust so every diagram editor shares it.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolSelect,
    ToolConnector,

    // ── Edit ──
    Undo,
    Delete,

    // ── View ──
    ZoomIn,
    ZoomOut,

    // ── UI ──
    /// Abort the current gesture or close the open prompt.
    Cancel,
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if modifiers.command() {
            return match key {
                "z" | "Z" if !modifiers.shift => Some(ShortcutAction::Undo),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                _ => None,
            };
        }

        // ── Single keys (no modifiers) ──
        match key {
            "v" | "V" => Some(ShortcutAction::ToolSelect),
            "l" | "L" => Some(ShortcutAction::ToolConnector),
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_tool_shortcuts() {
        assert_eq!(
            ShortcutMap::resolve("v", Modifiers::NONE),
            Some(ShortcutAction::ToolSelect)
        );
        assert_eq!(
            ShortcutMap::resolve("L", Modifiers::NONE),
            Some(ShortcutAction::ToolConnector)
        );
    }

    #[test]
    fn resolve_undo() {
        // Ctrl+Z → Undo
        assert_eq!(ShortcutMap::resolve("z", Modifiers::CTRL), Some(ShortcutAction::Undo));
        // Cmd+Z → Undo
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutMap::resolve("z", meta), Some(ShortcutAction::Undo));
        // Cmd+Shift+Z has no redo to map to.
        let meta_shift = Modifiers { shift: true, ..meta };
        assert_eq!(ShortcutMap::resolve("z", meta_shift), None);
        // Plain z does nothing.
        assert_eq!(ShortcutMap::resolve("z", Modifiers::NONE), None);
    }

    #[test]
    fn resolve_delete_and_escape() {
        assert_eq!(
            ShortcutMap::resolve("Delete", Modifiers::NONE),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", Modifiers::NONE),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", Modifiers::NONE),
            Some(ShortcutAction::Cancel)
        );
    }

    #[test]
    fn resolve_zoom() {
        assert_eq!(ShortcutMap::resolve("=", Modifiers::CTRL), Some(ShortcutAction::ZoomIn));
        assert_eq!(ShortcutMap::resolve("+", Modifiers::CTRL), Some(ShortcutAction::ZoomIn));
        assert_eq!(ShortcutMap::resolve("-", Modifiers::CTRL), Some(ShortcutAction::ZoomOut));
        assert_eq!(ShortcutMap::resolve("-", Modifiers::NONE), None);
    }
}
