use crate::scene::Color;

/// Colours used by every painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub stroke: Color,
    pub fill: Color,
    pub text: Color,
    /// Secondary lines: lifelines, membership links.
    pub muted: Color,
    /// Ports and component connections.
    pub accent: Color,
    pub component_fill: Color,
    pub component_stroke: Color,
    pub activation_fill: Color,
    pub activation_stroke: Color,
    pub selection: Color,
    pub preview: Color,
}

impl Theme {
    /// Light theme, warm ivory shapes on white.
    pub fn light() -> Self {
        Self {
            background: "#ffffff",
            stroke: "#4d515a",
            fill: "#fffff0",
            text: "#1f2937",
            muted: "#cbd5e0",
            accent: "#4338ca",
            component_fill: "#fefce8",
            component_stroke: "#a16207",
            activation_fill: "#ebf8ff",
            activation_stroke: "#4299e1",
            selection: "#2563eb",
            preview: "#dc2626",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1c1c1e",
            stroke: "#a1a1aa",
            fill: "#27272a",
            text: "#f4f4f5",
            muted: "#52525b",
            accent: "#818cf8",
            component_fill: "#292524",
            component_stroke: "#eab308",
            activation_fill: "#1e3a5f",
            activation_stroke: "#60a5fa",
            selection: "#60a5fa",
            preview: "#f87171",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
