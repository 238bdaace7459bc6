//! Immediate-mode display list.
//!
//! A [`Scene`] is rebuilt from scratch on every frame and replayed onto a
//! 2D canvas by the host. Commands map one-to-one onto
//! `CanvasRenderingContext2d` calls, so the list doubles as a readable
//! record of what was drawn.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use uml_core::geometry::BezierRoute;

pub type Color = &'static str;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dash {
    Solid,
    /// `[on, off]` segment lengths.
    Pattern(f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dash: Dash,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Dash::Solid,
        }
    }

    pub const fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self {
            color,
            width,
            dash: Dash::Pattern(on, off),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
        color: Color,
    },
    Save,
    Restore,
    Scale(f64),
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Polyline {
        points: SmallVec<[Point; 4]>,
        stroke: Stroke,
    },
    Polygon {
        points: SmallVec<[Point; 4]>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Bezier {
        start: Point,
        cp1: Point,
        cp2: Point,
        end: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point,
        font: &'static str,
        color: Color,
        align: TextAlign,
        baseline: Baseline,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // ─── Convenience builders ────────────────────────────────────────────

    pub fn rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Rect { rect, fill, stroke });
    }

    pub fn ellipse(&mut self, center: Point, rx: f64, ry: f64, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Ellipse {
            center,
            rx,
            ry,
            fill,
            stroke,
        });
    }

    pub fn circle(&mut self, center: Point, radius: f64, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(DrawCmd::Polyline {
            points: SmallVec::from_slice(&[from, to]),
            stroke,
        });
    }

    pub fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.push(DrawCmd::Polyline {
            points: SmallVec::from_slice(points),
            stroke,
        });
    }

    pub fn polygon(&mut self, points: &[Point], fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Polygon {
            points: SmallVec::from_slice(points),
            fill,
            stroke,
        });
    }

    pub fn bezier(&mut self, route: &BezierRoute, stroke: Stroke) {
        self.push(DrawCmd::Bezier {
            start: route.start,
            cp1: route.cp1,
            cp2: route.cp2,
            end: route.end,
            stroke,
        });
    }

    pub fn text(&mut self, text: &str, at: Point, font: &'static str, color: Color, align: TextAlign) {
        self.push(DrawCmd::Text {
            text: text.to_string(),
            at,
            font,
            color,
            align,
            baseline: Baseline::Middle,
        });
    }

    /// Every text command's string, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
