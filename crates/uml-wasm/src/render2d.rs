//! Canvas2D backend.
//!
//! Replays a [`Scene`] display list on an HTML `<canvas>` through
//! `CanvasRenderingContext2d`, and measures text with the same context so
//! class boxes are sized the way they are drawn.

use js_sys::Array;
use uml_core::geometry::Point;
use uml_core::text::{FONT, FixedAdvance, TITLE_FONT, TextMeasure};
use uml_render::{Baseline, Color, Dash, DrawCmd, Scene, Stroke, TextAlign};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Draw every command of `scene`, in order.
pub fn render_scene(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    for cmd in &scene.commands {
        replay(ctx, cmd);
    }
}

fn replay(ctx: &CanvasRenderingContext2d, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Clear { width, height, color } => {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(0.0, 0.0, *width, *height);
        }
        DrawCmd::Save => ctx.save(),
        DrawCmd::Restore => ctx.restore(),
        DrawCmd::Scale(s) => {
            let _ = ctx.scale(*s, *s);
        }
        DrawCmd::Rect { rect, fill, stroke } => {
            ctx.begin_path();
            ctx.rect(rect.x0, rect.y0, rect.width(), rect.height());
            finish(ctx, *fill, stroke.as_ref());
        }
        DrawCmd::Ellipse {
            center,
            rx,
            ry,
            fill,
            stroke,
        } => {
            ctx.begin_path();
            let _ = ctx.ellipse(center.x, center.y, *rx, *ry, 0.0, 0.0, std::f64::consts::TAU);
            finish(ctx, *fill, stroke.as_ref());
        }
        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            ctx.begin_path();
            let _ = ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU);
            finish(ctx, *fill, stroke.as_ref());
        }
        DrawCmd::Polyline { points, stroke } => {
            trace(ctx, points);
            finish(ctx, None, Some(stroke));
        }
        DrawCmd::Polygon { points, fill, stroke } => {
            trace(ctx, points);
            ctx.close_path();
            finish(ctx, *fill, stroke.as_ref());
        }
        DrawCmd::Bezier {
            start,
            cp1,
            cp2,
            end,
            stroke,
        } => {
            ctx.begin_path();
            ctx.move_to(start.x, start.y);
            ctx.bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, end.x, end.y);
            finish(ctx, None, Some(stroke));
        }
        DrawCmd::Text {
            text,
            at,
            font,
            color,
            align,
            baseline,
        } => {
            ctx.set_font(font);
            ctx.set_fill_style_str(color);
            ctx.set_text_align(match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            });
            ctx.set_text_baseline(match baseline {
                Baseline::Alphabetic => "alphabetic",
                Baseline::Middle => "middle",
            });
            let _ = ctx.fill_text(text, at.x, at.y);
        }
    }
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
}

/// Fill, then stroke, the current path.
fn finish(ctx: &CanvasRenderingContext2d, fill: Option<Color>, stroke: Option<&Stroke>) {
    if let Some(color) = fill {
        ctx.set_fill_style_str(color);
        ctx.fill();
    }
    if let Some(stroke) = stroke {
        ctx.set_stroke_style_str(stroke.color);
        ctx.set_line_width(stroke.width);
        let dash = match stroke.dash {
            Dash::Solid => Array::new(),
            Dash::Pattern(on, off) => Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)),
        };
        let _ = ctx.set_line_dash(&dash);
        ctx.stroke();
        let _ = ctx.set_line_dash(&Array::new());
    }
}

// ─── Text measurement ────────────────────────────────────────────────────

/// Measures with `measureText` on the drawing context.
pub struct CanvasMeasure {
    ctx: CanvasRenderingContext2d,
}

impl CanvasMeasure {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn measure(&self, font: &str, text: &str) -> f64 {
        self.ctx.save();
        self.ctx.set_font(font);
        let width = match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => {
                log::debug!("measureText failed; estimating width of {text:?}");
                FixedAdvance::default().text_width(text)
            }
        };
        self.ctx.restore();
        width
    }
}

impl TextMeasure for CanvasMeasure {
    fn text_width(&self, text: &str) -> f64 {
        self.measure(FONT, text)
    }

    fn title_width(&self, text: &str) -> f64 {
        self.measure(TITLE_FONT, text)
    }
}
