pub mod hit;
pub mod paint;
mod painters;
pub mod scene;
pub mod theme;

pub use hit::{anchor_at, hit_test};
pub use paint::{DiagramPainter, Frame, PaintContext, paint_scene};
pub use scene::{Baseline, Color, Dash, DrawCmd, Scene, Stroke, TextAlign};
pub use theme::Theme;
