//! One [`DiagramPainter`](crate::paint::DiagramPainter) impl per diagram kind,
//! plus the terminators they share.

mod class;
mod component;
mod package;
mod sequence;
mod usecase;

use crate::scene::{Color, Scene, Stroke};
use uml_core::geometry::{Point, arrowhead};

/// Two barbs meeting at `tip`, left open.
pub(crate) fn open_arrow(scene: &mut Scene, tip: Point, angle: f64, size: f64, spread: f64, stroke: Stroke) {
    let [t, a, b] = arrowhead(tip, angle, size, spread);
    scene.polyline(&[a, t, b], stroke);
}

/// Closed triangle at `tip`.
pub(crate) fn closed_arrow(
    scene: &mut Scene,
    tip: Point,
    angle: f64,
    size: f64,
    spread: f64,
    fill: Color,
    stroke: Option<Stroke>,
) {
    scene.polygon(&arrowhead(tip, angle, size, spread), Some(fill), stroke);
}
