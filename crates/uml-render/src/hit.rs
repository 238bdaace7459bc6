//! Hit testing: point → shape lookup.
//!
//! Walks shapes front-to-back (highest layer first, latest insertion first
//! within a layer) to find what sits under a canvas position.

use std::cmp::Reverse;
use uml_core::diagram::{Diagram, ShapeKind};
use uml_core::geometry::Point;
use uml_core::text::TextMeasure;

/// Shapes in the order a click reaches them.
pub fn topmost_first<S: ShapeKind>(shapes: &[S]) -> impl Iterator<Item = &S> {
    let mut order: Vec<usize> = (0..shapes.len()).collect();
    order.sort_by_key(|&i| (Reverse(shapes[i].layer()), Reverse(i)));
    order.into_iter().map(move |i| &shapes[i])
}

/// Find the topmost shape at `p`.
/// Returns `None` if nothing is hit (background).
pub fn hit_test<'a, D: Diagram>(shapes: &'a [D::Shape], p: Point, measure: &dyn TextMeasure) -> Option<&'a D::Shape> {
    topmost_first(shapes).find(|s| D::hit_test(s, p, measure))
}

/// Topmost shape that accepts a connector at `p`, with the snapped anchor.
pub fn anchor_at<'a, D: Diagram>(
    shapes: &'a [D::Shape],
    p: Point,
    measure: &dyn TextMeasure,
) -> Option<(&'a D::Shape, Point)> {
    topmost_first(shapes).find_map(|s| D::anchor(s, p, measure).map(|at| (s, at)))
}
