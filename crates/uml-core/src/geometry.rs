//! Pure geometry shared by hit-testing and rendering.
//!
//! Everything here is stateless: rectangles, ellipses and circles for
//! containment, boundary midpoints for connector routing, bezier control
//! points, and the polygons used as connector terminators.

pub use kurbo::{Point, Rect, Size, Vec2};

// ─── Containment ─────────────────────────────────────────────────────────

/// Strict interior test: points on the border are outside.
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    p.x > rect.x0 && p.x < rect.x1 && p.y > rect.y0 && p.y < rect.y1
}

/// `(dx/rx)^2 + (dy/ry)^2 <= 1`. Degenerate radii contain nothing.
pub fn ellipse_contains(center: Point, rx: f64, ry: f64, p: Point) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let d = p - center;
    (d.x * d.x) / (rx * rx) + (d.y * d.y) / (ry * ry) <= 1.0
}

pub fn circle_contains(center: Point, radius: f64, p: Point) -> bool {
    (p - center).hypot() < radius
}

/// Axis-aligned box of half-size `half` around `center`, strict on both axes.
pub fn square_contains(center: Point, half: f64, p: Point) -> bool {
    (p.x - center.x).abs() < half && (p.y - center.y).abs() < half
}

// ─── Routing ─────────────────────────────────────────────────────────────

/// Boundary midpoints in top, bottom, left, right order.
pub fn edge_midpoints(rect: Rect) -> [Point; 4] {
    let c = rect.center();
    [
        Point::new(c.x, rect.y0),
        Point::new(c.x, rect.y1),
        Point::new(rect.x0, c.y),
        Point::new(rect.x1, c.y),
    ]
}

/// Pick the pair of edge midpoints (one per rectangle) closest to each other.
///
/// Ties keep the earliest candidate, scanning `a`'s midpoints in the outer
/// loop and `b`'s in the inner loop.
pub fn nearest_edge_points(a: Rect, b: Rect) -> (Point, Point) {
    let from = edge_midpoints(a);
    let to = edge_midpoints(b);
    let mut best = (from[0], to[0]);
    let mut best_d = f64::INFINITY;
    for p in from {
        for q in to {
            let d = (q - p).hypot2();
            if d < best_d {
                best_d = d;
                best = (p, q);
            }
        }
    }
    best
}

/// Control points of the gently bowed curve between two anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierRoute {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
    /// Where a label sits on the curve.
    pub mid: Point,
}

/// The bow is lifted upwards by `distance * min(0.2, 30 / distance)`,
/// so long connectors flatten out instead of arcing wildly.
pub fn bezier_route(start: Point, end: Point) -> BezierRoute {
    let d = end - start;
    let distance = d.hypot();
    if distance == 0.0 {
        return BezierRoute {
            start,
            cp1: start,
            cp2: start,
            end,
            mid: start,
        };
    }
    let lift = Vec2::new(0.0, distance * (30.0 / distance).min(0.2));
    BezierRoute {
        start,
        cp1: start + d * 0.25 - lift,
        cp2: start + d * 0.75 - lift,
        end,
        mid: start + d * 0.5 - lift,
    }
}

/// Direction of travel from `from` to `to`, in radians.
pub fn heading(from: Point, to: Point) -> f64 {
    (to - from).atan2()
}

// ─── Terminators ─────────────────────────────────────────────────────────

/// Tip plus the two barbs of an arrowhead pointing along `angle`.
pub fn arrowhead(tip: Point, angle: f64, size: f64, spread: f64) -> [Point; 3] {
    [
        tip,
        tip - Vec2::from_angle(angle - spread) * size,
        tip - Vec2::from_angle(angle + spread) * size,
    ]
}

/// Aggregation/composition diamond anchored at `at`, extending along `angle`.
pub fn diamond(at: Point, angle: f64) -> [Point; 4] {
    let local = [(0.0, 0.0), (10.0, 7.0), (20.0, 0.0), (10.0, -7.0)];
    let (sin, cos) = angle.sin_cos();
    local.map(|(x, y)| Point::new(at.x + x * cos - y * sin, at.y + x * sin + y * cos))
}

/// Point where a diamond of [`diamond`] ends, so the line can start there.
pub fn diamond_far_end(at: Point, angle: f64) -> Point {
    at + Vec2::from_angle(angle) * 20.0
}
