//! Use-case diagrams: stick-figure actors, elliptical use cases, and the
//! dashed system boundary drawn behind them.

use crate::diagram::{ConnectPrompt, ConnectorKind, Diagram, Layer, ShapeKind};
use crate::geometry::{Point, Rect, Size, circle_contains, ellipse_contains};
use crate::id::ElementId;
use crate::model::DiagramType;
use crate::text::TextMeasure;
use serde::{Deserialize, Serialize};

pub const USE_CASE_RX: f64 = 80.0;
pub const USE_CASE_RY: f64 = 30.0;
/// Actor hit zone: a circle around the torso.
pub const ACTOR_HIT_RADIUS: f64 = 35.0;
pub const ACTOR_HIT_DY: f64 = 5.0;
pub const BOUNDARY_SIZE: Size = Size::new(400.0, 500.0);

/// Actors and use cases are positioned by their centre; the boundary by
/// its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UseCaseShape {
    Actor {
        id: ElementId,
        name: String,
        x: f64,
        y: f64,
    },
    UseCase {
        id: ElementId,
        name: String,
        x: f64,
        y: f64,
    },
    SystemBoundary {
        id: ElementId,
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl ShapeKind for UseCaseShape {
    fn id(&self) -> ElementId {
        match self {
            UseCaseShape::Actor { id, .. } | UseCaseShape::UseCase { id, .. } | UseCaseShape::SystemBoundary { id, .. } => {
                *id
            }
        }
    }

    fn name(&self) -> &str {
        match self {
            UseCaseShape::Actor { name, .. }
            | UseCaseShape::UseCase { name, .. }
            | UseCaseShape::SystemBoundary { name, .. } => name,
        }
    }

    fn position(&self) -> Point {
        match self {
            UseCaseShape::Actor { x, y, .. } | UseCaseShape::UseCase { x, y, .. } | UseCaseShape::SystemBoundary { x, y, .. } => {
                Point::new(*x, *y)
            }
        }
    }

    fn with_position(&self, at: Point) -> Self {
        let mut next = self.clone();
        match &mut next {
            UseCaseShape::Actor { x, y, .. } | UseCaseShape::UseCase { x, y, .. } | UseCaseShape::SystemBoundary { x, y, .. } => {
                *x = at.x;
                *y = at.y;
            }
        }
        next
    }

    fn with_name(&self, new_name: &str) -> Self {
        let mut next = self.clone();
        match &mut next {
            UseCaseShape::Actor { name, .. }
            | UseCaseShape::UseCase { name, .. }
            | UseCaseShape::SystemBoundary { name, .. } => *name = new_name.to_string(),
        }
        next
    }

    fn layer(&self) -> Layer {
        match self {
            UseCaseShape::SystemBoundary { .. } => Layer::Background,
            _ => Layer::Foreground,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UseCaseConnector {
    Link {
        id: ElementId,
        source: ElementId,
        target: ElementId,
    },
}

impl ConnectorKind for UseCaseConnector {
    fn id(&self) -> ElementId {
        match self {
            UseCaseConnector::Link { id, .. } => *id,
        }
    }

    fn source(&self) -> ElementId {
        match self {
            UseCaseConnector::Link { source, .. } => *source,
        }
    }

    fn target(&self) -> ElementId {
        match self {
            UseCaseConnector::Link { target, .. } => *target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCasePalette {
    Actor,
    UseCase,
    SystemBoundary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UseCaseDiagram;

impl Diagram for UseCaseDiagram {
    type Shape = UseCaseShape;
    type Connector = UseCaseConnector;
    type Palette = UseCasePalette;
    type Relation = ();

    const KIND: DiagramType = DiagramType::UseCase;

    fn bounds(shape: &UseCaseShape, measure: &dyn TextMeasure) -> Rect {
        match shape {
            UseCaseShape::Actor { name, x, y, .. } => {
                // Head top at y-25, caption baseline at y+45.
                let half = (measure.title_width(name) / 2.0).max(15.0);
                Rect::new(x - half, y - 25.0, x + half, y + 50.0)
            }
            UseCaseShape::UseCase { x, y, .. } => Rect::new(x - USE_CASE_RX, y - USE_CASE_RY, x + USE_CASE_RX, y + USE_CASE_RY),
            UseCaseShape::SystemBoundary { x, y, width, height, .. } => {
                Rect::from_origin_size((*x, *y), (*width, *height))
            }
        }
    }

    fn hit_test(shape: &UseCaseShape, p: Point, measure: &dyn TextMeasure) -> bool {
        match shape {
            UseCaseShape::Actor { x, y, .. } => circle_contains(Point::new(*x, y + ACTOR_HIT_DY), ACTOR_HIT_RADIUS, p),
            UseCaseShape::UseCase { x, y, .. } => ellipse_contains(Point::new(*x, *y), USE_CASE_RX, USE_CASE_RY, p),
            UseCaseShape::SystemBoundary { .. } => crate::geometry::rect_contains(Self::bounds(shape, measure), p),
        }
    }

    /// The boundary is a frame, not a participant.
    fn anchor(shape: &UseCaseShape, p: Point, measure: &dyn TextMeasure) -> Option<Point> {
        match shape {
            UseCaseShape::SystemBoundary { .. } => None,
            _ => Self::hit_test(shape, p, measure).then_some(p),
        }
    }

    fn default_name(_item: UseCasePalette, _shapes: &[UseCaseShape]) -> Option<String> {
        None
    }

    fn create_shapes(item: UseCasePalette, name: &str, at: Point) -> Vec<UseCaseShape> {
        let name = name.to_string();
        let shape = match item {
            UseCasePalette::Actor => UseCaseShape::Actor {
                id: ElementId::with_prefix("actor"),
                name,
                x: at.x,
                y: at.y,
            },
            UseCasePalette::UseCase => UseCaseShape::UseCase {
                id: ElementId::with_prefix("usecase"),
                name,
                x: at.x,
                y: at.y,
            },
            UseCasePalette::SystemBoundary => UseCaseShape::SystemBoundary {
                id: ElementId::with_prefix("boundary"),
                name,
                x: at.x,
                y: at.y,
                width: BOUNDARY_SIZE.width,
                height: BOUNDARY_SIZE.height,
            },
        };
        vec![shape]
    }

    fn can_connect(source: &UseCaseShape, target: &UseCaseShape) -> bool {
        !matches!(source, UseCaseShape::SystemBoundary { .. }) && !matches!(target, UseCaseShape::SystemBoundary { .. })
    }

    fn connect_prompt(_source: &UseCaseShape, _target: &UseCaseShape) -> ConnectPrompt<()> {
        ConnectPrompt::Direct(())
    }

    fn create_connector(source: &UseCaseShape, target: &UseCaseShape, _relation: (), _start: Point) -> UseCaseConnector {
        UseCaseConnector::Link {
            id: ElementId::with_prefix("link"),
            source: source.id(),
            target: target.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvance;

    fn make(item: UseCasePalette, x: f64, y: f64) -> UseCaseShape {
        UseCaseDiagram::create_shapes(item, "X", Point::new(x, y)).remove(0)
    }

    #[test]
    fn use_case_uses_ellipse_rule() {
        let m = FixedAdvance::ARIAL_13;
        let uc = make(UseCasePalette::UseCase, 200.0, 100.0);
        assert!(UseCaseDiagram::hit_test(&uc, Point::new(279.0, 100.0), &m));
        assert!(UseCaseDiagram::hit_test(&uc, Point::new(200.0, 130.0), &m));
        // Inside the bounding box corner, outside the ellipse.
        assert!(!UseCaseDiagram::hit_test(&uc, Point::new(275.0, 125.0), &m));
        assert!(!UseCaseDiagram::hit_test(&uc, Point::new(281.0, 100.0), &m));
    }

    #[test]
    fn actor_uses_torso_circle() {
        let m = FixedAdvance::ARIAL_13;
        let actor = make(UseCasePalette::Actor, 50.0, 50.0);
        assert!(UseCaseDiagram::hit_test(&actor, Point::new(50.0, 89.0), &m));
        assert!(!UseCaseDiagram::hit_test(&actor, Point::new(50.0, 90.0), &m));
        assert!(UseCaseDiagram::hit_test(&actor, Point::new(16.0, 55.0), &m));
    }

    #[test]
    fn boundary_is_background_and_not_connectable() {
        let m = FixedAdvance::ARIAL_13;
        let boundary = make(UseCasePalette::SystemBoundary, 0.0, 0.0);
        let actor = make(UseCasePalette::Actor, 50.0, 50.0);
        assert_eq!(boundary.layer(), Layer::Background);
        assert_eq!(UseCaseDiagram::bounds(&boundary, &m), Rect::new(0.0, 0.0, 400.0, 500.0));
        assert!(UseCaseDiagram::hit_test(&boundary, Point::new(1.0, 1.0), &m));
        assert_eq!(UseCaseDiagram::anchor(&boundary, Point::new(1.0, 1.0), &m), None);
        assert!(!UseCaseDiagram::can_connect(&actor, &boundary));
    }

    #[test]
    fn links_are_created_directly() {
        let a = make(UseCasePalette::Actor, 0.0, 0.0);
        let u = make(UseCasePalette::UseCase, 200.0, 0.0);
        assert_eq!(UseCaseDiagram::connect_prompt(&a, &u), ConnectPrompt::Direct(()));
        let link = UseCaseDiagram::create_connector(&a, &u, (), Point::ZERO);
        assert_eq!((link.source(), link.target()), (a.id(), u.id()));
    }

    #[test]
    fn edits_keep_variant() {
        let uc = make(UseCasePalette::UseCase, 0.0, 0.0);
        let moved = uc.with_position(Point::new(5.0, 6.0)).with_name("Pagar");
        assert_eq!(moved.position(), Point::new(5.0, 6.0));
        assert_eq!(moved.name(), "Pagar");
        assert_eq!(moved.id(), uc.id());
        assert!(matches!(moved, UseCaseShape::UseCase { .. }));
    }
}
