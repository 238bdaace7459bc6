//! The capability interface every diagram kind implements.
//!
//! A diagram kind is a zero-sized marker type implementing [`Diagram`]. It
//! names its shape and connector enums and supplies the handful of rules
//! the generic editor cannot know: how big a shape is, what a point hits,
//! where connectors attach, and how new elements are built.

use crate::geometry::{Point, Rect, Vec2, rect_contains};
use crate::id::ElementId;
use crate::model::DiagramType;
use crate::text::TextMeasure;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Paint and hit-test order. Later layers are drawn on top and hit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Foreground,
    Overlay,
}

/// A diagram node. Implementors are immutable value records: every change
/// produces a new value.
pub trait ShapeKind: Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    fn id(&self) -> ElementId;
    fn name(&self) -> &str;
    fn position(&self) -> Point;
    fn with_position(&self, at: Point) -> Self;
    fn with_name(&self, name: &str) -> Self;

    /// The shape this one belongs to; it moves and dies with its owner.
    fn owner(&self) -> Option<ElementId> {
        None
    }

    fn layer(&self) -> Layer {
        Layer::Foreground
    }
}

/// A directed edge between two shapes, referenced by ID.
pub trait ConnectorKind: Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    fn id(&self) -> ElementId;
    fn source(&self) -> ElementId;
    fn target(&self) -> ElementId;

    fn label(&self) -> Option<&str> {
        None
    }

    fn references(&self, id: ElementId) -> bool {
        self.source() == id || self.target() == id
    }
}

/// What happens once a connector gesture lands on a valid target.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectPrompt<R> {
    /// Create straight away with this relation.
    Direct(R),
    /// Ask the user (kind picker, message text, label).
    Ask,
}

pub trait Diagram: 'static {
    type Shape: ShapeKind;
    type Connector: ConnectorKind;
    /// Items that can be dropped from the palette.
    type Palette: Copy + Debug + PartialEq;
    /// Details chosen for a new connector.
    type Relation: Clone + Debug + PartialEq;

    const KIND: DiagramType;

    /// Axis-aligned bounds in canvas coordinates.
    fn bounds(shape: &Self::Shape, measure: &dyn TextMeasure) -> Rect;

    /// Whether `p` lies on the shape's visible silhouette.
    fn hit_test(shape: &Self::Shape, p: Point, measure: &dyn TextMeasure) -> bool {
        rect_contains(Self::bounds(shape, measure), p)
    }

    /// Where a connector attaches when a gesture starts or ends at `p`,
    /// or `None` if the shape does not accept connectors there.
    fn anchor(shape: &Self::Shape, p: Point, measure: &dyn TextMeasure) -> Option<Point> {
        Self::hit_test(shape, p, measure).then_some(p)
    }

    fn is_draggable(_shape: &Self::Shape) -> bool {
        true
    }

    /// New position for a dragged shape given the pointer and the offset
    /// between pointer and shape origin at grab time.
    fn drag_position(_shape: &Self::Shape, pointer: Point, grab: Vec2) -> Point {
        pointer - grab
    }

    /// Name used without asking. `None` means a naming modal is required.
    fn default_name(item: Self::Palette, shapes: &[Self::Shape]) -> Option<String>;

    /// Build the shapes a palette drop produces, with fresh IDs. The first
    /// one is the primary shape; the rest are owned by it.
    fn create_shapes(item: Self::Palette, name: &str, at: Point) -> Vec<Self::Shape>;

    fn can_connect(_source: &Self::Shape, _target: &Self::Shape) -> bool {
        true
    }

    fn connect_prompt(source: &Self::Shape, target: &Self::Shape) -> ConnectPrompt<Self::Relation>;

    /// Build a connector with a fresh ID. `start` is the anchor where the
    /// gesture began.
    fn create_connector(
        source: &Self::Shape,
        target: &Self::Shape,
        relation: Self::Relation,
        start: Point,
    ) -> Self::Connector;
}
