//! Sequence diagrams: participant boxes with lifelines, and messages drawn
//! horizontally between lifelines at the height the gesture started.

use crate::diagram::{ConnectPrompt, ConnectorKind, Diagram, ShapeKind};
use crate::geometry::{Point, Rect, Vec2};
use crate::id::ElementId;
use crate::model::DiagramType;
use crate::text::TextMeasure;
use serde::{Deserialize, Serialize};

pub const OBJECT_WIDTH: f64 = 140.0;
pub const OBJECT_HEIGHT: f64 = 70.0;
/// New participants line up along this row.
pub const OBJECT_ROW_Y: f64 = 50.0;
pub const LIFELINE_END_Y: f64 = 1000.0;
/// Horizontal slack either side of a lifeline that still counts as on it.
pub const LIFELINE_TOLERANCE: f64 = 8.0;
pub const ACTIVATION_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SequenceShape {
    Object { id: ElementId, name: String, x: f64, y: f64 },
}

impl SequenceShape {
    pub fn rect(&self) -> Rect {
        let p = self.position();
        Rect::from_origin_size(p, (OBJECT_WIDTH, OBJECT_HEIGHT))
    }

    pub fn lifeline_x(&self) -> f64 {
        self.position().x + OBJECT_WIDTH / 2.0
    }

    /// Top of the lifeline, directly under the box.
    pub fn lifeline_top(&self) -> f64 {
        self.position().y + OBJECT_HEIGHT
    }
}

impl ShapeKind for SequenceShape {
    fn id(&self) -> ElementId {
        match self {
            SequenceShape::Object { id, .. } => *id,
        }
    }

    fn name(&self) -> &str {
        match self {
            SequenceShape::Object { name, .. } => name,
        }
    }

    fn position(&self) -> Point {
        match self {
            SequenceShape::Object { x, y, .. } => Point::new(*x, *y),
        }
    }

    fn with_position(&self, at: Point) -> Self {
        match self {
            SequenceShape::Object { id, name, .. } => SequenceShape::Object {
                id: *id,
                name: name.clone(),
                x: at.x,
                y: at.y,
            },
        }
    }

    fn with_name(&self, name: &str) -> Self {
        match self {
            SequenceShape::Object { id, x, y, .. } => SequenceShape::Object {
                id: *id,
                name: name.to_string(),
                x: *x,
                y: *y,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SequenceConnector {
    Message {
        id: ElementId,
        source: ElementId,
        target: ElementId,
        text: String,
        y: f64,
    },
}

impl SequenceConnector {
    pub fn y(&self) -> f64 {
        match self {
            SequenceConnector::Message { y, .. } => *y,
        }
    }
}

impl ConnectorKind for SequenceConnector {
    fn id(&self) -> ElementId {
        match self {
            SequenceConnector::Message { id, .. } => *id,
        }
    }

    fn source(&self) -> ElementId {
        match self {
            SequenceConnector::Message { source, .. } => *source,
        }
    }

    fn target(&self) -> ElementId {
        match self {
            SequenceConnector::Message { target, .. } => *target,
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            SequenceConnector::Message { text, .. } => Some(text),
        }
    }
}

/// Execution bar on the receiving lifeline of a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub object: ElementId,
    pub start_y: f64,
    pub end_y: f64,
}

/// One activation per message, on its target, from 5 px above the message
/// to 40 px below it.
pub fn activations(messages: &[SequenceConnector]) -> Vec<Activation> {
    messages
        .iter()
        .map(|m| Activation {
            object: m.target(),
            start_y: m.y() - 5.0,
            end_y: m.y() + 40.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePalette {
    Object,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceDiagram;

impl Diagram for SequenceDiagram {
    type Shape = SequenceShape;
    type Connector = SequenceConnector;
    type Palette = SequencePalette;
    /// Message text.
    type Relation = String;

    const KIND: DiagramType = DiagramType::Sequence;

    fn bounds(shape: &SequenceShape, _measure: &dyn TextMeasure) -> Rect {
        shape.rect()
    }

    /// Messages attach anywhere along the lifeline, at the pointer's height.
    fn anchor(shape: &SequenceShape, p: Point, _measure: &dyn TextMeasure) -> Option<Point> {
        let x = shape.lifeline_x();
        ((p.x - x).abs() <= LIFELINE_TOLERANCE && p.y >= shape.lifeline_top()).then(|| Point::new(x, p.y))
    }

    /// The box follows the pointer by its centre, whatever the grab point.
    fn drag_position(_shape: &SequenceShape, pointer: Point, _grab: Vec2) -> Point {
        pointer - Vec2::new(OBJECT_WIDTH / 2.0, OBJECT_HEIGHT / 2.0)
    }

    fn default_name(_item: SequencePalette, _shapes: &[SequenceShape]) -> Option<String> {
        None
    }

    fn create_shapes(item: SequencePalette, name: &str, at: Point) -> Vec<SequenceShape> {
        match item {
            SequencePalette::Object => vec![SequenceShape::Object {
                id: ElementId::with_prefix("object"),
                name: name.to_string(),
                x: at.x - OBJECT_WIDTH / 2.0,
                y: OBJECT_ROW_Y,
            }],
        }
    }

    fn connect_prompt(_source: &SequenceShape, _target: &SequenceShape) -> ConnectPrompt<String> {
        ConnectPrompt::Ask
    }

    fn create_connector(source: &SequenceShape, target: &SequenceShape, text: String, start: Point) -> SequenceConnector {
        SequenceConnector::Message {
            id: ElementId::with_prefix("msg"),
            source: source.id(),
            target: target.id(),
            text,
            y: start.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvance;
    use pretty_assertions::assert_eq;

    fn object(name: &str, drop_x: f64) -> SequenceShape {
        SequenceDiagram::create_shapes(SequencePalette::Object, name, Point::new(drop_x, 400.0)).remove(0)
    }

    #[test]
    fn objects_are_centred_on_drop_and_aligned_in_a_row() {
        let o = object("Cliente", 200.0);
        assert_eq!(o.position(), Point::new(130.0, OBJECT_ROW_Y));
        assert_eq!(o.lifeline_x(), 200.0);
    }

    #[test]
    fn lifeline_anchor() {
        let m = FixedAdvance::ARIAL_13;
        let o = object("Cliente", 200.0);
        assert_eq!(SequenceDiagram::anchor(&o, Point::new(207.0, 300.0), &m), Some(Point::new(200.0, 300.0)));
        assert_eq!(SequenceDiagram::anchor(&o, Point::new(192.0, 120.0), &m), Some(Point::new(200.0, 120.0)));
        assert_eq!(SequenceDiagram::anchor(&o, Point::new(209.0, 300.0), &m), None);
        // Inside the box, above the lifeline.
        assert_eq!(SequenceDiagram::anchor(&o, Point::new(200.0, 100.0), &m), None);
    }

    #[test]
    fn drag_centres_box_on_pointer() {
        let o = object("Cliente", 200.0);
        let p = SequenceDiagram::drag_position(&o, Point::new(300.0, 300.0), Vec2::new(1.0, 1.0));
        assert_eq!(p, Point::new(230.0, 265.0));
    }

    #[test]
    fn message_records_start_height_and_activation() {
        let a = object("A", 100.0);
        let b = object("B", 400.0);
        let msg = SequenceDiagram::create_connector(&a, &b, "login()".into(), Point::new(100.0, 220.0));
        assert_eq!(msg.y(), 220.0);
        assert_eq!(msg.label(), Some("login()"));
        let acts = activations(&[msg]);
        assert_eq!(
            acts,
            vec![Activation { object: b.id(), start_y: 215.0, end_y: 260.0 }]
        );
    }

    #[test]
    fn naming_requires_modal() {
        assert_eq!(SequenceDiagram::default_name(SequencePalette::Object, &[]), None);
    }
}
