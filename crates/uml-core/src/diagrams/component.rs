//! Component diagrams: component boxes carrying a port on each side, and
//! port-to-port connections (plain, dependency, or provided interface).

use crate::diagram::{ConnectPrompt, ConnectorKind, Diagram, Layer, ShapeKind};
use crate::geometry::{Point, Rect, Size, square_contains};
use crate::id::ElementId;
use crate::model::DiagramType;
use crate::text::TextMeasure;
use serde::{Deserialize, Serialize};

pub const COMPONENT_SIZE: Size = Size::new(150.0, 100.0);
pub const PORT_SIZE: f64 = 8.0;
pub const LOLLIPOP_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ComponentShape {
    Component {
        id: ElementId,
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Positioned by its centre, in canvas coordinates.
    Port {
        id: ElementId,
        owner: ElementId,
        side: PortSide,
        x: f64,
        y: f64,
    },
}

impl ShapeKind for ComponentShape {
    fn id(&self) -> ElementId {
        match self {
            ComponentShape::Component { id, .. } | ComponentShape::Port { id, .. } => *id,
        }
    }

    fn name(&self) -> &str {
        match self {
            ComponentShape::Component { name, .. } => name,
            ComponentShape::Port { .. } => "",
        }
    }

    fn position(&self) -> Point {
        match self {
            ComponentShape::Component { x, y, .. } | ComponentShape::Port { x, y, .. } => Point::new(*x, *y),
        }
    }

    fn with_position(&self, at: Point) -> Self {
        let mut next = self.clone();
        match &mut next {
            ComponentShape::Component { x, y, .. } | ComponentShape::Port { x, y, .. } => {
                *x = at.x;
                *y = at.y;
            }
        }
        next
    }

    fn with_name(&self, new_name: &str) -> Self {
        let mut next = self.clone();
        if let ComponentShape::Component { name, .. } = &mut next {
            *name = new_name.to_string();
        }
        next
    }

    fn owner(&self) -> Option<ElementId> {
        match self {
            ComponentShape::Port { owner, .. } => Some(*owner),
            ComponentShape::Component { .. } => None,
        }
    }

    fn layer(&self) -> Layer {
        match self {
            ComponentShape::Port { .. } => Layer::Overlay,
            ComponentShape::Component { .. } => Layer::Foreground,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    #[default]
    Association,
    Dependency,
    Interface,
}

impl ConnectionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "association" => Some(ConnectionKind::Association),
            "dependency" => Some(ConnectionKind::Dependency),
            "interface" => Some(ConnectionKind::Interface),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ComponentConnector {
    Connection {
        id: ElementId,
        source: ElementId,
        target: ElementId,
        kind: ConnectionKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl ConnectorKind for ComponentConnector {
    fn id(&self) -> ElementId {
        match self {
            ComponentConnector::Connection { id, .. } => *id,
        }
    }

    fn source(&self) -> ElementId {
        match self {
            ComponentConnector::Connection { source, .. } => *source,
        }
    }

    fn target(&self) -> ElementId {
        match self {
            ComponentConnector::Connection { target, .. } => *target,
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            ComponentConnector::Connection { label, .. } => label.as_deref(),
        }
    }
}

/// Chosen in the connection modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentLink {
    pub kind: ConnectionKind,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentPalette {
    Component,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentDiagram;

impl Diagram for ComponentDiagram {
    type Shape = ComponentShape;
    type Connector = ComponentConnector;
    type Palette = ComponentPalette;
    type Relation = ComponentLink;

    const KIND: DiagramType = DiagramType::Component;

    fn bounds(shape: &ComponentShape, _measure: &dyn TextMeasure) -> Rect {
        match shape {
            ComponentShape::Component { x, y, width, height, .. } => Rect::from_origin_size((*x, *y), (*width, *height)),
            ComponentShape::Port { x, y, .. } => {
                let half = PORT_SIZE / 2.0;
                Rect::new(x - half, y - half, x + half, y + half)
            }
        }
    }

    /// Ports are generous: a full port size either side of the centre.
    fn hit_test(shape: &ComponentShape, p: Point, measure: &dyn TextMeasure) -> bool {
        match shape {
            ComponentShape::Port { x, y, .. } => square_contains(Point::new(*x, *y), PORT_SIZE, p),
            ComponentShape::Component { .. } => crate::geometry::rect_contains(Self::bounds(shape, measure), p),
        }
    }

    /// Only ports take connections, and they snap to the port centre.
    fn anchor(shape: &ComponentShape, p: Point, measure: &dyn TextMeasure) -> Option<Point> {
        match shape {
            ComponentShape::Port { .. } => Self::hit_test(shape, p, measure).then(|| shape.position()),
            ComponentShape::Component { .. } => None,
        }
    }

    fn is_draggable(shape: &ComponentShape) -> bool {
        matches!(shape, ComponentShape::Component { .. })
    }

    fn default_name(_item: ComponentPalette, _shapes: &[ComponentShape]) -> Option<String> {
        None
    }

    fn create_shapes(item: ComponentPalette, name: &str, at: Point) -> Vec<ComponentShape> {
        match item {
            ComponentPalette::Component => {
                let id = ElementId::with_prefix("component");
                let mid_y = at.y + COMPONENT_SIZE.height / 2.0;
                let port = |side: PortSide, x: f64| ComponentShape::Port {
                    id: ElementId::with_prefix("port"),
                    owner: id,
                    side,
                    x,
                    y: mid_y,
                };
                vec![
                    ComponentShape::Component {
                        id,
                        name: name.to_string(),
                        x: at.x,
                        y: at.y,
                        width: COMPONENT_SIZE.width,
                        height: COMPONENT_SIZE.height,
                    },
                    port(PortSide::Left, at.x),
                    port(PortSide::Right, at.x + COMPONENT_SIZE.width),
                ]
            }
        }
    }

    fn can_connect(source: &ComponentShape, target: &ComponentShape) -> bool {
        matches!(
            (source, target),
            (ComponentShape::Port { .. }, ComponentShape::Port { .. })
        )
    }

    fn connect_prompt(_source: &ComponentShape, _target: &ComponentShape) -> ConnectPrompt<ComponentLink> {
        ConnectPrompt::Ask
    }

    fn create_connector(
        source: &ComponentShape,
        target: &ComponentShape,
        link: ComponentLink,
        _start: Point,
    ) -> ComponentConnector {
        ComponentConnector::Connection {
            id: ElementId::with_prefix("conn"),
            source: source.id(),
            target: target.id(),
            kind: link.kind,
            label: link.label.filter(|l| !l.trim().is_empty()),
        }
    }
}
