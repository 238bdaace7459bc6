//! Package diagrams: tabbed folders joined by dashed dependency arrows.

use crate::diagram::{ConnectPrompt, ConnectorKind, Diagram, ShapeKind};
use crate::geometry::{Point, Rect, Size, rect_contains};
use crate::id::ElementId;
use crate::model::DiagramType;
use crate::text::TextMeasure;
use serde::{Deserialize, Serialize};

pub const PACKAGE_SIZE: Size = Size::new(200.0, 100.0);
pub const TAB_HEIGHT: f64 = 25.0;
/// Tab width as a fraction of the folder width.
pub const TAB_WIDTH_RATIO: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PackageShape {
    Package {
        id: ElementId,
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl PackageShape {
    pub fn rect(&self) -> Rect {
        match self {
            PackageShape::Package { x, y, width, height, .. } => Rect::from_origin_size((*x, *y), (*width, *height)),
        }
    }

    /// The folder tab: the top-left strip of the element box.
    pub fn tab_rect(&self) -> Rect {
        let r = self.rect();
        Rect::new(r.x0, r.y0, r.x0 + r.width() * TAB_WIDTH_RATIO, r.y0 + TAB_HEIGHT)
    }

    /// The folder body, below the tab.
    pub fn body_rect(&self) -> Rect {
        let r = self.rect();
        Rect::new(r.x0, r.y0 + TAB_HEIGHT, r.x1, r.y1)
    }
}

impl ShapeKind for PackageShape {
    fn id(&self) -> ElementId {
        match self {
            PackageShape::Package { id, .. } => *id,
        }
    }

    fn name(&self) -> &str {
        match self {
            PackageShape::Package { name, .. } => name,
        }
    }

    fn position(&self) -> Point {
        match self {
            PackageShape::Package { x, y, .. } => Point::new(*x, *y),
        }
    }

    fn with_position(&self, at: Point) -> Self {
        let mut next = self.clone();
        let PackageShape::Package { x, y, .. } = &mut next;
        *x = at.x;
        *y = at.y;
        next
    }

    fn with_name(&self, new_name: &str) -> Self {
        let mut next = self.clone();
        let PackageShape::Package { name, .. } = &mut next;
        *name = new_name.to_string();
        next
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PackageConnector {
    Dependency {
        id: ElementId,
        source: ElementId,
        target: ElementId,
    },
}

impl ConnectorKind for PackageConnector {
    fn id(&self) -> ElementId {
        match self {
            PackageConnector::Dependency { id, .. } => *id,
        }
    }

    fn source(&self) -> ElementId {
        match self {
            PackageConnector::Dependency { source, .. } => *source,
        }
    }

    fn target(&self) -> ElementId {
        match self {
            PackageConnector::Dependency { target, .. } => *target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagePalette {
    Package,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PackageDiagram;

impl Diagram for PackageDiagram {
    type Shape = PackageShape;
    type Connector = PackageConnector;
    type Palette = PackagePalette;
    type Relation = ();

    const KIND: DiagramType = DiagramType::Package;

    fn bounds(shape: &PackageShape, _measure: &dyn TextMeasure) -> Rect {
        shape.rect()
    }

    /// Tab or body; the empty corner beside the tab is not part of the folder.
    fn hit_test(shape: &PackageShape, p: Point, _measure: &dyn TextMeasure) -> bool {
        let (tab, body) = (shape.tab_rect(), shape.body_rect());
        rect_contains(shape.rect(), p) && (p.x < tab.x1 || p.y > body.y0)
    }

    fn default_name(_item: PackagePalette, _shapes: &[PackageShape]) -> Option<String> {
        None
    }

    fn create_shapes(item: PackagePalette, name: &str, at: Point) -> Vec<PackageShape> {
        match item {
            PackagePalette::Package => vec![PackageShape::Package {
                id: ElementId::with_prefix("package"),
                name: name.to_string(),
                x: at.x,
                y: at.y,
                width: PACKAGE_SIZE.width,
                height: PACKAGE_SIZE.height,
            }],
        }
    }

    fn connect_prompt(_source: &PackageShape, _target: &PackageShape) -> ConnectPrompt<()> {
        ConnectPrompt::Direct(())
    }

    fn create_connector(source: &PackageShape, target: &PackageShape, _relation: (), _start: Point) -> PackageConnector {
        PackageConnector::Dependency {
            id: ElementId::with_prefix("dep"),
            source: source.id(),
            target: target.id(),
        }
    }
}
