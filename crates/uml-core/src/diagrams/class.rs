//! Class diagrams: text-sized class boxes, package containers, typed
//! relationships and package membership links.

use crate::diagram::{ConnectPrompt, ConnectorKind, Diagram, Layer, ShapeKind};
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::id::ElementId;
use crate::model::{Attribute, DiagramType, EntityField, EntityRelationship, Method, Visibility};
use crate::text::TextMeasure;
use serde::{Deserialize, Serialize};

pub const PADDING: f64 = 10.0;
pub const LINE_HEIGHT: f64 = 18.0;
pub const MIN_CONTENT_WIDTH: f64 = 150.0;
pub const PACKAGE_SIZE: Size = Size::new(250.0, 150.0);
pub const PACKAGE_TAB_HEIGHT: f64 = 20.0;

// ─── Shapes ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBox {
    pub id: ElementId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub is_entity: bool,
    #[serde(default)]
    pub fields: Vec<EntityField>,
    #[serde(default)]
    pub relationships: Vec<EntityRelationship>,
}

impl ClassBox {
    /// A freshly dropped class: one attribute, one method, an entity with
    /// an auto-generated `id` key.
    pub fn new(name: &str, at: Point) -> Self {
        Self {
            id: ElementId::with_prefix("class"),
            name: name.to_string(),
            x: at.x,
            y: at.y,
            attributes: vec![Attribute::new("atributo1", "String", Visibility::Public)],
            methods: vec![Method::new("metodo1", "void", Visibility::Public)],
            is_entity: true,
            fields: vec![EntityField::primary_key()],
            relationships: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageBox {
    pub id: ElementId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClassShape {
    Class(ClassBox),
    Package(PackageBox),
}

impl PackageBox {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    /// The name tab in the top-left corner of the container.
    pub fn tab_rect(&self) -> Rect {
        let r = self.rect();
        Rect::new(r.x0, r.y0, r.x0 + r.width() * 0.4, r.y0 + PACKAGE_TAB_HEIGHT)
    }
}

impl ClassShape {
    pub fn as_class(&self) -> Option<&ClassBox> {
        match self {
            ClassShape::Class(c) => Some(c),
            ClassShape::Package(_) => None,
        }
    }

    pub fn as_package(&self) -> Option<&PackageBox> {
        match self {
            ClassShape::Package(p) => Some(p),
            ClassShape::Class(_) => None,
        }
    }
}

impl ShapeKind for ClassShape {
    fn id(&self) -> ElementId {
        match self {
            ClassShape::Class(c) => c.id,
            ClassShape::Package(p) => p.id,
        }
    }

    fn name(&self) -> &str {
        match self {
            ClassShape::Class(c) => &c.name,
            ClassShape::Package(p) => &p.name,
        }
    }

    fn position(&self) -> Point {
        match self {
            ClassShape::Class(c) => Point::new(c.x, c.y),
            ClassShape::Package(p) => Point::new(p.x, p.y),
        }
    }

    fn with_position(&self, at: Point) -> Self {
        match self {
            ClassShape::Class(c) => ClassShape::Class(ClassBox { x: at.x, y: at.y, ..c.clone() }),
            ClassShape::Package(p) => ClassShape::Package(PackageBox { x: at.x, y: at.y, ..p.clone() }),
        }
    }

    fn with_name(&self, name: &str) -> Self {
        match self {
            ClassShape::Class(c) => ClassShape::Class(ClassBox { name: name.to_string(), ..c.clone() }),
            ClassShape::Package(p) => ClassShape::Package(PackageBox { name: name.to_string(), ..p.clone() }),
        }
    }

    fn layer(&self) -> Layer {
        match self {
            ClassShape::Class(_) => Layer::Foreground,
            ClassShape::Package(_) => Layer::Background,
        }
    }
}

// ─── Text-driven layout ──────────────────────────────────────────────────

/// Compartment geometry of a class box, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassLayout {
    pub width: f64,
    pub height: f64,
    pub header_height: f64,
    pub attributes_height: f64,
    pub methods_height: f64,
}

impl ClassLayout {
    /// Measured on every call so edits to names or members resize the box.
    pub fn measure(class: &ClassBox, measure: &dyn TextMeasure) -> Self {
        let content = class
            .attributes
            .iter()
            .map(|a| measure.text_width(&a.display_line()))
            .chain(class.methods.iter().map(|m| measure.text_width(&m.display_line())))
            .fold(measure.title_width(&class.name).max(MIN_CONTENT_WIDTH), f64::max);

        let header_height = LINE_HEIGHT * 1.5;
        let attributes_height = class.attributes.len() as f64 * LINE_HEIGHT + PADDING;
        let methods_height = class.methods.len() as f64 * LINE_HEIGHT + PADDING;
        Self {
            width: content + PADDING * 2.0,
            height: header_height + attributes_height + methods_height,
            header_height,
            attributes_height,
            methods_height,
        }
    }

    pub fn rect(&self, class: &ClassBox) -> Rect {
        Rect::from_origin_size((class.x, class.y), (self.width, self.height))
    }
}

// ─── Connectors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    #[default]
    Association,
    Inheritance,
    Implementation,
    Aggregation,
    Composition,
    Dependency,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 6] = [
        RelationshipKind::Association,
        RelationshipKind::Inheritance,
        RelationshipKind::Implementation,
        RelationshipKind::Aggregation,
        RelationshipKind::Composition,
        RelationshipKind::Dependency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Association => "association",
            RelationshipKind::Inheritance => "inheritance",
            RelationshipKind::Implementation => "implementation",
            RelationshipKind::Aggregation => "aggregation",
            RelationshipKind::Composition => "composition",
            RelationshipKind::Dependency => "dependency",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str().eq_ignore_ascii_case(s))
    }

    pub fn is_dashed(self) -> bool {
        matches!(self, RelationshipKind::Dependency | RelationshipKind::Implementation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Routing {
    #[default]
    Straight,
    Curved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClassConnector {
    Relationship {
        id: ElementId,
        source: ElementId,
        target: ElementId,
        kind: RelationshipKind,
        #[serde(default)]
        routing: Routing,
    },
    /// A class placed inside a package.
    Membership {
        id: ElementId,
        package: ElementId,
        class: ElementId,
    },
}

impl ConnectorKind for ClassConnector {
    fn id(&self) -> ElementId {
        match self {
            ClassConnector::Relationship { id, .. } | ClassConnector::Membership { id, .. } => *id,
        }
    }

    fn source(&self) -> ElementId {
        match self {
            ClassConnector::Relationship { source, .. } => *source,
            ClassConnector::Membership { package, .. } => *package,
        }
    }

    fn target(&self) -> ElementId {
        match self {
            ClassConnector::Relationship { target, .. } => *target,
            ClassConnector::Membership { class, .. } => *class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRelation {
    Relationship(RelationshipKind),
    Membership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPalette {
    Class,
    Package,
}

// ─── Diagram rules ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassDiagram;

impl Diagram for ClassDiagram {
    type Shape = ClassShape;
    type Connector = ClassConnector;
    type Palette = ClassPalette;
    type Relation = ClassRelation;

    const KIND: DiagramType = DiagramType::Class;

    fn bounds(shape: &ClassShape, measure: &dyn TextMeasure) -> Rect {
        match shape {
            ClassShape::Class(c) => ClassLayout::measure(c, measure).rect(c),
            ClassShape::Package(p) => p.rect(),
        }
    }

    /// Dragging never pushes a shape off the top or left edge.
    fn drag_position(_shape: &ClassShape, pointer: Point, grab: Vec2) -> Point {
        let p = pointer - grab;
        Point::new(p.x.max(0.0), p.y.max(0.0))
    }

    fn default_name(item: ClassPalette, shapes: &[ClassShape]) -> Option<String> {
        Some(match item {
            ClassPalette::Class => {
                let n = shapes.iter().filter(|s| s.as_class().is_some()).count();
                format!("Clase{}", n + 1)
            }
            ClassPalette::Package => {
                let n = shapes.iter().filter(|s| s.as_package().is_some()).count();
                format!("Paquete{}", n + 1)
            }
        })
    }

    fn create_shapes(item: ClassPalette, name: &str, at: Point) -> Vec<ClassShape> {
        let shape = match item {
            ClassPalette::Class => ClassShape::Class(ClassBox::new(name, at)),
            ClassPalette::Package => ClassShape::Package(PackageBox {
                id: ElementId::with_prefix("package"),
                name: name.to_string(),
                x: at.x,
                y: at.y,
                width: PACKAGE_SIZE.width,
                height: PACKAGE_SIZE.height,
            }),
        };
        vec![shape]
    }

    fn can_connect(source: &ClassShape, target: &ClassShape) -> bool {
        !matches!((source, target), (ClassShape::Package(_), ClassShape::Package(_)))
    }

    fn connect_prompt(source: &ClassShape, target: &ClassShape) -> ConnectPrompt<ClassRelation> {
        match (source, target) {
            (ClassShape::Class(_), ClassShape::Class(_)) => ConnectPrompt::Ask,
            _ => ConnectPrompt::Direct(ClassRelation::Membership),
        }
    }

    fn create_connector(
        source: &ClassShape,
        target: &ClassShape,
        relation: ClassRelation,
        _start: Point,
    ) -> ClassConnector {
        match relation {
            ClassRelation::Relationship(kind) => ClassConnector::Relationship {
                id: ElementId::with_prefix("rel"),
                source: source.id(),
                target: target.id(),
                kind,
                routing: Routing::Straight,
            },
            ClassRelation::Membership => {
                let (package, class) = match source {
                    ClassShape::Package(_) => (source.id(), target.id()),
                    ClassShape::Class(_) => (target.id(), source.id()),
                };
                ClassConnector::Membership {
                    id: ElementId::with_prefix("pkg_cls"),
                    package,
                    class,
                }
            }
        }
    }
}
