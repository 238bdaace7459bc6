use super::{closed_arrow, open_arrow};
use crate::paint::{DiagramPainter, PaintContext};
use crate::scene::{Scene, Stroke, TextAlign};
use std::f64::consts::PI;
use uml_core::diagram::Diagram;
use uml_core::diagrams::ClassDiagram;
use uml_core::diagrams::class::{
    ClassBox, ClassConnector, ClassLayout, ClassShape, LINE_HEIGHT, PADDING, PackageBox, RelationshipKind, Routing,
};
use uml_core::geometry::{Point, Rect, bezier_route, diamond, diamond_far_end, heading, nearest_edge_points};
use uml_core::text::{FONT, TITLE_FONT};

const LINE_WIDTH: f64 = 1.5;

impl DiagramPainter for ClassDiagram {
    fn paint_shape(scene: &mut Scene, shape: &ClassShape, ctx: &PaintContext) {
        match shape {
            ClassShape::Class(c) => paint_class(scene, c, ctx),
            ClassShape::Package(p) => paint_package(scene, p, ctx),
        }
    }

    fn paint_connector(
        scene: &mut Scene,
        connector: &ClassConnector,
        source: &ClassShape,
        target: &ClassShape,
        ctx: &PaintContext,
    ) {
        let from = ClassDiagram::bounds(source, ctx.measure);
        let to = ClassDiagram::bounds(target, ctx.measure);
        match connector {
            ClassConnector::Relationship { kind, routing, .. } => paint_relationship(scene, *kind, *routing, from, to, ctx),
            ClassConnector::Membership { .. } => {
                scene.line(from.center(), to.center(), Stroke::dashed(ctx.theme.muted, 1.0, 2.0, 4.0));
            }
        }
    }
}

fn paint_class(scene: &mut Scene, class: &ClassBox, ctx: &PaintContext) {
    let theme = ctx.theme;
    let layout = ClassLayout::measure(class, ctx.measure);
    let rect = layout.rect(class);
    let ink = Stroke::solid(theme.stroke, LINE_WIDTH);

    scene.rect(rect, Some(theme.fill), Some(ink));
    scene.text(
        &class.name,
        Point::new(rect.center().x, rect.y0 + layout.header_height / 2.0),
        TITLE_FONT,
        theme.text,
        TextAlign::Center,
    );

    let attributes_top = rect.y0 + layout.header_height;
    let methods_top = attributes_top + layout.attributes_height;
    scene.line(Point::new(rect.x0, attributes_top), Point::new(rect.x1, attributes_top), ink);
    scene.line(Point::new(rect.x0, methods_top), Point::new(rect.x1, methods_top), ink);

    let rows = |top: f64| (0..).map(move |i| Point::new(rect.x0 + PADDING, top + PADDING / 2.0 + LINE_HEIGHT * (i as f64 + 0.5)));
    for (line, at) in class.attributes.iter().map(|a| a.display_line()).zip(rows(attributes_top)) {
        scene.text(&line, at, FONT, theme.text, TextAlign::Left);
    }
    for (line, at) in class.methods.iter().map(|m| m.display_line()).zip(rows(methods_top)) {
        scene.text(&line, at, FONT, theme.text, TextAlign::Left);
    }
}

fn paint_package(scene: &mut Scene, package: &PackageBox, ctx: &PaintContext) {
    let theme = ctx.theme;
    let tab = package.tab_rect();
    let ink = Stroke::solid(theme.stroke, LINE_WIDTH);
    scene.rect(package.rect(), None, Some(ink));
    scene.rect(tab, Some(theme.fill), Some(ink));
    scene.text(
        &package.name,
        Point::new(tab.x0 + PADDING, tab.center().y),
        TITLE_FONT,
        theme.text,
        TextAlign::Left,
    );
}

fn paint_relationship(scene: &mut Scene, kind: RelationshipKind, routing: Routing, from: Rect, to: Rect, ctx: &PaintContext) {
    let theme = ctx.theme;
    let (start, end) = nearest_edge_points(from, to);
    let solid = Stroke::solid(theme.stroke, LINE_WIDTH);
    let line = if kind.is_dashed() {
        Stroke::dashed(theme.stroke, LINE_WIDTH, 5.0, 5.0)
    } else {
        solid
    };

    // The diamond sits at the whole's end; the line leaves from its far tip.
    let line_start = match kind {
        RelationshipKind::Aggregation | RelationshipKind::Composition => {
            let angle = heading(start, end);
            let fill = if kind == RelationshipKind::Composition {
                theme.stroke
            } else {
                theme.fill
            };
            scene.polygon(&diamond(start, angle), Some(fill), Some(solid));
            diamond_far_end(start, angle)
        }
        _ => start,
    };

    let end_angle = match routing {
        Routing::Straight => {
            scene.line(line_start, end, line);
            heading(line_start, end)
        }
        Routing::Curved => {
            let route = bezier_route(line_start, end);
            scene.bezier(&route, line);
            heading(route.cp2, end)
        }
    };

    match kind {
        RelationshipKind::Inheritance | RelationshipKind::Implementation => {
            closed_arrow(scene, end, end_angle, 15.0, PI / 8.0, theme.fill, Some(solid));
        }
        RelationshipKind::Association | RelationshipKind::Dependency => {
            open_arrow(scene, end, end_angle, 12.0, PI / 7.0, solid);
        }
        RelationshipKind::Aggregation | RelationshipKind::Composition => {}
    }
}
