use super::open_arrow;
use crate::paint::{DiagramPainter, PaintContext};
use crate::scene::{Scene, Stroke, TextAlign};
use std::f64::consts::PI;
use uml_core::diagrams::PackageDiagram;
use uml_core::diagrams::package::{PackageConnector, PackageShape};
use uml_core::geometry::{heading, nearest_edge_points};
use uml_core::text::TITLE_FONT;

impl DiagramPainter for PackageDiagram {
    fn paint_shape(scene: &mut Scene, shape: &PackageShape, ctx: &PaintContext) {
        let PackageShape::Package { name, .. } = shape;
        let ink = Stroke::solid(ctx.theme.stroke, 1.5);
        let body = shape.body_rect();
        scene.rect(shape.tab_rect(), Some(ctx.theme.fill), Some(ink));
        scene.rect(body, Some(ctx.theme.fill), Some(ink));
        scene.text(name, body.center(), TITLE_FONT, ctx.theme.text, TextAlign::Center);
    }

    fn paint_connector(
        scene: &mut Scene,
        _connector: &PackageConnector,
        source: &PackageShape,
        target: &PackageShape,
        ctx: &PaintContext,
    ) {
        let (start, end) = nearest_edge_points(source.rect(), target.rect());
        scene.line(start, end, Stroke::dashed(ctx.theme.stroke, 1.5, 8.0, 4.0));
        open_arrow(scene, end, heading(start, end), 12.0, PI / 10.0, Stroke::solid(ctx.theme.stroke, 1.5));
    }
}
