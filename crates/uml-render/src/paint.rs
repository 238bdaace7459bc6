//! Diagram state → display list.
//!
//! Builds a fresh [`Scene`] every frame. Layers are painted back to
//! front, connectors between the background and the foreground, and the
//! in-progress connector preview last so it is never hidden.

use crate::scene::{DrawCmd, Scene, Stroke};
use crate::theme::Theme;
use std::collections::HashMap;
use uml_core::diagram::{ConnectorKind, Diagram, Layer, ShapeKind};
use uml_core::geometry::{Point, Size};
use uml_core::id::ElementId;
use uml_core::text::TextMeasure;

/// Shared inputs for every painter call.
pub struct PaintContext<'a> {
    pub measure: &'a dyn TextMeasure,
    pub theme: &'a Theme,
}

/// Rendering rules for one diagram kind.
pub trait DiagramPainter: Diagram {
    fn paint_shape(scene: &mut Scene, shape: &Self::Shape, ctx: &PaintContext);

    /// Both endpoints are resolved before this is called.
    fn paint_connector(
        scene: &mut Scene,
        connector: &Self::Connector,
        source: &Self::Shape,
        target: &Self::Shape,
        ctx: &PaintContext,
    );

    /// Drawn after the background layer and before connectors.
    fn paint_underlay(_scene: &mut Scene, _shapes: &[Self::Shape], _connectors: &[Self::Connector], _ctx: &PaintContext) {}
}

/// Everything a frame needs from the editor.
pub struct Frame<'a, D: Diagram> {
    pub shapes: &'a [D::Shape],
    pub connectors: &'a [D::Connector],
    pub viewport: Size,
    pub scale: f64,
    pub selected: Option<ElementId>,
    /// Anchor and pointer of a connector being drawn.
    pub preview: Option<(Point, Point)>,
}

const SELECTION_MARGIN: f64 = 4.0;

pub fn paint_scene<D: DiagramPainter>(frame: &Frame<'_, D>, ctx: &PaintContext) -> Scene {
    let mut scene = Scene::new();
    scene.push(DrawCmd::Clear {
        width: frame.viewport.width,
        height: frame.viewport.height,
        color: ctx.theme.background,
    });
    scene.push(DrawCmd::Save);
    scene.push(DrawCmd::Scale(frame.scale));

    paint_layer::<D>(&mut scene, frame.shapes, Layer::Background, ctx);
    D::paint_underlay(&mut scene, frame.shapes, frame.connectors, ctx);

    let by_id: HashMap<ElementId, &D::Shape> = frame.shapes.iter().map(|s| (s.id(), s)).collect();
    for connector in frame.connectors {
        match (by_id.get(&connector.source()), by_id.get(&connector.target())) {
            (Some(source), Some(target)) => D::paint_connector(&mut scene, connector, source, target, ctx),
            _ => log::debug!("skipping dangling connector {:?}", connector.id()),
        }
    }

    paint_layer::<D>(&mut scene, frame.shapes, Layer::Foreground, ctx);
    paint_layer::<D>(&mut scene, frame.shapes, Layer::Overlay, ctx);

    if let Some(id) = frame.selected
        && let Some(shape) = by_id.get(&id)
    {
        let outline = D::bounds(shape, ctx.measure).inflate(SELECTION_MARGIN, SELECTION_MARGIN);
        scene.rect(outline, None, Some(Stroke::dashed(ctx.theme.selection, 1.5, 4.0, 4.0)));
    }

    if let Some((from, to)) = frame.preview {
        scene.line(from, to, Stroke::dashed(ctx.theme.preview, 2.0, 8.0, 4.0));
    }

    scene.push(DrawCmd::Restore);
    scene
}

fn paint_layer<D: DiagramPainter>(scene: &mut Scene, shapes: &[D::Shape], layer: Layer, ctx: &PaintContext) {
    for shape in shapes.iter().filter(|s| s.layer() == layer) {
        D::paint_shape(scene, shape, ctx);
    }
}
