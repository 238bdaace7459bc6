use super::closed_arrow;
use crate::paint::{DiagramPainter, PaintContext};
use crate::scene::{Scene, Stroke, TextAlign};
use std::f64::consts::PI;
use uml_core::diagram::ShapeKind;
use uml_core::diagrams::SequenceDiagram;
use uml_core::diagrams::sequence::{ACTIVATION_WIDTH, LIFELINE_END_Y, SequenceConnector, SequenceShape, activations};
use uml_core::geometry::{Point, Rect, heading};
use uml_core::text::{FONT, TITLE_FONT};

impl DiagramPainter for SequenceDiagram {
    fn paint_shape(scene: &mut Scene, shape: &SequenceShape, ctx: &PaintContext) {
        let rect = shape.rect();
        scene.rect(rect, Some(ctx.theme.fill), Some(Stroke::solid(ctx.theme.stroke, 2.0)));
        scene.text(shape.name(), rect.center(), TITLE_FONT, ctx.theme.text, TextAlign::Center);
    }

    fn paint_connector(
        scene: &mut Scene,
        connector: &SequenceConnector,
        source: &SequenceShape,
        target: &SequenceShape,
        ctx: &PaintContext,
    ) {
        let SequenceConnector::Message { text, y, .. } = connector;
        let from = Point::new(source.lifeline_x(), *y);
        let to = Point::new(target.lifeline_x(), *y);
        let ink = Stroke::solid(ctx.theme.stroke, 1.5);

        scene.line(from, to, ink);
        closed_arrow(scene, to, heading(from, to), 12.0, PI / 7.0, ctx.theme.stroke, None);
        scene.text(
            text,
            Point::new((from.x + to.x) / 2.0, y - 8.0),
            FONT,
            ctx.theme.text,
            TextAlign::Center,
        );
    }

    /// Lifelines first, then one activation bar per message.
    fn paint_underlay(scene: &mut Scene, shapes: &[SequenceShape], connectors: &[SequenceConnector], ctx: &PaintContext) {
        let lifeline = Stroke::dashed(ctx.theme.muted, 2.0, 5.0, 5.0);
        for shape in shapes {
            let x = shape.lifeline_x();
            scene.line(Point::new(x, shape.lifeline_top()), Point::new(x, LIFELINE_END_Y), lifeline);
        }

        let bar = Stroke::solid(ctx.theme.activation_stroke, 1.5);
        for act in activations(connectors) {
            let Some(owner) = shapes.iter().find(|s| s.id() == act.object) else {
                continue;
            };
            let x = owner.lifeline_x() - ACTIVATION_WIDTH / 2.0;
            let rect = Rect::new(x, act.start_y, x + ACTIVATION_WIDTH, act.end_y);
            scene.rect(rect, Some(ctx.theme.activation_fill), Some(bar));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Dash, DrawCmd};
    use crate::theme::Theme;
    use pretty_assertions::assert_eq;
    use uml_core::diagram::Diagram;
    use uml_core::diagrams::sequence::SequencePalette;
    use uml_core::text::FixedAdvance;

    fn objects() -> (SequenceShape, SequenceShape) {
        let a = SequenceDiagram::create_shapes(SequencePalette::Object, "Cliente", Point::new(170.0, 0.0)).remove(0);
        let b = SequenceDiagram::create_shapes(SequencePalette::Object, "Banco", Point::new(470.0, 0.0)).remove(0);
        (a, b)
    }

    #[test]
    fn message_runs_between_lifelines() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let (a, b) = objects();
        let msg = SequenceDiagram::create_connector(&a, &b, "saldo()".into(), Point::new(170.0, 200.0));
        let mut scene = Scene::new();
        SequenceDiagram::paint_connector(&mut scene, &msg, &a, &b, &ctx);

        let DrawCmd::Polyline { points, .. } = &scene.commands[0] else {
            panic!("expected message line");
        };
        assert_eq!(points.as_slice(), &[Point::new(170.0, 200.0), Point::new(470.0, 200.0)]);
        assert!(matches!(&scene.commands[1], DrawCmd::Polygon { points, .. } if points[0] == Point::new(470.0, 200.0)));
        let DrawCmd::Text { text, at, .. } = &scene.commands[2] else {
            panic!("expected label");
        };
        assert_eq!(text, "saldo()");
        assert_eq!(*at, Point::new(320.0, 192.0));
    }

    #[test]
    fn underlay_has_lifelines_then_activations() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let (a, b) = objects();
        let msg = SequenceDiagram::create_connector(&a, &b, "x".into(), Point::new(170.0, 200.0));
        let mut scene = Scene::new();
        SequenceDiagram::paint_underlay(&mut scene, &[a, b], &[msg], &ctx);

        assert_eq!(scene.len(), 3);
        let DrawCmd::Polyline { points, stroke } = &scene.commands[0] else {
            panic!("expected lifeline");
        };
        assert_eq!(points.as_slice(), &[Point::new(170.0, 120.0), Point::new(170.0, 1000.0)]);
        assert_eq!(stroke.dash, Dash::Pattern(5.0, 5.0));
        let DrawCmd::Rect { rect, .. } = &scene.commands[2] else {
            panic!("expected activation bar");
        };
        assert_eq!(*rect, Rect::new(465.0, 195.0, 475.0, 240.0));
    }
}
