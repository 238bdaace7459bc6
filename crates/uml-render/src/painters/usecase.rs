use crate::paint::{DiagramPainter, PaintContext};
use crate::scene::{Scene, Stroke, TextAlign};
use uml_core::diagram::Diagram;
use uml_core::diagrams::UseCaseDiagram;
use uml_core::diagrams::usecase::{USE_CASE_RX, USE_CASE_RY, UseCaseConnector, UseCaseShape};
use uml_core::geometry::Point;
use uml_core::text::{FONT, TITLE_FONT};

impl DiagramPainter for UseCaseDiagram {
    fn paint_shape(scene: &mut Scene, shape: &UseCaseShape, ctx: &PaintContext) {
        let theme = ctx.theme;
        let ink = Stroke::solid(theme.stroke, 2.0);
        match shape {
            UseCaseShape::Actor { name, x, y, .. } => {
                let (x, y) = (*x, *y);
                scene.circle(Point::new(x, y - 15.0), 10.0, Some(theme.fill), Some(ink));
                scene.line(Point::new(x, y - 5.0), Point::new(x, y + 15.0), ink);
                scene.line(Point::new(x - 15.0, y + 5.0), Point::new(x + 15.0, y + 5.0), ink);
                scene.polyline(
                    &[Point::new(x - 10.0, y + 30.0), Point::new(x, y + 15.0), Point::new(x + 10.0, y + 30.0)],
                    ink,
                );
                scene.text(name, Point::new(x, y + 45.0), TITLE_FONT, theme.text, TextAlign::Center);
            }
            UseCaseShape::UseCase { name, x, y, .. } => {
                let center = Point::new(*x, *y);
                scene.ellipse(center, USE_CASE_RX, USE_CASE_RY, Some(theme.fill), Some(ink));
                scene.text(name, center, FONT, theme.text, TextAlign::Center);
            }
            UseCaseShape::SystemBoundary { name, x, y, .. } => {
                let frame = UseCaseDiagram::bounds(shape, ctx.measure);
                scene.rect(frame, None, Some(Stroke::dashed(theme.stroke, 2.0, 8.0, 4.0)));
                scene.text(name, Point::new(x + 10.0, y + 20.0), TITLE_FONT, theme.text, TextAlign::Left);
            }
        }
    }

    fn paint_connector(
        scene: &mut Scene,
        _connector: &UseCaseConnector,
        source: &UseCaseShape,
        target: &UseCaseShape,
        ctx: &PaintContext,
    ) {
        let from = UseCaseDiagram::bounds(source, ctx.measure);
        let to = UseCaseDiagram::bounds(target, ctx.measure);
        scene.line(centre(source, from.center()), centre(target, to.center()), Stroke::solid(ctx.theme.stroke, 1.5));
    }
}

/// Actors and use cases are anchored at their position; anything else at
/// the middle of its bounds.
fn centre(shape: &UseCaseShape, fallback: Point) -> Point {
    match shape {
        UseCaseShape::Actor { x, y, .. } | UseCaseShape::UseCase { x, y, .. } => Point::new(*x, *y),
        UseCaseShape::SystemBoundary { .. } => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;
    use crate::theme::Theme;
    use pretty_assertions::assert_eq;
    use uml_core::diagrams::usecase::UseCasePalette;
    use uml_core::text::FixedAdvance;

    fn make(item: UseCasePalette, name: &str, x: f64, y: f64) -> UseCaseShape {
        UseCaseDiagram::create_shapes(item, name, Point::new(x, y)).remove(0)
    }

    #[test]
    fn actor_is_a_stick_figure_with_caption() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let mut scene = Scene::new();
        UseCaseDiagram::paint_shape(&mut scene, &make(UseCasePalette::Actor, "Cliente", 100.0, 200.0), &ctx);
        assert!(matches!(&scene.commands[0], DrawCmd::Circle { center, radius, .. } if *center == Point::new(100.0, 185.0) && *radius == 10.0));
        let DrawCmd::Text { text, at, .. } = scene.commands.last().unwrap() else {
            panic!("expected caption");
        };
        assert_eq!(text, "Cliente");
        assert_eq!(*at, Point::new(100.0, 245.0));
    }

    #[test]
    fn boundary_is_dashed_frame() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let mut scene = Scene::new();
        UseCaseDiagram::paint_shape(&mut scene, &make(UseCasePalette::SystemBoundary, "Cajero", 10.0, 20.0), &ctx);
        let DrawCmd::Rect { fill, stroke: Some(s), .. } = &scene.commands[0] else {
            panic!("expected frame");
        };
        assert_eq!(*fill, None);
        assert_eq!(s.dash, crate::scene::Dash::Pattern(8.0, 4.0));
        assert!(matches!(&scene.commands[1], DrawCmd::Text { at, .. } if *at == Point::new(20.0, 40.0)));
    }

    #[test]
    fn link_joins_centres() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let actor = make(UseCasePalette::Actor, "A", 50.0, 60.0);
        let uc = make(UseCasePalette::UseCase, "U", 300.0, 80.0);
        let link = UseCaseDiagram::create_connector(&actor, &uc, (), Point::ZERO);
        let mut scene = Scene::new();
        UseCaseDiagram::paint_connector(&mut scene, &link, &actor, &uc, &ctx);
        let DrawCmd::Polyline { points, .. } = &scene.commands[0] else {
            panic!("expected link");
        };
        assert_eq!(points.as_slice(), &[Point::new(50.0, 60.0), Point::new(300.0, 80.0)]);
    }
}
