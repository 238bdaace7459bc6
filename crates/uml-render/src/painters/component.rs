use crate::paint::{DiagramPainter, PaintContext};
use crate::scene::{Scene, Stroke, TextAlign};
use uml_core::diagram::{Diagram, ShapeKind};
use uml_core::diagrams::ComponentDiagram;
use uml_core::diagrams::component::{ComponentConnector, ComponentShape, ConnectionKind, LOLLIPOP_RADIUS};
use uml_core::geometry::{Point, Rect};
use uml_core::text::{FONT, TITLE_FONT};

impl DiagramPainter for ComponentDiagram {
    fn paint_shape(scene: &mut Scene, shape: &ComponentShape, ctx: &PaintContext) {
        let theme = ctx.theme;
        let body = ComponentDiagram::bounds(shape, ctx.measure);
        match shape {
            ComponentShape::Component { name, .. } => {
                let ink = Stroke::solid(theme.component_stroke, 2.0);
                scene.rect(body, Some(theme.component_fill), Some(ink));
                paint_icon(scene, body, theme.component_fill, ink);
                scene.text(name, body.center(), TITLE_FONT, theme.text, TextAlign::Center);
            }
            ComponentShape::Port { .. } => {
                scene.rect(body, Some(theme.fill), Some(Stroke::solid(theme.accent, 1.5)));
            }
        }
    }

    fn paint_connector(
        scene: &mut Scene,
        connector: &ComponentConnector,
        source: &ComponentShape,
        target: &ComponentShape,
        ctx: &PaintContext,
    ) {
        let theme = ctx.theme;
        let ComponentConnector::Connection { kind, label, .. } = connector;
        let (from, to) = (source.position(), target.position());
        let solid = Stroke::solid(theme.accent, 1.5);
        let line = match kind {
            ConnectionKind::Dependency => Stroke::dashed(theme.accent, 1.5, 8.0, 4.0),
            ConnectionKind::Association | ConnectionKind::Interface => solid,
        };

        scene.line(from, to, line);
        if *kind == ConnectionKind::Interface {
            scene.circle(to, LOLLIPOP_RADIUS, Some(theme.fill), Some(solid));
        }
        if let Some(label) = label {
            let mid = from.midpoint(to);
            scene.text(label, Point::new(mid.x, mid.y - 8.0), FONT, theme.text, TextAlign::Center);
        }
    }
}

/// The two-tab component glyph in the top-right corner.
fn paint_icon(scene: &mut Scene, body: Rect, fill: &'static str, ink: Stroke) {
    let icon = Rect::from_origin_size((body.x1 - 25.0, body.y0 + 8.0), (15.0, 20.0));
    let thin = Stroke { width: 1.0, ..ink };
    scene.rect(icon, Some(fill), Some(thin));
    for dy in [4.0, 12.0] {
        scene.rect(Rect::from_origin_size((icon.x0 - 4.0, icon.y0 + dy), (8.0, 4.0)), Some(fill), Some(thin));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Dash, DrawCmd};
    use crate::theme::Theme;
    use pretty_assertions::assert_eq;
    use uml_core::diagrams::component::{ComponentLink, ComponentPalette};
    use uml_core::text::FixedAdvance;

    fn connect(kind: ConnectionKind, label: Option<&str>) -> Scene {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let mut shapes = ComponentDiagram::create_shapes(ComponentPalette::Component, "Web", Point::new(0.0, 0.0));
        shapes.extend(ComponentDiagram::create_shapes(ComponentPalette::Component, "Api", Point::new(300.0, 0.0)));
        let link = ComponentLink {
            kind,
            label: label.map(str::to_string),
        };
        let conn = ComponentDiagram::create_connector(&shapes[2], &shapes[4], link, Point::ZERO);
        let mut scene = Scene::new();
        ComponentDiagram::paint_connector(&mut scene, &conn, &shapes[2], &shapes[4], &ctx);
        scene
    }

    #[test]
    fn interface_ends_in_lollipop() {
        let scene = connect(ConnectionKind::Interface, None);
        assert_eq!(scene.len(), 2);
        assert!(matches!(&scene.commands[1], DrawCmd::Circle { center, radius, .. }
            if *center == Point::new(450.0, 50.0) && *radius == 10.0));
    }

    #[test]
    fn dependency_is_dashed_and_labelled() {
        let scene = connect(ConnectionKind::Dependency, Some("usa"));
        let DrawCmd::Polyline { stroke, .. } = &scene.commands[0] else {
            panic!("expected line");
        };
        assert_eq!(stroke.dash, Dash::Pattern(8.0, 4.0));
        let DrawCmd::Text { text, at, .. } = &scene.commands[1] else {
            panic!("expected label");
        };
        assert_eq!(text, "usa");
        assert_eq!(*at, Point::new(300.0, 42.0));
    }

    #[test]
    fn component_body_carries_name() {
        let (m, t) = (FixedAdvance::default(), Theme::light());
        let ctx = PaintContext { measure: &m, theme: &t };
        let shapes = ComponentDiagram::create_shapes(ComponentPalette::Component, "Web", Point::new(0.0, 0.0));
        let mut scene = Scene::new();
        ComponentDiagram::paint_shape(&mut scene, &shapes[0], &ctx);
        assert_eq!(scene.texts(), vec!["Web"]);
        assert!(matches!(&scene.commands[0], DrawCmd::Rect { rect, .. } if *rect == Rect::new(0.0, 0.0, 150.0, 100.0)));
    }
}
