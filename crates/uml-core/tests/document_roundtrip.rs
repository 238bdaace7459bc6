//! Export → import round trips for every diagram kind.
//!
//! Each test builds a small diagram through the public factories, writes
//! it to JSON and reads it back, expecting structurally equal lists.

use pretty_assertions::assert_eq;
use uml_core::diagrams::class::{ClassPalette, ClassRelation, RelationshipKind};
use uml_core::diagrams::component::{ComponentLink, ComponentPalette, ConnectionKind};
use uml_core::diagrams::package::PackagePalette;
use uml_core::diagrams::sequence::SequencePalette;
use uml_core::diagrams::usecase::UseCasePalette;
use uml_core::document::{export, import};
use uml_core::*;

fn roundtrip<D: Diagram>(shapes: Vec<D::Shape>, connectors: Vec<D::Connector>) {
    let json = export::<D>(&shapes, &connectors).unwrap();
    let doc = import::<D>(&json).unwrap();
    assert_eq!(doc.diagram, D::KIND);
    assert_eq!(doc.shapes, shapes);
    assert_eq!(doc.connectors, connectors);
}

// ─── Per-diagram ─────────────────────────────────────────────────────────

#[test]
fn class_diagram_roundtrip() {
    let pkg = ClassDiagram::create_shapes(ClassPalette::Package, "dominio", Point::new(0.0, 0.0)).remove(0);
    let a = ClassDiagram::create_shapes(ClassPalette::Class, "Cliente", Point::new(20.0, 40.0)).remove(0);
    let b = ClassDiagram::create_shapes(ClassPalette::Class, "Pedido", Point::new(320.0, 40.0)).remove(0);
    let rel = ClassDiagram::create_connector(&a, &b, ClassRelation::Relationship(RelationshipKind::Aggregation), Point::ZERO);
    let member = ClassDiagram::create_connector(&pkg, &a, ClassRelation::Membership, Point::ZERO);
    roundtrip::<ClassDiagram>(vec![pkg, a, b], vec![rel, member]);
}

#[test]
fn sequence_diagram_roundtrip() {
    let a = SequenceDiagram::create_shapes(SequencePalette::Object, "Cliente", Point::new(100.0, 0.0)).remove(0);
    let b = SequenceDiagram::create_shapes(SequencePalette::Object, "Banco", Point::new(400.0, 0.0)).remove(0);
    let msg = SequenceDiagram::create_connector(&a, &b, "getBalance(id)".into(), Point::new(100.0, 180.0));
    roundtrip::<SequenceDiagram>(vec![a, b], vec![msg]);
}

#[test]
fn use_case_diagram_roundtrip() {
    let boundary = UseCaseDiagram::create_shapes(UseCasePalette::SystemBoundary, "Cajero", Point::new(200.0, 20.0)).remove(0);
    let actor = UseCaseDiagram::create_shapes(UseCasePalette::Actor, "Cliente", Point::new(60.0, 200.0)).remove(0);
    let uc = UseCaseDiagram::create_shapes(UseCasePalette::UseCase, "Retirar", Point::new(400.0, 200.0)).remove(0);
    let link = UseCaseDiagram::create_connector(&actor, &uc, (), Point::ZERO);
    roundtrip::<UseCaseDiagram>(vec![boundary, actor, uc], vec![link]);
}

#[test]
fn component_diagram_roundtrip() {
    let mut shapes = ComponentDiagram::create_shapes(ComponentPalette::Component, "Web", Point::new(0.0, 0.0));
    shapes.extend(ComponentDiagram::create_shapes(ComponentPalette::Component, "Api", Point::new(300.0, 0.0)));
    let link = ComponentLink {
        kind: ConnectionKind::Interface,
        label: Some("REST".into()),
    };
    let conn = ComponentDiagram::create_connector(&shapes[2], &shapes[4], link, Point::ZERO);
    roundtrip::<ComponentDiagram>(shapes, vec![conn]);
}

#[test]
fn package_diagram_roundtrip() {
    let a = PackageDiagram::create_shapes(PackagePalette::Package, "web", Point::new(0.0, 50.0)).remove(0);
    let b = PackageDiagram::create_shapes(PackagePalette::Package, "datos", Point::new(300.0, 50.0)).remove(0);
    let dep = PackageDiagram::create_connector(&a, &b, (), Point::ZERO);
    roundtrip::<PackageDiagram>(vec![a, b], vec![dep]);
}

#[test]
fn zoomed_positions_roundtrip_exactly() {
    // Drops at 1.3x land on canvas coordinates with long binary expansions.
    let shapes: Vec<_> = (0..500)
        .map(|i| {
            let screen = Point::new(100.0 + i as f64 * 1.7, 80.0 + i as f64 * 3.1);
            let at = Point::new(screen.x / 1.3, screen.y / 1.3);
            ClassDiagram::create_shapes(ClassPalette::Class, "Clase", at).remove(0)
        })
        .collect();
    let json = export::<ClassDiagram>(&shapes, &[]).unwrap();
    let doc = import::<ClassDiagram>(&json).unwrap();
    for (read, written) in doc.shapes.iter().zip(&shapes) {
        assert_eq!(read.position(), written.position());
    }
    assert_eq!(doc.shapes, shapes);
}

// ─── Validation ──────────────────────────────────────────────────────────

#[test]
fn port_without_owner_is_rejected() {
    let shapes = ComponentDiagram::create_shapes(ComponentPalette::Component, "Web", Point::ZERO);
    let orphan_ports = &shapes[1..];
    let json = export::<ComponentDiagram>(orphan_ports, &[]).unwrap();
    let err = import::<ComponentDiagram>(&json).unwrap_err();
    assert!(matches!(err, DocumentError::MissingOwner { .. }));
}

#[test]
fn empty_document_is_valid() {
    roundtrip::<UseCaseDiagram>(vec![], vec![]);
}
