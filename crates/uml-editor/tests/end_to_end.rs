//! Integration tests: whole editing sessions (uml-editor).
//!
//! Drives `DiagramEditor` the way the browser host does, through palette
//! drops, pointer events, prompts and JSON documents, then checks the
//! resulting diagram.

use pretty_assertions::assert_eq;
use uml_core::diagrams::class::{ClassPalette, ClassShape};
use uml_core::diagrams::usecase::{UseCaseConnector, UseCasePalette};
use uml_core::diagrams::{ClassDiagram, UseCaseDiagram};
use uml_core::{ConnectorKind, Point, ShapeKind, Size};
use uml_editor::{DiagramEditor, Tool};

fn class_editor() -> DiagramEditor<ClassDiagram> {
    DiagramEditor::new(Size::new(1200.0, 800.0))
}

// ─── Drop, drag, export, import ──────────────────────────────────────────

#[test]
fn drop_drag_export_import() {
    let mut ed = class_editor();

    let id = ed
        .drop_item(ClassPalette::Class, Point::new(100.0, 100.0))
        .unwrap()
        .expect("classes are inserted without a prompt");
    assert_eq!(ed.shapes().len(), 1);
    let ClassShape::Class(class) = ed.shape(id).unwrap() else {
        panic!("expected a class");
    };
    assert_eq!(class.name, "Clase1");
    assert_eq!((class.x, class.y), (100.0, 100.0));
    assert_eq!(class.attributes.len(), 1);
    assert_eq!(class.methods.len(), 1);
    let history_after_drop = ed.history_len();

    // Grab 10 px inside the corner and drag by (150, 80).
    assert!(ed.pointer_down(1, Point::new(110.0, 110.0)));
    assert_eq!(ed.selected(), Some(id));
    assert_eq!(ed.history_len(), history_after_drop + 1, "one snapshot at drag start");
    assert!(ed.pointer_move(1, Point::new(200.0, 150.0)));
    assert!(ed.pointer_move(1, Point::new(260.0, 190.0)));
    assert!(ed.pointer_up(1, Point::new(260.0, 190.0)));
    assert_eq!(ed.history_len(), history_after_drop + 1, "moves add no snapshots");
    assert_eq!(ed.shape(id).unwrap().position(), Point::new(250.0, 180.0));

    let json = ed.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let shapes = value["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["x"], 250.0);
    assert_eq!(shapes[0]["y"], 180.0);

    let mut fresh = class_editor();
    fresh.import_json(&json).unwrap();
    assert_eq!(fresh.shapes(), ed.shapes());
    assert_eq!(fresh.shape(id).unwrap().position(), Point::new(250.0, 180.0));
}

#[test]
fn dragging_never_leaves_the_canvas() {
    let mut ed = class_editor();
    let id = ed.drop_item(ClassPalette::Class, Point::new(20.0, 20.0)).unwrap().unwrap();
    ed.pointer_down(1, Point::new(30.0, 30.0));
    ed.pointer_move(1, Point::new(-100.0, 5.0));
    ed.pointer_up(1, Point::new(-100.0, 5.0));
    assert_eq!(ed.shape(id).unwrap().position(), Point::new(0.0, 0.0));
}

#[test]
fn default_names_count_per_kind() {
    let mut ed = class_editor();
    ed.drop_item(ClassPalette::Class, Point::new(0.0, 0.0)).unwrap();
    ed.drop_item(ClassPalette::Package, Point::new(0.0, 300.0)).unwrap();
    ed.drop_item(ClassPalette::Class, Point::new(400.0, 0.0)).unwrap();
    let names: Vec<&str> = ed.shapes().iter().map(ShapeKind::name).collect();
    assert_eq!(names, vec!["Clase1", "Paquete1", "Clase2"]);
}

// ─── Use-case session ────────────────────────────────────────────────────

#[test]
fn use_case_session() {
    let mut ed: DiagramEditor<UseCaseDiagram> = DiagramEditor::new(Size::new(1200.0, 800.0));

    assert_eq!(ed.drop_item(UseCasePalette::SystemBoundary, Point::new(300.0, 50.0)).unwrap(), None);
    let boundary = ed.submit_shape("Cajero").unwrap();
    ed.drop_item(UseCasePalette::Actor, Point::new(100.0, 200.0)).unwrap();
    let actor = ed.submit_shape("Cliente").unwrap();
    ed.drop_item(UseCasePalette::UseCase, Point::new(500.0, 200.0)).unwrap();
    let use_case = ed.submit_shape("  Retirar dinero ").unwrap();
    assert_eq!(ed.shape(use_case).unwrap().name(), "Retirar dinero");

    // Links are created straight away, actor to use case.
    ed.set_tool(Tool::Connector);
    assert!(ed.pointer_down(7, Point::new(100.0, 200.0)));
    assert!(ed.pointer_up(7, Point::new(520.0, 210.0)));
    assert_eq!(ed.connectors().len(), 1);
    let UseCaseConnector::Link { source, target, .. } = &ed.connectors()[0];
    assert_eq!((*source, *target), (actor, use_case));

    // The boundary takes no connectors, even though it sits under the pointer.
    assert!(!ed.pointer_down(7, Point::new(650.0, 500.0)));
    assert_eq!(ed.connectors().len(), 1);

    // Deleting the actor takes its link with it; the boundary stays.
    ed.set_tool(Tool::Select);
    ed.pointer_down(1, Point::new(100.0, 205.0));
    ed.pointer_up(1, Point::new(100.0, 205.0));
    assert_eq!(ed.selected(), Some(actor));
    assert_eq!(ed.delete_selected().unwrap(), 2);
    assert!(ed.connectors().is_empty());
    assert!(ed.shape(boundary).is_some());
    assert_eq!(ed.selected(), None);

    // Undo brings both back.
    assert!(ed.undo().unwrap());
    assert_eq!(ed.connectors().len(), 1);
    assert_eq!(ed.connectors()[0].source(), actor);
}

#[test]
fn rejected_import_leaves_diagram_untouched() {
    let mut ed = class_editor();
    ed.drop_item(ClassPalette::Class, Point::new(0.0, 0.0)).unwrap();
    let before = ed.shapes().to_vec();
    let history = ed.history_len();

    let err = ed.import_json(r#"{"diagram":"sequence","shapes":[],"connectors":[]}"#);
    assert!(err.is_err());
    assert!(ed.import_json("not json at all").is_err());

    assert_eq!(ed.shapes(), before.as_slice());
    assert_eq!(ed.history_len(), history);
    let notice = ed.poll_notice(0.0).unwrap();
    assert_eq!(notice.kind, uml_editor::NoticeKind::Error);
}
