//! Integration tests: single-level undo across editor mutations.

use pretty_assertions::assert_eq;
use uml_core::diagrams::PackageDiagram;
use uml_core::diagrams::package::{PackagePalette, PackageShape};
use uml_core::{Point, ShapeKind, Size};
use uml_editor::DiagramEditor;

fn with_packages(names: &[&str]) -> DiagramEditor<PackageDiagram> {
    let mut ed = DiagramEditor::new(Size::new(1000.0, 700.0));
    for (i, name) in names.iter().enumerate() {
        ed.drop_item(PackagePalette::Package, Point::new(250.0 * i as f64, 50.0)).unwrap();
        ed.submit_shape(name).unwrap();
    }
    ed
}

fn names(ed: &DiagramEditor<PackageDiagram>) -> Vec<String> {
    ed.shapes().iter().map(|s| s.name().to_string()).collect()
}

#[test]
fn empty_history_undo_is_a_no_op() {
    let mut ed = with_packages(&[]);
    assert!(!ed.can_undo());
    assert!(!ed.undo().unwrap());
    assert!(ed.shapes().is_empty());
}

#[test]
fn each_mutation_undoes_separately() {
    let mut ed = with_packages(&["web", "datos"]);
    let web = ed.shapes()[0].id();
    let datos = ed.shapes()[1].id();
    ed.connect(web, datos, (), Point::ZERO).unwrap();
    ed.rename(datos, "persistencia").unwrap();
    assert_eq!(ed.history_len(), 4);

    assert!(ed.undo().unwrap());
    assert_eq!(names(&ed), vec!["web", "datos"]);
    assert_eq!(ed.connectors().len(), 1);

    assert!(ed.undo().unwrap());
    assert!(ed.connectors().is_empty());

    assert!(ed.undo().unwrap());
    assert_eq!(names(&ed), vec!["web"]);

    assert!(ed.undo().unwrap());
    assert!(ed.shapes().is_empty());
    assert!(!ed.undo().unwrap());
}

#[test]
fn undo_restores_cascaded_connectors() {
    let mut ed = with_packages(&["a", "b", "c"]);
    let ids: Vec<_> = ed.shapes().iter().map(ShapeKind::id).collect();
    ed.connect(ids[0], ids[1], (), Point::ZERO).unwrap();
    ed.connect(ids[2], ids[1], (), Point::ZERO).unwrap();

    assert_eq!(ed.delete(ids[1]).unwrap(), 3);
    assert!(ed.connectors().is_empty());

    ed.undo().unwrap();
    assert_eq!(ed.shapes().len(), 3);
    assert_eq!(ed.connectors().len(), 2);
}

#[test]
fn undo_after_drag_returns_to_grab_position() {
    let mut ed = with_packages(&["web"]);
    let id = ed.shapes()[0].id();
    ed.pointer_down(1, Point::new(100.0, 100.0));
    ed.pointer_move(1, Point::new(400.0, 300.0));
    ed.pointer_up(1, Point::new(400.0, 300.0));
    assert_eq!(ed.shape(id).unwrap().position(), Point::new(300.0, 250.0));

    ed.undo().unwrap();
    assert_eq!(ed.shape(id).unwrap().position(), Point::new(0.0, 50.0));
}

#[test]
fn failed_mutations_leave_no_history() {
    let mut ed = with_packages(&["web"]);
    let web = ed.shapes()[0].id();
    let history = ed.history_len();

    assert!(ed.connect(web, web, (), Point::ZERO).is_err());
    assert_eq!(ed.delete(uml_core::ElementId::intern("nope")).unwrap(), 0);
    assert!(!ed.rename(uml_core::ElementId::intern("nope"), "x").unwrap());
    assert_eq!(ed.history_len(), history);
}

#[test]
fn clear_and_import_are_undoable() {
    let mut ed = with_packages(&["web", "datos"]);
    let before = ed.shapes().to_vec();
    let json = ed.export_json().unwrap();

    ed.clear().unwrap();
    assert!(ed.shapes().is_empty());
    ed.undo().unwrap();
    assert_eq!(ed.shapes(), before.as_slice());

    let mut other = with_packages(&["solo"]);
    other.import_json(&json).unwrap();
    assert_eq!(other.shapes().len(), 2);
    other.undo().unwrap();
    assert_eq!(names(&other), vec!["solo"]);
    let PackageShape::Package { width, .. } = &other.shapes()[0];
    assert_eq!(*width, 200.0);
}

#[test]
fn undo_drops_selection_of_vanished_shape() {
    let mut ed = with_packages(&["web"]);
    let id = ed.shapes()[0].id();
    assert_eq!(ed.selected(), Some(id));
    ed.undo().unwrap();
    assert_eq!(ed.selected(), None);
}
