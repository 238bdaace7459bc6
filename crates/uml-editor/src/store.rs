//! Element store: the ordered shape and connector lists of one diagram.
//!
//! Lists are held behind `Rc` and copied on write, so a [`Snapshot`] is an
//! O(1) clone that stays untouched by later edits. Insertion order is
//! paint order within a layer.

use kurbo::Point;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;
use uml_core::diagram::{ConnectorKind, ShapeKind};
use uml_core::id::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("connector {0} would join a shape to itself")]
    SelfLoop(ElementId),
}

/// Frozen copy of both lists.
#[derive(Debug)]
pub struct Snapshot<S, C> {
    shapes: Rc<Vec<S>>,
    connectors: Rc<Vec<C>>,
}

impl<S, C> Clone for Snapshot<S, C> {
    fn clone(&self) -> Self {
        Self {
            shapes: Rc::clone(&self.shapes),
            connectors: Rc::clone(&self.connectors),
        }
    }
}

impl<S, C> Snapshot<S, C> {
    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    pub fn connectors(&self) -> &[C] {
        &self.connectors
    }
}

#[derive(Debug)]
pub struct ElementStore<S, C> {
    shapes: Rc<Vec<S>>,
    connectors: Rc<Vec<C>>,
}

impl<S, C> Default for ElementStore<S, C> {
    fn default() -> Self {
        Self {
            shapes: Rc::new(Vec::new()),
            connectors: Rc::new(Vec::new()),
        }
    }
}

impl<S: ShapeKind, C: ConnectorKind> ElementStore<S, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(shapes: Vec<S>, connectors: Vec<C>) -> Self {
        Self {
            shapes: Rc::new(shapes),
            connectors: Rc::new(connectors),
        }
    }

    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    pub fn connectors(&self) -> &[C] {
        &self.connectors
    }

    pub fn shape(&self, id: ElementId) -> Option<&S> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn connector(&self, id: ElementId) -> Option<&C> {
        self.connectors.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.shape(id).is_some() || self.connector(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.connectors.is_empty()
    }

    // ─── Shapes ──────────────────────────────────────────────────────────

    pub fn add_shape(&mut self, shape: S) {
        Rc::make_mut(&mut self.shapes).push(shape);
    }

    pub fn add_shapes(&mut self, shapes: impl IntoIterator<Item = S>) {
        Rc::make_mut(&mut self.shapes).extend(shapes);
    }

    /// Replace a shape with `f(shape)`, keeping its slot. Returns `false`
    /// if the ID is unknown.
    pub fn update_shape(&mut self, id: ElementId, f: impl FnOnce(&S) -> S) -> bool {
        let Some(index) = self.shapes.iter().position(|s| s.id() == id) else {
            return false;
        };
        let shapes = Rc::make_mut(&mut self.shapes);
        shapes[index] = f(&shapes[index]);
        true
    }

    /// Move a shape to `to`; shapes it owns follow by the same offset.
    pub fn move_shape(&mut self, id: ElementId, to: Point) -> bool {
        let Some(from) = self.shape(id).map(ShapeKind::position) else {
            return false;
        };
        let delta = to - from;
        if delta.x == 0.0 && delta.y == 0.0 {
            return true;
        }
        let owned = self.owned_by(id);
        for shape in Rc::make_mut(&mut self.shapes).iter_mut() {
            if shape.id() == id {
                *shape = shape.with_position(to);
            } else if owned.contains(&shape.id()) {
                *shape = shape.with_position(shape.position() + delta);
            }
        }
        true
    }

    /// Remove a shape, everything it owns, and every connector touching
    /// any of them. Returns the number of elements removed.
    pub fn delete_shape(&mut self, id: ElementId) -> usize {
        if self.shape(id).is_none() {
            return 0;
        }
        let mut doomed = self.owned_by(id);
        doomed.insert(id);

        let shapes_before = self.shapes.len();
        let connectors_before = self.connectors.len();
        Rc::make_mut(&mut self.shapes).retain(|s| !doomed.contains(&s.id()));
        if self.connectors.iter().any(|c| doomed.iter().any(|d| c.references(*d))) {
            Rc::make_mut(&mut self.connectors).retain(|c| !doomed.iter().any(|d| c.references(*d)));
        }
        (shapes_before - self.shapes.len()) + (connectors_before - self.connectors.len())
    }

    /// Transitive closure of ownership below `id`, not including `id`.
    fn owned_by(&self, id: ElementId) -> HashSet<ElementId> {
        let mut owned = HashSet::new();
        let mut frontier = vec![id];
        while let Some(owner) = frontier.pop() {
            for shape in self.shapes.iter() {
                if shape.owner() == Some(owner) && owned.insert(shape.id()) {
                    frontier.push(shape.id());
                }
            }
        }
        owned
    }

    // ─── Connectors ──────────────────────────────────────────────────────

    /// Endpoints are not checked against the shape list; dangling
    /// connectors are skipped when painting.
    pub fn add_connector(&mut self, connector: C) -> Result<(), StoreError> {
        if connector.source() == connector.target() {
            return Err(StoreError::SelfLoop(connector.id()));
        }
        Rc::make_mut(&mut self.connectors).push(connector);
        Ok(())
    }

    pub fn update_connector(&mut self, id: ElementId, f: impl FnOnce(&C) -> C) -> bool {
        let Some(index) = self.connectors.iter().position(|c| c.id() == id) else {
            return false;
        };
        let connectors = Rc::make_mut(&mut self.connectors);
        connectors[index] = f(&connectors[index]);
        true
    }

    pub fn delete_connector(&mut self, id: ElementId) -> bool {
        let Some(index) = self.connectors.iter().position(|c| c.id() == id) else {
            return false;
        };
        Rc::make_mut(&mut self.connectors).remove(index);
        true
    }

    /// Connectors whose source or target is missing.
    pub fn dangling_connectors(&self) -> Vec<ElementId> {
        let ids: HashSet<ElementId> = self.shapes.iter().map(ShapeKind::id).collect();
        self.connectors
            .iter()
            .filter(|c| !ids.contains(&c.source()) || !ids.contains(&c.target()))
            .map(ConnectorKind::id)
            .collect()
    }

    // ─── Whole diagram ───────────────────────────────────────────────────

    /// Delete a shape or connector by ID. Returns the number of elements
    /// removed, cascades included.
    pub fn delete(&mut self, id: ElementId) -> usize {
        if self.shape(id).is_some() {
            self.delete_shape(id)
        } else {
            usize::from(self.delete_connector(id))
        }
    }

    pub fn clear(&mut self) {
        self.shapes = Rc::new(Vec::new());
        self.connectors = Rc::new(Vec::new());
    }

    pub fn replace(&mut self, shapes: Vec<S>, connectors: Vec<C>) {
        self.shapes = Rc::new(shapes);
        self.connectors = Rc::new(connectors);
    }

    pub fn snapshot(&self) -> Snapshot<S, C> {
        Snapshot {
            shapes: Rc::clone(&self.shapes),
            connectors: Rc::clone(&self.connectors),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot<S, C>) {
        self.shapes = snapshot.shapes;
        self.connectors = snapshot.connectors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uml_core::diagram::Diagram;
    use uml_core::diagrams::component::{ComponentConnector, ComponentLink, ComponentPalette, ComponentShape};
    use uml_core::diagrams::package::{PackageConnector, PackagePalette, PackageShape};
    use uml_core::diagrams::{ComponentDiagram, PackageDiagram};

    type PackageStore = ElementStore<PackageShape, PackageConnector>;

    fn package(name: &str, x: f64) -> PackageShape {
        PackageDiagram::create_shapes(PackagePalette::Package, name, Point::new(x, 50.0)).remove(0)
    }

    fn three_packages() -> (PackageStore, [ElementId; 3]) {
        let (a, b, c) = (package("a", 0.0), package("b", 300.0), package("c", 600.0));
        let ids = [a.id(), b.id(), c.id()];
        let ab = PackageDiagram::create_connector(&a, &b, (), Point::ZERO);
        let bc = PackageDiagram::create_connector(&b, &c, (), Point::ZERO);
        let mut store = PackageStore::new();
        store.add_shapes([a, b, c]);
        store.add_connector(ab).unwrap();
        store.add_connector(bc).unwrap();
        (store, ids)
    }

    #[test]
    fn delete_cascades_to_connectors() {
        let (mut store, [_, b, _]) = three_packages();
        assert_eq!(store.delete(b), 3);
        assert_eq!(store.shapes().len(), 2);
        assert!(store.connectors().is_empty());
        assert!(store.dangling_connectors().is_empty());
    }

    #[test]
    fn deleting_an_end_shape_keeps_unrelated_connectors() {
        let (mut store, [a, _, c]) = three_packages();
        store.delete_shape(a);
        assert_eq!(store.connectors().len(), 1);
        assert_eq!(store.connectors()[0].target(), c);
    }

    #[test]
    fn self_loop_is_rejected() {
        let a = package("a", 0.0);
        let mut store = PackageStore::new();
        store.add_shape(a.clone());
        let looped = PackageDiagram::create_connector(&a, &a, (), Point::ZERO);
        let id = looped.id();
        assert_eq!(store.add_connector(looped), Err(StoreError::SelfLoop(id)));
        assert!(store.connectors().is_empty());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_edits() {
        let (mut store, [a, b, _]) = three_packages();
        let before = store.snapshot();
        store.move_shape(a, Point::new(10.0, 10.0));
        store.delete(b);
        assert_eq!(before.shapes().len(), 3);
        assert_eq!(before.shapes()[0].position(), Point::new(0.0, 50.0));

        store.restore(before);
        assert_eq!(store.shapes().len(), 3);
        assert_eq!(store.connectors().len(), 2);
        assert_eq!(store.shape(a).unwrap().position(), Point::new(0.0, 50.0));
    }

    #[test]
    fn update_keeps_order() {
        let (mut store, [_, b, _]) = three_packages();
        assert!(store.update_shape(b, |s| s.with_name("renamed")));
        assert_eq!(store.shapes()[1].name(), "renamed");
        assert!(!store.update_shape(ElementId::intern("nope"), |s| s.clone()));
    }

    #[test]
    fn unknown_ids_are_noops() {
        let (mut store, _) = three_packages();
        let ghost = ElementId::intern("ghost");
        assert_eq!(store.delete(ghost), 0);
        assert!(!store.move_shape(ghost, Point::ZERO));
        assert!(!store.delete_connector(ghost));
        assert_eq!(store.shapes().len(), 3);
    }

    #[test]
    fn dangling_connectors_are_reported() {
        let a = package("a", 0.0);
        let b = package("b", 300.0);
        let dep = PackageDiagram::create_connector(&a, &b, (), Point::ZERO);
        let dep_id = dep.id();
        let store = PackageStore::with_elements(vec![a], vec![dep]);
        assert_eq!(store.dangling_connectors(), vec![dep_id]);
    }

    // ─── Owned shapes ────────────────────────────────────────────────────

    fn component_store() -> (ElementStore<ComponentShape, ComponentConnector>, Vec<ElementId>) {
        let mut shapes = ComponentDiagram::create_shapes(ComponentPalette::Component, "Web", Point::new(0.0, 0.0));
        shapes.extend(ComponentDiagram::create_shapes(ComponentPalette::Component, "Api", Point::new(300.0, 0.0)));
        let ids = shapes.iter().map(ShapeKind::id).collect();
        let conn = ComponentDiagram::create_connector(&shapes[2], &shapes[4], ComponentLink::default(), Point::ZERO);
        let mut store = ElementStore::with_elements(shapes, Vec::new());
        store.add_connector(conn).unwrap();
        (store, ids)
    }

    #[test]
    fn ports_follow_their_component() {
        let (mut store, ids) = component_store();
        store.move_shape(ids[0], Point::new(40.0, 20.0));
        assert_eq!(store.shape(ids[1]).unwrap().position(), Point::new(40.0, 70.0));
        assert_eq!(store.shape(ids[2]).unwrap().position(), Point::new(190.0, 70.0));
        // The other component's ports stay put.
        assert_eq!(store.shape(ids[4]).unwrap().position(), Point::new(450.0, 50.0));
    }

    #[test]
    fn deleting_component_removes_ports_and_their_connections() {
        let (mut store, ids) = component_store();
        assert_eq!(store.delete(ids[3]), 4);
        let left: Vec<ElementId> = store.shapes().iter().map(ShapeKind::id).collect();
        assert_eq!(left, ids[..3].to_vec());
        assert!(store.connectors().is_empty());
    }
}
