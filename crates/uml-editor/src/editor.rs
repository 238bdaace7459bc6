//! The generic diagram editor.
//!
//! One `DiagramEditor<D>` drives any diagram kind through the [`Diagram`]
//! capability trait: pointer gestures (select, drag, draw a connector),
//! palette drops, naming prompts, undo, zoom, lock, and JSON documents.
//!
//! ```text
//!            down on shape              up
//!   Idle ───────────────────▶ Dragging ─────▶ Idle
//!     │  down on anchor                  up on anchor
//!     ├─────────────────────▶ Drawing  ──────────────▶ Idle / Prompt
//!     │  drop needing a name
//!     └─────────────────────▶ Prompt ── submit / cancel ──▶ Idle
//! ```
//!
//! The pointer that starts a gesture owns it until it is released or
//! cancelled; events from any other pointer are ignored meanwhile.

use crate::error::EditorError;
use crate::history::HistoryStack;
use crate::input::{InputEvent, Modifiers, PointerId};
use crate::notice::{Notice, NoticeBoard};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::store::{ElementStore, Snapshot};
use chrono::NaiveDate;
use kurbo::{Point, Size, Vec2};
use uml_core::diagram::{ConnectPrompt, ConnectorKind, Diagram, ShapeKind};
use uml_core::document;
use uml_core::id::ElementId;
use uml_core::text::{FixedAdvance, TextMeasure};
use uml_render::{DiagramPainter, Frame, PaintContext, Scene, Theme, anchor_at, hit_test, paint_scene};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 2.0;
pub const SCALE_STEP: f64 = 0.1;

/// Zoom bounds. Scales are kept on a 0.1 grid inside `[min_scale, max_scale]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub scale_step: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            scale_step: SCALE_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Connector,
}

/// What an open prompt creates once answered.
#[derive(Debug, Clone)]
pub enum Pending<D: Diagram> {
    /// Palette drop waiting for a name.
    NewShape { item: D::Palette, at: Point },
    /// Finished connector gesture waiting for its relation details.
    NewConnector {
        source: ElementId,
        target: ElementId,
        start: Point,
    },
}

#[derive(Debug, Clone)]
pub enum Mode<D: Diagram> {
    Idle,
    Dragging {
        pointer: PointerId,
        id: ElementId,
        /// Pointer minus shape origin at grab time.
        grab: Vec2,
    },
    DrawingConnector {
        pointer: PointerId,
        source: ElementId,
        start: Point,
        cursor: Point,
    },
    Prompt(Pending<D>),
}

type Store<D> = ElementStore<<D as Diagram>::Shape, <D as Diagram>::Connector>;

pub struct DiagramEditor<D: Diagram> {
    store: Store<D>,
    history: HistoryStack<Snapshot<D::Shape, D::Connector>>,
    mode: Mode<D>,
    tool: Tool,
    selected: Option<ElementId>,
    scale: f64,
    viewport: Size,
    locked: bool,
    dirty: bool,
    notices: NoticeBoard,
    measure: Box<dyn TextMeasure>,
    config: EditorConfig,
}

impl<D: Diagram> DiagramEditor<D> {
    pub fn new(viewport: Size) -> Self {
        Self {
            store: ElementStore::new(),
            history: HistoryStack::new(),
            mode: Mode::Idle,
            tool: Tool::Select,
            selected: None,
            scale: 1.0,
            viewport,
            locked: false,
            dirty: true,
            notices: NoticeBoard::default(),
            measure: Box::new(FixedAdvance::default()),
            config: EditorConfig::default(),
        }
    }

    pub fn set_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.measure = Box::new(measure);
        self.dirty = true;
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        let scale = self.scale;
        self.set_scale(scale);
        self
    }

    /// Measure text with `measure` instead of the fixed-advance estimate.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self.dirty = true;
        self
    }

    // ─── Read access ─────────────────────────────────────────────────────

    pub fn shapes(&self) -> &[D::Shape] {
        self.store.shapes()
    }

    pub fn connectors(&self) -> &[D::Connector] {
        self.store.connectors()
    }

    pub fn shape(&self, id: ElementId) -> Option<&D::Shape> {
        self.store.shape(id)
    }

    pub fn connector(&self, id: ElementId) -> Option<&D::Connector> {
        self.store.connector(id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn mode(&self) -> &Mode<D> {
        &self.mode
    }

    pub fn pending(&self) -> Option<&Pending<D>> {
        match &self.mode {
            Mode::Prompt(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    /// The pointer owning the current gesture.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self.mode {
            Mode::Dragging { pointer, .. } | Mode::DrawingConnector { pointer, .. } => Some(pointer),
            Mode::Idle | Mode::Prompt(_) => None,
        }
    }

    /// Ask the host for a repaint without changing any state, e.g. after
    /// a theme switch.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Whether anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
        self.dirty = true;
    }

    /// Clamped to the configured bounds and kept on the 0.1 grid.
    pub fn set_scale(&mut self, scale: f64) {
        let scale = (scale.clamp(self.config.min_scale, self.config.max_scale) * 10.0).round() / 10.0;
        if scale != self.scale {
            self.scale = scale;
            self.dirty = true;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + self.config.scale_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - self.config.scale_step);
    }

    fn to_canvas(&self, screen: Point) -> Point {
        Point::new(screen.x / self.scale, screen.y / self.scale)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.captured_pointer().is_some() {
            self.mode = Mode::Idle;
        }
        self.tool = tool;
        self.dirty = true;
    }

    /// A locked diagram can be looked at, zoomed and selected in, but not
    /// changed.
    pub fn set_locked(&mut self, locked: bool) {
        if locked && !matches!(self.mode, Mode::Idle) {
            self.mode = Mode::Idle;
        }
        self.locked = locked;
        self.dirty = true;
        log::info!("{} diagram {}", D::KIND, if locked { "locked" } else { "unlocked" });
    }

    pub fn toggle_lock(&mut self) -> bool {
        self.set_locked(!self.locked);
        self.locked
    }

    fn guard(&self, action: &str) -> Result<(), EditorError> {
        if self.locked {
            log::warn!("{} diagram is locked; {action} refused", D::KIND);
            return Err(EditorError::Locked);
        }
        Ok(())
    }

    /// Run a mutation, pushing the prior state to the history only if it
    /// succeeds.
    fn record<T>(&mut self, f: impl FnOnce(&mut Store<D>) -> Result<T, EditorError>) -> Result<T, EditorError> {
        let before = self.store.snapshot();
        let out = f(&mut self.store)?;
        self.history.push(before);
        self.dirty = true;
        Ok(out)
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Returns `true` when the event was consumed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { pointer, x, y } => self.pointer_down(*pointer, Point::new(*x, *y)),
            InputEvent::PointerMove { pointer, x, y } => self.pointer_move(*pointer, Point::new(*x, *y)),
            InputEvent::PointerUp { pointer, x, y } => self.pointer_up(*pointer, Point::new(*x, *y)),
            InputEvent::PointerCancel { pointer } => self.pointer_cancel(*pointer),
            InputEvent::Key { key, modifiers } => self.key(key, *modifiers).is_some(),
        }
    }

    /// Returns `true` when this pointer now owns a gesture and the host
    /// should capture it.
    pub fn pointer_down(&mut self, pointer: PointerId, screen: Point) -> bool {
        if let Some(owner) = self.captured_pointer() {
            log::trace!("pointer {pointer} ignored while pointer {owner} owns the gesture");
            return false;
        }
        if matches!(self.mode, Mode::Prompt(_)) {
            return false;
        }
        let p = self.to_canvas(screen);
        match self.tool {
            Tool::Select => self.begin_drag(pointer, p),
            Tool::Connector => self.begin_connector(pointer, p),
        }
    }

    fn begin_drag(&mut self, pointer: PointerId, p: Point) -> bool {
        // A click on an owned shape acts on its owner.
        let hit = hit_test::<D>(self.store.shapes(), p, self.measure.as_ref())
            .map(|s| s.owner().and_then(|owner| self.store.shape(owner)).unwrap_or(s))
            .map(|s| (s.id(), s.position(), D::is_draggable(s)));
        let hit_id = hit.map(|(id, _, _)| id);
        if self.selected != hit_id {
            self.selected = hit_id;
            self.dirty = true;
        }

        let Some((id, origin, true)) = hit else {
            return false;
        };
        if self.guard("drag").is_err() {
            return false;
        }
        self.history.push(self.store.snapshot());
        self.mode = Mode::Dragging {
            pointer,
            id,
            grab: p - origin,
        };
        true
    }

    fn begin_connector(&mut self, pointer: PointerId, p: Point) -> bool {
        if self.guard("connector").is_err() {
            return false;
        }
        let Some((source, start)) =
            anchor_at::<D>(self.store.shapes(), p, self.measure.as_ref()).map(|(s, at)| (s.id(), at))
        else {
            return false;
        };
        self.mode = Mode::DrawingConnector {
            pointer,
            source,
            start,
            cursor: start,
        };
        self.dirty = true;
        true
    }

    pub fn pointer_move(&mut self, pointer: PointerId, screen: Point) -> bool {
        if self.captured_pointer() != Some(pointer) {
            return false;
        }
        let p = self.to_canvas(screen);
        match &mut self.mode {
            Mode::Dragging { id, grab, .. } => {
                let (id, grab) = (*id, *grab);
                if let Some(shape) = self.store.shape(id) {
                    let to = D::drag_position(shape, p, grab);
                    self.store.move_shape(id, to);
                    self.dirty = true;
                }
            }
            Mode::DrawingConnector { cursor, .. } => {
                *cursor = p;
                self.dirty = true;
            }
            Mode::Idle | Mode::Prompt(_) => {}
        }
        true
    }

    /// Returns `true` when the gesture ended and the host should release
    /// the pointer.
    pub fn pointer_up(&mut self, pointer: PointerId, screen: Point) -> bool {
        if self.captured_pointer() != Some(pointer) {
            return false;
        }
        let p = self.to_canvas(screen);
        if let Mode::DrawingConnector { source, start, .. } = std::mem::replace(&mut self.mode, Mode::Idle) {
            self.finish_connector(source, start, p);
        }
        self.dirty = true;
        true
    }

    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        if self.captured_pointer() != Some(pointer) {
            return false;
        }
        self.mode = Mode::Idle;
        self.dirty = true;
        true
    }

    fn finish_connector(&mut self, source: ElementId, start: Point, p: Point) {
        let Some(target) = anchor_at::<D>(self.store.shapes(), p, self.measure.as_ref()).map(|(s, _)| s) else {
            log::debug!("connector released over nothing");
            return;
        };
        let Some(from) = self.store.shape(source) else {
            return;
        };
        let target_id = target.id();
        if target_id == source || !D::can_connect(from, target) {
            log::debug!("{} cannot connect {source} to {target_id}", D::KIND);
            return;
        }
        match D::connect_prompt(from, target) {
            ConnectPrompt::Direct(relation) => {
                if let Err(err) = self.connect(source, target_id, relation, start) {
                    log::warn!("connector not created: {err}");
                }
            }
            ConnectPrompt::Ask => {
                self.mode = Mode::Prompt(Pending::NewConnector {
                    source,
                    target: target_id,
                    start,
                });
            }
        }
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Apply a shortcut. While a prompt is open only Escape does anything.
    pub fn key(&mut self, key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let action = ShortcutMap::resolve(key, modifiers)?;
        if matches!(self.mode, Mode::Prompt(_)) && action != ShortcutAction::Cancel {
            return None;
        }
        match action {
            ShortcutAction::ToolSelect => self.set_tool(Tool::Select),
            ShortcutAction::ToolConnector => self.set_tool(Tool::Connector),
            ShortcutAction::Undo => {
                if let Err(err) = self.undo() {
                    log::debug!("undo shortcut: {err}");
                }
            }
            ShortcutAction::Delete => {
                if let Err(err) = self.delete_selected() {
                    log::debug!("delete shortcut: {err}");
                }
            }
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::Cancel => self.cancel(),
        }
        Some(action)
    }

    /// Escape: close the prompt, else abort the gesture, else deselect.
    pub fn cancel(&mut self) {
        match self.mode {
            Mode::Idle => self.selected = None,
            _ => self.mode = Mode::Idle,
        }
        self.dirty = true;
    }

    // ─── Creating ────────────────────────────────────────────────────────

    /// Drop a palette item at a screen position. Items with a default
    /// name are inserted at once and their ID returned; the others open a
    /// naming prompt.
    pub fn drop_item(&mut self, item: D::Palette, screen: Point) -> Result<Option<ElementId>, EditorError> {
        self.guard("drop")?;
        let at = self.to_canvas(screen);
        match D::default_name(item, self.store.shapes()) {
            Some(name) => self.insert(item, &name, at).map(Some),
            None => {
                self.mode = Mode::Prompt(Pending::NewShape { item, at });
                self.dirty = true;
                Ok(None)
            }
        }
    }

    fn insert(&mut self, item: D::Palette, name: &str, at: Point) -> Result<ElementId, EditorError> {
        let shapes = D::create_shapes(item, name, at);
        let id = shapes.first().map(ShapeKind::id).ok_or(EditorError::NothingCreated)?;
        self.record(|store| {
            store.add_shapes(shapes);
            Ok(())
        })?;
        self.selected = Some(id);
        log::debug!("added {id} to {} diagram", D::KIND);
        Ok(id)
    }

    /// Answer a naming prompt. A blank name keeps the prompt open.
    pub fn submit_shape(&mut self, name: &str) -> Result<ElementId, EditorError> {
        let Mode::Prompt(Pending::NewShape { item, at }) = &self.mode else {
            return Err(EditorError::NoPrompt);
        };
        let (item, at) = (*item, *at);
        self.guard("new shape")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        let id = self.insert(item, name, at)?;
        self.mode = Mode::Idle;
        Ok(id)
    }

    /// Answer a connector prompt. The prompt closes whatever the outcome.
    pub fn submit_connector(&mut self, relation: D::Relation) -> Result<ElementId, EditorError> {
        let Mode::Prompt(Pending::NewConnector { source, target, start }) = &self.mode else {
            return Err(EditorError::NoPrompt);
        };
        let (source, target, start) = (*source, *target, *start);
        self.mode = Mode::Idle;
        self.dirty = true;
        self.connect(source, target, relation, start)
    }

    pub fn cancel_prompt(&mut self) -> bool {
        if !matches!(self.mode, Mode::Prompt(_)) {
            return false;
        }
        self.mode = Mode::Idle;
        self.dirty = true;
        true
    }

    /// Create a connector between two existing shapes.
    pub fn connect(
        &mut self,
        source: ElementId,
        target: ElementId,
        relation: D::Relation,
        start: Point,
    ) -> Result<ElementId, EditorError> {
        self.guard("connector")?;
        let from = self.store.shape(source).ok_or(EditorError::UnknownElement(source))?;
        let to = self.store.shape(target).ok_or(EditorError::UnknownElement(target))?;
        let connector = D::create_connector(from, to, relation, start);
        let id = connector.id();
        self.record(|store| Ok(store.add_connector(connector)?))?;
        log::debug!("connected {source} → {target} as {id}");
        Ok(id)
    }

    // ─── Editing ─────────────────────────────────────────────────────────

    /// Replace a shape with an edited copy. The edit may not move the
    /// shape to another owner.
    pub fn update_shape(&mut self, id: ElementId, f: impl FnOnce(&D::Shape) -> D::Shape) -> Result<bool, EditorError> {
        self.guard("update")?;
        let Some(current) = self.store.shape(id) else {
            return Ok(false);
        };
        let next = f(current);
        if next.owner() != current.owner() {
            log::warn!("refused to move {id} to another owner");
            return Err(EditorError::OwnerChanged(id));
        }
        self.record(|store| Ok(store.update_shape(id, |_| next)))
    }

    pub fn rename(&mut self, id: ElementId, name: &str) -> Result<bool, EditorError> {
        self.update_shape(id, |s| s.with_name(name))
    }

    pub fn update_connector(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&D::Connector) -> D::Connector,
    ) -> Result<bool, EditorError> {
        self.guard("update")?;
        if self.store.connector(id).is_none() {
            return Ok(false);
        }
        self.record(|store| Ok(store.update_connector(id, f)))
    }

    /// Delete a shape (with its owned shapes and connectors) or a
    /// connector. Returns how many elements went away. Owned shapes only
    /// go with their owner.
    pub fn delete(&mut self, id: ElementId) -> Result<usize, EditorError> {
        self.guard("delete")?;
        if !self.store.contains(id) {
            return Ok(0);
        }
        if let Some(owner) = self.store.shape(id).and_then(ShapeKind::owner) {
            return Err(EditorError::Owned { id, owner });
        }
        let removed = self.record(|store| Ok(store.delete(id)))?;
        self.drop_stale_selection();
        Ok(removed)
    }

    pub fn delete_selected(&mut self) -> Result<usize, EditorError> {
        self.guard("delete")?;
        match self.selected {
            Some(id) => self.delete(id),
            None => Ok(0),
        }
    }

    pub fn clear(&mut self) -> Result<(), EditorError> {
        self.guard("clear")?;
        self.record(|store| {
            store.clear();
            Ok(())
        })?;
        self.selected = None;
        self.mode = Mode::Idle;
        Ok(())
    }

    /// Restore the state before the last change. `Ok(false)` when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.guard("undo")?;
        self.mode = Mode::Idle;
        let Some(snapshot) = self.history.undo() else {
            return Ok(false);
        };
        self.store.restore(snapshot);
        self.drop_stale_selection();
        self.dirty = true;
        Ok(true)
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selected
            && !self.store.contains(id)
        {
            self.selected = None;
        }
    }

    // ─── Documents ───────────────────────────────────────────────────────

    pub fn export_json(&mut self) -> Result<String, EditorError> {
        let json = document::export::<D>(self.store.shapes(), self.store.connectors())?;
        self.notices.post(Notice::success("Diagrama exportado correctamente"));
        Ok(json)
    }

    /// `{project or diagrama-<kind>}-{date}.json`.
    pub fn export_filename(&self, project: Option<&str>, date: NaiveDate) -> String {
        let slug = project
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| document::default_slug(D::KIND));
        document::export_filename(&slug, date)
    }

    /// Replace the diagram with a document. A rejected document leaves
    /// the diagram untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), EditorError> {
        self.guard("import")?;
        let doc = match document::import::<D>(json) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("import rejected: {err}");
                self.notices.post(Notice::error(format!("Error al importar el diagrama: {err}")));
                return Err(err.into());
            }
        };
        let (shapes, connectors) = (doc.shapes, doc.connectors);
        self.record(|store| {
            store.replace(shapes, connectors);
            Ok(())
        })?;
        self.selected = None;
        self.mode = Mode::Idle;
        self.notices.post(Notice::success("Diagrama importado correctamente"));
        Ok(())
    }

    // ─── Notices ─────────────────────────────────────────────────────────

    pub fn post_notice(&mut self, notice: Notice) {
        self.notices.post(notice);
        self.dirty = true;
    }

    pub fn poll_notice(&mut self, now_ms: f64) -> Option<&Notice> {
        self.notices.poll(now_ms)
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss();
    }
}

impl<D: DiagramPainter> DiagramEditor<D> {
    /// Build this frame's display list.
    pub fn render(&self, theme: &Theme) -> Scene {
        let preview = match &self.mode {
            Mode::DrawingConnector { start, cursor, .. } => Some((*start, *cursor)),
            _ => None,
        };
        let frame = Frame::<D> {
            shapes: self.store.shapes(),
            connectors: self.store.connectors(),
            viewport: self.viewport,
            scale: self.scale,
            selected: self.selected,
            preview,
        };
        paint_scene(
            &frame,
            &PaintContext {
                measure: self.measure.as_ref(),
                theme,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uml_core::diagrams::PackageDiagram;
    use uml_core::diagrams::package::PackagePalette;

    fn editor() -> DiagramEditor<PackageDiagram> {
        DiagramEditor::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn zoom_is_clamped_to_grid() {
        let mut ed = editor();
        for _ in 0..20 {
            ed.zoom_in();
        }
        assert_eq!(ed.scale(), MAX_SCALE);
        for _ in 0..20 {
            ed.zoom_out();
        }
        assert_eq!(ed.scale(), MIN_SCALE);
        ed.set_scale(1.04);
        assert_eq!(ed.scale(), 1.0);
    }

    #[test]
    fn narrower_zoom_bounds() {
        let mut ed = editor().with_config(EditorConfig {
            min_scale: 0.8,
            max_scale: 1.2,
            scale_step: 0.2,
        });
        ed.zoom_in();
        ed.zoom_in();
        assert_eq!(ed.scale(), 1.2);
        ed.set_scale(0.1);
        assert_eq!(ed.scale(), 0.8);
    }

    #[test]
    fn toggle_lock_flips() {
        let mut ed = editor();
        assert!(ed.toggle_lock());
        assert!(ed.is_locked());
        assert!(!ed.toggle_lock());
    }

    #[test]
    fn pointer_positions_are_unscaled() {
        let mut ed = editor();
        ed.set_scale(2.0);
        ed.drop_item(PackagePalette::Package, Point::new(200.0, 100.0)).unwrap();
        let id = ed.submit_shape("web").unwrap();
        assert_eq!(ed.shape(id).unwrap().position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn blank_name_keeps_prompt_open() {
        let mut ed = editor();
        assert_eq!(ed.drop_item(PackagePalette::Package, Point::new(10.0, 40.0)).unwrap(), None);
        assert!(matches!(ed.submit_shape("   "), Err(EditorError::EmptyName)));
        assert!(ed.pending().is_some());
        assert!(ed.cancel_prompt());
        assert!(ed.shapes().is_empty());
        assert!(matches!(ed.submit_shape("late"), Err(EditorError::NoPrompt)));
    }

    #[test]
    fn dirty_flag_is_taken_once() {
        let mut ed = editor();
        assert!(ed.take_dirty());
        assert!(!ed.take_dirty());
        ed.resize(1024.0, 768.0);
        assert!(ed.take_dirty());
        assert_eq!(ed.viewport(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn export_filename_falls_back_to_kind() {
        let ed = editor();
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(ed.export_filename(None, date), "diagrama-package-2025-01-02.json");
        assert_eq!(ed.export_filename(Some("  "), date), "diagrama-package-2025-01-02.json");
        assert_eq!(ed.export_filename(Some("Mi Tienda"), date), "Mi-Tienda-2025-01-02.json");
    }
}
