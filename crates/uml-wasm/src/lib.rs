//! WASM bridge for UML Draft: exposes the diagram editors to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the canvas,
//! the palette, the modals and the network; every editing decision is
//! made here. Results cross the boundary as JSON strings.

mod render2d;

use serde::Deserialize;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;
use std::str::FromStr;
use uml_core::diagram::{Diagram, ShapeKind};
use uml_core::diagrams::class::{ClassPalette, ClassRelation, RelationshipKind};
use uml_core::diagrams::component::{ComponentLink, ComponentPalette, ConnectionKind};
use uml_core::diagrams::package::PackagePalette;
use uml_core::diagrams::sequence::SequencePalette;
use uml_core::diagrams::usecase::UseCasePalette;
use uml_core::diagrams::{ClassDiagram, ComponentDiagram, PackageDiagram, SequenceDiagram, UseCaseDiagram};
use uml_core::generate::{self, GenerateConfig, GenerateRequest};
use uml_core::id::ElementId;
use uml_core::model::DiagramType;
use uml_core::{Point, Size, project};
use uml_editor::{DiagramEditor, Modifiers, Notice, Pending, ShortcutAction, Tool};
use uml_render::{DiagramPainter, Theme};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// ─── Per-diagram glue ────────────────────────────────────────────────────

/// What the page needs to know about a diagram kind beyond [`Diagram`]:
/// palette item names and how to read a connector modal's answer.
trait BridgeDiagram: DiagramPainter {
    fn palette(name: &str) -> Option<Self::Palette>;
    fn palette_name(item: Self::Palette) -> &'static str;
    fn relation(answer: &str) -> Result<Self::Relation, String>;
}

#[derive(Deserialize)]
struct RelationshipAnswer {
    kind: String,
}

#[derive(Deserialize)]
struct MessageAnswer {
    text: String,
}

#[derive(Deserialize)]
struct ConnectionAnswer {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

fn parse_answer<T: for<'de> Deserialize<'de>>(answer: &str) -> Result<T, String> {
    serde_json::from_str(answer).map_err(|e| format!("invalid answer: {e}"))
}

impl BridgeDiagram for ClassDiagram {
    fn palette(name: &str) -> Option<ClassPalette> {
        match name {
            "class" => Some(ClassPalette::Class),
            "package" => Some(ClassPalette::Package),
            _ => None,
        }
    }

    fn palette_name(item: ClassPalette) -> &'static str {
        match item {
            ClassPalette::Class => "class",
            ClassPalette::Package => "package",
        }
    }

    fn relation(answer: &str) -> Result<ClassRelation, String> {
        let RelationshipAnswer { kind } = parse_answer(answer)?;
        RelationshipKind::parse(&kind)
            .map(ClassRelation::Relationship)
            .ok_or_else(|| format!("unknown relationship kind: {kind}"))
    }
}

impl BridgeDiagram for SequenceDiagram {
    fn palette(name: &str) -> Option<SequencePalette> {
        (name == "object").then_some(SequencePalette::Object)
    }

    fn palette_name(_item: SequencePalette) -> &'static str {
        "object"
    }

    fn relation(answer: &str) -> Result<String, String> {
        let MessageAnswer { text } = parse_answer(answer)?;
        let text = text.trim();
        if text.is_empty() {
            return Err("the message text must not be empty".to_string());
        }
        Ok(text.to_string())
    }
}

impl BridgeDiagram for UseCaseDiagram {
    fn palette(name: &str) -> Option<UseCasePalette> {
        match name {
            "actor" => Some(UseCasePalette::Actor),
            "usecase" => Some(UseCasePalette::UseCase),
            "boundary" => Some(UseCasePalette::SystemBoundary),
            _ => None,
        }
    }

    fn palette_name(item: UseCasePalette) -> &'static str {
        match item {
            UseCasePalette::Actor => "actor",
            UseCasePalette::UseCase => "usecase",
            UseCasePalette::SystemBoundary => "boundary",
        }
    }

    fn relation(_answer: &str) -> Result<(), String> {
        Ok(())
    }
}

impl BridgeDiagram for ComponentDiagram {
    fn palette(name: &str) -> Option<ComponentPalette> {
        (name == "component").then_some(ComponentPalette::Component)
    }

    fn palette_name(_item: ComponentPalette) -> &'static str {
        "component"
    }

    fn relation(answer: &str) -> Result<ComponentLink, String> {
        let ConnectionAnswer { kind, label } = parse_answer(answer)?;
        let kind = match kind.as_deref() {
            None | Some("") => ConnectionKind::default(),
            Some(k) => ConnectionKind::parse(k).ok_or_else(|| format!("unknown connection kind: {k}"))?,
        };
        Ok(ComponentLink { kind, label })
    }
}

impl BridgeDiagram for PackageDiagram {
    fn palette(name: &str) -> Option<PackagePalette> {
        (name == "package").then_some(PackagePalette::Package)
    }

    fn palette_name(_item: PackagePalette) -> &'static str {
        "package"
    }

    fn relation(_answer: &str) -> Result<(), String> {
        Ok(())
    }
}

// ─── Generic helpers ─────────────────────────────────────────────────────

fn ok_reply(extra: Value) -> String {
    let mut reply = json!({ "ok": true });
    if let (Some(obj), Value::Object(extra)) = (reply.as_object_mut(), extra) {
        obj.extend(extra);
    }
    reply.to_string()
}

fn error_reply(err: impl Display) -> String {
    json!({ "ok": false, "error": err.to_string() }).to_string()
}

fn prompt_json<D: BridgeDiagram>(ed: &DiagramEditor<D>) -> Value {
    match ed.pending() {
        None => Value::Null,
        Some(Pending::NewShape { item, at }) => json!({
            "kind": "name",
            "item": D::palette_name(*item),
            "x": at.x,
            "y": at.y,
        }),
        Some(Pending::NewConnector { source, target, .. }) => json!({
            "kind": "connector",
            "diagram": D::KIND.as_str(),
            "source": source.as_str(),
            "target": target.as_str(),
        }),
    }
}

fn drop_item<D: BridgeDiagram>(ed: &mut DiagramEditor<D>, item: &str, x: f64, y: f64) -> String {
    let Some(item) = D::palette(item) else {
        return error_reply(format!("unknown palette item {item} for a {} diagram", D::KIND));
    };
    match ed.drop_item(item, Point::new(x, y)) {
        Ok(id) => ok_reply(json!({
            "id": id.map(|id| id.as_str().to_string()),
            "prompt": prompt_json(ed),
        })),
        Err(err) => error_reply(err),
    }
}

fn submit_connector<D: BridgeDiagram>(ed: &mut DiagramEditor<D>, answer: &str) -> String {
    let relation = match D::relation(answer) {
        Ok(relation) => relation,
        Err(err) => return error_reply(err),
    };
    match ed.submit_connector(relation) {
        Ok(id) => ok_reply(json!({ "id": id.as_str() })),
        Err(err) => error_reply(err),
    }
}

fn element_json<T: Serialize>(element: Option<&T>) -> String {
    element
        .and_then(|e| serde_json::to_string(e).ok())
        .unwrap_or_else(|| "null".to_string())
}

/// Replace a shape with the edited copy the page sends back. The ID must
/// not change.
fn update_shape_json<D: BridgeDiagram>(ed: &mut DiagramEditor<D>, id: &str, json: &str) -> String {
    let id = ElementId::intern(id);
    let edited: D::Shape = match serde_json::from_str(json) {
        Ok(shape) => shape,
        Err(err) => return error_reply(err),
    };
    if edited.id() != id {
        return error_reply(format!("edited shape has id {}, expected {id}", edited.id()));
    }
    match ed.update_shape(id, move |_| edited) {
        Ok(changed) => ok_reply(json!({ "changed": changed })),
        Err(err) => error_reply(err),
    }
}

fn update_connector_json<D: BridgeDiagram>(ed: &mut DiagramEditor<D>, id: &str, json: &str) -> String {
    use uml_core::diagram::ConnectorKind;

    let id = ElementId::intern(id);
    let edited: D::Connector = match serde_json::from_str(json) {
        Ok(connector) => connector,
        Err(err) => return error_reply(err),
    };
    if edited.id() != id {
        return error_reply(format!("edited connector has id {}, expected {id}", edited.id()));
    }
    match ed.update_connector(id, move |_| edited) {
        Ok(changed) => ok_reply(json!({ "changed": changed })),
        Err(err) => error_reply(err),
    }
}

// ─── Editor dispatch ─────────────────────────────────────────────────────

enum AnyEditor {
    Class(DiagramEditor<ClassDiagram>),
    Sequence(DiagramEditor<SequenceDiagram>),
    UseCase(DiagramEditor<UseCaseDiagram>),
    Component(DiagramEditor<ComponentDiagram>),
    Package(DiagramEditor<PackageDiagram>),
}

/// Evaluate `$body` with `$ed` bound to the active editor.
macro_rules! each_editor {
    ($editor:expr, $ed:ident => $body:expr) => {
        match $editor {
            AnyEditor::Class($ed) => $body,
            AnyEditor::Sequence($ed) => $body,
            AnyEditor::UseCase($ed) => $body,
            AnyEditor::Component($ed) => $body,
            AnyEditor::Package($ed) => $body,
        }
    };
}

impl AnyEditor {
    fn new(kind: DiagramType, viewport: Size) -> Self {
        match kind {
            DiagramType::Class => AnyEditor::Class(DiagramEditor::new(viewport)),
            DiagramType::Sequence => AnyEditor::Sequence(DiagramEditor::new(viewport)),
            DiagramType::UseCase => AnyEditor::UseCase(DiagramEditor::new(viewport)),
            DiagramType::Component => AnyEditor::Component(DiagramEditor::new(viewport)),
            DiagramType::Package => AnyEditor::Package(DiagramEditor::new(viewport)),
        }
    }

    fn kind(&self) -> DiagramType {
        match self {
            AnyEditor::Class(_) => DiagramType::Class,
            AnyEditor::Sequence(_) => DiagramType::Sequence,
            AnyEditor::UseCase(_) => DiagramType::UseCase,
            AnyEditor::Component(_) => DiagramType::Component,
            AnyEditor::Package(_) => DiagramType::Package,
        }
    }
}

// ─── Canvas controller ───────────────────────────────────────────────────

/// The WASM-facing controller for one diagram canvas.
///
/// Pointer handlers return JSON such as
/// `{"consumed":true,"prompt":null}`; the page captures the pointer when a
/// down event is consumed and opens its modal whenever `prompt` is set.
#[wasm_bindgen]
pub struct UmlCanvas {
    editor: AnyEditor,
    dark_mode: bool,
}

impl UmlCanvas {
    fn create(diagram: &str, width: f64, height: f64) -> Result<Self, String> {
        let kind = DiagramType::from_str(diagram)?;
        log::info!("opening {kind} diagram ({width}×{height})");
        Ok(Self {
            editor: AnyEditor::new(kind, Size::new(width, height)),
            dark_mode: false,
        })
    }

    fn gesture_reply(&self, consumed: bool) -> String {
        let prompt = each_editor!(&self.editor, ed => prompt_json(ed));
        json!({ "consumed": consumed, "prompt": prompt }).to_string()
    }
}

#[wasm_bindgen]
impl UmlCanvas {
    /// `diagram` is one of `class`, `sequence`, `usecase`, `component`,
    /// `package`.
    #[wasm_bindgen(constructor)]
    pub fn new(diagram: &str, width: f64, height: f64) -> Result<UmlCanvas, JsValue> {
        console_error_panic_hook_setup();
        Self::create(diagram, width, height).map_err(|e| JsValue::from_str(&e))
    }

    pub fn diagram_type(&self) -> String {
        self.editor.kind().as_str().to_string()
    }

    /// Measure text with this context from now on.
    pub fn attach_context(&mut self, ctx: CanvasRenderingContext2d) {
        each_editor!(&mut self.editor, ed => ed.set_measure(render2d::CanvasMeasure::new(ctx)));
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = if self.dark_mode { Theme::dark() } else { Theme::light() };
        let scene = each_editor!(&self.editor, ed => ed.render(&theme));
        render2d::render_scene(ctx, &scene);
    }

    /// Whether anything changed since the last call.
    pub fn needs_redraw(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.take_dirty())
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        if self.dark_mode != is_dark {
            self.dark_mode = is_dark;
            each_editor!(&mut self.editor, ed => ed.request_redraw());
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        each_editor!(&mut self.editor, ed => ed.resize(width, height));
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    pub fn handle_pointer_down(&mut self, pointer_id: i32, x: f64, y: f64) -> String {
        let consumed = each_editor!(&mut self.editor, ed => ed.pointer_down(pointer_id, Point::new(x, y)));
        self.gesture_reply(consumed)
    }

    pub fn handle_pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        each_editor!(&mut self.editor, ed => ed.pointer_move(pointer_id, Point::new(x, y)))
    }

    pub fn handle_pointer_up(&mut self, pointer_id: i32, x: f64, y: f64) -> String {
        let consumed = each_editor!(&mut self.editor, ed => ed.pointer_up(pointer_id, Point::new(x, y)));
        self.gesture_reply(consumed)
    }

    pub fn handle_pointer_cancel(&mut self, pointer_id: i32) -> bool {
        each_editor!(&mut self.editor, ed => ed.pointer_cancel(pointer_id))
    }

    // ─── Keyboard & tools ────────────────────────────────────────────────

    /// Returns `{"action":"<name>","tool":"<name>"}`.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let modifiers = Modifiers { shift, ctrl, alt, meta };
        let action = each_editor!(&mut self.editor, ed => ed.key(key, modifiers));
        json!({
            "action": action.map_or("none", action_to_name),
            "tool": self.get_tool_name(),
        })
        .to_string()
    }

    pub fn set_tool(&mut self, name: &str) {
        let tool = match name {
            "connector" => Tool::Connector,
            _ => Tool::Select,
        };
        each_editor!(&mut self.editor, ed => ed.set_tool(tool));
    }

    pub fn get_tool_name(&self) -> String {
        let tool = each_editor!(&self.editor, ed => ed.tool());
        tool_to_name(tool).to_string()
    }

    // ─── Creating ────────────────────────────────────────────────────────

    /// Drop a palette item at a canvas-element position.
    pub fn drop_item(&mut self, item: &str, x: f64, y: f64) -> String {
        each_editor!(&mut self.editor, ed => drop_item(ed, item, x, y))
    }

    /// The open modal, or `null`.
    pub fn get_prompt(&self) -> String {
        each_editor!(&self.editor, ed => prompt_json(ed)).to_string()
    }

    pub fn submit_name(&mut self, name: &str) -> String {
        match each_editor!(&mut self.editor, ed => ed.submit_shape(name)) {
            Ok(id) => ok_reply(json!({ "id": id.as_str() })),
            Err(err) => error_reply(err),
        }
    }

    /// `answer` depends on the diagram:
    /// class `{"kind":"inheritance"}`, sequence `{"text":"login()"}`,
    /// component `{"kind":"interface","label":"REST"}`, others `{}`.
    pub fn submit_connector(&mut self, answer: &str) -> String {
        each_editor!(&mut self.editor, ed => submit_connector(ed, answer))
    }

    pub fn cancel_prompt(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.cancel_prompt())
    }

    // ─── Editing ─────────────────────────────────────────────────────────

    pub fn get_selected_id(&self) -> String {
        each_editor!(&self.editor, ed => ed.selected())
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// The selected shape as JSON, for the edit modal.
    pub fn get_selected_json(&self) -> String {
        each_editor!(&self.editor, ed => element_json(ed.selected().and_then(|id| ed.shape(id))))
    }

    pub fn get_connector_json(&self, id: &str) -> String {
        let id = ElementId::intern(id);
        each_editor!(&self.editor, ed => element_json(ed.connector(id)))
    }

    pub fn update_shape_json(&mut self, id: &str, json: &str) -> String {
        each_editor!(&mut self.editor, ed => update_shape_json(ed, id, json))
    }

    pub fn update_connector_json(&mut self, id: &str, json: &str) -> String {
        each_editor!(&mut self.editor, ed => update_connector_json(ed, id, json))
    }

    pub fn rename_selected(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        each_editor!(&mut self.editor, ed => match ed.selected() {
            Some(id) => ed.rename(id, name).unwrap_or(false),
            None => false,
        })
    }

    pub fn delete_selected(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.delete_selected()).is_ok_and(|n| n > 0)
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        let id = ElementId::intern(id);
        each_editor!(&mut self.editor, ed => ed.delete(id)).is_ok_and(|n| n > 0)
    }

    pub fn clear(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.clear()).is_ok()
    }

    pub fn undo(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.undo()).unwrap_or(false)
    }

    pub fn can_undo(&self) -> bool {
        each_editor!(&self.editor, ed => ed.can_undo())
    }

    // ─── View & lock ─────────────────────────────────────────────────────

    pub fn set_locked(&mut self, locked: bool) {
        each_editor!(&mut self.editor, ed => ed.set_locked(locked));
    }

    pub fn toggle_lock(&mut self) -> bool {
        each_editor!(&mut self.editor, ed => ed.toggle_lock())
    }

    pub fn is_locked(&self) -> bool {
        each_editor!(&self.editor, ed => ed.is_locked())
    }

    pub fn zoom_in(&mut self) -> f64 {
        each_editor!(&mut self.editor, ed => { ed.zoom_in(); ed.scale() })
    }

    pub fn zoom_out(&mut self) -> f64 {
        each_editor!(&mut self.editor, ed => { ed.zoom_out(); ed.scale() })
    }

    pub fn get_scale(&self) -> f64 {
        each_editor!(&self.editor, ed => ed.scale())
    }

    // ─── Documents ───────────────────────────────────────────────────────

    /// `{"ok":true,"filename":"...","json":"..."}`. The filename uses the
    /// project name when one is given, today's date either way.
    pub fn export_document(&mut self, project_name: Option<String>) -> String {
        let today = chrono::Local::now().date_naive();
        let project = project_name.as_deref();
        let result = each_editor!(&mut self.editor, ed => ed
            .export_json()
            .map(|json| (ed.export_filename(project, today), json)));
        match result {
            Ok((filename, json)) => ok_reply(json!({ "filename": filename, "json": json })),
            Err(err) => {
                log::error!("export failed: {err}");
                error_reply(err)
            }
        }
    }

    pub fn import_document(&mut self, json: &str) -> String {
        match each_editor!(&mut self.editor, ed => ed.import_json(json)) {
            Ok(()) => ok_reply(json!({})),
            Err(err) => error_reply(err),
        }
    }

    /// The class diagram grouped into packages for the code generator.
    pub fn export_project(&self, project_name: &str) -> String {
        let AnyEditor::Class(ed) = &self.editor else {
            return error_reply(format!("a {} diagram has no project export", self.editor.kind()));
        };
        let projects = project::export_project(project_name, ed.shapes(), ed.connectors());
        match serde_json::to_value(projects) {
            Ok(projects) => ok_reply(json!({ "project": projects })),
            Err(err) => error_reply(err),
        }
    }

    /// Package names of a class diagram, offered in the generate modal.
    pub fn package_names(&self) -> String {
        match &self.editor {
            AnyEditor::Class(ed) => json!(project::package_names(ed.shapes())).to_string(),
            _ => "[]".to_string(),
        }
    }

    // ─── Generation ──────────────────────────────────────────────────────

    /// Build the inference call for a PNG snapshot of this canvas:
    /// `{"ok":true,"url":"...","payload":{...}}`.
    pub fn generate_request(&self, api_key: &str, snapshot: &str) -> String {
        let config = GenerateConfig::new(Some(api_key.to_string()));
        match GenerateRequest::new(&config, self.editor.kind(), snapshot) {
            Ok(req) => ok_reply(json!({ "url": req.url, "payload": req.payload })),
            Err(err) => {
                log::warn!("generation request refused: {err}");
                error_reply(err)
            }
        }
    }

    // ─── Notices ─────────────────────────────────────────────────────────

    /// `{"kind":"success"|"error","message":"..."}` or `null`.
    pub fn poll_notice(&mut self, now_ms: f64) -> String {
        let notice = each_editor!(&mut self.editor, ed => ed
            .poll_notice(now_ms)
            .map(|n| json!({ "kind": n.kind.as_str(), "message": n.message })));
        notice.unwrap_or(Value::Null).to_string()
    }

    /// Report an outcome the page observed, e.g. a finished fetch.
    pub fn post_notice(&mut self, is_error: bool, message: &str) {
        let notice = if is_error {
            Notice::error(message)
        } else {
            Notice::success(message)
        };
        each_editor!(&mut self.editor, ed => ed.post_notice(notice));
    }

    pub fn dismiss_notice(&mut self) {
        each_editor!(&mut self.editor, ed => ed.dismiss_notice());
    }
}

fn tool_to_name(tool: Tool) -> &'static str {
    match tool {
        Tool::Select => "select",
        Tool::Connector => "connector",
    }
}

fn action_to_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::ToolSelect => "toolSelect",
        ShortcutAction::ToolConnector => "toolConnector",
        ShortcutAction::Undo => "undo",
        ShortcutAction::Delete => "delete",
        ShortcutAction::ZoomIn => "zoomIn",
        ShortcutAction::ZoomOut => "zoomOut",
        ShortcutAction::Cancel => "cancel",
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("UML WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone helpers (no canvas needed) ───────────────────────────────

/// Where the generated project is posted.
#[wasm_bindgen]
pub fn backend_path() -> String {
    generate::BACKEND_PATH.to_string()
}

/// Pull the project out of a model reply and apply the user's names:
/// `{"ok":true,"project":[...]}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn extract_generated_project(response: &str, project_name: &str, package_name: &str) -> String {
    let response: Value = match serde_json::from_str(response) {
        Ok(v) => v,
        Err(err) => return error_reply(err),
    };
    match generate::extract_project(&response, project_name, package_name) {
        Ok(project) => ok_reply(json!({ "project": project })),
        Err(err) => error_reply(err),
    }
}

/// Message for a failed fetch. `backend` selects the service name.
#[wasm_bindgen]
pub fn upstream_error_message(backend: bool, status: u16, body: &str) -> String {
    let service = if backend { "backend" } else { "model" };
    generate::upstream_error(service, status, body).to_string()
}

/// Check a document without opening it: `{"ok":true}` or the reason it
/// would be refused.
#[wasm_bindgen]
pub fn validate_document(diagram: &str, json: &str) -> String {
    fn check<D: Diagram>(json: &str) -> String {
        match uml_core::document::parse::<D>(json) {
            Ok(_) => ok_reply(json!({})),
            Err(err) => error_reply(err),
        }
    }
    match DiagramType::from_str(diagram) {
        Ok(DiagramType::Class) => check::<ClassDiagram>(json),
        Ok(DiagramType::Sequence) => check::<SequenceDiagram>(json),
        Ok(DiagramType::UseCase) => check::<UseCaseDiagram>(json),
        Ok(DiagramType::Component) => check::<ComponentDiagram>(json),
        Ok(DiagramType::Package) => check::<PackageDiagram>(json),
        Err(err) => error_reply(err),
    }
}
