//! Turning a canvas snapshot into a project JSON via a multimodal model.
//!
//! The network calls themselves happen in the host (browser `fetch`); this
//! module builds the request, interprets the reply, and applies the user's
//! project and package names before the result is forwarded to the
//! backend at [`BACKEND_PATH`].

use crate::error::GenerateError;
use crate::model::DiagramType;
use serde_json::{Value, json};

pub const MODEL_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
pub const BACKEND_PATH: &str = "/api/generate";
const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

// ─── Configuration ───────────────────────────────────────────────────────

/// The page owns the inference key (it ships with the frontend build) and
/// hands it over with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
}

impl GenerateConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint: MODEL_ENDPOINT.to_string(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

// ─── Request ─────────────────────────────────────────────────────────────

/// Instructions sent alongside the snapshot, one per diagram kind.
pub fn prompt(kind: DiagramType) -> &'static str {
    match kind {
        DiagramType::Class => {
            "Analyse the image of a UML class diagram. Each box with compartments is a class: the top \
             section is the name, the middle one the attributes and the bottom one the methods. Lines \
             with different heads are relationships (inheritance, composition, aggregation, dependency). \
             Convert it to the requested JSON structure. Read visibility as: + public, - private, \
             # protected."
        }
        DiagramType::Sequence => {
            "Analyse the image of a UML sequence diagram and produce JSON describing its structure. \
             Rules: 1. The result MUST be an array holding a single object. 2. That object has \
             \"projectName\". 3. It also has \"package\", an array with one object. 4. That object has \
             \"packageName\" followed by \"classes\"; the order packageName then classes is required."
        }
        DiagramType::UseCase => {
            "Analyse the image of a UML use-case diagram and produce JSON describing a class \
             structure. Rules: 1. Treat actors (stick figures) and use cases (ellipses) as classes \
             (\"className\"). 2. Lines joining an actor to a use case are relationships. 3. The large \
             rectangle is the system; use its name as \"projectName\" when none is given. 4. Infer \
             \"isEntity\", fields and relationship types from names and connections."
        }
        DiagramType::Component => {
            "Analyse the image of a UML component diagram and produce JSON describing a class \
             structure. Rules: 1. Each component (large rectangle) is a class (\"className\"). \
             2. Connections between components are relationships; infer their type (OneToMany, \
             ManyToOne, ...) and the fields they need. 3. Ports mark interfaces or connection points. \
             4. Infer \"isEntity\", fields and their types from the component names."
        }
        DiagramType::Package => {
            "Analyse the image of a UML package diagram and convert it to a JSON class structure. \
             Rules: 1. Each package (folder shape) is a class (\"className\") inside one global \
             package. 2. Dashed dependency arrows between packages are relationships; infer their \
             type (OneToMany, ManyToOne, ...) and the fields needed. 3. Infer \"isEntity\" (usually \
             false for packages unless they are clearly a domain module) and fields from the names."
        }
    }
}

/// Structured-output schema: project → package → class → field/relationship.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "projectName": { "type": "STRING" },
                "package": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "packageName": { "type": "STRING" },
                            "classes": {
                                "type": "ARRAY",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "className": { "type": "STRING" },
                                        "isEntity": { "type": "BOOLEAN" },
                                        "fields": {
                                            "type": "ARRAY",
                                            "items": {
                                                "type": "OBJECT",
                                                "properties": {
                                                    "name": { "type": "STRING" },
                                                    "type": { "type": "STRING" },
                                                    "isIdField": { "type": "BOOLEAN" },
                                                    "generationStrategy": { "type": "STRING" }
                                                },
                                                "required": ["name", "type"]
                                            }
                                        },
                                        "relationships": {
                                            "type": "ARRAY",
                                            "items": {
                                                "type": "OBJECT",
                                                "properties": {
                                                    "type": { "type": "STRING" },
                                                    "mappedBy": { "type": "STRING" },
                                                    "cascade": { "type": "ARRAY", "items": { "type": "STRING" } },
                                                    "fetch": { "type": "STRING" }
                                                },
                                                "required": ["type", "mappedBy", "cascade", "fetch"]
                                            }
                                        }
                                    },
                                    "required": ["className", "isEntity"]
                                }
                            }
                        },
                        "required": ["packageName", "classes"],
                        "propertyOrdering": ["packageName", "classes"]
                    }
                },
                "class": {
                    "type": "OBJECT",
                    "properties": {
                        "className": { "type": "STRING" },
                        "isEntity": { "type": "BOOLEAN" },
                        "fields": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "type": { "type": "STRING" }
                                },
                                "required": ["name", "type"]
                            }
                        }
                    }
                }
            },
            "required": ["projectName"]
        }
    })
}

/// A ready-to-send inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub url: String,
    pub payload: Value,
}

impl GenerateRequest {
    /// `snapshot` is the canvas PNG, either as a `data:` URL or bare base64.
    pub fn new(config: &GenerateConfig, kind: DiagramType, snapshot: &str) -> Result<Self, GenerateError> {
        let key = config.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;
        let image = snapshot.strip_prefix(PNG_DATA_URL_PREFIX).unwrap_or(snapshot).trim();
        if image.is_empty() {
            return Err(GenerateError::EmptySnapshot);
        }

        let payload = json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": prompt(kind) },
                    { "inlineData": { "mimeType": "image/png", "data": image } }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });
        Ok(Self {
            url: format!("{}?key={key}", config.endpoint),
            payload,
        })
    }
}

// ─── Response ────────────────────────────────────────────────────────────

/// Pull the generated project out of a model reply and stamp it with the
/// user's project name and first package name.
pub fn extract_project(response: &Value, project_name: &str, package_name: &str) -> Result<Value, GenerateError> {
    let text = response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or(GenerateError::UnexpectedResponse)?;
    let mut project: Value = serde_json::from_str(text).map_err(GenerateError::InvalidJson)?;

    if let Some(first) = project.get_mut(0).and_then(Value::as_object_mut) {
        first.insert("projectName".to_string(), Value::from(project_name));
        if let Some(pkg) = first
            .get_mut("package")
            .and_then(|p| p.get_mut(0))
            .and_then(Value::as_object_mut)
        {
            pkg.insert("packageName".to_string(), Value::from(package_name));
        }
    }
    Ok(project)
}

/// Map a non-2xx reply to an error, preferring the `error.message` the
/// service put in its body.
pub fn upstream_error(service: &'static str, status: u16, body: &str) -> GenerateError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());
    GenerateError::Upstream { service, status, message }
}
