use crate::id::ElementId;
use crate::model::DiagramType;
use thiserror::Error;

/// Why an imported document was refused. The current diagram is never
/// touched when one of these is returned.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("the file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("the document has no `{0}` key")]
    MissingKey(&'static str),

    #[error("the document holds a {found} diagram, expected {expected}")]
    WrongDiagram { expected: DiagramType, found: String },

    #[error("connector {connector} points at missing shape {missing}")]
    DanglingConnector { connector: ElementId, missing: ElementId },

    #[error("shape {shape} belongs to missing shape {owner}")]
    MissingOwner { shape: ElementId, owner: ElementId },

    #[error("element id {0} is used twice")]
    DuplicateId(ElementId),
}

/// Failures of the snapshot-to-project generation round trip.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("the inference API key is not configured")]
    MissingApiKey,

    #[error("the canvas snapshot is empty")]
    EmptySnapshot,

    #[error("the inference response did not have the expected format")]
    UnexpectedResponse,

    #[error("the generated text is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("{service} returned {status}: {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },
}
