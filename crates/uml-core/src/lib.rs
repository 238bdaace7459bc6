pub mod diagram;
pub mod diagrams;
pub mod document;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod id;
pub mod model;
pub mod project;
pub mod text;

pub use diagram::{ConnectPrompt, ConnectorKind, Diagram, Layer, ShapeKind};
pub use diagrams::{ClassDiagram, ComponentDiagram, PackageDiagram, SequenceDiagram, UseCaseDiagram};
pub use document::{DiagramDocument, Document, export_filename};
pub use error::{DocumentError, GenerateError};
pub use id::ElementId;
pub use model::*;
pub use text::{FixedAdvance, TextMeasure};

// Re-export geometry primitives so downstream crates share one kurbo version.
pub use kurbo::{Point, Rect, Size, Vec2};
