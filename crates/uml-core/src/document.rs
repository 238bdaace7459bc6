//! JSON documents: one per diagram, holding its shapes and connectors.
//!
//! ```json
//! { "diagram": "usecase", "shapes": [ ... ], "connectors": [ ... ] }
//! ```
//!
//! Import is all-or-nothing. A document is parsed, its tag and keys are
//! checked, and every reference is validated before the caller gets
//! anything back.

use crate::diagram::{ConnectorKind, Diagram, ShapeKind};
use crate::error::DocumentError;
use crate::id::ElementId;
use crate::model::DiagramType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Owned form, as read back from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramDocument<S, C> {
    pub diagram: DiagramType,
    pub shapes: Vec<S>,
    pub connectors: Vec<C>,
}

#[derive(Serialize)]
struct DocumentRef<'a, S, C> {
    diagram: DiagramType,
    shapes: &'a [S],
    connectors: &'a [C],
}

pub type Document<D> = DiagramDocument<<D as Diagram>::Shape, <D as Diagram>::Connector>;

/// Pretty-printed JSON of the given lists.
pub fn export<D: Diagram>(shapes: &[D::Shape], connectors: &[D::Connector]) -> Result<String, DocumentError> {
    let doc = DocumentRef {
        diagram: D::KIND,
        shapes,
        connectors,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse and validate a document. New IDs minted afterwards never collide
/// with the imported ones.
pub fn import<D: Diagram>(json: &str) -> Result<Document<D>, DocumentError> {
    let doc = parse::<D>(json)?;
    for shape in &doc.shapes {
        ElementId::observe(shape.id());
    }
    for connector in &doc.connectors {
        ElementId::observe(connector.id());
    }
    log::debug!(
        "imported {} diagram: {} shapes, {} connectors",
        D::KIND,
        doc.shapes.len(),
        doc.connectors.len()
    );
    Ok(doc)
}

/// Parse and validate without opening: the ID counter is left alone.
pub fn parse<D: Diagram>(json: &str) -> Result<Document<D>, DocumentError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(map) = &value else {
        return Err(DocumentError::MissingKey("diagram"));
    };

    let found = map
        .get("diagram")
        .ok_or(DocumentError::MissingKey("diagram"))?;
    if found.as_str() != Some(D::KIND.as_str()) {
        return Err(DocumentError::WrongDiagram {
            expected: D::KIND,
            found: found.as_str().map(str::to_string).unwrap_or_else(|| found.to_string()),
        });
    }
    for key in ["shapes", "connectors"] {
        if !map.contains_key(key) {
            return Err(DocumentError::MissingKey(key));
        }
    }

    let doc: Document<D> = serde_json::from_value(value)?;
    validate::<D>(&doc.shapes, &doc.connectors)?;
    Ok(doc)
}

/// Every ID is unique, every owner exists, and every connector endpoint
/// resolves to a shape.
pub fn validate<D: Diagram>(shapes: &[D::Shape], connectors: &[D::Connector]) -> Result<(), DocumentError> {
    let mut seen = HashSet::with_capacity(shapes.len() + connectors.len());
    for id in shapes.iter().map(ShapeKind::id).chain(connectors.iter().map(ConnectorKind::id)) {
        if !seen.insert(id) {
            return Err(DocumentError::DuplicateId(id));
        }
    }

    let shape_ids: HashSet<ElementId> = shapes.iter().map(ShapeKind::id).collect();
    for shape in shapes {
        if let Some(owner) = shape.owner()
            && !shape_ids.contains(&owner)
        {
            return Err(DocumentError::MissingOwner { shape: shape.id(), owner });
        }
    }
    for connector in connectors {
        for end in [connector.source(), connector.target()] {
            if !shape_ids.contains(&end) {
                return Err(DocumentError::DanglingConnector {
                    connector: connector.id(),
                    missing: end,
                });
            }
        }
    }
    Ok(())
}

/// `{slug}-{YYYY-MM-DD}.json`, whitespace runs in the slug collapsed to `-`.
pub fn export_filename(slug: &str, date: NaiveDate) -> String {
    let slug = slug.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{slug}-{}.json", date.format("%Y-%m-%d"))
}

/// Default slug for diagrams without a project name.
pub fn default_slug(kind: DiagramType) -> String {
    format!("diagrama-{kind}")
}
