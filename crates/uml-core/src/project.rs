//! Project export of a class diagram: classes grouped into packages the way
//! the code generator backend expects them.
//!
//! ```json
//! [{ "projectName": "Tienda",
//!    "package": [{ "packageName": "dominio", "classes": [ ... ] }],
//!    "class": { "className": "Suelta", "isEntity": false, "fields": [] } }]
//! ```

use crate::diagram::ShapeKind;
use crate::diagrams::class::{ClassBox, ClassConnector, ClassShape};
use crate::id::ElementId;
use crate::model::{EntityField, EntityRelationship};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProject {
    pub project_name: String,
    pub package: Vec<ExportPackage>,
    /// First class that sits in no package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ExportLooseClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPackage {
    pub package_name: String,
    pub classes: Vec<ExportClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportClass {
    pub class_name: String,
    pub is_entity: bool,
    pub fields: Vec<EntityField>,
    pub relationships: Vec<EntityRelationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLooseClass {
    pub class_name: String,
    pub is_entity: bool,
    pub fields: Vec<EntityField>,
}

/// Group classes by their membership links. Links to vanished classes
/// are skipped; packaged classes are always exported as entities, falling
/// back to an `id` primary key when they declare no fields.
pub fn export_project(project_name: &str, shapes: &[ClassShape], connectors: &[ClassConnector]) -> Vec<ExportProject> {
    let class_by_id = |id: ElementId| shapes.iter().filter_map(ClassShape::as_class).find(|c| c.id == id);

    let memberships: Vec<(ElementId, ElementId)> = connectors
        .iter()
        .filter_map(|c| match c {
            ClassConnector::Membership { package, class, .. } => Some((*package, *class)),
            ClassConnector::Relationship { .. } => None,
        })
        .collect();

    let package = shapes
        .iter()
        .filter_map(ClassShape::as_package)
        .map(|pkg| ExportPackage {
            package_name: pkg.name.clone(),
            classes: memberships
                .iter()
                .filter(|(p, _)| *p == pkg.id)
                .filter_map(|(_, c)| class_by_id(*c))
                .map(packaged_class)
                .collect(),
        })
        .collect();

    let packaged: HashSet<ElementId> = memberships.iter().map(|(_, c)| *c).collect();
    let class = shapes
        .iter()
        .filter_map(ClassShape::as_class)
        .find(|c| !packaged.contains(&c.id))
        .map(|c| ExportLooseClass {
            class_name: c.name.clone(),
            is_entity: false,
            fields: c.fields.clone(),
        });

    vec![ExportProject {
        project_name: project_name.to_string(),
        package,
        class,
    }]
}

fn packaged_class(c: &ClassBox) -> ExportClass {
    ExportClass {
        class_name: c.name.clone(),
        is_entity: true,
        fields: if c.fields.is_empty() {
            vec![EntityField::primary_key()]
        } else {
            c.fields.clone()
        },
        relationships: c.relationships.clone(),
    }
}

/// Names of every package in the diagram, in drawing order.
pub fn package_names(shapes: &[ClassShape]) -> Vec<&str> {
    shapes
        .iter()
        .filter(|s| s.as_package().is_some())
        .map(ShapeKind::name)
        .collect()
}
