//! Records shared by several diagram kinds.
//!
//! Class members (attributes, methods, entity fields) and the diagram-type
//! tag. All are plain values: cloning is the only way to "share" them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

// ─── Diagram type ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Class,
    Sequence,
    UseCase,
    Component,
    Package,
}

impl DiagramType {
    pub const ALL: [DiagramType; 5] = [
        DiagramType::Class,
        DiagramType::Sequence,
        DiagramType::UseCase,
        DiagramType::Component,
        DiagramType::Package,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DiagramType::Class => "class",
            DiagramType::Sequence => "sequence",
            DiagramType::UseCase => "usecase",
            DiagramType::Component => "component",
            DiagramType::Package => "package",
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagramType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown diagram type: {s}"))
    }
}

// ─── Visibility ──────────────────────────────────────────────────────────

/// Member visibility. Unrecognised names read as `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn symbol(self) -> &'static str {
        match self {
            Visibility::Public => "+",
            Visibility::Private => "-",
            Visibility::Protected => "#",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }

    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "private" => Visibility::Private,
            "protected" => Visibility::Protected,
            _ => Visibility::Public,
        }
    }
}

impl From<String> for Visibility {
    fn from(s: String) -> Self {
        Visibility::parse_lossy(&s)
    }
}

impl From<Visibility> for String {
    fn from(v: Visibility) -> Self {
        v.as_str().to_string()
    }
}

// ─── Class members ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Attribute {
    pub fn new(name: &str, ty: &str, visibility: Visibility) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            visibility,
        }
    }

    /// `+ name: Type`
    pub fn display_line(&self) -> String {
        format!("{} {}: {}", self.visibility.symbol(), self.name, self.ty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(default = "void")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: SmallVec<[Parameter; 2]>,
    #[serde(default)]
    pub visibility: Visibility,
}

fn void() -> String {
    "void".to_string()
}

impl Method {
    pub fn new(name: &str, return_type: &str, visibility: Visibility) -> Self {
        Self {
            name: name.to_string(),
            return_type: return_type.to_string(),
            parameters: SmallVec::new(),
            visibility,
        }
    }

    /// `+ name(a: A, b: B): Ret`
    pub fn display_line(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {}({}): {}",
            self.visibility.symbol(),
            self.name,
            params,
            self.return_type
        )
    }
}

// ─── Entity metadata (project export) ────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_id_field: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_strategy: Option<String>,
}

impl EntityField {
    /// `id: Long`, auto-generated primary key.
    pub fn primary_key() -> Self {
        Self {
            name: "id".to_string(),
            ty: "Long".to_string(),
            is_id_field: Some(true),
            generation_strategy: Some("AUTO".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRelationship {
    #[serde(rename = "type")]
    pub kind: String,
    pub mapped_by: String,
    #[serde(default)]
    pub cascade: Vec<String>,
    pub fetch: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    #[test]
    fn visibility_symbols() {
        assert_eq!(Visibility::Public.symbol(), "+");
        assert_eq!(Visibility::Private.symbol(), "-");
        assert_eq!(Visibility::Protected.symbol(), "#");
    }

    #[test]
    fn unknown_visibility_reads_as_public() {
        let v: Visibility = serde_json::from_str("\"package\"").unwrap();
        assert_eq!(v, Visibility::Public);
        let v: Visibility = serde_json::from_str("\"protected\"").unwrap();
        assert_eq!(v, Visibility::Protected);
        assert_eq!(serde_json::to_string(&Visibility::Private).unwrap(), "\"private\"");
    }

    #[test]
    fn member_lines() {
        let a = Attribute::new("saldo", "double", Visibility::Private);
        assert_eq!(a.display_line(), "- saldo: double");

        let mut m = Method::new("transferir", "boolean", Visibility::Public);
        m.parameters = smallvec![
            Parameter { name: "destino".into(), ty: "Cuenta".into() },
            Parameter { name: "monto".into(), ty: "double".into() },
        ];
        assert_eq!(m.display_line(), "+ transferir(destino: Cuenta, monto: double): boolean");
        assert_eq!(Method::new("run", "void", Visibility::Protected).display_line(), "# run(): void");
    }

    #[test]
    fn method_json_uses_camel_case() {
        let m: Method = serde_json::from_str(
            r#"{"name":"metodo1","returnType":"void","parameters":[],"visibility":"public"}"#,
        )
        .unwrap();
        assert_eq!(m, Method::new("metodo1", "void", Visibility::Public));
    }

    #[test]
    fn primary_key_field_json() {
        let json = serde_json::to_value(EntityField::primary_key()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name":"id","type":"Long","isIdField":true,"generationStrategy":"AUTO"})
        );
    }

    #[test]
    fn diagram_type_parse() {
        assert_eq!("usecase".parse::<DiagramType>(), Ok(DiagramType::UseCase));
        assert_eq!("Class".parse::<DiagramType>(), Ok(DiagramType::Class));
        assert!("state".parse::<DiagramType>().is_err());
    }
}
