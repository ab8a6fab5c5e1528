//! Core data structures for the infrastructure dependency graph

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique, stable identifier for a declared entity. Handed out by the
/// frontend, one per declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Unique identifier for a compiled source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(pub u32);

/// Discriminates what kind of declaration an entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Parameter,
    Variable,
    Resource,
    Output,
    Module,
    Function,
    Type,
    ImportedNamespace,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Parameter => "Parameter",
            EntityKind::Variable => "Variable",
            EntityKind::Resource => "Resource",
            EntityKind::Output => "Output",
            EntityKind::Module => "Module",
            EntityKind::Function => "Function",
            EntityKind::Type => "Type",
            EntityKind::ImportedNamespace => "ImportedNamespace",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, kind-tagged declaration in the analyzed program. Produced once
/// per declaration by the frontend; immutable for the analysis duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub file: FileId,
}

/// The template format a source file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateFormat {
    /// The native declarative language, with declared entities.
    Native,
    /// A foreign JSON-based template; its resources have no symbolic identity.
    ForeignJson,
}

impl TemplateFormat {
    /// Runtime category string, used as the kind metadata of file vertices.
    pub fn category(&self) -> &'static str {
        match self {
            TemplateFormat::Native => "NativeTemplate",
            TemplateFormat::ForeignJson => "ForeignJsonTemplate",
        }
    }
}

/// One compiled source file. Identity is the canonical absolute URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub uri: String,
    pub format: TemplateFormat,
}

/// A resource declared in a foreign JSON template. `property_name` is set
/// when the resource is a named property in an object collection rather
/// than an array element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignResourceNode {
    pub file: FileId,
    pub index: u32,
    pub property_name: Option<String>,
    pub body: Value,
}

impl ForeignResourceNode {
    /// Best-effort logical name: the wrapping property name, else the
    /// resource's `name` field, else "unresolved".
    pub fn logical_name(&self) -> String {
        if let Some(name) = &self.property_name {
            return name.clone();
        }
        match self.body.get("name") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unresolved".to_string(),
        }
    }

    /// Best-effort resource type: the `type` field, else "unknown".
    pub fn type_name(&self) -> String {
        match self.body.as_object().and_then(|obj| obj.get("type")) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        }
    }
}
