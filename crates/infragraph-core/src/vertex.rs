//! Vertex unification — one canonical graph node per underlying object

use crate::model::{Entity, FileId, FileRecord, ForeignResourceNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity of the object a vertex stands for. Vertex equality is defined
/// over this key, never over the rendered label, so visually identical but
/// distinct objects stay distinct and repeated conversions collapse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKey {
    Entity(crate::model::EntityId),
    Foreign(FileId, u32),
    File(FileId),
    /// Name-level vertices from the lightweight single-file path.
    Name(String),
}

/// A unified graph node: a label, a string metadata map carrying at least
/// a "kind" entry, and the identity of the originating object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub label: String,
    pub metadata: HashMap<String, String>,
    pub key: VertexKey,
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Vertex {
    fn with_kind(label: String, kind: &str, key: VertexKey) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("kind".to_string(), kind.to_string());
        Vertex { label, metadata, key }
    }

    /// Vertex for a declared entity: label `"<name>: <kind>"`.
    pub fn from_entity(entity: &Entity) -> Self {
        Vertex::with_kind(
            format!("{}: {}", entity.name, entity.kind),
            entity.kind.as_str(),
            VertexKey::Entity(entity.id),
        )
    }

    /// Vertex for a foreign resource: label `"<logical>: FOREIGN(<type>)"`.
    pub fn from_foreign(node: &ForeignResourceNode) -> Self {
        let type_name = node.type_name();
        Vertex::with_kind(
            format!("{}: FOREIGN({})", node.logical_name(), type_name),
            &type_name,
            VertexKey::Foreign(node.file, node.index),
        )
    }

    /// Vertex for a source file: label is the canonical absolute URI.
    pub fn from_file(file: &FileRecord) -> Self {
        Vertex::with_kind(
            file.uri.clone(),
            file.format.category(),
            VertexKey::File(file.id),
        )
    }

    /// Name-only vertex, identified by its label.
    pub fn named(name: &str) -> Self {
        Vertex::with_kind(
            name.to_string(),
            "Name",
            VertexKey::Name(name.to_string()),
        )
    }

    /// The "kind" metadata entry, if present.
    pub fn kind(&self) -> Option<&str> {
        self.metadata.get("kind").map(String::as_str)
    }
}

/// Identity-keyed vertex cache, scoped to one graph build. Converting the
/// same underlying object twice yields the same vertex.
#[derive(Debug, Default)]
pub struct VertexInterner {
    cache: HashMap<VertexKey, Vertex>,
}

impl VertexInterner {
    pub fn new() -> Self {
        VertexInterner::default()
    }

    pub fn entity(&mut self, entity: &Entity) -> Vertex {
        self.cache
            .entry(VertexKey::Entity(entity.id))
            .or_insert_with(|| Vertex::from_entity(entity))
            .clone()
    }

    pub fn foreign(&mut self, node: &ForeignResourceNode) -> Vertex {
        self.cache
            .entry(VertexKey::Foreign(node.file, node.index))
            .or_insert_with(|| Vertex::from_foreign(node))
            .clone()
    }

    pub fn file(&mut self, file: &FileRecord) -> Vertex {
        self.cache
            .entry(VertexKey::File(file.id))
            .or_insert_with(|| Vertex::from_file(file))
            .clone()
    }
}
