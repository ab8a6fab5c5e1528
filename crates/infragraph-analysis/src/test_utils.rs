//! Test utilities: an in-memory frontend with builder-style setup

use crate::frontend::Frontend;
use crate::syntax::{SyntaxId, SyntaxNode};
use anyhow::anyhow;
use infragraph_core::{
    Entity, EntityId, EntityKind, FileId, FileRecord, ForeignResourceNode, TemplateFormat,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};

/// An in-memory stand-in for the language frontend. Files, entities,
/// syntax trees, and resolutions are registered up front by the test.
#[derive(Default)]
pub struct FakeFrontend {
    files: Vec<FileRecord>,
    syntax: HashMap<FileId, SyntaxNode>,
    entities: BTreeMap<EntityId, Entity>,
    resolutions: HashMap<(FileId, SyntaxId), EntityId>,
    targets: HashMap<EntityId, FileId>,
    broken_targets: HashSet<EntityId>,
    foreign: HashMap<FileId, Vec<ForeignResourceNode>>,
    exported_variables: HashMap<(FileId, String), EntityId>,
    exported_types: HashMap<(FileId, String), EntityId>,
    exported_functions: HashMap<(FileId, String), EntityId>,
    next_entity: u64,
}

impl FakeFrontend {
    pub fn new() -> Self {
        FakeFrontend::default()
    }

    pub fn add_file(&mut self, uri: &str, format: TemplateFormat) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(FileRecord {
            id,
            uri: uri.to_string(),
            format,
        });
        id
    }

    pub fn declare(&mut self, file: FileId, kind: EntityKind, name: &str) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        self.entities.insert(
            id,
            Entity {
                id,
                kind,
                name: name.to_string(),
                file,
            },
        );
        id
    }

    pub fn set_syntax(&mut self, file: FileId, root: SyntaxNode) {
        self.syntax.insert(file, root);
    }

    /// Register what the resolution oracle answers for a syntax node.
    pub fn resolve_to(&mut self, file: FileId, node: u32, entity: EntityId) {
        self.resolutions.insert((file, SyntaxId(node)), entity);
    }

    pub fn set_target(&mut self, entity: EntityId, file: FileId) {
        self.targets.insert(entity, file);
    }

    /// Make target resolution fail for this entity.
    pub fn break_target(&mut self, entity: EntityId) {
        self.broken_targets.insert(entity);
    }

    pub fn add_foreign_resource(
        &mut self,
        file: FileId,
        property_name: Option<&str>,
        body: Value,
    ) {
        let resources = self.foreign.entry(file).or_default();
        let index = resources.len() as u32;
        resources.push(ForeignResourceNode {
            file,
            index,
            property_name: property_name.map(str::to_string),
            body,
        });
    }

    pub fn export_variable(&mut self, file: FileId, name: &str, entity: EntityId) {
        self.exported_variables.insert((file, name.to_string()), entity);
    }

    pub fn export_type(&mut self, file: FileId, name: &str, entity: EntityId) {
        self.exported_types.insert((file, name.to_string()), entity);
    }

    pub fn export_function(&mut self, file: FileId, name: &str, entity: EntityId) {
        self.exported_functions.insert((file, name.to_string()), entity);
    }
}

impl Frontend for FakeFrontend {
    fn files(&self) -> Vec<FileId> {
        self.files.iter().map(|f| f.id).collect()
    }

    fn file(&self, id: FileId) -> &FileRecord {
        &self.files[id.0 as usize]
    }

    fn syntax(&self, file: FileId) -> Option<&SyntaxNode> {
        self.syntax.get(&file)
    }

    fn resolve(&self, file: FileId, node: SyntaxId) -> Option<EntityId> {
        self.resolutions.get(&(file, node)).copied()
    }

    fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[&id]
    }

    fn target_file(&self, entity: EntityId) -> anyhow::Result<FileId> {
        if self.broken_targets.contains(&entity) {
            return Err(anyhow!("target file does not exist"));
        }
        self.targets
            .get(&entity)
            .copied()
            .ok_or_else(|| anyhow!("no target registered"))
    }

    fn root_resources(&self, file: FileId) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|e| e.file == file && e.kind == EntityKind::Resource)
            .map(|e| e.id)
            .collect()
    }

    fn foreign_resources(&self, file: FileId) -> anyhow::Result<Vec<ForeignResourceNode>> {
        Ok(self.foreign.get(&file).cloned().unwrap_or_default())
    }

    fn exported_variable(&self, file: FileId, name: &str) -> Option<EntityId> {
        self.exported_variables.get(&(file, name.to_string())).copied()
    }

    fn exported_type(&self, file: FileId, name: &str) -> Option<EntityId> {
        self.exported_types.get(&(file, name.to_string())).copied()
    }

    fn exported_function(&self, file: FileId, name: &str) -> Option<EntityId> {
        self.exported_functions.get(&(file, name.to_string())).copied()
    }
}
