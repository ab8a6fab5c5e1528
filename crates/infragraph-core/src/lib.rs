//! Infragraph Core — entity model, dependency graph, and condensation

pub mod condense;
pub mod graph;
pub mod model;
pub mod vertex;


pub use condense::condense;
pub use graph::{DepGraph, EdgeTag, VertexId};
pub use model::{
    Entity, EntityId, EntityKind, FileId, FileRecord, ForeignResourceNode, TemplateFormat,
};
pub use vertex::{Vertex, VertexInterner, VertexKey};
