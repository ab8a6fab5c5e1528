//! Infragraph Analysis — reference extraction, cross-file aggregation, and
//! graph assembly over a frontend-supplied resolved syntax tree

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod frontend;
pub mod names;
pub mod pipeline;
pub mod render;
pub mod syntax;


#[cfg(test)]
pub mod test_utils;

pub use aggregate::{FileBoundary, ProgramAnalysis, aggregate};
pub use error::AnalysisError;
pub use extract::{DependencyCollector, DependencyMap};
pub use frontend::Frontend;
pub use pipeline::{UnifiedMaps, assemble, build_graph, unify};
pub use syntax::{SyntaxId, SyntaxKind, SyntaxNode};
