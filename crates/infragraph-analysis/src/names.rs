//! Lightweight single-file, name-level dependency extraction
//!
//! A no-resolution fallback path: only parameter and variable declarations
//! are tracked, and references are recorded by identifier name. Useful for
//! a quick per-file view when no semantic frontend is available.

use crate::syntax::{SyntaxKind, SyntaxNode};
use infragraph_core::{DepGraph, EdgeTag, EntityKind, Vertex};
use std::collections::{BTreeMap, BTreeSet};

/// Map each parameter/variable declaration name to the identifier names
/// referenced in its body.
pub fn name_dependencies(root: &SyntaxNode) -> BTreeMap<String, BTreeSet<String>> {
    let mut dependencies = BTreeMap::new();
    let mut current: Option<String> = None;
    walk(root, &mut current, &mut dependencies);
    dependencies
}

fn walk(
    node: &SyntaxNode,
    current: &mut Option<String>,
    dependencies: &mut BTreeMap<String, BTreeSet<String>>,
) {
    match &node.kind {
        SyntaxKind::Declaration { kind, name }
            if matches!(*kind, EntityKind::Parameter | EntityKind::Variable) =>
        {
            let previous = current.replace(name.clone());
            dependencies.entry(name.clone()).or_default();
            for child in &node.children {
                walk(child, current, dependencies);
            }
            *current = previous;
        }
        SyntaxKind::Identifier { name } => {
            if let Some(declaration) = current.as_deref() {
                if name.as_str() != declaration {
                    dependencies
                        .entry(declaration.to_string())
                        .or_default()
                        .insert(name.clone());
                }
            }
            for child in &node.children {
                walk(child, current, dependencies);
            }
        }
        _ => {
            for child in &node.children {
                walk(child, current, dependencies);
            }
        }
    }
}

/// Build a name-level graph for one file, with vertices identified by
/// their declaration or identifier name.
pub fn name_graph(root: &SyntaxNode) -> DepGraph {
    let mut graph = DepGraph::new();
    for (declaration, references) in name_dependencies(root) {
        let source = graph.add_vertex(Vertex::named(&declaration));
        for reference in references {
            let target = graph.add_vertex(Vertex::named(&reference));
            graph.add_edge(source, target, EdgeTag::Plain);
        }
    }
    graph
}
