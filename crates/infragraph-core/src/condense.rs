//! Reachability-based graph condensation

use crate::graph::{DepGraph, EdgeTag, VertexId};
use crate::model::EntityKind;
use std::collections::HashMap;
use tracing::debug;

/// Collapse everything reachable from vertices of the given kind into a
/// single representative per seed, producing a coarsened copy of the graph.
///
/// Every vertex whose kind metadata equals `kind` becomes a seed. A full
/// depth-first traversal from each seed yields its absorbed set (the seed
/// itself excluded). When a vertex is reachable from more than one seed,
/// the seed added to the graph earliest wins. Edges are then rewritten
/// through the seed representatives; edges that collapse into a single
/// group are dropped, as are non-seed vertices left without any surviving
/// edge. An empty seed set yields an empty graph.
///
/// The input graph is left untouched.
pub fn condense(graph: &DepGraph, kind: EntityKind) -> DepGraph {
    let mut reachability: Vec<(VertexId, Vec<VertexId>)> = Vec::new();
    for seed in graph.vertices_of_kind(kind.as_str()) {
        reachability.push((seed, graph.reachable_from(seed)));
    }

    debug!(
        kind = kind.as_str(),
        seeds = reachability.len(),
        "condensing graph"
    );

    if reachability.is_empty() {
        return DepGraph::new();
    }

    let mut reverse_index: HashMap<VertexId, VertexId> = HashMap::new();
    for (seed, absorbed) in &reachability {
        for vertex in absorbed {
            // earliest seed wins on overlap
            reverse_index.entry(*vertex).or_insert(*seed);
        }
    }

    let mut reduced = DepGraph::new();
    for (seed, _) in &reachability {
        if let Some(vertex) = graph.vertex(*seed) {
            reduced.add_vertex(vertex.clone());
        }
    }

    for (source, target, _) in graph.edges() {
        let rep_source = reverse_index.get(&source).copied().unwrap_or(source);
        let rep_target = reverse_index.get(&target).copied().unwrap_or(target);
        if rep_source == rep_target {
            // intra-group self-loop
            continue;
        }
        let (Some(sv), Some(tv)) = (graph.vertex(rep_source), graph.vertex(rep_target)) else {
            continue;
        };
        let s = reduced.add_vertex(sv.clone());
        let t = reduced.add_vertex(tv.clone());
        reduced.add_edge(s, t, EdgeTag::Plain);
    }

    reduced
}
