//! Graph build pipeline: vertex unification and graph assembly

use crate::aggregate::{ProgramAnalysis, aggregate};
use crate::error::AnalysisError;
use crate::frontend::Frontend;
use infragraph_core::{DepGraph, EdgeTag, Vertex, VertexInterner};
use tracing::info;

/// The three unified vertex-map shapes consumed by graph assembly, in
/// insertion order: entity dependencies, per-file boundary partitions
/// (sources, sinks), and module → foreign-resource collections.
#[derive(Debug, Default)]
pub struct UnifiedMaps {
    pub dependencies: Vec<(Vertex, Vec<Vertex>)>,
    pub boundaries: Vec<(Vertex, (Vec<Vertex>, Vec<Vertex>))>,
    pub foreign: Vec<(Vertex, Vec<Vertex>)>,
}

/// Convert an aggregation result into unified vertices. A single interner
/// scope guarantees one vertex per underlying object for the whole build.
pub fn unify<F: Frontend>(frontend: &F, analysis: &ProgramAnalysis) -> UnifiedMaps {
    let mut interner = VertexInterner::new();
    let mut maps = UnifiedMaps::default();

    for (symbol, references) in &analysis.dependencies {
        let vertex = interner.entity(frontend.entity(*symbol));
        let targets = references
            .iter()
            .map(|r| interner.entity(frontend.entity(*r)))
            .collect();
        maps.dependencies.push((vertex, targets));
    }

    for (file, boundary) in &analysis.boundaries {
        let vertex = interner.file(frontend.file(*file));
        let sources = boundary
            .sources
            .iter()
            .map(|s| interner.entity(frontend.entity(*s)))
            .collect();
        let sinks = boundary
            .sinks
            .iter()
            .map(|s| interner.entity(frontend.entity(*s)))
            .collect();
        maps.boundaries.push((vertex, (sources, sinks)));
    }

    for (module, resources) in &analysis.foreign {
        let vertex = interner.entity(frontend.entity(*module));
        let nodes = resources.iter().map(|r| interner.foreign(r)).collect();
        maps.foreign.push((vertex, nodes));
    }

    maps
}

/// Write the unified maps into one directed bidirectional graph. All
/// insertions are idempotent. With `tag_boundaries` set (the textual
/// rendering path), file boundary edges carry the virtual_source /
/// virtual_sink tags instead of the default empty tag.
pub fn assemble(maps: &UnifiedMaps, tag_boundaries: bool) -> DepGraph {
    let mut graph = DepGraph::new();

    for (entity, references) in &maps.dependencies {
        let source = graph.add_vertex(entity.clone());
        for reference in references {
            let target = graph.add_vertex(reference.clone());
            graph.add_edge(source, target, EdgeTag::Plain);
        }
    }

    let (source_tag, sink_tag) = if tag_boundaries {
        (EdgeTag::VirtualSource, EdgeTag::VirtualSink)
    } else {
        (EdgeTag::Plain, EdgeTag::Plain)
    };
    for (file, (sources, sinks)) in &maps.boundaries {
        let file_vertex = graph.add_vertex(file.clone());
        // the file acts as a junction: into its sources, out of its sinks
        for source in sources {
            let v = graph.add_vertex(source.clone());
            graph.add_edge(file_vertex, v, source_tag);
        }
        for sink in sinks {
            let v = graph.add_vertex(sink.clone());
            graph.add_edge(v, file_vertex, sink_tag);
        }
    }

    for (module, resources) in &maps.foreign {
        let source = graph.add_vertex(module.clone());
        for resource in resources {
            let target = graph.add_vertex(resource.clone());
            graph.add_edge(source, target, EdgeTag::Plain);
        }
    }

    graph
}

/// Run the full pipeline: extract per file, aggregate across files, unify
/// vertices, and assemble the dependency graph.
pub fn build_graph<F: Frontend>(frontend: &F) -> Result<DepGraph, AnalysisError> {
    let analysis = aggregate(frontend)?;
    let maps = unify(frontend, &analysis);
    let graph = assemble(&maps, false);

    info!(
        files = frontend.files().len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built dependency graph"
    );
    Ok(graph)
}
