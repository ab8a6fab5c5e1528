//! Graph wrapper using petgraph::StableDiGraph with key-deduplicated vertices

use crate::vertex::{Vertex, VertexKey};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{Dfs, EdgeRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classifies edge provenance: plain program references, or the virtual
/// boundary edges of the textual-rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeTag {
    #[default]
    Plain,
    VirtualSource,
    VirtualSink,
}

impl EdgeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeTag::Plain => "",
            EdgeTag::VirtualSource => "virtual_source",
            EdgeTag::VirtualSink => "virtual_sink",
        }
    }
}

/// Identifier of a vertex within one `DepGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    fn index(self) -> NodeIndex {
        NodeIndex::new(self.0 as usize)
    }

    fn from_index(idx: NodeIndex) -> Self {
        VertexId(idx.index() as u32)
    }
}

/// The dependency graph — directed, bidirectionally queryable, with one
/// vertex per `VertexKey` and no parallel edges between the same ordered
/// pair. Vertex and edge iteration follows insertion order.
pub struct DepGraph {
    inner: StableDiGraph<Vertex, EdgeTag>,
    index: HashMap<VertexKey, NodeIndex>,
}

impl std::fmt::Debug for DepGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepGraph")
            .field("vertex_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl DepGraph {
    pub fn new() -> Self {
        DepGraph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Add a vertex. Re-adding a vertex with a known key is a no-op that
    /// returns the existing id.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        if let Some(idx) = self.index.get(&vertex.key) {
            return VertexId::from_index(*idx);
        }
        let key = vertex.key.clone();
        let idx = self.inner.add_node(vertex);
        self.index.insert(key, idx);
        VertexId::from_index(idx)
    }

    /// Add an edge. A second edge between the same ordered pair is a no-op,
    /// regardless of tag. Returns true if the edge was inserted.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, tag: EdgeTag) -> bool {
        if self.contains_edge(source, target) {
            return false;
        }
        self.inner.add_edge(source.index(), target.index(), tag);
        true
    }

    pub fn contains_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.inner
            .find_edge(source.index(), target.index())
            .is_some()
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.inner.node_weight(id.index())
    }

    /// Look up the vertex id for an underlying object key.
    pub fn lookup(&self, key: &VertexKey) -> Option<VertexId> {
        self.index.get(key).map(|idx| VertexId::from_index(*idx))
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.inner.node_indices().filter_map(move |idx| {
            self.inner
                .node_weight(idx)
                .map(|v| (VertexId::from_index(idx), v))
        })
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, EdgeTag)> + '_ {
        self.inner.edge_indices().filter_map(move |idx| {
            let (s, t) = self.inner.edge_endpoints(idx)?;
            let tag = *self.inner.edge_weight(idx)?;
            Some((VertexId::from_index(s), VertexId::from_index(t), tag))
        })
    }

    /// Out-neighbors of a vertex.
    pub fn neighbors_out(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.inner
            .edges_directed(id.index(), Direction::Outgoing)
            .map(|e| VertexId::from_index(e.target()))
    }

    /// In-neighbors of a vertex.
    pub fn neighbors_in(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.inner
            .edges_directed(id.index(), Direction::Incoming)
            .map(|e| VertexId::from_index(e.source()))
    }

    /// All vertices whose kind metadata matches, in insertion order.
    pub fn vertices_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = VertexId> + 'a {
        self.vertices()
            .filter(move |(_, v)| v.kind() == Some(kind))
            .map(|(id, _)| id)
    }

    /// All vertices reachable from `start` by forward traversal, excluding
    /// `start` itself, in depth-first discovery order.
    pub fn reachable_from(&self, start: VertexId) -> Vec<VertexId> {
        let mut dfs = Dfs::new(&self.inner, start.index());
        let mut discovered = Vec::new();
        while let Some(idx) = dfs.next(&self.inner) {
            if idx != start.index() {
                discovered.push(VertexId::from_index(idx));
            }
        }
        discovered
    }
}

impl Default for DepGraph {
    fn default() -> Self {
        Self::new()
    }
}
