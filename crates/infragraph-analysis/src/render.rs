//! Textual renderers for syntax trees, dependency maps, and graphs

use crate::extract::DependencyMap;
use crate::frontend::Frontend;
use crate::syntax::{SyntaxNode, flatten};
use infragraph_core::DepGraph;
use std::io::{self, Write};

/// Print a syntax tree as an ASCII-art hierarchy.
pub fn write_syntax_tree<W: Write>(root: &SyntaxNode, out: &mut W) -> io::Result<()> {
    let items = flatten(root);

    // children per flat index; index 0 is the root
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    for (index, item) in items.iter().enumerate() {
        if let Some(parent) = item.parent {
            children[parent].push(index);
        }
    }
    let is_last = |index: usize| -> bool {
        match items[index].parent {
            Some(parent) => children[parent].last() == Some(&index),
            None => true,
        }
    };

    for (index, item) in items.iter().enumerate() {
        let mut prefix = String::new();

        // ancestors, root first, skipping the root itself
        let mut ancestors = Vec::new();
        let mut cursor = item.parent;
        while let Some(a) = cursor {
            ancestors.push(a);
            cursor = items[a].parent;
        }
        for ancestor in ancestors.iter().rev().skip(1) {
            prefix.push_str(if is_last(*ancestor) { "  " } else { "| " });
        }
        if item.depth > 0 {
            prefix.push_str(if is_last(index) { "└─" } else { "├─" });
        }

        writeln!(out, "{}{}", prefix, item.node.describe())?;
    }
    Ok(())
}

/// Print one line per declaration/reference pair of a dependency map;
/// declarations without references get a bare line.
pub fn write_dependency_map<F: Frontend, W: Write>(
    frontend: &F,
    map: &DependencyMap,
    out: &mut W,
) -> io::Result<()> {
    for (symbol, references) in map {
        let declaration = frontend.entity(*symbol);
        if references.is_empty() {
            writeln!(out, "{} ({})", declaration.name, declaration.kind)?;
            continue;
        }
        for reference in references {
            let referenced = frontend.entity(*reference);
            writeln!(
                out,
                "{} ({}) -> {} ({})",
                declaration.name, declaration.kind, referenced.name, referenced.kind
            )?;
        }
    }
    Ok(())
}

/// Print one line per edge of a graph, including non-empty edge tags,
/// followed by any vertices without edges.
pub fn write_graph<W: Write>(graph: &DepGraph, out: &mut W) -> io::Result<()> {
    for (source, target, tag) in graph.edges() {
        let source_label = graph.vertex(source).map(|v| v.label.as_str()).unwrap_or("?");
        let target_label = graph.vertex(target).map(|v| v.label.as_str()).unwrap_or("?");
        if tag.as_str().is_empty() {
            writeln!(out, "{source_label} -> {target_label}")?;
        } else {
            writeln!(out, "{source_label} -> {target_label} [{}]", tag.as_str())?;
        }
    }
    for (id, vertex) in graph.vertices() {
        let isolated =
            graph.neighbors_out(id).next().is_none() && graph.neighbors_in(id).next().is_none();
        if isolated {
            writeln!(out, "{}", vertex.label)?;
        }
    }
    Ok(())
}
