//! Syntax node taxonomy consumed from the frontend

use infragraph_core::EntityKind;
use serde::{Deserialize, Serialize};

/// Identifier of a syntax node, unique within one file's tree. The
/// resolution oracle is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntaxId(pub u32);

/// The closed set of syntax node categories the analysis consumes:
/// declarations, the reference-like nodes, and opaque containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyntaxKind {
    /// The top-level node of a file.
    Program,
    /// A declaration of the given kind; its body is the children.
    Declaration { kind: EntityKind, name: String },
    /// A plain identifier access.
    Identifier { name: String },
    /// An indexed or member access; the base expression is the first child.
    MemberAccess { member: String },
    /// A reference to a declared type.
    TypeReference { name: String },
    /// A function call.
    FunctionCall { name: String },
    /// A compile-time import reference.
    ImportReference { name: String },
    /// Any other node; only its children matter to the analysis.
    Other,
}

/// A node of a frontend-supplied syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub id: SyntaxId,
    pub kind: SyntaxKind,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(id: u32, kind: SyntaxKind) -> Self {
        SyntaxNode {
            id: SyntaxId(id),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// Short human-readable description, used by the tree printer.
    pub fn describe(&self) -> String {
        match &self.kind {
            SyntaxKind::Program => "Program".to_string(),
            SyntaxKind::Declaration { kind, name } => format!("Declaration({kind} {name})"),
            SyntaxKind::Identifier { name } => format!("Identifier({name})"),
            SyntaxKind::MemberAccess { member } => format!("MemberAccess(.{member})"),
            SyntaxKind::TypeReference { name } => format!("TypeReference({name})"),
            SyntaxKind::FunctionCall { name } => format!("FunctionCall({name})"),
            SyntaxKind::ImportReference { name } => format!("ImportReference({name})"),
            SyntaxKind::Other => "Other".to_string(),
        }
    }
}

/// One entry of a flattened syntax tree: the node, the flat index of its
/// parent, and its depth.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxItem<'a> {
    pub node: &'a SyntaxNode,
    pub parent: Option<usize>,
    pub depth: usize,
}

/// Flatten a tree into pre-order, recording parent links and depth.
pub fn flatten(root: &SyntaxNode) -> Vec<SyntaxItem<'_>> {
    let mut items = Vec::new();
    flatten_into(root, None, 0, &mut items);
    items
}

fn flatten_into<'a>(
    node: &'a SyntaxNode,
    parent: Option<usize>,
    depth: usize,
    items: &mut Vec<SyntaxItem<'a>>,
) {
    let index = items.len();
    items.push(SyntaxItem {
        node,
        parent,
        depth,
    });
    for child in &node.children {
        flatten_into(child, Some(index), depth + 1, items);
    }
}
