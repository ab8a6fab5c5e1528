//! Per-file symbol reference extraction

use crate::error::AnalysisError;
use crate::frontend::Frontend;
use crate::syntax::{SyntaxKind, SyntaxNode};
use infragraph_core::{EntityId, EntityKind, FileId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Declared entity → set of referenced declared entities. Ordered maps keep
/// downstream iteration deterministic.
pub type DependencyMap = BTreeMap<EntityId, BTreeSet<EntityId>>;

/// Walks one file's resolved syntax tree and records which declared
/// entities reference which other declared entities.
///
/// A declaration stack provides the "current declaration" context; it is
/// owned by one traversal and never shared across files. Reference nodes
/// outside any declaration, references the oracle cannot resolve, and
/// self-references are all skipped.
pub struct DependencyCollector<'a, F: Frontend> {
    frontend: &'a F,
    file: FileId,
    declaration_stack: Vec<EntityId>,
    dependencies: DependencyMap,
}

impl<'a, F: Frontend> DependencyCollector<'a, F> {
    /// Collect the dependency map for one native file.
    pub fn collect(frontend: &'a F, file: FileId) -> Result<DependencyMap, AnalysisError> {
        let root = frontend
            .syntax(file)
            .ok_or_else(|| AnalysisError::MissingSyntax {
                uri: frontend.file(file).uri.clone(),
            })?;

        let mut collector = DependencyCollector {
            frontend,
            file,
            declaration_stack: Vec::new(),
            dependencies: BTreeMap::new(),
        };
        collector.visit(root)?;

        debug!(
            uri = %frontend.file(file).uri,
            declarations = collector.dependencies.len(),
            "collected per-file dependencies"
        );
        Ok(collector.dependencies)
    }

    fn visit(&mut self, node: &SyntaxNode) -> Result<(), AnalysisError> {
        match &node.kind {
            SyntaxKind::Declaration { .. } => {
                let symbol = self.frontend.resolve(self.file, node.id);
                if let Some(symbol) = symbol {
                    self.declaration_stack.push(symbol);
                    // entry exists even when the body references nothing
                    self.dependencies.entry(symbol).or_default();
                }
                for child in &node.children {
                    self.visit(child)?;
                }
                if symbol.is_some() {
                    self.declaration_stack.pop();
                }
            }
            SyntaxKind::Identifier { .. }
            | SyntaxKind::TypeReference { .. }
            | SyntaxKind::FunctionCall { .. }
            | SyntaxKind::ImportReference { .. } => {
                self.record_reference(node);
                for child in &node.children {
                    self.visit(child)?;
                }
            }
            SyntaxKind::MemberAccess { member } => {
                self.record_member_access(node, member)?;
                for child in &node.children {
                    self.visit(child)?;
                }
            }
            _ => {
                for child in &node.children {
                    self.visit(child)?;
                }
            }
        }
        Ok(())
    }

    /// Record a dependency of the current declaration on whatever the node
    /// resolves to. Unresolved nodes are skipped; so are references that
    /// only denote an imported-namespace alias, which carry no information
    /// on their own.
    fn record_reference(&mut self, node: &SyntaxNode) {
        if self.declaration_stack.is_empty() {
            return;
        }
        let Some(referenced) = self.frontend.resolve(self.file, node.id) else {
            return;
        };
        if self.frontend.entity(referenced).kind == EntityKind::ImportedNamespace {
            return;
        }
        self.add_dependency(referenced);
    }

    /// Member access gets one special case: when the base expression
    /// denotes a wildcard namespace import, the member is looked up among
    /// the target file's exports (variables first, then types, then
    /// functions) and the matched export is recorded instead of the alias.
    /// Everything else falls back to resolving the access node directly.
    fn record_member_access(
        &mut self,
        node: &SyntaxNode,
        member: &str,
    ) -> Result<(), AnalysisError> {
        if self.declaration_stack.is_empty() {
            return Ok(());
        }

        if let Some(base) = node.children.first() {
            if let Some(base_symbol) = self.frontend.resolve(self.file, base.id) {
                if self.frontend.entity(base_symbol).kind == EntityKind::ImportedNamespace {
                    let target = self.frontend.target_file(base_symbol).map_err(|source| {
                        AnalysisError::TargetResolution {
                            name: self.frontend.entity(base_symbol).name.clone(),
                            source,
                        }
                    })?;
                    let export = self
                        .frontend
                        .exported_variable(target, member)
                        .or_else(|| self.frontend.exported_type(target, member))
                        .or_else(|| self.frontend.exported_function(target, member));
                    if let Some(export) = export {
                        self.add_dependency(export);
                        return Ok(());
                    }
                }
            }
        }

        self.record_reference(node);
        Ok(())
    }

    fn add_dependency(&mut self, referenced: EntityId) {
        let Some(&current) = self.declaration_stack.last() else {
            return;
        };
        // self references are never recorded
        if referenced == current {
            return;
        }
        self.dependencies.entry(current).or_default().insert(referenced);
    }
}
