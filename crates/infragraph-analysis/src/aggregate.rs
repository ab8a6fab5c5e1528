//! Cross-file dependency aggregation

use crate::error::AnalysisError;
use crate::extract::{DependencyCollector, DependencyMap};
use crate::frontend::Frontend;
use infragraph_core::{EntityId, EntityKind, FileId, ForeignResourceNode, TemplateFormat};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Partition of one file's entities into reference boundaries: sources
/// have no incoming reference anywhere in the file, sinks no outgoing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileBoundary {
    pub sources: BTreeSet<EntityId>,
    pub sinks: BTreeSet<EntityId>,
}

/// The program-wide aggregation result: the merged dependency map, the
/// per-file boundary partitions, and the module → foreign-resource side
/// table for modules targeting foreign templates.
#[derive(Debug, Default)]
pub struct ProgramAnalysis {
    pub dependencies: BTreeMap<EntityId, BTreeSet<EntityId>>,
    pub boundaries: BTreeMap<FileId, FileBoundary>,
    pub foreign: BTreeMap<EntityId, Vec<ForeignResourceNode>>,
}

/// Merge all per-file dependency maps into one program-wide analysis.
///
/// Module entities additionally depend on every resource declared at the
/// root of their target file when that file is native; foreign targets
/// instead populate the side table, since their resources are not declared
/// entities and cannot be referenced symbolically. A module target that
/// cannot be resolved aborts the build.
pub fn aggregate<F: Frontend>(frontend: &F) -> Result<ProgramAnalysis, AnalysisError> {
    let mut analysis = ProgramAnalysis::default();

    for file in frontend.files() {
        if frontend.file(file).format != TemplateFormat::Native {
            continue;
        }

        let per_file = DependencyCollector::collect(frontend, file)?;
        analysis.boundaries.insert(file, boundary_of(&per_file));

        for (symbol, references) in per_file {
            let first_seen = !analysis.dependencies.contains_key(&symbol);
            if first_seen && frontend.entity(symbol).kind == EntityKind::Module {
                resolve_module_target(frontend, symbol, &mut analysis)?;
            }
            analysis
                .dependencies
                .entry(symbol)
                .or_default()
                .extend(references);
        }
    }

    debug!(
        entities = analysis.dependencies.len(),
        files = analysis.boundaries.len(),
        foreign_modules = analysis.foreign.len(),
        "aggregated program dependencies"
    );
    Ok(analysis)
}

fn resolve_module_target<F: Frontend>(
    frontend: &F,
    module: EntityId,
    analysis: &mut ProgramAnalysis,
) -> Result<(), AnalysisError> {
    let target = frontend
        .target_file(module)
        .map_err(|source| AnalysisError::TargetResolution {
            name: frontend.entity(module).name.clone(),
            source,
        })?;

    match frontend.file(target).format {
        TemplateFormat::Native => {
            // the module depends on every resource its target declares
            analysis
                .dependencies
                .entry(module)
                .or_default()
                .extend(frontend.root_resources(target));
        }
        TemplateFormat::ForeignJson => {
            let resources =
                frontend
                    .foreign_resources(target)
                    .map_err(|source| AnalysisError::ForeignResources {
                        uri: frontend.file(target).uri.clone(),
                        source,
                    })?;
            if !resources.is_empty() {
                analysis.foreign.insert(module, resources);
            }
        }
    }
    Ok(())
}

/// Compute the source/sink partition of one file's dependency map, over the
/// universe of its keys plus every entity they reference.
pub fn boundary_of(dependencies: &DependencyMap) -> FileBoundary {
    let targets: BTreeSet<EntityId> = dependencies.values().flatten().copied().collect();
    let with_outgoing: BTreeSet<EntityId> = dependencies
        .iter()
        .filter(|(_, refs)| !refs.is_empty())
        .map(|(symbol, _)| *symbol)
        .collect();

    let universe: BTreeSet<EntityId> = dependencies
        .keys()
        .copied()
        .chain(targets.iter().copied())
        .collect();

    FileBoundary {
        sources: universe.difference(&targets).copied().collect(),
        sinks: universe.difference(&with_outgoing).copied().collect(),
    }
}
