//! Analysis error type

use thiserror::Error;

/// Fatal analysis failures. Unresolved symbol references are not among
/// them; those are silently skipped by design.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no syntax tree available for {uri}")]
    MissingSyntax { uri: String },

    #[error("failed to resolve the target file of '{name}'")]
    TargetResolution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to read the foreign resource collection of {uri}")]
    ForeignResources {
        uri: String,
        #[source]
        source: anyhow::Error,
    },
}
