//! Frontend trait — the seam to the external language implementation

use crate::syntax::{SyntaxId, SyntaxNode};
use infragraph_core::{Entity, EntityId, FileId, FileRecord, ForeignResourceNode};

/// Operations the analysis consumes from the language frontend: parsed and
/// resolved syntax, declared-entity lookup, module/import target files, and
/// the raw resource collections of foreign templates.
///
/// Resolution is best-effort by contract: `resolve` returning `None` for a
/// node (built-in functions, syntax outside the declared-entity world) is
/// expected and not an error. Methods that may touch host I/O return
/// `anyhow::Result` and their failures abort the build.
pub trait Frontend {
    /// All files of the compiled program, entry file first.
    fn files(&self) -> Vec<FileId>;

    fn file(&self, id: FileId) -> &FileRecord;

    /// The resolved syntax tree of a native-format file. None for foreign
    /// files, which have no native syntax.
    fn syntax(&self, file: FileId) -> Option<&SyntaxNode>;

    /// Resolve a syntax node to the declared entity it denotes, if any.
    fn resolve(&self, file: FileId, node: SyntaxId) -> Option<EntityId>;

    fn entity(&self, id: EntityId) -> &Entity;

    /// The file a module or namespace-import entity points at.
    fn target_file(&self, entity: EntityId) -> anyhow::Result<FileId>;

    /// Resource entities declared at the root of a native file.
    fn root_resources(&self, file: FileId) -> Vec<EntityId>;

    /// The raw resource collection of a foreign-format file.
    fn foreign_resources(&self, file: FileId) -> anyhow::Result<Vec<ForeignResourceNode>>;

    /// Exported declarations of a file, looked up by name. Used to resolve
    /// member access through a wildcard namespace import.
    fn exported_variable(&self, file: FileId, name: &str) -> Option<EntityId>;
    fn exported_type(&self, file: FileId, name: &str) -> Option<EntityId>;
    fn exported_function(&self, file: FileId, name: &str) -> Option<EntityId>;
}
