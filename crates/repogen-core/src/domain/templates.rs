//! The pluggable template resource.
//!
//! The composer treats template bodies as opaque text parameterized by
//! namespace, entity name, and context name. This trait is the seam: the
//! core only knows the slots, `repogen-adapters` supplies the actual
//! source-language text (`CSharpTemplates`).
//!
//! The unit-of-work artifacts are assembled by the composer from three
//! fragments (header, one property block per entity, footer) so that adding
//! an entity appends a line without reordering existing ones.

use crate::domain::identifiers::{ContextName, EntityName};

/// A complete set of template bodies for one target source language.
pub trait TemplateSet: Send + Sync {
    /// File extension (without the dot) of both scanned and generated
    /// sources, e.g. `cs`.
    fn source_extension(&self) -> &str;

    /// Body of `Abstractions/I{E}Repository`.
    fn repository_interface(&self, namespace: &str, entity: &EntityName) -> String;

    /// Body of `Repositories/{E}Repository`, bound to the context type.
    fn repository_implementation(
        &self,
        namespace: &str,
        entity: &EntityName,
        context: &ContextName,
    ) -> String;

    /// Opening of `Base/IUnitOfWork`, up to the property block.
    fn unit_of_work_interface_header(&self, namespace: &str) -> String;

    /// One `I{E}Repository {E}Repository { get; }` declaration.
    fn unit_of_work_interface_property(&self, entity: &EntityName) -> String;

    /// Remainder of `Base/IUnitOfWork`: transaction lifecycle, repository
    /// resolution, save-changes.
    fn unit_of_work_interface_footer(&self) -> String;

    /// Opening of `Base/UnitOfWork`, bound to the context type.
    fn unit_of_work_implementation_header(&self, namespace: &str, context: &ContextName) -> String;

    /// One cached-resolution property for the implementation.
    fn unit_of_work_implementation_property(&self, entity: &EntityName) -> String;

    /// Remainder of `Base/UnitOfWork`.
    fn unit_of_work_implementation_footer(&self) -> String;

    /// Body of `Base/IRepository` — the generic CRUD/query contract.
    fn generic_repository_interface(&self, namespace: &str) -> String;

    /// Body of `Base/Repository`.
    fn generic_repository_implementation(&self, namespace: &str) -> String;
}
