// dqlint-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Configuration must contain an array at the root level, got {found}")]
    #[diagnostic(
        code(dqlint::domain::structure),
        help("Wrap the check definitions in a top-level list.")
    )]
    RootNotArray { found: String },

    #[error("Configuration cannot be empty")]
    #[diagnostic(
        code(dqlint::domain::empty),
        help("Add at least one check definition to the file.")
    )]
    EmptyDocument,
}
