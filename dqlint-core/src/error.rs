// dqlint-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DqlintError {
    // --- DOMAIN ERRORS (structural rules) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to keep `?` ergonomic on raw IO calls
impl From<std::io::Error> for DqlintError {
    fn from(err: std::io::Error) -> Self {
        DqlintError::Infrastructure(InfrastructureError::Io(err))
    }
}
