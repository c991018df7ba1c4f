// dqlint-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES ---

// 1. Domain (pure validation rules)
// Check schema, findings, report. Depends on nothing else.
pub mod domain;

// 2. Infrastructure (Adapters)
// Document loading: filesystem, JSON/YAML parsing, remote-scheme rejection.
pub mod infrastructure;

// 3. Application (Use Cases)
// The validation run orchestrating load -> structure check -> record scan.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::run_validation;
pub use domain::report::{Finding, ValidationReport};
pub use error::DqlintError;
