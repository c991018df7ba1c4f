// dqlint-core/src/application/validator.rs

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::domain::check::{self, RecordScan};
use crate::domain::error::DomainError;
use crate::domain::report::ValidationReport;
use crate::error::DqlintError;
use crate::infrastructure::loader;

/// Validate a check configuration file and return the full report.
///
/// Load and structural failures are fatal and surface as `Err`; everything
/// found at the record level is collected into the report instead, so a
/// single pass covers the whole document.
pub fn run_validation(path: &Path) -> Result<ValidationReport, DqlintError> {
    let document = loader::load_document(path)?;
    let checks = expect_check_list(&document)?;

    let mut report = ValidationReport::new(checks.len());
    println!("Total checks to validate: {}", checks.len());
    println!();

    for (index, raw) in checks.iter().enumerate() {
        let scan = check::scan_record(raw, index);
        print_progress(index, checks.len(), &scan);
        report.absorb(scan);
    }

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Scan complete"
    );

    Ok(report)
}

/// Structural gate: the root must be a non-empty array, otherwise no
/// per-record check runs at all.
fn expect_check_list(document: &Value) -> Result<&Vec<Value>, DomainError> {
    let checks = document
        .as_array()
        .ok_or_else(|| DomainError::RootNotArray {
            found: check::value_kind(document).to_string(),
        })?;
    if checks.is_empty() {
        return Err(DomainError::EmptyDocument);
    }
    Ok(checks)
}

fn print_progress(index: usize, total: usize, scan: &RecordScan) {
    println!("[{}/{}] Validating: {}", index + 1, total, scan.check_id);
    if scan.is_valid() {
        println!("  ✅ VALID");
    } else {
        println!("  ❌ INVALID - {} error(s)", scan.errors.len());
    }
    if !scan.warnings.is_empty() {
        println!("  ⚠️  {} warning(s)", scan.warnings.len());
    }
}
