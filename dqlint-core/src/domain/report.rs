// dqlint-core/src/domain/report.rs

use serde::Serialize;
use std::fmt;

use crate::domain::check::RecordScan;

/// A single error or warning, tagged with the check that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check_id: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.check_id, self.message)
    }
}

/// Aggregate result of one validation run.
///
/// Built fresh per invocation and returned by value; nothing is carried
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_checks: usize,
    pub valid_checks: usize,
    pub invalid_checks: usize,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(total_checks: usize) -> Self {
        Self {
            total_checks,
            ..Self::default()
        }
    }

    /// Fold one record scan into the aggregate.
    pub fn absorb(&mut self, scan: RecordScan) {
        if scan.is_valid() {
            self.valid_checks += 1;
        } else {
            self.invalid_checks += 1;
        }

        let RecordScan {
            check_id,
            errors,
            warnings,
        } = scan;

        self.errors.extend(errors.into_iter().map(|message| Finding {
            check_id: check_id.clone(),
            message,
        }));
        self.warnings
            .extend(warnings.into_iter().map(|message| Finding {
                check_id: check_id.clone(),
                message,
            }));
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the sectioned terminal report: summary, enumerated errors and
    /// warnings, final verdict banner.
    pub fn render(&self) -> String {
        let bar = "=".repeat(80);
        let mut lines: Vec<String> = Vec::new();

        lines.push(String::new());
        lines.push(bar.clone());
        lines.push("VALIDATION RESULTS".to_string());
        lines.push(bar.clone());
        lines.push(format!("Total checks: {}", self.total_checks));
        lines.push(format!("Valid checks: {}", self.valid_checks));
        lines.push(format!("Invalid checks: {}", self.invalid_checks));
        lines.push(format!("Errors: {}", self.errors.len()));
        lines.push(format!("Warnings: {}", self.warnings.len()));
        lines.push(String::new());

        if !self.errors.is_empty() {
            lines.push(bar.clone());
            lines.push("ERRORS".to_string());
            lines.push(bar.clone());
            for (i, finding) in self.errors.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, finding));
            }
            lines.push(String::new());
        }

        if !self.warnings.is_empty() {
            lines.push(bar.clone());
            lines.push("WARNINGS".to_string());
            lines.push(bar.clone());
            for (i, finding) in self.warnings.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, finding));
            }
            lines.push(String::new());
        }

        lines.push(bar.clone());
        if self.passed() {
            lines.push("✅ VALIDATION PASSED".to_string());
            lines.push(bar);
            lines.push("All checks are valid and ready for deployment!".to_string());
        } else {
            lines.push("❌ VALIDATION FAILED".to_string());
            lines.push(bar);
            lines.push(format!(
                "Found {} error(s). Please fix them before deployment.",
                self.errors.len()
            ));
        }
        lines.push(String::new());

        lines.join("\n")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scan(check_id: &str, errors: &[&str], warnings: &[&str]) -> RecordScan {
        RecordScan {
            check_id: check_id.to_string(),
            errors: errors.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_absorb_counts_valid_and_invalid() {
        let mut report = ValidationReport::new(3);
        report.absorb(scan("a", &[], &[]));
        report.absorb(scan("b", &["bad field"], &[]));
        report.absorb(scan("c", &[], &["odd field"]));

        assert_eq!(report.total_checks, 3);
        assert_eq!(report.valid_checks, 2);
        assert_eq!(report.invalid_checks, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.errors[0].to_string(), "[b] bad field");
    }

    #[test]
    fn test_warnings_never_fail_a_run() {
        let mut report = ValidationReport::new(1);
        report.absorb(scan("a", &[], &["unknown field"]));
        assert!(report.passed());

        report.absorb(scan("b", &["boom"], &[]));
        assert!(!report.passed());
    }

    #[test]
    fn test_render_sections() {
        let mut report = ValidationReport::new(2);
        report.absorb(scan("a", &[], &[]));
        report.absorb(scan("b", &["bad severity"], &["extra field"]));

        let rendered = report.render();
        assert!(rendered.contains("VALIDATION RESULTS"));
        assert!(rendered.contains("Total checks: 2"));
        assert!(rendered.contains("ERRORS"));
        assert!(rendered.contains("1. [b] bad severity"));
        assert!(rendered.contains("WARNINGS"));
        assert!(rendered.contains("1. [b] extra field"));
        assert!(rendered.contains("❌ VALIDATION FAILED"));
        assert!(rendered.contains("Found 1 error(s)"));
    }

    #[test]
    fn test_render_passed_banner() {
        let mut report = ValidationReport::new(1);
        report.absorb(scan("a", &[], &[]));

        let rendered = report.render();
        assert!(rendered.contains("✅ VALIDATION PASSED"));
        assert!(rendered.contains("ready for deployment"));
        assert!(!rendered.contains("ERRORS"));
        assert!(!rendered.contains("WARNINGS"));
    }
}
