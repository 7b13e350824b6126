//! Diagnostic sink abstraction.
//!
//! The engine streams findings one at a time as they are produced; it keeps
//! no backlog and never batches, deduplicates, or reorders. Hosted use hands
//! findings to the compiler's diagnostic collection; standalone use collects
//! them into a [`LintResult`].

use crate::types::{Finding, LintResult};

/// Receiver for findings produced during an analysis pass.
pub trait DiagnosticSink {
    /// Called once per finding, in delivery order.
    fn report(&mut self, finding: Finding);
}

impl DiagnosticSink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

impl DiagnosticSink for LintResult {
    fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}
