//! Core types for findings and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for findings.
///
/// Ordered: `Hidden < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Produced but not surfaced to users by default.
    Hidden,
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path of the source file the tree was parsed from.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the compilation unit (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a location from a node span within the given file.
    #[must_use]
    pub fn from_span(file: PathBuf, span: crate::syntax::Span) -> Self {
        Self {
            file,
            line: span.line,
            column: span.column,
            offset: span.offset,
            length: span.length,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A rule violation found during analysis.
///
/// Findings are value objects: created at the matched node, handed to the
/// sink, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Rule code (e.g., "NMCVPUBP").
    pub code: String,
    /// Rule name (e.g., "pascal-case-public-property").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Location of the matched node.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional hint on how to fix the finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            help: None,
        }
    }

    /// Adds a fix hint to this finding.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(help) = &self.help {
            let _ = writeln!(output, "  = help: {help}");
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Finding to a miette Diagnostic for rich error display.
#[allow(dead_code)] // Public API for miette integration
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Finding> for FindingDiagnostic {
    fn from(f: &Finding) -> Self {
        Self {
            message: format!("[{}] {}", f.code, f.message),
            help: f.help.clone(),
            span: SourceSpan::from((f.location.offset, f.location.length)),
            label_message: f.rule.clone(),
        }
    }
}

/// Result of running analysis over one or more trees.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All findings, in delivery order.
    pub findings: Vec<Finding>,
    /// Number of trees checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Returns findings filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Counts findings by user-visible severity (errors, warnings, infos).
    ///
    /// Hidden findings are excluded from the counts.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        let infos = self
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Checks if any findings meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_findings_at(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= severity)
    }

    /// Prints a summary report to stdout.
    pub fn print_report(&self) {
        let (errors, warnings, infos) = self.count_by_severity();

        for finding in &self.findings {
            println!("{}", finding.format());
        }

        println!(
            "\nFound {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        );
    }

    /// Adds findings from another result.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(severity: Severity) -> Finding {
        Finding::new(
            "NMCVPUBP",
            "pascal-case-public-property",
            severity,
            Location::new(PathBuf::from("File.cs"), 4, 21),
            "This property name does not satisfy the convention",
        )
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Hidden < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn finding_format_includes_help() {
        let f = make_finding(Severity::Warning).with_help("Rename to PascalCase");
        let formatted = f.format();
        assert!(formatted.contains("= help: Rename to PascalCase"));
    }

    #[test]
    fn finding_format_omits_help_when_none() {
        let f = make_finding(Severity::Warning);
        assert!(!f.format().contains("help:"));
    }

    #[test]
    fn finding_display_is_compact() {
        let f = make_finding(Severity::Warning);
        let display = format!("{f}");
        assert!(display.starts_with("File.cs:4:21: warning [NMCVPUBP]"));
    }

    #[test]
    fn has_findings_at_respects_threshold() {
        let mut result = LintResult::new();
        result.findings.push(make_finding(Severity::Warning));
        assert!(!result.has_findings_at(Severity::Error));
        assert!(result.has_findings_at(Severity::Warning));
        assert!(result.has_findings_at(Severity::Info));
    }

    #[test]
    fn count_by_severity_excludes_hidden() {
        let mut result = LintResult::new();
        result.findings.push(make_finding(Severity::Warning));
        result.findings.push(make_finding(Severity::Hidden));
        assert_eq!(result.count_by_severity(), (0, 1, 0));
    }

    #[test]
    fn extend_merges_counts() {
        let mut a = LintResult::new();
        a.files_checked = 2;
        a.findings.push(make_finding(Severity::Info));

        let mut b = LintResult::new();
        b.files_checked = 1;
        b.findings.push(make_finding(Severity::Error));

        a.extend(b);
        assert_eq!(a.files_checked, 3);
        assert_eq!(a.findings.len(), 2);
        assert!(a.has_errors());
    }
}
