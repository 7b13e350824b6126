//! Rule requiring private field names to carry an underscore prefix.
//!
//! # Detected Patterns
//!
//! - `private string name;`
//!
//! # Good Patterns
//!
//! - `private string _name;`
//! - `public string Name;` (non-private, out of scope)

use conv_lint_core::{NodeKind, Rule, Severity, SyntaxNode};

/// Rule code for underscore-private-field.
pub const CODE: &str = "NMCVPRVM";

/// Rule name for underscore-private-field.
pub const NAME: &str = "underscore-private-field";

/// Requires private field names to start with an underscore.
#[derive(Debug, Clone)]
pub struct UnderscorePrivateField {
    /// Severity level.
    pub severity: Severity,
}

impl Default for UnderscorePrivateField {
    fn default() -> Self {
        Self::new()
    }
}

impl UnderscorePrivateField {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for UnderscorePrivateField {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> &'static str {
        "Naming Convention"
    }

    fn description(&self) -> &'static str {
        "Private member symbols should be prefixed with '_', e.g. _myField"
    }

    fn message(&self) -> &'static str {
        "This private member name does not satisfy the convention"
    }

    fn help(&self) -> Option<&'static str> {
        Some("Prefix the field name with '_', e.g. _myField")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::FieldDeclaration]
    }

    fn matches(&self, node: &SyntaxNode) -> bool {
        let Some(field) = node.as_field() else {
            return false;
        };

        if !field.is_private() {
            return false;
        }

        !field.identifier.starts_with('_')
    }
}
