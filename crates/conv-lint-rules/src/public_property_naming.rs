//! Rule requiring public property names to be PascalCase.
//!
//! # Rationale
//!
//! Public properties are part of a type's surface and follow the
//! PascalCase convention (`MyProperty`). The check is a prefix test: the
//! first character must be upper-case and the second lower-case.
//!
//! # Detected Patterns
//!
//! - `public string myProperty { get; set; }`
//! - `public string URL { get; set; }` (all-caps prefix)
//!
//! # Good Patterns
//!
//! - `public string MyProperty { get; set; }`
//! - `internal string myProperty { get; set; }` (non-public, out of scope)
//!
//! Identifiers shorter than two characters cannot satisfy the prefix test
//! and are reported.

use conv_lint_core::{NodeKind, Rule, Severity, SyntaxNode};

/// Rule code for pascal-case-public-property.
pub const CODE: &str = "NMCVPUBP";

/// Rule name for pascal-case-public-property.
pub const NAME: &str = "pascal-case-public-property";

/// Requires public property names to be PascalCase.
#[derive(Debug, Clone)]
pub struct PascalCasePublicProperty {
    /// Severity level.
    pub severity: Severity,
}

impl Default for PascalCasePublicProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl PascalCasePublicProperty {
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

impl Rule for PascalCasePublicProperty {
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
        "Public property symbols should be in PascalCase, e.g. MyProperty"
    }

    fn message(&self) -> &'static str {
        "This property name does not satisfy the convention"
    }

    fn help(&self) -> Option<&'static str> {
        Some("Rename the property to PascalCase, e.g. MyProperty")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::PropertyDeclaration]
    }

    fn matches(&self, node: &SyntaxNode) -> bool {
        let Some(property) = node.as_property() else {
            return false;
        };

        if !property.is_public() {
            return false;
        }

        !has_pascal_prefix(&property.identifier)
    }
}

/// Upper-case first character followed by a lower-case second character.
fn has_pascal_prefix(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first.is_uppercase() && second.is_lowercase(),
        _ => false,
    }
}
