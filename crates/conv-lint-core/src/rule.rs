//! Rule trait for defining convention checks.

use crate::syntax::{NodeKind, SyntaxNode};
use crate::types::Severity;

/// A convention rule: a stateless predicate over subscribed node kinds,
/// paired with reporting metadata.
///
/// Rules are constructed once at engine build time and reused for every
/// node of the subscribed kinds across a whole run; they carry no per-run
/// or per-node mutable state. The predicate is a pure query: it may read
/// the node and its fixed child structure, never mutate the tree, and must
/// return `false` (not panic) for any structurally different node.
///
/// # Example
///
/// ```ignore
/// use conv_lint_core::{NodeKind, Rule, Severity, SyntaxNode};
///
/// pub struct NoMagicLiterals;
///
/// impl Rule for NoMagicLiterals {
///     fn name(&self) -> &'static str { "no-magic-literals" }
///     fn code(&self) -> &'static str { "CL001" }
///     fn message(&self) -> &'static str { "Magic literal" }
///     fn kinds(&self) -> &'static [NodeKind] { &[NodeKind::Literal] }
///
///     fn matches(&self, node: &SyntaxNode) -> bool {
///         matches!(node, SyntaxNode::Literal(l) if l.text != "0")
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-empty-add-chain").
    fn name(&self) -> &'static str;

    /// Returns the stable rule code (e.g., "NMCVPUBP").
    fn code(&self) -> &'static str;

    /// Returns the rule category (e.g., "Naming Convention").
    fn category(&self) -> &'static str {
        ""
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the message attached to findings from this rule.
    fn message(&self) -> &'static str;

    /// Returns an optional fix hint attached to findings from this rule.
    fn help(&self) -> Option<&'static str> {
        None
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the node kinds this rule subscribes to.
    ///
    /// The predicate is only ever invoked for nodes of these kinds; the
    /// registration table is the sole invocation path.
    fn kinds(&self) -> &'static [NodeKind];

    /// Decides whether the node violates this rule.
    ///
    /// Must be pure and side-effect free. An unexpected node shape is a
    /// no-match outcome, never a panic.
    fn matches(&self, node: &SyntaxNode) -> bool;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
