//! Rule discouraging element-by-element construction of immutable arrays.
//!
//! # Rationale
//!
//! `ImmutableArray<T>.Empty.Add(x)` allocates a fresh array per element.
//! The bulk constructors (`Create`, `CreateRange`, builders) size the
//! backing store once.
//!
//! # Detected Patterns
//!
//! - `ImmutableArray<int>.Empty.Add(1)`
//!
//! # Good Patterns
//!
//! - `ImmutableArray.Create(1)`
//! - `ImmutableArray<int>.Empty.AddRange(items)` (different member, out of scope)
//!
//! The match is strict: exactly one argument, `Add` on `Empty` on a
//! one-type-argument `ImmutableArray` generic reference. Any deviation is a
//! silent skip. The finding is reported at the full invocation's location.

use conv_lint_core::{NodeKind, Rule, Severity, SyntaxNode};

/// Rule code for no-empty-add-chain.
pub const CODE: &str = "BadWayImmutableArray";

/// Rule name for no-empty-add-chain.
pub const NAME: &str = "no-empty-add-chain";

/// Flags immutable arrays built by chaining `Add` off the `Empty` singleton.
#[derive(Debug, Clone)]
pub struct NoEmptyAddChain {
    /// Severity level.
    pub severity: Severity,
}

impl Default for NoEmptyAddChain {
    fn default() -> Self {
        Self::new()
    }
}

impl NoEmptyAddChain {
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

impl Rule for NoEmptyAddChain {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> &'static str {
        "Immutable arrays"
    }

    fn description(&self) -> &'static str {
        "Forbids building an immutable array from Empty.Add chains"
    }

    fn message(&self) -> &'static str {
        "Bad way of creating immutable array"
    }

    fn help(&self) -> Option<&'static str> {
        Some("Use a bulk constructor such as ImmutableArray.Create(...)")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Invocation]
    }

    fn matches(&self, node: &SyntaxNode) -> bool {
        let Some(invocation) = node.as_invocation() else {
            return false;
        };

        if invocation.arguments.len() != 1 {
            return false;
        }

        let Some(add_access) = invocation.callee.as_member_access() else {
            return false;
        };
        if add_access.member != "Add" {
            return false;
        }

        let Some(empty_access) = add_access.receiver.as_member_access() else {
            return false;
        };
        if empty_access.member != "Empty" {
            return false;
        }

        let Some(generic) = empty_access.receiver.as_generic_name() else {
            return false;
        };
        generic.identifier == "ImmutableArray" && generic.type_arguments.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conv_lint_core::{
        GenericName, Identifier, Invocation, Literal, MemberAccess, Span, SyntaxNode,
    };

    /// `ImmutableArray<int>.Empty.<member>(<args>)`
    fn chain(base: &str, type_args: Vec<&str>, member: &str, args: usize) -> SyntaxNode {
        SyntaxNode::Invocation(Invocation {
            callee: Box::new(SyntaxNode::MemberAccess(MemberAccess {
                receiver: Box::new(SyntaxNode::MemberAccess(MemberAccess {
                    receiver: Box::new(SyntaxNode::GenericName(GenericName {
                        identifier: base.to_string(),
                        type_arguments: type_args.into_iter().map(String::from).collect(),
                        span: Span::new(8, 41),
                    })),
                    member: "Empty".to_string(),
                    span: Span::new(8, 41),
                })),
                member: member.to_string(),
                span: Span::new(8, 41),
            })),
            arguments: (0..args)
                .map(|i| {
                    SyntaxNode::Literal(Literal {
                        text: i.to_string(),
                        span: Span::new(8, 65),
                    })
                })
                .collect(),
            span: Span::new(8, 41),
        })
    }

    #[test]
    fn flags_exact_empty_add_chain() {
        let rule = NoEmptyAddChain::new();
        assert!(rule.matches(&chain("ImmutableArray", vec!["int"], "Add", 1)));
    }

    #[test]
    fn skips_wrong_member_name() {
        let rule = NoEmptyAddChain::new();
        assert!(!rule.matches(&chain("ImmutableArray", vec!["int"], "AddRange", 1)));
    }

    #[test]
    fn skips_wrong_argument_count() {
        let rule = NoEmptyAddChain::new();
        assert!(!rule.matches(&chain("ImmutableArray", vec!["int"], "Add", 0)));
        assert!(!rule.matches(&chain("ImmutableArray", vec!["int"], "Add", 2)));
    }

    #[test]
    fn skips_wrong_type_argument_count() {
        let rule = NoEmptyAddChain::new();
        assert!(!rule.matches(&chain("ImmutableArray", vec![], "Add", 1)));
        assert!(!rule.matches(&chain("ImmutableArray", vec!["int", "string"], "Add", 1)));
    }

    #[test]
    fn skips_other_generic_types() {
        let rule = NoEmptyAddChain::new();
        assert!(!rule.matches(&chain("ImmutableList", vec!["int"], "Add", 1)));
    }

    #[test]
    fn skips_non_generic_receiver() {
        // someArray.Empty.Add(1) where the base is a plain identifier
        let rule = NoEmptyAddChain::new();
        let node = SyntaxNode::Invocation(Invocation {
            callee: Box::new(SyntaxNode::MemberAccess(MemberAccess {
                receiver: Box::new(SyntaxNode::MemberAccess(MemberAccess {
                    receiver: Box::new(SyntaxNode::Identifier(Identifier {
                        text: "someArray".to_string(),
                        span: Span::default(),
                    })),
                    member: "Empty".to_string(),
                    span: Span::default(),
                })),
                member: "Add".to_string(),
                span: Span::default(),
            })),
            arguments: vec![SyntaxNode::Literal(Literal {
                text: "1".to_string(),
                span: Span::default(),
            })],
            span: Span::default(),
        });
        assert!(!rule.matches(&node));
    }

    #[test]
    fn skips_callee_that_is_not_a_member_access() {
        let rule = NoEmptyAddChain::new();
        let node = SyntaxNode::Invocation(Invocation {
            callee: Box::new(SyntaxNode::Identifier(Identifier {
                text: "Add".to_string(),
                span: Span::default(),
            })),
            arguments: vec![SyntaxNode::Literal(Literal {
                text: "1".to_string(),
                span: Span::default(),
            })],
            span: Span::default(),
        });
        assert!(!rule.matches(&node));
    }
}
