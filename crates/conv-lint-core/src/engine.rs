//! Rule engine: kind-keyed registration table and per-node dispatch.

use crate::config::Config;
use crate::rule::{Rule, RuleBox};
use crate::sink::DiagnosticSink;
use crate::syntax::{NodeKind, SourceTree, SyntaxNode};
use crate::types::{Finding, Location, Severity};

use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Builder for configuring an [`Engine`].
///
/// Registration is a one-time setup step: the builder is consumed by
/// [`build`](EngineBuilder::build), after which no rule can be added or
/// removed. Registration order is preserved and determines per-node
/// delivery order among findings.
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers a sequence of boxed rules, preserving order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    ///
    /// Disabled rules are never registered; severity overrides are resolved
    /// once here and applied at emission time.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the immutable engine.
    #[must_use]
    pub fn build(self) -> Engine {
        let config = self.config.unwrap_or_default();

        let mut rules: Vec<RuleBox> = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            rules.push(rule);
        }

        let severities: Vec<Severity> = rules
            .iter()
            .map(|r| {
                config
                    .rule_severity(r.name())
                    .unwrap_or_else(|| r.default_severity())
            })
            .collect();

        let mut by_kind: HashMap<NodeKind, Vec<usize>> = HashMap::new();
        for (index, rule) in rules.iter().enumerate() {
            for &kind in rule.kinds() {
                by_kind.entry(kind).or_default().push(index);
            }
        }

        debug!(
            "Engine built with {} rules over {} node kinds",
            rules.len(),
            by_kind.len()
        );

        Engine {
            rules,
            severities,
            by_kind,
        }
    }
}

/// The rule engine.
///
/// Holds the read-only mapping from node kind to the ordered sequence of
/// subscribed rules. The table is built once and is safe to share across
/// concurrent passes over different trees: rules are `Send + Sync` and
/// stateless, and nothing here is mutated after [`EngineBuilder::build`].
pub struct Engine {
    rules: Vec<RuleBox>,
    /// Effective severity per rule, resolved at build time.
    severities: Vec<Severity>,
    /// Node kind -> rule indices, in registration order.
    by_kind: HashMap<NodeKind, Vec<usize>>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluates every subscribed rule against one node.
    ///
    /// This is the per-node entry point for an external tree-walk. Each
    /// matching rule emits one finding at the node's location; rules are
    /// independent, so one match never suppresses the remaining rules on
    /// the same node. A kind with no registered rules costs no work.
    pub fn check_node(&self, file: &Path, node: &SyntaxNode, sink: &mut dyn DiagnosticSink) {
        let Some(indices) = self.by_kind.get(&node.kind()) else {
            return;
        };

        for &index in indices {
            let rule = &self.rules[index];
            debug_assert!(
                rule.kinds().contains(&node.kind()),
                "registration table routed {} to unsubscribed rule {}",
                node.kind(),
                rule.name()
            );

            if rule.matches(node) {
                let location = Location::from_span(file.to_path_buf(), node.span());
                let mut finding = Finding::new(
                    rule.code(),
                    rule.name(),
                    self.severities[index],
                    location,
                    rule.message(),
                );
                if let Some(help) = rule.help() {
                    finding = finding.with_help(help);
                }
                sink.report(finding);
            }
        }
    }

    /// Runs a full preorder pass over one tree, streaming findings to the
    /// sink as they are produced.
    ///
    /// Delivery order equals visitation order; per-node order equals rule
    /// registration order.
    pub fn run(&self, tree: &SourceTree, sink: &mut dyn DiagnosticSink) {
        self.walk(&tree.file, &tree.root, sink);
    }

    fn walk(&self, file: &Path, node: &SyntaxNode, sink: &mut dyn DiagnosticSink) {
        self.check_node(file, node, sink);
        for child in node.children() {
            self.walk(file, child, sink);
        }
    }
}
