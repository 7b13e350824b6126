//! # conv-lint-core
//!
//! Core framework for syntax convention linting over externally parsed
//! trees.
//!
//! This crate provides the foundational types for building convention
//! checkers hosted in a compiler's analysis pipeline. It includes:
//!
//! - [`SyntaxNode`] and [`NodeKind`]: the closed node model trees arrive in
//! - [`Rule`] trait for kind-subscribed, stateless predicates
//! - [`Engine`] for per-node dispatch through the registration table
//! - [`DiagnosticSink`] for streaming [`Finding`]s to the host
//! - [`Analyzer`] for standalone use over serialized tree files
//!
//! ## Example
//!
//! ```ignore
//! use conv_lint_core::{Engine, Finding, SourceTree};
//!
//! let engine = Engine::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let mut findings: Vec<Finding> = Vec::new();
//! engine.run(&tree, &mut findings);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod engine;
mod rule;
mod sink;
mod syntax;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use engine::{Engine, EngineBuilder};
pub use rule::{Rule, RuleBox};
pub use sink::DiagnosticSink;
pub use syntax::{
    ClassDeclaration, CompilationUnit, FieldDeclaration, GenericName, Identifier, Invocation,
    Literal, MemberAccess, MethodDeclaration, Modifier, NodeKind, PropertyDeclaration, SourceTree,
    Span, SyntaxNode,
};
pub use types::{Finding, FindingDiagnostic, LintResult, Location, Severity};
