//! Integration test: engine contracts end-to-end via the Analyzer.
//!
//! Builds trees in memory, serializes them to a temp directory, and drives
//! the full discovery → deserialize → dispatch → sink pipeline.

use conv_lint_core::{
    Analyzer, Config, Engine, Finding, Identifier, Invocation, Literal, MemberAccess,
    MethodDeclaration, NodeKind, Rule, Severity, SourceTree, Span, SyntaxNode,
};
use std::path::Path;

struct FlagCallsTo {
    member: &'static str,
    code: &'static str,
}

impl Rule for FlagCallsTo {
    fn name(&self) -> &'static str {
        "flag-calls"
    }
    fn code(&self) -> &'static str {
        self.code
    }
    fn message(&self) -> &'static str {
        "call flagged"
    }
    fn kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Invocation]
    }
    fn matches(&self, node: &SyntaxNode) -> bool {
        node.as_invocation()
            .and_then(|inv| inv.callee.as_member_access())
            .is_some_and(|access| access.member == self.member)
    }
}

fn call(member: &str, line: usize) -> SyntaxNode {
    SyntaxNode::Invocation(Invocation {
        callee: Box::new(SyntaxNode::MemberAccess(MemberAccess {
            receiver: Box::new(SyntaxNode::Identifier(Identifier {
                text: "receiver".to_string(),
                span: Span::new(line, 17),
            })),
            member: member.to_string(),
            span: Span::new(line, 17),
        })),
        arguments: vec![SyntaxNode::Literal(Literal {
            text: "1".to_string(),
            span: Span::new(line, 30),
        })],
        span: Span::new(line, 17),
    })
}

fn sample_tree() -> SourceTree {
    SourceTree::new(
        "Program.cs",
        SyntaxNode::MethodDeclaration(MethodDeclaration {
            identifier: "Main".to_string(),
            modifiers: vec![],
            body: vec![call("Add", 3), call("Remove", 4), call("Add", 5)],
            span: Span::new(2, 9),
        }),
    )
}

fn codes(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}

#[test]
fn findings_stream_in_visitation_order() {
    let engine = Engine::builder()
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT001",
        })
        .build();

    let mut findings: Vec<Finding> = Vec::new();
    engine.run(&sample_tree(), &mut findings);

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].location.line, 3);
    assert_eq!(findings[1].location.line, 5);
}

#[test]
fn rules_on_the_same_node_never_suppress_each_other() {
    // Two rules subscribed to the same kind, both matching the same node.
    let engine = Engine::builder()
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT001",
        })
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT002",
        })
        .build();

    let mut findings: Vec<Finding> = Vec::new();
    engine.check_node(Path::new("Program.cs"), &call("Add", 3), &mut findings);

    assert_eq!(codes(&findings), vec!["IT001", "IT002"]);
}

#[test]
fn two_runs_yield_identical_sequences() {
    let engine = Engine::builder()
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT001",
        })
        .rule(FlagCallsTo {
            member: "Remove",
            code: "IT002",
        })
        .build();

    let tree = sample_tree();
    let mut first: Vec<Finding> = Vec::new();
    engine.run(&tree, &mut first);
    let mut second: Vec<Finding> = Vec::new();
    engine.run(&tree, &mut second);

    assert_eq!(codes(&first), codes(&second));
    assert_eq!(codes(&first), vec!["IT001", "IT002", "IT001"]);
}

#[test]
fn analyzer_round_trips_serialized_trees() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let json = serde_json::to_string_pretty(&sample_tree()).expect("tree should serialize");
    std::fs::write(dir.path().join("program.json"), json).expect("write should succeed");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT001",
        })
        .build()
        .expect("analyzer should build");

    let result = analyzer.analyze().expect("analysis should succeed");
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.findings.len(), 2);
    assert_eq!(
        result.findings[0].location.file,
        std::path::PathBuf::from("Program.cs")
    );
}

#[test]
fn config_can_disable_and_reclassify_rules() {
    let config = Config::parse(
        r#"
[rules.flag-calls]
severity = "error"
"#,
    )
    .expect("config should parse");

    let engine = Engine::builder()
        .rule(FlagCallsTo {
            member: "Add",
            code: "IT001",
        })
        .config(config)
        .build();

    let mut findings: Vec<Finding> = Vec::new();
    engine.check_node(Path::new("Program.cs"), &call("Add", 3), &mut findings);
    assert_eq!(findings[0].severity, Severity::Error);
}
