//! Syntax-node model for the analyzed language.
//!
//! The tree is produced by an external parser; this crate only defines the
//! shape it arrives in. Nodes form a closed set of kinds so rules can
//! subscribe by tag and inspect children through ordinary accessors instead
//! of downcasts. The model carries a serde representation (internally tagged
//! by `"kind"`) so a parser in another process can hand trees over as JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tag identifying the kind of a [`SyntaxNode`].
///
/// Rules subscribe to kinds; the engine dispatches on them. The set is
/// closed: an external tree must map onto these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of one compilation unit.
    CompilationUnit,
    /// A class declaration.
    ClassDeclaration,
    /// A property declaration.
    PropertyDeclaration,
    /// A field declaration.
    FieldDeclaration,
    /// A method declaration.
    MethodDeclaration,
    /// A method/function invocation expression.
    Invocation,
    /// A member access expression (`receiver.Member`).
    MemberAccess,
    /// A generic type reference (`Name<T, ...>`).
    GenericName,
    /// A bare identifier expression.
    Identifier,
    /// A literal expression.
    Literal,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CompilationUnit => "compilation_unit",
            Self::ClassDeclaration => "class_declaration",
            Self::PropertyDeclaration => "property_declaration",
            Self::FieldDeclaration => "field_declaration",
            Self::MethodDeclaration => "method_declaration",
            Self::Invocation => "invocation",
            Self::MemberAccess => "member_access",
            Self::GenericName => "generic_name",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
        };
        write!(f, "{name}")
    }
}

/// Source extent of a node within its compilation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the unit.
    #[serde(default)]
    pub offset: usize,
    /// Length of the span in bytes.
    #[serde(default)]
    pub length: usize,
}

impl Span {
    /// Creates a span from line/column information.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this span.
    #[must_use]
    pub fn with_extent(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// Declaration modifiers carried by class members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Publicly accessible.
    Public,
    /// Accessible within the declaring type only.
    Private,
    /// Accessible within the declaring type and subtypes.
    Protected,
    /// Accessible within the assembly.
    Internal,
    /// Static member.
    Static,
    /// Read-only member.
    Readonly,
}

/// Root of one compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Top-level members.
    #[serde(default)]
    pub members: Vec<SyntaxNode>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A class declaration with its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Class name.
    pub identifier: String,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Member declarations.
    #[serde(default)]
    pub members: Vec<SyntaxNode>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A property declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    /// Property name.
    pub identifier: String,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

impl PropertyDeclaration {
    /// Whether the modifier list includes `public`.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers.contains(&Modifier::Public)
    }
}

/// A field declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field name.
    pub identifier: String,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

impl FieldDeclaration {
    /// Whether the modifier list includes `private`.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.modifiers.contains(&Modifier::Private)
    }
}

/// A method declaration with its body statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// Method name.
    pub identifier: String,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Body expressions/statements, in source order.
    #[serde(default)]
    pub body: Vec<SyntaxNode>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A method/function invocation expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// The invoked expression (typically a member access).
    pub callee: Box<SyntaxNode>,
    /// Argument expressions.
    #[serde(default)]
    pub arguments: Vec<SyntaxNode>,
    /// Source extent of the full invocation.
    #[serde(default)]
    pub span: Span,
}

/// A member access expression (`receiver.Member`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAccess {
    /// The receiver expression.
    pub receiver: Box<SyntaxNode>,
    /// Accessed member name.
    pub member: String,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A generic type reference (`Name<T, ...>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericName {
    /// Base type name, without type arguments.
    pub identifier: String,
    /// Type argument names.
    #[serde(default)]
    pub type_arguments: Vec<String>,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A bare identifier expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    /// Identifier text.
    pub text: String,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// A literal expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    /// Literal text as written in source.
    pub text: String,
    /// Source extent.
    #[serde(default)]
    pub span: Span,
}

/// One node of an externally parsed syntax tree.
///
/// The engine borrows nodes for the duration of a pass and never mutates
/// or outlives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    /// Root of one compilation unit.
    CompilationUnit(CompilationUnit),
    /// A class declaration.
    ClassDeclaration(ClassDeclaration),
    /// A property declaration.
    PropertyDeclaration(PropertyDeclaration),
    /// A field declaration.
    FieldDeclaration(FieldDeclaration),
    /// A method declaration.
    MethodDeclaration(MethodDeclaration),
    /// An invocation expression.
    Invocation(Invocation),
    /// A member access expression.
    MemberAccess(MemberAccess),
    /// A generic type reference.
    GenericName(GenericName),
    /// A bare identifier expression.
    Identifier(Identifier),
    /// A literal expression.
    Literal(Literal),
}

impl SyntaxNode {
    /// Returns this node's kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::CompilationUnit(_) => NodeKind::CompilationUnit,
            Self::ClassDeclaration(_) => NodeKind::ClassDeclaration,
            Self::PropertyDeclaration(_) => NodeKind::PropertyDeclaration,
            Self::FieldDeclaration(_) => NodeKind::FieldDeclaration,
            Self::MethodDeclaration(_) => NodeKind::MethodDeclaration,
            Self::Invocation(_) => NodeKind::Invocation,
            Self::MemberAccess(_) => NodeKind::MemberAccess,
            Self::GenericName(_) => NodeKind::GenericName,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Literal(_) => NodeKind::Literal,
        }
    }

    /// Returns this node's source extent.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::CompilationUnit(n) => n.span,
            Self::ClassDeclaration(n) => n.span,
            Self::PropertyDeclaration(n) => n.span,
            Self::FieldDeclaration(n) => n.span,
            Self::MethodDeclaration(n) => n.span,
            Self::Invocation(n) => n.span,
            Self::MemberAccess(n) => n.span,
            Self::GenericName(n) => n.span,
            Self::Identifier(n) => n.span,
            Self::Literal(n) => n.span,
        }
    }

    /// Returns this node's direct children, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            Self::CompilationUnit(n) => n.members.iter().collect(),
            Self::ClassDeclaration(n) => n.members.iter().collect(),
            Self::MethodDeclaration(n) => n.body.iter().collect(),
            Self::Invocation(n) => {
                let mut children = vec![n.callee.as_ref()];
                children.extend(n.arguments.iter());
                children
            }
            Self::MemberAccess(n) => vec![n.receiver.as_ref()],
            Self::PropertyDeclaration(_)
            | Self::FieldDeclaration(_)
            | Self::GenericName(_)
            | Self::Identifier(_)
            | Self::Literal(_) => Vec::new(),
        }
    }

    /// Returns the property declaration if this node is one.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyDeclaration> {
        match self {
            Self::PropertyDeclaration(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the field declaration if this node is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldDeclaration> {
        match self {
            Self::FieldDeclaration(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the invocation if this node is one.
    #[must_use]
    pub fn as_invocation(&self) -> Option<&Invocation> {
        match self {
            Self::Invocation(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the member access if this node is one.
    #[must_use]
    pub fn as_member_access(&self) -> Option<&MemberAccess> {
        match self {
            Self::MemberAccess(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the generic name if this node is one.
    #[must_use]
    pub fn as_generic_name(&self) -> Option<&GenericName> {
        match self {
            Self::GenericName(n) => Some(n),
            _ => None,
        }
    }
}

/// One compilation unit ready for analysis: the original source path plus
/// the parsed tree. This is the JSON interchange unit between an external
/// parser and the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTree {
    /// Path of the source file the tree was parsed from.
    pub file: PathBuf,
    /// Root node of the tree.
    pub root: SyntaxNode,
}

impl SourceTree {
    /// Creates a source tree.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, root: SyntaxNode) -> Self {
        Self {
            file: file.into(),
            root,
        }
    }

    /// Deserializes a source tree from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a valid tree.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invocation() -> SyntaxNode {
        SyntaxNode::Invocation(Invocation {
            callee: Box::new(SyntaxNode::MemberAccess(MemberAccess {
                receiver: Box::new(SyntaxNode::Identifier(Identifier {
                    text: "builder".to_string(),
                    span: Span::new(3, 9),
                })),
                member: "Build".to_string(),
                span: Span::new(3, 9),
            })),
            arguments: vec![SyntaxNode::Literal(Literal {
                text: "1".to_string(),
                span: Span::new(3, 23),
            })],
            span: Span::new(3, 9),
        })
    }

    #[test]
    fn kind_tags_match_variants() {
        let node = sample_invocation();
        assert_eq!(node.kind(), NodeKind::Invocation);
        assert_eq!(node.children()[0].kind(), NodeKind::MemberAccess);
    }

    #[test]
    fn children_preserve_source_order() {
        let node = sample_invocation();
        let kinds: Vec<NodeKind> = node.children().iter().map(|c| c.kind()).collect();
        // Callee first, then arguments
        assert_eq!(kinds, vec![NodeKind::MemberAccess, NodeKind::Literal]);
    }

    #[test]
    fn leaf_nodes_have_no_children() {
        let leaf = SyntaxNode::Identifier(Identifier {
            text: "x".to_string(),
            span: Span::default(),
        });
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn property_is_public() {
        let property = PropertyDeclaration {
            identifier: "Name".to_string(),
            modifiers: vec![Modifier::Public, Modifier::Static],
            span: Span::default(),
        };
        assert!(property.is_public());

        let internal = PropertyDeclaration {
            identifier: "name".to_string(),
            modifiers: vec![Modifier::Internal],
            span: Span::default(),
        };
        assert!(!internal.is_public());
    }

    #[test]
    fn json_round_trip() {
        let tree = SourceTree::new("Program.cs", sample_invocation());
        let json = serde_json::to_string(&tree).expect("tree should serialize");
        let parsed = SourceTree::from_json(&json).expect("tree should deserialize");
        assert_eq!(parsed.file, PathBuf::from("Program.cs"));
        assert_eq!(parsed.root.kind(), NodeKind::Invocation);
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{
            "file": "File.cs",
            "root": {
                "kind": "property_declaration",
                "identifier": "myProperty",
                "modifiers": ["public"],
                "span": { "line": 4, "column": 21 }
            }
        }"#;
        let tree = SourceTree::from_json(json).expect("tagged JSON should parse");
        let property = tree.root.as_property().expect("root should be a property");
        assert_eq!(property.identifier, "myProperty");
        assert!(property.is_public());
        assert_eq!(property.span.line, 4);
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"{ "file": "File.cs", "root": { "kind": "using_directive" } }"#;
        assert!(SourceTree::from_json(json).is_err());
    }
}
