//! Abstract Syntax Tree definitions
//!
//! Every element of the tree is a [`Node`]: a kind discriminator, an owned,
//! ordered child list and, for expressions, a type slot. The constructors
//! are the only way to build a node and they enforce the shape of each
//! kind (child count and child family), so a malformed node is a bug in
//! the caller and panics immediately.
//!
//! Literal leaves are typed at construction. Every other expression starts
//! untyped and receives its type from
//! [`resolve_types`](crate::semantic::resolve_types).

pub mod dump;
pub mod ops;

pub use dump::{parse_dump, DumpError, DumpTree, Names};
pub use ops::{BinaryOp, UnaryOp};

use crate::types::Type;
use scc_common::{NameRef, ScopeId};
use serde::Serialize;

/// What a node is, plus its inline payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    /// Integer literal
    Integer(i64),

    /// Floating point literal
    Real(f64),

    /// Character literal
    Char(u8),

    /// String literal, stored as an index into the string table
    String(usize),

    /// Reference to a declared name
    Variable(NameRef),

    /// Unary operation: one operand
    Unary(UnaryOp),

    /// Binary operation: left, right
    Binary(BinaryOp),

    /// Function call: callee, argument list
    Call,

    /// Argument list of a call
    Exprs,

    /// If statement: condition, body
    If,

    /// While loop: condition, body
    While,

    /// Do-while loop: condition, body
    DoWhile,

    /// Expression evaluated for its side effects
    ExpressionStmt,

    /// Compound statement, optionally tagged with the scope it opens
    Block(Option<ScopeId>),

    /// Declared name, with its initializer as the only child if present
    Declaration(NameRef),

    /// Function definition: body block
    FunctionDefinition(NameRef),

    /// Root of a translation unit
    Program,
}

/// Broad syntactic family of a node, used to validate children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFamily {
    Expression,
    ArgumentList,
    Statement,
    Declaration,
    Function,
    Program,
}

impl NodeKind {
    pub fn family(&self) -> NodeFamily {
        match self {
            NodeKind::Integer(_)
            | NodeKind::Real(_)
            | NodeKind::Char(_)
            | NodeKind::String(_)
            | NodeKind::Variable(_)
            | NodeKind::Unary(_)
            | NodeKind::Binary(_)
            | NodeKind::Call => NodeFamily::Expression,
            NodeKind::Exprs => NodeFamily::ArgumentList,
            NodeKind::If
            | NodeKind::While
            | NodeKind::DoWhile
            | NodeKind::ExpressionStmt
            | NodeKind::Block(_) => NodeFamily::Statement,
            NodeKind::Declaration(_) => NodeFamily::Declaration,
            NodeKind::FunctionDefinition(_) => NodeFamily::Function,
            NodeKind::Program => NodeFamily::Program,
        }
    }

    /// Constant label identifying the syntactic class
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Integer(_) => "Integer",
            NodeKind::Real(_) => "Real",
            NodeKind::Char(_) => "Char",
            NodeKind::String(_) => "String",
            NodeKind::Variable(_) => "Var",
            NodeKind::Unary(op) => op.label(),
            NodeKind::Binary(op) => op.label(),
            NodeKind::Call => "\"f(x)\"",
            NodeKind::Exprs => "",
            NodeKind::If => "IfStmt",
            NodeKind::While => "WhileStmt",
            NodeKind::DoWhile => "DoWhileStmt",
            NodeKind::ExpressionStmt => "ExpressionStmt",
            NodeKind::Block(_) => "Block",
            NodeKind::Declaration(_) => "Declaration",
            NodeKind::FunctionDefinition(_) => "FunctionDefinition",
            NodeKind::Program => "Program",
        }
    }
}

/// A node of the syntax tree. Owns its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<Node>,
    pub(crate) ty: Option<Type>,
}

impl Node {
    fn leaf(kind: NodeKind, ty: Option<Type>) -> Self {
        Self { kind, children: Vec::new(), ty }
    }

    fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children, ty: None }
    }

    pub fn integer(value: i64) -> Self {
        Self::leaf(NodeKind::Integer(value), Some(Type::int()))
    }

    pub fn real(value: f64) -> Self {
        Self::leaf(NodeKind::Real(value), Some(Type::real()))
    }

    pub fn char(value: u8) -> Self {
        Self::leaf(NodeKind::Char(value), Some(Type::char()))
    }

    pub fn string(index: usize) -> Self {
        Self::leaf(NodeKind::String(index), Some(Type::pointer_to(Type::char())))
    }

    pub fn variable(name: NameRef) -> Self {
        Self::leaf(NodeKind::Variable(name), None)
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        expect_family(&operand, NodeFamily::Expression, op.label());
        Self::with_children(NodeKind::Unary(op), vec![operand])
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        expect_family(&left, NodeFamily::Expression, op.label());
        expect_family(&right, NodeFamily::Expression, op.label());
        Self::with_children(NodeKind::Binary(op), vec![left, right])
    }

    /// Argument list for a call
    pub fn exprs(args: Vec<Node>) -> Self {
        for arg in &args {
            expect_family(arg, NodeFamily::Expression, "argument list");
        }
        Self::with_children(NodeKind::Exprs, args)
    }

    pub fn call(callee: Node, args: Node) -> Self {
        expect_family(&callee, NodeFamily::Expression, "call");
        expect_family(&args, NodeFamily::ArgumentList, "call");
        Self::with_children(NodeKind::Call, vec![callee, args])
    }

    pub fn if_stmt(condition: Node, body: Node) -> Self {
        Self::conditional(NodeKind::If, condition, body)
    }

    pub fn while_stmt(condition: Node, body: Node) -> Self {
        Self::conditional(NodeKind::While, condition, body)
    }

    pub fn do_while_stmt(condition: Node, body: Node) -> Self {
        Self::conditional(NodeKind::DoWhile, condition, body)
    }

    fn conditional(kind: NodeKind, condition: Node, body: Node) -> Self {
        expect_family(&condition, NodeFamily::Expression, kind.label());
        expect_statement(&body, kind.label());
        Self::with_children(kind, vec![condition, body])
    }

    pub fn expression_stmt(expr: Node) -> Self {
        expect_family(&expr, NodeFamily::Expression, "ExpressionStmt");
        Self::with_children(NodeKind::ExpressionStmt, vec![expr])
    }

    pub fn block(statements: Vec<Node>) -> Self {
        for stmt in &statements {
            expect_statement(stmt, "Block");
        }
        Self::with_children(NodeKind::Block(None), statements)
    }

    pub fn declaration(name: NameRef, initializer: Option<Node>) -> Self {
        let children = match initializer {
            Some(init) => {
                expect_family(&init, NodeFamily::Expression, "Declaration");
                vec![init]
            }
            None => Vec::new(),
        };
        Self::with_children(NodeKind::Declaration(name), children)
    }

    pub fn function_definition(name: NameRef, body: Node) -> Self {
        assert!(
            matches!(body.kind, NodeKind::Block(_)),
            "function body must be a Block, got {}",
            body.label()
        );
        Self::with_children(NodeKind::FunctionDefinition(name), vec![body])
    }

    pub fn program() -> Self {
        Self::with_children(NodeKind::Program, Vec::new())
    }

    /// Append a child to a variable-arity node (argument list, block, program)
    pub fn add(&mut self, child: Node) {
        match self.kind {
            NodeKind::Exprs => expect_family(&child, NodeFamily::Expression, "argument list"),
            NodeKind::Block(_) => expect_statement(&child, "Block"),
            NodeKind::Program => assert!(
                matches!(child.family(), NodeFamily::Declaration | NodeFamily::Function),
                "Program children must be declarations, got {}",
                child.label()
            ),
            _ => panic!("{} has a fixed number of children", self.label()),
        }
        self.children.push(child);
    }

    /// Tag a block with the scope it opens
    pub fn set_scope(&mut self, scope: ScopeId) {
        match &mut self.kind {
            NodeKind::Block(slot) => *slot = Some(scope),
            other => panic!("only blocks open scopes, got {}", other.label()),
        }
    }

    pub fn with_scope(mut self, scope: ScopeId) -> Self {
        self.set_scope(scope);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn family(&self) -> NodeFamily {
        self.kind.family()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Direct children in their fixed order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Only expressions carry a type slot
    pub fn is_typed(&self) -> bool {
        self.family() == NodeFamily::Expression
    }

    /// Resolved type; `None` for untyped nodes and not-yet-resolved expressions
    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    pub fn scope_id(&self) -> Option<ScopeId> {
        match self.kind {
            NodeKind::Block(scope) => scope,
            _ => None,
        }
    }

    /// Name reference held by variables, declarations and function definitions
    pub fn name_ref(&self) -> Option<NameRef> {
        match self.kind {
            NodeKind::Variable(name)
            | NodeKind::Declaration(name)
            | NodeKind::FunctionDefinition(name) => Some(name),
            _ => None,
        }
    }

    /// True once this node and every expression below it has a type
    pub fn is_fully_typed(&self) -> bool {
        (!self.is_typed() || self.ty.is_some()) && self.children.iter().all(Node::is_fully_typed)
    }
}

fn expect_family(node: &Node, family: NodeFamily, context: &str) {
    assert!(
        node.family() == family,
        "{context}: expected {family:?} child, got {}",
        node.label()
    );
}

// Declarations may appear wherever a statement may.
fn expect_statement(node: &Node, context: &str) {
    assert!(
        matches!(node.family(), NodeFamily::Statement | NodeFamily::Declaration),
        "{context}: expected Statement child, got {}",
        node.label()
    );
}
