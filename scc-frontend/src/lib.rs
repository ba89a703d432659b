//! Small C Compiler - Frontend
//!
//! This crate provides the data model the parser builds on:
//! - AST: the typed syntax tree and its dump format
//! - Types: primitive and container types and the builders that compose them
//! - Declarations: declarator resolution and name registration
//! - Semantic: the scoped symbol table and expression type resolution

pub mod ast;
pub mod declarations;
pub mod semantic;
pub mod types;

pub use ast::{BinaryOp, Node, NodeKind, UnaryOp};
pub use declarations::{
    declare, resolve_array_size, vector_type_builder, AbstractDeclarator, DeclarationSpec,
    DeclarationSpecs, Declarator, InitDeclarators, TypeQualifier, TypeSpecifier,
};
pub use semantic::{resolve_types, Binding, SemanticError, SymbolTable};
pub use types::{ContainerBuilder, PrimKind, StorageClass, Type};

use scc_common::{CompilerError, ScopeId};

/// High-level frontend interface: owns the symbol table and reports
/// failures as `CompilerError`s, which stop the translation unit.
#[derive(Debug, Default)]
pub struct Frontend {
    symbols: SymbolTable,
}

impl Frontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn open_scope(&mut self) -> ScopeId {
        self.symbols.open_scope()
    }

    pub fn close_scope(&mut self) {
        self.symbols.close_scope();
    }

    /// Register one declaration statement in `scope`
    pub fn declare(
        &mut self,
        scope: ScopeId,
        specs: DeclarationSpecs,
        declarators: InitDeclarators,
    ) -> Result<Vec<Node>, CompilerError> {
        Ok(declare(&mut self.symbols, scope, specs, declarators)?)
    }

    /// Reference a visible name from an expression
    pub fn variable(&self, name: &str) -> Result<Node, CompilerError> {
        Ok(Node::variable(self.symbols.lookup(name)?))
    }

    /// Resolve every expression type in `node`
    pub fn type_tree(&self, node: Node) -> Result<Node, CompilerError> {
        Ok(resolve_types(node, &self.symbols)?)
    }

    /// Render `node` in the tree-dump format
    pub fn dump(&self, node: &Node) -> String {
        node.dump(&self.symbols).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scc_common::SourceLocation;

    #[test]
    fn test_frontend_declare_and_reference() {
        let mut frontend = Frontend::new();
        let decls = [Declarator::new("n", SourceLocation::new_simple(1, 5))].into_iter().collect();
        let specs = DeclarationSpecs::new().with(TypeSpecifier::Int);
        frontend.declare(ScopeId::GLOBAL, specs, decls).unwrap();

        let expr = Node::binary(BinaryOp::Plus, frontend.variable("n").unwrap(), Node::integer(1));
        let expr = frontend.type_tree(expr).unwrap();
        assert_eq!(
            frontend.dump(&expr),
            "(+ \"[int]\" (Var \"n\" \"[int]\") (Integer \"[int]\" 1))"
        );
    }

    #[test]
    fn test_frontend_reports_compiler_errors() {
        let frontend = Frontend::new();
        let err = frontend.variable("missing").unwrap_err();
        assert!(matches!(err, CompilerError::Semantic { .. }));
        assert!(err.to_string().contains("Undefined variable: missing"));
    }
}
