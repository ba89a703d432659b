//! Expression type resolution
//!
//! Takes an untyped tree and returns it with every expression's type slot
//! filled. Children are resolved before their parent, so each rule only
//! looks at already-typed operands.

use crate::ast::{BinaryOp, Node, NodeKind, UnaryOp};
use crate::semantic::errors::SemanticError;
use crate::semantic::symbols::SymbolTable;
use crate::types::Type;
use log::trace;

/// Resolve the types of every expression in `node`
pub fn resolve_types(node: Node, symbols: &SymbolTable) -> Result<Node, SemanticError> {
    let Node { kind, children, ty } = node;
    let children = children
        .into_iter()
        .map(|child| resolve_types(child, symbols))
        .collect::<Result<Vec<_>, _>>()?;

    let ty = match &kind {
        NodeKind::Integer(_) | NodeKind::Real(_) | NodeKind::Char(_) | NodeKind::String(_) => ty,
        NodeKind::Variable(name) => {
            let binding = symbols
                .binding(*name)
                .ok_or(SemanticError::DanglingNameRef { name: *name })?;
            Some(binding.ty.clone())
        }
        NodeKind::Unary(UnaryOp::AddressOf) => Some(Type::pointer_to(type_of(&children[0]))),
        NodeKind::Unary(_) => Some(type_of(&children[0])),
        NodeKind::Binary(op) => Some(binary_type(*op, &type_of(&children[0]), &type_of(&children[1]))?),
        // Functions are bound under their return type
        NodeKind::Call => Some(type_of(&children[0])),
        _ => None,
    };

    if let Some(ty) = &ty {
        trace!("{} : {}", kind.label(), ty);
    }
    Ok(Node { kind, children, ty })
}

// Children are resolved first; the fallback mirrors the default void slot.
fn type_of(node: &Node) -> Type {
    node.ty.clone().unwrap_or_else(Type::void)
}

fn binary_type(op: BinaryOp, left: &Type, right: &Type) -> Result<Type, SemanticError> {
    let (left, right) = (left.decay(), right.decay());
    match op {
        BinaryOp::IndexAccess => match left.pointer_target() {
            Some(element) => Ok(element.clone()),
            None => Err(SemanticError::NotIndexable { found: left }),
        },
        BinaryOp::Minus if left.is_pointer() && right.is_pointer() => Ok(Type::int()),
        _ if left.is_pointer() => Ok(left),
        _ if right.is_pointer() => Ok(right),
        _ => Ok(wider(left, right)),
    }
}

fn wider(left: Type, right: Type) -> Type {
    match (left.prim_kind(), right.prim_kind()) {
        (Some(l), Some(r)) if r.rank() > l.rank() => right,
        _ => left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StorageClass;
    use pretty_assertions::assert_eq;
    use scc_common::{NameRef, ScopeId, SourceLocation};

    fn table_with(decls: &[(&str, Type)]) -> (SymbolTable, Vec<NameRef>) {
        let mut table = SymbolTable::new();
        let refs = decls
            .iter()
            .map(|(name, ty)| {
                table
                    .insert(ScopeId::GLOBAL, name, ty.clone(), StorageClass::Auto, SourceLocation::dummy())
                    .unwrap()
            })
            .collect();
        (table, refs)
    }

    #[test]
    fn test_variable_takes_binding_type() {
        let (table, refs) = table_with(&[("p", Type::pointer_to(Type::char()))]);
        let node = resolve_types(Node::variable(refs[0]), &table).unwrap();
        assert_eq!(node.ty(), Some(&Type::pointer_to(Type::char())));
    }

    #[test]
    fn test_unary_propagates_operand_type() {
        let (table, refs) = table_with(&[("r", Type::real())]);
        let node = Node::unary(UnaryOp::InvertSignal, Node::variable(refs[0]));
        let node = resolve_types(node, &table).unwrap();
        assert_eq!(node.ty(), Some(&Type::real()));

        let node = resolve_types(Node::unary(UnaryOp::Not, Node::char(b'c')), &table).unwrap();
        assert_eq!(node.ty(), Some(&Type::char()));
    }

    #[test]
    fn test_address_of_wraps_in_pointer() {
        let (table, refs) = table_with(&[("a", Type::array_of(Type::int(), 4))]);
        let node = resolve_types(Node::unary(UnaryOp::AddressOf, Node::variable(refs[0])), &table)
            .unwrap();
        assert_eq!(node.ty(), Some(&Type::pointer_to(Type::array_of(Type::int(), 4))));
    }

    #[test]
    fn test_arithmetic_types() {
        let (table, refs) = table_with(&[("p", Type::pointer_to(Type::int())), ("q", Type::pointer_to(Type::int()))]);

        let mixed = Node::binary(BinaryOp::Times, Node::integer(2), Node::real(1.5));
        assert_eq!(resolve_types(mixed, &table).unwrap().ty(), Some(&Type::real()));

        let chars = Node::binary(BinaryOp::Plus, Node::char(b'a'), Node::integer(1));
        assert_eq!(resolve_types(chars, &table).unwrap().ty(), Some(&Type::int()));

        let offset = Node::binary(BinaryOp::Plus, Node::integer(1), Node::variable(refs[0]));
        assert_eq!(resolve_types(offset, &table).unwrap().ty(), Some(&Type::pointer_to(Type::int())));

        let diff = Node::binary(BinaryOp::Minus, Node::variable(refs[0]), Node::variable(refs[1]));
        assert_eq!(resolve_types(diff, &table).unwrap().ty(), Some(&Type::int()));
    }

    #[test]
    fn test_index_access_yields_element_type() {
        let (table, refs) = table_with(&[("m", Type::array_of(Type::array_of(Type::char(), 3), 2))]);
        let row = Node::binary(BinaryOp::IndexAccess, Node::variable(refs[0]), Node::integer(1));
        let cell = Node::binary(BinaryOp::IndexAccess, row, Node::integer(2));
        let cell = resolve_types(cell, &table).unwrap();
        assert_eq!(cell.ty(), Some(&Type::char()));
        assert_eq!(cell.children()[0].ty(), Some(&Type::array_of(Type::char(), 3)));
    }

    #[test]
    fn test_indexing_a_scalar_fails() {
        let (table, refs) = table_with(&[("n", Type::int())]);
        let node = Node::binary(BinaryOp::IndexAccess, Node::variable(refs[0]), Node::integer(0));
        assert_eq!(
            resolve_types(node, &table),
            Err(SemanticError::NotIndexable { found: Type::int() })
        );
    }

    #[test]
    fn test_call_takes_callee_type() {
        let (table, refs) = table_with(&[("f", Type::real())]);
        let call = Node::call(Node::variable(refs[0]), Node::exprs(vec![Node::integer(1)]));
        let call = resolve_types(call, &table).unwrap();
        assert_eq!(call.ty(), Some(&Type::real()));
        assert_eq!(call.children()[1].ty(), None);
    }

    #[test]
    fn test_statements_stay_untyped_and_tree_is_fully_typed() {
        let (table, refs) = table_with(&[("x", Type::int())]);
        let body = Node::block(vec![Node::expression_stmt(Node::unary(
            UnaryOp::PostfixIncrement,
            Node::variable(refs[0]),
        ))]);
        let node = resolve_types(Node::while_stmt(Node::variable(refs[0]), body), &table).unwrap();
        assert_eq!(node.ty(), None);
        assert!(node.is_fully_typed());
    }

    #[test]
    fn test_dangling_reference_fails() {
        let table = SymbolTable::new();
        assert_eq!(
            resolve_types(Node::variable(NameRef(3)), &table),
            Err(SemanticError::DanglingNameRef { name: NameRef(3) })
        );
    }
}
