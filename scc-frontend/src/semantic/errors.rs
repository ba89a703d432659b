//! Semantic analysis error definitions
//!
//! This module defines all error types reported while declaring names and
//! resolving the types of a tree.

use crate::ast::Node;
use crate::declarations::DeclarationSpec;
use crate::types::{StorageClass, Type};
use scc_common::{CompilerError, NameRef, ScopeId, SourceLocation};
use thiserror::Error;

/// Semantic analysis errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Redefinition of symbol: {name}")]
    RedefinedSymbol {
        name: String,
        original_location: SourceLocation,
        redefinition_location: SourceLocation,
    },

    #[error("Scope {scope} is not open")]
    ScopeNotOpen { scope: ScopeId },

    #[error("Array bound is not an integer constant: {} expression", .expr.label())]
    NonConstantArrayBound { expr: Box<Node> },

    #[error("Array bound must be non-negative, found {value}")]
    NegativeArrayBound { value: i64 },

    #[error("Invalid element type for array '{name}': {element_type}")]
    InvalidArrayElement {
        name: String,
        element_type: Type,
        location: SourceLocation,
    },

    #[error("Declaration has no type specifier")]
    MissingTypeSpecifier,

    #[error("Conflicting type specifiers: {first:?} and {second:?}")]
    ConflictingTypeSpecifiers {
        first: DeclarationSpec,
        second: DeclarationSpec,
    },

    #[error("Type specifier not supported: {spec:?}")]
    UnsupportedTypeSpecifier { spec: DeclarationSpec },

    #[error("Conflicting storage classes: {first} and {second}")]
    ConflictingStorageClasses {
        first: StorageClass,
        second: StorageClass,
    },

    #[error("Cannot index a value of type {found}")]
    NotIndexable { found: Type },

    #[error("Name reference {name} has no binding")]
    DanglingNameRef { name: NameRef },
}

impl SemanticError {
    fn location(&self) -> SourceLocation {
        match self {
            SemanticError::RedefinedSymbol { redefinition_location, .. } => {
                redefinition_location.clone()
            }
            SemanticError::InvalidArrayElement { location, .. } => location.clone(),
            // TODO: carry spans on expression nodes so bound and index errors can point at them
            _ => SourceLocation::dummy(),
        }
    }
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        let location = err.location();
        match err {
            SemanticError::NotIndexable { .. } | SemanticError::InvalidArrayElement { .. } => {
                CompilerError::type_error(err.to_string(), location)
            }
            _ => CompilerError::semantic_error(err.to_string(), location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redefinition_points_at_second_declaration() {
        let err = SemanticError::RedefinedSymbol {
            name: "x".to_string(),
            original_location: SourceLocation::new_simple(1, 5),
            redefinition_location: SourceLocation::new_simple(2, 5),
        };
        let compiler_err: CompilerError = err.into();
        assert_eq!(
            compiler_err,
            CompilerError::semantic_error(
                "Redefinition of symbol: x".to_string(),
                SourceLocation::new_simple(2, 5)
            )
        );
    }

    #[test]
    fn test_type_errors_map_to_type_variant() {
        let err = SemanticError::NotIndexable { found: Type::int() };
        assert!(matches!(CompilerError::from(err), CompilerError::Type { .. }));
    }

    #[test]
    fn test_non_constant_bound_names_the_expression() {
        let err = SemanticError::NonConstantArrayBound {
            expr: Box::new(Node::variable(NameRef(0))),
        };
        assert_eq!(err.to_string(), "Array bound is not an integer constant: Var expression");
    }
}
