//! Declarator resolution and registration
//!
//! The parser collects the specifiers and declarators of one declaration
//! statement, calling [`vector_type_builder`] for every array suffix, and
//! hands them to [`declare`]. `declare` assembles each declarator's type
//! and binds the names in the scope it is given.
//!
//! A failing declarator aborts its whole statement. Type assembly runs for
//! every declarator before anything is inserted, so array-bound and element
//! errors leave the scope untouched. A duplicate name is only detected at
//! insertion; names bound earlier in the same statement stay bound.

pub mod declarator;
pub mod specs;

pub use declarator::{AbstractDeclarator, Declarator, InitDeclarators};
pub use specs::{DeclarationSpec, DeclarationSpecs, ResolvedSpecs, TypeQualifier, TypeSpecifier};

use crate::ast::{Node, NodeKind};
use crate::semantic::{SemanticError, SymbolTable};
use crate::types::builder::TypeBuildError;
use crate::types::{ContainerBuilder, Type};
use log::debug;
use scc_common::{ScopeId, SourceLocation};

/// Resolve an array dimension. Only integer literals are accepted.
pub fn resolve_array_size(expr: &Node) -> Result<u64, SemanticError> {
    match expr.kind() {
        NodeKind::Integer(value) => {
            u64::try_from(*value).map_err(|_| SemanticError::NegativeArrayBound { value: *value })
        }
        _ => Err(SemanticError::NonConstantArrayBound { expr: Box::new(expr.clone()) }),
    }
}

/// Builder for one `[size]` suffix
pub fn vector_type_builder(size_expr: &Node) -> Result<ContainerBuilder, SemanticError> {
    resolve_array_size(size_expr).map(ContainerBuilder::Array)
}

/// Register every declarator of one declaration statement in `scope`.
///
/// Returns one `Declaration` node per declarator, in order, each carrying
/// its initializer (if any) as its only child. Initializers are attached as
/// written and are not checked against the declared type.
pub fn declare(
    symbols: &mut SymbolTable,
    scope: ScopeId,
    specs: DeclarationSpecs,
    declarators: InitDeclarators,
) -> Result<Vec<Node>, SemanticError> {
    let resolved = specs.resolve()?;

    let typed = declarators
        .into_iter()
        .map(|decl| -> Result<(Declarator, Type), SemanticError> {
            let ty = decl
                .build(resolved.base.clone())
                .map_err(|err| build_error(err, &decl.name, &decl.location))?;
            Ok((decl, ty))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut nodes = Vec::with_capacity(typed.len());
    for (decl, ty) in typed {
        let Declarator { name, location, initializer, .. } = decl;
        let name_ref = symbols.insert(scope, &name, ty, resolved.storage, location)?;
        debug!("declared {name} as {name_ref}");
        nodes.push(Node::declaration(name_ref, initializer));
    }
    Ok(nodes)
}

/// Resolve a type name: specifiers plus an abstract declarator
pub fn resolve_type_name(
    specs: &DeclarationSpecs,
    declarator: &AbstractDeclarator,
) -> Result<Type, SemanticError> {
    let resolved = specs.resolve()?;
    declarator
        .build(resolved.base)
        .map_err(|err| build_error(err, "<type name>", &SourceLocation::dummy()))
}

fn build_error(err: TypeBuildError, name: &str, location: &SourceLocation) -> SemanticError {
    match err {
        TypeBuildError::IncompleteElement { element_type } => SemanticError::InvalidArrayElement {
            name: name.to_string(),
            element_type,
            location: location.clone(),
        },
    }
}
