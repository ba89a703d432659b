//! Container builders
//!
//! A builder is one deferred layer of a declared type: "pointer to ..." or
//! "array of N ...". Declarators collect builders while they are parsed and
//! the declared type is produced by folding them over the base type.
//!
//! Application order: builders are stored in source order, which is also
//! the order C reads a declarator (outermost layer first). Folding therefore
//! runs right-to-left: the last suffix wraps the base type first.
//! `int m[2][3]` stores `[Array(2), Array(3)]` and builds an array of 2
//! arrays of 3 ints.

use super::Type;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to compose a type layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeBuildError {
    #[error("array elements must have a complete type, found {element_type}")]
    IncompleteElement { element_type: Type },
}

/// One pointer or array layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerBuilder {
    Pointer,
    Array(u64),
}

impl ContainerBuilder {
    /// Wrap `inner` in this layer
    pub fn apply(self, inner: Type) -> Result<Type, TypeBuildError> {
        match self {
            ContainerBuilder::Pointer => Ok(Type::pointer_to(inner)),
            ContainerBuilder::Array(size) => {
                if !inner.is_complete() {
                    return Err(TypeBuildError::IncompleteElement { element_type: inner });
                }
                Ok(Type::array_of(inner, size))
            }
        }
    }
}

/// Fold a source-ordered builder list over `base`, last builder first
pub fn build_type(base: Type, builders: &[ContainerBuilder]) -> Result<Type, TypeBuildError> {
    builders
        .iter()
        .rev()
        .try_fold(base, |inner, builder| builder.apply(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_layers() {
        assert_eq!(
            ContainerBuilder::Pointer.apply(Type::void()),
            Ok(Type::pointer_to(Type::void()))
        );
        assert_eq!(
            ContainerBuilder::Array(10).apply(Type::char()),
            Ok(Type::array_of(Type::char(), 10))
        );
    }

    #[test]
    fn test_fold_runs_right_to_left() {
        let ty = build_type(Type::int(), &[ContainerBuilder::Array(2), ContainerBuilder::Array(3)]);
        assert_eq!(ty, Ok(Type::array_of(Type::array_of(Type::int(), 3), 2)));

        let ty = build_type(Type::int(), &[ContainerBuilder::Array(4), ContainerBuilder::Pointer]);
        assert_eq!(ty, Ok(Type::array_of(Type::pointer_to(Type::int()), 4)));
    }

    #[test]
    fn test_empty_list_is_identity() {
        assert_eq!(build_type(Type::real(), &[]), Ok(Type::real()));
    }

    #[test]
    fn test_array_of_void_is_rejected() {
        assert_eq!(
            build_type(Type::void(), &[ContainerBuilder::Array(3)]),
            Err(TypeBuildError::IncompleteElement { element_type: Type::void() })
        );
        // void* elements are fine
        assert_eq!(
            build_type(Type::pointer_to(Type::void()), &[ContainerBuilder::Array(3)]),
            Ok(Type::array_of(Type::pointer_to(Type::void()), 3))
        );
    }

    #[test]
    fn test_builders_are_deterministic() {
        let layers = [ContainerBuilder::Pointer, ContainerBuilder::Array(8)];
        assert_eq!(build_type(Type::char(), &layers), build_type(Type::char(), &layers));
    }
}
