//! Declaration specifiers
//!
//! The specifiers of one declaration statement are collected in source
//! order and resolved once into a base type plus a storage class.

use crate::semantic::SemanticError;
use crate::types::{StorageClass, Type};
use log::warn;
use serde::{Deserialize, Serialize};

/// Type specifier keywords
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSpecifier {
    Void,
    Int,
    Real,
    Char,
    Struct(String),
    Union(String),
    Enum(String),
}

/// Type qualifiers are accepted and otherwise ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeQualifier {
    Const,
    Volatile,
}

/// One specifier of a declaration statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationSpec {
    StorageClass(StorageClass),
    TypeSpecifier(TypeSpecifier),
    TypeQualifier(TypeQualifier),
}

impl From<StorageClass> for DeclarationSpec {
    fn from(class: StorageClass) -> Self {
        DeclarationSpec::StorageClass(class)
    }
}

impl From<TypeSpecifier> for DeclarationSpec {
    fn from(spec: TypeSpecifier) -> Self {
        DeclarationSpec::TypeSpecifier(spec)
    }
}

impl From<TypeQualifier> for DeclarationSpec {
    fn from(qualifier: TypeQualifier) -> Self {
        DeclarationSpec::TypeQualifier(qualifier)
    }
}

/// What a specifier list means once resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpecs {
    pub base: Type,
    pub storage: StorageClass,
    pub qualifiers: Vec<TypeQualifier>,
}

/// Ordered specifiers of one declaration statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSpecs {
    specs: Vec<DeclarationSpec>,
}

impl DeclarationSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, spec: impl Into<DeclarationSpec>) {
        self.specs.push(spec.into());
    }

    pub fn with(mut self, spec: impl Into<DeclarationSpec>) -> Self {
        self.add(spec);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclarationSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Determine the base type and storage class
    pub fn resolve(&self) -> Result<ResolvedSpecs, SemanticError> {
        let mut type_spec: Option<&TypeSpecifier> = None;
        let mut storage: Option<StorageClass> = None;
        let mut qualifiers = Vec::new();

        for spec in &self.specs {
            match spec {
                DeclarationSpec::StorageClass(class) => {
                    if let Some(first) = storage {
                        return Err(SemanticError::ConflictingStorageClasses { first, second: *class });
                    }
                    storage = Some(*class);
                }
                DeclarationSpec::TypeSpecifier(ts) => {
                    if let Some(first) = type_spec {
                        return Err(SemanticError::ConflictingTypeSpecifiers {
                            first: first.clone().into(),
                            second: spec.clone(),
                        });
                    }
                    type_spec = Some(ts);
                }
                DeclarationSpec::TypeQualifier(qualifier) => {
                    warn!("Ignoring type qualifier: {:?}", qualifier);
                    qualifiers.push(*qualifier);
                }
            }
        }

        let base = match type_spec {
            None => return Err(SemanticError::MissingTypeSpecifier),
            Some(TypeSpecifier::Void) => Type::void(),
            Some(TypeSpecifier::Int) => Type::int(),
            Some(TypeSpecifier::Real) => Type::real(),
            Some(TypeSpecifier::Char) => Type::char(),
            Some(other) => {
                return Err(SemanticError::UnsupportedTypeSpecifier { spec: other.clone().into() })
            }
        };

        Ok(ResolvedSpecs {
            base,
            storage: storage.unwrap_or_default(),
            qualifiers,
        })
    }
}

impl FromIterator<DeclarationSpec> for DeclarationSpecs {
    fn from_iter<I: IntoIterator<Item = DeclarationSpec>>(iter: I) -> Self {
        Self { specs: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_type() {
        let specs = DeclarationSpecs::new().with(TypeSpecifier::Char);
        let resolved = specs.resolve().unwrap();
        assert_eq!(resolved.base, Type::char());
        assert_eq!(resolved.storage, StorageClass::Auto);
    }

    #[test]
    fn test_storage_and_qualifiers_do_not_change_type() {
        let specs = DeclarationSpecs::new()
            .with(StorageClass::Static)
            .with(TypeQualifier::Const)
            .with(TypeSpecifier::Int);
        let resolved = specs.resolve().unwrap();
        assert_eq!(resolved.base, Type::int());
        assert_eq!(resolved.storage, StorageClass::Static);
        assert_eq!(resolved.qualifiers, vec![TypeQualifier::Const]);
        assert_eq!(specs.len(), 3);
    }

    #[test]
    fn test_missing_type_specifier() {
        let specs = DeclarationSpecs::new().with(StorageClass::Extern);
        assert_eq!(specs.resolve(), Err(SemanticError::MissingTypeSpecifier));
    }

    #[test]
    fn test_conflicting_type_specifiers() {
        let specs: DeclarationSpecs = vec![
            DeclarationSpec::from(TypeSpecifier::Int),
            DeclarationSpec::from(TypeSpecifier::Real),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            specs.resolve(),
            Err(SemanticError::ConflictingTypeSpecifiers {
                first: TypeSpecifier::Int.into(),
                second: TypeSpecifier::Real.into(),
            })
        );
    }

    #[test]
    fn test_conflicting_storage_classes() {
        let specs = DeclarationSpecs::new()
            .with(StorageClass::Extern)
            .with(StorageClass::Register)
            .with(TypeSpecifier::Int);
        assert_eq!(
            specs.resolve(),
            Err(SemanticError::ConflictingStorageClasses {
                first: StorageClass::Extern,
                second: StorageClass::Register,
            })
        );
    }

    #[test]
    fn test_aggregate_specifiers_are_unsupported() {
        let specs = DeclarationSpecs::new().with(TypeSpecifier::Struct("point".to_string()));
        assert_eq!(
            specs.resolve(),
            Err(SemanticError::UnsupportedTypeSpecifier {
                spec: TypeSpecifier::Struct("point".to_string()).into(),
            })
        );
    }
}
