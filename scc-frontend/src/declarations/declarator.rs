//! Declarators
//!
//! A declarator records the pointer markers and array suffixes written
//! around a name. It is filled while one declaration item is parsed and
//! consumed by [`declare`](super::declare).

use crate::ast::Node;
use crate::types::{build_type, builder::TypeBuildError, ContainerBuilder, Type};
use scc_common::SourceLocation;

/// Pointer depth plus array builders, with no bound name (type names)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractDeclarator {
    pub pointer: usize,
    /// Suffix builders in source order
    pub builders: Vec<ContainerBuilder>,
}

impl AbstractDeclarator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pointer(&mut self) {
        self.pointer += 1;
    }

    pub fn add(&mut self, builder: ContainerBuilder) {
        self.builders.push(builder);
    }

    /// Pointer markers wrap the base first; suffixes bind tighter and are
    /// applied afterwards, last suffix innermost.
    pub fn build(&self, base: Type) -> Result<Type, TypeBuildError> {
        let pointed = std::iter::repeat(ContainerBuilder::Pointer)
            .take(self.pointer)
            .try_fold(base, |inner, builder| builder.apply(inner))?;
        build_type(pointed, &self.builders)
    }
}

/// Declarator with a bound name and optional initializer
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub location: SourceLocation,
    pub shape: AbstractDeclarator,
    pub initializer: Option<Node>,
}

impl Declarator {
    pub fn new(name: &str, location: SourceLocation) -> Self {
        assert!(!name.is_empty(), "declarator at {location} has no name");
        Self {
            name: name.to_string(),
            location,
            shape: AbstractDeclarator::new(),
            initializer: None,
        }
    }

    pub fn add_pointer(&mut self) {
        self.shape.add_pointer();
    }

    pub fn add(&mut self, builder: ContainerBuilder) {
        self.shape.add(builder);
    }

    pub fn set_init(&mut self, init: Node) {
        self.initializer = Some(init);
    }

    /// Builder-style helpers used when a declarator is assembled in one go
    pub fn pointer(mut self, depth: usize) -> Self {
        self.shape.pointer += depth;
        self
    }

    pub fn array(mut self, size: u64) -> Self {
        self.add(ContainerBuilder::Array(size));
        self
    }

    pub fn init(mut self, init: Node) -> Self {
        self.set_init(init);
        self
    }

    pub fn build(&self, base: Type) -> Result<Type, TypeBuildError> {
        self.shape.build(base)
    }
}

/// Declarators of one declaration statement, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitDeclarators(Vec<Declarator>);

impl InitDeclarators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, declarator: Declarator) {
        self.0.push(declarator);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for InitDeclarators {
    type Item = Declarator;
    type IntoIter = std::vec::IntoIter<Declarator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Declarator> for InitDeclarators {
    fn from_iter<I: IntoIterator<Item = Declarator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
