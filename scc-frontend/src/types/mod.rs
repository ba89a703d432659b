//! Type system definitions
//!
//! Types are plain values: primitive kinds plus the two container shapes
//! (pointer-to and array-of). Equality is structural.

pub mod builder;

pub use builder::{build_type, ContainerBuilder};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimKind {
    Void,
    Integer,
    Real,
    Char,
}

impl PrimKind {
    /// Rank used when two arithmetic operands meet (char < int < real)
    pub fn rank(self) -> u8 {
        match self {
            PrimKind::Void => 0,
            PrimKind::Char => 1,
            PrimKind::Integer => 2,
            PrimKind::Real => 3,
        }
    }
}

impl fmt::Display for PrimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimKind::Void => "void",
            PrimKind::Integer => "int",
            PrimKind::Real => "real",
            PrimKind::Char => "char",
        };
        write!(f, "{name}")
    }
}

/// Container type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    Pointer,
    Array,
}

/// Type of a declared name or of an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Primitive type
    Prim(PrimKind),

    /// Pointer to another type
    Pointer { target: Box<Type> },

    /// Array with a resolved element count
    Array { element_type: Box<Type>, size: u64 },
}

impl Type {
    pub fn void() -> Self {
        Type::Prim(PrimKind::Void)
    }

    pub fn int() -> Self {
        Type::Prim(PrimKind::Integer)
    }

    pub fn real() -> Self {
        Type::Prim(PrimKind::Real)
    }

    pub fn char() -> Self {
        Type::Prim(PrimKind::Char)
    }

    pub fn pointer_to(target: Type) -> Self {
        Type::Pointer { target: Box::new(target) }
    }

    pub fn array_of(element_type: Type, size: u64) -> Self {
        Type::Array { element_type: Box::new(element_type), size }
    }

    /// Primitive kind, if this is a primitive type
    pub fn prim_kind(&self) -> Option<PrimKind> {
        match self {
            Type::Prim(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Container kind, if this is a pointer or an array
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Type::Prim(_) => None,
            Type::Pointer { .. } => Some(ContainerKind::Pointer),
            Type::Array { .. } => Some(ContainerKind::Array),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Prim(PrimKind::Void))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    /// Objects of incomplete type cannot be array elements
    pub fn is_complete(&self) -> bool {
        !self.is_void()
    }

    /// Get pointer target or array element type
    pub fn pointer_target(&self) -> Option<&Type> {
        match self {
            Type::Pointer { target } => Some(target),
            Type::Array { element_type, .. } => Some(element_type),
            Type::Prim(_) => None,
        }
    }

    /// Arrays used as values decay to a pointer to their first element
    pub fn decay(&self) -> Type {
        match self {
            Type::Array { element_type, .. } => Type::Pointer { target: element_type.clone() },
            other => other.clone(),
        }
    }

    /// Number of container layers wrapped around the innermost primitive
    pub fn depth(&self) -> usize {
        match self.pointer_target() {
            Some(inner) => 1 + inner.depth(),
            None => 0,
        }
    }
}

impl From<PrimKind> for Type {
    fn from(kind: PrimKind) -> Self {
        Type::Prim(kind)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Prim(kind) => write!(f, "{kind}"),
            Type::Pointer { target } => write!(f, "{target}*"),
            Type::Array { element_type, size } => write!(f, "{element_type}[{size}]"),
        }
    }
}

/// Storage class specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    Typedef,
    Extern,
    Static,
    #[default]
    Auto,
    Register,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class_str = match self {
            StorageClass::Typedef => "typedef",
            StorageClass::Extern => "extern",
            StorageClass::Static => "static",
            StorageClass::Auto => "auto",
            StorageClass::Register => "register",
        };
        write!(f, "{class_str}")
    }
}
