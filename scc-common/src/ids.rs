//! Stable handles shared between the AST and the symbol table
//!
//! The AST never owns binding records. It holds these small copyable ids
//! and resolves them through the symbol table when it needs a name or type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol identifier
pub type SymbolId = u32;

/// Identifies one lexical scope; ids are never reused within a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// The translation-unit scope, open for the whole lifetime of a table
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn is_global(self) -> bool {
        self == Self::GLOBAL
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a binding record owned by the symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameRef(pub SymbolId);

impl NameRef {
    pub fn id(self) -> SymbolId {
        self.0
    }
}

impl fmt::Display for NameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
