//! Semantic analysis
//!
//! Name binding (the scoped symbol table) and expression type resolution.

pub mod errors;
pub mod resolve;
pub mod symbols;

pub use errors::SemanticError;
pub use resolve::resolve_types;
pub use symbols::{Binding, SymbolTable};
