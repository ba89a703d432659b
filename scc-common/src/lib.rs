//! Small C Compiler - Common Types and Utilities
//! 
//! This crate contains the handles, source locations and error type
//! shared by every phase of the compiler front end.

pub mod error;
pub mod ids;
pub mod source_loc;

pub use error::CompilerError;
pub use ids::{NameRef, ScopeId, SymbolId};
pub use source_loc::SourceLocation;
