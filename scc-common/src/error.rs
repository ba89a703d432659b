//! Error handling for the Small C compiler
//!
//! Every phase reports its own typed errors; this module defines the
//! workspace-wide error they are folded into before reaching the driver.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all front-end phases
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Semantic error at {location}: {message}")]
    Semantic {
        location: SourceLocation,
        message: String,
    },

    #[error("Type error at {location}: {message}")]
    Type {
        location: SourceLocation,
        message: String,
    },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    /// Create a semantic error
    pub fn semantic_error(message: String, location: SourceLocation) -> Self {
        CompilerError::Semantic { location, message }
    }

    /// Create a type error
    pub fn type_error(message: String, location: SourceLocation) -> Self {
        CompilerError::Type { location, message }
    }

    /// Location the error points at, if it has one
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            CompilerError::Semantic { location, .. } | CompilerError::Type { location, .. } => {
                Some(location)
            }
            CompilerError::InternalError { .. } => None,
        }
    }
}

/// Convert from String (for simple error cases)
impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_error_display() {
        let err = CompilerError::semantic_error(
            "Redefinition of symbol: x".to_string(),
            SourceLocation::new("test.c", 3, 9),
        );
        assert_eq!(err.to_string(), "Semantic error at test.c:3:9: Redefinition of symbol: x");
    }

    #[test]
    fn test_error_location() {
        let loc = SourceLocation::new_simple(4, 2);
        let err = CompilerError::type_error("bad".to_string(), loc.clone());
        assert_eq!(err.location(), Some(&loc));

        let internal: CompilerError = "oops".to_string().into();
        assert_eq!(internal.location(), None);
        assert_eq!(internal.to_string(), "Internal compiler error: oops");
    }
}
