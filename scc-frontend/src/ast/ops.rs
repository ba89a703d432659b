//! Operator definitions
//!
//! Each operator knows the label it is dumped with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Over,
    IndexAccess,
}

impl BinaryOp {
    pub fn label(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Over => "/",
            BinaryOp::IndexAccess => "v[x]",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        !matches!(self, BinaryOp::IndexAccess)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    BitNot,
    InvertSignal,
    PostfixIncrement,
    PostfixDecrement,
    PrefixIncrement,
    PrefixDecrement,
    AddressOf,
}

impl UnaryOp {
    // Postfix forms keep the plain spelling; prefix forms are tagged with `p`.
    pub fn label(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::InvertSignal => "-",
            UnaryOp::PostfixIncrement => "++",
            UnaryOp::PostfixDecrement => "--",
            UnaryOp::PrefixIncrement => "p++",
            UnaryOp::PrefixDecrement => "p--",
            UnaryOp::AddressOf => "&x",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
