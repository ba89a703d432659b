//! Tree dump
//!
//! A node is written as `(LABEL data child1 child2 ...)`, recursively.
//! Expressions contribute their type as `"[type]"`; names are written
//! quoted after being looked up through [`Names`]. The reader at the bottom
//! of this module turns a dump back into a generic [`DumpTree`] so tests can
//! compare shapes without a symbol table.

use super::{Node, NodeKind};
use scc_common::NameRef;
use std::fmt;
use thiserror::Error;

/// Anything that can turn a name reference back into its spelling
pub trait Names {
    fn name_of(&self, name: NameRef) -> Option<&str>;
}

impl Names for [&str] {
    fn name_of(&self, name: NameRef) -> Option<&str> {
        self.get(name.id() as usize).copied()
    }
}

impl<const N: usize> Names for [&str; N] {
    fn name_of(&self, name: NameRef) -> Option<&str> {
        self.as_slice().name_of(name)
    }
}

/// Display adapter returned by [`Node::dump`]
pub struct Dump<'a, N: Names + ?Sized> {
    node: &'a Node,
    names: &'a N,
}

impl Node {
    /// Render this subtree in the canonical dump format
    pub fn dump<'a, N: Names + ?Sized>(&'a self, names: &'a N) -> Dump<'a, N> {
        Dump { node: self, names }
    }

    /// Serialize the tree as JSON (debug output)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<N: Names + ?Sized> Dump<'_, N> {
    fn write_name(&self, f: &mut fmt::Formatter<'_>, name: NameRef) -> fmt::Result {
        match self.names.name_of(name) {
            Some(spelling) => write!(f, " {:?}", spelling),
            None => write!(f, " \"{name}\""),
        }
    }

    fn write_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node.ty {
            Some(ty) => write!(f, " \"[{ty}]\""),
            None => write!(f, " \"[?]\""),
        }
    }

    fn write_data(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node.kind {
            NodeKind::Integer(value) => {
                self.write_type(f)?;
                write!(f, " {value}")
            }
            NodeKind::Real(value) => {
                self.write_type(f)?;
                write!(f, " {value:?}")
            }
            NodeKind::Char(value) => {
                self.write_type(f)?;
                write!(f, " '{}'", (*value as char).escape_default())
            }
            NodeKind::String(index) => {
                self.write_type(f)?;
                write!(f, " {index}")
            }
            NodeKind::Variable(name) => {
                self.write_name(f, *name)?;
                self.write_type(f)
            }
            NodeKind::Unary(_) | NodeKind::Binary(_) | NodeKind::Call => self.write_type(f),
            NodeKind::Block(Some(scope)) => write!(f, " {scope}"),
            NodeKind::Declaration(name) | NodeKind::FunctionDefinition(name) => {
                self.write_name(f, *name)
            }
            _ => Ok(()),
        }
    }
}

impl<N: Names + ?Sized> fmt::Display for Dump<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.node.label())?;
        self.write_data(f)?;
        for child in &self.node.children {
            write!(f, " {}", child.dump(self.names))?;
        }
        write!(f, ")")
    }
}

/// Generic shape read back from a dump
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DumpTree {
    pub label: String,
    pub data: Vec<String>,
    pub children: Vec<DumpTree>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DumpError {
    #[error("unexpected end of dump input")]
    UnexpectedEnd,

    #[error("expected '(' at offset {0}")]
    ExpectedOpen(usize),

    #[error("unterminated quoted item starting at offset {0}")]
    UnterminatedQuote(usize),

    #[error("trailing input at offset {0}")]
    TrailingInput(usize),
}

/// Parse one dumped tree
pub fn parse_dump(input: &str) -> Result<DumpTree, DumpError> {
    let mut reader = Reader { chars: input.char_indices().collect(), pos: 0 };
    let tree = reader.tree()?;
    reader.skip_whitespace();
    match reader.peek() {
        None => Ok(tree),
        Some(_) => Err(DumpError::TrailingInput(reader.offset())),
    }
}

struct Reader {
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl Reader {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.chars.get(self.pos).map(|&(i, _)| i).unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn tree(&mut self) -> Result<DumpTree, DumpError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => self.pos += 1,
            Some(_) => return Err(DumpError::ExpectedOpen(self.offset())),
            None => return Err(DumpError::UnexpectedEnd),
        }

        let mut tree = DumpTree::default();
        self.skip_whitespace();
        if !matches!(self.peek(), Some('(') | Some(')')) {
            tree.label = self.item()?;
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(DumpError::UnexpectedEnd),
                Some(')') => {
                    self.pos += 1;
                    return Ok(tree);
                }
                Some('(') => tree.children.push(self.tree()?),
                Some(_) => tree.data.push(self.item()?),
            }
        }
    }

    // A quoted item loses its quotes; a bare atom runs to whitespace or a paren.
    fn item(&mut self) -> Result<String, DumpError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let start = self.offset();
                self.pos += 1;
                let mut text = String::new();
                loop {
                    match self.peek() {
                        None => return Err(DumpError::UnterminatedQuote(start)),
                        Some('\\') => {
                            self.pos += 1;
                            let escaped = self.peek().ok_or(DumpError::UnterminatedQuote(start))?;
                            text.push('\\');
                            text.push(escaped);
                            self.pos += 1;
                        }
                        Some(c) if c == quote => {
                            self.pos += 1;
                            return Ok(text);
                        }
                        Some(c) => {
                            text.push(c);
                            self.pos += 1;
                        }
                    }
                }
            }
            _ => {
                let mut text = String::new();
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    text.push(c);
                    self.pos += 1;
                }
                Ok(text)
            }
        }
    }
}
