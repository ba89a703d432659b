//! Scoped symbol table
//!
//! Every scope ever opened is kept, so the `ScopeId` stored on a block stays
//! meaningful after the block is closed. A separate stack records which
//! scopes are currently open; lookups walk it innermost first.

use crate::ast::Names;
use crate::semantic::errors::SemanticError;
use crate::types::{StorageClass, Type};
use log::{debug, warn};
use scc_common::{NameRef, ScopeId, SourceLocation, SymbolId};
use serde::Serialize;
use std::collections::HashMap;

/// Binding record a `NameRef` resolves to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub name: String,
    pub ty: Type,
    pub storage: StorageClass,
    pub scope: ScopeId,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
struct Scope {
    parent: Option<ScopeId>,
    names: HashMap<String, NameRef>,
}

/// Symbol table with explicit scope identities
#[derive(Debug, Clone)]
pub struct SymbolTable {
    bindings: Vec<Binding>,
    scopes: Vec<Scope>,
    open: Vec<ScopeId>,
}

impl SymbolTable {
    /// Create a table with the global scope open
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            scopes: vec![Scope { parent: None, names: HashMap::new() }],
            open: vec![ScopeId::GLOBAL],
        }
    }

    /// Open a scope nested in the current one
    pub fn open_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(self.current_scope()),
            names: HashMap::new(),
        });
        self.open.push(id);
        debug!("opened scope {id}");
        id
    }

    /// Close the innermost scope. The global scope stays open.
    pub fn close_scope(&mut self) {
        if self.open.len() > 1 {
            if let Some(id) = self.open.pop() {
                debug!("closed scope {id}");
            }
        } else {
            warn!("attempted to close the global scope");
        }
    }

    pub fn current_scope(&self) -> ScopeId {
        self.open.last().copied().unwrap_or(ScopeId::GLOBAL)
    }

    pub fn is_open(&self, scope: ScopeId) -> bool {
        self.open.contains(&scope)
    }

    /// Enclosing scope of `scope`, `None` for the global scope or unknown ids
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes.get(scope.0 as usize).and_then(|s| s.parent)
    }

    /// Bind `name` in `scope`, which must be open
    pub fn insert(
        &mut self,
        scope: ScopeId,
        name: &str,
        ty: Type,
        storage: StorageClass,
        location: SourceLocation,
    ) -> Result<NameRef, SemanticError> {
        if !self.is_open(scope) {
            return Err(SemanticError::ScopeNotOpen { scope });
        }

        let next = NameRef(self.bindings.len() as SymbolId);
        let names = &mut self.scopes[scope.0 as usize].names;
        if let Some(existing) = names.get(name) {
            return Err(SemanticError::RedefinedSymbol {
                name: name.to_string(),
                original_location: self.bindings[existing.id() as usize].location.clone(),
                redefinition_location: location,
            });
        }
        names.insert(name.to_string(), next);

        debug!("bound {name}: {ty} ({storage}) in scope {scope}");
        self.bindings.push(Binding {
            name: name.to_string(),
            ty,
            storage,
            scope,
            location,
        });
        Ok(next)
    }

    /// Look up a name (searches from current scope outward)
    pub fn lookup(&self, name: &str) -> Result<NameRef, SemanticError> {
        self.open
            .iter()
            .rev()
            .find_map(|scope| self.scopes[scope.0 as usize].names.get(name).copied())
            .ok_or_else(|| SemanticError::UndefinedVariable { name: name.to_string() })
    }

    pub fn binding(&self, name: NameRef) -> Option<&Binding> {
        self.bindings.get(name.id() as usize)
    }

    pub fn binding_mut(&mut self, name: NameRef) -> Option<&mut Binding> {
        self.bindings.get_mut(name.id() as usize)
    }

    /// Names bound directly in `scope`, in declaration order
    pub fn scope_bindings(&self, scope: ScopeId) -> Vec<NameRef> {
        let mut refs: Vec<NameRef> = self
            .scopes
            .get(scope.0 as usize)
            .map(|s| s.names.values().copied().collect())
            .unwrap_or_default();
        refs.sort_by_key(|r| r.id());
        refs
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Names for SymbolTable {
    fn name_of(&self, name: NameRef) -> Option<&str> {
        self.binding(name).map(|b| b.name.as_str())
    }
}
