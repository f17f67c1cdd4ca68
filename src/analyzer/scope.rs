use std::collections::HashMap;

use log::trace;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
};

/// One frame of variable bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variable_lookup: HashMap<String, Type>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Binds `name`, replacing any earlier binding in this frame. Used to
    /// seed a root scope before analysis.
    pub fn define(&mut self, name: &str, ty: Type) -> &mut Self {
        self.variable_lookup.insert(name.to_string(), ty);
        self
    }

    pub fn declare_variable(&mut self, name: &str, ty: Type) -> Result<(), Error> {
        if self.variable_lookup.contains_key(name) {
            Err(Error::semantic(ErrorImpl::VariableAlreadyDeclared {
                variable: name.to_string(),
            }))
        } else {
            self.variable_lookup.insert(name.to_string(), ty);
            Ok(())
        }
    }

    pub fn get_variable(&self, name: &str) -> Option<Type> {
        self.variable_lookup.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

/// The chain of frames active during analysis, innermost last.
///
/// Frames are pushed on block entry and popped on block exit, so a child
/// frame never outlives the statement that created it.
#[derive(Debug)]
pub struct ScopeStack {
    current: Scope,
    parents: Vec<Scope>,
}

impl ScopeStack {
    pub fn new(root: Scope) -> Self {
        ScopeStack {
            current: root,
            parents: vec![],
        }
    }

    pub fn push(&mut self) {
        let parent = std::mem::take(&mut self.current);
        self.parents.push(parent);
        trace!("pushed scope, depth {}", self.depth());
    }

    /// Discards the innermost frame. The root frame is never popped.
    pub fn pop(&mut self) -> Option<Scope> {
        let parent = self.parents.pop()?;
        let child = std::mem::replace(&mut self.current, parent);
        trace!("popped scope, depth {}", self.depth());
        Some(child)
    }

    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    pub fn current(&self) -> &Scope {
        &self.current
    }

    pub fn declare_variable(&mut self, name: &str, ty: Type) -> Result<(), Error> {
        self.current.declare_variable(name, ty)
    }

    /// Searches outward from the innermost frame; the first match wins.
    pub fn fetch_variable_type(&self, name: &str) -> Result<Type, Error> {
        std::iter::once(&self.current)
            .chain(self.parents.iter().rev())
            .find_map(|scope| scope.get_variable(name))
            .ok_or_else(|| {
                Error::semantic(ErrorImpl::VariableNotDeclared {
                    variable: name.to_string(),
                })
            })
    }

    /// Returns the root frame, dropping any frames still open.
    pub fn into_root(mut self) -> Scope {
        while self.pop().is_some() {}
        self.current
    }
}
