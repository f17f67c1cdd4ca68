//! The standard-library registry.
//!
//! The analyzer resolves declared type names and function calls through the
//! [`Library`] trait. [`Stdlib`] is the built-in table; callers with a
//! different catalog can implement the trait themselves.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::types::Type;

lazy_static! {
    static ref TYPE_LOOKUP: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        for ty in [
            Type::Boolean,
            Type::Integer,
            Type::Decimal,
            Type::String,
            Type::Void,
            Type::Any,
        ] {
            map.insert(ty.name(), ty);
        }
        map
    };
}

/// Signature of a callable library function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub parameter_types: Vec<Type>,
    pub return_type: Type,
    /// Name of the function in the generated Java.
    pub callee: String,
}

impl Function {
    pub fn new(name: &str, parameter_types: Vec<Type>, return_type: Type, callee: &str) -> Self {
        Function {
            name: name.to_string(),
            parameter_types,
            return_type,
            callee: callee.to_string(),
        }
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// Read-only queries the analyzer makes against a function/type catalog.
pub trait Library {
    /// Finds the function with exactly this name and argument count.
    fn lookup(&self, name: &str, arity: usize) -> Option<&Function>;
    /// Maps a source-level type name such as `Integer` to its type.
    fn resolve_type_name(&self, name: &str) -> Option<Type>;
}

#[derive(Debug, Clone)]
pub struct Stdlib {
    functions: HashMap<(String, usize), Function>,
}

impl Stdlib {
    /// A registry with no functions; types still resolve.
    pub fn empty() -> Self {
        Stdlib {
            functions: HashMap::new(),
        }
    }

    /// Adds or replaces the entry for the function's name and arity.
    pub fn define(&mut self, function: Function) {
        self.functions
            .insert((function.name.clone(), function.arity()), function);
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }
}

impl Default for Stdlib {
    fn default() -> Self {
        let mut stdlib = Stdlib::empty();
        stdlib.define(Function::new("print", vec![Type::Any], Type::Void, "System.out.println"));
        stdlib.define(Function::new("abs", vec![Type::Integer], Type::Integer, "Math.abs"));
        stdlib.define(Function::new("sqrt", vec![Type::Decimal], Type::Decimal, "Math.sqrt"));
        stdlib
    }
}

impl Library for Stdlib {
    fn lookup(&self, name: &str, arity: usize) -> Option<&Function> {
        self.functions.get(&(name.to_string(), arity))
    }

    fn resolve_type_name(&self, name: &str) -> Option<Type> {
        TYPE_LOOKUP.get(name).copied()
    }
}
