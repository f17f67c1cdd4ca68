//! Semantic analysis module.
//!
//! This module turns the untyped tree into a typed tree while:
//!
//! - Resolving declared type names and function calls through the registry
//! - Resolving variables through a stack of block scopes
//! - Assigning a type to every expression and checking assignability
//! - Range-checking and canonicalizing literals
//!
//! Analysis stops at the first violation.

pub mod analyzer;
pub mod scope;
pub mod typed_ast;

#[cfg(test)]
mod tests;
