//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an untyped syntax tree. It handles:
//!
//! - Statement parsing (declarations, assignments, IF/WHILE blocks)
//! - Expression parsing (equality, additive, multiplicative tiers, calls, literals)
//! - Fail-fast error reporting with byte positions
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
