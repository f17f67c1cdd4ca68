//! Code generation module.
//!
//! This module projects the typed tree onto Java source text. It handles:
//!
//! - The wrapper class and `main` method around the program
//! - Statements, with four-space indentation per nesting level
//! - Expressions, using the callee names resolved during analysis
//!
//! Generation never fails; every tree reaching it has passed analysis.

pub mod expr;
pub mod generator;
pub mod stmt;
