//! Lexical analysis module for the compiler.
//!
//! This module contains the scanner that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Identifiers (keywords included), integers, decimals, strings and operators
//! - Byte offsets on every token for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
