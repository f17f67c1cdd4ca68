//! Error types and error handling for the compiler.
//!
//! This module defines the single error type shared by every stage of the
//! pipeline. It includes:
//!
//! - The lexical / syntax / semantic classification of failures
//! - Byte positions for lexical and syntax errors
//! - Error names and suggestions used by the command-line renderer

pub mod errors;
