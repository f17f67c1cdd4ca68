#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod stdlib;

extern crate regex;

pub use analyzer::{
    analyzer::{analyze, analyze_with},
    scope::Scope,
};
pub use generator::generator::generate;
pub use lexer::lexer::scan;
pub use parser::parser::parse;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runs the whole pipeline over `source` with an empty root scope and the
/// default standard library, returning the generated Java text.
pub fn compile(source: &str) -> Result<String, Error> {
    let tokens = scan(source)?;
    let ast = parse(tokens)?;
    let typed = analyze(&ast, Scope::new())?;
    Ok(generate(&typed))
}

/// Finds the line containing `position`, returning the 1-based line number,
/// the line text without its terminator, and the column inside that line.
///
/// A position at or past the end of the input resolves to the end of the
/// last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if pos < end || end == source.len() {
            let text = line.trim_end_matches(['\n', '\r']);
            let line_pos = (pos - start).min(text.len());
            return Some((line_number, text.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders an error the way the command line shows it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `THEN`, did you miss a semicolon?)
/// -> program.src
///   |
/// 2 | IF x THEN
///   | -----^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some(position) = error.get_position() else {
        out.push_str(&format!("   {}\n", error.message()));
        return out;
    };

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
