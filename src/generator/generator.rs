//! Main generator module.
//!
//! The [`Generator`] owns the output buffer and the current indentation and
//! wraps the program's statements in a Java class with a `main` method.

use log::debug;

use crate::analyzer::typed_ast::{TypedSource, TypedStmt};

use super::stmt::gen_statement;

pub const DEFAULT_CLASS_NAME: &str = "Main";

const INDENT: &str = "    ";

pub struct Generator {
    /// Text generated so far
    output: String,
    /// Current nesting level, in units of four spaces
    indent: usize,
    /// Name of the wrapper class
    class_name: String,
}

impl Generator {
    pub fn new() -> Self {
        Generator::with_class_name(DEFAULT_CLASS_NAME)
    }

    pub fn with_class_name(class_name: &str) -> Self {
        Generator {
            output: String::new(),
            indent: 0,
            class_name: class_name.to_string(),
        }
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Ends the current line and indents the next one to `indent` levels.
    pub fn newline(&mut self, indent: usize) {
        self.output.push('\n');
        for _ in 0..indent {
            self.output.push_str(INDENT);
        }
    }

    /// Writes the statements of a block body between its braces.
    ///
    /// Each statement goes on its own line one level deeper than the
    /// enclosing block; an empty body leaves the braces touching (`{}`).
    pub fn gen_block(&mut self, statements: &[TypedStmt]) {
        if statements.is_empty() {
            return;
        }

        self.indent += 1;
        for statement in statements {
            self.newline(self.indent);
            gen_statement(self, statement);
        }
        self.indent -= 1;
        self.newline(self.indent);
    }

    /// Generates the complete Java compilation unit for `source`.
    pub fn generate(mut self, source: &TypedSource) -> String {
        let header = format!("public final class {} {{", self.class_name);
        self.write(&header);
        self.newline(0);

        self.indent = 1;
        self.newline(self.indent);
        self.write("public static void main(String[] args) {");
        self.gen_block(&source.statements);
        self.write("}");

        self.indent = 0;
        self.newline(0);
        self.newline(0);
        self.write("}");
        self.newline(0);

        debug!(
            "generated class {} ({} bytes)",
            self.class_name,
            self.output.len()
        );
        self.output
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}

/// Generates Java for `source` inside a class named `Main`.
pub fn generate(source: &TypedSource) -> String {
    Generator::new().generate(source)
}
