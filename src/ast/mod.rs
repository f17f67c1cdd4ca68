/// AST (Abstract Syntax Tree) module
/// Contains the untyped tree produced by the parser
///
/// Submodules:
/// - ast: The Source root and the Stmt / Expr sum types
/// - expressions: Expression node structs, operators and raw literals
/// - statements: Statement node structs
/// - types: The Type enumeration shared with the analyzer and stdlib
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
