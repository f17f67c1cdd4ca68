use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    pub identifier: String,
    /// The type name as written in the source, e.g. `Integer`.
    pub type_name: String,
    pub assigned_value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    /// Empty when there is no `ELSE`.
    pub else_body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}
