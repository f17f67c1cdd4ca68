//! Typed Abstract Syntax Tree definitions.
//!
//! The typed tree mirrors the untyped one node for node. Every expression
//! carries its resolved type, literals hold their canonical values, calls
//! carry the target-side callee and declarations the target-side type name.

use crate::ast::{expressions::BinaryOperator, types::Type};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedSource {
    pub statements: Vec<TypedStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    Expression(TypedExpressionStmt),
    Declaration(TypedDeclarationStmt),
    Assignment(TypedAssignmentStmt),
    If(TypedIfStmt),
    While(TypedWhileStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpressionStmt {
    /// Always a [`TypedExpr::Function`].
    pub expression: TypedExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedDeclarationStmt {
    pub identifier: String,
    pub var_type: Type,
    /// Target-side spelling of `var_type`, e.g. `int`.
    pub type_name: String,
    pub assigned_value: Option<TypedExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedAssignmentStmt {
    pub identifier: String,
    pub value: TypedExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedIfStmt {
    pub condition: TypedExpr,
    pub then_body: Vec<TypedStmt>,
    pub else_body: Vec<TypedStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedWhileStmt {
    pub condition: TypedExpr,
    pub body: Vec<TypedStmt>,
}

/// A literal value after range checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i32),
    Decimal(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpr {
    Literal(TypedLiteralExpr),
    Group(TypedGroupExpr),
    Binary(TypedBinaryExpr),
    Variable(TypedVariableExpr),
    Function(TypedCallExpr),
}

impl TypedExpr {
    pub fn get_type(&self) -> Type {
        match self {
            TypedExpr::Literal(literal) => literal.ty,
            TypedExpr::Group(group) => group.ty,
            TypedExpr::Binary(binary) => binary.ty,
            TypedExpr::Variable(variable) => variable.ty,
            TypedExpr::Function(call) => call.ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedLiteralExpr {
    pub ty: Type,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedGroupExpr {
    pub ty: Type,
    pub expression: Box<TypedExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedBinaryExpr {
    pub ty: Type,
    pub operator: BinaryOperator,
    pub left: Box<TypedExpr>,
    pub right: Box<TypedExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedVariableExpr {
    pub ty: Type,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedCallExpr {
    pub ty: Type,
    /// Target-side function name, e.g. `System.out.println`.
    pub callee: String,
    pub arguments: Vec<TypedExpr>,
}
