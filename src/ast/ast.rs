use super::{
    expressions::{BinaryExpr, BinaryOperator, CallExpr, GroupExpr, LiteralExpr, RawLiteral, VariableExpr},
    statements::{AssignmentStmt, DeclarationStmt, ExpressionStmt, IfStmt, WhileStmt},
};

/// Root of an untyped program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Group(GroupExpr),
    Binary(BinaryExpr),
    Variable(VariableExpr),
    Function(CallExpr),
}

// Shorthand constructors, mostly for building trees by hand in tests.
impl Expr {
    pub fn boolean(value: bool) -> Self {
        Expr::Literal(LiteralExpr {
            value: RawLiteral::Boolean(value),
        })
    }

    pub fn integer(text: &str) -> Self {
        Expr::Literal(LiteralExpr {
            value: RawLiteral::Integer(text.to_string()),
        })
    }

    pub fn decimal(text: &str) -> Self {
        Expr::Literal(LiteralExpr {
            value: RawLiteral::Decimal(text.to_string()),
        })
    }

    pub fn string(value: &str) -> Self {
        Expr::Literal(LiteralExpr {
            value: RawLiteral::String(value.to_string()),
        })
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(VariableExpr {
            name: name.to_string(),
        })
    }

    pub fn group(expression: Expr) -> Self {
        Expr::Group(GroupExpr {
            expression: Box::new(expression),
        })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(name: &str, arguments: Vec<Expr>) -> Self {
        Expr::Function(CallExpr {
            name: name.to_string(),
            arguments,
        })
    }
}
