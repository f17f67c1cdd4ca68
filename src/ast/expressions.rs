use std::fmt::Display;

use super::ast::Expr;

/// A literal exactly as the parser saw it, before range checks.
#[derive(Debug, Clone, PartialEq)]
pub enum RawLiteral {
    Boolean(bool),
    /// Digit text of an integer literal of any length.
    Integer(String),
    /// Text of a decimal literal, `digits.digits`.
    Decimal(String),
    /// String contents with the surrounding quotes removed.
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    Plus,
    Dash,
    Star,
    Slash,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(BinaryOperator::Equals),
            "!=" => Some(BinaryOperator::NotEquals),
            "+" => Some(BinaryOperator::Plus),
            "-" => Some(BinaryOperator::Dash),
            "*" => Some(BinaryOperator::Star),
            "/" => Some(BinaryOperator::Slash),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Plus => "+",
            BinaryOperator::Dash => "-",
            BinaryOperator::Star => "*",
            BinaryOperator::Slash => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: RawLiteral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}
