use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence tiers, lowest first. Operators of the same tier associate left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Additive,
    Multiplicative,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led("==", BindingPower::Equality, parse_binary_expr);
    parser.led("!=", BindingPower::Equality, parse_binary_expr);

    // Additive and multiplicative
    parser.led("+", BindingPower::Additive, parse_binary_expr);
    parser.led("-", BindingPower::Additive, parse_binary_expr);
    parser.led("*", BindingPower::Multiplicative, parse_binary_expr);
    parser.led("/", BindingPower::Multiplicative, parse_binary_expr);

    // Literals, names and grouping
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Integer, parse_literal_expr);
    parser.nud(TokenKind::Decimal, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Operator, parse_grouping_expr);

    // Statements
    parser.stmt(Keyword::Let, parse_declaration_stmt);
    parser.stmt(Keyword::If, parse_if_stmt);
    parser.stmt(Keyword::While, parse_while_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<Keyword, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<&'static str, LEDHandler>;
pub type BPLookup = HashMap<&'static str, BindingPower>;
