//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched on their leading keyword; expressions are parsed
//! with NUD/LED handlers and binding powers, which gives the three
//! left-associative precedence tiers of the grammar.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by keyword
//! - NUD (null denotation) handlers, keyed by token kind
//! - LED (left denotation) handlers and binding powers, keyed by operator

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Source,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `offset` places ahead of the current one.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn check_operator(&self, operator: &str) -> bool {
        self.current_token()
            .is_some_and(|token| token.is_operator(operator))
    }

    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_token()
            .is_some_and(|token| token.is_keyword(keyword))
    }

    /// Consumes the current token if it is `operator`.
    pub fn match_operator(&mut self, operator: &str) -> bool {
        let matched = self.check_operator(operator);
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Consumes the current token if it is `keyword`.
    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.pos += 1;
        }
        matched
    }

    pub fn expect_operator(&mut self, operator: &str) -> Result<Token, Error> {
        if self.check_operator(operator) {
            self.advance_expected()
        } else {
            Err(self.error_here(&format!("`{}`", operator)))
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, Error> {
        if self.check_keyword(keyword) {
            self.advance_expected()
        } else {
            Err(self.error_here(&format!("`{}`", keyword.as_str())))
        }
    }

    /// Expects a token of the specified kind; `expected` describes it for the error.
    pub fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token().is_some_and(|token| token.kind == kind) {
            self.advance_expected()
        } else {
            Err(self.error_here(expected))
        }
    }

    fn advance_expected(&mut self) -> Result<Token, Error> {
        match self.advance() {
            Some(token) => Ok(token),
            None => Err(self.error_here("a token")),
        }
    }

    /// Builds a syntax error at the current token, or at the end of input.
    pub fn error_here(&self, expected: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: format!("expected {}", expected),
                },
                token.position(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected.to_string(),
                },
                self.end_position(),
            ),
        }
    }

    /// Offset just past the final token.
    pub fn end_position(&self) -> Position {
        Position(self.tokens.last().map(Token::end).unwrap_or(0))
    }

    /// Binding power of the current token; anything that is not a registered
    /// infix operator ends the expression.
    pub fn current_binding_power(&self) -> BindingPower {
        match self.current_token() {
            Some(token) if token.kind == TokenKind::Operator => *self
                .binding_power_lookup
                .get(token.value.as_str())
                .unwrap_or(&BindingPower::Default),
            _ => BindingPower::Default,
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for an operator.
    pub fn led(&mut self, operator: &'static str, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(operator, binding_power);
        self.led_lookup.insert(operator, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses a stream of tokens into an untyped syntax tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until the tokens
/// run out. The first malformed construct aborts parsing.
pub fn parse(tokens: Vec<Token>) -> Result<Source, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    while parser.has_tokens() {
        statements.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} top-level statements", statements.len());
    Ok(Source { statements })
}
