use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order at every position; the first anchored match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\n\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: identifier_handler },
        // A dot only belongs to the number when a digit follows it.
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"(?s:\\\\.|[^\"\\\\])*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new("^(==|!=|.)").unwrap(), handler: operator_handler },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str) {
        self.push(MK_TOKEN!(kind, String::from(lexeme), self.pos));
        self.advance_n(lexeme.len());
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn identifier_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.emit(TokenKind::Identifier, matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = if matched.contains('.') {
        TokenKind::Decimal
    } else {
        TokenKind::Integer
    };

    lexer.emit(kind, matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.emit(TokenKind::String, matched);
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, Position(lexer.pos)))
}

fn operator_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.emit(TokenKind::Operator, matched);
    Ok(())
}

/// Converts source text into classified tokens carrying their byte offsets.
pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, lexeme)) => handler(&mut lex, lexeme)?,
            None => {
                let token = remaining.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    Position(lex.pos),
                ));
            }
        }
    }

    debug!("scanned {} tokens", lex.tokens.len());
    Ok(lex.tokens)
}
