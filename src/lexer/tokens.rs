use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("LET", Keyword::Let);
        map.insert("IF", Keyword::If);
        map.insert("THEN", Keyword::Then);
        map.insert("ELSE", Keyword::Else);
        map.insert("END", Keyword::End);
        map.insert("WHILE", Keyword::While);
        map.insert("DO", Keyword::Do);
        map.insert("TRUE", Keyword::True);
        map.insert("FALSE", Keyword::False);
        map
    };
}

/// Lexical classes produced by the scanner.
///
/// Keywords are scanned as `Identifier`; the parser recognises them by text
/// through [`Token::keyword`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Decimal,
    String,
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Case-sensitive reserved words.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    If,
    Then,
    Else,
    End,
    While,
    Do,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "LET",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::End => "END",
            Keyword::While => "WHILE",
            Keyword::Do => "DO",
            Keyword::True => "TRUE",
            Keyword::False => "FALSE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact lexeme, quotes included for strings.
    pub value: String,
    pub offset: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) @{}", self.kind, self.value, self.offset)
    }
}

impl Token {
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Identifier {
            return None;
        }

        RESERVED_LOOKUP.get(self.value.as_str()).copied()
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == operator
    }

    pub fn position(&self) -> Position {
        Position(self.offset)
    }

    /// Offset one past the last byte of the lexeme.
    pub fn end(&self) -> usize {
        self.offset + self.value.len()
    }
}
