use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical"),
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Semantic => write!(f, "semantic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Semantic errors are reported without a source position.
    pub fn semantic(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::MissingArgument => "MissingArgument",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::VoidVariable { .. } => "VoidVariable",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
            ErrorImpl::EmptyThenBranch => "EmptyThenBranch",
            ErrorImpl::EmptySource => "EmptySource",
            ErrorImpl::IntegerOutOfRange { .. } => "IntegerOutOfRange",
            ErrorImpl::DecimalOutOfRange { .. } => "DecimalOutOfRange",
            ErrorImpl::UnsupportedStringCharacter { .. } => "UnsupportedStringCharacter",
            ErrorImpl::InvalidExpressionStatement => "InvalidExpressionStatement",
            ErrorImpl::UnknownFunction { .. } => "UnknownFunction",
            ErrorImpl::InvalidBinaryExpression { .. } => "InvalidBinaryExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended while expecting {}", expected))
            }
            ErrorImpl::MissingArgument => ErrorTip::Suggestion(String::from(
                "Trailing commas are not allowed in argument lists",
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::VoidVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` cannot be declared with type Void",
                variable
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::NonBooleanCondition { statement, received } => ErrorTip::Suggestion(
                format!("The {} condition must be a Boolean, found `{}`", statement, received),
            ),
            ErrorImpl::EmptySource => ErrorTip::Suggestion(String::from(
                "A program needs at least one statement",
            )),
            ErrorImpl::EmptyThenBranch => ErrorTip::Suggestion(String::from(
                "Add at least one statement between THEN and ELSE/END",
            )),
            ErrorImpl::IntegerOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::DecimalOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, it does not fit a double",
                token
            )),
            ErrorImpl::UnsupportedStringCharacter { .. } => ErrorTip::Suggestion(String::from(
                "Strings may only contain letters, digits, spaces and _!?.+-/*",
            )),
            ErrorImpl::InvalidExpressionStatement => ErrorTip::Suggestion(String::from(
                "Only function calls may be used as statements",
            )),
            ErrorImpl::UnknownFunction { function, arity } => ErrorTip::Suggestion(format!(
                "No function `{}` takes {} argument(s)",
                function, arity
            )),
            ErrorImpl::InvalidBinaryExpression { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(
                f,
                "{} error at byte {}: {}",
                self.get_kind(),
                position.0,
                self.internal_error
            ),
            None => write!(f, "{} error: {}", self.get_kind(), self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,

    // Syntax
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("missing argument before `)`")]
    MissingArgument,

    // Semantic
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },
    #[error("variable {variable:?} cannot have type Void")]
    VoidVariable { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("type {received} is not assignable to type {expected}")]
    TypeMatchError { expected: String, received: String },
    #[error("{statement} condition must be Boolean, received {received}")]
    NonBooleanCondition { statement: String, received: String },
    #[error("then-branch must be non-empty")]
    EmptyThenBranch,
    #[error("source contains no statements")]
    EmptySource,
    #[error("integer {token} is out of range")]
    IntegerOutOfRange { token: String },
    #[error("decimal {token} is out of range")]
    DecimalOutOfRange { token: String },
    #[error("string {value:?} contains unsupported characters")]
    UnsupportedStringCharacter { value: String },
    #[error("only function calls may be used as expression statements")]
    InvalidExpressionStatement,
    #[error("unknown function {function}/{arity}")]
    UnknownFunction { function: String, arity: usize },
    #[error("not a valid {kind} binary expression: {left} {operator} {right}")]
    InvalidBinaryExpression {
        kind: String,
        operator: String,
        left: String,
        right: String,
    },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedString => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::MissingArgument => ErrorKind::Syntax,
            _ => ErrorKind::Semantic,
        }
    }
}
