use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, LiteralExpr, RawLiteral},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(token_kind) = parser.current_token().map(|token| token.kind) else {
        return Err(parser.error_here("an expression"));
    };
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.error_here("an expression"));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep folding into lhs
    while parser.current_binding_power() > bp {
        let operator_bp = parser.current_binding_power();
        let led = parser
            .current_token()
            .and_then(|token| parser.get_led_lookup().get(token.value.as_str()).copied());

        match led {
            Some(led) => left = led(parser, left, operator_bp)?,
            None => return Err(parser.error_here("an operator")),
        }
    }

    Ok(left)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.end_position();
    let operator_token = parser.advance().ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("an operator"),
            },
            position,
        )
    })?;

    let operator = BinaryOperator::from_symbol(&operator_token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value.clone(),
            },
            operator_token.position(),
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right))
}

/// Identifiers start a call when followed by `(`, otherwise a boolean literal
/// (`TRUE` / `FALSE`) or a variable reference.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.peek(1).is_some_and(|token| token.is_operator("(")) {
        return parse_call_expr(parser);
    }

    let token = parser.expect_kind(TokenKind::Identifier, "an identifier")?;

    match token.keyword() {
        Some(Keyword::True) => Ok(Expr::boolean(true)),
        Some(Keyword::False) => Ok(Expr::boolean(false)),
        _ => Ok(Expr::variable(&token.value)),
    }
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.advance() else {
        return Err(parser.error_here("a literal"));
    };

    let value = match token.kind {
        TokenKind::Integer => RawLiteral::Integer(token.value),
        TokenKind::Decimal => RawLiteral::Decimal(token.value),
        TokenKind::String => {
            let inner = &token.value[1..token.value.len() - 1];
            RawLiteral::String(inner.to_string())
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("expected a literal"),
                },
                token.position(),
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr { value }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.match_operator("(") {
        return Err(parser.error_here("an expression"));
    }
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(")")?;

    Ok(Expr::group(expr))
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect_kind(TokenKind::Identifier, "a function name")?.value;
    parser.expect_operator("(")?;

    let mut arguments = vec![];

    if !parser.match_operator(")") {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.check_operator(",") {
                if parser.peek(1).is_some_and(|token| token.is_operator(")")) {
                    let comma = parser.current_token().map(|token| token.position());
                    return Err(Error::new(
                        ErrorImpl::MissingArgument,
                        comma.unwrap_or_else(|| parser.end_position()),
                    ));
                }
                parser.advance();
                continue;
            }

            parser.expect_operator(")")?;
            break;
        }
    }

    Ok(Expr::call(&name, arguments))
}
