use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, DeclarationStmt, ExpressionStmt, IfStmt, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::{Keyword, Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the leading tokens: `LET` declares, `IDENT =` assigns,
/// `IF` / `WHILE` use their handlers, and anything else is an expression
/// statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.current_token().and_then(Token::keyword);

    if keyword != Some(Keyword::Let) && is_assignment_start(parser) {
        return parse_assignment_stmt(parser);
    }

    if let Some(handler) = keyword.and_then(|keyword| parser.get_stmt_lookup().get(&keyword).copied()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

fn is_assignment_start(parser: &Parser) -> bool {
    parser
        .current_token()
        .is_some_and(|token| token.kind == TokenKind::Identifier)
        && parser.peek(1).is_some_and(|token| token.is_operator("="))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(";")?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect_keyword(Keyword::Let)?;

    let identifier = parser.expect_kind(TokenKind::Identifier, "a variable name")?.value;
    parser.expect_operator(":")?;
    let type_name = parser.expect_kind(TokenKind::Identifier, "a type name")?.value;

    let assigned_value = if parser.match_operator(";") {
        None
    } else if parser.match_operator("=") {
        let value = parse_expr(parser, BindingPower::Default)?;
        parser.expect_operator(";")?;
        Some(value)
    } else {
        return Err(parser.error_here("`=` or `;`"));
    };

    Ok(Stmt::Declaration(DeclarationStmt {
        identifier,
        type_name,
        assigned_value,
    }))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.expect_kind(TokenKind::Identifier, "a variable name")?.value;
    parser.expect_operator("=")?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_operator(";")?;

    Ok(Stmt::Assignment(AssignmentStmt { identifier, value }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect_keyword(Keyword::If)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_keyword(Keyword::Then)?;

    // `IF cond THEN END`: accepted here, rejected by the analyzer.
    if parser.match_keyword(Keyword::End) {
        return Ok(Stmt::If(IfStmt {
            condition,
            then_body: vec![],
            else_body: vec![],
        }));
    }

    let mut then_body = vec![];
    while parser.has_tokens()
        && !parser.check_keyword(Keyword::Else)
        && !parser.check_keyword(Keyword::End)
    {
        then_body.push(parse_stmt(parser)?);
    }

    let mut else_body = vec![];
    if parser.match_keyword(Keyword::Else) {
        while parser.has_tokens() && !parser.check_keyword(Keyword::End) {
            else_body.push(parse_stmt(parser)?);
        }
    }

    parser.expect_keyword(Keyword::End)?;

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect_keyword(Keyword::While)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_keyword(Keyword::Do)?;

    let mut body = vec![];
    while parser.has_tokens() && !parser.check_keyword(Keyword::End) {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_keyword(Keyword::End)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}
