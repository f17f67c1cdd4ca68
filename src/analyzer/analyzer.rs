//! Semantic analysis: name resolution, typing and literal canonicalization.
//!
//! Analysis is a single fail-fast walk over the untyped tree. The walk keeps
//! a [`ScopeStack`] of variable frames and resolves types and functions
//! through a [`Library`].

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    ast::{
        ast::{Expr, Source, Stmt},
        expressions::{BinaryExpr, BinaryOperator, CallExpr, RawLiteral},
        statements::{AssignmentStmt, DeclarationStmt, IfStmt, WhileStmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    stdlib::stdlib::{Library, Stdlib},
};

use super::{
    scope::{Scope, ScopeStack},
    typed_ast::{
        TypedAssignmentStmt, TypedBinaryExpr, TypedCallExpr, TypedDeclarationStmt, TypedExpr,
        TypedExpressionStmt, TypedGroupExpr, TypedIfStmt, TypedLiteralExpr, TypedSource,
        TypedStmt, TypedVariableExpr, TypedWhileStmt, Value,
    },
};

lazy_static! {
    static ref STDLIB: Stdlib = Stdlib::default();
    static ref STRING_CHARACTERS: Regex = Regex::new("^[A-Za-z0-9_!?.+\\-/* ]*$").unwrap();
}

pub struct Analyzer<'a> {
    scopes: ScopeStack,
    library: &'a dyn Library,
}

impl<'a> Analyzer<'a> {
    pub fn new(root: Scope, library: &'a dyn Library) -> Self {
        Analyzer {
            scopes: ScopeStack::new(root),
            library,
        }
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Consumes the analyzer, returning the root frame with every top-level
    /// declaration bound.
    pub fn into_root_scope(self) -> Scope {
        self.scopes.into_root()
    }
}

/// Analyzes `source` against the default standard library.
pub fn analyze(source: &Source, root: Scope) -> Result<TypedSource, Error> {
    analyze_with(source, root, &*STDLIB)
}

pub fn analyze_with(
    source: &Source,
    root: Scope,
    library: &dyn Library,
) -> Result<TypedSource, Error> {
    if source.statements.is_empty() {
        return Err(Error::semantic(ErrorImpl::EmptySource));
    }

    let mut analyzer = Analyzer::new(root, library);

    let statements = source
        .statements
        .iter()
        .map(|stmt| analyze_stmt(&mut analyzer, stmt))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("analyzed {} top-level statements", statements.len());
    Ok(TypedSource { statements })
}

pub fn analyze_stmt(analyzer: &mut Analyzer, stmt: &Stmt) -> Result<TypedStmt, Error> {
    match stmt {
        Stmt::Expression(expression_stmt) => {
            let expression = analyze_expr(analyzer, &expression_stmt.expression)?;
            if !matches!(expression, TypedExpr::Function(_)) {
                return Err(Error::semantic(ErrorImpl::InvalidExpressionStatement));
            }
            Ok(TypedStmt::Expression(TypedExpressionStmt { expression }))
        }
        Stmt::Declaration(declaration) => analyze_declaration(analyzer, declaration),
        Stmt::Assignment(assignment) => analyze_assignment(analyzer, assignment),
        Stmt::If(if_stmt) => analyze_if(analyzer, if_stmt),
        Stmt::While(while_stmt) => analyze_while(analyzer, while_stmt),
    }
}

fn analyze_declaration(
    analyzer: &mut Analyzer,
    declaration: &DeclarationStmt,
) -> Result<TypedStmt, Error> {
    let var_type = analyzer
        .library
        .resolve_type_name(&declaration.type_name)
        .ok_or_else(|| {
            Error::semantic(ErrorImpl::UnknownType {
                type_: declaration.type_name.clone(),
            })
        })?;

    if var_type == Type::Void {
        return Err(Error::semantic(ErrorImpl::VoidVariable {
            variable: declaration.identifier.clone(),
        }));
    }

    // Bound before the initializer is checked, so `LET x : Integer = x;` resolves.
    analyzer
        .scopes
        .declare_variable(&declaration.identifier, var_type)?;

    let assigned_value = match &declaration.assigned_value {
        Some(value) => {
            let value = analyze_expr(analyzer, value)?;
            check_assignable(value.get_type(), var_type)?;
            Some(value)
        }
        None => None,
    };

    Ok(TypedStmt::Declaration(TypedDeclarationStmt {
        identifier: declaration.identifier.clone(),
        var_type,
        type_name: var_type.target_name().to_string(),
        assigned_value,
    }))
}

fn analyze_assignment(
    analyzer: &mut Analyzer,
    assignment: &AssignmentStmt,
) -> Result<TypedStmt, Error> {
    let target = analyzer.scopes.fetch_variable_type(&assignment.identifier)?;
    let value = analyze_expr(analyzer, &assignment.value)?;
    check_assignable(value.get_type(), target)?;

    Ok(TypedStmt::Assignment(TypedAssignmentStmt {
        identifier: assignment.identifier.clone(),
        value,
    }))
}

fn analyze_if(analyzer: &mut Analyzer, if_stmt: &IfStmt) -> Result<TypedStmt, Error> {
    let condition = analyze_condition(analyzer, &if_stmt.condition, "IF")?;

    if if_stmt.then_body.is_empty() {
        return Err(Error::semantic(ErrorImpl::EmptyThenBranch));
    }

    let then_body = analyze_block(analyzer, &if_stmt.then_body)?;
    let else_body = analyze_block(analyzer, &if_stmt.else_body)?;

    Ok(TypedStmt::If(TypedIfStmt {
        condition,
        then_body,
        else_body,
    }))
}

fn analyze_while(analyzer: &mut Analyzer, while_stmt: &WhileStmt) -> Result<TypedStmt, Error> {
    let condition = analyze_condition(analyzer, &while_stmt.condition, "WHILE")?;
    let body = analyze_block(analyzer, &while_stmt.body)?;

    Ok(TypedStmt::While(TypedWhileStmt { condition, body }))
}

fn analyze_condition(
    analyzer: &mut Analyzer,
    condition: &Expr,
    statement: &str,
) -> Result<TypedExpr, Error> {
    let condition = analyze_expr(analyzer, condition)?;
    if condition.get_type() != Type::Boolean {
        return Err(Error::semantic(ErrorImpl::NonBooleanCondition {
            statement: statement.to_string(),
            received: condition.get_type().to_string(),
        }));
    }
    Ok(condition)
}

/// Analyzes a block body in a fresh child frame, discarded afterwards.
fn analyze_block(analyzer: &mut Analyzer, body: &[Stmt]) -> Result<Vec<TypedStmt>, Error> {
    analyzer.scopes.push();
    let result = body
        .iter()
        .map(|stmt| analyze_stmt(analyzer, stmt))
        .collect::<Result<Vec<_>, _>>();
    analyzer.scopes.pop();
    result
}

pub fn analyze_expr(analyzer: &mut Analyzer, expr: &Expr) -> Result<TypedExpr, Error> {
    match expr {
        Expr::Literal(literal) => analyze_literal(&literal.value),
        Expr::Group(group) => {
            let expression = analyze_expr(analyzer, &group.expression)?;
            Ok(TypedExpr::Group(TypedGroupExpr {
                ty: expression.get_type(),
                expression: Box::new(expression),
            }))
        }
        Expr::Binary(binary) => analyze_binary(analyzer, binary),
        Expr::Variable(variable) => Ok(TypedExpr::Variable(TypedVariableExpr {
            ty: analyzer.scopes.fetch_variable_type(&variable.name)?,
            name: variable.name.clone(),
        })),
        Expr::Function(call) => analyze_call(analyzer, call),
    }
}

fn analyze_literal(literal: &RawLiteral) -> Result<TypedExpr, Error> {
    let (ty, value) = match literal {
        RawLiteral::Boolean(value) => (Type::Boolean, Value::Boolean(*value)),
        RawLiteral::Integer(text) => {
            let value = text.parse::<i32>().map_err(|_| {
                Error::semantic(ErrorImpl::IntegerOutOfRange {
                    token: text.clone(),
                })
            })?;
            (Type::Integer, Value::Integer(value))
        }
        RawLiteral::Decimal(text) => {
            let value = text
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    Error::semantic(ErrorImpl::DecimalOutOfRange {
                        token: text.clone(),
                    })
                })?;
            (Type::Decimal, Value::Decimal(value))
        }
        RawLiteral::String(text) => {
            if !STRING_CHARACTERS.is_match(text) {
                return Err(Error::semantic(ErrorImpl::UnsupportedStringCharacter {
                    value: text.clone(),
                }));
            }
            (Type::String, Value::String(text.clone()))
        }
    };

    Ok(TypedExpr::Literal(TypedLiteralExpr { ty, value }))
}

fn analyze_binary(analyzer: &mut Analyzer, binary: &BinaryExpr) -> Result<TypedExpr, Error> {
    let left = analyze_expr(analyzer, &binary.left)?;
    let right = analyze_expr(analyzer, &binary.right)?;
    let ty = binary_result_type(binary.operator, left.get_type(), right.get_type())?;

    Ok(TypedExpr::Binary(TypedBinaryExpr {
        ty,
        operator: binary.operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// The result type of `left <operator> right`, or an error when the operator
/// does not accept those operand types.
pub fn binary_result_type(operator: BinaryOperator, left: Type, right: Type) -> Result<Type, Error> {
    let (kind, ty) = match operator {
        BinaryOperator::Equals | BinaryOperator::NotEquals => (
            "equality",
            (left != Type::Void && right != Type::Void).then_some(Type::Boolean),
        ),
        BinaryOperator::Plus => {
            let ty = if left == Type::Void || right == Type::Void {
                None
            } else if left == Type::String || right == Type::String {
                Some(Type::String)
            } else {
                numeric_result_type(left, right)
            };
            ("addition", ty)
        }
        BinaryOperator::Dash | BinaryOperator::Star | BinaryOperator::Slash => (
            "arithmetic",
            if left.is_numeric() && right.is_numeric() {
                numeric_result_type(left, right)
            } else {
                None
            },
        ),
    };

    ty.ok_or_else(|| {
        Error::semantic(ErrorImpl::InvalidBinaryExpression {
            kind: kind.to_string(),
            operator: operator.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        })
    })
}

fn numeric_result_type(left: Type, right: Type) -> Option<Type> {
    if left == Type::Integer && right == Type::Integer {
        Some(Type::Integer)
    } else if left == Type::Decimal || right == Type::Decimal {
        Some(Type::Decimal)
    } else {
        None
    }
}

fn analyze_call(analyzer: &mut Analyzer, call: &CallExpr) -> Result<TypedExpr, Error> {
    let library = analyzer.library;
    let function = library
        .lookup(&call.name, call.arguments.len())
        .ok_or_else(|| {
            Error::semantic(ErrorImpl::UnknownFunction {
                function: call.name.clone(),
                arity: call.arguments.len(),
            })
        })?;

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for (argument, parameter_type) in call.arguments.iter().zip(&function.parameter_types) {
        let argument = analyze_expr(analyzer, argument)?;
        check_assignable(argument.get_type(), *parameter_type)?;
        arguments.push(argument);
    }

    Ok(TypedExpr::Function(TypedCallExpr {
        ty: function.return_type,
        callee: function.callee.clone(),
        arguments,
    }))
}

pub fn check_assignable(ty: Type, target: Type) -> Result<(), Error> {
    if ty.is_assignable_to(target) {
        Ok(())
    } else {
        Err(Error::semantic(ErrorImpl::TypeMatchError {
            expected: target.to_string(),
            received: ty.to_string(),
        }))
    }
}
