//! Unit tests for the analyzer module.
//!
//! Covers declarations and scoping, statement rules, literal checks, the
//! binary operator table and function resolution.

use crate::ast::{ast::Source, types::Type};
use crate::errors::errors::{Error, ErrorImpl, ErrorKind};
use crate::lexer::lexer::scan;
use crate::parser::parser::parse;
use crate::stdlib::stdlib::{Function, Stdlib};

use super::{
    analyzer::{analyze, analyze_with, binary_result_type, check_assignable, Analyzer},
    scope::{Scope, ScopeStack},
    typed_ast::{TypedExpr, TypedStmt, Value},
};

fn analyze_source(source: &str) -> Result<Vec<TypedStmt>, Error> {
    let ast = parse(scan(source).unwrap()).unwrap();
    analyze(&ast, Scope::new()).map(|typed| typed.statements)
}

fn analyze_error(source: &str) -> ErrorImpl {
    let error = analyze_source(source).unwrap_err();
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert!(error.get_position().is_none());
    error.get_internal_error().clone()
}

fn declared_value(stmt: &TypedStmt) -> &TypedExpr {
    match stmt {
        TypedStmt::Declaration(declaration) => declaration.assigned_value.as_ref().unwrap(),
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_declaration_with_integer_initializer() {
    let statements = analyze_source("LET x : Integer = 1 + 2;").unwrap();

    let TypedStmt::Declaration(declaration) = &statements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(declaration.identifier, "x");
    assert_eq!(declaration.var_type, Type::Integer);
    assert_eq!(declaration.type_name, "int");
    assert_eq!(declared_value(&statements[0]).get_type(), Type::Integer);
}

#[test]
fn test_string_concatenation_dominates() {
    let statements = analyze_source("LET s : String = \"a\" + 1;").unwrap();

    assert_eq!(declared_value(&statements[0]).get_type(), Type::String);
}

#[test]
fn test_integer_widens_to_decimal_in_declaration() {
    let statements = analyze_source("LET d : Decimal = 1;").unwrap();
    assert_eq!(declared_value(&statements[0]).get_type(), Type::Integer);

    assert_eq!(
        analyze_error("LET i : Integer = 1.5;"),
        ErrorImpl::TypeMatchError {
            expected: "Integer".to_string(),
            received: "Decimal".to_string(),
        }
    );
}

#[test]
fn test_assignment_rejects_narrowing() {
    assert!(matches!(
        analyze_error("LET x : Integer; x = 1.5;"),
        ErrorImpl::TypeMatchError { .. }
    ));
    assert!(analyze_source("LET x : Decimal; x = 1;").is_ok());
}

#[test]
fn test_declared_type_must_exist_and_not_be_void() {
    assert_eq!(
        analyze_error("LET x : Number;"),
        ErrorImpl::UnknownType {
            type_: "Number".to_string()
        }
    );
    assert_eq!(
        analyze_error("LET v : Void;"),
        ErrorImpl::VoidVariable {
            variable: "v".to_string()
        }
    );
    assert!(analyze_source("LET a : Any = \"text\";").is_ok());
}

#[test]
fn test_variable_is_bound_before_its_initializer() {
    assert!(analyze_source("LET x : Integer = x + 1;").is_ok());
}

#[test]
fn test_redeclaration_in_same_scope() {
    assert_eq!(
        analyze_error("LET x : Integer; LET x : String;"),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_shadowing_in_nested_scope() {
    let source = "LET x : Integer; WHILE TRUE DO LET x : String = \"s\"; x = \"t\"; END x = 1;";

    assert!(analyze_source(source).is_ok());
}

#[test]
fn test_branch_declarations_are_not_visible_elsewhere() {
    assert_eq!(
        analyze_error("IF TRUE THEN LET y : Integer; ELSE y = 1; END"),
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string()
        }
    );
    assert!(matches!(
        analyze_error("IF TRUE THEN LET y : Integer = 1; END y = 2;"),
        ErrorImpl::VariableNotDeclared { .. }
    ));
    assert!(matches!(
        analyze_error("WHILE FALSE DO LET z : Integer; END print(z);"),
        ErrorImpl::VariableNotDeclared { .. }
    ));
}

#[test]
fn test_outer_variables_are_visible_in_blocks() {
    let source = "LET n : Integer = 0; WHILE n != 3 DO IF n == 1 THEN print(n); END n = n + 1; END";

    assert!(analyze_source(source).is_ok());
}

#[test]
fn test_undeclared_variable() {
    assert_eq!(
        analyze_error("print(z);"),
        ErrorImpl::VariableNotDeclared {
            variable: "z".to_string()
        }
    );
    assert!(matches!(
        analyze_error("z = 1;"),
        ErrorImpl::VariableNotDeclared { .. }
    ));
}

#[test]
fn test_conditions_must_be_boolean() {
    assert_eq!(
        analyze_error("IF 1 THEN print(1); END"),
        ErrorImpl::NonBooleanCondition {
            statement: "IF".to_string(),
            received: "Integer".to_string(),
        }
    );
    assert_eq!(
        analyze_error("WHILE \"yes\" DO END"),
        ErrorImpl::NonBooleanCondition {
            statement: "WHILE".to_string(),
            received: "String".to_string(),
        }
    );
    assert!(analyze_source("WHILE 1 == 1 DO END").is_ok());
}

#[test]
fn test_empty_then_branch_is_rejected() {
    assert_eq!(analyze_error("IF TRUE THEN END"), ErrorImpl::EmptyThenBranch);
    assert_eq!(
        analyze_error("IF TRUE THEN ELSE print(1); END"),
        ErrorImpl::EmptyThenBranch
    );
}

#[test]
fn test_empty_source_is_rejected() {
    let error = analyze(&Source::default(), Scope::new()).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.get_internal_error(), &ErrorImpl::EmptySource);
    assert_eq!(error.get_error_name(), "EmptySource");

    let error = analyze_with(&Source::default(), Scope::new(), &Stdlib::empty()).unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::EmptySource);
}

#[test]
fn test_condition_is_checked_before_empty_then_branch() {
    assert!(matches!(
        analyze_error("IF 1 THEN END"),
        ErrorImpl::NonBooleanCondition { .. }
    ));
}

#[test]
fn test_expression_statement_must_be_call() {
    assert_eq!(analyze_error("1;"), ErrorImpl::InvalidExpressionStatement);
    assert_eq!(
        analyze_error("LET x : Integer; x;"),
        ErrorImpl::InvalidExpressionStatement
    );
    assert_eq!(analyze_error("1 + 2;"), ErrorImpl::InvalidExpressionStatement);
    assert_eq!(
        analyze_error("(print(1));"),
        ErrorImpl::InvalidExpressionStatement
    );
    assert!(analyze_source("print(1);").is_ok());
}

#[test]
fn test_integer_literal_range() {
    let statements = analyze_source("LET a : Integer = 2147483647; LET b : Integer = 007;").unwrap();
    assert!(matches!(
        declared_value(&statements[0]),
        TypedExpr::Literal(literal) if literal.value == Value::Integer(i32::MAX)
    ));
    assert!(matches!(
        declared_value(&statements[1]),
        TypedExpr::Literal(literal) if literal.value == Value::Integer(7)
    ));

    assert_eq!(
        analyze_error("print(2147483648);"),
        ErrorImpl::IntegerOutOfRange {
            token: "2147483648".to_string()
        }
    );
}

#[test]
fn test_decimal_literal_range() {
    let statements = analyze_source("LET d : Decimal = 1.50;").unwrap();
    assert!(matches!(
        declared_value(&statements[0]),
        TypedExpr::Literal(literal) if literal.value == Value::Decimal(1.5)
    ));

    let huge = format!("print(1{}.0);", "0".repeat(400));
    assert!(matches!(
        analyze_error(&huge),
        ErrorImpl::DecimalOutOfRange { .. }
    ));
}

#[test]
fn test_string_character_class() {
    assert!(analyze_source("print(\"Hello World_!?.+-/*09\");").is_ok());
    assert!(analyze_source("print(\"\");").is_ok());

    assert_eq!(
        analyze_error("print(\"a,b\");"),
        ErrorImpl::UnsupportedStringCharacter {
            value: "a,b".to_string()
        }
    );
    assert!(matches!(
        analyze_error("print(\"a\\\"b\");"),
        ErrorImpl::UnsupportedStringCharacter { .. }
    ));
}

#[test]
fn test_binary_equality_table() {
    use crate::ast::expressions::BinaryOperator::*;

    assert_eq!(binary_result_type(Equals, Type::String, Type::Integer), Ok(Type::Boolean));
    assert_eq!(binary_result_type(NotEquals, Type::Boolean, Type::Any), Ok(Type::Boolean));
    assert!(binary_result_type(Equals, Type::Void, Type::Integer).is_err());
    assert!(binary_result_type(NotEquals, Type::Integer, Type::Void).is_err());
}

#[test]
fn test_binary_addition_table() {
    use crate::ast::expressions::BinaryOperator::Plus;

    assert_eq!(binary_result_type(Plus, Type::String, Type::Integer), Ok(Type::String));
    assert_eq!(binary_result_type(Plus, Type::Boolean, Type::String), Ok(Type::String));
    assert_eq!(binary_result_type(Plus, Type::Integer, Type::Integer), Ok(Type::Integer));
    assert_eq!(binary_result_type(Plus, Type::Integer, Type::Decimal), Ok(Type::Decimal));
    assert_eq!(binary_result_type(Plus, Type::Decimal, Type::Decimal), Ok(Type::Decimal));
    assert!(binary_result_type(Plus, Type::Boolean, Type::Integer).is_err());
    assert!(binary_result_type(Plus, Type::Any, Type::Integer).is_err());
    assert!(binary_result_type(Plus, Type::Void, Type::String).is_err());
}

#[test]
fn test_binary_arithmetic_table() {
    use crate::ast::expressions::BinaryOperator::*;

    for operator in [Dash, Star, Slash] {
        assert_eq!(binary_result_type(operator, Type::Integer, Type::Integer), Ok(Type::Integer));
        assert_eq!(binary_result_type(operator, Type::Decimal, Type::Integer), Ok(Type::Decimal));
        assert!(binary_result_type(operator, Type::String, Type::Integer).is_err());
        assert!(binary_result_type(operator, Type::Integer, Type::Boolean).is_err());
    }

    let error = binary_result_type(Dash, Type::String, Type::String).unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::InvalidBinaryExpression {
            kind: "arithmetic".to_string(),
            operator: "-".to_string(),
            left: "String".to_string(),
            right: "String".to_string(),
        }
    );
}

#[test]
fn test_binary_expression_in_program() {
    assert!(matches!(
        analyze_error("LET b : Boolean = TRUE + 1;"),
        ErrorImpl::InvalidBinaryExpression { .. }
    ));
    assert!(matches!(
        analyze_error("LET b : Boolean = print(1) == 1;"),
        ErrorImpl::InvalidBinaryExpression { .. }
    ));
}

#[test]
fn test_group_takes_inner_type() {
    let statements = analyze_source("LET d : Decimal = (1 + 2.0) * 2;").unwrap();

    let TypedExpr::Binary(binary) = declared_value(&statements[0]) else {
        panic!("expected binary");
    };
    assert_eq!(binary.ty, Type::Decimal);
    assert_eq!(binary.left.get_type(), Type::Decimal);
}

#[test]
fn test_call_resolves_callee_and_return_type() {
    let statements = analyze_source("print(1); LET d : Decimal = sqrt(4);").unwrap();

    let TypedStmt::Expression(expression) = &statements[0] else {
        panic!("expected expression statement");
    };
    let TypedExpr::Function(call) = &expression.expression else {
        panic!("expected call");
    };
    assert_eq!(call.callee, "System.out.println");
    assert_eq!(call.ty, Type::Void);
    assert_eq!(call.arguments.len(), 1);

    assert_eq!(declared_value(&statements[1]).get_type(), Type::Decimal);
}

#[test]
fn test_unknown_function_arity() {
    assert_eq!(
        analyze_error("print(1, 2);"),
        ErrorImpl::UnknownFunction {
            function: "print".to_string(),
            arity: 2,
        }
    );
    assert!(matches!(
        analyze_error("printf(1);"),
        ErrorImpl::UnknownFunction { .. }
    ));
}

#[test]
fn test_call_argument_types() {
    assert!(matches!(
        analyze_error("print(abs(1.5));"),
        ErrorImpl::TypeMatchError { .. }
    ));
    // Void is not accepted by an Any parameter.
    assert_eq!(
        analyze_error("print(print(1));"),
        ErrorImpl::TypeMatchError {
            expected: "Any".to_string(),
            received: "Void".to_string(),
        }
    );
}

#[test]
fn test_arguments_checked_left_to_right() {
    let mut library = Stdlib::empty();
    library.define(Function::new(
        "max",
        vec![Type::Integer, Type::Integer],
        Type::Integer,
        "Math.max",
    ));
    let ast = parse(scan("LET m : Integer = max(1.5, z);").unwrap()).unwrap();

    let error = analyze_with(&ast, Scope::new(), &library).unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::TypeMatchError { .. }
    ));
}

#[test]
fn test_custom_library() {
    let ast = parse(scan("print(1);").unwrap()).unwrap();

    let error = analyze_with(&ast, Scope::new(), &Stdlib::empty()).unwrap_err();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnknownFunction { .. }
    ));
}

#[test]
fn test_seeded_root_scope() {
    let ast = parse(scan("n = n * 2;").unwrap()).unwrap();
    let mut root = Scope::new();
    root.define("n", Type::Integer);

    assert!(analyze(&ast, root).is_ok());
}

#[test]
fn test_top_level_declarations_stay_in_root() {
    let ast = parse(scan("LET a : Integer; IF TRUE THEN LET b : Integer; END").unwrap()).unwrap();
    let library = Stdlib::default();
    let mut analyzer = Analyzer::new(Scope::new(), &library);

    for stmt in &ast.statements {
        super::analyzer::analyze_stmt(&mut analyzer, stmt).unwrap();
    }
    assert_eq!(analyzer.scopes().depth(), 0);

    let root = analyzer.into_root_scope();
    assert_eq!(root.get_variable("a"), Some(Type::Integer));
    assert_eq!(root.get_variable("b"), None);
}

#[test]
fn test_check_assignable() {
    assert!(check_assignable(Type::Integer, Type::Decimal).is_ok());
    assert!(check_assignable(Type::Decimal, Type::Integer).is_err());
    assert!(check_assignable(Type::Void, Type::Any).is_err());
}

#[test]
fn test_scope_stack_lookup_walks_outward() {
    let mut root = Scope::new();
    root.define("outer", Type::String);
    let mut scopes = ScopeStack::new(root);

    scopes.push();
    scopes.declare_variable("inner", Type::Integer).unwrap();
    scopes.declare_variable("outer", Type::Boolean).unwrap();
    assert_eq!(scopes.depth(), 1);
    assert_eq!(scopes.fetch_variable_type("outer"), Ok(Type::Boolean));
    assert_eq!(scopes.fetch_variable_type("inner"), Ok(Type::Integer));

    let popped = scopes.pop().unwrap();
    assert_eq!(popped.get_variable("inner"), Some(Type::Integer));
    assert_eq!(scopes.fetch_variable_type("outer"), Ok(Type::String));
    assert!(scopes.fetch_variable_type("inner").is_err());

    assert!(scopes.pop().is_none());
    assert!(!scopes.current().is_empty());
}

#[test]
fn test_scope_rejects_duplicate_declaration() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Type::Integer).unwrap();

    assert!(scope.declare_variable("x", Type::Integer).is_err());
}
