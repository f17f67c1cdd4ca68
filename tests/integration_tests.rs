//! Integration tests for end-to-end translation.
//!
//! These tests drive the public API: scanning, parsing, analysis and Java
//! generation, both stage by stage and through `compile`.

use transpiler::{
    analyze, analyze_with, compile, display_error,
    errors::errors::{ErrorImpl, ErrorKind},
    generate,
    lexer::tokens::TokenKind,
    parse, scan,
    stdlib::stdlib::{Function, Stdlib},
    ast::types::Type,
    Position, Scope,
};

#[test]
fn test_declaration_end_to_end() {
    let source = "LET x : Integer = 1 + 2;";

    let tokens = scan(source).unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(lexemes, ["LET", "x", ":", "Integer", "=", "1", "+", "2", ";"]);
    assert_eq!(tokens[5].kind, TokenKind::Integer);

    let ast = parse(tokens).unwrap();
    let typed = analyze(&ast, Scope::new()).unwrap();
    let java = generate(&typed);

    assert!(java.contains("        int x = 1 + 2;\n"));
}

#[test]
fn test_compile_full_program() {
    let source = r#"
LET total : Decimal = 0;
LET i : Integer = 1;
WHILE i != 4 DO
    total = total + sqrt(i) * 2;
    i = i + 1;
END
IF total == 0 THEN
    print("nothing");
ELSE
    print("total is " + total);
END
"#;

    let expected = "public final class Main {

    public static void main(String[] args) {
        double total = 0;
        int i = 1;
        while (i != 4) {
            total = total + Math.sqrt(i) * 2;
            i = i + 1;
        }
        if (total == 0) {
            System.out.println(\"nothing\");
        } else {
            System.out.println(\"total is \" + total);
        }
    }

}
";

    assert_eq!(compile(source).unwrap(), expected);
}

#[test]
fn test_compile_empty_source() {
    for source in ["", "  \n"] {
        let error = compile(source).unwrap_err();

        assert_eq!(error.get_kind(), ErrorKind::Semantic);
        assert_eq!(error.get_internal_error(), &ErrorImpl::EmptySource);
        assert_eq!(error.to_string(), "semantic error: source contains no statements");
    }
}

#[test]
fn test_generated_java_keeps_program_shape() {
    let source = "
LET n : Integer = 0;
WHILE n != 3 DO
    IF n == 1 THEN
        print(\"one\");
        WHILE FALSE DO
            print(n);
        END
    ELSE
        IF n == 2 THEN
            print(\"two\");
        ELSE
            print(\"zero\");
        END
    END
    n = n + 1;
END
";
    let java = compile(source).unwrap();

    assert_eq!(java.matches("if (").count(), 2);
    assert_eq!(java.matches("} else {").count(), 2);
    assert_eq!(java.matches("while (").count(), 2);

    // One line per simple statement: the declaration, the assignment and the prints.
    let lines: Vec<&str> = java.lines().collect();
    let simple = lines
        .iter()
        .filter(|line| line.trim_end().ends_with(';'))
        .count();
    assert_eq!(simple, 6);

    let depth = |needle: &str| -> usize {
        let line = lines
            .iter()
            .find(|line| line.trim_start().starts_with(needle))
            .unwrap();
        (line.len() - line.trim_start().len()) / 4
    };
    assert_eq!(depth("int n = 0;"), 2);
    assert_eq!(depth("while (n != 3) {"), 2);
    assert_eq!(depth("if (n == 1) {"), 3);
    assert_eq!(depth("System.out.println(\"one\");"), 4);
    assert_eq!(depth("while (false) {"), 4);
    assert_eq!(depth("System.out.println(n);"), 5);
    assert_eq!(depth("if (n == 2) {"), 4);
    assert_eq!(depth("System.out.println(\"zero\");"), 5);
    assert_eq!(depth("n = n + 1;"), 3);
}

#[test]
fn test_string_plus_integer_is_accepted() {
    let java = compile("LET s : String = \"a\" + 1;").unwrap();

    assert!(java.contains("String s = \"a\" + 1;"));
}

#[test]
fn test_empty_then_branch_is_a_semantic_error() {
    // Parsing accepts the empty branch; analysis rejects it.
    let ast = parse(scan("IF TRUE THEN END").unwrap()).unwrap();
    let error = analyze(&ast, Scope::new()).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.get_internal_error(), &ErrorImpl::EmptyThenBranch);
    assert_eq!(error.to_string(), "semantic error: then-branch must be non-empty");
}

#[test]
fn test_decimal_not_assignable_to_integer() {
    let error = compile("LET x : Integer; x = 1.5;").unwrap_err();

    assert_eq!(
        error.to_string(),
        "semantic error: type Decimal is not assignable to type Integer"
    );
}

#[test]
fn test_unknown_function_arity() {
    let error = compile("print(1, 2);").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnknownFunction {
            function: "print".to_string(),
            arity: 2
        }
    );
    assert_eq!(error.to_string(), "semantic error: unknown function print/2");
}

#[test]
fn test_each_stage_reports_its_own_kind() {
    let lexical = compile("LET s : String = \"open;").unwrap_err();
    assert_eq!(lexical.get_kind(), ErrorKind::Lexical);
    assert_eq!(lexical.get_position(), Some(&Position(17)));

    let syntax = compile("LET x : Integer = 1").unwrap_err();
    assert_eq!(syntax.get_kind(), ErrorKind::Syntax);

    let semantic = compile("print(y);").unwrap_err();
    assert_eq!(semantic.get_kind(), ErrorKind::Semantic);
    assert!(semantic.get_position().is_none());
}

#[test]
fn test_custom_library_and_seeded_scope() {
    let mut library = Stdlib::default();
    library.define(Function::new(
        "max",
        vec![Type::Integer, Type::Integer],
        Type::Integer,
        "Math.max",
    ));
    let mut root = Scope::new();
    root.define("limit", Type::Integer);

    let ast = parse(scan("print(max(limit, 10));").unwrap()).unwrap();
    let typed = analyze_with(&ast, root, &library).unwrap();

    assert!(generate(&typed).contains("System.out.println(Math.max(limit, 10));"));
}

#[test]
fn test_display_error_for_syntax_error() {
    let source = "LET x : Integer = 1;\nIF x THEN";
    let error = compile(source).unwrap_err();

    let rendered = display_error(&error, source, "program.src");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "-> program.src");
    assert_eq!(lines[3], "2 | IF x THEN");
    assert_eq!(lines[4], "  | ---------^");
}

#[test]
fn test_display_error_for_semantic_error() {
    let error = compile("print(1, 2);").unwrap_err();

    let rendered = display_error(&error, "print(1, 2);", "program.src");
    assert_eq!(
        rendered,
        "Error: UnknownFunction (No function `print` takes 2 argument(s))\n\
         -> program.src\n   unknown function print/2\n"
    );
}
