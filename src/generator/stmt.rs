use crate::analyzer::typed_ast::{
    TypedAssignmentStmt, TypedDeclarationStmt, TypedIfStmt, TypedStmt, TypedWhileStmt,
};

use super::{expr::gen_expression, generator::Generator};

pub fn gen_statement(generator: &mut Generator, statement: &TypedStmt) {
    match statement {
        TypedStmt::Expression(expression_stmt) => {
            gen_expression(generator, &expression_stmt.expression);
            generator.write(";");
        }
        TypedStmt::Declaration(declaration) => gen_declaration(generator, declaration),
        TypedStmt::Assignment(assignment) => gen_assignment(generator, assignment),
        TypedStmt::If(if_stmt) => gen_if(generator, if_stmt),
        TypedStmt::While(while_stmt) => gen_while(generator, while_stmt),
    }
}

fn gen_declaration(generator: &mut Generator, declaration: &TypedDeclarationStmt) {
    generator.write(&declaration.type_name);
    generator.write(" ");
    generator.write(&declaration.identifier);
    if let Some(value) = &declaration.assigned_value {
        generator.write(" = ");
        gen_expression(generator, value);
    }
    generator.write(";");
}

fn gen_assignment(generator: &mut Generator, assignment: &TypedAssignmentStmt) {
    generator.write(&assignment.identifier);
    generator.write(" = ");
    gen_expression(generator, &assignment.value);
    generator.write(";");
}

fn gen_if(generator: &mut Generator, if_stmt: &TypedIfStmt) {
    generator.write("if (");
    gen_expression(generator, &if_stmt.condition);
    generator.write(") {");
    generator.gen_block(&if_stmt.then_body);
    generator.write("}");

    // No `else` at all when the branch is empty.
    if !if_stmt.else_body.is_empty() {
        generator.write(" else {");
        generator.gen_block(&if_stmt.else_body);
        generator.write("}");
    }
}

fn gen_while(generator: &mut Generator, while_stmt: &TypedWhileStmt) {
    generator.write("while (");
    gen_expression(generator, &while_stmt.condition);
    generator.write(") {");
    generator.gen_block(&while_stmt.body);
    generator.write("}");
}
