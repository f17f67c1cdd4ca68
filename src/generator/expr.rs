use crate::analyzer::typed_ast::{TypedCallExpr, TypedExpr, Value};

use super::generator::Generator;

/// Writes the Java text for the given expression.
pub fn gen_expression(generator: &mut Generator, expression: &TypedExpr) {
    match expression {
        TypedExpr::Literal(literal) => generator.write(&gen_value(&literal.value)),
        TypedExpr::Group(group) => {
            generator.write("(");
            gen_expression(generator, &group.expression);
            generator.write(")");
        }
        TypedExpr::Binary(binary) => {
            gen_expression(generator, &binary.left);
            generator.write(" ");
            generator.write(binary.operator.symbol());
            generator.write(" ");
            gen_expression(generator, &binary.right);
        }
        TypedExpr::Variable(variable) => generator.write(&variable.name),
        TypedExpr::Function(call) => gen_call(generator, call),
    }
}

fn gen_call(generator: &mut Generator, call: &TypedCallExpr) {
    generator.write(&call.callee);
    generator.write("(");
    for (i, argument) in call.arguments.iter().enumerate() {
        if i > 0 {
            generator.write(", ");
        }
        gen_expression(generator, argument);
    }
    generator.write(")");
}

/// Java literal text for a canonical value. Decimals always keep a
/// fractional part or exponent so they stay `double` literals.
pub fn gen_value(value: &Value) -> String {
    match value {
        Value::Boolean(value) => value.to_string(),
        Value::Integer(value) => value.to_string(),
        Value::Decimal(value) => format!("{:?}", value),
        Value::String(value) => format!("\"{}\"", value),
    }
}
