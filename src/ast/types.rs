use std::fmt::Display;

/// The closed set of types known to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Integer,
    Decimal,
    String,
    /// No value; never the type of a variable.
    Void,
    /// Parameter-only wildcard accepting any non-void argument.
    Any,
}

impl Type {
    /// The name used for this type in source programs.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Boolean => "Boolean",
            Type::Integer => "Integer",
            Type::Decimal => "Decimal",
            Type::String => "String",
            Type::Void => "Void",
            Type::Any => "Any",
        }
    }

    /// The Java spelling of this type.
    pub fn target_name(&self) -> &'static str {
        match self {
            Type::Boolean => "boolean",
            Type::Integer => "int",
            Type::Decimal => "double",
            Type::String => "String",
            Type::Void => "void",
            Type::Any => "Object",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer | Type::Decimal)
    }

    /// Whether a value of type `self` may be stored where `target` is expected.
    ///
    /// Identity always holds, Integer widens to Decimal, and every non-void
    /// type is accepted by Any.
    pub fn is_assignable_to(&self, target: Type) -> bool {
        *self == target
            || (*self == Type::Integer && target == Type::Decimal)
            || (*self != Type::Void && target == Type::Any)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
