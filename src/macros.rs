//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Used by the scanner's pattern handlers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The exact lexeme
/// * `$offset` - Byte offset of the lexeme in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $offset:expr) => {
        Token {
            kind: $kind,
            value: $value,
            offset: $offset,
        }
    };
}
