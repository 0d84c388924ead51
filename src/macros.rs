//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-character tokens

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a lexer handler for a token that is exactly one character long
/// and needs no lookahead.
///
/// The generated handler consumes the current character and pushes a token
/// with the given kind and literal value.
///
/// # Example
///
/// ```ignore
/// let handler: Handler = MK_DEFAULT_HANDLER!(TokenKind::Plus, "+");
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer| -> Result<(), Error> {
            lexer.advance_n($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value)));
            Ok(())
        }
    };
}
