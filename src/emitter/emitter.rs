use std::io::{self, Write};

use crate::lexer::tokens::Token;

/// Writes one `KIND LEXEME` line per token, in stream order.
pub fn emit(tokens: &[Token], out: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}

/// Renders the stream into memory so nothing reaches the real output
/// until the caller decides to flush it.
pub fn render(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.len() + 8).sum());

    for token in tokens {
        result.push_str(token.kind.name());
        result.push(' ');
        result.push_str(&token.value);
        result.push('\n');
    }

    result
}
