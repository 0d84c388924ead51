//! Error types for lexical analysis.
//!
//! There is exactly one family of failure, the lexical error. It covers:
//!
//! - Characters outside the language's alphabet
//! - Malformed numerals (leading zeros, values above `i32::MAX`)
//! - A `!` that does not form `!=`
//!
//! Every error carries the byte offset where the offending lexeme starts.

pub mod errors;

#[cfg(test)]
mod tests;
