//! Lexical analysis for the WLP4 teaching language.
//!
//! This module converts raw source bytes into a stream of tokens. It handles:
//!
//! - Character-class dispatch to one rule per token category
//! - Keywords, identifiers and bounded decimal numerals
//! - One- and two-character operators
//! - Whitespace and `//` line comments, which produce no tokens

pub mod lexer;
pub mod tokens;
