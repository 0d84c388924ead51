#![allow(clippy::module_inception)]

pub mod config;
pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

pub use errors::errors::{Error, ErrorImpl, LexicalError};
pub use lexer::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};
