use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Largest value a `NUM` token may denote.
pub const MAX_NUMERAL: u32 = i32::MAX as u32;

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

pub type Handler = fn(&mut Lexer) -> Result<(), Error>;

#[derive(Clone, Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<u8>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: Vec<u8>) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.value, "token");
        self.tokens.push(token);
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    pub fn consume(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    pub fn remainder(&self) -> &[u8] {
        &self.source[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the longest run at the cursor that `regex` matches and
    /// returns it as text.
    fn take_run(&mut self, regex: &Regex) -> String {
        let len = regex.find(self.remainder()).map_or(0, |m| m.end());
        let run = String::from_utf8_lossy(&self.remainder()[..len]).into_owned();
        self.advance_n(len);
        run
    }

    /// Consumes the operator character, then `=` if it follows, and pushes
    /// the matching one- or two-character token.
    fn push_with_equals(&mut self, single: TokenKind, double: TokenKind) {
        self.consume();

        let kind = if self.peek() == Some(b'=') {
            self.consume();
            double
        } else {
            single
        };

        if let Some(token) = Token::fixed(kind) {
            self.push(token);
        }
    }
}

fn symbol_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let value = lexer.take_run(&SYMBOL_PATTERN);

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value));
    Ok(())
}

fn number_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos();
    let value = lexer.take_run(&NUMBER_PATTERN);

    parse_numeral(value.as_bytes()).map_err(|error| Error::new(error, Position(start)))?;

    lexer.push(MK_TOKEN!(TokenKind::Number, value));
    Ok(())
}

fn slash_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.consume();

    if lexer.peek() != Some(b'/') {
        lexer.push(MK_TOKEN!(TokenKind::Slash, String::from("/")));
        return Ok(());
    }

    // The line terminator is left for skip_handler; end of input also ends the comment.
    lexer.consume();
    while let Some(byte) = lexer.peek() {
        if byte == b'\n' || byte == b'\r' {
            break;
        }
        lexer.consume();
    }

    Ok(())
}

fn equals_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.push_with_equals(TokenKind::Assignment, TokenKind::Equals);
    Ok(())
}

fn less_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.push_with_equals(TokenKind::Less, TokenKind::LessEquals);
    Ok(())
}

fn greater_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.push_with_equals(TokenKind::Greater, TokenKind::GreaterEquals);
    Ok(())
}

fn not_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.pos();
    lexer.consume();

    if lexer.peek() != Some(b'=') {
        return Err(Error::new(ErrorImpl::IncompleteNotEquals, Position(start)));
    }

    lexer.consume();
    lexer.push(MK_TOKEN!(TokenKind::NotEquals, String::from("!=")));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer) -> Result<(), Error> {
    while let Some(byte) = lexer.peek() {
        if !is_whitespace(byte) {
            break;
        }
        lexer.consume();
    }

    Ok(())
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Picks the rule for the character at the cursor, or `None` when no token
/// can start with it.
fn dispatch(byte: u8) -> Option<Handler> {
    let handler: Handler = match byte {
        b'a'..=b'z' | b'A'..=b'Z' => symbol_handler,
        b'0'..=b'9' => number_handler,
        b'(' => MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "("),
        b')' => MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")"),
        b'{' => MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{"),
        b'}' => MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}"),
        b'[' => MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "["),
        b']' => MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]"),
        b'+' => MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
        b'-' => MK_DEFAULT_HANDLER!(TokenKind::Dash, "-"),
        b'*' => MK_DEFAULT_HANDLER!(TokenKind::Star, "*"),
        b'%' => MK_DEFAULT_HANDLER!(TokenKind::Percent, "%"),
        b'&' => MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&"),
        b',' => MK_DEFAULT_HANDLER!(TokenKind::Comma, ","),
        b';' => MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
        b'/' => slash_handler,
        b'=' => equals_handler,
        b'<' => less_handler,
        b'>' => greater_handler,
        b'!' => not_handler,
        b if is_whitespace(b) => skip_handler,
        _ => return None,
    };

    Some(handler)
}

/// Checks a run of decimal digits against the numeral rules: no leading
/// zeros (other than `0` itself) and a value no larger than `i32::MAX`.
pub fn parse_numeral(digits: &[u8]) -> Result<u32, ErrorImpl> {
    let token = || String::from_utf8_lossy(digits).into_owned();

    if digits.len() > 1 && digits[0] == b'0' {
        return Err(ErrorImpl::LeadingZero { token: token() });
    }

    if digits.is_empty() {
        return Err(ErrorImpl::NumberOutOfRange { token: token() });
    }

    let mut value: u32 = 0;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return Err(ErrorImpl::NumberOutOfRange { token: token() });
        }

        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(digit - b'0')))
            .filter(|v| *v <= MAX_NUMERAL)
            .ok_or_else(|| ErrorImpl::NumberOutOfRange { token: token() })?;
    }

    Ok(value)
}

pub fn tokenize(source: impl Into<Vec<u8>>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source.into());
    debug!(bytes = lex.source.len(), "scanning");

    while let Some(byte) = lex.peek() {
        let Some(handler) = dispatch(byte) else {
            let error = Error::new(ErrorImpl::unrecognised(byte), Position(lex.pos));
            debug!(%error, "scan aborted");
            return Err(error);
        };

        if let Err(error) = handler(&mut lex) {
            debug!(%error, "scan aborted");
            return Err(error);
        }
    }

    debug!(tokens = lex.tokens.len(), "scan complete");
    Ok(lex.tokens)
}
