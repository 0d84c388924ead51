use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The single fatal error a scan can end with. Scanning stops at the first
/// one and no tokens are handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

pub type LexicalError = Error;

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::LeadingZero { .. } => "LeadingZero",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::IncompleteNotEquals => "IncompleteNotEquals",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::LeadingZero { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, only `0` itself may start with a zero",
                token
            )),
            ErrorImpl::NumberOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above {}?",
                token,
                i32::MAX
            )),
            ErrorImpl::IncompleteNotEquals => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character}")]
    UnrecognisedCharacter { character: String },
    #[error("number with leading zero: {token:?}")]
    LeadingZero { token: String },
    #[error("number out of range: {token:?}")]
    NumberOutOfRange { token: String },
    #[error("`!` not followed by `=`")]
    IncompleteNotEquals,
}

impl ErrorImpl {
    /// Builds the unrecognised-character variant for a raw input byte,
    /// escaping anything that is not printable ASCII.
    pub fn unrecognised(byte: u8) -> Self {
        ErrorImpl::UnrecognisedCharacter {
            character: format!("'{}'", byte.escape_ascii()),
        }
    }
}
