//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::unrecognised(b'@'), Position(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            character: "'@'".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::LeadingZero {
            token: "01".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_names() {
    let leading = Error::new(
        ErrorImpl::LeadingZero {
            token: "007".to_string(),
        },
        Position(0),
    );
    let range = Error::new(
        ErrorImpl::NumberOutOfRange {
            token: "2147483648".to_string(),
        },
        Position(0),
    );
    let bang = Error::new(ErrorImpl::IncompleteNotEquals, Position(0));

    assert_eq!(leading.get_error_name(), "LeadingZero");
    assert_eq!(range.get_error_name(), "NumberOutOfRange");
    assert_eq!(bang.get_error_name(), "IncompleteNotEquals");
}

#[test]
fn test_unrecognised_escapes_control_bytes() {
    assert_eq!(
        ErrorImpl::unrecognised(0x00).to_string(),
        "unrecognised character: '\\x00'"
    );
    assert_eq!(
        ErrorImpl::unrecognised(0xff).to_string(),
        "unrecognised character: '\\xff'"
    );
}

#[test]
fn test_error_display_includes_offset() {
    let error = Error::new(ErrorImpl::IncompleteNotEquals, Position(7));

    assert_eq!(error.to_string(), "`!` not followed by `=` at byte 7");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::unrecognised(b'#'), Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NumberOutOfRange {
            token: "99999999999".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("2147483647")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
