//! Surface-syntax validation.
//!
//! Checks that the input only uses recognized characters and that its parentheses are
//! balanced and well-nested. Grammar is left to the [parser][crate::parser].

use crate::error::ValidationError;
use crate::types::{is_symbol_char, is_word_char};

/// Returns `true` if `text` passes [`validate`].
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

/// Validates the character set and parenthesis balance of `text`.
///
/// Stops at the first violation.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let mut depth: usize = 0;

    for (offset, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(ValidationError::UnbalancedClose { offset });
                }
                depth -= 1;
            }
            c if c.is_whitespace() || is_word_char(c) || is_symbol_char(c) => {}
            c => return Err(ValidationError::InvalidCharacter { ch: c, offset }),
        }
    }

    if depth != 0 {
        return Err(ValidationError::UnclosedParenthesis { open: depth });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_valid_symbols() {
        assert!(is_valid("( A | B ) & ( C  > D )"));
        assert!(is_valid("( 0 1 !&  asd | < > >>>   ^  A B C a b c not asdawfa )"));
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(!is_valid("( 0 1 !&  asd | < >  ^  A B C a b c -.-)"));
        assert_eq!(
            validate("(A | B) & (@C & D)"),
            Err(ValidationError::InvalidCharacter { ch: '@', offset: 11 })
        );
    }

    #[test]
    fn test_valid_parentheses() {
        assert!(is_valid("(A | B) & (C & D)"));
        assert!(is_valid("((A | B)) & ((C & D))"));
        assert!(is_valid(""));
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(
            validate("(A | B) & (C & D"),
            Err(ValidationError::UnclosedParenthesis { open: 1 })
        );
    }

    #[test]
    fn test_premature_close() {
        assert_eq!(
            validate("(A | B)) & (C & D"),
            Err(ValidationError::UnbalancedClose { offset: 7 })
        );
    }

    #[test]
    fn test_trailing_close() {
        assert_eq!(
            validate("(A | B) & (C & D))"),
            Err(ValidationError::UnbalancedClose { offset: 17 })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // The bad character comes before the unbalanced close.
        assert_eq!(
            validate("A . B)"),
            Err(ValidationError::InvalidCharacter { ch: '.', offset: 2 })
        );
    }
}
