use crate::assertions::errors::{report, AssertionFailure, Result};

/// Compare two strings, pinpointing the first differing character.
///
/// When one string is a prefix of the other there is no differing character,
/// so the plain equality failure is returned instead.
pub fn check_str_eq(message: &str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        return Ok(());
    }

    match first_difference(expected, actual) {
        Some(index) => Err(AssertionFailure::Comparison {
            message: format!("Strings differ from character {}", index),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        None => Err(AssertionFailure::not_equal(message, expected, actual)),
    }
}

#[track_caller]
pub fn assert_str_eq(message: &str, expected: &str, actual: &str) {
    report(check_str_eq(message, expected, actual))
}

/// Character index of the first difference within the shared prefix length.
pub fn first_difference(a: &str, b: &str) -> Option<usize> {
    a.chars().zip(b.chars()).position(|(x, y)| x != y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_pass() {
        assert!(check_str_eq("greeting", "hello", "hello").is_ok());
    }

    #[test]
    fn test_blank_message_accepted() {
        assert!(check_str_eq("", "abc", "abc").is_ok());
        assert!(matches!(
            check_str_eq("", "abc", "abd"),
            Err(AssertionFailure::Comparison { .. })
        ));
    }

    #[test]
    fn test_reports_first_differing_character() {
        let err = check_str_eq("greeting", "hello", "help!").unwrap_err();
        match err {
            AssertionFailure::Comparison {
                message,
                expected,
                actual,
            } => {
                assert_eq!(message, "Strings differ from character 3");
                assert_eq!(expected, "hello");
                assert_eq!(actual, "help!");
            }
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_prefix_falls_back_to_plain_failure() {
        let err = check_str_eq("greeting", "hell", "hello").unwrap_err();
        assert_eq!(
            err,
            AssertionFailure::not_equal("greeting", "hell", "hello")
        );
    }

    #[test]
    fn test_first_difference_counts_characters() {
        assert_eq!(first_difference("héllo", "hélp"), Some(3));
        assert_eq!(first_difference("abc", "abc"), None);
    }
}
