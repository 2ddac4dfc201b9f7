//! Element-by-element slice comparison.

use crate::assertions::errors::{report, AssertionFailure, Result};
use std::fmt::Debug;

/// Compare two slices of any comparable element type.
///
/// Lengths are checked before any element, then the first differing position
/// is reported. An empty or blank `message` is rejected with
/// [`AssertionFailure::MissingMessage`].
pub fn check_slices_eq<T>(message: &str, expected: &[T], actual: &[T]) -> Result<()>
where
    T: PartialEq + Debug,
{
    require_message(message)?;

    if expected.len() != actual.len() {
        return Err(AssertionFailure::not_equal(
            &format!("{} (different lengths)", message),
            expected.len(),
            actual.len(),
        ));
    }

    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            return Err(AssertionFailure::not_equal(
                &format!("{} (error found at position {})", message, i),
                e,
                a,
            ));
        }
    }

    Ok(())
}

#[track_caller]
pub fn assert_slices_eq<T>(message: &str, expected: &[T], actual: &[T])
where
    T: PartialEq + Debug,
{
    report(check_slices_eq(message, expected, actual))
}

/// Unlabelled comparison. Always fails: every slice comparison must say what
/// it is comparing.
#[track_caller]
pub fn assert_slices_eq_unlabelled<T>(_expected: &[T], _actual: &[T])
where
    T: PartialEq + Debug,
{
    report(Err(AssertionFailure::MissingMessage))
}

pub(crate) fn require_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(AssertionFailure::MissingMessage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_slices_pass() {
        assert!(check_slices_eq("bytes", &[1u8, 2, 3], &[1u8, 2, 3]).is_ok());
        assert!(check_slices_eq("empty", &[] as &[i64], &[]).is_ok());
        assert!(check_slices_eq("boxed", &[Some(1), None], &[Some(1), None]).is_ok());
    }

    #[test]
    fn test_length_mismatch_reported_first() {
        let err = check_slices_eq("ints", &[1, 2, 3], &[9, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ints (different lengths) expected:<3> but was:<2>"
        );
    }

    #[test]
    fn test_first_mismatch_position() {
        let err = check_slices_eq("words", &["a", "b", "c"], &["a", "x", "y"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "words (error found at position 1) expected:<\"b\"> but was:<\"x\">"
        );
    }

    #[test]
    fn test_blank_message_is_contract_violation() {
        assert_eq!(
            check_slices_eq("  ", &[1], &[1]),
            Err(AssertionFailure::MissingMessage)
        );
    }

    #[test]
    #[should_panic(expected = "should not be called without a message")]
    fn test_unlabelled_always_fails() {
        assert_slices_eq_unlabelled(&[1u8], &[1u8]);
    }
}
