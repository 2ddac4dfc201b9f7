use thiserror::Error;

/// Reason an assertion did not hold.
///
/// The `assert_*` helpers turn any of these into a panic carrying the
/// `Display` text, which is how the test harness reports a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    /// Plain comparison failure with a fully formatted message.
    #[error("{0}")]
    Mismatch(String),

    /// String comparison failure that located the first differing character.
    #[error("{message} expected:<{expected}> but was:<{actual}>")]
    Comparison {
        message: String,
        expected: String,
        actual: String,
    },

    /// A comparison was requested without a descriptive message.
    #[error("assert_equals should not be called without a message.")]
    MissingMessage,

    /// The caller broke a precondition of the assertion itself.
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

impl AssertionFailure {
    pub fn mismatch(message: impl Into<String>) -> Self {
        AssertionFailure::Mismatch(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        AssertionFailure::Precondition(message.into())
    }

    /// Standard `expected:<..> but was:<..>` failure.
    pub fn not_equal(
        message: &str,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        AssertionFailure::Mismatch(format!(
            "{} expected:<{:?}> but was:<{:?}>",
            message, expected, actual
        ))
    }

    /// True for failures caused by misuse of the assertion API rather than
    /// by the values under test.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AssertionFailure::MissingMessage | AssertionFailure::Precondition(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssertionFailure>;

/// Report a failure through the test harness.
#[track_caller]
pub fn fail(message: impl std::fmt::Display) -> ! {
    panic!("{}", message)
}

/// Mark an unfinished test. Always fails with `TODO: <message>`.
#[track_caller]
pub fn fail_todo(message: &str) -> ! {
    fail(format_args!("TODO: {}", message))
}

/// Unwrap a check result, failing the current test on error.
#[track_caller]
pub(crate) fn report<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(failure) => fail(failure),
    }
}
