use crate::assertions::errors::{report, AssertionFailure, Result};
use std::any::{type_name, Any};

/// Runtime type information for any `'static` value.
///
/// Blanket-implemented, so any value can be passed as `&dyn Instance`.
pub trait Instance: Any {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Instance for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Check that `value` is present and is a `T`, returning it typed.
pub fn check_instance_of<'a, T: Any>(message: &str, value: Option<&'a dyn Instance>) -> Result<&'a T> {
    let Some(value) = value else {
        return Err(AssertionFailure::mismatch(format!(
            "{}\r\nExpected {} but object was null.",
            message,
            type_name::<T>()
        )));
    };

    value.as_any().downcast_ref::<T>().ok_or_else(|| {
        AssertionFailure::mismatch(format!(
            "{}\r\nExpected {} but got {}",
            message,
            type_name::<T>(),
            value.type_name()
        ))
    })
}

#[track_caller]
pub fn assert_instance_of<'a, T: Any>(message: &str, value: Option<&'a dyn Instance>) -> &'a T {
    report(check_instance_of(message, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct SmsMessage(String);

    #[test]
    fn test_matching_type_returns_value() {
        let sms = SmsMessage("hi".into());
        let found: &SmsMessage = check_instance_of("outgoing", Some(&sms)).unwrap();
        assert_eq!(found, &sms);
    }

    #[test]
    fn test_blank_message_accepted() {
        let value = 5u32;
        assert_eq!(check_instance_of::<u32>("", Some(&value)), Ok(&5));
        assert!(check_instance_of::<SmsMessage>("", Some(&value)).is_err());
    }

    #[test]
    fn test_null_value() {
        let err = check_instance_of::<SmsMessage>("outgoing", None).unwrap_err();
        assert!(err.to_string().ends_with("but object was null."));
        assert!(err.to_string().starts_with("outgoing\r\nExpected "));
    }

    #[test]
    fn test_wrong_type_names_actual_type() {
        let value = 42u32;
        let err = check_instance_of::<SmsMessage>("outgoing", Some(&value)).unwrap_err();
        assert!(err.to_string().contains("SmsMessage but got u32"));
    }
}
