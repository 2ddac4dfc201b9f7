//! Structural assertions with descriptive failure messages.
//!
//! Each check comes in two flavours: `check_*` returns the failure as a value
//! and `assert_*` fails the running test with it.

pub mod arrays;
pub mod contracts;
pub mod dates;
pub mod errors;
pub mod streams;
pub mod strings;
pub mod types;

pub use arrays::{assert_slices_eq, assert_slices_eq_unlabelled, check_slices_eq};
pub use contracts::{
    assert_equals_hashcode_false, assert_equals_hashcode_true, check_equals_hashcode_false,
    check_equals_hashcode_true,
};
pub use dates::{
    assert_date_millis_eq, assert_dates_eq, check_date_millis_eq, check_dates_eq, TimeDifference,
};
pub use errors::{fail, fail_todo, AssertionFailure};
pub use streams::{
    assert_async_readers_eq, assert_readers_eq, assert_readers_eq_unlabelled,
    check_async_readers_eq, check_readers_eq,
};
pub use strings::{assert_str_eq, check_str_eq};
pub use types::{assert_instance_of, check_instance_of, Instance};
