//! Checks for the `PartialEq`/`Hash` contract: values that compare equal in
//! both directions must hash identically.

use crate::assertions::errors::{report, AssertionFailure, Result};
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

const MISSING_FIRST: &str = "You must provide at least one non-null object to this method.";

pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `a` and `b` are equal both ways and share a hash.
///
/// An absent `b` never equals `a`, so it always fails here.
pub fn check_equals_hashcode_true<A, B>(a: Option<&A>, b: Option<&B>) -> Result<()>
where
    A: PartialEq<B> + Hash + Debug,
    B: PartialEq<A> + Hash + Debug,
{
    let a = a.ok_or_else(|| AssertionFailure::precondition(MISSING_FIRST))?;
    let Some(b) = b else {
        return Err(AssertionFailure::mismatch(format!(
            "expected {:?} to equal None",
            a
        )));
    };

    if a != b {
        return Err(AssertionFailure::mismatch(format!(
            "expected {:?} to equal {:?}",
            a, b
        )));
    }
    if b != a {
        return Err(AssertionFailure::mismatch(format!(
            "equality is not symmetric: {:?} does not equal {:?}",
            b, a
        )));
    }
    let (ha, hb) = (hash_of(a), hash_of(b));
    if ha != hb {
        return Err(AssertionFailure::mismatch(format!(
            "equal values must share a hash: {:?} hashed to {} but {:?} hashed to {}",
            a, ha, b, hb
        )));
    }
    Ok(())
}

/// `a` and `b` are unequal both ways and hash differently.
pub fn check_equals_hashcode_false<A, B>(a: Option<&A>, b: Option<&B>) -> Result<()>
where
    A: PartialEq<B> + Hash + Debug,
    B: PartialEq<A> + Hash + Debug,
{
    let a = a.ok_or_else(|| AssertionFailure::precondition(MISSING_FIRST))?;
    let Some(b) = b else {
        return Ok(());
    };

    if a == b {
        return Err(AssertionFailure::mismatch(format!(
            "expected {:?} not to equal {:?}",
            a, b
        )));
    }
    if b == a {
        return Err(AssertionFailure::mismatch(format!(
            "equality is not symmetric: {:?} equals {:?}",
            b, a
        )));
    }
    if hash_of(a) == hash_of(b) {
        return Err(AssertionFailure::mismatch(format!(
            "expected different hashes for {:?} and {:?}",
            a, b
        )));
    }
    Ok(())
}

#[track_caller]
pub fn assert_equals_hashcode_true<A, B>(a: Option<&A>, b: Option<&B>)
where
    A: PartialEq<B> + Hash + Debug,
    B: PartialEq<A> + Hash + Debug,
{
    report(check_equals_hashcode_true(a, b))
}

#[track_caller]
pub fn assert_equals_hashcode_false<A, B>(a: Option<&A>, b: Option<&B>)
where
    A: PartialEq<B> + Hash + Debug,
    B: PartialEq<A> + Hash + Debug,
{
    report(check_equals_hashcode_false(a, b))
}
