//! Small constructors for test fixture data.

/// Fixed-size array as a boxed slice.
pub fn array<T, const N: usize>(items: [T; N]) -> Box<[T]> {
    Box::new(items)
}

/// Heterogeneous fixtures go through `Box<dyn Instance>` or similar; the
/// shape is the same as [`array`].
pub fn object_array<T, const N: usize>(items: [T; N]) -> Box<[T]> {
    array(items)
}

/// Growable list holding `items`.
pub fn as_list<T, const N: usize>(items: [T; N]) -> Vec<T> {
    Vec::from(items)
}

pub fn empty_list<T>() -> Vec<T> {
    Vec::new()
}

/// Print a line to standard output.
pub fn println(s: &str) {
    println!("{}", s);
}
