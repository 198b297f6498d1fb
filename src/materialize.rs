//! Eager drains: the only operations here that pull more than one element
//! per call, and the only ones that return plain values instead of
//! sequences.

use crate::slice::slice;
use std::fmt::Display;

/// Drains `iterable` into a `Vec`, in order.
///
/// Never returns for an unbounded sequence; bound it first with `take` or
/// `slice`.
pub fn to_vec<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    iterable.into_iter().collect()
}

/// Returns the element at position `n`, or `None` if the sequence is
/// shorter than that.
pub fn take_nth<I>(iterable: I, n: usize) -> Option<I::Item>
where
    I: IntoIterator,
{
    slice(iterable, n, n + 1).next()
}

/// Returns the first element, or `None` for an empty sequence.
pub fn first<I>(iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    take_nth(iterable, 0)
}

/// Returns the last element, or `None` for an empty sequence.
///
/// Requires a full traversal, O(length), with no shortcut even when the
/// source knows its size, so this also never returns for an unbounded
/// sequence.
pub fn last<I>(iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    let mut last = None;
    for x in iterable {
        last = Some(x);
    }
    last
}

/// Materializes `iterable` and concatenates the elements' display forms
/// with `sep` between consecutive pairs.
pub fn join<I>(iterable: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, x) in iterable.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&x.to_string());
    }
    out
}
