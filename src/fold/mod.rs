//! Order-preserving fold, map and for-each combinators.
//!
//! Everything here is built on two primitives:
//!
//! - [`reduce`] - total left fold
//! - [`reduce_err`] - left fold that stops at the first failure
//!
//! [`map`], [`map_err`], [`for_each_err`] and [`for_each_err_with`] are
//! specializations of those two with a `Vec` or unit accumulator. The index
//! handed to every callback is the zero-based position in the source sequence.
//!
//! # Example
//!
//! ```
//! use splitrs::fold::{map_err, reduce};
//!
//! let total = reduce([1, 2, 3], |x, acc, _| acc + x, 0);
//! assert_eq!(total, 6);
//!
//! let parsed = map_err(["1", "2", "x"], |s, _| s.parse::<u8>());
//! let err = parsed.unwrap_err();
//! assert_eq!(err.index, 2);
//! assert_eq!(err.partial, vec![1, 2]);
//! ```

use std::fmt;

/// A fold that was stopped by a failing callback.
///
/// Carries the accumulated value as it stood when the callback failed, the
/// index of the failing element and the error itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldError<A, E> {
    /// Accumulated value at the point of failure.
    pub partial: A,
    /// Zero-based index of the element whose callback failed.
    pub index: usize,
    /// The error returned by the callback.
    pub error: E,
}

impl<A, E> FoldError<A, E> {
    /// Discards the partial value and returns the error.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Splits into `(partial, error)`.
    pub fn into_parts(self) -> (A, E) {
        (self.partial, self.error)
    }
}

impl<A, E: fmt::Display> fmt::Display for FoldError<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stopped at index {}: {}", self.index, self.error)
    }
}

impl<A, E> std::error::Error for FoldError<A, E>
where
    A: fmt::Debug,
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Left fold over `seq`, calling `combine(element, acc, index)` for each
/// element in order.
///
/// Returns `initial` untouched for an empty sequence.
pub fn reduce<I, A, F>(seq: I, mut combine: F, initial: A) -> A
where
    I: IntoIterator,
    F: FnMut(I::Item, A, usize) -> A,
{
    let mut acc = initial;
    for (index, item) in seq.into_iter().enumerate() {
        acc = combine(item, acc, index);
    }
    acc
}

/// Left fold that stops at the first failing `combine`.
///
/// `combine` receives the accumulator by mutable reference so the value it
/// held at the failure point can be returned in [`FoldError::partial`].
/// Elements after the failing one are never visited.
pub fn reduce_err<I, A, E, F>(seq: I, mut combine: F, initial: A) -> Result<A, FoldError<A, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item, &mut A, usize) -> Result<(), E>,
{
    let mut acc = initial;
    for (index, item) in seq.into_iter().enumerate() {
        if let Err(error) = combine(item, &mut acc, index) {
            return Err(FoldError {
                partial: acc,
                index,
                error,
            });
        }
    }
    Ok(acc)
}

/// Maps every element through `f(element, index)`, preserving order.
pub fn map<I, U, F>(seq: I, mut f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    let iter = seq.into_iter();
    let out = Vec::with_capacity(iter.size_hint().0);
    reduce(
        iter,
        |item, mut out: Vec<U>, index| {
            debug_assert_eq!(out.len(), index);
            out.push(f(item, index));
            out
        },
        out,
    )
}

/// Maps every element through a fallible `f(element, index)`.
///
/// On failure the returned [`FoldError`] holds the results produced before
/// the failing index, in order. The output is never padded to the input's
/// length: positions at and after the failure are absent rather than filled
/// with placeholder values, so `partial.len() == index`.
pub fn map_err<I, U, E, F>(seq: I, mut f: F) -> Result<Vec<U>, FoldError<Vec<U>, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<U, E>,
{
    let iter = seq.into_iter();
    let out = Vec::with_capacity(iter.size_hint().0);
    reduce_err(
        iter,
        |item, out: &mut Vec<U>, index| {
            out.push(f(item, index)?);
            Ok(())
        },
        out,
    )
}

/// Calls `f(element, index)` for each element, stopping at the first error.
pub fn for_each_err<I, E, F>(seq: I, mut f: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<(), E>,
{
    reduce_err(seq, |item, _: &mut (), index| f(item, index), ()).map_err(FoldError::into_error)
}

/// Like [`for_each_err`], threading a shared context value through every call
/// as `f(ctx, element, index)`.
pub fn for_each_err_with<I, C, E, F>(seq: I, ctx: &mut C, mut f: F) -> Result<(), E>
where
    I: IntoIterator,
    C: ?Sized,
    F: FnMut(&mut C, I::Item, usize) -> Result<(), E>,
{
    for_each_err(seq, |item, index| f(ctx, item, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_empty_returns_initial() {
        let mut calls = 0;
        let out = reduce(
            Vec::<u32>::new(),
            |_, acc, _| {
                calls += 1;
                acc
            },
            42,
        );
        assert_eq!(out, 42);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reduce_passes_indices_in_order() {
        let seen = reduce(
            ["a", "b", "c"],
            |item, mut acc: Vec<(usize, &str)>, i| {
                acc.push((i, item));
                acc
            },
            Vec::new(),
        );
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_reduce_err_short_circuits() {
        let mut visited = Vec::new();
        let res = reduce_err(
            0..10,
            |x, acc: &mut i32, i| {
                visited.push(i);
                if x == 3 {
                    return Err("three");
                }
                *acc += x;
                Ok(())
            },
            0,
        );
        let err = res.unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.error, "three");
        assert_eq!(err.partial, 3);
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reduce_err_ok() {
        let res: Result<i32, FoldError<i32, ()>> = reduce_err(
            [1, 2, 3],
            |x, acc, _| {
                *acc *= x;
                Ok(())
            },
            1,
        );
        assert_eq!(res, Ok(6));
    }

    #[test]
    fn test_map_preserves_order_and_index() {
        let out = map(vec![10, 20, 30], |x, i| x + i);
        assert_eq!(out, vec![10, 21, 32]);
        assert!(map(Vec::<u8>::new(), |x, _| x).is_empty());
    }

    #[test]
    fn test_map_err_partial_output() {
        let err = map_err([2u32, 4, 5, 6], |x, _| if x % 2 == 0 { Ok(x / 2) } else { Err(x) })
            .unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.error, 5);
        assert_eq!(err.partial, vec![1, 2]);
        assert_eq!(err.partial.len(), err.index);
    }

    #[test]
    fn test_for_each_err_stops() {
        let mut seen = Vec::new();
        let res = for_each_err(["ok", "ok", "bad", "ok"], |s, i| {
            seen.push(i);
            if s == "bad" { Err(i) } else { Ok(()) }
        });
        assert_eq!(res, Err(2));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_for_each_err_with_context() {
        let mut sum = 0u32;
        let res: Result<(), ()> = for_each_err_with([1u32, 2, 3], &mut sum, |sum, x, _| {
            *sum += x;
            Ok(())
        });
        assert!(res.is_ok());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_fold_error_display() {
        let err = FoldError {
            partial: (),
            index: 7,
            error: "boom",
        };
        assert_eq!(err.to_string(), "stopped at index 7: boom");
    }
}
