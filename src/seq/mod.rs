//! Circular indexing and suffix matching over slices.
//!
//! Negative indices count from the end and out-of-range indices wrap, so
//! `slice_at(s, -1)` is the last element for any non-empty `s`.

/// Normalizes `index` into `[0, len)` with Euclidean wraparound.
///
/// # Panics
///
/// Panics if `len` is zero.
///
/// # Example
///
/// ```
/// use splitrs::seq::wrap_index;
///
/// assert_eq!(wrap_index(5, -1), 4);
/// assert_eq!(wrap_index(5, 5), 0);
/// assert_eq!(wrap_index(5, -6), 4);
/// ```
#[inline]
pub fn wrap_index(len: usize, index: isize) -> usize {
    match checked_wrap_index(len, index) {
        Some(i) => i,
        None => panic!("wrap_index: cannot index into an empty sequence"),
    }
}

/// Like [`wrap_index`], returning `None` for an empty sequence.
#[inline]
pub fn checked_wrap_index(len: usize, index: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index as i128).rem_euclid(len as i128) as usize)
}

/// Returns the element at the wrapped position `index`.
///
/// # Panics
///
/// Panics if `slice` is empty.
#[inline]
pub fn slice_at<T>(slice: &[T], index: isize) -> &T {
    &slice[wrap_index(slice.len(), index)]
}

/// Returns true if `source` ends with `suffix`.
///
/// An empty `source` or an empty `suffix` never matches. Elements are compared
/// from the tail (`-1`, `-2`, ...) and the first mismatch stops the scan.
///
/// # Example
///
/// ```
/// use splitrs::seq::ends_with;
///
/// assert!(ends_with(b"a\r\n", b"\r\n"));
/// assert!(!ends_with(b"a\r\n", b""));
/// assert!(!ends_with(b"\n", b"\r\n"));
/// ```
pub fn ends_with<T: PartialEq>(source: &[T], suffix: &[T]) -> bool {
    if suffix.len() > source.len() || suffix.is_empty() || source.is_empty() {
        return false;
    }

    (1..=suffix.len() as isize).all(|back| slice_at(suffix, -back) == slice_at(source, -back))
}
