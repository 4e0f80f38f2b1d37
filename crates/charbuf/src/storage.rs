//! Growth execution and element shifting over the owned backing array.
//!
//! These are the raw mechanisms the buffer's operations are built from:
//! allocate-and-copy growth, and the left/right shifts that open or close a
//! gap inside the occupied prefix. No capacity policy or bounds checking
//! lives here; callers plan first via [`crate::capacity`].

use alloc::{boxed::Box, vec};

/// Allocates a zero-filled backing array of `capacity` units.
pub(crate) fn allocate(capacity: usize) -> Box<[char]> {
    vec!['\0'; capacity].into_boxed_slice()
}

/// Replaces `cells` with a `new_capacity`-sized array holding the first
/// `len` units of the old one. Never called with a target below `len`.
pub(crate) fn grow(cells: &mut Box<[char]>, len: usize, new_capacity: usize) {
    debug_assert!(new_capacity >= len, "growth would drop occupied units");

    let mut grown = allocate(new_capacity);
    grown[..len].copy_from_slice(&cells[..len]);
    *cells = grown;
}

/// Moves the units in `[from, len)` forward by `count` positions, opening a
/// `count`-sized gap at `from`. The destination range must already fit:
/// `len + count <= cells.len()`.
pub(crate) fn shift_right(cells: &mut [char], from: usize, len: usize, count: usize) {
    debug_assert!(from <= len, "shift origin past the occupied prefix");
    debug_assert!(len + count <= cells.len(), "shift destination past capacity");

    cells.copy_within(from..len, from + count);
}

/// Closes the gap `[start, end)` by copying `[end, len)` down to `start`.
pub(crate) fn shift_left(cells: &mut [char], start: usize, end: usize, len: usize) {
    debug_assert!(start <= end && end <= len, "malformed gap");
    debug_assert!(len <= cells.len(), "occupied prefix past capacity");

    cells.copy_within(end..len, start);
}
