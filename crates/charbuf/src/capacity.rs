//! Capacity planning for the buffer engine.
//!
//! [`required_capacity`] is the single source of truth for when the backing
//! array must grow: starting from the current capacity it doubles until the
//! requested number of additional units fits *and* the resulting occupancy
//! stays at or below the load factor. It only computes; growth is executed
//! by [`crate::storage::grow`].

/// Capacity of a buffer created without an explicit capacity, and the
/// starting point for planning on a zero-capacity buffer.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// Multiplier applied on each growth step.
pub(crate) const RESIZING_FACTOR: usize = 2;

/// Occupancy threshold, in whole percent, that triggers growth.
pub(crate) const LOAD_FACTOR_PERCENT: u32 = 75;

/// Occupancy of `units` in a `capacity`-sized array, rounded to the nearest
/// whole percent.
///
/// The rounding is observable at the load-factor boundary (149 units in a
/// 200-unit array rounds to 75%) and is part of the growth cadence contract.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn occupancy_percent(units: usize, capacity: usize) -> u32 {
    debug_assert!(capacity > 0, "occupancy of a zero-capacity array");
    // `f64::round` is unavailable in `no_std`; adding 0.5 and truncating is
    // the same round-to-nearest for the non-negative ratios seen here.
    ((units as f64 / capacity as f64) * 100.0 + 0.5) as u32
}

/// Smallest capacity, reachable from `capacity` by doubling, that holds
/// `length + additional` units at or below the load factor.
///
/// Pure and idempotent: it never mutates anything, and planning again with
/// the same arguments yields the same answer. A `capacity` of zero plans
/// from [`DEFAULT_CAPACITY`] instead, since doubling zero goes nowhere.
pub(crate) fn required_capacity(capacity: usize, length: usize, additional: usize) -> usize {
    let mut planned = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };

    while planned - length < additional
        || occupancy_percent(length + additional, planned) > LOAD_FACTOR_PERCENT
    {
        planned *= RESIZING_FACTOR;
    }

    planned
}
