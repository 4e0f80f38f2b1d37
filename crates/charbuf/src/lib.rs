//! A mutable, growable sequence-of-characters buffer backed by a single
//! contiguous array with explicit capacity control.
//!
//! [`CharBuf`] supports amortized-constant trailing append, positional
//! insertion and deletion, in-place reversal, and literal substring search.
//! The backing array starts at a default capacity of 10 units and doubles
//! whenever the occupancy would exceed a 75% load factor, so callers can
//! build up a text value incrementally without reallocating on every
//! single-character mutation. Capacity never shrinks.
//!
//! ```rust
//! use charbuf::CharBuf;
//!
//! let mut buf = CharBuf::new();
//! buf.append("Hi").append(' ').append(42);
//! assert_eq!(buf.to_text(), "Hi 42");
//! assert_eq!(buf.capacity(), 10);
//! ```
//!
//! The buffer operates on fixed-width `char` units; it is not grapheme-aware
//! and not safe for concurrent mutation.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod capacity;
mod charbuf;
mod error;
mod search;
mod storage;
mod to_units;

#[cfg(test)]
mod tests;

pub use charbuf::CharBuf;
pub use error::Error;
pub use to_units::ToUnits;
