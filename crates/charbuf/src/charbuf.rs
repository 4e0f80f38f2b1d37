use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Write as _};

use crate::{
    capacity::{self, DEFAULT_CAPACITY, LOAD_FACTOR_PERCENT, RESIZING_FACTOR},
    error::Error,
    search, storage,
    to_units::{ToUnits, push_display},
};

/// A growable character buffer backed by a single contiguous array.
///
/// The buffer tracks a logical `len` inside a physical `capacity`; cells in
/// `[len, capacity)` are stale and never read. Growth is lazy and doubling:
/// whenever an operation would push occupancy past the 75% load factor, the
/// array is reallocated at twice its size and the content copied over.
/// Capacity never shrinks over the buffer's lifetime.
///
/// Mutators return the buffer for chaining:
///
/// ```rust
/// use charbuf::CharBuf;
///
/// let mut buf = CharBuf::new();
/// buf.append('A').append('B').reverse();
/// assert_eq!(buf.to_text(), "BA");
/// ```
///
/// The storage is never exposed by reference; [`CharBuf::to_text`] copies
/// the logical content out.
#[derive(Clone)]
pub struct CharBuf {
    cells: Box<[char]>,
    len: usize,
}

impl CharBuf {
    /// Creates an empty buffer with the default capacity of 10 units.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with the given physical capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: storage::allocate(capacity),
            len: 0,
        }
    }

    /// Creates a buffer pre-populated with `initial`, sized by applying the
    /// default growth policy to its unit count.
    ///
    /// ```rust
    /// use charbuf::CharBuf;
    ///
    /// let buf = CharBuf::from_text("Test").unwrap();
    /// assert_eq!(buf.len(), 4);
    /// assert_eq!(buf.capacity(), 10);
    /// assert_eq!(buf.to_text(), "Test");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInitial`] if `initial` is empty; an empty
    /// starting value is a caller mistake, not a silently empty buffer.
    pub fn from_text(initial: &str) -> Result<Self, Error> {
        if initial.is_empty() {
            return Err(Error::EmptyInitial);
        }

        let units: Vec<char> = initial.chars().collect();
        let planned = capacity::required_capacity(DEFAULT_CAPACITY, 0, units.len());
        let mut cells = storage::allocate(planned);
        cells[..units.len()].copy_from_slice(&units);

        Ok(Self {
            cells,
            len: units.len(),
        })
    }

    /// Count of logically valid units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical size of the backing array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// The unit at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `position < len`.
    pub fn char_at(&self, position: usize) -> Result<char, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange {
                index: position,
                length: self.len,
            });
        }

        Ok(self.cells[position])
    }

    /// Appends the canonical unit representation of `value`.
    ///
    /// ```rust
    /// use charbuf::CharBuf;
    ///
    /// let mut buf = CharBuf::new();
    /// buf.append(1).append('.').append(true);
    /// assert_eq!(buf.to_text(), "1.true");
    /// ```
    pub fn append<T: ToUnits>(&mut self, value: T) -> &mut Self {
        let mut units = Vec::new();
        value.extend_units(&mut units);
        self.splice(self.len, &units);
        self
    }

    /// Appends the `Display` rendering of an arbitrary value.
    pub fn append_display(&mut self, value: impl fmt::Display) -> &mut Self {
        let mut units = Vec::new();
        push_display(&mut units, value);
        self.splice(self.len, &units);
        self
    }

    /// Inserts the canonical unit representation of `value` at `offset`,
    /// shifting the tail right. Inserting at `offset == len` is an append.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `offset <= len`; the buffer is
    /// untouched on error.
    pub fn insert<T: ToUnits>(&mut self, offset: usize, value: T) -> Result<&mut Self, Error> {
        self.check_offset(offset)?;

        let mut units = Vec::new();
        value.extend_units(&mut units);
        self.splice(offset, &units);
        Ok(self)
    }

    /// Inserts the `Display` rendering of an arbitrary value at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `offset <= len`.
    pub fn insert_display(
        &mut self,
        offset: usize,
        value: impl fmt::Display,
    ) -> Result<&mut Self, Error> {
        self.check_offset(offset)?;

        let mut units = Vec::new();
        push_display(&mut units, value);
        self.splice(offset, &units);
        Ok(self)
    }

    /// Removes the unit at `position`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `position < len`.
    pub fn delete_char_at(&mut self, position: usize) -> Result<&mut Self, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange {
                index: position,
                length: self.len,
            });
        }

        storage::shift_left(&mut self.cells, position, position + 1, self.len);
        self.len -= 1;
        Ok(self)
    }

    /// Removes the units in `[start, end)`, shifting the tail left.
    /// Capacity is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `start < len`, `end <= len`, and
    /// `start <= end`. Bounds are checked against the logical length, never
    /// the capacity, and the buffer is untouched on error.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<&mut Self, Error> {
        if start >= self.len {
            return Err(Error::OutOfRange {
                index: start,
                length: self.len,
            });
        }
        if end > self.len {
            return Err(Error::OutOfRange {
                index: end,
                length: self.len,
            });
        }
        if start > end {
            return Err(Error::OutOfRange {
                index: start,
                length: self.len,
            });
        }

        storage::shift_left(&mut self.cells, start, end, self.len);
        self.len -= end - start;
        Ok(self)
    }

    /// Reverses the logical content in place with a two-pointer swap; a
    /// buffer of length 0 or 1 is left unchanged. No allocation.
    pub fn reverse(&mut self) -> &mut Self {
        self.cells[..self.len].reverse();
        self
    }

    /// First starting index of `needle` in the content, or `None`.
    #[must_use]
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.index_of_from(needle, 0)
    }

    /// First starting index of `needle` at or after `from`, or `None`. An
    /// empty needle matches at the clamped `from`.
    #[must_use]
    pub fn index_of_from(&self, needle: &str, from: usize) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        search::find_forward(self.units(), &needle, from)
    }

    /// Last starting index of `needle` in the content, or `None`.
    #[must_use]
    pub fn last_index_of(&self, needle: &str) -> Option<usize> {
        self.last_index_of_from(needle, self.len)
    }

    /// Last starting index of `needle` at or before `from`, or `None`.
    #[must_use]
    pub fn last_index_of_from(&self, needle: &str, from: usize) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        search::find_backward(self.units(), &needle, from)
    }

    /// Materializes the logical content as a fresh `String`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.units().iter().collect()
    }

    fn units(&self) -> &[char] {
        &self.cells[..self.len]
    }

    fn check_offset(&self, offset: usize) -> Result<(), Error> {
        if offset > self.len {
            return Err(Error::OutOfRange {
                index: offset,
                length: self.len,
            });
        }
        Ok(())
    }

    /// Writes `units` at `offset`, shifting the tail right; append is the
    /// `offset == len` degenerate case. Single-unit writes take the direct
    /// path and run the lazy resize probe afterwards, which is where the
    /// doubling cadence for unit-at-a-time building comes from.
    fn splice(&mut self, offset: usize, units: &[char]) {
        match units {
            [] => {}
            &[unit] => {
                self.ensure_space(1);
                storage::shift_right(&mut self.cells, offset, self.len, 1);
                self.cells[offset] = unit;
                self.len += 1;
                self.probe_resize();
            }
            _ => {
                self.ensure_space(units.len());
                storage::shift_right(&mut self.cells, offset, self.len, units.len());
                self.cells[offset..offset + units.len()].copy_from_slice(units);
                self.len += units.len();
            }
        }
    }

    /// Grows the backing array if `additional` more units would not fit
    /// within the load factor.
    fn ensure_space(&mut self, additional: usize) {
        let planned = capacity::required_capacity(self.capacity(), self.len, additional);
        if planned != self.capacity() {
            storage::grow(&mut self.cells, self.len, planned);
        }
    }

    /// Post-write occupancy check for single-unit mutations: doubles the
    /// capacity once occupancy reaches the load factor. Distinct from the
    /// planner's strictly-greater check; at exactly 75% the planner stays
    /// put and the probe fires.
    fn probe_resize(&mut self) {
        if capacity::occupancy_percent(self.len, self.capacity()) >= LOAD_FACTOR_PERCENT {
            let doubled = self.capacity() * RESIZING_FACTOR;
            storage::grow(&mut self.cells, self.len, doubled);
        }
    }
}

impl Default for CharBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &unit in self.units() {
            f.write_char(unit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharBuf")
            .field("text", &self.to_text())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Equality is over the logical content only; stale cells and capacity are
/// ignored.
impl PartialEq for CharBuf {
    fn eq(&self, other: &Self) -> bool {
        self.units() == other.units()
    }
}

impl Eq for CharBuf {}

impl TryFrom<&str> for CharBuf {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_text(value)
    }
}

impl fmt::Write for CharBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append(c);
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::String;

    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::CharBuf;

    impl Serialize for CharBuf {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_text())
        }
    }

    impl<'de> Deserialize<'de> for CharBuf {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            CharBuf::from_text(&text).map_err(de::Error::custom)
        }
    }
}
