//! Conversion of appendable value kinds into character units.
//!
//! Anything with a canonical unit representation can be appended to or
//! inserted into a [`CharBuf`](crate::CharBuf). Each supported kind gets its
//! own conversion impl rather than going through runtime type dispatch;
//! numeric kinds render their canonical decimal form, booleans render the
//! literal words `true` and `false`.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write as _};

/// A value kind with a canonical character-unit representation.
pub trait ToUnits {
    /// Appends the canonical unit representation of `self` to `out`.
    fn extend_units(&self, out: &mut Vec<char>);
}

impl<T: ToUnits + ?Sized> ToUnits for &T {
    fn extend_units(&self, out: &mut Vec<char>) {
        (**self).extend_units(out);
    }
}

impl ToUnits for char {
    fn extend_units(&self, out: &mut Vec<char>) {
        out.push(*self);
    }
}

impl ToUnits for str {
    fn extend_units(&self, out: &mut Vec<char>) {
        out.extend(self.chars());
    }
}

impl ToUnits for String {
    fn extend_units(&self, out: &mut Vec<char>) {
        self.as_str().extend_units(out);
    }
}

impl ToUnits for [char] {
    fn extend_units(&self, out: &mut Vec<char>) {
        out.extend_from_slice(self);
    }
}

impl ToUnits for bool {
    fn extend_units(&self, out: &mut Vec<char>) {
        let literal = if *self { "true" } else { "false" };
        out.extend(literal.chars());
    }
}

macro_rules! display_units {
    ($($kind:ty),* $(,)?) => {$(
        impl ToUnits for $kind {
            fn extend_units(&self, out: &mut Vec<char>) {
                push_display(out, self);
            }
        }
    )*};
}

display_units!(i32, i64, u32, u64, f32, f64);

/// Adapter that lets `core::fmt` machinery write directly into a unit
/// vector without an intermediate `String`.
struct UnitSink<'a>(&'a mut Vec<char>);

impl fmt::Write for UnitSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend(s.chars());
        Ok(())
    }
}

/// Renders `value` through its `Display` impl into `out`.
pub(crate) fn push_display(out: &mut Vec<char>, value: impl fmt::Display) {
    // UnitSink::write_str is infallible, so the formatting cannot fail.
    let _ = write!(UnitSink(out), "{value}");
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::{ToUnits, push_display};

    fn units_of(value: impl ToUnits) -> String {
        let mut out = Vec::new();
        value.extend_units(&mut out);
        out.into_iter().collect()
    }

    #[test]
    fn char_is_a_single_unit() {
        assert_eq!(units_of('A'), "A");
    }

    #[test]
    fn text_kinds_pass_through() {
        assert_eq!(units_of("Test"), "Test");
        assert_eq!(units_of(String::from("Test")), "Test");
        assert_eq!(units_of(['a', 'b', 'c'].as_slice()), "abc");
    }

    #[test]
    fn booleans_render_the_literal_words() {
        assert_eq!(units_of(true), "true");
        assert_eq!(units_of(false), "false");
    }

    #[test]
    fn integers_render_canonical_decimal() {
        assert_eq!(units_of(456), "456");
        assert_eq!(units_of(-7), "-7");
        assert_eq!(units_of(10_000_000_000_i64), "10000000000");
        assert_eq!(units_of(42_u32), "42");
    }

    #[test]
    fn floats_render_their_shortest_decimal_form() {
        assert_eq!(units_of(1.21_f32), "1.21");
        assert_eq!(units_of(3.58971_f64), "3.58971");
    }

    #[test]
    fn references_convert_like_their_referents() {
        assert_eq!(units_of(&&"Test"), "Test");
        assert_eq!(units_of(&true), "true");
    }

    #[test]
    fn push_display_renders_arbitrary_display_values() {
        struct Dummy;
        impl core::fmt::Display for Dummy {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("Dummyy")
            }
        }

        let mut out = Vec::new();
        push_display(&mut out, Dummy);
        assert_eq!(out.iter().collect::<String>(), "Dummyy");
    }
}
