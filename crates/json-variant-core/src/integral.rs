//! The native integer types a variant can be built from, read back as, and
//! printed in decimal.

use crate::variant::JsonInteger;

/// Longest decimal rendering of any supported integer, sign excluded
/// (`i128::MIN` and `u128::MAX` both have 39 digits).
pub const MAX_INTEGER_DIGITS: usize = 39;

mod sealed {
    pub trait Sealed {}
}

/// A native integer type: `i8..=i128`, `u8..=u128`, `isize` or `usize`.
///
/// Sealed; the set of implementors is fixed.
pub trait Integral: Copy + sealed::Sealed {
    fn is_negative(self) -> bool;

    fn is_zero(self) -> bool;

    /// Splits off the least significant decimal digit.
    ///
    /// The digit is returned as an absolute value and the quotient keeps the
    /// sign of `self`, so negative values never need to be negated. This is
    /// what keeps `MIN` correct.
    fn split_digit(self) -> (Self, u8);

    /// Converts to the stored integer width with `as` semantics.
    fn to_json_integer(self) -> JsonInteger;

    /// Converts from the stored integer width with `as` semantics.
    fn from_json_integer(value: JsonInteger) -> Self;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn split_digit(self) -> (Self, u8) {
                (self / 10, (self % 10).unsigned_abs() as u8)
            }

            #[inline]
            fn to_json_integer(self) -> JsonInteger {
                self as JsonInteger
            }

            #[inline]
            fn from_json_integer(value: JsonInteger) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn split_digit(self) -> (Self, u8) {
                (self / 10, (self % 10) as u8)
            }

            #[inline]
            fn to_json_integer(self) -> JsonInteger {
                self as JsonInteger
            }

            #[inline]
            fn from_json_integer(value: JsonInteger) -> Self {
                value as $t
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
