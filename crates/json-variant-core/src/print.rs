//! The byte sink abstraction and the text rendering built on top of it.
//!
//! A destination implements exactly one method, [`Print::write`], which
//! accepts a single byte. Every other operation (strings, decimal integers,
//! fixed-point floats, line terminators) is provided on top of it and never
//! allocates, which is what lets the same formatting code drive a UART, a
//! fixed buffer or a socket.
//!
//! Failure is never an error value here: a destination that refuses a byte
//! returns 0, and every operation reports the number of bytes that were
//! actually accepted. A short count means partial output.

use core::fmt::{self, Write as _};

use crate::integral::{Integral, MAX_INTEGER_DIGITS};

/// Line terminator emitted by [`Print::println`].
pub const LINE_ENDING: &str = "\r\n";

/// Default number of digits after the decimal point for floats.
pub const DEFAULT_DECIMALS: u8 = 2;

/// A byte-accepting destination.
///
/// # Example
///
/// ```
/// use json_variant_core::{BufferSink, Print};
///
/// let mut buf = [0u8; 16];
/// let mut sink = BufferSink::new(&mut buf);
/// assert_eq!(sink.print_integer(-42i32), 3);
/// assert_eq!(sink.print_str(" "), 1);
/// assert_eq!(sink.print_float(1.23456, 3), 5);
/// assert_eq!(sink.as_str(), "-42 1.235");
/// ```
pub trait Print {
    /// Writes one byte. Returns 1 if it was accepted, 0 otherwise.
    fn write(&mut self, byte: u8) -> usize;

    /// Writes `bytes` in order, stopping at the first refused byte.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;
        for &byte in bytes {
            // Decorators may expand one byte into several.
            let n = self.write(byte);
            if n == 0 {
                break;
            }
            written += n;
        }
        written
    }

    /// Writes every byte of `text`.
    fn print_str(&mut self, text: &str) -> usize {
        self.write_bytes(text.as_bytes())
    }

    /// Writes `value` in fixed-point notation with exactly `digits` digits
    /// after the decimal point. No decimal point is written when `digits` is
    /// 0. Non-finite values render as `NaN`, `inf` and `-inf`.
    fn print_float(&mut self, value: f64, digits: u8) -> usize {
        self.print_fmt(format_args!("{:.*}", usize::from(digits), value))
    }

    /// Writes pre-formatted arguments.
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        let mut counter = Counter {
            sink: self,
            written: 0,
        };
        // A refused byte surfaces as fmt::Error; the count already says so.
        let _ = counter.write_fmt(args);
        counter.written
    }

    /// Writes `value` in decimal, most significant digit first, with a
    /// leading `-` when negative.
    fn print_integer<T: Integral>(&mut self, value: T) -> usize
    where
        Self: Sized,
    {
        print_integer(self, value)
    }

    /// Writes any [`Printable`] value.
    fn print<T: Printable>(&mut self, value: T) -> usize
    where
        Self: Sized,
    {
        value.print_to(self)
    }

    /// Writes the line terminator `\r\n`.
    fn println(&mut self) -> usize {
        self.print_str(LINE_ENDING)
    }
}

impl<P: Print + ?Sized> Print for &mut P {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        (**self).write(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).write_bytes(bytes)
    }
}

/// Counts the bytes a sink accepts while acting as a `fmt::Write`.
struct Counter<'p, P: Print + ?Sized> {
    sink: &'p mut P,
    written: usize,
}

impl<P: Print + ?Sized> fmt::Write for Counter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            let n = self.sink.write(byte);
            if n == 0 {
                return Err(fmt::Error);
            }
            self.written += n;
        }
        Ok(())
    }
}

fn print_integer<P: Print + ?Sized, T: Integral>(sink: &mut P, value: T) -> usize {
    let mut written = 0;
    if value.is_negative() {
        if sink.write(b'-') == 0 {
            return 0;
        }
        written += 1;
    }

    let mut digits = [0u8; MAX_INTEGER_DIGITS];
    let mut len = 0;
    let mut rest = value;
    loop {
        let (quotient, digit) = rest.split_digit();
        digits[len] = b'0' + digit;
        len += 1;
        rest = quotient;
        if rest.is_zero() {
            break;
        }
    }
    digits[..len].reverse();

    written + sink.write_bytes(&digits[..len])
}

/// A value with a canonical text rendering, accepted by [`Print::print`].
pub trait Printable {
    fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize;
}

impl Printable for &str {
    fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize {
        sink.print_str(self)
    }
}

impl Printable for f64 {
    fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize {
        sink.print_float(self, DEFAULT_DECIMALS)
    }
}

impl Printable for f32 {
    fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize {
        sink.print_float(f64::from(self), DEFAULT_DECIMALS)
    }
}

/// A float paired with an explicit number of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    pub value: f64,
    pub digits: u8,
}

impl Fixed {
    pub const fn new(value: f64, digits: u8) -> Self {
        Self { value, digits }
    }
}

impl Printable for Fixed {
    fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize {
        sink.print_float(self.value, self.digits)
    }
}

macro_rules! impl_printable_integer {
    ($($t:ty),*) => {$(
        impl Printable for $t {
            fn print_to<P: Print + ?Sized>(self, sink: &mut P) -> usize {
                print_integer(sink, self)
            }
        }
    )*};
}

impl_printable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
