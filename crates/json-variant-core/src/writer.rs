//! The emit primitives the serializer is built from.
//!
//! [`JsonWriter`] knows JSON punctuation, literal spelling and string
//! escaping, and nothing about document structure. Variants and containers
//! drive it from their `write_to` implementations; it forwards everything to
//! a [`Print`] sink and keeps a running count of accepted bytes.
//!
//! # Example
//! ```
//! use json_variant_core::JsonWriter;
//!
//! let mut out = Vec::new();
//! let mut writer = JsonWriter::new(&mut out);
//! writer.begin_array();
//! writer.write_string("a\"b");
//! writer.write_comma();
//! writer.write_float(0.5, 3);
//! writer.end_array();
//! assert_eq!(writer.bytes_written(), 14);
//! assert_eq!(out, br#"["a\"b",0.500]"#);
//! ```

use crate::print::{Print, Printable};
use crate::variant::{JsonFloat, JsonInteger};

/// Emits JSON tokens into a sink.
#[derive(Debug)]
pub struct JsonWriter<'p, P: Print + ?Sized> {
    sink: &'p mut P,
    length: usize,
}

impl<'p, P: Print + ?Sized> JsonWriter<'p, P> {
    pub fn new(sink: &'p mut P) -> Self {
        Self { sink, length: 0 }
    }

    /// Total number of bytes the sink has accepted so far.
    pub fn bytes_written(&self) -> usize {
        self.length
    }

    pub fn begin_array(&mut self) {
        self.write_byte(b'[');
    }

    pub fn end_array(&mut self) {
        self.write_byte(b']');
    }

    pub fn begin_object(&mut self) {
        self.write_byte(b'{');
    }

    pub fn end_object(&mut self) {
        self.write_byte(b'}');
    }

    pub fn write_comma(&mut self) {
        self.write_byte(b',');
    }

    pub fn write_colon(&mut self) {
        self.write_byte(b':');
    }

    pub fn write_null(&mut self) {
        self.write_raw("null");
    }

    pub fn write_boolean(&mut self, value: bool) {
        self.write_raw(if value { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, value: JsonInteger) {
        self.length += value.print_to(&mut *self.sink);
    }

    /// Writes `value` with `decimals` digits after the point. JSON has no
    /// spelling for NaN or the infinities, so those become `null`.
    pub fn write_float(&mut self, value: JsonFloat, decimals: u8) {
        if value.is_finite() {
            self.length += self.sink.print_float(value, decimals);
        } else {
            self.write_null();
        }
    }

    /// Writes `value` as a quoted string literal.
    ///
    /// Quotes, backslashes and control characters are escaped; everything
    /// else, including non-ASCII text, passes through unchanged.
    pub fn write_string(&mut self, value: &str) {
        self.write_byte(b'"');
        let bytes = value.as_bytes();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if !needs_escape(byte) {
                continue;
            }
            self.length += self.sink.write_bytes(&bytes[start..i]);
            self.write_escaped(byte);
            start = i + 1;
        }
        self.length += self.sink.write_bytes(&bytes[start..]);
        self.write_byte(b'"');
    }

    /// Writes `text` verbatim.
    pub fn write_raw(&mut self, text: &str) {
        self.length += self.sink.print_str(text);
    }

    fn write_byte(&mut self, byte: u8) {
        self.length += self.sink.write(byte);
    }

    fn write_escaped(&mut self, byte: u8) {
        let short = match byte {
            b'"' => b'"',
            b'\\' => b'\\',
            0x08 => b'b',
            0x0C => b'f',
            b'\n' => b'n',
            b'\r' => b'r',
            b'\t' => b't',
            _ => {
                const HEX: &[u8; 16] = b"0123456789abcdef";
                let escape = [
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX[usize::from(byte >> 4)],
                    HEX[usize::from(byte & 0x0F)],
                ];
                self.length += self.sink.write_bytes(&escape);
                return;
            }
        };
        self.length += self.sink.write_bytes(&[b'\\', short]);
    }
}

fn needs_escape(byte: u8) -> bool {
    byte == b'"' || byte == b'\\' || byte < 0x20
}
