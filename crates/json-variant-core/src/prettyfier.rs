//! Indentation for compact JSON, applied as a sink decorator.
//!
//! The serializer always emits compact JSON. [`Prettyfier`] sits between the
//! serializer and the real sink and reacts to structural bytes outside of
//! string literals:
//!
//! - `[` / `{` open a block; the line break and indent are deferred until the
//!   first member arrives, so empty blocks stay `[]` / `{}`
//! - `,` ends the line
//! - `:` gets a trailing space
//! - `]` / `}` of a non-empty block go on their own line, one level out
//!
//! Any other byte, whitespace included, is passed through. `Unparsed`
//! fragments that carry their own spacing keep it, indented like the rest.
//!
//! Output:
//!
//! ```text
//! {
//!   "name": "Alice",
//!   "tags": [
//!     "a",
//!     "b"
//!   ],
//!   "empty": []
//! }
//! ```
//!
//! Lines end with `\r\n`, as [`Print::println`] does.

use crate::print::Print;

const INDENT: &[u8] = b"  ";

/// Reformats compact JSON written through it.
///
/// Whitespace outside string literals is not dropped: every byte counts
/// toward what the sink accepted, so a pre-formatted fragment such as
/// `{ "a": 1 }` comes out as `{`, then `   "a":  1 `, then `}` on its lines.
#[derive(Debug)]
pub struct Prettyfier<'p, P: Print + ?Sized> {
    sink: &'p mut P,
    level: usize,
    previous: u8,
    at_line_start: bool,
    in_string: bool,
    escaped: bool,
}

impl<'p, P: Print + ?Sized> Prettyfier<'p, P> {
    pub fn new(sink: &'p mut P) -> Self {
        Self {
            sink,
            level: 0,
            previous: 0,
            at_line_start: false,
            in_string: false,
            escaped: false,
        }
    }

    fn write_string_byte(&mut self, byte: u8) -> usize {
        if self.escaped {
            self.escaped = false;
        } else if byte == b'\\' {
            self.escaped = true;
        } else if byte == b'"' {
            self.in_string = false;
        }
        self.sink.write(byte)
    }

    fn write_markup_byte(&mut self, byte: u8) -> usize {
        match byte {
            b'[' | b'{' => self.indent_if_needed() + self.put(byte),
            b']' | b'}' => self.unindent_if_needed() + self.put(byte),
            b',' => self.put(byte) + self.newline(),
            b':' => self.put(byte) + self.put(b' '),
            b'"' => {
                self.in_string = true;
                self.indent_if_needed() + self.put(byte)
            }
            _ => self.indent_if_needed() + self.put(byte),
        }
    }

    fn in_empty_block(&self) -> bool {
        matches!(self.previous, b'[' | b'{')
    }

    fn indent_if_needed(&mut self) -> usize {
        if !self.in_empty_block() {
            return 0;
        }
        self.level += 1;
        self.newline()
    }

    fn unindent_if_needed(&mut self) -> usize {
        if self.in_empty_block() {
            return 0;
        }
        self.level = self.level.saturating_sub(1);
        self.newline()
    }

    fn newline(&mut self) -> usize {
        self.at_line_start = true;
        self.sink.println()
    }

    /// Writes `byte`, preceded by the indentation when it starts a line.
    fn put(&mut self, byte: u8) -> usize {
        let mut written = 0;
        if self.at_line_start {
            self.at_line_start = false;
            for _ in 0..self.level {
                written += self.sink.write_bytes(INDENT);
            }
        }
        written + self.sink.write(byte)
    }
}

impl<P: Print + ?Sized> Print for Prettyfier<'_, P> {
    fn write(&mut self, byte: u8) -> usize {
        let written = if self.in_string {
            self.write_string_byte(byte)
        } else {
            self.write_markup_byte(byte)
        };
        self.previous = byte;
        written
    }
}
