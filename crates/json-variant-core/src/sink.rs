//! Concrete [`Print`] destinations.

use core::fmt;

use crate::print::Print;

/// Writes into a caller-provided byte slice and refuses bytes once it is full.
#[derive(Debug)]
pub struct BufferSink<'b> {
    buffer: &'b mut [u8],
    len: usize,
}

impl<'b> BufferSink<'b> {
    pub fn new(buffer: &'b mut [u8]) -> Self {
        Self { buffer, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// The written bytes as text.
    ///
    /// When the buffer filled up in the middle of a multi-byte character the
    /// incomplete tail is left out.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match core::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => core::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Print for BufferSink<'_> {
    fn write(&mut self, byte: u8) -> usize {
        match self.buffer.get_mut(self.len) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                1
            }
            None => 0,
        }
    }
}

/// Accepts everything and only counts. Used to measure rendered lengths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Print for CountingSink {
    #[inline]
    fn write(&mut self, _byte: u8) -> usize {
        self.count += 1;
        1
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.count += bytes.len();
        bytes.len()
    }
}

#[cfg(feature = "alloc")]
impl Print for alloc::vec::Vec<u8> {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        self.push(byte);
        1
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

/// Adapts any `std::io::Write` into a sink.
///
/// I/O errors are swallowed into short counts, like every other sink. Wrap
/// unbuffered handles in a `BufWriter`, since single-byte writes go straight
/// through.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Print for IoSink<W> {
    fn write(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;
        while written < bytes.len() {
            match self.inner.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(_) => break,
            }
        }
        written
    }
}

/// Feeds a `fmt::Formatter` byte by byte, reassembling UTF-8 sequences that
/// arrive split across calls.
pub(crate) struct FmtSink<'f, 'g> {
    formatter: &'f mut fmt::Formatter<'g>,
    pending: [u8; 4],
    pending_len: usize,
    failed: bool,
}

impl<'f, 'g> FmtSink<'f, 'g> {
    pub(crate) fn new(formatter: &'f mut fmt::Formatter<'g>) -> Self {
        Self {
            formatter,
            pending: [0; 4],
            pending_len: 0,
            failed: false,
        }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        if self.failed || self.pending_len != 0 {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

impl Print for FmtSink<'_, '_> {
    fn write(&mut self, byte: u8) -> usize {
        if self.failed {
            return 0;
        }
        self.pending[self.pending_len] = byte;
        self.pending_len += 1;
        if self.pending_len < utf8_width(self.pending[0]) {
            return 1;
        }

        let chunk = &self.pending[..self.pending_len];
        let result = match core::str::from_utf8(chunk) {
            Ok(text) => self.formatter.write_str(text),
            Err(_) => self.formatter.write_str("\u{FFFD}"),
        };
        self.pending_len = 0;
        match result {
            Ok(()) => 1,
            Err(_) => {
                self.failed = true;
                0
            }
        }
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
