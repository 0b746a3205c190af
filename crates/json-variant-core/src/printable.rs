//! Serialization entry points shared by variants and containers.

use crate::error::{JsonError, Result};
use crate::prettyfier::Prettyfier;
use crate::print::Print;
use crate::sink::{BufferSink, CountingSink};
use crate::writer::JsonWriter;

/// Something that can emit itself as JSON through a [`JsonWriter`].
///
/// Only [`JsonPrintable::write_to`] is required; the rest are built on it.
pub trait JsonPrintable {
    fn write_to<P: Print + ?Sized>(&self, writer: &mut JsonWriter<'_, P>);

    /// Writes compact JSON. Returns the number of bytes the sink accepted.
    fn print_to<P: Print + ?Sized>(&self, sink: &mut P) -> usize {
        let mut writer = JsonWriter::new(sink);
        self.write_to(&mut writer);
        writer.bytes_written()
    }

    /// Writes indented JSON. Returns the number of bytes the sink accepted.
    fn pretty_print_to<P: Print + ?Sized>(&self, sink: &mut P) -> usize {
        let mut prettyfier = Prettyfier::new(sink);
        self.print_to(&mut prettyfier)
    }

    /// Writes compact JSON into `buffer`, truncating when it does not fit.
    fn print_to_buffer(&self, buffer: &mut [u8]) -> usize {
        let mut sink = BufferSink::new(buffer);
        self.print_to(&mut sink)
    }

    /// Length of the compact rendering, in bytes.
    fn measure_length(&self) -> usize {
        let mut counter = CountingSink::new();
        self.print_to(&mut counter)
    }

    /// Length of the indented rendering, in bytes.
    fn measure_pretty_length(&self) -> usize {
        let mut counter = CountingSink::new();
        self.pretty_print_to(&mut counter)
    }

    /// Like [`JsonPrintable::print_to`], but a sink that refuses any of the
    /// output is reported as [`JsonError::ShortWrite`].
    fn try_print_to<P: Print + ?Sized>(&self, sink: &mut P) -> Result<usize> {
        let expected = self.measure_length();
        check_written(self.print_to(sink), expected)
    }

    /// Like [`JsonPrintable::pretty_print_to`], reporting short writes.
    fn try_pretty_print_to<P: Print + ?Sized>(&self, sink: &mut P) -> Result<usize> {
        let expected = self.measure_pretty_length();
        check_written(self.pretty_print_to(sink), expected)
    }

    #[cfg(feature = "alloc")]
    fn to_json_string(&self) -> alloc::string::String {
        let mut bytes = alloc::vec::Vec::with_capacity(self.measure_length());
        self.print_to(&mut bytes);
        into_string(bytes)
    }

    #[cfg(feature = "alloc")]
    fn to_pretty_json_string(&self) -> alloc::string::String {
        let mut bytes = alloc::vec::Vec::with_capacity(self.measure_pretty_length());
        self.pretty_print_to(&mut bytes);
        into_string(bytes)
    }
}

fn check_written(written: usize, expected: usize) -> Result<usize> {
    if written == expected {
        Ok(written)
    } else {
        Err(JsonError::ShortWrite { written, expected })
    }
}

// The writer only ever emits whole UTF-8 sequences taken from `&str` input.
#[cfg(feature = "alloc")]
fn into_string(bytes: alloc::vec::Vec<u8>) -> alloc::string::String {
    match alloc::string::String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => alloc::string::String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
