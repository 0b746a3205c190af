//! # json-variant-core
//!
//! An allocation-free JSON value type and the byte-sink printing it renders
//! through, sized for microcontrollers and usable anywhere else.
//!
//! ## Quick start
//!
//! ```rust
//! use json_variant_core::{JsonArray, JsonObject, JsonPair, JsonPrintable, JsonVariant, BufferSink};
//!
//! let samples = [JsonVariant::from(12), JsonVariant::from(-3)];
//! let samples = JsonArray::new(&samples);
//! let pairs = [
//!     JsonPair::new("ok", true),
//!     JsonPair::new("ratio", JsonVariant::float(0.3333, 3)),
//!     JsonPair::new("samples", &samples),
//! ];
//! let root = JsonObject::new(&pairs);
//!
//! let mut buf = [0u8; 64];
//! let mut sink = BufferSink::new(&mut buf);
//! let written = root.print_to(&mut sink);
//! assert_eq!(sink.as_str(), r#"{"ok":true,"ratio":0.333,"samples":[12,-3]}"#);
//! assert_eq!(written, root.measure_length());
//! ```
//!
//! ## Modules
//!
//! - [`print`]: the [`Print`] sink trait and text rendering of numbers
//! - [`sink`]: fixed buffer, counting, `Vec<u8>` and `std::io::Write` sinks
//! - [`variant`]: [`JsonVariant`] and typed extraction
//! - [`container`]: borrowed [`JsonArray`] / [`JsonObject`]
//! - [`writer`]: [`JsonWriter`] emit primitives and string escaping
//! - [`prettyfier`]: indentation as a sink decorator
//! - [`printable`]: [`JsonPrintable`] print/measure entry points
//! - [`error`]: error types for the checked APIs
//!
//! ## Features
//!
//! - `std` (default): [`IoSink`] over `std::io::Write`; implies `alloc`
//! - `alloc`: `Vec<u8>` as a sink, `String` extraction and rendering
//!
//! Without either the crate is `#![no_std]` and never allocates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod container;
pub mod error;
pub mod integral;
pub mod prettyfier;
pub mod print;
pub mod printable;
pub mod sink;
pub mod variant;
pub mod writer;

pub use container::{JsonArray, JsonObject, JsonPair};
pub use error::JsonError;
pub use integral::Integral;
pub use prettyfier::Prettyfier;
pub use print::{Fixed, Print, Printable};
pub use printable::JsonPrintable;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{BufferSink, CountingSink};
pub use variant::{
    double_with_n_digits, float_with_n_digits, FromVariant, JsonFloat, JsonInteger, JsonVariant,
    Unparsed, VariantKind,
};
pub use writer::JsonWriter;
