//! The JSON variant: one JSON value, stored by value, referencing everything
//! it does not own.
//!
//! A [`JsonVariant`] is a small `Copy` enum. Scalars live inline; strings,
//! unparsed fragments and containers are borrowed for `'a`, so the borrow
//! checker guarantees the referenced data outlives every variant pointing at
//! it.
//!
//! Reading never fails. [`JsonVariant::get`] converts to the requested type
//! and falls back to zero, `false`, an empty string or an invalid container
//! when the stored alternative does not match. [`JsonVariant::is`] and
//! [`JsonVariant::try_get`] are there for callers that need to tell the
//! difference.
//!
//! # Example
//! ```
//! use json_variant_core::{JsonArray, JsonVariant};
//!
//! let temperature = JsonVariant::float(21.456, 1);
//! assert_eq!(temperature.to_string(), "21.5");
//!
//! let answer = JsonVariant::from(42u8);
//! assert!(answer.is::<i64>());
//! assert_eq!(answer.get::<i16>(), 42);
//! assert!(answer.get::<bool>());
//!
//! let name = JsonVariant::from("sensor");
//! assert_eq!(name.get::<i32>(), 0);
//! assert!(!name.get::<&JsonArray>().success());
//! ```

use core::fmt;
use core::ops::Index;

use crate::container::{JsonArray, JsonObject};
use crate::error::{JsonError, Result};
use crate::integral::Integral;
use crate::print::DEFAULT_DECIMALS;
use crate::printable::JsonPrintable;
use crate::sink::FmtSink;
use crate::writer::JsonWriter;
use crate::Print;

/// Integer width stored in a variant.
pub type JsonInteger = i64;

/// Float width stored in a variant.
pub type JsonFloat = f64;

/// Raw text that is emitted verbatim, without quotes or escaping.
///
/// Used to splice pre-serialized JSON into a document. The text is trusted:
/// nothing checks that it is valid JSON.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unparsed<'a>(&'a str);

impl<'a> Unparsed<'a> {
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> From<&'a str> for Unparsed<'a> {
    fn from(raw: &'a str) -> Self {
        Self(raw)
    }
}

/// The alternative a variant currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Undefined,
    Boolean,
    Integer,
    Float,
    String,
    Unparsed,
    Array,
    Object,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariantKind::Undefined => "undefined",
            VariantKind::Boolean => "boolean",
            VariantKind::Integer => "integer",
            VariantKind::Float => "float",
            VariantKind::String => "string",
            VariantKind::Unparsed => "unparsed",
            VariantKind::Array => "array",
            VariantKind::Object => "object",
        })
    }
}

/// A JSON value that borrows its strings and containers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum JsonVariant<'a> {
    #[default]
    Undefined,
    Boolean(bool),
    Integer(JsonInteger),
    /// A float and the number of digits to print after the decimal point.
    Float {
        value: JsonFloat,
        decimals: u8,
    },
    String(&'a str),
    Unparsed(Unparsed<'a>),
    Array(&'a JsonArray<'a>),
    Object(&'a JsonObject<'a>),
}

impl<'a> JsonVariant<'a> {
    /// An undefined variant.
    pub const fn new() -> Self {
        Self::Undefined
    }

    /// A float printed with `decimals` digits after the decimal point.
    pub const fn float(value: JsonFloat, decimals: u8) -> Self {
        Self::Float { value, decimals }
    }

    /// Like [`JsonVariant::float`], clamping `decimals` to `0..=255`.
    pub fn with_decimals(value: JsonFloat, decimals: usize) -> Self {
        Self::float(value, u8::try_from(decimals).unwrap_or(u8::MAX))
    }

    /// A fragment emitted verbatim when serialized.
    pub const fn unparsed(raw: &'a str) -> Self {
        Self::Unparsed(Unparsed::new(raw))
    }

    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Undefined => VariantKind::Undefined,
            Self::Boolean(_) => VariantKind::Boolean,
            Self::Integer(_) => VariantKind::Integer,
            Self::Float { .. } => VariantKind::Float,
            Self::String(_) => VariantKind::String,
            Self::Unparsed(_) => VariantKind::Unparsed,
            Self::Array(_) => VariantKind::Array,
            Self::Object(_) => VariantKind::Object,
        }
    }

    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Reads the value as `T`, falling back to `T`'s empty value when the
    /// stored alternative does not convert.
    pub fn get<T: FromVariant<'a>>(&self) -> T {
        T::from_variant(self)
    }

    /// Whether the stored alternative is `T`'s category.
    pub fn is<T: FromVariant<'a>>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Reads the value as `T` only if the stored alternative is `T`'s
    /// category.
    pub fn try_get<T: FromVariant<'a>>(&self) -> Result<T> {
        if self.is::<T>() {
            Ok(self.get())
        } else {
            Err(JsonError::TypeMismatch {
                expected: T::KIND,
                found: self.kind(),
            })
        }
    }

    /// The value as an integer.
    ///
    /// Booleans read as 0 or 1, floats are truncated toward zero (saturating,
    /// NaN reads as 0), and unparsed fragments are parsed as numbers. Anything
    /// else reads as 0.
    pub fn as_integer(&self) -> JsonInteger {
        match *self {
            Self::Integer(value) => value,
            Self::Boolean(value) => JsonInteger::from(value),
            Self::Float { value, .. } => value as JsonInteger,
            Self::Unparsed(raw) => parse_integer(raw.as_str()),
            _ => 0,
        }
    }

    /// The value as a float. Same conversions as [`JsonVariant::as_integer`].
    pub fn as_float(&self) -> JsonFloat {
        match *self {
            Self::Float { value, .. } => value,
            Self::Integer(value) => value as JsonFloat,
            Self::Boolean(value) => JsonFloat::from(u8::from(value)),
            Self::Unparsed(raw) => parse_float(raw.as_str()),
            _ => 0.0,
        }
    }

    /// The value as text: strings and unparsed fragments as stored,
    /// booleans as `"true"` / `"false"`, anything else empty.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::String(text) => text,
            Self::Unparsed(raw) => raw.as_str(),
            Self::Boolean(true) => "true",
            Self::Boolean(false) => "false",
            _ => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        self.as_integer() != 0
    }

    /// The referenced array, or [`JsonArray::invalid`].
    pub fn as_array(&self) -> &'a JsonArray<'a> {
        match *self {
            Self::Array(array) => array,
            _ => JsonArray::invalid(),
        }
    }

    /// The referenced object, or [`JsonObject::invalid`].
    pub fn as_object(&self) -> &'a JsonObject<'a> {
        match *self {
            Self::Object(object) => object,
            _ => JsonObject::invalid(),
        }
    }
}

/// Element access through an array variant; `Undefined` for anything else.
impl<'a> Index<usize> for JsonVariant<'a> {
    type Output = JsonVariant<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

/// Member access through an object variant; `Undefined` for anything else.
impl<'a> Index<&str> for JsonVariant<'a> {
    type Output = JsonVariant<'a>;

    fn index(&self, key: &str) -> &Self::Output {
        &self.as_object()[key]
    }
}

fn parse_integer(text: &str) -> JsonInteger {
    let text = text.trim();
    if text == "true" {
        return 1;
    }
    text.parse::<JsonInteger>()
        .unwrap_or_else(|_| parse_float(text) as JsonInteger)
}

fn parse_float(text: &str) -> JsonFloat {
    let text = text.trim();
    if text == "true" {
        return 1.0;
    }
    text.parse::<JsonFloat>().unwrap_or(0.0)
}

impl JsonPrintable for JsonVariant<'_> {
    /// Emits the value. `Undefined` emits nothing; the enclosing container
    /// decides how to represent it.
    fn write_to<P: Print + ?Sized>(&self, writer: &mut JsonWriter<'_, P>) {
        match *self {
            Self::Undefined => {}
            Self::Boolean(value) => writer.write_boolean(value),
            Self::Integer(value) => writer.write_integer(value),
            Self::Float { value, decimals } => writer.write_float(value, decimals),
            Self::String(text) => writer.write_string(text),
            Self::Unparsed(raw) => writer.write_raw(raw.as_str()),
            Self::Array(array) => array.write_to(writer),
            Self::Object(object) => object.write_to(writer),
        }
    }
}

impl fmt::Display for JsonVariant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        self.print_to(&mut sink);
        sink.finish()
    }
}

/// A float printed with `digits` digits after the decimal point.
pub fn float_with_n_digits<'a>(value: f32, digits: u8) -> JsonVariant<'a> {
    JsonVariant::float(JsonFloat::from(value), digits)
}

/// A double printed with `digits` digits after the decimal point.
pub fn double_with_n_digits<'a>(value: f64, digits: u8) -> JsonVariant<'a> {
    JsonVariant::float(value, digits)
}

impl From<bool> for JsonVariant<'_> {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for JsonVariant<'_> {
    fn from(value: f64) -> Self {
        Self::float(value, DEFAULT_DECIMALS)
    }
}

impl From<f32> for JsonVariant<'_> {
    fn from(value: f32) -> Self {
        Self::float(JsonFloat::from(value), DEFAULT_DECIMALS)
    }
}

impl<'a> From<&'a str> for JsonVariant<'a> {
    fn from(value: &'a str) -> Self {
        Self::String(value)
    }
}

impl<'a> From<Unparsed<'a>> for JsonVariant<'a> {
    fn from(value: Unparsed<'a>) -> Self {
        Self::Unparsed(value)
    }
}

impl<'a> From<&'a JsonArray<'a>> for JsonVariant<'a> {
    fn from(array: &'a JsonArray<'a>) -> Self {
        Self::Array(array)
    }
}

impl<'a> From<&'a JsonObject<'a>> for JsonVariant<'a> {
    fn from(object: &'a JsonObject<'a>) -> Self {
        Self::Object(object)
    }
}

impl<'a, T: Into<JsonVariant<'a>>> From<Option<T>> for JsonVariant<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// A type a variant can be read as.
///
/// Each implementation picks the accessor for its category, so the dispatch
/// is resolved at compile time.
pub trait FromVariant<'a>: Sized {
    /// The alternative that holds this type natively.
    const KIND: VariantKind;

    fn from_variant(variant: &JsonVariant<'a>) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for JsonVariant<'_> {
            fn from(value: $t) -> Self {
                Self::Integer(value.to_json_integer())
            }
        }

        impl<'a> FromVariant<'a> for $t {
            const KIND: VariantKind = VariantKind::Integer;

            fn from_variant(variant: &JsonVariant<'a>) -> Self {
                <$t>::from_json_integer(variant.as_integer())
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a> FromVariant<'a> for f64 {
    const KIND: VariantKind = VariantKind::Float;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_float()
    }
}

impl<'a> FromVariant<'a> for f32 {
    const KIND: VariantKind = VariantKind::Float;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_float() as f32
    }
}

impl<'a> FromVariant<'a> for bool {
    const KIND: VariantKind = VariantKind::Boolean;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_bool()
    }
}

impl<'a> FromVariant<'a> for &'a str {
    const KIND: VariantKind = VariantKind::String;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_str()
    }
}

impl<'a> FromVariant<'a> for Unparsed<'a> {
    const KIND: VariantKind = VariantKind::Unparsed;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        match *variant {
            JsonVariant::Unparsed(raw) => raw,
            _ => Unparsed::default(),
        }
    }
}

impl<'a> FromVariant<'a> for &'a JsonArray<'a> {
    const KIND: VariantKind = VariantKind::Array;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_array()
    }
}

impl<'a> FromVariant<'a> for &'a JsonObject<'a> {
    const KIND: VariantKind = VariantKind::Object;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        variant.as_object()
    }
}

/// The text of a string variant, or the compact JSON of anything else.
#[cfg(feature = "alloc")]
impl<'a> FromVariant<'a> for alloc::string::String {
    const KIND: VariantKind = VariantKind::String;

    fn from_variant(variant: &JsonVariant<'a>) -> Self {
        use alloc::string::ToString;

        match *variant {
            JsonVariant::String(text) => text.into(),
            _ => variant.to_string(),
        }
    }
}
