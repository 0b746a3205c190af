//! Borrowed JSON containers.
//!
//! [`JsonArray`] and [`JsonObject`] are views over slices the caller owns,
//! typically arrays on the stack or in a `static`. Nothing here allocates or
//! mutates; a document is assembled bottom-up and then serialized.
//!
//! ```
//! use json_variant_core::{JsonArray, JsonObject, JsonPair, JsonPrintable, JsonVariant};
//!
//! let readings = [JsonVariant::float(21.5, 1), JsonVariant::float(22.0, 1)];
//! let readings = JsonArray::new(&readings);
//! let pairs = [
//!     JsonPair::new("sensor", "kitchen"),
//!     JsonPair::new("readings", &readings),
//! ];
//! let root = JsonObject::new(&pairs);
//!
//! assert_eq!(root.to_json_string(), r#"{"sensor":"kitchen","readings":[21.5,22.0]}"#);
//! assert_eq!(root["readings"][1].get::<f64>(), 22.0);
//! assert_eq!(root["missing"][7].get::<i32>(), 0);
//! ```

use core::ops::Index;

use crate::print::Print;
use crate::printable::JsonPrintable;
use crate::variant::JsonVariant;
use crate::writer::JsonWriter;

static UNDEFINED: JsonVariant<'static> = JsonVariant::Undefined;

static INVALID_ARRAY: JsonArray<'static> = JsonArray {
    items: &[],
    valid: false,
};

static INVALID_OBJECT: JsonObject<'static> = JsonObject {
    pairs: &[],
    valid: false,
};

/// An array of variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonArray<'a> {
    items: &'a [JsonVariant<'a>],
    valid: bool,
}

impl<'a> JsonArray<'a> {
    pub const fn new(items: &'a [JsonVariant<'a>]) -> Self {
        Self { items, valid: true }
    }

    /// The shared placeholder returned when a variant that is not an array is
    /// read as one. Empty, and [`JsonArray::success`] is false.
    pub fn invalid() -> &'static JsonArray<'static> {
        &INVALID_ARRAY
    }

    /// False only for [`JsonArray::invalid`].
    pub const fn success(&self) -> bool {
        self.valid
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, or `Undefined` past the end.
    pub fn get(&self, index: usize) -> JsonVariant<'a> {
        self.items.get(index).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> core::slice::Iter<'a, JsonVariant<'a>> {
        self.items.iter()
    }

    pub const fn as_slice(&self) -> &'a [JsonVariant<'a>] {
        self.items
    }
}

impl<'a> Index<usize> for JsonArray<'a> {
    type Output = JsonVariant<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        self.items.get(index).unwrap_or(&UNDEFINED)
    }
}

impl<'a> IntoIterator for &JsonArray<'a> {
    type Item = &'a JsonVariant<'a>;
    type IntoIter = core::slice::Iter<'a, JsonVariant<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl JsonPrintable for JsonArray<'_> {
    /// Undefined elements are written as `null` to keep positions intact.
    fn write_to<P: Print + ?Sized>(&self, writer: &mut JsonWriter<'_, P>) {
        writer.begin_array();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writer.write_comma();
            }
            if item.is_defined() {
                item.write_to(writer);
            } else {
                writer.write_null();
            }
        }
        writer.end_array();
    }
}

/// A key and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonPair<'a> {
    pub key: &'a str,
    pub value: JsonVariant<'a>,
}

impl<'a> JsonPair<'a> {
    pub fn new(key: &'a str, value: impl Into<JsonVariant<'a>>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// An object: an ordered list of key/value pairs.
///
/// Keys are not required to be unique; lookups return the first match and
/// serialization writes every pair that holds a defined value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonObject<'a> {
    pairs: &'a [JsonPair<'a>],
    valid: bool,
}

impl<'a> JsonObject<'a> {
    pub const fn new(pairs: &'a [JsonPair<'a>]) -> Self {
        Self { pairs, valid: true }
    }

    /// The shared placeholder returned when a variant that is not an object
    /// is read as one. Empty, and [`JsonObject::success`] is false.
    pub fn invalid() -> &'static JsonObject<'static> {
        &INVALID_OBJECT
    }

    /// False only for [`JsonObject::invalid`].
    pub const fn success(&self) -> bool {
        self.valid
    }

    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The value of the first pair named `key`, or `Undefined`.
    pub fn get(&self, key: &str) -> JsonVariant<'a> {
        self.find(key).map(|pair| pair.value).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> core::slice::Iter<'a, JsonPair<'a>> {
        self.pairs.iter()
    }

    pub const fn as_slice(&self) -> &'a [JsonPair<'a>] {
        self.pairs
    }

    fn find(&self, key: &str) -> Option<&'a JsonPair<'a>> {
        self.pairs.iter().find(|pair| pair.key == key)
    }
}

impl<'a> Index<&str> for JsonObject<'a> {
    type Output = JsonVariant<'a>;

    fn index(&self, key: &str) -> &Self::Output {
        match self.find(key) {
            Some(pair) => &pair.value,
            None => &UNDEFINED,
        }
    }
}

impl<'a> IntoIterator for &JsonObject<'a> {
    type Item = &'a JsonPair<'a>;
    type IntoIter = core::slice::Iter<'a, JsonPair<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl JsonPrintable for JsonObject<'_> {
    /// Pairs whose value is undefined are left out.
    fn write_to<P: Print + ?Sized>(&self, writer: &mut JsonWriter<'_, P>) {
        writer.begin_object();
        let mut first = true;
        for pair in self.pairs.iter().filter(|pair| pair.value.is_defined()) {
            if !first {
                writer.write_comma();
            }
            first = false;
            writer.write_string(pair.key);
            writer.write_colon();
            pair.value.write_to(writer);
        }
        writer.end_object();
    }
}
