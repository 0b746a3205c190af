//! Bridges a parsed `serde_json::Value` onto a borrowed variant graph.
//!
//! Variants never own their containers, so the graph has to live somewhere
//! while it is printed. The tree is split into levels by depth, and each level
//! is built in its own stack frame on top of the level below it, deepest
//! first. The root variant is handed to a callback from the innermost frame,
//! while every level is still alive.

use json_variant_core::{JsonArray, JsonObject, JsonPair, JsonVariant};
use serde_json::{Number, Value};

/// How JSON numbers are turned into variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeOptions {
    /// Fixed number of decimals for non-integer numbers. When unset each
    /// number keeps the digits of its shortest round-trip rendering.
    pub decimals: Option<u8>,
}

/// Builds the variant graph for `value` and calls `f` with its root.
pub fn with_variant<R, F>(value: &Value, options: &BridgeOptions, f: F) -> R
where
    F: FnOnce(&JsonVariant<'_>) -> R,
{
    let levels = split_levels(value);
    build(&levels, levels.len() - 1, &[], options, f)
}

/// Groups nodes by depth. Level `d + 1` lists the children of level `d`'s
/// containers in document order: array elements, then object values.
fn split_levels(root: &Value) -> Vec<Vec<&Value>> {
    let mut levels = vec![vec![root]];
    loop {
        let next: Vec<&Value> = levels[levels.len() - 1]
            .iter()
            .flat_map(|&node| children(node))
            .collect();
        if next.is_empty() {
            return levels;
        }
        levels.push(next);
    }
}

fn children(node: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match node {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => Box::new(std::iter::empty()),
    }
}

fn build<R, F>(
    levels: &[Vec<&Value>],
    depth: usize,
    below: &[JsonVariant<'_>],
    options: &BridgeOptions,
    f: F,
) -> R
where
    F: FnOnce(&JsonVariant<'_>) -> R,
{
    let nodes = &levels[depth];

    let mut pairs = Vec::new();
    let mut cursor = 0;
    for node in nodes {
        match node {
            Value::Array(items) => cursor += items.len(),
            Value::Object(map) => {
                for key in map.keys() {
                    pairs.push(JsonPair {
                        key: key.as_str(),
                        value: below[cursor],
                    });
                    cursor += 1;
                }
            }
            _ => {}
        }
    }

    let mut arrays = Vec::new();
    let mut objects = Vec::new();
    let (mut item_cursor, mut pair_cursor) = (0, 0);
    for node in nodes {
        match node {
            Value::Array(items) => {
                let end = item_cursor + items.len();
                arrays.push(JsonArray::new(&below[item_cursor..end]));
                item_cursor = end;
            }
            Value::Object(map) => {
                let end = pair_cursor + map.len();
                objects.push(JsonObject::new(&pairs[pair_cursor..end]));
                pair_cursor = end;
                item_cursor += map.len();
            }
            _ => {}
        }
    }

    let texts: Vec<Option<String>> = nodes
        .iter()
        .map(|node| exact_number_text(node, options))
        .collect();

    let mut variants = Vec::with_capacity(nodes.len());
    let (mut array_index, mut object_index) = (0, 0);
    for (node, text) in nodes.iter().zip(&texts) {
        let variant = match (node, text) {
            (_, Some(text)) => JsonVariant::unparsed(text),
            (Value::Array(_), None) => {
                array_index += 1;
                JsonVariant::Array(&arrays[array_index - 1])
            }
            (Value::Object(_), None) => {
                object_index += 1;
                JsonVariant::Object(&objects[object_index - 1])
            }
            (scalar, None) => scalar_variant(scalar, options),
        };
        variants.push(variant);
    }

    if depth == 0 {
        f(&variants[0])
    } else {
        build(levels, depth - 1, &variants, options, f)
    }
}

fn scalar_variant<'v>(node: &'v Value, options: &BridgeOptions) -> JsonVariant<'v> {
    match node {
        Value::Null => JsonVariant::unparsed("null"),
        Value::Bool(value) => JsonVariant::from(*value),
        Value::Number(number) => number_variant(number, options),
        Value::String(text) => JsonVariant::from(text.as_str()),
        Value::Array(_) | Value::Object(_) => JsonVariant::new(),
    }
}

fn number_variant<'v>(number: &Number, options: &BridgeOptions) -> JsonVariant<'v> {
    if let Some(value) = number.as_i64() {
        return JsonVariant::from(value);
    }
    let value = number.as_f64().unwrap_or(f64::NAN);
    let decimals = options
        .decimals
        .or_else(|| shortest_decimals(value))
        .unwrap_or(u8::MAX);
    JsonVariant::float(value, decimals)
}

/// serde_json's own text for a float whose shortest rendering needs more
/// decimals than a variant can hold, such as `1e-300`.
fn exact_number_text(node: &Value, options: &BridgeOptions) -> Option<String> {
    match node {
        Value::Number(number) if options.decimals.is_none() && number.as_i64().is_none() => {
            let value = number.as_f64()?;
            match shortest_decimals(value) {
                Some(_) => None,
                None => Some(number.to_string()),
            }
        }
        _ => None,
    }
}

/// Digits after the point in the shortest rendering that reads back as
/// `value`, and at least one so the output stays a float. `None` when that
/// does not fit in a `u8`.
fn shortest_decimals(value: f64) -> Option<u8> {
    let text = value.to_string();
    let digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    u8::try_from(digits.max(1)).ok()
}
