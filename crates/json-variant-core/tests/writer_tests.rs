/// Serialization tests: literal spelling, string escaping, pretty printing,
/// measuring, and the buffer and checked entry points.
use json_variant_core::{
    BufferSink, JsonArray, JsonError, JsonObject, JsonPair, JsonPrintable, JsonVariant, JsonWriter,
    Prettyfier, Print,
};

fn compact(value: &impl JsonPrintable) -> String {
    value.to_json_string()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn literals() {
    assert_eq!(compact(&JsonVariant::from(true)), "true");
    assert_eq!(compact(&JsonVariant::from(false)), "false");
    assert_eq!(compact(&JsonVariant::from(0)), "0");
    assert_eq!(compact(&JsonVariant::from(i64::MIN)), "-9223372036854775808");
}

#[test]
fn float_uses_stored_decimals() {
    assert_eq!(compact(&JsonVariant::float(2.0, 0)), "2");
    assert_eq!(compact(&JsonVariant::float(0.1, 4)), "0.1000");
    assert_eq!(compact(&JsonVariant::from(-0.25)), "-0.25");
}

#[test]
fn non_finite_floats_become_null() {
    assert_eq!(compact(&JsonVariant::from(f64::NAN)), "null");
    assert_eq!(compact(&JsonVariant::from(f64::INFINITY)), "null");
    assert_eq!(compact(&JsonVariant::from(f64::NEG_INFINITY)), "null");
}

#[test]
fn unparsed_is_verbatim() {
    assert_eq!(compact(&JsonVariant::unparsed("null")), "null");
    assert_eq!(compact(&JsonVariant::unparsed("{\"k\": [1]}")), "{\"k\": [1]}");
}

#[test]
fn undefined_renders_empty() {
    assert_eq!(compact(&JsonVariant::new()), "");
    assert_eq!(JsonVariant::new().measure_length(), 0);
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn escapes_quote_and_backslash() {
    assert_eq!(compact(&JsonVariant::from(r#"say "hi" \o/"#)), r#""say \"hi\" \\o/""#);
}

#[test]
fn escapes_short_control_characters() {
    assert_eq!(
        compact(&JsonVariant::from("\u{8}\u{c}\n\r\t")),
        r#""\b\f\n\r\t""#
    );
}

#[test]
fn escapes_other_control_characters_as_unicode() {
    assert_eq!(compact(&JsonVariant::from("\u{0}")), r#""\u0000""#);
    assert_eq!(compact(&JsonVariant::from("a\u{1f}b")), r#""a\u001fb""#);
    assert_eq!(compact(&JsonVariant::from("\u{b}")), r#""\u000b""#);
}

#[test]
fn delete_and_non_ascii_pass_through() {
    assert_eq!(compact(&JsonVariant::from("\u{7f}")), "\"\u{7f}\"");
    assert_eq!(compact(&JsonVariant::from("\u{e9}t\u{e9}")), "\"\u{e9}t\u{e9}\"");
    assert_eq!(compact(&JsonVariant::from("\u{1f600}")), "\"\u{1f600}\"");
}

#[test]
fn solidus_is_not_escaped() {
    assert_eq!(compact(&JsonVariant::from("a/b")), r#""a/b""#);
}

#[test]
fn escaped_strings_parse_back() {
    let original = "line1\nline2\t\"quoted\"\\\u{1}\u{e9}";
    let text = compact(&JsonVariant::from(original));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::Value::String(original.to_string()));
}

// ============================================================================
// Writer primitives
// ============================================================================

#[test]
fn writer_counts_every_accepted_byte() {
    let mut out = Vec::new();
    let mut writer = JsonWriter::new(&mut out);
    writer.begin_object();
    writer.write_string("k");
    writer.write_colon();
    writer.write_null();
    writer.write_comma();
    writer.write_string("n");
    writer.write_colon();
    writer.write_integer(-5);
    writer.end_object();
    assert_eq!(writer.bytes_written(), 17);
    assert_eq!(out, br#"{"k":null,"n":-5}"#);
}

#[test]
fn writer_over_full_buffer_counts_only_accepted_bytes() {
    let mut buf = [0u8; 5];
    let mut sink = BufferSink::new(&mut buf);
    let mut writer = JsonWriter::new(&mut sink);
    writer.write_string("abcdefgh");
    assert_eq!(writer.bytes_written(), 5);
    assert_eq!(sink.as_str(), "\"abcd");
}

// ============================================================================
// Pretty printing
// ============================================================================

#[test]
fn pretty_object_with_empty_array() {
    let empty = JsonArray::new(&[]);
    let pairs = [JsonPair::new("a", 1), JsonPair::new("b", &empty)];
    let root = JsonObject::new(&pairs);
    assert_eq!(
        root.to_pretty_json_string(),
        "{\r\n  \"a\": 1,\r\n  \"b\": []\r\n}"
    );
}

#[test]
fn pretty_nested_arrays() {
    let inner = [JsonVariant::from(1), JsonVariant::from(2)];
    let inner = JsonArray::new(&inner);
    let outer = [JsonVariant::from(&inner), JsonVariant::from("x")];
    let outer = JsonArray::new(&outer);
    assert_eq!(
        outer.to_pretty_json_string(),
        "[\r\n  [\r\n    1,\r\n    2\r\n  ],\r\n  \"x\"\r\n]"
    );
}

#[test]
fn pretty_empty_containers_stay_inline() {
    assert_eq!(JsonArray::new(&[]).to_pretty_json_string(), "[]");
    assert_eq!(JsonObject::new(&[]).to_pretty_json_string(), "{}");
}

#[test]
fn pretty_leaves_markup_inside_strings_alone() {
    let items = [JsonVariant::from("[a, {b}: \"c\"]\\")];
    let array = JsonArray::new(&items);
    assert_eq!(
        array.to_pretty_json_string(),
        "[\r\n  \"[a, {b}: \\\"c\\\"]\\\\\"\r\n]"
    );
}

#[test]
fn pretty_scalar_is_unchanged() {
    assert_eq!(JsonVariant::from("plain").to_pretty_json_string(), "\"plain\"");
    assert_eq!(JsonVariant::float(1.5, 1).to_pretty_json_string(), "1.5");
}

#[test]
fn pretty_output_parses_to_same_value_as_compact() {
    let tags = [JsonVariant::from("a"), JsonVariant::from("b")];
    let tags = JsonArray::new(&tags);
    let inner = [JsonPair::new("deep", JsonVariant::float(0.5, 1))];
    let inner = JsonObject::new(&inner);
    let pairs = [
        JsonPair::new("tags", &tags),
        JsonPair::new("inner", &inner),
        JsonPair::new("flag", false),
    ];
    let root = JsonObject::new(&pairs);

    let compact: serde_json::Value = serde_json::from_str(&root.to_json_string()).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&root.to_pretty_json_string()).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn pretty_keeps_spacing_of_unparsed_fragments() {
    let items = [JsonVariant::unparsed("{ \"a\": 1 }")];
    let array = JsonArray::new(&items);
    let text = array.to_pretty_json_string();
    assert_eq!(text, "[\r\n  {\r\n     \"a\":  1 \r\n  }\r\n]");
    assert_eq!(array.measure_pretty_length(), text.len());

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::json!([{ "a": 1 }]));
}

#[test]
fn prettyfier_used_directly_as_sink() {
    let mut out = Vec::new();
    let mut pretty = Prettyfier::new(&mut out);
    let n = pretty.print_str("{\"a\":[1]}");
    assert_eq!(out, b"{\r\n  \"a\": [\r\n    1\r\n  ]\r\n}");
    assert_eq!(n, out.len());
}

// ============================================================================
// Measuring
// ============================================================================

#[test]
fn measure_matches_rendered_lengths() {
    let items = [
        JsonVariant::from("caf\u{e9}"),
        JsonVariant::float(1.0, 3),
        JsonVariant::new(),
    ];
    let array = JsonArray::new(&items);
    assert_eq!(array.measure_length(), array.to_json_string().len());
    assert_eq!(array.measure_pretty_length(), array.to_pretty_json_string().len());
    assert!(array.measure_pretty_length() > array.measure_length());
}

#[test]
fn measure_counts_escapes() {
    assert_eq!(JsonVariant::from("\"\u{1}").measure_length(), 10);
}

// ============================================================================
// Buffers and checked printing
// ============================================================================

#[test]
fn print_to_buffer_fits() {
    let mut buf = [0u8; 32];
    let n = JsonVariant::from("ok").print_to_buffer(&mut buf);
    assert_eq!(n, 4);
    assert_eq!(&buf[..n], b"\"ok\"");
}

#[test]
fn print_to_buffer_truncates() {
    let items = [JsonVariant::from(12345), JsonVariant::from(67890)];
    let array = JsonArray::new(&items);
    let mut buf = [0u8; 6];
    assert_eq!(array.print_to_buffer(&mut buf), 6);
    assert_eq!(&buf, b"[12345");
}

#[test]
fn try_print_to_succeeds_when_everything_fits() {
    let mut out = Vec::new();
    assert_eq!(JsonVariant::from(true).try_print_to(&mut out), Ok(4));
    assert_eq!(JsonVariant::from(true).try_pretty_print_to(&mut out), Ok(4));
}

#[test]
fn try_print_to_reports_short_write() {
    let mut buf = [0u8; 3];
    let mut sink = BufferSink::new(&mut buf);
    let err = JsonVariant::from("hello").try_print_to(&mut sink).unwrap_err();
    assert_eq!(
        err,
        JsonError::ShortWrite {
            written: 3,
            expected: 7
        }
    );
    assert_eq!(err.to_string(), "short write: sink accepted 3 of 7 bytes");
}

#[test]
fn try_pretty_print_to_reports_short_write() {
    let items = [JsonVariant::from(1)];
    let array = JsonArray::new(&items);
    let mut buf = [0u8; 4];
    let mut sink = BufferSink::new(&mut buf);
    assert_eq!(
        array.try_pretty_print_to(&mut sink),
        Err(JsonError::ShortWrite {
            written: 4,
            expected: 9
        })
    );
}

#[test]
fn refusing_sink_gets_nothing() {
    struct ClosedSink;

    impl Print for ClosedSink {
        fn write(&mut self, _byte: u8) -> usize {
            0
        }
    }

    let pairs = [JsonPair::new("a", 1.5), JsonPair::new("b", "x")];
    let root = JsonObject::new(&pairs);
    assert_eq!(root.print_to(&mut ClosedSink), 0);
    assert_eq!(root.pretty_print_to(&mut ClosedSink), 0);
    assert!(root.try_print_to(&mut ClosedSink).is_err());
}
