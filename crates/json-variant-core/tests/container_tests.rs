/// Array and object views: lookups, invalid placeholders, undefined
/// handling during serialization, and nested documents.
use json_variant_core::{JsonArray, JsonObject, JsonPair, JsonPrintable, JsonVariant, VariantKind};

#[test]
fn array_lookup_and_iteration() {
    let items = [JsonVariant::from(10), JsonVariant::from("x")];
    let array = JsonArray::new(&items);
    assert!(array.success());
    assert_eq!(array.len(), 2);
    assert_eq!(array.get(0), JsonVariant::Integer(10));
    assert_eq!(array[1].get::<&str>(), "x");
    assert!(!array.get(2).is_defined());
    assert!(!array[99].is_defined());

    let kinds: Vec<VariantKind> = array.iter().map(JsonVariant::kind).collect();
    assert_eq!(kinds, [VariantKind::Integer, VariantKind::String]);

    let mut count = 0;
    for item in &array {
        assert!(item.is_defined());
        count += 1;
    }
    assert_eq!(count, 2);
    assert_eq!(array.as_slice().len(), 2);
}

#[test]
fn object_lookup() {
    let pairs = [JsonPair::new("id", 7), JsonPair::new("name", "sensor")];
    let object = JsonObject::new(&pairs);
    assert!(object.success());
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("id").get::<u8>(), 7);
    assert_eq!(object["name"].get::<&str>(), "sensor");
    assert!(object.contains_key("name"));
    assert!(!object.contains_key("Name"));
    assert!(!object["missing"].is_defined());

    let keys: Vec<&str> = object.iter().map(|pair| pair.key).collect();
    assert_eq!(keys, ["id", "name"]);
}

#[test]
fn duplicate_keys_lookup_first_and_serialize_all() {
    let pairs = [JsonPair::new("k", 1), JsonPair::new("k", 2)];
    let object = JsonObject::new(&pairs);
    assert_eq!(object["k"].get::<i32>(), 1);
    assert_eq!(object.to_json_string(), r#"{"k":1,"k":2}"#);
}

#[test]
fn invalid_placeholders_are_empty_and_shared() {
    let array = JsonArray::invalid();
    let object = JsonObject::invalid();
    assert!(!array.success());
    assert!(!object.success());
    assert!(array.is_empty());
    assert!(object.is_empty());
    assert!(std::ptr::eq(array, JsonArray::invalid()));
    assert!(std::ptr::eq(object, JsonObject::invalid()));
    assert!(!array[0].is_defined());
    assert!(!object["x"].is_defined());
}

#[test]
fn invalid_placeholders_serialize_as_empty_containers() {
    assert_eq!(JsonArray::invalid().to_json_string(), "[]");
    assert_eq!(JsonObject::invalid().to_json_string(), "{}");
}

#[test]
fn empty_but_valid_containers() {
    let array = JsonArray::new(&[]);
    let object = JsonObject::new(&[]);
    assert!(array.success());
    assert!(object.success());
    assert_eq!(array.to_json_string(), "[]");
    assert_eq!(object.to_json_string(), "{}");
}

#[test]
fn undefined_array_elements_become_null() {
    let items = [JsonVariant::from(1), JsonVariant::new(), JsonVariant::from(3)];
    let array = JsonArray::new(&items);
    assert_eq!(array.to_json_string(), "[1,null,3]");
    assert_eq!(array.len(), 3);
}

#[test]
fn undefined_object_values_are_omitted() {
    let pairs = [
        JsonPair::new("skip", JsonVariant::new()),
        JsonPair::new("a", 1),
        JsonPair::new("gone", None::<i32>),
        JsonPair::new("b", Some(2)),
    ];
    let object = JsonObject::new(&pairs);
    assert_eq!(object.to_json_string(), r#"{"a":1,"b":2}"#);
    assert_eq!(object.len(), 4);
}

#[test]
fn object_with_only_undefined_values_is_empty() {
    let pairs = [JsonPair::new("x", JsonVariant::new())];
    assert_eq!(JsonObject::new(&pairs).to_json_string(), "{}");
    assert_eq!(JsonObject::new(&pairs).to_pretty_json_string(), "{}");
}

#[test]
fn keys_are_escaped() {
    let pairs = [JsonPair::new("a\"b\n", true)];
    assert_eq!(JsonObject::new(&pairs).to_json_string(), r#"{"a\"b\n":true}"#);
}

#[test]
fn chained_index_through_nested_document() {
    let coords = [JsonVariant::float(48.8566, 4), JsonVariant::float(2.3522, 4)];
    let coords = JsonArray::new(&coords);
    let place = [JsonPair::new("coords", &coords)];
    let place = JsonObject::new(&place);
    let places = [JsonVariant::from(&place)];
    let places = JsonArray::new(&places);
    let root = [JsonPair::new("places", &places)];
    let root = JsonObject::new(&root);
    let doc = JsonVariant::from(&root);

    assert_eq!(doc["places"][0]["coords"][1].get::<f64>(), 2.3522);
    assert_eq!(doc["places"][0]["coords"][5].get::<f64>(), 0.0);
    assert_eq!(doc["places"]["coords"].get::<f64>(), 0.0);
    assert!(!doc["places"][0]["coords"]["lat"].is_defined());
}

#[test]
fn nested_document_is_valid_json() {
    let nums = [JsonVariant::from(-1), JsonVariant::float(0.125, 3), JsonVariant::new()];
    let nums = JsonArray::new(&nums);
    let meta = [
        JsonPair::new("raw", JsonVariant::unparsed("[true,false]")),
        JsonPair::new("label", "t\u{e9}st\t1"),
    ];
    let meta = JsonObject::new(&meta);
    let pairs = [
        JsonPair::new("nums", &nums),
        JsonPair::new("meta", &meta),
        JsonPair::new("nan", f64::NAN),
    ];
    let root = JsonObject::new(&pairs);

    let parsed: serde_json::Value = serde_json::from_str(&root.to_json_string()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "nums": [-1, 0.125, null],
            "meta": { "raw": [true, false], "label": "t\u{e9}st\t1" },
            "nan": null
        })
    );

    let pretty: serde_json::Value = serde_json::from_str(&root.to_pretty_json_string()).unwrap();
    assert_eq!(parsed, pretty);
}

#[test]
fn container_variants_print_like_the_container() {
    let items = [JsonVariant::from(false)];
    let array = JsonArray::new(&items);
    assert_eq!(JsonVariant::from(&array).to_json_string(), array.to_json_string());
    assert_eq!(JsonVariant::from(&array).to_string(), "[false]");
}
