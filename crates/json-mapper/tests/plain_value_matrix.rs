//! Required single-value decoding through the plain strategy.

use json_mapper::{DecodeError, LookupError, Mapper, NodeKind, Plain};
use serde_json::{json, Map, Value};

#[test]
fn plain_scalars_decode_when_shape_matches() {
    let node = json!({
        "string": "hello",
        "bool": true,
        "int": -12,
        "uint": 40000,
        "float": 2.25,
    });
    let map = Mapper::new(&node);

    assert_eq!(map.get_plain::<String>("string").unwrap(), "hello");
    assert!(map.get_plain::<bool>("bool").unwrap());
    assert_eq!(map.get_plain::<i32>("int").unwrap(), -12);
    assert_eq!(map.get_plain::<u16>("uint").unwrap(), 40000);
    assert_eq!(map.get_plain::<f64>("float").unwrap(), 2.25);
}

#[test]
fn plain_raw_tree_values() {
    let node = json!({"any": [1, {"x": null}], "obj": {"k": "v"}});
    let map = Mapper::new(&node);

    assert_eq!(
        map.get_plain::<Value>("any").unwrap(),
        json!([1, {"x": null}])
    );
    assert_eq!(map.get_plain::<Vec<Value>>("any").unwrap().len(), 2);
    let obj = map.get_plain::<Map<String, Value>>("obj").unwrap();
    assert_eq!(obj.get("k"), Some(&json!("v")));
}

#[test]
fn missing_key_is_reported_by_name() {
    let node = json!({});
    let err = Mapper::new(&node).get_plain::<String>("name").unwrap_err();
    assert!(matches!(err, DecodeError::MissingKey(ref key) if key == "name"));
    assert_eq!(err.to_string(), "no value under key `name`");
}

#[test]
fn shape_mismatch_is_translated_lookup_failure() {
    let node = json!({"name": 5, "small": 300, "null": null});
    let map = Mapper::new(&node);

    assert!(matches!(
        map.get_plain::<String>("name"),
        Err(DecodeError::Lookup(LookupError::TypeMismatch {
            expected: NodeKind::String,
            found: NodeKind::Number,
        }))
    ));
    assert!(matches!(
        map.get_plain::<u8>("small"),
        Err(DecodeError::Lookup(LookupError::OutOfRange { expected: "u8" }))
    ));
    // A present null is a shape failure, not a missing key.
    assert!(matches!(
        map.get_plain::<bool>("null"),
        Err(DecodeError::Lookup(LookupError::TypeMismatch {
            found: NodeKind::Null,
            ..
        }))
    ));
}

#[test]
fn generic_accessor_matches_named_wrapper() {
    let node = json!({"n": 3});
    let map = Mapper::new(&node);
    let via_generic: u64 = map.get::<Plain, _>("n").unwrap();
    assert_eq!(via_generic, map.get_plain::<u64>("n").unwrap());
}

#[test]
fn f32_beyond_its_range_is_out_of_range() {
    let node = json!({"x": 1e300, "xs": [1e300, 0.5], "ok": 0.25});
    let map = Mapper::new(&node);

    assert!(matches!(
        map.get_plain::<f32>("x"),
        Err(DecodeError::Lookup(LookupError::OutOfRange { expected: "f32" }))
    ));
    assert_eq!(map.get_plain::<f32>("ok").unwrap(), 0.25);
    assert_eq!(map.get_plain::<f64>("x").unwrap(), 1e300);
    // the unrepresentable element is dropped, not kept as infinity
    assert_eq!(map.get_plain_array::<f32>("xs").unwrap(), [0.5]);
    assert_eq!(map.get_convertible_array::<f32>("xs").unwrap(), [0.5]);
    assert_eq!(map.get_plain_optional::<f32>("x"), None);
}

#[test]
fn plain_accessor_agrees_with_node_extraction() {
    use json_mapper::NodeExt;

    let node = json!({"name": "ada", "age": "old"});
    let map = Mapper::new(&node);

    assert_eq!(
        map.get_plain::<String>("name").unwrap(),
        node.extract::<String>("name").unwrap()
    );
    assert!(matches!(
        (map.get_plain::<u32>("age"), node.extract::<u32>("age")),
        (Err(DecodeError::Lookup(a)), Err(b)) if a == b
    ));
    assert!(matches!(
        (map.get_plain::<u32>("email"), node.extract::<u32>("email")),
        (Err(DecodeError::MissingKey(a)), Err(LookupError::MissingKey(b))) if a == b
    ));
}
