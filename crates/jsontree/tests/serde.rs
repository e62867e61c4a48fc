//! Cross-validation of the `serde` feature against `serde_json`.

use jsontree::{Value, parse};

#[test]
fn deserializing_matches_parse() {
    let text = r#"{"a":[1,true,null,"s"],"b":{"c":2.5,"d":[]},"e":"f"}"#;
    let ours = parse(text).unwrap();
    let theirs: Value = serde_json::from_str(text).unwrap();
    assert_eq!(ours, theirs);
}

#[test]
fn serializing_preserves_member_order_and_duplicates() {
    let text = r#"{"z":1,"a":2,"z":3}"#;
    let v = parse(text).unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), text);
}

#[test]
fn roundtrip_through_serde_json_value() {
    let v = parse(r#"[null,true,1.25,"x",{"k":[]}]"#).unwrap();
    let json: serde_json::Value = serde_json::to_value(&v).unwrap();
    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}
