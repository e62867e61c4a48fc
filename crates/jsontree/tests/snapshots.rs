#![expect(missing_docs)]

use jsontree::parse;

#[test]
fn snapshot_parsed_tree_debug() {
    let v = parse(r#"{"k":[1,2,{"x":"y"}],"s":"hello"}"#).unwrap();
    insta::assert_snapshot!(
        format!("{v:?}"),
        @r#"Object([Member { key: "k", value: Array([Number(1.0), Number(2.0), Object([Member { key: "x", value: String("y") }])]) }, Member { key: "s", value: String("hello") }])"#
    );
}

#[test]
fn snapshot_display_roundtrip() {
    let v = parse(
        r#" {
            "id" : 7 ,
            "name" : "grüß\tdich" ,
            "clef" : "𝄞" ,
            "tags" : [ true , false , null ] ,
            "tags" : [ ]
        } "#,
    )
    .unwrap();
    insta::assert_snapshot!(
        v.to_string(),
        @r#"{"id":7,"name":"grüß\tdich","clef":"𝄞","tags":[true,false,null],"tags":[]}"#
    );
}

#[test]
fn snapshot_error_display() {
    let err = parse(r#"{"a":1 "b":2}"#).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing comma or closing curly bracket at offset 7");
}
