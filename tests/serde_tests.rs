#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// `serde` feature tests
use search_params_helper::SearchParams;

#[test]
fn test_all_params_serialize_as_ordered_object() {
    let params = SearchParams::create("?b=2&a=1&b=3");
    let json = serde_json::to_string(&params.get_all_params()).unwrap();
    assert_eq!(json, r#"{"b":"2","a":"1"}"#);
}

#[test]
fn test_param_list_serializes_absent_as_null() {
    let params = SearchParams::create("a=1");
    let json = serde_json::to_string(&params.get_param_list(["a", "b"])).unwrap();
    assert_eq!(json, r#"{"a":"1","b":null}"#);
}

#[test]
fn test_search_params_as_string() {
    let params = SearchParams::create("q=a b&x=%26");
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#""q=a+b&x=%26""#);

    let back: SearchParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}
