use http_params::ParameterMap;
use serde_test::{Token, assert_de_tokens, assert_tokens};

#[test]
fn parameter_map_serde_tokens() {
    let params = ParameterMap::from([("charset", "utf-8"), ("Title", "Hello, World")]);
    assert_tokens(
        &params,
        &[
            Token::Map { len: Some(2) },
            Token::Str("charset"),
            Token::Str("utf-8"),
            Token::Str("Title"),
            Token::Str("Hello, World"),
            Token::MapEnd,
        ],
    );
}

#[test]
fn parameter_map_deserialize_collapses_casing() {
    let params = ParameterMap::from([("b", "2"), ("A", "3")]);
    assert_de_tokens(
        &params,
        &[
            Token::Map { len: Some(3) },
            Token::Str("a"),
            Token::Str("1"),
            Token::Str("b"),
            Token::Str("2"),
            Token::Str("A"),
            Token::Str("3"),
            Token::MapEnd,
        ],
    );
}

#[test]
fn parameter_map_json_keeps_order() {
    let params = ParameterMap::from([("z", "last?"), ("a", "first?")]);
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(r#"{"z":"last?","a":"first?"}"#, json);

    let back: ParameterMap = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);
}
