use http_params::{InvalidParameterName, ParameterMap, ParameterNotFound};

#[test]
fn parameter_map_from_initial_entries() {
    let params = ParameterMap::from([("key", "value"), ("Foo", "Bar")]);
    assert_eq!(2, params.len());
    assert_eq!(vec![("key", "value"), ("Foo", "Bar")], params.to_vec());
}

#[test]
fn parameter_map_remove() {
    let mut params = ParameterMap::from([("key", "value"), ("Foo", "Bar")]);
    assert_eq!(2, params.len());

    assert!(params.remove("foo").is_some());
    assert_eq!(1, params.len());
    assert_eq!(vec![("key", "value")], params.to_vec());
}

#[test]
fn parameter_map_case_insensitive() {
    let mut params = ParameterMap::new();
    params.insert("CaSe", "Insensitive");

    assert!(params.contains_key("caSE"));
    assert!(params.contains_key("cAsE"));
    assert_eq!(Ok("Insensitive"), params.get("caSE"));
}

#[test]
fn parameter_map_missing_parameter() {
    let params = ParameterMap::from([("bar", "baz")]);

    let err: ParameterNotFound = params.get("WTF").unwrap_err();
    assert_eq!("WTF parameter not found", err.to_string());
    assert_eq!(None, params.try_get("wtf"));
}

#[test]
fn parameter_map_overwrite_moves_to_end() {
    let mut params = ParameterMap::from([("first", "1"), ("second", "2")]);
    params.insert("FIRST", "one");
    assert_eq!(vec![("second", "2"), ("FIRST", "one")], params.to_vec());
    assert_eq!("second=2; FIRST=one", params.to_string());
}

#[test]
fn parameter_map_rejects_invalid_names() {
    let mut params = ParameterMap::new();
    let err = params.try_insert("not a token", "value").unwrap_err();
    assert_eq!(InvalidParameterName::new(), err);
    assert_eq!("parameter name is not a valid token", err.to_string());
    assert!(params.is_empty());
}

#[test]
fn parameter_map_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParameterMap>();
}
