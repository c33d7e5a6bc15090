#![no_main]

use http_params::{ParameterMap, serialize, unserialize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let mut params = ParameterMap::new();
    let consumed = unserialize(&mut params, &input);
    assert!(consumed <= input.len());

    let text = serialize(&params);
    let mut reparsed = ParameterMap::new();
    assert_eq!(text.len(), unserialize(&mut reparsed, &text));
    assert_eq!(params, reparsed);
});
