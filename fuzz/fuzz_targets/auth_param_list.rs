#![no_main]

use http_params::{ParameterMap, UnserializeOptions, unserialize_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let mut params = ParameterMap::new();
    let consumed = unserialize_with(&mut params, &input, UnserializeOptions::auth_params());
    assert!(consumed <= input.len());
    assert!(input.is_char_boundary(consumed));
});
