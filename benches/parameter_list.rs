use divan::AllocProfiler;
use http_params::{ParameterMap, UnserializeOptions, serialize, unserialize, unserialize_with};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench(args = [
    "key=value",
    "charset=utf-8; boundary=something; level=1",
    r#"delimiter=";"; key="A \"quoted\" text"; title="Hello, World""#,
    "   key=value; Foo=bar; valid-token#name=content;  ",
])]
fn parameter_list_unserialize(input: &str) -> ParameterMap {
    let mut params = ParameterMap::new();
    unserialize(&mut params, divan::black_box(input));
    params
}

#[divan::bench(args = [
    r#"realm="example.com", charset=UTF-8"#,
    r#"realm = "example.com", qop="auth, auth-int", nonce=dcd98b7102dd2f0e8b11d0f600bfb0c093, opaque=5ccc069c403ebaf9f0171e9517f40e41"#,
])]
fn parameter_list_unserialize_auth_params(input: &str) -> ParameterMap {
    let mut params = ParameterMap::new();
    unserialize_with(
        &mut params,
        divan::black_box(input),
        UnserializeOptions::auth_params(),
    );
    params
}

#[divan::bench]
fn parameter_list_serialize(bencher: divan::Bencher) {
    let params = ParameterMap::from([
        ("charset", "utf-8"),
        ("delimiter", ";"),
        ("key", r#"A "quoted" text"#),
        ("title", "Hello, World"),
    ]);
    bencher.bench(|| serialize(divan::black_box(&params)));
}

#[divan::bench(args = [1, 8, 64])]
fn parameter_map_case_insensitive_lookup(n: usize) -> bool {
    let params: ParameterMap = (0..n).map(|i| (format!("Param-{i}"), i.to_string())).collect();
    params.contains_key(divan::black_box("PARAM-0"))
}
