//! Http header parameter lists, as defined by
//! [RFC 7230 section 3.2.6](https://www.rfc-editor.org/rfc/rfc7230#section-3.2.6).
//!
//! ```text
//! Content-Type: text/html; charset="utf-8"; level=1
//!                          ^^^^^^^^^^^^^^^^^^^^^^^^
//! ```
//!
//! `http-params` parses such lists, stores them in a case-insensitive
//! but case-preserving ordered map, and serializes them back to their
//! wire format, quoting values where needed.
//!
//! - [`grammar`]: the RFC 7230 / RFC 7235 grammar as regex fragments
//!   and character predicates;
//! - [`ParameterMap`]: the ordered, case-insensitive parameter map;
//! - [`codec`]: [`serialize`] and [`unserialize`], configurable
//!   with a custom [`ParameterGrammar`], delimiter and accept callback;
//! - [`ParameterStore`]: the sink [`unserialize`] writes into,
//!   implemented for the map as well as std and [`indexmap`] maps.
//!
//! # Example
//!
//! ```
//! use http_params::ParameterMap;
//!
//! let mut params: ParameterMap = r#"charset="utf-8"; level=1"#.parse().unwrap();
//! assert_eq!(Some("utf-8"), params.try_get("Charset"));
//!
//! params.insert("title", "Hello, World");
//! assert_eq!(
//!     r#"charset=utf-8; level=1; title="Hello, World""#,
//!     params.to_string(),
//! );
//! ```
//!
//! Auth parameters (RFC 7235) are separated by a comma and
//! allow whitespace around the `=` sign:
//!
//! ```
//! use http_params::{ParameterMap, UnserializeOptions, unserialize_with};
//!
//! let mut params = ParameterMap::new();
//! let input = r#"realm = "example.com", charset=UTF-8"#;
//! let consumed = unserialize_with(&mut params, input, UnserializeOptions::auth_params());
//!
//! assert_eq!(input.len(), consumed);
//! assert_eq!(Ok("example.com"), params.get("realm"));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`ParameterMap`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod macros;

pub mod codec;
pub mod error;
pub mod grammar;

mod map;
#[doc(inline)]
pub use map::{IntoIter, Iter, Keys, ParameterMap, Values};

mod store;
#[doc(inline)]
pub use store::ParameterStore;

#[doc(inline)]
pub use codec::{
    Acceptance, ParameterGrammar, SerializeOptions, UnserializeOptions, serialize,
    serialize_with, unserialize, unserialize_with,
};

#[doc(inline)]
pub use error::{InvalidGrammar, InvalidParameterName, ParameterNotFound, ParseParameterListError};

pub mod dep {
    //! Dependencies of `http-params` exposed in its public API.

    pub use indexmap;
    pub use regex;
    pub use smol_str;
}
