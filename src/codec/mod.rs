//! Serialization and parsing of parameter lists.
//!
//! ```text
//! parameter-list = parameter *( OWS ";" OWS parameter )
//! parameter      = token "=" ( token / quoted-string )
//! ```
//!
//! [`unserialize`] scans a header fragment with a [`ParameterGrammar`]
//! into any [`ParameterStore`], [`serialize`] writes entries back,
//! quoting values which are not tokens.
//!
//! [`ParameterStore`]: crate::ParameterStore

mod grammar;
#[doc(inline)]
pub use grammar::{Capture, ParameterGrammar, ParameterGrammarBuilder, Transform};

mod serialize;
#[doc(inline)]
pub use serialize::{
    DEFAULT_SERIALIZE_DELIMITER, SerializeOptions, encode_value, quote, serialize, serialize_with,
    unescape_quoted_pairs, write_parameters,
};

mod unserialize;
#[doc(inline)]
pub use unserialize::{Acceptance, UnserializeOptions, unserialize, unserialize_with};
