//! Hypertext Transfer Protocol (HTTP/1.1): Message Syntax and Routing.
//!
//! Regular expression fragments for the field value components of
//! [RFC 7230 section 3.2.6](https://tools.ietf.org/html/rfc7230#section-3.2.6).

use const_format::concatcp;

/// Delimiters are chosen from the set of US-ASCII visual characters
/// not allowed in a token: DQUOTE and `"(),/:;<=>?@[]{}"`.
///
/// The backslash is left out, it only ever appears
/// as the escape of a quoted-pair.
pub const DELIMITER_PATTERN: &str = r#"["(),/:;<=>?@\[\]{}]"#;

/// Optional whitespace.
///
/// ```text
/// OWS = *( SP / HTAB )
/// ```
pub const OWS_PATTERN: &str = r"[\t ]*";

/// "Bad" whitespace, allowed by the grammar for historical reasons
/// and never produced by senders.
pub const BWS_PATTERN: &str = OWS_PATTERN;

/// Visible (printing) characters.
pub const VCHAR_RANGE: &str = r"\x21-\x7E";

/// Characters allowed in a token.
pub const TOKEN_CHAR_RANGE: &str = r"A-Za-z0-9!#$%'*+.^_`|~\x2D";

/// ```text
/// token = 1*tchar
/// ```
pub const TOKEN_PATTERN: &str = concatcp!("[", TOKEN_CHAR_RANGE, "]+");

/// `obs-text = %x80-FF`
///
/// Expressed over unicode scalar values: the UTF-8 encoding of any
/// non-ASCII character only consists of bytes in that range.
pub const OBS_TEXT_RANGE: &str = r"\x{80}-\x{10FFFF}";

/// ```text
/// quoted-pair = "\" ( HTAB / SP / VCHAR / obs-text )
/// ```
pub const QUOTED_PAIR_PATTERN: &str =
    concatcp!(r"\x5C[\x09\x20", VCHAR_RANGE, OBS_TEXT_RANGE, "]");

/// ```text
/// qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text
/// ```
pub const QUOTED_TEXT_RANGE: &str = concatcp!(r"\x09\x20\x21\x23-\x5B\x5D-\x7E", OBS_TEXT_RANGE);

/// Double quote.
pub const DQUOTE: &str = r"\x22";

/// ```text
/// quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
/// ```
///
/// The single capture group holds the text in between the quotes,
/// with its quoted-pairs still escaped.
pub const QUOTED_STRING_PATTERN: &str = concatcp!(
    DQUOTE,
    "((?:(?:",
    QUOTED_PAIR_PATTERN,
    ")|(?:[",
    QUOTED_TEXT_RANGE,
    "]+))*)",
    DQUOTE
);

/// ```text
/// parameter-value = ( token / quoted-string )
/// ```
///
/// Capture group 1 holds a token value, group 2 a quoted value.
/// Exactly one of both participates in a match.
pub const PARAMETER_VALUE_PATTERN: &str =
    concatcp!("(?:(", TOKEN_PATTERN, ")|", QUOTED_STRING_PATTERN, ")");

/// ```text
/// parameter = parameter-name "=" parameter-value
/// ```
///
/// Capture groups: 1 name, 2 token value, 3 quoted value.
pub const PARAMETER_PATTERN: &str = concatcp!("(", TOKEN_PATTERN, ")=", PARAMETER_VALUE_PATTERN);

/// Header field name, anchored at both ends.
pub const HEADER_FIELD_NAME_PATTERN: &str = r"^([a-zA-Z0-9!#$%'*+.^_`|~-]+)$";
