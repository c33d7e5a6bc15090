//! Hypertext Transfer Protocol (HTTP/1.1): Authentication.
//!
//! Parameter fragments shared by challenges and credentials,
//! see [RFC 7235 section 2.1](https://tools.ietf.org/html/rfc7235#section-2.1).

use const_format::concatcp;

use super::rfc7230::{BWS_PATTERN, QUOTED_STRING_PATTERN, TOKEN_PATTERN};

/// The token68 syntax allows the 66 unreserved URI characters,
/// plus a few others, so that it can hold a base64, base64url,
/// base32 or base16 encoding, with or without padding,
/// but excluding whitespace.
pub const TOKEN68_PATTERN: &str = r"[a-zA-Z0-9._~+/-]+=*";

/// `auth-scheme = token`
pub const AUTH_SCHEME_PATTERN: &str = TOKEN_PATTERN;

/// Capture group 1 holds a token value, group 2 a quoted value.
///
/// Top-level alternation: wrap it in a non-capturing group before
/// composing it with anything else.
pub const AUTH_PARAM_VALUE_PATTERN: &str = concatcp!("(", TOKEN_PATTERN, ")|", QUOTED_STRING_PATTERN);

/// ```text
/// auth-param = token BWS "=" BWS ( token / quoted-string )
/// ```
///
/// Capture groups: 1 name, 2 token value, 3 quoted value.
pub const AUTH_PARAM_PATTERN: &str = concatcp!(
    "(",
    TOKEN_PATTERN,
    ")",
    BWS_PATTERN,
    "=",
    BWS_PATTERN,
    "(?:",
    AUTH_PARAM_VALUE_PATTERN,
    ")"
);

/// Comma separated list of [`AUTH_PARAM_PATTERN`]s.
pub const AUTH_PARAM_LIST_PATTERN: &str = concatcp!(
    AUTH_PARAM_PATTERN,
    "(?:",
    BWS_PATTERN,
    ",",
    BWS_PATTERN,
    AUTH_PARAM_PATTERN,
    ")*"
);
