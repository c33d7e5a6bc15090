//! Grammar fragments for http header parameter lists.
//!
//! The constants in [`rfc7230`] and [`rfc7235`] are regular expression
//! fragments, composed into complete patterns by
//! [`ParameterGrammar`]. The predicates in this module accept exactly
//! the same character sets, for callers that do not need a regex.
//!
//! [`ParameterGrammar`]: crate::codec::ParameterGrammar

pub mod rfc7230;
pub mod rfc7235;

/// Returns `true` if the byte is allowed in a token (`tchar`).
#[inline]
#[must_use]
pub const fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'\''
                | b'*'
                | b'+'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
                | b'-'
        )
}

/// Returns `true` if `s` is a non-empty token.
#[must_use]
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_tchar)
}

/// Returns `true` if the byte is one of the delimiters
/// which terminate a token.
///
/// The backslash is not one of them.
#[inline]
#[must_use]
pub const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'"' | b'('
            | b')'
            | b','
            | b'/'
            | b':'
            | b';'
            | b'<'
            | b'='
            | b'>'
            | b'?'
            | b'@'
            | b'['
            | b']'
            | b'{'
            | b'}'
    )
}

/// Returns `true` if the character is obs-text.
#[inline]
#[must_use]
pub const fn is_obs_text(c: char) -> bool {
    !c.is_ascii()
}

/// Returns `true` if the character can appear unescaped
/// in between the quotes of a quoted-string.
#[inline]
#[must_use]
pub const fn is_qdtext(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\x21' | '\x23'..='\x5B' | '\x5D'..='\x7E') || is_obs_text(c)
}

/// Returns `true` if the character can follow the backslash of a quoted-pair.
#[inline]
#[must_use]
pub const fn is_quoted_pair_char(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\x21'..='\x7E') || is_obs_text(c)
}

/// Returns `true` if `s` matches the token68 syntax of credentials.
#[must_use]
pub fn is_token68(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'~' | b'+' | b'/' | b'-'))
}

/// Returns `true` if `s` is a valid header field name.
#[must_use]
pub fn is_header_field_name(s: &str) -> bool {
    is_token(s)
}
