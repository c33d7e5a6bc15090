use std::borrow::Cow;
use std::fmt;

use crate::grammar::{is_qdtext, is_token};

/// Delimiter used to join parameters when none is configured.
pub const DEFAULT_SERIALIZE_DELIMITER: &str = "; ";

/// Options for [`serialize_with`] and [`write_parameters`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    delimiter: Cow<'static, str>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializeOptions {
    /// Options joining parameters with `"; "`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: Cow::Borrowed(DEFAULT_SERIALIZE_DELIMITER),
        }
    }

    /// The string written in between two parameters.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Set the string written in between two parameters.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<Cow<'static, str>>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the string written in between two parameters.
    pub fn set_delimiter(&mut self, delimiter: impl Into<Cow<'static, str>>) -> &mut Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Serialize parameters into a parameter list, joined by `"; "`.
///
/// Parameters are written in iteration order.
///
/// ```
/// use http_params::{ParameterMap, serialize};
///
/// let params = ParameterMap::from([("charset", "utf-8"), ("title", "Hello, World")]);
/// assert_eq!(r#"charset=utf-8; title="Hello, World""#, serialize(&params));
/// ```
pub fn serialize<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    serialize_with(params, &SerializeOptions::new())
}

/// Serialize parameters into a parameter list using the given options.
pub fn serialize_with<I, K, V>(params: I, options: &SerializeOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    // writing into a String does not fail
    write_parameters(&mut out, params, options)
        .map(|()| out)
        .unwrap_or_default()
}

/// Write parameters as a parameter list into any [`fmt::Write`] sink.
pub fn write_parameters<W, I, K, V>(w: &mut W, params: I, options: &SerializeOptions) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (index, (name, value)) in params.into_iter().enumerate() {
        if index > 0 {
            w.write_str(options.delimiter())?;
        }
        write!(w, "{}={}", name.as_ref(), encode_value(value.as_ref()))?;
    }
    Ok(())
}

/// Encode a parameter value: as is if it is a token,
/// as a quoted-string otherwise.
#[must_use]
pub fn encode_value(value: &str) -> Cow<'_, str> {
    if is_token(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quote(value))
    }
}

/// Wrap a value in double quotes, escaping each character
/// which is not allowed as quoted text with a backslash.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if !is_qdtext(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Replace each quoted-pair (`\X`) by the escaped character (`X`).
///
/// A trailing lone backslash is kept.
#[must_use]
pub fn unescape_quoted_pairs(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_values() {
        for (value, expected) in [
            ("value", "value"),
            ("UTF-8", "UTF-8"),
            ("", r#""""#),
            ("Some value", r#""Some value""#),
            (";", r#"";""#),
            (r#"A "quoted" text"#, r#""A \"quoted\" text""#),
            (r"back\slash", r#""back\\slash""#),
            ("tab\tand é", "\"tab\tand é\""),
            ("new\nline", "\"new\\\nline\""),
            ("a&b", r#""a&b""#),
        ] {
            assert_eq!(expected, encode_value(value), "value {value:?}");
        }
    }

    #[test]
    fn unescape() {
        for (input, expected) in [
            ("plain", "plain"),
            (r#"A \"quoted\" text"#, r#"A "quoted" text"#),
            (r"back\\slash", r"back\slash"),
            (r"\a\b\c", "abc"),
            ("trailing\\", "trailing\\"),
        ] {
            assert_eq!(expected, unescape_quoted_pairs(input), "input {input:?}");
        }
        assert!(matches!(unescape_quoted_pairs("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn quote_then_unescape_restores_value() {
        for value in ["", "Some value", r#"A "quoted" text"#, r"\\", "é\t€"] {
            let quoted = quote(value);
            let inner = &quoted[1..quoted.len() - 1];
            assert_eq!(value, unescape_quoted_pairs(inner));
        }
    }

    #[test]
    fn serialize_in_order() {
        let params = [
            ("key", "value"),
            ("Foo", "bar"),
            ("delimiter", ";"),
            ("empty", ""),
        ];
        assert_eq!(
            r#"key=value; Foo=bar; delimiter=";"; empty="""#,
            serialize(params)
        );
        assert_eq!(
            r#"key=value,Foo=bar,delimiter=";",empty="""#,
            serialize_with(params, &SerializeOptions::new().with_delimiter(","))
        );
    }

    #[test]
    fn serialize_single_parameter_has_no_delimiter() {
        let options = SerializeOptions::new().with_delimiter(" | ");
        assert_eq!("key=value", serialize_with([("key", "value")], &options));
        assert_eq!(
            "a=1 | b=2 | c=3",
            serialize_with([("a", "1"), ("b", "2"), ("c", "3")], &options)
        );
    }

    #[test]
    fn serialize_nothing() {
        assert_eq!("", serialize(Vec::<(String, String)>::new()));
    }

    #[test]
    fn write_parameters_matches_serialize() {
        let params = vec![
            (String::from("realm"), String::from("example.com")),
            (String::from("title"), String::from("Hello, World")),
        ];

        let mut options = SerializeOptions::default();
        options.set_delimiter(", ");

        let mut out = String::new();
        write_parameters(&mut out, params.iter().map(|(k, v)| (k, v)), &options).unwrap();
        assert_eq!(serialize_with(params, &options), out);
        assert_eq!(r#"realm=example.com, title="Hello, World""#, out);
    }
}
