use regex::{Captures, Match, Regex};
use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use super::unescape_quoted_pairs;
use crate::error::InvalidGrammar;
use crate::grammar::{rfc7230, rfc7235};

/// Post-processing applied to a captured name or value.
pub type Transform = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Reference to a capture group of a [`ParameterGrammar`] pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capture {
    /// Capture group by index, `0` being the entire match.
    Index(usize),
    /// Named capture group, e.g. `(?P<name>...)`.
    Name(SmolStr),
}

impl Capture {
    fn get<'h>(&self, captures: &Captures<'h>) -> Option<Match<'h>> {
        match self {
            Self::Index(index) => captures.get(*index),
            Self::Name(name) => captures.name(name),
        }
    }

    fn exists_in(&self, regex: &Regex) -> bool {
        match self {
            Self::Index(index) => *index < regex.captures_len(),
            Self::Name(name) => regex.capture_names().flatten().any(|n| n == name.as_str()),
        }
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<usize> for Capture {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Capture {
    fn from(name: &str) -> Self {
        Self::Name(SmolStr::new(name))
    }
}

/// A compiled parameter grammar, driving [`unserialize_with`].
///
/// Each scan step matches `WS PARAMETER WS`, anchored at the current offset.
/// The name is read from the name capture, the value from the token
/// capture if it participated in the match, from the quoted capture otherwise.
///
/// Cloning is cheap, the compiled regex is shared.
///
/// [`unserialize_with`]: super::unserialize_with
#[derive(Debug, Clone)]
pub struct ParameterGrammar {
    regex: Regex,
    name: Capture,
    token_value: Capture,
    quoted_value: Capture,
    name_transform: Option<Transform>,
    token_transform: Option<Transform>,
    quoted_transform: Option<Transform>,
}

/// A parameter matched at the start of the scanned input.
#[derive(Debug)]
pub(crate) struct MatchedParameter<'h> {
    pub(crate) len: usize,
    pub(crate) name: Cow<'h, str>,
    pub(crate) value: Cow<'h, str>,
}

impl ParameterGrammar {
    /// Start building a custom grammar, initialised as [`ParameterGrammar::rfc7230`].
    #[must_use]
    pub fn builder() -> ParameterGrammarBuilder {
        ParameterGrammarBuilder::default()
    }

    /// `parameter` surrounded by optional whitespace (RFC 7230 section 3.2.6).
    #[expect(
        clippy::expect_used,
        reason = "the pattern is built from constant fragments, covered by tests"
    )]
    pub fn rfc7230() -> &'static Self {
        static GRAMMAR: OnceLock<ParameterGrammar> = OnceLock::new();
        GRAMMAR.get_or_init(|| {
            Self::builder()
                .build()
                .expect("rfc7230 parameter grammar compiles")
        })
    }

    /// `auth-param` surrounded by bad whitespace (RFC 7235 section 2.1).
    #[expect(
        clippy::expect_used,
        reason = "the pattern is built from constant fragments, covered by tests"
    )]
    pub fn rfc7235_auth_param() -> &'static Self {
        static GRAMMAR: OnceLock<ParameterGrammar> = OnceLock::new();
        GRAMMAR.get_or_init(|| {
            Self::builder()
                .with_whitespace(rfc7230::BWS_PATTERN)
                .with_parameter(rfc7235::AUTH_PARAM_PATTERN)
                .build()
                .expect("rfc7235 auth-param grammar compiles")
        })
    }

    /// The full anchored pattern used to match a single parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn match_parameter<'h>(&self, haystack: &'h str) -> Option<MatchedParameter<'h>> {
        let captures = self.regex.captures(haystack)?;
        let len = captures.get(0)?.end();

        let name = self
            .name
            .get(&captures)
            .map_or(Cow::Borrowed(""), |m| apply(self.name_transform, m.as_str()));

        let value = if let Some(m) = self.token_value.get(&captures) {
            apply(self.token_transform, m.as_str())
        } else if let Some(m) = self.quoted_value.get(&captures) {
            apply(self.quoted_transform, m.as_str())
        } else {
            Cow::Borrowed("")
        };

        Some(MatchedParameter { len, name, value })
    }
}

fn apply(transform: Option<Transform>, s: &str) -> Cow<'_, str> {
    match transform {
        Some(transform) => transform(s),
        None => Cow::Borrowed(s),
    }
}

/// Builder for a custom [`ParameterGrammar`].
///
/// Patterns are regular expression fragments as found in [`crate::grammar`].
/// Capture references are checked against the compiled pattern in
/// [`build`](Self::build). Whitespace is composed around the parameter
/// in non-capturing groups, so it must not define capture groups of its own
/// when the parameter captures are referenced by index.
#[derive(Debug, Clone)]
pub struct ParameterGrammarBuilder {
    whitespace: Cow<'static, str>,
    parameter: Cow<'static, str>,
    name: Capture,
    token_value: Capture,
    quoted_value: Capture,
    name_transform: Option<Transform>,
    token_transform: Option<Transform>,
    quoted_transform: Option<Transform>,
}

impl Default for ParameterGrammarBuilder {
    fn default() -> Self {
        Self {
            whitespace: Cow::Borrowed(rfc7230::OWS_PATTERN),
            parameter: Cow::Borrowed(rfc7230::PARAMETER_PATTERN),
            name: Capture::Index(1),
            token_value: Capture::Index(2),
            quoted_value: Capture::Index(3),
            name_transform: None,
            token_transform: None,
            quoted_transform: Some(unescape_quoted_pairs as Transform),
        }
    }
}

impl ParameterGrammarBuilder {
    /// Pattern matched before and after each parameter.
    #[must_use]
    pub fn with_whitespace(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.whitespace = pattern.into();
        self
    }

    /// Pattern of a single parameter.
    #[must_use]
    pub fn with_parameter(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.parameter = pattern.into();
        self
    }

    /// Capture group holding the parameter name.
    #[must_use]
    pub fn with_name_capture(mut self, capture: impl Into<Capture>) -> Self {
        self.name = capture.into();
        self
    }

    /// Capture group holding a bare token value.
    #[must_use]
    pub fn with_token_capture(mut self, capture: impl Into<Capture>) -> Self {
        self.token_value = capture.into();
        self
    }

    /// Capture group holding the inner text of a quoted value.
    #[must_use]
    pub fn with_quoted_capture(mut self, capture: impl Into<Capture>) -> Self {
        self.quoted_value = capture.into();
        self
    }

    /// Post-process the captured name.
    #[must_use]
    pub fn with_name_transform(mut self, transform: Transform) -> Self {
        self.name_transform = Some(transform);
        self
    }

    /// Post-process a captured token value.
    #[must_use]
    pub fn with_token_transform(mut self, transform: Transform) -> Self {
        self.token_transform = Some(transform);
        self
    }

    /// Post-process a captured quoted value,
    /// [`unescape_quoted_pairs`] by default.
    #[must_use]
    pub fn with_quoted_transform(mut self, transform: Transform) -> Self {
        self.quoted_transform = Some(transform);
        self
    }

    /// Keep quoted values as captured, quoted-pairs included.
    #[must_use]
    pub fn without_quoted_transform(mut self) -> Self {
        self.quoted_transform = None;
        self
    }

    /// Compile the grammar.
    pub fn build(self) -> Result<ParameterGrammar, InvalidGrammar> {
        let pattern = format!(
            "^(?:{ws})(?:{parameter})(?:{ws})",
            ws = self.whitespace,
            parameter = self.parameter,
        );
        let regex = Regex::new(&pattern).map_err(InvalidGrammar::regex)?;

        for capture in [&self.name, &self.token_value, &self.quoted_value] {
            if !capture.exists_in(&regex) {
                return Err(InvalidGrammar::unknown_capture(capture.clone()));
            }
        }

        Ok(ParameterGrammar {
            regex,
            name: self.name,
            token_value: self.token_value,
            quoted_value: self.quoted_value,
            name_transform: self.name_transform,
            token_transform: self.token_transform,
            quoted_transform: self.quoted_transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_compile() {
        assert!(ParameterGrammar::rfc7230().as_str().starts_with('^'));
        assert!(ParameterGrammar::rfc7235_auth_param().as_str().starts_with('^'));
    }

    #[test]
    fn match_token_and_quoted_values() {
        let grammar = ParameterGrammar::rfc7230();

        let m = grammar.match_parameter("  key=value ; next=1").unwrap();
        assert_eq!("key", m.name);
        assert_eq!("value", m.value);
        assert_eq!("  key=value ".len(), m.len);

        let m = grammar.match_parameter(r#"key="A \"quoted\" text""#).unwrap();
        assert_eq!("key", m.name);
        assert_eq!(r#"A "quoted" text"#, m.value);

        let m = grammar.match_parameter(r#"empty="""#).unwrap();
        assert_eq!("empty", m.name);
        assert_eq!("", m.value);

        assert!(grammar.match_parameter("k e y=value").is_none());
        assert!(grammar.match_parameter("; key=value").is_none());
    }

    #[test]
    fn match_is_anchored() {
        assert!(
            ParameterGrammar::rfc7230()
                .match_parameter("garbage key=value")
                .is_none()
        );
    }

    #[test]
    fn auth_param_grammar_allows_whitespace_around_equals() {
        let m = ParameterGrammar::rfc7235_auth_param()
            .match_parameter(r#"realm = "example", charset=UTF-8"#)
            .unwrap();
        assert_eq!("realm", m.name);
        assert_eq!("example", m.value);
        assert_eq!(r#"realm = "example""#.len(), m.len);
    }

    #[test]
    fn named_captures_and_transforms() {
        fn lowercase(s: &str) -> Cow<'_, str> {
            Cow::Owned(s.to_ascii_lowercase())
        }

        let grammar = ParameterGrammar::builder()
            .with_parameter(r"(?P<key>[a-zA-Z]+):(?P<bare>[0-9]+)")
            .with_name_capture("key")
            .with_token_capture("bare")
            .with_quoted_capture(Capture::Index(0))
            .with_name_transform(lowercase)
            .build()
            .unwrap();

        let m = grammar.match_parameter("Answer:42").unwrap();
        assert_eq!("answer", m.name);
        assert_eq!("42", m.value);
        assert_eq!(9, m.len);
    }

    #[test]
    fn quoted_values_can_be_kept_escaped() {
        let grammar = ParameterGrammar::builder()
            .without_quoted_transform()
            .build()
            .unwrap();
        let m = grammar.match_parameter(r#"key="a \"b\"""#).unwrap();
        assert_eq!(r#"a \"b\""#, m.value);
    }

    #[test]
    fn build_rejects_invalid_grammars() {
        let err = ParameterGrammar::builder()
            .with_parameter("(unclosed")
            .build()
            .unwrap_err();
        assert!(err.unknown_capture_ref().is_none());

        let err = ParameterGrammar::builder()
            .with_quoted_capture(Capture::Index(4))
            .build()
            .unwrap_err();
        assert_eq!(Some(&Capture::Index(4)), err.unknown_capture_ref());

        let err = ParameterGrammar::builder()
            .with_name_capture("missing")
            .build()
            .unwrap_err();
        assert_eq!(Some(&Capture::from("missing")), err.unknown_capture_ref());
    }
}
