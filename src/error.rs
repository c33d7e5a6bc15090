//! Error types returned by the parameter map and codec.

use smol_str::SmolStr;
use std::fmt;

use crate::codec::Capture;

crate::macros::static_str_error! {
    /// Returned by [`ParameterMap::try_insert`] when the name
    /// is not a valid RFC 7230 token.
    ///
    /// [`ParameterMap::try_insert`]: crate::ParameterMap::try_insert
    pub struct InvalidParameterName = "parameter name is not a valid token";
}

/// Returned by the strict [`ParameterMap::get`] accessor
/// when no parameter matches the requested name.
///
/// Use [`ParameterMap::try_get`] when absence is an expected outcome.
///
/// [`ParameterMap::get`]: crate::ParameterMap::get
/// [`ParameterMap::try_get`]: crate::ParameterMap::try_get
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNotFound {
    name: SmolStr,
}

impl ParameterNotFound {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
        }
    }

    /// The name that was looked up, as given by the caller.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParameterNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} parameter not found", self.name)
    }
}

impl std::error::Error for ParameterNotFound {}

/// Error returned when parsing a complete parameter list
/// (e.g. via [`str::parse`]) leaves unparsed input behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParameterListError {
    consumed: usize,
    len: usize,
}

impl ParseParameterListError {
    pub(crate) fn new(consumed: usize, len: usize) -> Self {
        Self { consumed, len }
    }

    /// Number of bytes that were parsed successfully.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Total length of the input, in bytes.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for ParseParameterListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid parameter list: unexpected input at byte {} of {}",
            self.consumed, self.len
        )
    }
}

impl std::error::Error for ParseParameterListError {}

/// Error returned when a custom [`ParameterGrammar`] cannot be built.
///
/// [`ParameterGrammar`]: crate::codec::ParameterGrammar
#[derive(Debug)]
pub struct InvalidGrammar {
    kind: InvalidGrammarKind,
}

#[derive(Debug)]
enum InvalidGrammarKind {
    Regex(regex::Error),
    UnknownCapture(Capture),
}

impl InvalidGrammar {
    pub(crate) fn regex(err: regex::Error) -> Self {
        Self {
            kind: InvalidGrammarKind::Regex(err),
        }
    }

    pub(crate) fn unknown_capture(capture: Capture) -> Self {
        Self {
            kind: InvalidGrammarKind::UnknownCapture(capture),
        }
    }

    /// The capture reference which does not exist in the compiled pattern, if that was the cause.
    #[must_use]
    pub fn unknown_capture_ref(&self) -> Option<&Capture> {
        match &self.kind {
            InvalidGrammarKind::UnknownCapture(capture) => Some(capture),
            InvalidGrammarKind::Regex(_) => None,
        }
    }
}

impl fmt::Display for InvalidGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InvalidGrammarKind::Regex(err) => write!(f, "invalid parameter grammar: {err}"),
            InvalidGrammarKind::UnknownCapture(capture) => {
                write!(f, "invalid parameter grammar: unknown capture group {capture}")
            }
        }
    }
}

impl std::error::Error for InvalidGrammar {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InvalidGrammarKind::Regex(err) => Some(err),
            InvalidGrammarKind::UnknownCapture(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_not_found_message() {
        let err = ParameterNotFound::new("WTF");
        assert_eq!("WTF", err.name());
        assert_eq!("WTF parameter not found", err.to_string());
    }

    #[test]
    fn invalid_grammar_keeps_regex_source() {
        use std::error::Error as _;

        let err = InvalidGrammar::regex(regex::Regex::new("(").unwrap_err());
        assert!(err.source().is_some());
        assert!(err.unknown_capture_ref().is_none());

        let err = InvalidGrammar::unknown_capture(Capture::Index(7));
        assert!(err.source().is_none());
        assert_eq!(Some(&Capture::Index(7)), err.unknown_capture_ref());
        assert_eq!(
            "invalid parameter grammar: unknown capture group #7",
            err.to_string()
        );
    }
}
