use std::fmt;

use super::ParameterGrammar;
use crate::ParameterStore;

/// Decision taken by the accept callback of [`UnserializeOptions`]
/// for each matched parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Acceptance {
    /// Store the parameter and continue.
    #[default]
    Accept,
    /// Skip the parameter and continue.
    Ignore,
    /// Stop scanning, the current parameter is neither stored nor consumed.
    Abort,
}

impl From<i32> for Acceptance {
    /// `>= 1` accepts, `0` ignores and `<= -1` aborts.
    fn from(value: i32) -> Self {
        match value {
            1.. => Self::Accept,
            0 => Self::Ignore,
            _ => Self::Abort,
        }
    }
}

impl From<bool> for Acceptance {
    /// `true` accepts, `false` ignores.
    fn from(value: bool) -> Self {
        if value { Self::Accept } else { Self::Ignore }
    }
}

type AcceptFn<'a> = Box<dyn FnMut(&str, &str) -> Acceptance + 'a>;

/// Options for [`unserialize_with`].
///
/// By default parameters are matched with [`ParameterGrammar::rfc7230`],
/// separated by `;`, and all of them are accepted.
pub struct UnserializeOptions<'a> {
    grammar: &'a ParameterGrammar,
    delimiter: char,
    accept: Option<AcceptFn<'a>>,
}

impl fmt::Debug for UnserializeOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnserializeOptions")
            .field("grammar", &self.grammar.as_str())
            .field("delimiter", &self.delimiter)
            .field("accept", &self.accept.is_some())
            .finish()
    }
}

impl Default for UnserializeOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> UnserializeOptions<'a> {
    /// Default options: RFC 7230 parameters separated by `;`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grammar: ParameterGrammar::rfc7230(),
            delimiter: ';',
            accept: None,
        }
    }

    /// Options for the comma separated `auth-param` lists
    /// of the authentication headers (RFC 7235).
    #[must_use]
    pub fn auth_params() -> Self {
        Self {
            grammar: ParameterGrammar::rfc7235_auth_param(),
            delimiter: ',',
            accept: None,
        }
    }

    /// The grammar used to match a single parameter.
    #[must_use]
    pub fn grammar(&self) -> &ParameterGrammar {
        self.grammar
    }

    /// The character expected in between two parameters.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Set the grammar used to match a single parameter.
    #[must_use]
    pub fn with_grammar(mut self, grammar: &'a ParameterGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Set the grammar used to match a single parameter.
    pub fn set_grammar(&mut self, grammar: &'a ParameterGrammar) -> &mut Self {
        self.grammar = grammar;
        self
    }

    /// Set the character expected in between two parameters.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the character expected in between two parameters.
    pub fn set_delimiter(&mut self, delimiter: char) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Decide per matched `(name, value)` whether it is stored,
    /// skipped, or ends the scan.
    ///
    /// The callback may return an [`Acceptance`] or anything
    /// converting into one, such as a `bool` or an `i32`.
    #[must_use]
    pub fn with_accept<F, A>(mut self, accept: F) -> Self
    where
        F: FnMut(&str, &str) -> A + 'a,
        A: Into<Acceptance>,
    {
        self.set_accept(accept);
        self
    }

    /// Decide per matched `(name, value)` whether it is stored,
    /// skipped, or ends the scan.
    pub fn set_accept<F, A>(&mut self, mut accept: F) -> &mut Self
    where
        F: FnMut(&str, &str) -> A + 'a,
        A: Into<Acceptance>,
    {
        self.accept = Some(Box::new(move |name: &str, value: &str| -> Acceptance {
            accept(name, value).into()
        }));
        self
    }

    fn decide(&mut self, name: &str, value: &str) -> Acceptance {
        match self.accept.as_mut() {
            Some(accept) => accept(name, value),
            None => Acceptance::Accept,
        }
    }
}

/// Parse an RFC 7230 parameter list into `store`.
///
/// Returns the number of bytes consumed. Scanning stops at the first
/// input that does not continue the list, which is not an error:
/// compare the result with `text.len()` to detect leftover input.
///
/// ```
/// use http_params::{ParameterMap, unserialize};
///
/// let mut params = ParameterMap::new();
/// let consumed = unserialize(&mut params, r#"charset=utf-8; title="Hello, World""#);
///
/// assert_eq!(35, consumed);
/// assert_eq!(Some("Hello, World"), params.try_get("TITLE"));
/// ```
pub fn unserialize<S>(store: &mut S, text: &str) -> usize
where
    S: ParameterStore + ?Sized,
{
    unserialize_with(store, text, UnserializeOptions::new())
}

/// Parse a parameter list into `store` using the given options.
///
/// See [`unserialize`].
pub fn unserialize_with<S>(store: &mut S, text: &str, mut options: UnserializeOptions<'_>) -> usize
where
    S: ParameterStore + ?Sized,
{
    let mut consumed = 0;

    while let Some(remaining) = text.get(consumed..).filter(|s| !s.is_empty()) {
        let Some(parameter) = options.grammar.match_parameter(remaining) else {
            tracing::debug!(
                consumed,
                remaining = remaining.len(),
                "parameter list: stop scan on unmatched input"
            );
            break;
        };

        match options.decide(&parameter.name, &parameter.value) {
            Acceptance::Abort => {
                tracing::debug!(
                    consumed,
                    remaining = remaining.len(),
                    name = %parameter.name,
                    "parameter list: scan aborted"
                );
                break;
            }
            Acceptance::Ignore => {
                tracing::trace!(name = %parameter.name, "parameter list: ignore parameter");
            }
            Acceptance::Accept => {
                tracing::trace!(name = %parameter.name, "parameter list: accept parameter");
                store.set_parameter(&parameter.name, parameter.value.into_owned());
            }
        }

        consumed += parameter.len;

        match text.get(consumed..).and_then(|s| s.chars().next()) {
            Some(c) if c == options.delimiter => consumed += c.len_utf8(),
            _ => break,
        }
    }

    consumed
}
