//! Case-insensitive, case-preserving ordered parameter map.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;

use crate::codec::{self, SerializeOptions};
use crate::error::{InvalidParameterName, ParameterNotFound, ParseParameterListError};
use crate::grammar::is_token;

mod iter;
pub use iter::{IntoIter, Iter, Keys, Values};

#[cfg(feature = "serde")]
mod serde;

/// An ordered map of http header parameters.
///
/// Names are compared ASCII case-insensitively but stored as given:
/// `Charset` and `charset` refer to the same parameter, and iteration
/// yields the casing of the last insert.
///
/// Inserting a name which is already present removes the old entry and
/// appends the new one, so the parameter moves to the end.
///
/// ```
/// use http_params::ParameterMap;
///
/// let mut params = ParameterMap::new();
/// params.insert("Charset", "utf-8");
/// params.insert("q", "0.5");
///
/// assert_eq!(Some("utf-8"), params.try_get("CHARSET"));
///
/// params.insert("charset", "latin1");
/// assert_eq!(vec![("q", "0.5"), ("charset", "latin1")], params.to_vec());
/// assert_eq!("q=0.5; charset=latin1", params.to_string());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterMap {
    entries: IndexMap<SmolStr, String>,
}

impl ParameterMap {
    /// Create an empty [`ParameterMap`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty [`ParameterMap`] with room for `capacity` parameters.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name).or_else(|| {
            self.entries
                .keys()
                .position(|key| key.eq_ignore_ascii_case(name))
        })
    }

    /// Returns `true` if a parameter matches `name` case-insensitively.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Value of the parameter matching `name` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterNotFound`] if no parameter matches.
    pub fn get(&self, name: &str) -> Result<&str, ParameterNotFound> {
        self.try_get(name)
            .ok_or_else(|| ParameterNotFound::new(name))
    }

    /// Value of the parameter matching `name` case-insensitively, if any.
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<&str> {
        let index = self.position(name)?;
        self.entries
            .get_index(index)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the parameter matching `name`, or `default`.
    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.try_get(name).unwrap_or(default)
    }

    /// Insert a parameter at the end of the map.
    ///
    /// A parameter matching `name` case-insensitively is removed first.
    pub fn insert(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) {
        let name = name.into();
        if let Some((previous, _)) = self.remove(&name)
            && previous != name
        {
            tracing::trace!(%previous, %name, "parameter map: replace parameter with new casing");
        }
        self.entries.insert(name, value.into());
    }

    /// Insert a parameter, checking first that `name` is a valid token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterName`] and leaves the map untouched
    /// if `name` is not a token.
    pub fn try_insert(
        &mut self,
        name: impl Into<SmolStr>,
        value: impl Into<String>,
    ) -> Result<(), InvalidParameterName> {
        let name = name.into();
        if !is_token(&name) {
            return Err(InvalidParameterName::new());
        }
        self.insert(name, value);
        Ok(())
    }

    /// Remove the parameter matching `name` case-insensitively,
    /// returning it with its stored casing.
    ///
    /// The order of the other parameters is preserved.
    pub fn remove(&mut self, name: &str) -> Option<(SmolStr, String)> {
        let index = self.position(name)?;
        self.entries.shift_remove_index(index)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all parameters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All parameters in order, with their stored casing.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }

    /// Iterate over `(name, value)` pairs in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.entries.iter())
    }

    /// Iterate over the parameter names in order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.entries.keys())
    }

    /// Iterate over the parameter values in order.
    #[must_use]
    pub fn values(&self) -> Values<'_> {
        Values::new(self.entries.values())
    }
}

/// Two maps are equal if they hold the same parameters,
/// with the same casing, in the same order.
impl PartialEq for ParameterMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ParameterMap {}

impl fmt::Display for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_parameters(f, self, &SerializeOptions::new())
    }
}

impl FromStr for ParameterMap {
    type Err = ParseParameterListError;

    /// Parse a complete parameter list.
    ///
    /// Only optional whitespace may follow the last parameter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = Self::new();
        let consumed = codec::unserialize(&mut params, s);

        let rest = s.get(consumed..).unwrap_or_default();
        if rest.trim_start_matches([' ', '\t']).is_empty() {
            Ok(params)
        } else {
            Err(ParseParameterListError::new(consumed, s.len()))
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<SmolStr>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for ParameterMap
where
    K: Into<SmolStr>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParameterMap
where
    K: Into<SmolStr>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for ParameterMap {
    type Item = (SmolStr, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_iter())
    }
}

impl<'a> IntoIterator for &'a ParameterMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
