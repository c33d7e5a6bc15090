use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::ParameterMap;

/// A container parameters can be looked up in and stored into.
///
/// This is the sink of [`unserialize`]. [`ParameterMap`] matches names
/// case-insensitively, the std and [`IndexMap`] implementations compare
/// names exactly and overwrite in place.
///
/// [`unserialize`]: crate::codec::unserialize
pub trait ParameterStore {
    /// Value stored for `name`, if any.
    fn get_parameter(&self, name: &str) -> Option<&str>;

    /// Value stored for `name`, or `default`.
    fn get_parameter_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_parameter(name).unwrap_or(default)
    }

    /// Store `value` for `name`.
    fn set_parameter(&mut self, name: &str, value: String);
}

impl ParameterStore for ParameterMap {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.try_get(name)
    }

    fn set_parameter(&mut self, name: &str, value: String) {
        self.insert(name, value);
    }
}

impl<S: BuildHasher> ParameterStore for IndexMap<String, String, S> {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn set_parameter(&mut self, name: &str, value: String) {
        self.insert(name.to_owned(), value);
    }
}

impl<S: BuildHasher> ParameterStore for HashMap<String, String, S> {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn set_parameter(&mut self, name: &str, value: String) {
        self.insert(name.to_owned(), value);
    }
}

impl ParameterStore for BTreeMap<String, String> {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn set_parameter(&mut self, name: &str, value: String) {
        self.insert(name.to_owned(), value);
    }
}

impl<T: ParameterStore + ?Sized> ParameterStore for &mut T {
    fn get_parameter(&self, name: &str) -> Option<&str> {
        (**self).get_parameter(name)
    }

    fn set_parameter(&mut self, name: &str, value: String) {
        (**self).set_parameter(name, value);
    }
}
