use smol_str::SmolStr;
use std::iter::FusedIterator;

/// Iterator over the `(name, value)` pairs of a [`ParameterMap`].
///
/// [`ParameterMap`]: super::ParameterMap
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, SmolStr, String>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(inner: indexmap::map::Iter<'a, SmolStr, String>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterator over the names of a [`ParameterMap`].
///
/// [`ParameterMap`]: super::ParameterMap
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: indexmap::map::Keys<'a, SmolStr, String>,
}

impl<'a> Keys<'a> {
    pub(super) fn new(inner: indexmap::map::Keys<'a, SmolStr, String>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(SmolStr::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(SmolStr::as_str)
    }
}

impl ExactSizeIterator for Keys<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Keys<'_> {}

/// Iterator over the values of a [`ParameterMap`].
///
/// [`ParameterMap`]: super::ParameterMap
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: indexmap::map::Values<'a, SmolStr, String>,
}

impl<'a> Values<'a> {
    pub(super) fn new(inner: indexmap::map::Values<'a, SmolStr, String>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Values<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Values<'_> {}

/// Owning iterator over the `(name, value)` pairs of a [`ParameterMap`].
///
/// [`ParameterMap`]: super::ParameterMap
#[derive(Debug)]
pub struct IntoIter {
    inner: indexmap::map::IntoIter<SmolStr, String>,
}

impl IntoIter {
    pub(super) fn new(inner: indexmap::map::IntoIter<SmolStr, String>) -> Self {
        Self { inner }
    }
}

impl Iterator for IntoIter {
    type Item = (SmolStr, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for IntoIter {}
