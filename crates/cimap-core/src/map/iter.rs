//! Iterators over a [`CaseInsensitiveMap`](super::CaseInsensitiveMap).
//!
//! All iterators yield entries in case-insensitive key order and expose keys as the stored
//! spelling.

use std::{collections::btree_map, iter::FusedIterator};

use super::Key;

/// Generates the iterator trait impls shared by every map iterator.
///
/// `$map` turns an item of the inner `BTreeMap` iterator into the public item.
macro_rules! map_iterator {
    ( $name:ident < $( $lt:lifetime, )? V, C > => $item:ty, |$entry:pat_param| $map:expr ) => {
        impl<$( $lt, )? V, C> Iterator for $name<$( $lt, )? V, C> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$entry| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$( $lt, )? V, C> DoubleEndedIterator for $name<$( $lt, )? V, C> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$entry| $map)
            }
        }

        impl<$( $lt, )? V, C> ExactSizeIterator for $name<$( $lt, )? V, C> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$( $lt, )? V, C> FusedIterator for $name<$( $lt, )? V, C> {}
    };
}

/// Iterator over `(key, &value)` pairs, see
/// [`CaseInsensitiveMap::iter`](super::CaseInsensitiveMap::iter).
pub struct Iter<'a, V, C> {
    inner: btree_map::Iter<'a, Key<C>, V>,
}

impl<'a, V, C> Iter<'a, V, C> {
    pub(super) fn new(inner: btree_map::Iter<'a, Key<C>, V>) -> Self {
        Self { inner }
    }
}

impl<V, C> Clone for Iter<'_, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

map_iterator!(Iter<'a, V, C> => (&'a str, &'a V), |(key, value)| (key.text.as_str(), value));

/// Iterator over `(key, &mut value)` pairs, see
/// [`CaseInsensitiveMap::iter_mut`](super::CaseInsensitiveMap::iter_mut).
pub struct IterMut<'a, V, C> {
    inner: btree_map::IterMut<'a, Key<C>, V>,
}

impl<'a, V, C> IterMut<'a, V, C> {
    pub(super) fn new(inner: btree_map::IterMut<'a, Key<C>, V>) -> Self {
        Self { inner }
    }
}

map_iterator!(IterMut<'a, V, C> => (&'a str, &'a mut V), |(key, value)| (key.text.as_str(), value));

/// Owning iterator over `(key, value)` pairs.
pub struct IntoIter<V, C> {
    inner: btree_map::IntoIter<Key<C>, V>,
}

impl<V, C> IntoIter<V, C> {
    pub(super) fn new(inner: btree_map::IntoIter<Key<C>, V>) -> Self {
        Self { inner }
    }
}

map_iterator!(IntoIter<V, C> => (String, V), |(key, value)| (key.text, value));

/// Iterator over the stored key spellings.
pub struct Keys<'a, V, C> {
    inner: btree_map::Keys<'a, Key<C>, V>,
}

impl<'a, V, C> Keys<'a, V, C> {
    pub(super) fn new(inner: btree_map::Keys<'a, Key<C>, V>) -> Self {
        Self { inner }
    }
}

impl<V, C> Clone for Keys<'_, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

map_iterator!(Keys<'a, V, C> => &'a str, |key| key.text.as_str());

/// Iterator over the values.
pub struct Values<'a, V, C> {
    inner: btree_map::Values<'a, Key<C>, V>,
}

impl<'a, V, C> Values<'a, V, C> {
    pub(super) fn new(inner: btree_map::Values<'a, Key<C>, V>) -> Self {
        Self { inner }
    }
}

impl<V, C> Clone for Values<'_, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

map_iterator!(Values<'a, V, C> => &'a V, |value| value);

/// Iterator over mutable values.
pub struct ValuesMut<'a, V, C> {
    inner: btree_map::ValuesMut<'a, Key<C>, V>,
}

impl<'a, V, C> ValuesMut<'a, V, C> {
    pub(super) fn new(inner: btree_map::ValuesMut<'a, Key<C>, V>) -> Self {
        Self { inner }
    }
}

map_iterator!(ValuesMut<'a, V, C> => &'a mut V, |value| value);
