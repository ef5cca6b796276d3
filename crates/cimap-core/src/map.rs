//! Ordered map with case-insensitive string keys.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, btree_map::Entry},
    fmt,
    ops::Index,
    sync::Arc,
};

use crate::{
    collate::{DefaultCollator, InvariantCollator, TextCollator},
    error::Result,
    order::IgnoreCase,
};

mod iter;
mod serde_impls;

pub use self::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

/// A stored key: the original spelling plus the ordering shared by the whole map.
struct Key<C> {
    text: String,
    order: Arc<IgnoreCase<C>>,
}

impl<C> Key<C> {
    fn new(text: String, order: &Arc<IgnoreCase<C>>) -> Self {
        Self {
            text,
            order: Arc::clone(order),
        }
    }
}

impl<C> Clone for Key<C> {
    fn clone(&self) -> Self {
        Self::new(self.text.clone(), &self.order)
    }
}

impl<C: TextCollator> Ord for Key<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.compare(&self.text, &other.text)
    }
}

impl<C: TextCollator> PartialOrd for Key<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: TextCollator> PartialEq for Key<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: TextCollator> Eq for Key<C> {}

/// An ordered map from text keys to `V`, where keys that differ only in letter case are the
/// same key.
///
/// Key ordering and equality are delegated to an [`IgnoreCase`] ordering over the collator
/// `C`. The first spelling stored for a key is kept: later lookups, updates or inserts with a
/// case variant resolve to the same entry and leave its spelling untouched. Iteration yields
/// entries in case-insensitive collation order.
///
/// The collator is injected at construction. Use [`new`](Self::new) for the culture-invariant
/// [`DefaultCollator`], [`with_collator`](Self::with_collator) for a specific one, or a
/// [`SharedCollator`](crate::SharedCollator) chosen at run time.
///
/// Lookups, inserts and removals take O(log n) comparisons.
///
/// # Examples
///
/// ```
/// use cimap_core::CaseInsensitiveMap;
///
/// let mut dictionary: CaseInsensitiveMap<&str> =
///     [("ciao", "hi"), ("gatto", "cat"), ("perché", "because")].into_iter().collect();
///
/// assert_eq!(dictionary.find("CIAO"), Some(&"hi"));
/// assert_eq!(dictionary["PeRCh\u{c9}"], "because");
///
/// *dictionary.get_or_create("Gatto") = "kitten";
/// assert_eq!(dictionary.find_key_value("GATTO"), Some(("gatto", &"kitten")));
/// ```
pub struct CaseInsensitiveMap<V, C = DefaultCollator> {
    order: Arc<IgnoreCase<C>>,
    entries: BTreeMap<Key<C>, V>,
}

impl<V, C: InvariantCollator> CaseInsensitiveMap<V, C> {
    /// Creates an empty map ordered by the culture-invariant collator `C`.
    ///
    /// # Panics
    ///
    /// Panics if the collator cannot be initialized (e.g. missing collation data). Use
    /// [`try_new`](Self::try_new) to handle this as an error.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(map) => map,
            Err(err) => panic!("cannot initialize invariant collation: {err}"),
        }
    }

    /// Creates an empty map ordered by the culture-invariant collator `C`.
    pub fn try_new() -> Result<Self> {
        C::invariant().map(Self::with_collator)
    }
}

impl<V, C: TextCollator> CaseInsensitiveMap<V, C> {
    /// Creates an empty map ordered by `collator`.
    pub fn with_collator(collator: C) -> Self {
        Self::with_comparator(Arc::new(IgnoreCase::new(collator)))
    }

    /// Creates an empty map sharing an existing ordering.
    pub fn with_comparator(order: Arc<IgnoreCase<C>>) -> Self {
        Self {
            order,
            entries: BTreeMap::new(),
        }
    }

    /// Creates a map ordered by `collator` from key-value pairs.
    ///
    /// A key that is a case variant of an earlier key is rejected: the first pair wins.
    pub fn from_pairs_in<K, I>(collator: C, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_collator(collator);
        map.extend(pairs);
        map
    }

    /// The ordering used for keys.
    pub fn comparator(&self) -> &Arc<IgnoreCase<C>> {
        &self.order
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the value for `key`, inserting `V::default()` under this spelling if no case
    /// variant of `key` is present.
    pub fn get_or_create(&mut self, key: impl Into<String>) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns the value for `key`, inserting the result of `default` under this spelling if
    /// no case variant of `key` is present.
    pub fn get_or_insert_with<F>(&mut self, key: impl Into<String>, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let key = self.key(key.into());
        self.entries.entry(key).or_insert_with(default)
    }

    /// Returns the value whose key matches `key` ignoring case.
    pub fn find(&self, key: &str) -> Option<&V> {
        self.entries.get(&self.probe(key))
    }

    /// Returns a mutable reference to the value whose key matches `key` ignoring case.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let probe = self.probe(key);
        self.entries.get_mut(&probe)
    }

    /// Returns the stored spelling and the value of the entry matching `key`.
    pub fn find_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.entries
            .get_key_value(&self.probe(key))
            .map(|(key, value)| (key.text.as_str(), value))
    }

    /// Returns `true` if a case variant of `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&self.probe(key))
    }

    /// Inserts `value` under `key` if no case variant of `key` is present.
    ///
    /// Returns `false`, dropping `value` and leaving the stored entry untouched, if the key is
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = self.key(key.into());
        match self.entries.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Inserts `value` under `key`, replacing the value of an existing case variant.
    ///
    /// The stored spelling of an existing key is kept. Returns the replaced value.
    pub fn insert_or_assign(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = self.key(key.into());
        self.entries.insert(key, value)
    }

    /// Removes the entry matching `key` ignoring case, returning its value.
    pub fn erase(&mut self, key: &str) -> Option<V> {
        let probe = self.probe(key);
        self.entries.remove(&probe)
    }

    /// Removes the entry matching `key` ignoring case, returning its stored spelling and value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let probe = self.probe(key);
        self.entries
            .remove_entry(&probe)
            .map(|(key, value)| (key.text, value))
    }

    /// Keeps only the entries for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut V) -> bool,
    {
        self.entries.retain(|key, value| f(&key.text, value));
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&str, &V)> {
        self.entries
            .first_key_value()
            .map(|(key, value)| (key.text.as_str(), value))
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&str, &V)> {
        self.entries
            .last_key_value()
            .map(|(key, value)| (key.text.as_str(), value))
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> Iter<'_, V, C> {
        Iter::new(self.entries.iter())
    }

    /// Iterates over the entries in key order, with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V, C> {
        IterMut::new(self.entries.iter_mut())
    }

    /// Iterates over the stored key spellings in key order.
    pub fn keys(&self) -> Keys<'_, V, C> {
        Keys::new(self.entries.keys())
    }

    /// Iterates over the values in key order.
    pub fn values(&self) -> Values<'_, V, C> {
        Values::new(self.entries.values())
    }

    /// Iterates over the values in key order, mutably.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V, C> {
        ValuesMut::new(self.entries.values_mut())
    }

    /// Inserts a pair coming from bulk construction, rejecting case variants of stored keys.
    fn insert_first_wins(&mut self, key: String, value: V) {
        let key = self.key(key);
        match self.entries.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(entry) => {
                tracing::debug!(
                    existing = %entry.key().text,
                    "case variant of an existing key rejected"
                );
            }
        }
    }

    fn key(&self, text: String) -> Key<C> {
        Key::new(text, &self.order)
    }

    fn probe(&self, key: &str) -> Key<C> {
        self.key(key.to_string())
    }
}

impl<V, C: InvariantCollator> Default for CaseInsensitiveMap<V, C> {
    /// Creates an empty map, see [`CaseInsensitiveMap::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, C> Clone for CaseInsensitiveMap<V, C>
where
    C: TextCollator,
{
    fn clone(&self) -> Self {
        Self {
            order: Arc::clone(&self.order),
            entries: self.entries.clone(),
        }
    }
}

impl<V: fmt::Debug, C: TextCollator> fmt::Debug for CaseInsensitiveMap<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V, C: TextCollator> Index<&str> for CaseInsensitiveMap<V, C> {
    type Output = V;

    /// Returns the value matching `key` ignoring case.
    ///
    /// # Panics
    ///
    /// Panics if no case variant of `key` is present.
    fn index(&self, key: &str) -> &V {
        match self.find(key) {
            Some(value) => value,
            None => panic!("key {key:?} not found in case-insensitive map"),
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for CaseInsensitiveMap<V, C>
where
    K: Into<String>,
    C: InvariantCollator,
{
    /// Collects pairs into a map ordered by the invariant collator; the first of several case
    /// variants wins.
    ///
    /// # Panics
    ///
    /// Panics if the collator cannot be initialized, see [`CaseInsensitiveMap::new`].
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> Extend<(K, V)> for CaseInsensitiveMap<V, C>
where
    K: Into<String>,
    C: TextCollator,
{
    /// Inserts every pair whose key is not yet present; case variants of stored keys are
    /// rejected.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_first_wins(key.into(), value);
        }
    }
}

impl<V, C> IntoIterator for CaseInsensitiveMap<V, C> {
    type Item = (String, V);
    type IntoIter = IntoIter<V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_iter())
    }
}

impl<'a, V, C: TextCollator> IntoIterator for &'a CaseInsensitiveMap<V, C> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, C: TextCollator> IntoIterator for &'a mut CaseInsensitiveMap<V, C> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
