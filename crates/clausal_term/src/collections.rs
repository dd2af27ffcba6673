//! Persistent collections backing compound terms.
//!
//! Thin wrapper around the `im` crate's persistent vector and hash map,
//! giving map terms insertion-ordered entries with O(1) cloning and
//! hashed key lookup.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::term::Term;

/// Insertion-ordered map from term keys to term values.
///
/// Keys are compared with structural equality. Inserting an existing key
/// replaces its value in place, keeping the original position. Lookups go
/// through a persistent index from key to position; removal reindexes the
/// entries after the removed one.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "im::Vector<(Term, Term)>", into = "im::Vector<(Term, Term)>")
)]
pub struct TermMap {
    entries: im::Vector<(Term, Term)>,
    index: im::HashMap<Term, usize>,
}

impl TermMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the value for a key.
    #[must_use]
    pub fn get(&self, key: &Term) -> Option<&Term> {
        let position = *self.index.get(key)?;
        self.entries.get(position).map(|(_, v)| v)
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &Term) -> bool {
        self.index.contains_key(key)
    }

    /// Returns a new map with the entry inserted.
    #[must_use]
    pub fn insert(&self, key: Term, value: Term) -> Self {
        let mut new = self.clone();
        new.insert_mut(key, value);
        new
    }

    fn insert_mut(&mut self, key: Term, value: Term) {
        match self.index.get(&key) {
            Some(&position) => {
                self.entries.set(position, (key, value));
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push_back((key, value));
            }
        }
    }

    /// Returns a new map with the key removed.
    #[must_use]
    pub fn remove(&self, key: &Term) -> Self {
        let mut new = self.clone();
        if let Some(position) = new.index.remove(key) {
            new.entries.remove(position);
            for (shifted, (k, _)) in new.entries.iter().enumerate().skip(position) {
                new.index.insert(k.clone(), shifted);
            }
        }
        new
    }

    /// Gets the entry at an insertion index.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<(&Term, &Term)> {
        self.entries.get(index).map(|(k, v)| (k, v))
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Term> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Term> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns true if both maps share the same underlying storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.entries.ptr_eq(&other.entries)
    }
}

impl fmt::Debug for TermMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for TermMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TermMap {}

impl Hash for TermMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl FromIterator<(Term, Term)> for TermMap {
    fn from_iter<I: IntoIterator<Item = (Term, Term)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert_mut(k, v);
        }
        map
    }
}

impl From<im::Vector<(Term, Term)>> for TermMap {
    fn from(entries: im::Vector<(Term, Term)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<TermMap> for im::Vector<(Term, Term)> {
    fn from(map: TermMap) -> Self {
        map.entries
    }
}
