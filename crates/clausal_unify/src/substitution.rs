//! Named variable bindings produced by matching.

use std::collections::HashMap;

use clausal_term::Term;

/// A set of variable bindings keyed by source name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    values: HashMap<String, Term>,
}

impl Substitution {
    /// Create an empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a binding by variable name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.values.get(name)
    }

    /// Set a binding.
    pub fn set(&mut self, name: impl Into<String>, term: Term) {
        self.values.insert(name.into(), term);
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the bindings sorted by name.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(String, Term)> {
        let mut pairs: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl FromIterator<(String, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
