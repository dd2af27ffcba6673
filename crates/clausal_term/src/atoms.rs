//! Atom name interning.
//!
//! Atoms built through one table share a single `Arc<str>` per name, so
//! identity checks on them are a pointer comparison.

use std::collections::HashSet;
use std::sync::Arc;

/// Interner for atom and functor names.
///
/// It is not thread-safe; use external synchronization if needed.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    names: HashSet<Arc<str>>,
}

impl AtomTable {
    /// Names pre-interned at startup.
    const RESERVED: &'static [&'static str] = &["[]", ".", ",", "-", "@", "{}", "true", ":-"];

    /// Creates a table with the reserved names pre-interned.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::default();
        for name in Self::RESERVED {
            table.intern(name);
        }
        table
    }

    /// Interns a name, returning the shared string.
    pub fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(existing) = self.names.get(name) {
            return Arc::clone(existing);
        }
        let arc: Arc<str> = name.into();
        self.names.insert(Arc::clone(&arc));
        arc
    }

    /// Returns the shared string for a name, if it was interned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<str>> {
        self.names.get(name).cloned()
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
