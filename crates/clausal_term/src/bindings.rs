//! Variable identity and the binding-store seam.
//!
//! Terms never hold their own binding state. A variable names a slot by
//! [`BindingId`]; whatever owns the slots (the unifier's trail) implements
//! [`BindingStore`] so terms can be dereferenced against it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::term::Term;

/// Identifier of a variable's binding slot.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BindingId(pub(crate) u32);

impl BindingId {
    /// Creates a binding id from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this slot.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingId({})", self.0)
    }
}

/// A logic variable: an optional source name plus its binding slot.
///
/// Equality and hashing use the slot only. Two variables with the same
/// name but different slots are different variables.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    name: Option<Arc<str>>,
    id: BindingId,
}

impl Variable {
    /// Creates a variable.
    #[must_use]
    pub fn new(name: Option<Arc<str>>, id: BindingId) -> Self {
        Self { name, id }
    }

    /// Returns the source name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the binding slot.
    #[must_use]
    pub const fn id(&self) -> BindingId {
        self.id
    }

    /// Returns true for `_` and unnamed variables.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self.name.as_deref(), None | Some("_"))
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}#{}", self.id.0),
            None => write!(f, "_G{}", self.id.0),
        }
    }
}

/// Resolution state for variables.
pub trait BindingStore {
    /// Returns the term a slot is bound to, or `None` if it is free.
    fn lookup(&self, id: BindingId) -> Option<&Term>;

    /// Returns true if the slot is bound.
    fn is_bound(&self, id: BindingId) -> bool {
        self.lookup(id).is_some()
    }
}

/// A binding store in which every variable is free.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbound;

impl BindingStore for Unbound {
    fn lookup(&self, _id: BindingId) -> Option<&Term> {
        None
    }
}

impl<S: BindingStore + ?Sized> BindingStore for &S {
    fn lookup(&self, id: BindingId) -> Option<&Term> {
        (**self).lookup(id)
    }
}
