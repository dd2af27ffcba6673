//! Term kind descriptors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The concrete kind of a [`Term`](crate::Term).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermKind {
    /// Logic variable.
    Variable,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Integer.
    Integer,
    /// Long integer.
    Long,
    /// The null/no-value singleton.
    Nil,
    /// Atom (arity-0 structure).
    Atom,
    /// The empty list `[]`.
    EmptyList,
    /// Non-empty cons list.
    List,
    /// Compound term.
    Structure,
    /// Opaque foreign object reference, `@(Tag)`.
    ObjectRef,
    /// Key/value pair, `Key-Value`.
    MapEntry,
    /// Insertion-ordered key/value map.
    Map,
}

/// Coarse ranking used by the standard order of terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindRank {
    /// Variables sort first.
    Variable,
    /// Then numbers.
    Number,
    /// Then atoms.
    Atom,
    /// Then compounds (including lists).
    Compound,
}

impl TermKind {
    /// All kinds, in declaration order.
    pub const ALL: [TermKind; 13] = [
        Self::Variable,
        Self::Float,
        Self::Double,
        Self::Integer,
        Self::Long,
        Self::Nil,
        Self::Atom,
        Self::EmptyList,
        Self::List,
        Self::Structure,
        Self::ObjectRef,
        Self::MapEntry,
        Self::Map,
    ];

    /// Returns the standard-order rank of this kind.
    #[must_use]
    pub const fn rank(self) -> KindRank {
        match self {
            Self::Variable => KindRank::Variable,
            Self::Float | Self::Double | Self::Integer | Self::Long => KindRank::Number,
            Self::Nil | Self::Atom => KindRank::Atom,
            Self::EmptyList
            | Self::List
            | Self::Structure
            | Self::ObjectRef
            | Self::MapEntry
            | Self::Map => KindRank::Compound,
        }
    }

    /// Returns true for the four numeric kinds.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self.rank(), KindRank::Number)
    }

    /// Returns true if functor and arity are defined for this kind.
    #[must_use]
    pub const fn has_functor(self) -> bool {
        matches!(
            self,
            Self::Atom
                | Self::EmptyList
                | Self::List
                | Self::Structure
                | Self::ObjectRef
                | Self::MapEntry
                | Self::Map
        )
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Float => "float",
            Self::Double => "double",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Nil => "nil",
            Self::Atom => "atom",
            Self::EmptyList => "empty_list",
            Self::List => "list",
            Self::Structure => "structure",
            Self::ObjectRef => "object_ref",
            Self::MapEntry => "map_entry",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TermKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // `id` values are longs in every respect
        if s == "id" {
            return Ok(Self::Long);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::unknown_term_kind(s))
    }
}
