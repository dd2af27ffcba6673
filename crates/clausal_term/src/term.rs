//! Core term type for all Clausal data.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bindings::{BindingId, BindingStore, Variable};
use crate::collections::TermMap;
use crate::error::{Error, Result};
use crate::kind::TermKind;

/// Functor of a non-empty list cell.
pub const LIST_FUNCTOR: &str = ".";
/// Name of the empty list.
pub const EMPTY_LIST_NAME: &str = "[]";
/// Functor of a map term.
pub const MAP_FUNCTOR: &str = "{}";
/// Functor of a map entry.
pub const ENTRY_FUNCTOR: &str = "-";
/// Functor of an object reference.
pub const OBJECT_FUNCTOR: &str = "@";
/// Functor of a conjunction.
pub const CONJUNCTION_FUNCTOR: &str = ",";

/// A Prolog term.
///
/// Terms are immutable and cheaply cloneable: names and argument vectors
/// are shared behind `Arc`, maps behind a persistent vector. Variable
/// resolution state lives outside the term, in a [`BindingStore`].
///
/// List spines of any length are handled without recursion. Other nesting
/// (structure arguments, map values, entry values) is walked recursively by
/// `Drop`, equality, hashing, [`resolve`](Self::resolve), renaming and
/// printing, so depth is bounded by the thread's stack. A right-nested
/// conjunction of a few thousand goals is fine on the default 2 MiB test
/// thread; much deeper terms should be built and dropped on a thread with
/// a larger stack.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// Logic variable.
    Variable(Variable),
    /// Atom.
    Atom(Arc<str>),
    /// Integer.
    Integer(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Long integer. Ids are represented as longs.
    Long(i64),
    /// The null/no-value singleton. Distinct from the empty list.
    Nil,
    /// The empty list.
    EmptyList,
    /// Non-empty list with an explicit tail.
    List(ListTerm),
    /// Compound term.
    Structure {
        /// Principal functor.
        functor: Arc<str>,
        /// Arguments; arity is their count.
        args: Arc<[Term]>,
    },
    /// Opaque foreign object reference, rendered as `@(Tag)`.
    ObjectRef {
        /// Reference tag.
        tag: Arc<str>,
    },
    /// Key/value pair, a `-/2` compound.
    MapEntry {
        /// Entry key.
        key: Arc<Term>,
        /// Entry value.
        value: Arc<Term>,
    },
    /// Insertion-ordered map whose arguments are its entries.
    Map(TermMap),
}

/// Non-empty list: shared items plus a tail that is never itself a list.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListTerm {
    items: Arc<[Term]>,
    offset: usize,
    tail: Arc<Term>,
}

impl ListTerm {
    /// Returns the items of this list cell and every following cell.
    #[must_use]
    pub fn items(&self) -> &[Term] {
        &self.items[self.offset..]
    }

    /// Returns the number of items before the tail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() - self.offset
    }

    /// Always false; lists hold at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first item.
    #[must_use]
    pub fn head(&self) -> &Term {
        &self.items[self.offset]
    }

    /// Returns the list without its first item, sharing storage.
    #[must_use]
    pub fn rest(&self) -> Term {
        if self.offset + 1 < self.items.len() {
            Term::List(Self {
                items: Arc::clone(&self.items),
                offset: self.offset + 1,
                tail: Arc::clone(&self.tail),
            })
        } else {
            (*self.tail).clone()
        }
    }

    /// Returns the tail after the last item (usually `[]` or a variable).
    #[must_use]
    pub fn tail(&self) -> &Term {
        &self.tail
    }

    /// Returns true if the tail is the empty list.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        matches!(*self.tail, Term::EmptyList)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
            && self.offset == other.offset
            && Arc::ptr_eq(&self.tail, &other.tail)
    }
}

impl PartialEq for ListTerm {
    fn eq(&self, other: &Self) -> bool {
        self.items() == other.items() && self.tail == other.tail
    }
}

impl Eq for ListTerm {}

impl Hash for ListTerm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items().hash(state);
        self.tail.hash(state);
    }
}

impl Term {
    /// Creates an atom.
    #[must_use]
    pub fn atom(name: impl Into<Arc<str>>) -> Self {
        Self::Atom(name.into())
    }

    /// Creates a compound term.
    #[must_use]
    pub fn structure(functor: impl Into<Arc<str>>, args: impl IntoIterator<Item = Term>) -> Self {
        Self::Structure {
            functor: functor.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Creates a list with the given items and tail.
    ///
    /// A list tail is folded into the items; no items yields the tail itself.
    #[must_use]
    pub fn list(items: impl IntoIterator<Item = Term>, tail: Term) -> Self {
        let mut items: Vec<Term> = items.into_iter().collect();
        let tail = match tail {
            Self::List(rest) => {
                items.extend(rest.items().iter().cloned());
                (*rest.tail).clone()
            }
            other => other,
        };
        if items.is_empty() {
            return tail;
        }
        Self::List(ListTerm {
            items: items.into(),
            offset: 0,
            tail: Arc::new(tail),
        })
    }

    /// Creates a proper list ending in `[]`.
    #[must_use]
    pub fn proper_list(items: impl IntoIterator<Item = Term>) -> Self {
        Self::list(items, Self::EmptyList)
    }

    /// Creates a `Key-Value` entry.
    #[must_use]
    pub fn entry(key: Term, value: Term) -> Self {
        Self::MapEntry {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }

    /// Creates an object reference.
    #[must_use]
    pub fn object_ref(tag: impl Into<Arc<str>>) -> Self {
        Self::ObjectRef { tag: tag.into() }
    }

    /// Returns the kind of this term.
    #[must_use]
    pub const fn kind(&self) -> TermKind {
        match self {
            Self::Variable(_) => TermKind::Variable,
            Self::Atom(_) => TermKind::Atom,
            Self::Integer(_) => TermKind::Integer,
            Self::Float(_) => TermKind::Float,
            Self::Double(_) => TermKind::Double,
            Self::Long(_) => TermKind::Long,
            Self::Nil => TermKind::Nil,
            Self::EmptyList => TermKind::EmptyList,
            Self::List(_) => TermKind::List,
            Self::Structure { .. } => TermKind::Structure,
            Self::ObjectRef { .. } => TermKind::ObjectRef,
            Self::MapEntry { .. } => TermKind::MapEntry,
            Self::Map(_) => TermKind::Map,
        }
    }

    /// Returns true if this term is a variable (bound or not).
    #[must_use]
    pub const fn is_var(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true for the four numeric kinds.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    /// Returns true if this term is an atom.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns true if this term is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this term is the empty list.
    #[must_use]
    pub const fn is_empty_list(&self) -> bool {
        matches!(self, Self::EmptyList)
    }

    /// Returns true if this term has a functor and at least one argument.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        match self {
            Self::List(_) | Self::ObjectRef { .. } | Self::MapEntry { .. } => true,
            Self::Structure { args, .. } => !args.is_empty(),
            Self::Map(map) => !map.is_empty(),
            _ => false,
        }
    }

    /// Returns true if this term is neither a variable nor a compound.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        !self.is_var() && !self.is_compound()
    }

    /// Returns true if this term can name a predicate (atom or structure).
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Atom(_) | Self::Structure { .. })
    }

    /// Returns the principal functor.
    ///
    /// # Errors
    ///
    /// Returns `NotCompound` for variables, numbers, and nil.
    pub fn functor(&self) -> Result<&str> {
        match self {
            Self::Atom(name) => Ok(name),
            Self::Structure { functor, .. } => Ok(functor),
            Self::EmptyList => Ok(EMPTY_LIST_NAME),
            Self::List(_) => Ok(LIST_FUNCTOR),
            Self::Map(_) => Ok(MAP_FUNCTOR),
            Self::MapEntry { .. } => Ok(ENTRY_FUNCTOR),
            Self::ObjectRef { .. } => Ok(OBJECT_FUNCTOR),
            _ => Err(Error::not_compound(self.kind())),
        }
    }

    /// Returns the number of arguments.
    ///
    /// # Errors
    ///
    /// Returns `NotCompound` for variables, numbers, and nil.
    pub fn arity(&self) -> Result<usize> {
        match self {
            Self::Atom(_) | Self::EmptyList => Ok(0),
            Self::Structure { args, .. } => Ok(args.len()),
            Self::List(_) | Self::MapEntry { .. } => Ok(2),
            Self::ObjectRef { .. } => Ok(1),
            Self::Map(map) => Ok(map.len()),
            _ => Err(Error::not_compound(self.kind())),
        }
    }

    /// Returns the arguments in order.
    ///
    /// Structures lend their argument slice; lists, maps, entries, and
    /// object references build theirs.
    ///
    /// # Errors
    ///
    /// Returns `NotCompound` for variables, numbers, and nil.
    pub fn arguments(&self) -> Result<Cow<'_, [Term]>> {
        match self {
            Self::Atom(_) | Self::EmptyList => Ok(Cow::Borrowed(&[])),
            Self::Structure { args, .. } => Ok(Cow::Borrowed(args)),
            Self::List(list) => Ok(Cow::Owned(vec![list.head().clone(), list.rest()])),
            Self::MapEntry { key, value } => {
                Ok(Cow::Owned(vec![(**key).clone(), (**value).clone()]))
            }
            Self::ObjectRef { tag } => Ok(Cow::Owned(vec![Self::Atom(Arc::clone(tag))])),
            Self::Map(map) => Ok(Cow::Owned(
                map.iter()
                    .map(|(k, v)| Self::entry(k.clone(), v.clone()))
                    .collect(),
            )),
            _ => Err(Error::not_compound(self.kind())),
        }
    }

    /// Returns the argument at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotCompound` for non-compound kinds and `IndexOutOfRange`
    /// when `index` is outside `[0, arity)`.
    pub fn get_argument(&self, index: usize) -> Result<Term> {
        let arity = self.arity()?;
        if index >= arity {
            return Err(Error::index_out_of_range(index, arity));
        }
        Ok(match self {
            Self::Structure { args, .. } => args[index].clone(),
            Self::List(list) if index == 0 => list.head().clone(),
            Self::List(list) => list.rest(),
            Self::MapEntry { key, .. } if index == 0 => (**key).clone(),
            Self::MapEntry { value, .. } => (**value).clone(),
            Self::ObjectRef { tag } => Self::Atom(Arc::clone(tag)),
            Self::Map(map) => {
                let (k, v) = map
                    .entry_at(index)
                    .ok_or_else(|| Error::index_out_of_range(index, arity))?;
                Self::entry(k.clone(), v.clone())
            }
            _ => return Err(Error::index_out_of_range(index, arity)),
        })
    }

    /// Returns the predicate indicator, `functor/arity`.
    ///
    /// # Errors
    ///
    /// Returns `NotCompound` when functor/arity are undefined.
    pub fn indicator(&self) -> Result<String> {
        Ok(format!("{}/{}", self.functor()?, self.arity()?))
    }

    /// Follows variable bindings until a free variable or a non-variable.
    ///
    /// Idempotent: dereferencing the result returns it unchanged.
    #[must_use]
    pub fn dereference<'a, S: BindingStore + ?Sized>(&'a self, store: &'a S) -> &'a Term {
        let mut current = self;
        while let Self::Variable(var) = current {
            match store.lookup(var.id()) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Returns a copy with every bound variable replaced by its value.
    ///
    /// A variable reached again through its own binding is left in place.
    #[must_use]
    pub fn resolve<S: BindingStore + ?Sized>(&self, store: &S) -> Term {
        self.resolve_guarded(store, &mut Vec::new())
    }

    fn resolve_guarded<S: BindingStore + ?Sized>(
        &self,
        store: &S,
        visiting: &mut Vec<BindingId>,
    ) -> Term {
        match self {
            Self::Variable(var) => match store.lookup(var.id()) {
                Some(bound) if !visiting.contains(&var.id()) => {
                    visiting.push(var.id());
                    let resolved = bound.resolve_guarded(store, visiting);
                    visiting.pop();
                    resolved
                }
                _ => self.clone(),
            },
            Self::Structure { functor, args } => Self::Structure {
                functor: Arc::clone(functor),
                args: args
                    .iter()
                    .map(|arg| arg.resolve_guarded(store, visiting))
                    .collect(),
            },
            Self::List(list) => Self::list(
                list.items()
                    .iter()
                    .map(|item| item.resolve_guarded(store, visiting))
                    .collect::<Vec<_>>(),
                list.tail().resolve_guarded(store, visiting),
            ),
            Self::MapEntry { key, value } => Self::entry(
                key.resolve_guarded(store, visiting),
                value.resolve_guarded(store, visiting),
            ),
            Self::Map(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| {
                        (
                            k.resolve_guarded(store, visiting),
                            v.resolve_guarded(store, visiting),
                        )
                    })
                    .collect(),
            ),
            _ => self.clone(),
        }
    }

    /// Calls `f` on each direct subterm.
    fn for_each_child(&self, mut f: impl FnMut(&Term) -> bool) -> bool {
        match self {
            Self::Structure { args, .. } => args.iter().any(f),
            Self::List(list) => list.items().iter().any(&mut f) || f(list.tail()),
            Self::MapEntry { key, value } => f(key) || f(value),
            Self::Map(map) => map.iter().any(|(k, v)| f(k) || f(v)),
            _ => false,
        }
    }

    /// Returns true if any subterm of the resolved view satisfies `pred`.
    fn any_resolved<S: BindingStore + ?Sized>(
        &self,
        store: &S,
        visiting: &mut Vec<BindingId>,
        pred: &mut impl FnMut(&Term) -> bool,
    ) -> bool {
        if let Self::Variable(var) = self {
            if let Some(bound) = store.lookup(var.id()) {
                if visiting.contains(&var.id()) {
                    return false;
                }
                visiting.push(var.id());
                let found = bound.any_resolved(store, visiting, pred);
                visiting.pop();
                return found;
            }
        }
        pred(self) || self.for_each_child(|child| child.any_resolved(store, visiting, pred))
    }

    /// Returns true if the free variable `id` occurs in the resolved term.
    #[must_use]
    pub fn occurs<S: BindingStore + ?Sized>(&self, id: BindingId, store: &S) -> bool {
        self.any_resolved(store, &mut Vec::new(), &mut |t: &Term| {
            matches!(t, Self::Variable(v) if v.id() == id)
        })
    }

    /// Returns true if the resolved term contains no free variables.
    #[must_use]
    pub fn is_ground<S: BindingStore + ?Sized>(&self, store: &S) -> bool {
        !self.any_resolved(store, &mut Vec::new(), &mut Self::is_var)
    }

    /// Returns false if following bindings from this term ever revisits a variable.
    #[must_use]
    pub fn is_acyclic<S: BindingStore + ?Sized>(&self, store: &S) -> bool {
        fn walk<S: BindingStore + ?Sized>(
            term: &Term,
            store: &S,
            visiting: &mut Vec<BindingId>,
        ) -> bool {
            if let Term::Variable(var) = term {
                return match store.lookup(var.id()) {
                    Some(_) if visiting.contains(&var.id()) => false,
                    Some(bound) => {
                        visiting.push(var.id());
                        let ok = walk(bound, store, visiting);
                        visiting.pop();
                        ok
                    }
                    None => true,
                };
            }
            !term.for_each_child(|child| !walk(child, store, visiting))
        }

        walk(self, store, &mut Vec::new())
    }

    /// Returns the distinct variables of this term in first-occurrence order.
    ///
    /// Bindings are not followed.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        fn collect(term: &Term, out: &mut Vec<Variable>) {
            if let Term::Variable(var) = term {
                if !out.contains(var) {
                    out.push(var.clone());
                }
                return;
            }
            term.for_each_child(|child| {
                collect(child, out);
                false
            });
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Identity check: same variable slot, or the same shared allocation.
    ///
    /// Numbers are never identical, only equal.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => a.id() == b.id(),
            (Self::Atom(a), Self::Atom(b)) | (Self::ObjectRef { tag: a }, Self::ObjectRef { tag: b }) => {
                Arc::ptr_eq(a, b)
            }
            (Self::Nil, Self::Nil) | (Self::EmptyList, Self::EmptyList) => true,
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (
                Self::Structure {
                    functor: f1,
                    args: a1,
                },
                Self::Structure {
                    functor: f2,
                    args: a2,
                },
            ) => Arc::ptr_eq(a1, a2) && f1 == f2,
            (
                Self::MapEntry { key: k1, value: v1 },
                Self::MapEntry { key: k2, value: v2 },
            ) => Arc::ptr_eq(k1, k2) && Arc::ptr_eq(v1, v2),
            (Self::Map(a), Self::Map(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// Structural equality: same kind, functor, arity, and arguments.
// Floats compare by bit pattern so equality stays reflexive.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Atom(a), Self::Atom(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) | (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Nil, Self::Nil) | (Self::EmptyList, Self::EmptyList) => true,
            (Self::List(a), Self::List(b)) => a == b,
            (
                Self::Structure {
                    functor: f1,
                    args: a1,
                },
                Self::Structure {
                    functor: f2,
                    args: a2,
                },
            ) => f1 == f2 && a1 == a2,
            (Self::ObjectRef { tag: a }, Self::ObjectRef { tag: b }) => a == b,
            (
                Self::MapEntry { key: k1, value: v1 },
                Self::MapEntry { key: k2, value: v2 },
            ) => k1 == k2 && v1 == v2,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Variable(var) => var.hash(state),
            Self::Atom(name) | Self::ObjectRef { tag: name } => name.hash(state),
            Self::Integer(n) | Self::Long(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Double(n) => n.to_bits().hash(state),
            Self::Nil | Self::EmptyList => {}
            Self::List(list) => list.hash(state),
            Self::Structure { functor, args } => {
                functor.hash(state);
                args.hash(state);
            }
            Self::MapEntry { key, value } => {
                key.hash(state);
                value.hash(state);
            }
            Self::Map(map) => map.hash(state),
        }
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<f32> for Term {
    fn from(n: f32) -> Self {
        Self::Float(n)
    }
}

impl From<Variable> for Term {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}
