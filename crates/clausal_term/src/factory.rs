//! Term construction.
//!
//! A [`TermFactory`] is the only place fresh variable slots come from, so
//! every term that will meet on one trail should be built (or renamed)
//! through the same factory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::atoms::AtomTable;
use crate::bindings::{BindingId, Variable};
use crate::collections::TermMap;
use crate::term::{CONJUNCTION_FUNCTOR, Term};

/// Configuration for a [`TermFactory`].
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Share one allocation per distinct atom name.
    pub intern_atoms: bool,
    /// First binding slot handed out.
    pub first_variable: u32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            intern_atoms: true,
            first_variable: 0,
        }
    }
}

impl FactoryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable atom interning.
    #[must_use]
    pub fn with_intern_atoms(mut self, intern: bool) -> Self {
        self.intern_atoms = intern;
        self
    }

    /// Builder method to set the first binding slot.
    #[must_use]
    pub fn with_first_variable(mut self, first: u32) -> Self {
        self.first_variable = first;
        self
    }
}

/// Builds terms of every kind and hands out variable slots.
#[derive(Clone, Debug)]
pub struct TermFactory {
    config: FactoryConfig,
    atoms: AtomTable,
    next_variable: u32,
}

impl Default for TermFactory {
    fn default() -> Self {
        Self::new(FactoryConfig::default())
    }
}

impl TermFactory {
    /// Creates a factory with the given configuration.
    #[must_use]
    pub fn new(config: FactoryConfig) -> Self {
        let next_variable = config.first_variable;
        Self {
            config,
            atoms: AtomTable::new(),
            next_variable,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Returns the atom table.
    #[must_use]
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    fn name(&mut self, name: &str) -> Arc<str> {
        if self.config.intern_atoms {
            self.atoms.intern(name)
        } else {
            name.into()
        }
    }

    /// Allocates a fresh binding slot.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` variables are created.
    pub fn fresh_id(&mut self) -> BindingId {
        let id = BindingId::new(self.next_variable);
        self.next_variable = self
            .next_variable
            .checked_add(1)
            .expect("too many variables");
        id
    }

    /// Returns the number of slots handed out so far.
    #[must_use]
    pub fn variable_count(&self) -> u32 {
        self.next_variable - self.config.first_variable
    }

    /// Creates an atom.
    pub fn atom(&mut self, name: &str) -> Term {
        Term::Atom(self.name(name))
    }

    /// Creates an integer.
    #[must_use]
    pub fn integer(&self, value: i64) -> Term {
        Term::Integer(value)
    }

    /// Creates a long.
    #[must_use]
    pub fn long(&self, value: i64) -> Term {
        Term::Long(value)
    }

    /// Creates an id. Ids behave exactly like longs.
    #[must_use]
    pub fn id(&self, value: i64) -> Term {
        Term::Long(value)
    }

    /// Creates a 32-bit float.
    #[must_use]
    pub fn float(&self, value: f32) -> Term {
        Term::Float(value)
    }

    /// Creates a 64-bit float.
    #[must_use]
    pub fn double(&self, value: f64) -> Term {
        Term::Double(value)
    }

    /// Returns nil.
    #[must_use]
    pub fn nil(&self) -> Term {
        Term::Nil
    }

    /// Returns the empty list.
    #[must_use]
    pub fn empty_list(&self) -> Term {
        Term::EmptyList
    }

    /// Creates a proper list.
    #[must_use]
    pub fn list(&self, items: impl IntoIterator<Item = Term>) -> Term {
        Term::proper_list(items)
    }

    /// Creates a list with an explicit tail.
    #[must_use]
    pub fn list_with_tail(&self, items: impl IntoIterator<Item = Term>, tail: Term) -> Term {
        Term::list(items, tail)
    }

    /// Creates a compound term. No arguments yields an atom.
    pub fn structure(&mut self, functor: &str, args: impl IntoIterator<Item = Term>) -> Term {
        let args: Vec<Term> = args.into_iter().collect();
        let functor = self.name(functor);
        if args.is_empty() {
            return Term::Atom(functor);
        }
        Term::Structure {
            functor,
            args: args.into(),
        }
    }

    /// Creates an object reference.
    pub fn object_ref(&mut self, tag: &str) -> Term {
        Term::ObjectRef {
            tag: self.name(tag),
        }
    }

    /// Creates a `Key-Value` entry.
    #[must_use]
    pub fn entry(&self, key: Term, value: Term) -> Term {
        Term::entry(key, value)
    }

    /// Creates a map from entries in insertion order.
    #[must_use]
    pub fn map(&self, entries: impl IntoIterator<Item = (Term, Term)>) -> Term {
        Term::Map(entries.into_iter().collect::<TermMap>())
    }

    /// Creates a named variable with a fresh slot.
    pub fn variable(&mut self, name: &str) -> Term {
        let id = self.fresh_id();
        Term::Variable(Variable::new(Some(name.into()), id))
    }

    /// Creates an unnamed variable with a fresh slot.
    pub fn anonymous(&mut self) -> Term {
        let id = self.fresh_id();
        Term::Variable(Variable::new(None, id))
    }

    /// Builds a right-nested `,/2` chain.
    ///
    /// One goal is returned unchanged; no goals yield `true`.
    pub fn conjunction(&mut self, goals: impl IntoIterator<Item = Term>) -> Term {
        let mut goals: Vec<Term> = goals.into_iter().collect();
        let Some(mut body) = goals.pop() else {
            return self.atom("true");
        };
        let functor = self.name(CONJUNCTION_FUNCTOR);
        while let Some(goal) = goals.pop() {
            body = Term::Structure {
                functor: Arc::clone(&functor),
                args: vec![goal, body].into(),
            };
        }
        body
    }

    /// Copies a term, giving each distinct variable a fresh slot.
    ///
    /// `renamed` maps old slots to their replacements and is shared across
    /// calls so a head and body renamed together stay linked.
    pub fn rename(&mut self, term: &Term, renamed: &mut HashMap<BindingId, Term>) -> Term {
        match term {
            Term::Variable(var) => {
                if let Some(existing) = renamed.get(&var.id()) {
                    return existing.clone();
                }
                let fresh = Term::Variable(Variable::new(
                    var.name().map(Arc::from),
                    self.fresh_id(),
                ));
                renamed.insert(var.id(), fresh.clone());
                fresh
            }
            Term::Structure { functor, args } => Term::Structure {
                functor: Arc::clone(functor),
                args: args.iter().map(|arg| self.rename(arg, renamed)).collect(),
            },
            Term::List(list) => {
                let items: Vec<Term> = list
                    .items()
                    .iter()
                    .map(|item| self.rename(item, renamed))
                    .collect();
                let tail = self.rename(list.tail(), renamed);
                Term::list(items, tail)
            }
            Term::MapEntry { key, value } => {
                let key = self.rename(key, renamed);
                let value = self.rename(value, renamed);
                Term::entry(key, value)
            }
            Term::Map(map) => Term::Map(
                map.iter()
                    .map(|(k, v)| (self.rename(k, renamed), self.rename(v, renamed)))
                    .collect(),
            ),
            _ => term.clone(),
        }
    }
}
