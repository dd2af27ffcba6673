//! Clauses: facts, rules, and directives.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use clausal_term::{CONJUNCTION_FUNCTOR, Error, Result, Term, TermFactory};
use clausal_unify::{Trail, unify};

/// A head plus an optional body.
///
/// A fact has no body: `parent(tom, bob).`
/// A rule has one: `grandparent(X, Z) :- parent(X, Y), parent(Y, Z).`
/// A directive has a body and no head: `:- initialization(main).`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clause {
    head: Option<Term>,
    body: Option<Term>,
}

impl Clause {
    /// Creates a fact.
    #[must_use]
    pub fn fact(head: Term) -> Self {
        Self {
            head: Some(head),
            body: None,
        }
    }

    /// Creates a rule.
    #[must_use]
    pub fn rule(head: Term, body: Term) -> Self {
        Self {
            head: Some(head),
            body: Some(body),
        }
    }

    /// Creates a directive.
    #[must_use]
    pub fn directive(body: Term) -> Self {
        Self {
            head: None,
            body: Some(body),
        }
    }

    /// Returns the head, absent for directives.
    #[must_use]
    pub fn head(&self) -> Option<&Term> {
        self.head.as_ref()
    }

    /// Returns the body, absent for facts.
    #[must_use]
    pub fn body(&self) -> Option<&Term> {
        self.body.as_ref()
    }

    /// Returns true if there is no body.
    #[must_use]
    pub fn is_fact(&self) -> bool {
        self.body.is_none()
    }

    /// Returns true if there is a body. Directives count as rules too.
    #[must_use]
    pub fn is_rule(&self) -> bool {
        self.body.is_some()
    }

    /// Returns true if there is a body but no head.
    #[must_use]
    pub fn is_directive(&self) -> bool {
        self.head.is_none() && self.body.is_some()
    }

    fn callable_head(&self) -> Result<&Term> {
        match &self.head {
            Some(head) if head.is_callable() => Ok(head),
            Some(head) => Err(Error::not_callable(Some(head.kind()))),
            None => Err(Error::not_callable(None)),
        }
    }

    /// Returns the head's `functor/arity`.
    ///
    /// # Errors
    ///
    /// Returns `NotCallable` for directives and for heads that are neither
    /// atoms nor structures.
    pub fn indicator(&self) -> Result<String> {
        self.callable_head()?.indicator()
    }

    /// Returns the head's functor.
    ///
    /// # Errors
    ///
    /// See [`indicator`](Self::indicator).
    pub fn functor(&self) -> Result<&str> {
        self.callable_head()?.functor()
    }

    /// Returns the head's arity.
    ///
    /// # Errors
    ///
    /// See [`indicator`](Self::indicator).
    pub fn arity(&self) -> Result<usize> {
        self.callable_head()?.arity()
    }

    /// Iterates the goals of a `,/2` chain body, left to right.
    #[must_use]
    pub fn body_terms(&self) -> BodyGoals<'_> {
        BodyGoals {
            next: self.body.as_ref(),
        }
    }

    /// Collects the body goals.
    #[must_use]
    pub fn body_array(&self) -> Vec<Term> {
        self.body_terms().cloned().collect()
    }

    /// Unifies heads and bodies pairwise.
    ///
    /// An absent part unifies only with an absent part. Bindings stay on
    /// the trail; rewind to undo them.
    pub fn unify(&self, other: &Clause, trail: &mut Trail) -> bool {
        fn part(a: Option<&Term>, b: Option<&Term>, trail: &mut Trail) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => unify(a, b, trail),
                (None, None) => true,
                _ => false,
            }
        }

        part(self.head(), other.head(), trail) && part(self.body(), other.body(), trail)
    }

    /// Copies the clause with fresh variables, shared between head and body.
    #[must_use]
    pub fn rename(&self, factory: &mut TermFactory) -> Clause {
        let mut renamed = HashMap::new();
        Clause {
            head: self.head.as_ref().map(|t| factory.rename(t, &mut renamed)),
            body: self.body.as_ref().map(|t| factory.rename(t, &mut renamed)),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.head {
            Some(head) if self.body.is_none() => write!(f, "{head}."),
            Some(head) => {
                write!(f, "{head} :-")?;
                let mut goals = self.body_terms().peekable();
                while let Some(goal) = goals.next() {
                    let sep = if goals.peek().is_some() { "," } else { "." };
                    write!(f, "\n\t{goal}{sep}")?;
                }
                Ok(())
            }
            None => {
                write!(f, ":- ")?;
                for (i, goal) in self.body_terms().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{goal}")?;
                }
                write!(f, ".")
            }
        }
    }
}

/// Lazy walk over a right-nested `,/2` chain.
#[derive(Clone, Debug)]
pub struct BodyGoals<'a> {
    next: Option<&'a Term>,
}

impl<'a> Iterator for BodyGoals<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<&'a Term> {
        let current = self.next.take()?;
        match current {
            Term::Structure { functor, args }
                if &**functor == CONJUNCTION_FUNCTOR && args.len() == 2 =>
            {
                self.next = Some(&args[1]);
                Some(&args[0])
            }
            goal => Some(goal),
        }
    }
}

impl std::iter::FusedIterator for BodyGoals<'_> {}
