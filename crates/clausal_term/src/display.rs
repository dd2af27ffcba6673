//! Prolog-syntax rendering of terms.

use std::borrow::Cow;
use std::fmt;

use crate::bindings::{BindingStore, Unbound};
use crate::term::Term;

/// Atoms that print bare even though they fail the identifier rule.
const SOLO_ATOMS: &[&str] = &["[]", "{}", "!", ";"];

/// Returns true if `name` must be quoted to read back as the same atom.
#[must_use]
pub fn atom_needs_quotes(name: &str) -> bool {
    if SOLO_ATOMS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => true,
    }
}

/// Returns the atom in readable form, quoting and escaping as needed.
#[must_use]
pub fn quote_atom(name: &str) -> Cow<'_, str> {
    if !atom_needs_quotes(name) {
        return Cow::Borrowed(name);
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Renders a term as seen through a binding store.
pub struct TermWriter<'a, S: BindingStore + ?Sized> {
    term: &'a Term,
    store: &'a S,
}

impl<'a, S: BindingStore + ?Sized> TermWriter<'a, S> {
    /// Creates a writer for `term` resolved against `store`.
    #[must_use]
    pub fn new(term: &'a Term, store: &'a S) -> Self {
        Self { term, store }
    }
}

impl<S: BindingStore + ?Sized> fmt::Display for TermWriter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self.term, self.store)
    }
}

fn write_args<S: BindingStore + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    args: &[Term],
    store: &S,
) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_term(f, arg, store)?;
    }
    Ok(())
}

/// Writes a float so it always carries a decimal point.
///
/// `shortest` is the shortest round-trip text for the value at its own width.
/// Non-finite values print as `1.0Inf`, `-1.0Inf` and `1.5NaN`.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64, shortest: &str) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("1.5NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-1.0Inf" } else { "1.0Inf" });
    }
    if shortest.contains('.') {
        return f.write_str(shortest);
    }
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => write!(f, "{mantissa}.0e{exponent}"),
        None => write!(f, "{shortest}.0"),
    }
}

fn write_term<S: BindingStore + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    term: &Term,
    store: &S,
) -> fmt::Result {
    match term.dereference(store) {
        Term::Variable(var) => match var.name() {
            Some(name) if !var.is_anonymous() => write!(f, "{name}"),
            _ => write!(f, "_G{}", var.id().index()),
        },
        Term::Atom(name) => write!(f, "{}", quote_atom(name)),
        Term::Integer(n) | Term::Long(n) => write!(f, "{n}"),
        Term::Float(n) => write_float(f, f64::from(*n), &format!("{n:?}")),
        Term::Double(n) => write_float(f, *n, &format!("{n:?}")),
        Term::Nil => write!(f, "nil"),
        Term::EmptyList => write!(f, "[]"),
        Term::List(list) => {
            write!(f, "[")?;
            write_args(f, list.items(), store)?;
            let mut tail = list.tail().dereference(store);
            loop {
                match tail {
                    Term::EmptyList => break,
                    Term::List(more) => {
                        write!(f, ", ")?;
                        write_args(f, more.items(), store)?;
                        tail = more.tail().dereference(store);
                    }
                    other => {
                        write!(f, "|")?;
                        write_term(f, other, store)?;
                        break;
                    }
                }
            }
            write!(f, "]")
        }
        Term::Structure { functor, args } => {
            write!(f, "{}(", quote_atom(functor))?;
            write_args(f, args, store)?;
            write!(f, ")")
        }
        Term::ObjectRef { tag } => write!(f, "@({})", quote_atom(tag)),
        Term::MapEntry { key, value } => {
            write_term(f, key, store)?;
            write!(f, "-")?;
            write_term(f, value, store)
        }
        Term::Map(map) => {
            write!(f, "{{")?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_term(f, key, store)?;
                write!(f, "-")?;
                write_term(f, value, store)?;
            }
            write!(f, "}}")
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self, &Unbound)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "{var:?}"),
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Long(n) => write!(f, "Long({n})"),
            Self::Float(n) => write!(f, "Float({n:?})"),
            Self::Double(n) => write!(f, "Double({n:?})"),
            other => write!(f, "{other}"),
        }
    }
}
