//! Error types for the Clausal term model.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Unification failure is not an error; it is reported as `false`.

use std::fmt;

use thiserror::Error;

use crate::kind::TermKind;

/// The main error type for Clausal operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for functor/arity/arguments requested on a non-compound term.
    #[must_use]
    pub fn not_compound(kind: TermKind) -> Self {
        Self::new(ErrorKind::NotCompound { kind })
    }

    /// Creates an argument index error.
    #[must_use]
    pub fn index_out_of_range(index: usize, arity: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, arity })
    }

    /// Creates an unknown term kind error.
    #[must_use]
    pub fn unknown_term_kind(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTermKind(name.into()))
    }

    /// Creates an error for a clause stored under the wrong indicator.
    #[must_use]
    pub fn indicator_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::IndicatorMismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an error for a clause head that cannot name a predicate.
    #[must_use]
    pub fn not_callable(kind: Option<TermKind>) -> Self {
        Self::new(ErrorKind::NotCallable { kind })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Functor, arity, or arguments requested on a variable, number, or nil.
    #[error("not a compound term: {kind}")]
    NotCompound {
        /// The kind of the offending term.
        kind: TermKind,
    },

    /// Argument index outside `[0, arity)`.
    #[error("argument index out of range: {index} (arity {arity})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The arity of the term.
        arity: usize,
    },

    /// A term kind name that no part of the core recognizes.
    #[error("unknown term kind: {0}")]
    UnknownTermKind(String),

    /// A clause was stored under an indicator its head does not match.
    #[error("indicator mismatch: expected {expected}, got {actual}")]
    IndicatorMismatch {
        /// The indicator of the family.
        expected: String,
        /// The indicator of the clause head.
        actual: String,
    },

    /// A clause head is missing or is neither an atom nor a compound.
    #[error("not callable: {}", describe_head(.kind))]
    NotCallable {
        /// The kind of the head, or `None` for a directive.
        kind: Option<TermKind>,
    },
}

fn describe_head(kind: &Option<TermKind>) -> String {
    match kind {
        Some(kind) => kind.to_string(),
        None => "no head".to_string(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Predicate indicator or other source being processed.
    pub source: Option<String>,
    /// Stack of enclosing operations.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type for Clausal operations.
pub type Result<T> = std::result::Result<T, Error>;
