//! What a trace holds: unification events stamped with query and step.

use clausal_term::{Term, Variable};

// =============================================================================
// Trace Event
// =============================================================================

/// One observable step of unification or backtracking.
#[derive(Clone, Debug)]
pub enum TraceEvent {
    /// A top-level unification has started.
    UnifyStart {
        /// Left-hand term.
        left: Term,
        /// Right-hand term.
        right: Term,
    },

    /// A variable was bound.
    Bind {
        /// The variable.
        var: Variable,
        /// The term it was bound to.
        term: Term,
    },

    /// Two dereferenced subterms could not be unified.
    Mismatch {
        /// Left-hand subterm.
        left: Term,
        /// Right-hand subterm.
        right: Term,
    },

    /// A top-level unification has finished.
    UnifyEnd {
        /// Whether it succeeded.
        success: bool,
    },

    /// The trail was rewound.
    Rewind {
        /// Trail length the rewind went back to.
        mark: usize,
        /// Number of bindings undone.
        undone: usize,
    },
}

impl TraceEvent {
    /// Kebab-case name used for filtering and in JSON output.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::UnifyStart { .. } => "unify-start",
            Self::Bind { .. } => "bind",
            Self::Mismatch { .. } => "mismatch",
            Self::UnifyEnd { .. } => "unify-end",
            Self::Rewind { .. } => "rewind",
        }
    }

    /// Returns true if this starts or ends a unification.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::UnifyStart { .. } | Self::UnifyEnd { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// An event with its position in the session.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Assigned by the buffer; never reused.
    pub id: u64,
    /// The top-level unification this event belongs to.
    pub query: u64,
    /// Position of the event within its query.
    pub step: u32,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Stamps `event` with its id and position.
    #[must_use]
    pub fn new(id: u64, query: u64, step: u32, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            query,
            step,
            timestamp_ns,
            event,
        }
    }

    /// See [`TraceEvent::event_type`].
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
