//! Tracing for Clausal.
//!
//! This crate provides:
//! - [`Tracer`] - A [`UnifyObserver`](clausal_unify::UnifyObserver) that records bindings, mismatches, and rewinds
//! - [`TraceBuffer`] - Bounded ring buffer of trace records
//! - [`HumanFormatter`] and [`JsonFormatter`] - Output formats

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};

pub use clausal_term::{Error, Result};
