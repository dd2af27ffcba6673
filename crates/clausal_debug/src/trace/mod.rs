//! Tracing of unification.
//!
//! A [`Tracer`] is a [`UnifyObserver`]: pass it to
//! [`Unifier::unify_observed`](clausal_unify::Unifier::unify_observed) or
//! [`Trail::rewind_observed`](clausal_unify::Trail::rewind_observed) and it
//! records every binding, mismatch, and rewind. It costs one branch per
//! event when disabled.

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use clausal_term::{Term, Variable};
use clausal_unify::{Mark, UnifyObserver};

/// Destination for echoed trace lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// Keep records in the buffer only.
    #[default]
    None,
    /// Also print each record to stderr as it arrives.
    Stderr,
}

/// Settings for a [`Tracer`].
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Record events at all.
    pub enabled: bool,
    /// Ring buffer capacity.
    pub buffer_size: usize,
    /// Echo destination.
    pub output: TraceOutput,
    /// Echo and format records as JSON instead of text.
    pub json_format: bool,
    /// Event type names to record; empty records every type.
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: TraceBuffer::DEFAULT_SIZE,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Disabled, buffer-only settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns recording on.
    #[must_use]
    pub fn enabled(self) -> Self {
        Self {
            enabled: true,
            ..self
        }
    }

    /// Sets the ring buffer capacity.
    #[must_use]
    pub fn with_buffer_size(self, buffer_size: usize) -> Self {
        Self {
            buffer_size,
            ..self
        }
    }

    /// Echoes records to stderr.
    #[must_use]
    pub fn to_stderr(self) -> Self {
        Self {
            output: TraceOutput::Stderr,
            ..self
        }
    }

    /// Switches to JSON output.
    #[must_use]
    pub fn json(self) -> Self {
        Self {
            json_format: true,
            ..self
        }
    }

    /// Restricts recording to the named event types (see
    /// [`TraceEvent::event_type`]).
    #[must_use]
    pub fn filter_events(self, event_filter: Vec<String>) -> Self {
        Self {
            event_filter,
            ..self
        }
    }

    fn accepts(&self, event: &TraceEvent) -> bool {
        self.event_filter.is_empty() || self.event_filter.iter().any(|t| t == event.event_type())
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Collects unification events into a [`TraceBuffer`].
///
/// Each call to [`UnifyObserver::on_start`] opens a new query; events are
/// numbered by step within it. Rewinds are attributed to the query that was
/// open when they happened.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    query: u64,
    step: u32,
    started: Instant,
    text: HumanFormatter,
    json: JsonFormatter,
}

impl Tracer {
    /// Creates a tracer from `config`.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer = TraceBuffer::new(config.buffer_size);
        Self {
            config,
            buffer,
            query: 0,
            step: 0,
            started: Instant::now(),
            text: HumanFormatter::new().with_timestamps(),
            json: JsonFormatter::new(),
        }
    }

    /// A tracer that records nothing until [`enable`](Self::enable) is called.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// A recording tracer that echoes text lines to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// True while events are being recorded.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Starts recording.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Stops recording; buffered records are kept.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Number of queries opened so far.
    #[must_use]
    pub fn current_query(&self) -> u64 {
        self.query
    }

    /// Chooses between JSON and text rendering.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Changes the echo destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Appends an event to the current query. No-op while disabled.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if self.config.enabled && self.config.accepts(&event) {
            self.append(event);
        }
    }

    fn append(&mut self, event: TraceEvent) {
        #[allow(clippy::cast_possible_truncation)]
        let elapsed = self.started.elapsed().as_nanos() as u64;
        self.buffer.push(self.query, self.step, elapsed, event);
        self.step = self.step.saturating_add(1);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let _ = writeln!(io::stderr(), "{}", self.format_record(record));
            }
        }
    }

    /// Renders one record as text or JSON, per the configuration.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json.format(record)
        } else {
            self.text.format(record)
        }
    }

    /// Renders several records; JSON output is a single array.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json.format_many(records)
        } else {
            self.text.format_many(records)
        }
    }

    /// The recorded events.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Drops every buffered record. Query numbering continues.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Summary counts over the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl UnifyObserver for Tracer {
    fn on_start(&mut self, a: &Term, b: &Term) {
        if !self.config.enabled {
            return;
        }
        self.query += 1;
        self.step = 0;
        self.record(TraceEvent::UnifyStart {
            left: a.clone(),
            right: b.clone(),
        });
    }

    fn on_bind(&mut self, var: &Variable, term: &Term) {
        if self.config.enabled {
            self.record(TraceEvent::Bind {
                var: var.clone(),
                term: term.clone(),
            });
        }
    }

    fn on_fail(&mut self, a: &Term, b: &Term) {
        if self.config.enabled {
            self.record(TraceEvent::Mismatch {
                left: a.clone(),
                right: b.clone(),
            });
        }
    }

    fn on_end(&mut self, success: bool) {
        self.record(TraceEvent::UnifyEnd { success });
    }

    fn on_rewind(&mut self, mark: Mark, undone: usize) {
        self.record(TraceEvent::Rewind {
            mark: mark.position(),
            undone,
        });
    }
}
