//! Rendering of trace records as text lines or JSON objects.

use std::fmt::Write;

use clausal_term::Term;

use super::record::{TraceEvent, TraceRecord};

/// Turns trace records into strings.
pub trait TraceFormatter {
    /// Renders one record.
    fn format(&self, record: &TraceRecord) -> String;

    /// Renders a batch, one record per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let lines: Vec<String> = records.iter().map(|r| self.format(r)).collect();
        lines.join("\n")
    }
}

// =============================================================================
// Text
// =============================================================================

/// One line per record: `Q0002.001   BIND X = a`.
///
/// Binds and mismatches are indented under the `UNIFY` line that opened
/// their query.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Print the elapsed time after the query/step prefix.
    pub show_timestamps: bool,
    /// Prefix each line with the record id.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Bare `Q<query>.<step>` prefix, no ids or timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds elapsed time to every line.
    #[must_use]
    pub fn with_timestamps(self) -> Self {
        Self {
            show_timestamps: true,
            ..self
        }
    }

    /// Adds the record id to every line.
    #[must_use]
    pub fn with_ids(self) -> Self {
        Self {
            show_ids: true,
            ..self
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn elapsed(ns: u64) -> String {
        let micros = ns / 1_000;
        match micros {
            0..1_000 => format!("{micros}us"),
            1_000..1_000_000 => format!("{:.3}ms", micros as f64 / 1e3),
            _ => format!("{:.3}s", micros as f64 / 1e6),
        }
    }

    fn describe(event: &TraceEvent) -> String {
        match event {
            TraceEvent::UnifyStart { left, right } => format!("UNIFY {left} = {right}"),
            TraceEvent::Bind { var, term } => {
                format!("  BIND {} = {term}", Term::Variable(var.clone()))
            }
            TraceEvent::Mismatch { left, right } => format!("  MISMATCH {left} vs {right}"),
            TraceEvent::UnifyEnd { success: true } => "END (OK)".to_string(),
            TraceEvent::UnifyEnd { success: false } => "END (FAILED)".to_string(),
            TraceEvent::Rewind { mark, undone } => format!("REWIND to {mark} ({undone} undone)"),
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = String::new();
        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        let _ = write!(line, "Q{:04}.{:03} ", record.query, record.step);
        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::elapsed(record.timestamp_ns));
        }
        line.push_str(&Self::describe(&record.event));
        line
    }
}

// =============================================================================
// JSON
// =============================================================================

/// One JSON object per record. Terms are emitted as their printed form.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Break batches across lines.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Compact output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One record per line inside batch arrays.
    #[must_use]
    pub fn pretty(self) -> Self {
        Self { pretty: true }
    }

    fn push_str(out: &mut String, s: &str) {
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if u32::from(c) < 0x20 => {
                    let _ = write!(out, "\\u{:04x}", u32::from(c));
                }
                c => out.push(c),
            }
        }
        out.push('"');
    }

    fn push_term(out: &mut String, key: &str, term: &Term) {
        let _ = write!(out, ",\"{key}\":");
        Self::push_str(out, &term.to_string());
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut out = format!(
            "{{\"id\":{},\"query\":{},\"step\":{},\"timestamp_ns\":{},\"type\":\"{}\"",
            record.id,
            record.query,
            record.step,
            record.timestamp_ns,
            record.event_type()
        );
        match &record.event {
            TraceEvent::UnifyStart { left, right } | TraceEvent::Mismatch { left, right } => {
                Self::push_term(&mut out, "left", left);
                Self::push_term(&mut out, "right", right);
            }
            TraceEvent::Bind { var, term } => {
                Self::push_term(&mut out, "var", &Term::Variable(var.clone()));
                Self::push_term(&mut out, "term", term);
            }
            TraceEvent::UnifyEnd { success } => {
                let _ = write!(out, ",\"success\":{success}");
            }
            TraceEvent::Rewind { mark, undone } => {
                let _ = write!(out, ",\"mark\":{mark},\"undone\":{undone}");
            }
        }
        out.push('}');
        out
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<String> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}
