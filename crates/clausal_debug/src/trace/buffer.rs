//! Bounded storage for trace records.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

/// Keeps the newest `max_size` records, evicting from the front.
///
/// Record ids are assigned here and keep increasing across evictions and
/// [`clear`](Self::clear), so an id names one record for the whole session.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Capacity of [`TraceBuffer::default`].
    pub const DEFAULT_SIZE: usize = 10_000;

    /// Creates a buffer holding at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        // grow on demand past the first page of records
        let initial = max_size.min(1024);
        Self {
            records: VecDeque::with_capacity(initial),
            max_size,
            next_id: 0,
        }
    }

    /// Stores an event and returns the id given to it.
    pub fn push(&mut self, query: u64, step: u32, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records
            .push_back(TraceRecord::new(id, query, step, timestamp_ns, event));
        let excess = self.records.len().saturating_sub(self.max_size);
        self.records.drain(..excess);
        id
    }

    /// Records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record. Ids are not reused.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// The record pushed last, if it has not been evicted.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Every record of one top-level unification.
    #[must_use]
    pub fn records_for_query(&self, query: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.query == query)
    }

    /// Up to `count` of the newest records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let skip = self.records.len().saturating_sub(count);
        self.records.range(skip..).collect()
    }

    /// Records satisfying `predicate`, oldest first.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|&r| predicate(r)).collect()
    }

    /// Records whose [`event_type`](TraceRecord::event_type) is `event_type`.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Distinct query numbers still in the buffer, oldest first.
    #[must_use]
    pub fn queries(&self) -> Vec<u64> {
        let mut queries: Vec<u64> = self.records.iter().map(|r| r.query).collect();
        queries.dedup();
        queries
    }

    /// Counts over the current contents.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let event_counts = self.records.iter().fold(HashMap::new(), |mut counts, r| {
            *counts.entry(r.event_type()).or_insert(0) += 1;
            counts
        });
        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_query: self.records.front().map(|r| r.query),
            newest_query: self.records.back().map(|r| r.query),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// Snapshot returned by [`TraceBuffer::stats`].
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Records held.
    pub record_count: usize,
    /// Capacity.
    pub max_size: usize,
    /// Query of the oldest held record.
    pub oldest_query: Option<u64>,
    /// Query of the newest held record.
    pub newest_query: Option<u64>,
    /// Held records per event type name.
    pub event_counts: HashMap<&'static str, usize>,
}
