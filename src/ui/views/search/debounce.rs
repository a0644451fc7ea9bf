//! Debounce for the search input
//!
//! A generation counter instead of timers: every keystroke bumps the
//! sequence number and pushes the deadline out. The caller polls with the
//! current time from its idle tick, so only the latest query ever fires and
//! responses from superseded queries can be recognised by their sequence.

use std::time::{Duration, Instant};

/// A query whose quiet period has elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug)]
struct Pending {
    query: String,
    due: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    seq: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            seq: 0,
            pending: None,
        }
    }

    /// Replace any pending query with `query`, due one quiet period from `now`
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.seq += 1;
        self.pending = Some(Pending {
            query,
            due: now + self.quiet,
        });
    }

    /// Drop the pending query and invalidate any in-flight one
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.pending = None;
    }

    /// Take the pending query if its quiet period has elapsed at `now`
    pub fn fire(&mut self, now: Instant) -> Option<SearchQuery> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            let pending = self.pending.take()?;
            return Some(SearchQuery {
                seq: self.seq,
                query: pending.query,
            });
        }
        None
    }

    /// Whether a response for `seq` is still wanted
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
