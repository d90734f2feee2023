//! # Server Identifiers
//!
//! Timestamp-derived identifiers for new server entries.

use crate::domain::records::CatalogRecord;
use crate::ports::outbound::TimeSource;

/// Hands out strictly increasing identifiers based on wall-clock millis.
///
/// Each id is `max(now, last + 1)`, so two entries created in the same
/// millisecond (or after the clock steps back) still get distinct ids.
pub struct ServerIdGenerator<T: TimeSource> {
    time_source: T,
    last: Option<u64>,
}

impl<T: TimeSource> ServerIdGenerator<T> {
    pub fn new(time_source: T) -> Self {
        Self {
            time_source,
            last: None,
        }
    }

    /// Generator that never reissues an id already present in `catalog`.
    pub fn seeded(time_source: T, catalog: &CatalogRecord) -> Self {
        Self {
            time_source,
            last: catalog.max_server_id(),
        }
    }

    /// Next identifier.
    pub fn next_id(&mut self) -> u64 {
        let now = self.time_source.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        id
    }

    /// Last identifier handed out (or seeded).
    pub fn last_issued(&self) -> Option<u64> {
        self.last
    }
}
