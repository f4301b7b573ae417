//! The single persisted slot: when the last report was generated.

pub mod json_state;

use std::sync::{Mutex, PoisonError};

use crate::errors::Result;

pub use json_state::JsonStateStore;

/// Key-value slot holding the epoch-millisecond timestamp of the last
/// generated report.
pub trait TimestampStore: Send + Sync {
    fn last_report_millis(&self) -> Result<Option<i64>>;
    fn record_report(&self, millis: i64) -> Result<()>;
}

/// Process-local store, used by tests and one-off renders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    last: Mutex<Option<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_report(millis: i64) -> Self {
        Self {
            last: Mutex::new(Some(millis)),
        }
    }
}

impl TimestampStore for MemoryStore {
    fn last_report_millis(&self) -> Result<Option<i64>> {
        Ok(*self.last.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn record_report(&self, millis: i64) -> Result<()> {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(millis);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty_and_records() {
        let store = MemoryStore::new();
        assert_eq!(store.last_report_millis().unwrap(), None);
        store.record_report(1_700_000_000_000).unwrap();
        assert_eq!(store.last_report_millis().unwrap(), Some(1_700_000_000_000));
    }

    #[test]
    fn poisoned_lock_still_reads_and_records() {
        let store = std::sync::Arc::new(MemoryStore::with_last_report(5));
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.last.lock().unwrap();
            panic!("poison the slot");
        })
        .join();
        assert!(store.last.is_poisoned());

        assert_eq!(store.last_report_millis().unwrap(), Some(5));
        store.record_report(9).unwrap();
        assert_eq!(store.last_report_millis().unwrap(), Some(9));
    }
}
