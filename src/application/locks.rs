//! Keyed mutual exclusion for check-then-act sequences.
//!
//! Scheduling must serialize per tutor and per student, evaluation
//! upserts per session, and match decisions per request. `KeyedLocks`
//! hands out one async mutex per string key; multi-key acquisition
//! sorts the keys first so two callers locking the same pair in
//! different orders cannot deadlock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of per-key async mutexes.
///
/// Lock entries are created on first use and kept for the lifetime of
/// the registry; the key space (tutor/student/session/request ids) is
/// bounded by the working set of the deployment.
#[derive(Default)]
pub struct KeyedLocks {
    entries: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, key: &str) -> Arc<AsyncMutex<()>> {
        let mut entries = self.entries.lock().expect("lock registry poisoned");
        entries
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Acquires the mutex for a single key.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        self.entry(key).lock_owned().await
    }

    /// Acquires the mutexes for all given keys.
    ///
    /// Keys are sorted and deduplicated before acquisition, so every
    /// caller takes overlapping key sets in the same global order.
    pub async fn acquire_all(&self, keys: &[&str]) -> Vec<OwnedMutexGuard<()>> {
        let mut sorted: Vec<&str> = keys.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut guards = Vec::with_capacity(sorted.len());
        for key in sorted {
            guards.push(self.entry(key).lock_owned().await);
        }
        guards
    }
}
