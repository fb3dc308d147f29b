//! Session Cache Module
//!
//! Keyed, time-expiring store owned by one session scope. Expired entries are
//! evicted lazily when they are next looked up; nothing sweeps in the
//! background.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheConfig, CacheEntry, CacheStats, Clock, SystemClock};

// == Session Cache ==
/// Read-through memoization layer for one session.
///
/// Values are handed out as shared `Arc`s: a hit returns the very value that
/// was stored, so callers treat it as read-only.
#[derive(Debug)]
pub struct SessionCache<V = Value, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Time source used to stamp and age entries
    clock: C,
    /// Freshness window
    config: CacheConfig,
    /// Lookup statistics
    stats: CacheStats,
}

impl<V> SessionCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the system monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<V> Default for SessionCache<V, SystemClock> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V, C: Clock> SessionCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
            config,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it is still fresh.
    ///
    /// A missing key and an expired key both yield `None`; an expired entry is
    /// removed from the mapping as part of the lookup.
    pub fn get(&mut self, key: &str) -> Option<Arc<V>> {
        self.get_with_age(key).map(|(value, _)| value)
    }

    /// Like [`get`](Self::get), also returning the entry age in milliseconds.
    ///
    /// Freshness and age come from the same clock reading.
    pub fn get_with_age(&mut self, key: &str) -> Option<(Arc<V>, u64)> {
        let now = self.clock.now_ms();
        let ttl = self.config.ttl_ms;

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now, ttl) => {
                self.stats.record_hit();
                return Some((Arc::clone(&entry.value), entry.age_ms(now)));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age to zero.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_shared(key, Arc::new(value));
    }

    /// Stores an already shared value under `key`.
    pub fn set_shared(&mut self, key: impl Into<String>, value: Arc<V>) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes the entry for `key`, or every entry when `key` is `None`.
    ///
    /// Removing a key that is not present is a no-op.
    pub fn invalidate(&mut self, key: Option<&str>) {
        let removed = match key {
            Some(key) => usize::from(self.entries.remove(key).is_some()),
            None => {
                let count = self.entries.len();
                self.entries.clear();
                count
            }
        };

        self.stats.record_invalidations(removed);
        self.stats.set_total_entries(self.entries.len());
    }

    /// Removes a single entry.
    pub fn invalidate_key(&mut self, key: &str) {
        self.invalidate(Some(key));
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.invalidate(None);
    }

    // == Resolve ==
    /// Fetch-or-serve: returns the fresh value for `key`, otherwise runs
    /// `fetcher`, stores its result and returns it.
    ///
    /// Concurrent misses on the same key are not coalesced; each caller runs
    /// its own fetch and the last write wins.
    pub fn resolve<F>(&mut self, key: &str, fetcher: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        debug!(key, "session cache miss, fetching");
        let value = Arc::new(fetcher());
        self.set_shared(key, Arc::clone(&value));
        value
    }

    /// Fallible fetch-or-serve.
    ///
    /// A failed fetch stores nothing and hands the error back unchanged.
    pub fn try_resolve<F, E>(&mut self, key: &str, fetcher: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        debug!(key, "session cache miss, fetching");
        let value = Arc::new(fetcher()?);
        self.set_shared(key, Arc::clone(&value));
        Ok(value)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the configured freshness window in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.config.ttl_ms
    }

    /// Returns the number of stored entries, including ones that have expired
    /// but not yet been looked up.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
