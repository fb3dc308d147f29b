//! Cache Entry Module
//!
//! Defines a single session cache entry and its freshness check.

use std::sync::Arc;

// == Cache Entry ==
/// A stored value together with the time it was written.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value, shared with every reader
    pub value: Arc<V>,
    /// Write timestamp on the owning cache's clock (milliseconds)
    pub stored_at: u64,
}

// Manual impl: cloning an entry only bumps the Arc, V need not be Clone.
impl<V> Clone for CacheEntry<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            stored_at: self.stored_at,
        }
    }
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `now_ms`.
    pub fn new(value: Arc<V>, now_ms: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
        }
    }

    // == Age ==
    /// Returns the entry age in milliseconds at `now_ms`.
    ///
    /// Saturates at zero if the clock reads earlier than the write time.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now_ms`.
    ///
    /// Boundary condition: the entry expires as soon as its age reaches the
    /// TTL, so an entry read at exactly `stored_at + ttl_ms` is absent.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl_ms
    }
}
