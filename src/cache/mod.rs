//! Cache Module
//!
//! Session-scoped in-memory caching with strict TTL expiry.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::SessionCache;

// == Public Constants ==
/// Default freshness window: 5 minutes
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

// == Cache Config ==
/// Construction parameters for a [`SessionCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum entry age in milliseconds; an entry this old is absent
    pub ttl_ms: u64,
}

impl CacheConfig {
    pub fn new(ttl_ms: u64) -> Self {
        Self { ttl_ms }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
