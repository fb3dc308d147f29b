//! Session Registry
//!
//! Maps session ids to their caches. Sessions never share entries; they only
//! share the clock and the cache configuration.
//!
//! A session lives until [`SessionRegistry::close`] is called. Nothing reaps
//! idle sessions: expiry is lazy and applies to cache entries only, so an
//! abandoned session keeps its (expired) entries until it is closed or the
//! registry is dropped.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::cache::{CacheConfig, SessionCache, SharedClock, SystemClock};

/// Cache type held for each session.
pub type SessionStore = SessionCache<Value, SharedClock>;

#[derive(Debug)]
struct Session {
    cache: SessionStore,
    opened_at: DateTime<Utc>,
}

// == Session Info ==
/// Summary of an open session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: String,
    pub opened_at: DateTime<Utc>,
    /// Stored entries, including expired ones not yet looked up
    pub entries: usize,
}

// == Session Registry ==
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
    clock: SharedClock,
    config: CacheConfig,
}

impl SessionRegistry {
    // == Constructor ==
    /// Creates an empty registry on the system monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Creates an empty registry whose caches all read `clock`.
    pub fn with_clock(config: CacheConfig, clock: SharedClock) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
            config,
        }
    }

    // == Open ==
    /// Opens a session with an empty cache.
    ///
    /// Returns `false` if the session was already open; its cache is kept.
    pub fn open(&mut self, id: &str) -> bool {
        if self.sessions.contains_key(id) {
            return false;
        }

        let cache = SessionCache::with_clock(self.config, Arc::clone(&self.clock));
        self.sessions.insert(
            id.to_string(),
            Session {
                cache,
                opened_at: Utc::now(),
            },
        );
        info!(session = id, ttl_ms = self.config.ttl_ms, "session opened");
        true
    }

    // == Close ==
    /// Closes a session and drops its cache.
    ///
    /// Returns `false` if no such session was open.
    pub fn close(&mut self, id: &str) -> bool {
        match self.sessions.remove(id) {
            Some(session) => {
                info!(
                    session = id,
                    entries = session.cache.len(),
                    "session closed, cache dropped"
                );
                true
            }
            None => false,
        }
    }

    // == Cache Access ==
    pub fn cache(&self, id: &str) -> Option<&SessionStore> {
        self.sessions.get(id).map(|session| &session.cache)
    }

    pub fn cache_mut(&mut self, id: &str) -> Option<&mut SessionStore> {
        self.sessions.get_mut(id).map(|session| &mut session.cache)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    // == Sessions ==
    /// Lists open sessions ordered by id.
    pub fn sessions(&self) -> Vec<SessionInfo> {
        let mut infos: Vec<SessionInfo> = self
            .sessions
            .iter()
            .map(|(id, session)| SessionInfo {
                id: id.clone(),
                opened_at: session.opened_at,
                entries: session.cache.len(),
            })
            .collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
