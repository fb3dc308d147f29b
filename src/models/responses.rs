//! Response DTOs for the cache sidecar API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::session::SessionInfo;

/// Response body for `GET /sessions/:session/cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    /// The cached payload, exactly as it was stored
    pub value: Value,
    /// Entry age in milliseconds at lookup time
    pub age_ms: u64,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value, age_ms: u64) -> Self {
        Self {
            key: key.into(),
            value,
            age_ms,
        }
    }
}

/// Response body for `PUT /sessions/:session/cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub message: String,
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached", key),
            key,
        }
    }
}

/// Response body for the invalidate endpoints
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub message: String,
    /// Invalidated key, absent when the whole cache was cleared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl InvalidateResponse {
    pub fn key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' invalidated", key),
            key: Some(key),
        }
    }

    pub fn all() -> Self {
        Self {
            message: "All keys invalidated".to_string(),
            key: None,
        }
    }
}

/// Response body for opening and closing a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session: String,
    pub message: String,
}

impl SessionResponse {
    pub fn opened(session: impl Into<String>, created: bool) -> Self {
        let session = session.into();
        let message = if created {
            format!("Session '{}' opened", session)
        } else {
            format!("Session '{}' already open", session)
        };
        Self { session, message }
    }

    pub fn closed(session: impl Into<String>) -> Self {
        let session = session.into();
        Self {
            message: format!("Session '{}' closed", session),
            session,
        }
    }
}

/// Response body for `GET /sessions`
#[derive(Debug, Clone, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionInfo>,
}

/// Response body for `GET /sessions/:session/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    pub ttl_ms: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms,
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
