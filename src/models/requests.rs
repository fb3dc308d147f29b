//! Request DTOs for the cache sidecar API
//!
//! Defines the path parameters of incoming requests.

use serde::Deserialize;

/// Path parameters of `/sessions/:session`
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPath {
    pub session: String,
}

impl SessionPath {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.session.trim().is_empty() {
            return Some("Session id cannot be empty".to_string());
        }
        None
    }
}

/// Path parameters of `/sessions/:session/cache/:key`
#[derive(Debug, Clone, Deserialize)]
pub struct CachePath {
    pub session: String,
    /// Logical resource key, e.g. `dashboard` or `consultations_42`
    pub key: String,
}

impl CachePath {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.session.trim().is_empty() {
            return Some("Session id cannot be empty".to_string());
        }
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
