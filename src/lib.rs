//! Posyandu Cache - session-scoped data cache for the health-post client
//!
//! Provides a TTL-bounded read-through cache owned by each user session,
//! plus an HTTP sidecar hosting one cache per open session.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod session;

pub use api::AppState;
pub use cache::{CacheConfig, SessionCache};
pub use config::Config;
pub use session::SessionRegistry;
