//! API Handlers
//!
//! HTTP request handlers for the session lifecycle and cache endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CachePath, GetResponse, HealthResponse, InvalidateResponse, SessionPath, SessionResponse,
    SessionsResponse, SetResponse, StatsResponse,
};
use crate::session::SessionRegistry;

/// Application state shared across all handlers.
///
/// Every cache operation goes through the registry lock.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<SessionRegistry>>,
}

impl AppState {
    pub fn new(registry: SessionRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Creates an empty registry from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SessionRegistry::new(config.cache_config()))
    }
}

fn check(problem: Option<String>) -> Result<()> {
    match problem {
        Some(message) => Err(ApiError::InvalidRequest(message)),
        None => Ok(()),
    }
}

/// Handler for PUT /sessions/:session
///
/// Responds 201 when the session was created, 200 when it was already open.
pub async fn open_session_handler(
    State(state): State<AppState>,
    Path(path): Path<SessionPath>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    check(path.validate())?;

    let created = state.registry.write().await.open(&path.session);
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(SessionResponse::opened(path.session, created))))
}

/// Handler for DELETE /sessions/:session
pub async fn close_session_handler(
    State(state): State<AppState>,
    Path(path): Path<SessionPath>,
) -> Result<Json<SessionResponse>> {
    check(path.validate())?;

    if !state.registry.write().await.close(&path.session) {
        return Err(ApiError::SessionNotFound(path.session));
    }
    Ok(Json(SessionResponse::closed(path.session)))
}

/// Handler for GET /sessions
pub async fn list_sessions_handler(State(state): State<AppState>) -> Json<SessionsResponse> {
    let registry = state.registry.read().await;
    Json(SessionsResponse {
        sessions: registry.sessions(),
    })
}

/// Handler for GET /sessions/:session/cache/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(path): Path<CachePath>,
) -> Result<Json<GetResponse>> {
    check(path.validate())?;

    // Write lock: a lookup may evict an expired entry
    let mut registry = state.registry.write().await;
    let cache = registry
        .cache_mut(&path.session)
        .ok_or_else(|| ApiError::SessionNotFound(path.session.clone()))?;

    match cache.get_with_age(&path.key) {
        Some((value, age_ms)) => Ok(Json(GetResponse::new(
            path.key,
            Value::clone(&value),
            age_ms,
        ))),
        None => {
            debug!(session = %path.session, key = %path.key, "cache miss");
            Err(ApiError::Miss(path.key))
        }
    }
}

/// Handler for PUT /sessions/:session/cache/:key
///
/// The request body is stored as-is; any JSON value is accepted.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(path): Path<CachePath>,
    Json(value): Json<Value>,
) -> Result<Json<SetResponse>> {
    check(path.validate())?;

    let mut registry = state.registry.write().await;
    let cache = registry
        .cache_mut(&path.session)
        .ok_or_else(|| ApiError::SessionNotFound(path.session.clone()))?;
    cache.set(path.key.clone(), value);

    Ok(Json(SetResponse::new(path.key)))
}

/// Handler for DELETE /sessions/:session/cache/:key
///
/// Invalidating a key that is not cached still succeeds.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(path): Path<CachePath>,
) -> Result<Json<InvalidateResponse>> {
    check(path.validate())?;

    let mut registry = state.registry.write().await;
    let cache = registry
        .cache_mut(&path.session)
        .ok_or_else(|| ApiError::SessionNotFound(path.session.clone()))?;
    cache.invalidate(Some(&path.key));

    Ok(Json(InvalidateResponse::key(path.key)))
}

/// Handler for DELETE /sessions/:session/cache
pub async fn invalidate_all_handler(
    State(state): State<AppState>,
    Path(path): Path<SessionPath>,
) -> Result<Json<InvalidateResponse>> {
    check(path.validate())?;

    let mut registry = state.registry.write().await;
    let cache = registry
        .cache_mut(&path.session)
        .ok_or_else(|| ApiError::SessionNotFound(path.session.clone()))?;
    cache.invalidate(None);

    Ok(Json(InvalidateResponse::all()))
}

/// Handler for GET /sessions/:session/stats
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(path): Path<SessionPath>,
) -> Result<Json<StatsResponse>> {
    check(path.validate())?;

    let registry = state.registry.read().await;
    let cache = registry
        .cache(&path.session)
        .ok_or_else(|| ApiError::SessionNotFound(path.session.clone()))?;

    Ok(Json(StatsResponse::new(&cache.stats(), cache.ttl_ms())))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
