//! API Module
//!
//! HTTP handlers and routing for the session cache sidecar.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /sessions` - List open sessions
//! - `PUT /sessions/:session` - Open a session
//! - `DELETE /sessions/:session` - Close a session and drop its cache
//! - `GET /sessions/:session/cache/:key` - Read a fresh value
//! - `PUT /sessions/:session/cache/:key` - Store a JSON value
//! - `DELETE /sessions/:session/cache/:key` - Invalidate one key
//! - `DELETE /sessions/:session/cache` - Invalidate every key
//! - `GET /sessions/:session/stats` - Cache statistics
//!
//! # Session lifetime
//! A session and its cache stay in the registry until the client sends
//! `DELETE /sessions/:session` or the process shuts down. Clients must close
//! their session on logout; a page reload that skips the DELETE leaves the
//! session open, and reopening the same id reuses its cache.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
