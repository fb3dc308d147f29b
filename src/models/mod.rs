//! Request and Response models for the cache sidecar API
//!
//! DTOs used for extracting path parameters and
//! serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CachePath, SessionPath};
pub use responses::{
    GetResponse, HealthResponse, InvalidateResponse, SessionResponse, SessionsResponse,
    SetResponse, StatsResponse,
};
