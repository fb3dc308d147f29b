//! Session Module
//!
//! Owns one session cache per open session. A cache lives exactly as long as
//! its session: opening creates an empty cache, closing drops it.

mod registry;

pub use registry::{SessionInfo, SessionRegistry};
