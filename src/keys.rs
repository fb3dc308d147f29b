//! Resource Keys
//!
//! Logical resource names the client caches under.

use std::fmt::Display;

pub const PROFILE: &str = "profile";
pub const SETTINGS: &str = "settings";
pub const DASHBOARD: &str = "dashboard";
pub const KADER_BROADCASTS: &str = "kader_broadcasts";
pub const POSYANDUS_LIST: &str = "posyandus_list";
pub const POINTS: &str = "points_v2";
pub const KADER_WEIGHING_CHILDREN: &str = "kader_weighing_children";
/// Base key for per-child consultation lists
pub const CONSULTATIONS: &str = "consultations";

/// Builds a per-id variant of a resource key, e.g. `consultations_42`.
pub fn scoped(base: &str, id: impl Display) -> String {
    format!("{}_{}", base, id)
}
