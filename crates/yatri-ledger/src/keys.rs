//! Persisted key layout
//!
//! Identity records live directly under their identifier. Event records
//! are keyed by prefix, identity, and the write time truncated to whole
//! seconds:
//!
//! ```text
//! TID_0123456789abcdef                      identity
//! LOCATION_TID_0123456789abcdef_1700000000  location ping
//! ALERT_TID_0123456789abcdef_1700000000     emergency alert
//! ```
//!
//! The one-second suffix granularity means two events for the same
//! identity within the same second land on the same key and the later
//! write wins. That silent overwrite matches the deployed key layout;
//! retrieval by range over these prefixes is an external concern.

use chrono::{DateTime, Utc};
use yatri_core::TouristId;

/// Prefix of location event keys
pub const LOCATION_KEY_PREFIX: &str = "LOCATION_";

/// Prefix of alert event keys
pub const ALERT_KEY_PREFIX: &str = "ALERT_";

/// Store key for a location event written at `at`
pub fn location_key(tourist_id: &TouristId, at: DateTime<Utc>) -> String {
    format!("{LOCATION_KEY_PREFIX}{tourist_id}_{}", at.timestamp())
}

/// Store key for an emergency alert written at `at`
///
/// Doubles as the alert's own `id` field.
pub fn alert_key(tourist_id: &TouristId, at: DateTime<Utc>) -> String {
    format!("{ALERT_KEY_PREFIX}{tourist_id}_{}", at.timestamp())
}
