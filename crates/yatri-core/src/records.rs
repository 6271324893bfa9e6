//! Persisted record types
//!
//! All records are stored as JSON with camelCase field names; this is the
//! external data format shared with every other consumer of the ledger,
//! so field names and shapes must not drift.

use crate::identifiers::TouristId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Validity window length of a freshly issued identity, in days
pub const VALIDITY_DAYS: i64 = 30;

/// Safety score assigned at creation
pub const INITIAL_SAFETY_SCORE: i64 = 100;

/// Status carried by every freshly recorded emergency alert
pub const ALERT_STATUS_ACTIVE: &str = "ACTIVE";

/// An issued travel credential
///
/// The raw personal identifiers never appear here: only their digests are
/// persisted. The three hash fields and `created_by` are immutable after
/// creation; the only permitted mutation is the safety score (together
/// with `last_updated`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristIdentity {
    /// Globally unique identifier, also the record's store key
    pub id: TouristId,
    /// Digest of the Aadhar number
    pub aadhar_hash: String,
    /// Digest of the passport number
    pub passport_hash: String,
    /// Digest of the itinerary text
    pub itinerary_hash: String,
    /// Contact strings, insertion order preserved
    pub emergency_contacts: Vec<String>,
    /// Start of the validity window
    pub valid_from: DateTime<Utc>,
    /// End of the validity window, fixed at 30 days after creation
    pub valid_until: DateTime<Utc>,
    /// Whether the identity accepts location events
    pub is_active: bool,
    /// Safety score, initialized to 100
    pub safety_score: i64,
    /// Caller identity at creation time
    pub created_by: String,
    /// Advanced on every mutation
    pub last_updated: DateTime<Utc>,
}

impl TouristIdentity {
    /// Whether the credential is usable at the given instant.
    ///
    /// True when the identity is active and `at` falls before the end of
    /// the validity window. Expiry does not flip `is_active` on the
    /// ledger; it is a read-side judgment.
    pub fn is_valid(&self, at: DateTime<Utc>) -> bool {
        self.is_active && at < self.valid_until
    }

    /// Length of the validity window granted at creation
    pub fn validity_window() -> Duration {
        Duration::days(VALIDITY_DAYS)
    }
}

/// Append-only location event attached to an identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Identity the ping belongs to (reference, not ownership)
    pub tourist_id: TouristId,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// When the ping was recorded
    pub timestamp: DateTime<Utc>,
    /// Human-readable address
    pub address: String,
    /// Free-form risk classification
    pub risk_level: String,
}

/// Append-only emergency alert attached to an identity
///
/// Status is set to `"ACTIVE"` at creation and never transitioned by any
/// operation in this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAlert {
    /// Alert identifier, identical to the store key it is written under
    pub id: String,
    /// Identity the alert concerns (reference, not ownership)
    pub tourist_id: TouristId,
    /// Free-form alert classification
    pub alert_type: String,
    /// Free-form location payload
    pub location: String,
    /// When the alert was raised
    pub timestamp: DateTime<Utc>,
    /// Alert status, starts `"ACTIVE"`
    pub status: String,
    /// Free-form description
    pub description: String,
}
