//! Event recording against issued identities
//!
//! Appends location pings and emergency alerts to the ledger. Location
//! recording verifies that the target identity exists and is active;
//! emergency alerts are written unconditionally, even for unknown
//! identities. The asymmetry is inherited from the deployed contract
//! and kept as-is: a panic signal is never rejected for bookkeeping
//! reasons, and unifying the two paths is a product decision.

use crate::keys;
use crate::registry::IdentityRegistry;
use crate::store::StateStore;
use std::sync::Arc;
use tracing::{debug, warn};
use yatri_core::{
    Clock, EmergencyAlert, LedgerError, LocationRecord, Result, TouristId, ALERT_STATUS_ACTIVE,
};

/// Alert type written by the panic-button path
pub const PANIC_ALERT_TYPE: &str = "PANIC_BUTTON";

/// Fixed description written by the panic-button path
const PANIC_DESCRIPTION: &str = "Tourist triggered panic button";

/// Appends location and alert events keyed to an identity
pub struct EventRecorder {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    registry: Arc<IdentityRegistry>,
}

impl EventRecorder {
    /// Create a recorder over the given collaborators
    ///
    /// The registry supplies the existence/active check for location
    /// recording; it should share the recorder's store.
    pub fn new(
        store: Arc<dyn StateStore>,
        clock: Arc<dyn Clock>,
        registry: Arc<IdentityRegistry>,
    ) -> Self {
        Self {
            store,
            clock,
            registry,
        }
    }

    /// Record a location ping for an active identity.
    ///
    /// Fails with [`LedgerError::NotFound`] for unknown identities and
    /// [`LedgerError::InactiveIdentity`] for deactivated ones; neither
    /// case writes anything. The event key carries the write time at
    /// second granularity, so two pings for the same identity within one
    /// second overwrite each other.
    pub fn record_location(
        &self,
        tourist_id: &TouristId,
        latitude: f64,
        longitude: f64,
        address: &str,
        risk_level: &str,
    ) -> Result<()> {
        let identity = self.registry.get(tourist_id)?;
        if !identity.is_active {
            return Err(LedgerError::inactive_identity(tourist_id.as_str()));
        }

        let now = self.clock.now();
        let record = LocationRecord {
            tourist_id: tourist_id.clone(),
            latitude,
            longitude,
            timestamp: now,
            address: address.to_string(),
            risk_level: risk_level.to_string(),
        };

        let key = keys::location_key(tourist_id, now);
        let bytes = serde_json::to_vec(&record)
            .map_err(|e| LedgerError::serialization(format!("location {key}: {e}")))?;
        self.store.put(&key, bytes)?;
        debug!(id = %tourist_id, %key, risk_level, "recorded location");
        Ok(())
    }

    /// Record an emergency alert.
    ///
    /// No existence or active-state check on `tourist_id`: an alert can
    /// be recorded against a nonexistent or inactive identity. The alert
    /// is written with status `"ACTIVE"`; nothing in this core ever
    /// transitions it.
    pub fn trigger_emergency(
        &self,
        tourist_id: &TouristId,
        alert_type: &str,
        location: &str,
        description: &str,
    ) -> Result<()> {
        let now = self.clock.now();
        let key = keys::alert_key(tourist_id, now);
        let alert = EmergencyAlert {
            id: key.clone(),
            tourist_id: tourist_id.clone(),
            alert_type: alert_type.to_string(),
            location: location.to_string(),
            timestamp: now,
            status: ALERT_STATUS_ACTIVE.to_string(),
            description: description.to_string(),
        };

        let bytes = serde_json::to_vec(&alert)
            .map_err(|e| LedgerError::serialization(format!("alert {key}: {e}")))?;
        self.store.put(&key, bytes)?;
        warn!(id = %tourist_id, alert_type, %key, "recorded emergency alert");
        Ok(())
    }

    /// Record a panic-button alert at the given coordinates.
    ///
    /// Convenience wrapper over [`trigger_emergency`](Self::trigger_emergency)
    /// matching the panic flow of the surrounding system: alert type
    /// `PANIC_BUTTON`, location payload the JSON-encoded coordinates,
    /// fixed description.
    pub fn trigger_panic(&self, tourist_id: &TouristId, latitude: f64, longitude: f64) -> Result<()> {
        let location = serde_json::json!({
            "latitude": latitude,
            "longitude": longitude,
        })
        .to_string();
        self.trigger_emergency(tourist_id, PANIC_ALERT_TYPE, &location, PANIC_DESCRIPTION)
    }
}
