//! Identity lifecycle operations
//!
//! The registry owns creation, retrieval, and the single permitted
//! mutation (safety score) of identity records. It holds no state of its
//! own between invocations; the injected [`StateStore`] is the sole
//! system of record.

use crate::store::{CallerContext, StateStore};
use std::sync::Arc;
use tracing::{debug, info};
use yatri_core::{
    hash, Clock, LedgerError, Result, TouristId, TouristIdentity, INITIAL_SAFETY_SCORE,
};

/// Creation, retrieval, and mutation of identity records
pub struct IdentityRegistry {
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    caller: Arc<dyn CallerContext>,
}

impl IdentityRegistry {
    /// Create a registry over the given collaborators
    pub fn new(
        store: Arc<dyn StateStore>,
        clock: Arc<dyn Clock>,
        caller: Arc<dyn CallerContext>,
    ) -> Self {
        Self {
            store,
            clock,
            caller,
        }
    }

    /// Issue a new tourist identity from raw personal data.
    ///
    /// The raw Aadhar number, passport number, and itinerary text are
    /// digested before anything is persisted; only the masks reach the
    /// store. The identifier is salted with the current second, so the
    /// [`LedgerError::AlreadyExists`] check can only ever catch a
    /// duplicate submission landing within the same second.
    pub fn create(
        &self,
        aadhar: &str,
        passport: &str,
        itinerary: &str,
        emergency_contacts: Vec<String>,
    ) -> Result<TouristIdentity> {
        let aadhar_hash = hash::digest_hex(aadhar);
        let passport_hash = hash::digest_hex(passport);
        let itinerary_hash = hash::digest_hex(itinerary);

        let now = self.clock.now();
        let id = TouristId::derive(&aadhar_hash, &passport_hash, now);

        if self.store.get(id.as_str())?.is_some() {
            return Err(LedgerError::already_exists(id.as_str()));
        }

        let identity = TouristIdentity {
            id: id.clone(),
            aadhar_hash,
            passport_hash,
            itinerary_hash,
            emergency_contacts,
            valid_from: now,
            valid_until: now + TouristIdentity::validity_window(),
            is_active: true,
            safety_score: INITIAL_SAFETY_SCORE,
            created_by: self.caller.caller_id(),
            last_updated: now,
        };

        self.put_identity(&identity)?;
        info!(id = %id, "issued tourist identity");
        Ok(identity)
    }

    /// Load the identity record stored under `id`
    pub fn get(&self, id: &TouristId) -> Result<TouristIdentity> {
        let bytes = self
            .store
            .get(id.as_str())?
            .ok_or_else(|| LedgerError::not_found(id.as_str()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| LedgerError::serialization(format!("identity {id}: {e}")))
    }

    /// Overwrite the safety score of an existing identity.
    ///
    /// No range validation on `new_score` and no active-state check:
    /// inactive identities accept score updates. Both gaps match the
    /// deployed contract and stay until product says otherwise.
    pub fn update_safety_score(&self, id: &TouristId, new_score: i64) -> Result<()> {
        let mut identity = self.get(id)?;
        identity.safety_score = new_score;
        identity.last_updated = self.clock.now();
        self.put_identity(&identity)?;
        debug!(id = %id, new_score, "updated safety score");
        Ok(())
    }

    fn put_identity(&self, identity: &TouristIdentity) -> Result<()> {
        let bytes = serde_json::to_vec(identity)
            .map_err(|e| LedgerError::serialization(format!("identity {}: {e}", identity.id)))?;
        self.store.put(identity.id.as_str(), bytes)
    }
}
