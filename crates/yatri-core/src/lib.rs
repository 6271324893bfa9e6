//! Yatri Core - Foundation types for the tourist identity ledger
//!
//! This crate provides the pure, I/O-free building blocks of the Yatri
//! ledger core: masked-PII hashing, identifier derivation, the injected
//! clock abstraction, the persisted record types, and the unified error
//! type. Contract logic that reads and writes ledger state lives in
//! `yatri-ledger`; nothing in this crate touches a store.
//!
//! Everything here is deterministic given its inputs. Time enters only
//! through the [`Clock`] trait so that tests can reproduce the
//! time-dependent behaviors (identifier salting, event-key granularity)
//! exactly.

#![forbid(unsafe_code)]

/// Injected clock abstraction for deterministic time
pub mod clock;

/// Unified error handling
pub mod errors;

/// Pure synchronous one-way hashing for masking personal data
pub mod hash;

/// Tourist identifier type and derivation
pub mod identifiers;

/// Persisted record types (identity and events)
pub mod records;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{LedgerError, Result};
pub use identifiers::{InvalidTouristId, TouristId};
pub use records::{
    EmergencyAlert, LocationRecord, TouristIdentity, ALERT_STATUS_ACTIVE, INITIAL_SAFETY_SCORE,
    VALIDITY_DAYS,
};
