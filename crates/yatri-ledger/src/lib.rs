//! Yatri Ledger - Contract logic for the tourist identity ledger
//!
//! This crate holds the business logic that executes atomically against
//! the replicated key-value ledger: issuing identities, recording
//! location pings and emergency alerts, and adjusting safety scores. The
//! ledger platform supplies ordering, commit atomicity, and caller
//! authentication; this code only performs synchronous reads and writes
//! through the [`StateStore`] trait and never assumes anything about
//! concurrent writers.
//!
//! Every operation is one logical unit of work with at most one write, so
//! there is no rollback machinery here: the external transaction boundary
//! commits or discards the whole invocation.

#![forbid(unsafe_code)]

/// Persisted key layout for identity and event records
pub mod keys;

/// Event recording against issued identities
pub mod recorder;

/// Identity lifecycle operations
pub mod registry;

/// Collaborator traits supplied by the ledger platform
pub mod store;

pub use recorder::{EventRecorder, PANIC_ALERT_TYPE};
pub use registry::IdentityRegistry;
pub use store::{CallerContext, MemoryStateStore, StateStore, StaticCaller};
