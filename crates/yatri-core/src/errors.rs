//! Unified error system for the Yatri ledger core
//!
//! One error type covers every operation the core exposes. Each variant
//! corresponds to a distinct failure the contract surface can report;
//! there is no local recovery or retry anywhere in the core, so errors
//! always propagate to the immediate caller.

use serde::{Deserialize, Serialize};

/// Unified error type for all ledger-core operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LedgerError {
    /// A freshly derived identifier collides with an existing record.
    ///
    /// Because identifier derivation is salted with wall-clock seconds,
    /// this can only fire for duplicate submissions within one second.
    #[error("Identity already exists: {id}")]
    AlreadyExists {
        /// The colliding identifier
        id: String,
    },

    /// Lookup of a nonexistent identity key
    #[error("Identity not found: {id}")]
    NotFound {
        /// The identifier that was not found
        id: String,
    },

    /// Location recording attempted against a deactivated identity
    #[error("Identity is not active: {id}")]
    InactiveIdentity {
        /// The inactive identifier
        id: String,
    },

    /// Stored bytes do not decode as the expected record shape
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the decode/encode failure
        message: String,
    },

    /// The underlying state store read or write failed
    #[error("Store error: {message}")]
    Store {
        /// Description of the store fault
        message: String,
    },
}

impl LedgerError {
    /// Create an already-exists error
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Create a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an inactive-identity error
    pub fn inactive_identity(id: impl Into<String>) -> Self {
        Self::InactiveIdentity { id: id.into() }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Standard Result type for ledger-core operations
pub type Result<T> = std::result::Result<T, LedgerError>;
