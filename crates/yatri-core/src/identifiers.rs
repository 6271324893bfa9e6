//! Tourist identifier type and derivation
//!
//! A [`TouristId`] is the key under which an identity record lives in the
//! state store: the literal prefix `TID_` followed by exactly 16 lowercase
//! hex characters.

use crate::hash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix carried by every tourist identifier
pub const TOURIST_ID_PREFIX: &str = "TID_";

/// Number of hex characters following the prefix
const HEX_LEN: usize = 16;

/// Error returned when a string is not a well-formed tourist identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tourist identifier: {0}")]
pub struct InvalidTouristId(pub String);

/// Unique identifier of an issued travel credential
///
/// Derived, not random: the identifier is a truncated digest of the two
/// masked personal identifiers salted with the creation time at second
/// granularity. See [`TouristId::derive`] for the consequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TouristId(String);

impl TouristId {
    /// Derive an identifier from the masked inputs and the creation time.
    ///
    /// Hashes `aadhar_hash || passport_hash || unix_seconds(at)` and keeps
    /// the first 16 hex characters. The salt is wall-clock time at second
    /// resolution: two derivations with identical hashed inputs inside the
    /// same second collide, while derivations a second or more apart yield
    /// different identifiers for the same underlying person. Re-submission
    /// is therefore not idempotent and cannot be deduplicated by id alone;
    /// this matches the deployed data format and is deliberately not
    /// corrected here.
    pub fn derive(aadhar_hash: &str, passport_hash: &str, at: DateTime<Utc>) -> Self {
        let combined = format!("{aadhar_hash}{passport_hash}{}", at.timestamp());
        let digest = hash::digest_hex(&combined);
        Self(format!("{TOURIST_ID_PREFIX}{}", &digest[..HEX_LEN]))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TouristId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TouristId {
    type Err = InvalidTouristId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix(TOURIST_ID_PREFIX)
            .ok_or_else(|| InvalidTouristId(s.to_string()))?;
        let well_formed = hex_part.len() == HEX_LEN
            && hex_part
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        if !well_formed {
            return Err(InvalidTouristId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<TouristId> for String {
    fn from(id: TouristId) -> Self {
        id.0
    }
}
