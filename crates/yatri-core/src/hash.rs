//! Pure synchronous hashing for masking personal data
//!
//! Hashing is deterministic, so it stays outside any effect or injection
//! machinery: same input, same output, no side effects. This module is
//! the single place that names the algorithm; callers use [`hash`] and
//! [`digest_hex`] and never touch `sha2` directly.
//!
//! Current algorithm: **SHA-256** (32-byte output, 64 hex characters).
//!
//! The digests mask raw personal-identifier fields (Aadhar number,
//! passport number, itinerary text) before they reach persisted state.
//! There is no salt and no secret key. National ID numbers carry limited
//! entropy, so an exposed digest is open to offline dictionary attack;
//! strengthening this changes the external data format and is a product
//! decision, not one this core takes on its own.

use sha2::{Digest, Sha256};

/// Hash arbitrary bytes to a 32-byte digest
pub fn hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Digest an input string to 64 lowercase hex characters
///
/// This is the masking applied to every personal-identifier field before
/// persistence. Deterministic: two calls with the same input return
/// identical output.
pub fn digest_hex(input: &str) -> String {
    hex::encode(hash(input.as_bytes()))
}
