//! Credential hashing.
//!
//! Login and account management only ever see the `CredentialHasher` trait,
//! so the digest scheme can be replaced without touching call sites. The
//! deployed scheme is a single unsalted round of SHA-256 over the plaintext,
//! hex-encoded, matching the digests already stored for existing accounts.

use sha2::{Digest, Sha256};

/// Deterministic one-way digest over a plaintext credential.
///
/// Implementations must be deterministic: the same plaintext always yields
/// the same digest, since verification is digest equality.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> String;

    /// Verifies a submitted plaintext against a stored digest.
    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        self.hash(plaintext) == digest
    }
}

/// Single-round unsalted SHA-256, hex-encoded.
pub struct Sha256Hasher;

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Hasher used by services unless one is injected.
pub const DEFAULT_HASHER: Sha256Hasher = Sha256Hasher;
