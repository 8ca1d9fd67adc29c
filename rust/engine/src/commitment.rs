//! Commit-reveal fairness for the computer's move.
//!
//! Before the player enters anything, the computer's move is bound to a
//! fresh random key with HMAC-SHA256 and only the digest is published.
//! Revealing the key after the round lets the player recompute the digest
//! and confirm the move was never substituted.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use std::fmt;

use crate::errors::GameError;

/// Key length in bytes (256 bits of entropy).
pub const KEY_BYTES: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// Random key a commitment is bound to.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_BYTES]);

impl SecretKey {
    /// Draw a fresh key from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Entropy`] when the entropy source fails. There
    /// is no fallback generator; the caller must treat this as fatal.
    pub fn random() -> Result<Self, GameError> {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GameError::Entropy(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse a key from its lowercase (or uppercase) hex rendering.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::KeyEncoding`] for non-hex input or any length
    /// other than [`KEY_BYTES`] bytes.
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        let raw = hex::decode(s).map_err(|e| GameError::KeyEncoding(e.to_string()))?;
        let bytes: [u8; KEY_BYTES] = raw
            .try_into()
            .map_err(|_| GameError::KeyEncoding(format!("expected {} bytes", KEY_BYTES)))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", hex::encode(&self.0[..8]))
    }
}

/// A move bound to a secret key, with the publishable digest.
///
/// The digest goes out before any player input; the key stays private until
/// the round resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    key: SecretKey,
    digest: String,
}

impl Commitment {
    /// Bind a move to a fresh random key.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Entropy`] when key generation fails.
    pub fn commit(move_name: &str) -> Result<Self, GameError> {
        Ok(Self::bind(SecretKey::random()?, move_name))
    }

    /// Bind a move to the given key. Deterministic; the same key and move
    /// always produce the same digest.
    pub fn bind(key: SecretKey, move_name: &str) -> Self {
        let digest = hmac_hex(key.as_bytes(), move_name.as_bytes());
        Self { key, digest }
    }

    /// Lowercase hex HMAC-SHA256 digest, safe to publish.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// The committed key. Only call once the round has resolved.
    pub fn reveal(&self) -> &SecretKey {
        &self.key
    }

    /// Recompute the digest for a revealed key and claimed move and compare
    /// it against the published one. Hex case is ignored on the published
    /// side so copy-pasted uppercase digests still check out.
    pub fn verify(key: &SecretKey, move_name: &str, digest: &str) -> bool {
        hmac_hex(key.as_bytes(), move_name.as_bytes()).eq_ignore_ascii_case(digest)
    }
}

fn hmac_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("hmac accepts keys of any length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}
