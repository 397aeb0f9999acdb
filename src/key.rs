// ============================================================================
// src/key.rs – 32-byte derived key, wiped on drop
// ============================================================================

use std::fmt;

use anyhow::{anyhow, Context, Result};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::params::KEY_LEN;
use crate::util::ct::ct_eq;

/// Output of [`crate::ScryptHasher::derive`]. Opaque secret material.
///
/// Equality is constant-time and `Debug` never prints the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }

    /// Parse 64 hex characters; surrounding whitespace is ignored.
    pub fn from_hex(input: &str) -> Result<Self> {
        let raw = Zeroizing::new(hex::decode(input.trim()).context("decode hex key")?);
        Self::try_from(raw.as_slice())
    }
}

impl TryFrom<&[u8]> for DerivedKey {
    type Error = anyhow::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            anyhow!(
                "derived key is {} bytes (expected {KEY_LEN})",
                bytes.len()
            )
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}
