// ============================================================================
// src/params.rs – fixed scrypt cost parameters shared by derive and verify
// ============================================================================

use crate::error::HashError;

/// Length of every key produced by [`crate::ScryptHasher`].
pub const KEY_LEN: usize = 32;

/// Scrypt cost parameters.
///
/// Callers never pick these at runtime; [`KdfParams::STANDARD`] is the only
/// value reachable from the public hasher, so `derive` and `verify` cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// CPU/memory cost as log2(N).
    pub log_n: u8,
    /// Block size.
    pub r: u32,
    /// Parallelization.
    pub p: u32,
    /// Derived key length in bytes.
    pub output_len: usize,
}

impl KdfParams {
    /// N = 32768, r = 8, p = 1, 32-byte output.
    pub const STANDARD: KdfParams = KdfParams {
        log_n: 15,
        r: 8,
        p: 1,
        output_len: KEY_LEN,
    };

    /// The actual cost factor N = 2^log_n.
    pub fn n(&self) -> u64 {
        1u64 << self.log_n
    }

    /// Upper bound of the transient allocation for one derivation.
    ///
    /// The working set is `128 * r * N` for the scratch table plus
    /// `128 * r * p` for the mixed blocks and two blocks of mixing state.
    /// Saturates instead of overflowing for absurd parameters.
    pub fn memory_bytes(&self) -> u64 {
        let r = u64::from(self.r);
        let p = u64::from(self.p);
        self.n()
            .saturating_add(p)
            .saturating_add(2)
            .saturating_mul(128)
            .saturating_mul(r)
    }

    pub(crate) fn to_scrypt(self) -> Result<scrypt::Params, HashError> {
        scrypt::Params::new(self.log_n, self.r, self.p, self.output_len)
            .map_err(|e| HashError::Kdf(format!("rejected scrypt parameters: {e}")))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::STANDARD
    }
}
