// ============================================================================
// src/hasher.rs – scrypt derive / constant-time verify
// ============================================================================

use std::fmt;
use std::sync::Arc;

use zeroize::Zeroizing;

use crate::config::HasherConfig;
use crate::error::{HashError, InvalidInput};
use crate::key::DerivedKey;
use crate::params::{KdfParams, KEY_LEN};
use crate::util::ct::ct_eq;
use crate::util::diagnostics::{VerifyObserver, VerifyOutcome};

/// Password hasher with fixed scrypt parameters ([`KdfParams::STANDARD`]).
///
/// Every call is synchronous and allocates roughly 32 MiB for the duration
/// of the derivation. Concurrent use is safe, but a service exposing this to
/// untrusted traffic has to cap the number of simultaneous calls itself
/// (worker pool, semaphore). There is no cancellation point inside scrypt:
/// to time out, run the call elsewhere and stop waiting for it.
#[derive(Clone)]
pub struct ScryptHasher {
    params: KdfParams,
    config: HasherConfig,
    observer: Option<Arc<dyn VerifyObserver>>,
}

impl ScryptHasher {
    pub fn new() -> Self {
        Self::with_config(HasherConfig::default())
    }

    pub fn with_config(config: HasherConfig) -> Self {
        Self {
            params: KdfParams::STANDARD,
            config,
            observer: None,
        }
    }

    /// Report every verification outcome to `observer` in addition to the
    /// `tracing` events.
    pub fn with_observer(mut self, observer: Arc<dyn VerifyObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_params(params: KdfParams, config: HasherConfig) -> Self {
        Self {
            params,
            config,
            observer: None,
        }
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Derive the 32-byte key for `password` (UTF-8) and `salt`.
    ///
    /// Deterministic: identical inputs always yield identical bytes.
    pub fn derive(&self, password: &str, salt: &[u8]) -> Result<DerivedKey, HashError> {
        let result = self.derive_inner(password.as_bytes(), salt);
        match &result {
            Ok(_) => tracing::debug!(salt_len = salt.len(), "scrypt key derived"),
            Err(e) => tracing::warn!(salt_len = salt.len(), error = %e, "scrypt derivation failed"),
        }
        result
    }

    fn derive_inner(&self, password: &[u8], salt: &[u8]) -> Result<DerivedKey, HashError> {
        self.check_salt(salt)?;
        self.reserve_working_set()?;
        let params = self.params.to_scrypt()?;

        let mut out = Zeroizing::new([0u8; KEY_LEN]);
        scrypt::scrypt(password, salt, &params, &mut out[..])
            .map_err(|e| HashError::Kdf(e.to_string()))?;
        Ok(DerivedKey::from_bytes(*out))
    }

    fn check_salt(&self, salt: &[u8]) -> Result<(), InvalidInput> {
        if salt.is_empty() {
            return Err(InvalidInput::EmptySalt);
        }
        let min = self.config.salt.effective_min_len();
        if salt.len() < min {
            return Err(InvalidInput::SaltTooShort {
                len: salt.len(),
                min,
            });
        }
        Ok(())
    }

    /// Fail with `ResourceExhaustion` instead of aborting inside scrypt when
    /// the working set is over budget or cannot be reserved right now.
    fn reserve_working_set(&self) -> Result<(), HashError> {
        let required = self.params.memory_bytes();
        if let Some(limit) = self.config.memory.max_bytes {
            if required > limit {
                return Err(HashError::ResourceExhaustion {
                    required,
                    limit: Some(limit),
                });
            }
        }

        let exhausted = || HashError::ResourceExhaustion {
            required,
            limit: None,
        };
        let bytes = usize::try_from(required).map_err(|_| exhausted())?;
        let mut probe: Vec<u8> = Vec::new();
        probe.try_reserve_exact(bytes).map_err(|_| exhausted())?;
        Ok(())
    }

    /// `true` iff `password` and `salt` reproduce `expected`.
    ///
    /// Never fails: any error while recomputing the key is reported to the
    /// observer and logs as a malfunction, and the caller sees `false`.
    pub fn verify(&self, password: &str, salt: &[u8], expected: &DerivedKey) -> bool {
        self.verify_outcome(password, salt, expected.as_bytes())
            .is_match()
    }

    /// Like [`verify`](Self::verify) for a key held as raw bytes. Anything
    /// other than exactly 32 bytes is a mismatch.
    pub fn verify_bytes(&self, password: &str, salt: &[u8], expected: &[u8]) -> bool {
        self.verify_outcome(password, salt, expected).is_match()
    }

    /// Verification with the mismatch / malfunction distinction intact.
    pub fn verify_outcome(&self, password: &str, salt: &[u8], expected: &[u8]) -> VerifyOutcome {
        let outcome = if expected.len() != KEY_LEN {
            VerifyOutcome::Mismatch
        } else {
            match self.derive_inner(password.as_bytes(), salt) {
                Ok(actual) if ct_eq(actual.as_bytes(), expected) => VerifyOutcome::Match,
                Ok(_) => VerifyOutcome::Mismatch,
                Err(e) => VerifyOutcome::Malfunction(e),
            }
        };
        self.report(&outcome, salt.len());
        outcome
    }

    fn report(&self, outcome: &VerifyOutcome, salt_len: usize) {
        match outcome {
            VerifyOutcome::Malfunction(e) => {
                tracing::warn!(salt_len, error = %e, "verification could not recompute key")
            }
            other => tracing::debug!(salt_len, outcome = other.label(), "verification finished"),
        }
        if let Some(observer) = &self.observer {
            observer.observe(outcome);
        }
    }
}

impl Default for ScryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScryptHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScryptHasher")
            .field("params", &self.params)
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
