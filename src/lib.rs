//! Scrypt password hashing with fixed memory-hard parameters and
//! constant-time verification.
//!
//! ```no_run
//! use scrypt_hasher::ScryptHasher;
//!
//! let hasher = ScryptHasher::new();
//! let salt = [0x42u8; 16]; // caller-generated and caller-stored
//! let key = hasher.derive("correct horse battery staple", &salt)?;
//! assert!(hasher.verify("correct horse battery staple", &salt, &key));
//! # Ok::<(), scrypt_hasher::HashError>(())
//! ```
//!
//! Salt generation, storage and any credential string format are left to the
//! caller, as is bounding how many derivations run at once (~32 MiB each).

pub mod config;
pub mod error;
pub mod hasher;
pub mod key;
pub mod params;
pub mod util;

pub use config::{HasherConfig, MemoryPolicy, SaltPolicy};
pub use error::{HashError, InvalidInput};
pub use hasher::ScryptHasher;
pub use key::DerivedKey;
pub use params::{KdfParams, KEY_LEN};
pub use util::diagnostics::{VerifyObserver, VerifyOutcome, VerifyStats, VerifyStatsSnapshot};
