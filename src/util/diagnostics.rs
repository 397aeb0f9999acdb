// ============================================================================
// src/util/diagnostics.rs – out-of-band reporting of verification outcomes
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::HashError;

/// What actually happened during a verification.
///
/// [`crate::ScryptHasher::verify`] folds this into a `bool`; observers and
/// logs still see whether a `false` was a wrong password or a broken KDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Match,
    Mismatch,
    Malfunction(HashError),
}

impl VerifyOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, VerifyOutcome::Match)
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerifyOutcome::Match => "match",
            VerifyOutcome::Mismatch => "mismatch",
            VerifyOutcome::Malfunction(_) => "malfunction",
        }
    }
}

impl fmt::Display for VerifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyOutcome::Malfunction(e) => write!(f, "malfunction: {e}"),
            other => f.write_str(other.label()),
        }
    }
}

/// Receives every verification outcome. Must not block for long; it runs on
/// the verifying thread.
pub trait VerifyObserver: Send + Sync {
    fn observe(&self, outcome: &VerifyOutcome);
}

impl<F> VerifyObserver for F
where
    F: Fn(&VerifyOutcome) + Send + Sync,
{
    fn observe(&self, outcome: &VerifyOutcome) {
        self(outcome)
    }
}

/// Counting observer, suitable for exporting to whatever metrics system the
/// caller runs.
#[derive(Debug, Default)]
pub struct VerifyStats {
    matches: AtomicU64,
    mismatches: AtomicU64,
    malfunctions: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyStatsSnapshot {
    pub matches: u64,
    pub mismatches: u64,
    pub malfunctions: u64,
}

impl VerifyStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> VerifyStatsSnapshot {
        VerifyStatsSnapshot {
            matches: self.matches.load(Ordering::Relaxed),
            mismatches: self.mismatches.load(Ordering::Relaxed),
            malfunctions: self.malfunctions.load(Ordering::Relaxed),
        }
    }
}

impl VerifyObserver for VerifyStats {
    fn observe(&self, outcome: &VerifyOutcome) {
        let counter = match outcome {
            VerifyOutcome::Match => &self.matches,
            VerifyOutcome::Mismatch => &self.mismatches,
            VerifyOutcome::Malfunction(_) => &self.malfunctions,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
