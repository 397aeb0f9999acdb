// ============================================================================
// src/config.rs – hasher policy (salt floor, memory budget) and its loader
// ============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltPolicy {
    /// Shortest salt accepted by derive/verify. Values below 1 are treated
    /// as 1: an empty salt is never accepted.
    #[serde(default = "default_min_salt_len")]
    pub min_len: usize,
}

fn default_min_salt_len() -> usize {
    16
}

impl Default for SaltPolicy {
    fn default() -> Self {
        Self {
            min_len: default_min_salt_len(),
        }
    }
}

impl SaltPolicy {
    pub fn effective_min_len(&self) -> usize {
        self.min_len.max(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPolicy {
    /// Refuse a derivation whose working set exceeds this many bytes.
    /// `None` leaves the decision to the allocator.
    #[serde(default)]
    pub max_bytes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfig {
    #[serde(default)]
    pub salt: SaltPolicy,
    #[serde(default)]
    pub memory: MemoryPolicy,
}

impl HasherConfig {
    pub fn load<P: AsRef<Path>>(p: P) -> Result<Self> {
        let s = fs::read_to_string(&p)
            .with_context(|| format!("read config: {}", p.as_ref().display()))?;
        let cfg: Self = if p.as_ref().extension().and_then(|e| e.to_str()) == Some("toml") {
            toml::from_str(&s).context("toml parse")?
        } else {
            serde_yaml::from_str(&s).context("yaml parse")?
        };
        tracing::debug!(
            path = %p.as_ref().display(),
            min_salt_len = cfg.salt.effective_min_len(),
            max_memory = ?cfg.memory.max_bytes,
            "hasher config loaded"
        );
        Ok(cfg)
    }
}
