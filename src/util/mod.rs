// ============================================================================
// src/util/mod.rs – comparison and diagnostics helpers
// ============================================================================

pub mod ct;
pub mod diagnostics;
