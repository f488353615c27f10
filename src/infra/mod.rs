// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to one pipeline step:
//
//   config_store.rs — Loading and saving ExtractConfig as JSON, so a
//                     run can be repeated with the same policy.
//
//   stats.rs        — Corpus statistics gathered while walking,
//                     logged and written as a JSON summary.
//
//   diagnostics.rs  — Warn-once reporting of morpheme types and POS
//                     tags the pipeline has no rule for.

/// ExtractConfig persistence
pub mod config_store;

/// Corpus statistics
pub mod stats;

/// Unknown tag reporting
pub mod diagnostics;
