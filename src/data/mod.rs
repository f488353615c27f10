// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a .flextext file to aligned training files.
//
//   .flextext file
//       │
//       ▼
//   FlextextLoader    → reads the file, parses the XML tree
//       │
//       ▼
//   walker            → documents, lines, words, morphemes
//       │               (uses metadata, morpheme, normalizer)
//       ▼
//   filter            → trainable / unannotated partitions
//       │
//       ▼
//   emitter           → <stem>.input / <stem>.output
//
// Each module is responsible for exactly one step and is tested on
// its own.

/// Reads .flextext files from disk
pub mod loader;

/// Per-tier string cleaning
pub mod normalizer;

/// Title and comment of an interlinear text
pub mod metadata;

/// One <morph> → one Morpheme record
pub mod morpheme;

/// Walks the FLExText tree into corpus records
pub mod walker;

/// Splits words into trainable and unannotated
pub mod filter;

/// Writes aligned input/output files
pub mod emitter;
