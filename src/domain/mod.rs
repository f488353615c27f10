// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing an extracted IGT corpus.
//
// Rules for this layer:
//   - NO XML types allowed here
//   - NO file I/O
//   - Only plain structs, enums, and traits
//
// The record hierarchy mirrors the FLExText document:
//
//   Document (one interlinear-text)
//     └── Line (one phrase)
//           └── Word
//                 └── Analysis
//                       ├── Unanalyzed           (no <morphemes> in source)
//                       └── Segmented(Vec<Morpheme>)

/// Documents, lines, words and morphemes
pub mod corpus;

/// The morpheme-type vocabulary used by FLEx
pub mod morpheme_type;

/// Tier items: the (type, lang, text) triples attached to every node
pub mod tier;

/// Core abstractions that other layers implement
pub mod traits;
