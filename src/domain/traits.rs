// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits:
//   - FlextextLoader implements CorpusSource
//   - FilterPolicy implements WordFilter
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::data::walker::Extraction;
use crate::domain::corpus::Word;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can produce an extracted corpus.
pub trait CorpusSource {
    /// Short name used to derive output file names
    fn name(&self) -> &str;

    /// Read and extract the whole corpus.
    fn extract(&self) -> Result<Extraction>;
}

// ─── WordFilter ───────────────────────────────────────────────────────────────
/// Decides whether a word is usable as a training example.
pub trait WordFilter {
    fn accepts(&self, word: &Word) -> bool;
}

impl<F> WordFilter for F
where
    F: Fn(&Word) -> bool,
{
    fn accepts(&self, word: &Word) -> bool {
        self(word)
    }
}
