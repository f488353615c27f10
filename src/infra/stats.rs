// ============================================================
// Layer 6 — Corpus Statistics
// ============================================================
// Counts gathered while walking a corpus, for the operator only.
// They are returned next to the extracted documents and never feed
// back into extraction.
//
// Logged after extraction and, unless disabled, written as a JSON
// summary next to the emitted data:
//
//   {
//     "documents": 12,
//     "lines": 840,
//     "lexemes": 6120,
//     ...
//     "pos_tags": ["adj", "adv", "n", "v"]
//   }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// interlinear-text elements
    pub documents: usize,

    /// phrase elements
    pub lines: usize,

    /// Kept words, not counting numerals. A multiword expression is one
    /// lexeme.
    pub lexemes: usize,

    /// Kept words made only of digits
    pub numerals: usize,

    /// Words skipped because FLEx typed them as punctuation
    pub punctuation: usize,

    /// Words skipped because nothing was left after normalization
    pub dropped_empty: usize,

    /// Distinct word-level POS tags, after normalization
    pub pos_tags: BTreeSet<String>,
}

impl CorpusStats {
    /// Report the counts through tracing.
    pub fn log(&self, corpus: &str) {
        tracing::info!(
            "{}: {} documents, {} lines, {} lexemes ignoring punctuation and digits",
            corpus,
            self.documents,
            self.lines,
            self.lexemes,
        );
        tracing::info!(
            "{}: {} numerals kept, {} punctuation and {} empty words skipped",
            corpus,
            self.numerals,
            self.punctuation,
            self.dropped_empty,
        );
        tracing::info!(
            "{}: parts of speech found: {:?}",
            corpus,
            self.pos_tags,
        );
    }

    /// Write the counts as pretty JSON.
    pub fn write_summary(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write statistics to '{}'", path.display()))?;

        tracing::debug!("Saved corpus statistics to '{}'", path.display());
        Ok(())
    }
}
