// ============================================================
// Layer 4 — Quality Filter
// ============================================================
// Splits extracted words into two disjoint sets:
//   - trainable:   complete enough to be a training example
//   - unannotated: everything else (kept for unlabeled data files)
//
// No word is ever dropped here. Which predicates apply is a policy
// choice carried in FilterPolicy and loaded from configuration.
//
// Default policy (a segmentation + glossing experiment):
//   not multiword AND segmented AND fully glossed AND not a numeral

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::data::normalizer::HYPHEN_MARK;
use crate::data::walker::NUMERAL_POS;
use crate::domain::corpus::{Analysis, Word};
use crate::domain::traits::WordFilter;

// ─── Predicates ───────────────────────────────────────────────────────────────

/// A multiword lexical unit should not be treated as one training token.
pub fn is_multiword(word: &Word) -> bool {
    word.surface_form
        .chars()
        .any(|c| c == ' ' || c == HYPHEN_MARK || c == '-')
}

/// Every morpheme carries a gloss. An unanalyzed word has none.
pub fn has_complete_glosses(word: &Word) -> bool {
    is_segmented(word) && word.morphemes().iter().all(|m| m.gloss.is_some())
}

/// The word received a <morphemes> analysis in the source.
pub fn is_segmented(word: &Word) -> bool {
    matches!(word.analysis, Analysis::Segmented(_))
}

pub fn pos_in_allowlist(word: &Word, allowed: &BTreeSet<String>) -> bool {
    word.part_of_speech
        .as_ref()
        .is_some_and(|pos| allowed.contains(pos))
}

pub fn is_numeral(word: &Word) -> bool {
    word.part_of_speech.as_deref() == Some(NUMERAL_POS)
}

// ─── Policy ───────────────────────────────────────────────────────────────────

/// Conjunction of predicates a trainable word must pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    pub reject_multiword: bool,
    pub require_segmented: bool,
    pub require_glosses: bool,
    pub exclude_numerals: bool,
    /// Restrict trainable words to these POS tags
    pub pos_allowlist: Option<BTreeSet<String>>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            reject_multiword: true,
            require_segmented: true,
            require_glosses: true,
            exclude_numerals: true,
            pos_allowlist: None,
        }
    }
}

impl FilterPolicy {
    /// Segmentation-only experiments do not need glosses.
    pub fn segmentation_only() -> Self {
        Self {
            require_glosses: false,
            ..Self::default()
        }
    }
}

impl WordFilter for FilterPolicy {
    fn accepts(&self, word: &Word) -> bool {
        if self.reject_multiword && is_multiword(word) {
            return false;
        }
        if self.exclude_numerals && is_numeral(word) {
            return false;
        }
        if self.require_segmented && !is_segmented(word) {
            return false;
        }
        if self.require_glosses && !has_complete_glosses(word) {
            return false;
        }
        match &self.pos_allowlist {
            Some(allowed) => pos_in_allowlist(word, allowed),
            None => true,
        }
    }
}

/// Words split by a filter. Order within each half follows the input.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub trainable: Vec<&'a Word>,
    pub unannotated: Vec<&'a Word>,
}

/// Split `words` into trainable and unannotated.
pub fn partition<'a, I, F>(words: I, filter: &F) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Word>,
    F: WordFilter + ?Sized,
{
    let mut split = Partition::default();

    for word in words {
        if filter.accepts(word) {
            split.trainable.push(word);
        } else {
            split.unannotated.push(word);
        }
    }

    tracing::info!(
        "Quality filter: {} trainable, {} unannotated",
        split.trainable.len(),
        split.unannotated.len(),
    );

    split
}
