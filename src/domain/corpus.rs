// ============================================================
// Layer 3 — Corpus Records
// ============================================================
// The uniform in-memory record produced by the Document Walker.
// Built once per input file and never mutated afterwards.
//
// Absent tiers are None rather than a placeholder string. The one
// structural case that the placeholder used to cover, a word with no
// <morphemes> element at all, is its own variant (Analysis::Unanalyzed)
// so that it can never be confused with "segmented into zero morphemes".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::morpheme_type::MorphemeType;

/// Title used when a text has neither an English nor a vernacular title
pub const NO_TITLE: &str = "NO TITLE FOUND";

/// Comment used when a text has no English comment
pub const NO_COMMENT: &str = "No comment";

/// One interlinear text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub comment: String,
    pub lines: Vec<Line>,
}

impl Document {
    /// All kept words of the document, in reading order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|line| line.words.iter())
    }
}

/// One phrase (sentence/line) of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Segment number from the source, or the phrase position as fallback
    pub id: String,

    /// Normalized surface forms of the kept words, joined with one space
    /// between words
    pub raw_text: String,

    /// Free translations keyed by language tag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,

    pub words: Vec<Word>,
}

/// One word (or multiword lexeme as tokenized by the FLEx user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub surface_form: String,
    pub part_of_speech: Option<String>,
    pub analysis: Analysis,
}

impl Word {
    pub fn new(
        surface_form: impl Into<String>,
        part_of_speech: Option<String>,
        analysis: Analysis,
    ) -> Self {
        Self {
            surface_form: surface_form.into(),
            part_of_speech,
            analysis,
        }
    }

    /// Morphemes of a segmented word; empty for an unanalyzed word
    pub fn morphemes(&self) -> &[Morpheme] {
        match &self.analysis {
            Analysis::Unanalyzed => &[],
            Analysis::Segmented(morphemes) => morphemes,
        }
    }
}

/// Morphological analysis of a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "morphemes")]
pub enum Analysis {
    /// The source word carried no <morphemes> element
    Unanalyzed,
    /// The source word carried a <morphemes> element with these morphs
    Segmented(Vec<Morpheme>),
}

/// One morph of a segmented word. Every text field is None when its tier
/// was missing from the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface_morph: Option<String>,
    pub canonical_form: Option<String>,
    pub gloss: Option<String>,
    pub morph_pos: Option<String>,
    pub morpheme_type: MorphemeType,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanalyzed_word_has_no_morphemes() {
        let w = Word::new("taka", None, Analysis::Unanalyzed);
        assert!(w.morphemes().is_empty());
    }

    #[test]
    fn test_segmented_word_exposes_morphemes() {
        let m = Morpheme {
            surface_morph: Some("taka".into()),
            ..Morpheme::default()
        };
        let w = Word::new("taka", Some("v".into()), Analysis::Segmented(vec![m.clone()]));
        assert_eq!(w.morphemes(), &[m]);
    }

    #[test]
    fn test_document_words_flatten_lines() {
        let line = |id: &str, words: Vec<Word>| Line {
            id: id.into(),
            raw_text: String::new(),
            translations: BTreeMap::new(),
            words,
        };
        let doc = Document {
            title: NO_TITLE.into(),
            comment: NO_COMMENT.into(),
            lines: vec![
                line("1", vec![Word::new("a", None, Analysis::Unanalyzed)]),
                line("2", vec![
                    Word::new("b", None, Analysis::Unanalyzed),
                    Word::new("c", None, Analysis::Unanalyzed),
                ]),
            ],
        };
        let surfaces: Vec<&str> = doc.words().map(|w| w.surface_form.as_str()).collect();
        assert_eq!(surfaces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_analysis_serializes_with_state_tag() {
        let json = serde_json::to_string(&Analysis::Unanalyzed).unwrap();
        assert_eq!(json, r#"{"state":"unanalyzed"}"#);
    }
}
