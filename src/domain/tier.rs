// ============================================================
// Layer 3 — Tier Items
// ============================================================
// Every FLExText node carries its annotations as <item> children:
//
//   <item type="gls" lang="en">go</item>
//
// The data layer converts those children into TierItem values so the
// extraction rules never touch the XML tree directly.

use serde::{Deserialize, Serialize};

/// Surface morph/segment, and the transcribed text of a word
pub const TXT: &str = "txt";
/// Canonical (underlying) morpheme form
pub const CANONICAL: &str = "cf";
/// Morpheme gloss, and the phrase-level free translation
pub const GLOSS: &str = "gls";
/// Morpheme-level part of speech (what the affix attaches to)
pub const MORPH_POS: &str = "msa";
/// Word-level part of speech
pub const WORD_POS: &str = "pos";
/// Punctuation word
pub const PUNCT: &str = "punct";
/// Phrase/segment number
pub const SEGNUM: &str = "segnum";
/// Text-level title
pub const TITLE: &str = "title";
/// Text-level comment
pub const COMMENT: &str = "comment";

/// Language tag treated as English for titles and comments
pub const ENGLISH: &str = "en";

/// One annotation tier attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierItem {
    /// The `type` attribute (txt, cf, gls, ...)
    pub kind: String,

    /// The `lang` attribute, if present
    pub lang: Option<String>,

    /// The element text; None for an empty element
    pub text: Option<String>,
}

impl TierItem {
    pub fn new(kind: impl Into<String>, lang: Option<&str>, text: Option<&str>) -> Self {
        Self {
            kind: kind.into(),
            lang: lang.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn is_english(&self) -> bool {
        self.lang.as_deref() == Some(ENGLISH)
    }
}
