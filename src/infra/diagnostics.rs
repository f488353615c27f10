// ============================================================
// Layer 6 — Extraction Diagnostics
// ============================================================
// Corpus data is linguistically irregular, and a new FLEx project can
// introduce morpheme types or POS tags nobody has seen. Such values
// never stop an extraction: they are recorded here and reported once,
// on first sighting, through a `warn` event.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::morpheme_type::MorphemeType;

/// Word-level POS tags observed in the Lezgi and Alas databases,
/// plus "num", which the walker assigns to numerals.
const DEFAULT_POS_TAGS: &[&str] = &[
    // Lezgi
    "ordnum", "Vnf", "num", "indfpro", "nprop", "emph", "Vocpart", "proform",
    "multipnum", "prep", "adv", "post", "ptcp", "pers", "verbprt", "coordconn",
    "adj", "v", "conn", "poss", "pro", "prt", "det", "dem", "interj", "msd",
    "subordconn", "Vf", "cardnum", "n", "interrog", "recp",
    // Alas
    "refl", "Aux", "vt", "cop", "clf", "Adj", "vi", "stc", "existmrkr", "quant",
    "relpro", "vd", "distrnum", "Prep", "Conj",
];

/// The set of POS tags considered "handled".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosInventory(BTreeSet<String>);

impl PosInventory {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PosInventory {
    fn default() -> Self {
        Self::new(DEFAULT_POS_TAGS.iter().copied())
    }
}

/// Unknown attribute values seen during one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub unrecognized_morpheme_types: BTreeSet<String>,
    pub unknown_pos_tags: BTreeSet<String>,
}

impl Diagnostics {
    /// Record a morpheme type; warns the first time an unrecognized one
    /// shows up.
    pub fn note_morpheme_type(&mut self, morpheme_type: &MorphemeType) {
        if morpheme_type.is_recognized() {
            return;
        }
        let raw = morpheme_type.as_str();
        if self.unrecognized_morpheme_types.insert(raw.to_string()) {
            tracing::warn!(
                "Morpheme type '{}' is not handled yet; extracting it as an ordinary morph",
                raw
            );
        }
    }

    /// Record a POS tag; warns the first time a tag outside the
    /// inventory shows up.
    pub fn note_pos(&mut self, tag: &str, inventory: &PosInventory) {
        if inventory.contains(tag) {
            return;
        }
        if self.unknown_pos_tags.insert(tag.to_string()) {
            tracing::warn!("POS tag '{}' is not handled yet; passing it through", tag);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.unrecognized_morpheme_types.is_empty() && self.unknown_pos_tags.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_type_is_not_recorded() {
        let mut d = Diagnostics::default();
        d.note_morpheme_type(&MorphemeType::Suffix);
        assert!(d.is_clean());
    }

    #[test]
    fn test_unrecognized_type_recorded_once() {
        let mut d = Diagnostics::default();
        let t = MorphemeType::Unrecognized("simulfix".into());
        d.note_morpheme_type(&t);
        d.note_morpheme_type(&t);
        assert_eq!(d.unrecognized_morpheme_types.len(), 1);
    }

    #[test]
    fn test_known_pos_is_not_recorded() {
        let mut d = Diagnostics::default();
        d.note_pos("nprop", &PosInventory::default());
        assert!(d.is_clean());
    }

    #[test]
    fn test_unknown_pos_recorded() {
        let mut d = Diagnostics::default();
        let inventory = PosInventory::new(["n", "v"]);
        d.note_pos("adj", &inventory);
        d.note_pos("adj", &inventory);
        d.note_pos("v", &inventory);
        assert_eq!(d.unknown_pos_tags.iter().collect::<Vec<_>>(), vec!["adj"]);
    }

    #[test]
    fn test_inventory_deserializes_from_list() {
        let inventory: PosInventory = serde_json::from_str(r#"["n","v"]"#).unwrap();
        assert!(inventory.contains("n"));
        assert_eq!(inventory.len(), 2);
    }
}
