// ============================================================
// Layer 3 — Morpheme Types
// ============================================================
// FLEx writes the morpheme type as a free-text attribute on <morph>:
//
//   <morph type="enclitic" guid="...">
//
// Different databases use different spellings for the same category
// ("clitic" is an enclitic in some projects, "root" and "bound stem"
// are both stems). The attribute is mapped onto a closed set of
// categories; anything else is kept verbatim as Unrecognized so it can
// be reported instead of silently misclassified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute values that all behave like a stem.
pub const STEM_LABELS: &[&str] = &[
    "stem",
    "bound stem",
    "bound root",
    "bound root A",
    "root",
    "particle",
];

/// Attribute values that behave like an enclitic.
pub const ENCLITIC_LABELS: &[&str] = &["enclitic", "clitic"];

/// Attribute values that behave like an infix.
pub const INFIX_LABELS: &[&str] = &["infix", "infixing interfix"];

/// Category of a morpheme as declared by its `type` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MorphemeType {
    #[default]
    Stem,
    Prefix,
    Suffix,
    Circumfix,
    Proclitic,
    Enclitic,
    Infix,
    MultiwordExpression,
    /// A type attribute this crate has no rule for, kept verbatim
    Unrecognized(String),
}

impl MorphemeType {
    /// Classify a `type` attribute. A missing attribute is a stem.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let Some(raw) = attr else {
            return MorphemeType::Stem;
        };

        match raw {
            s if STEM_LABELS.contains(&s) => MorphemeType::Stem,
            s if ENCLITIC_LABELS.contains(&s) => MorphemeType::Enclitic,
            s if INFIX_LABELS.contains(&s) => MorphemeType::Infix,
            "prefix" => MorphemeType::Prefix,
            "suffix" => MorphemeType::Suffix,
            "circumfix" => MorphemeType::Circumfix,
            "proclitic" => MorphemeType::Proclitic,
            "phrase" => MorphemeType::MultiwordExpression,
            other => MorphemeType::Unrecognized(other.to_string()),
        }
    }

    /// Stems keep the case of their glosses; everything else is an affix
    /// or clitic and gets an uppercase gloss.
    pub fn is_stem_like(&self) -> bool {
        matches!(self, MorphemeType::Stem)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MorphemeType::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            MorphemeType::Stem => "stem",
            MorphemeType::Prefix => "prefix",
            MorphemeType::Suffix => "suffix",
            MorphemeType::Circumfix => "circumfix",
            MorphemeType::Proclitic => "proclitic",
            MorphemeType::Enclitic => "enclitic",
            MorphemeType::Infix => "infix",
            MorphemeType::MultiwordExpression => "multiword-expression",
            MorphemeType::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for MorphemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
