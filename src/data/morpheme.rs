// ============================================================
// Layer 4 — Morpheme Extractor
// ============================================================
// Turns the tier items of one <morph> into a Morpheme record:
//
//   txt → surface_morph      cf  → canonical_form
//   gls → gloss              msa → morph_pos
//
// Boundary markers are added so that a flat, space-joined
// segmentation still shows how each morph attaches:
//
//   enclitic     =alis          proclitic    ta=
//   circumfix    ka>  (first morph of the word, prefix half)
//                <an> (any later morph, infix-positioned half)
//
// FLEx writes its own circumfix notation "-...-" in the canonical
// form of circumfixed stems and affixes; it is rewritten per type.
//
// Circumfix halves are told apart only by position, which assumes at
// most one circumfix per word.

use crate::data::normalizer::{normalize_gloss, normalize_morph, normalize_pos};
use crate::domain::corpus::Morpheme;
use crate::domain::morpheme_type::MorphemeType;
use crate::domain::tier::{TierItem, CANONICAL, GLOSS, MORPH_POS, TXT};

/// Clitic boundary
pub const CLITIC_MARK: &str = "=";
/// Opens the hole of a circumfix (prefix half)
pub const CIRCUMFIX_OPEN: &str = ">";
/// Closes the hole of a circumfix (suffix half)
pub const CIRCUMFIX_CLOSE: &str = "<";
/// FLEx notation for a discontinuous morpheme
pub const DISCONTINUITY: &str = "-...-";

/// Word-level POS of proper nouns
pub const PROPER_NOUN_POS: &str = "nprop";
/// Gloss given to unglossed proper-noun stems
pub const PROPER_NAME_GLOSS: &str = "proper_name";

/// Where a morph sits within its word.
#[derive(Debug, Clone, Copy)]
pub struct MorphContext<'a> {
    /// 1-based position of this morph among the word's morphs
    pub position: usize,
    /// Normalized POS of the owning word
    pub word_pos: Option<&'a str>,
}

/// Build a Morpheme from one morph's tier items and its `type` attribute.
pub fn extract_morpheme(items: &[TierItem], type_attr: Option<&str>, ctx: MorphContext<'_>) -> Morpheme {
    let morpheme_type = MorphemeType::from_attr(type_attr);
    let mut morpheme = Morpheme {
        morpheme_type,
        ..Morpheme::default()
    };

    for item in items {
        let Some(text) = item.text.as_deref() else {
            continue;
        };

        match item.kind.as_str() {
            TXT => {
                morpheme.surface_morph = Some(mark_clitic(&morpheme.morpheme_type, normalize_morph(text)));
            }
            CANONICAL => {
                morpheme.canonical_form = Some(canonical_form(&morpheme.morpheme_type, text, ctx.position));
            }
            GLOSS => {
                morpheme.gloss = Some(normalize_gloss(text, &morpheme.morpheme_type));
            }
            MORPH_POS => {
                morpheme.morph_pos = Some(normalize_pos(text));
            }
            _ => {}
        }
    }

    if ctx.word_pos == Some(PROPER_NOUN_POS)
        && morpheme.morpheme_type.is_stem_like()
        && morpheme.gloss.is_none()
    {
        morpheme.gloss = Some(PROPER_NAME_GLOSS.to_string());
    }

    morpheme
}

/// Attach the clitic boundary on the side facing the host word.
fn mark_clitic(morpheme_type: &MorphemeType, morph: String) -> String {
    match morpheme_type {
        MorphemeType::Enclitic => format!("{CLITIC_MARK}{morph}"),
        MorphemeType::Proclitic => format!("{morph}{CLITIC_MARK}"),
        _ => morph,
    }
}

fn canonical_form(morpheme_type: &MorphemeType, raw: &str, position: usize) -> String {
    let morph = normalize_morph(raw);

    if *morpheme_type == MorphemeType::Circumfix {
        return if position == 1 {
            format!("{morph}{CIRCUMFIX_OPEN}")
        } else {
            format!("{CIRCUMFIX_CLOSE}{morph}{CIRCUMFIX_OPEN}")
        };
    }

    if raw.contains(DISCONTINUITY) {
        match morpheme_type {
            MorphemeType::Stem | MorphemeType::MultiwordExpression => {
                return morph.replace(DISCONTINUITY, "");
            }
            MorphemeType::Prefix => return morph.replace(DISCONTINUITY, CIRCUMFIX_OPEN),
            MorphemeType::Suffix => {
                return format!("{CIRCUMFIX_CLOSE}{}", morph.replace(DISCONTINUITY, ""));
            }
            _ => {}
        }
    }

    mark_clitic(morpheme_type, morph)
}
