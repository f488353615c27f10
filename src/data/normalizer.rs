// ============================================================
// Layer 4 — Tier Normalizer
// ============================================================
// Cleans the text of one annotation tier before it is stored.
//
// FLEx users annotate with whatever conventions their project grew, so
// the same thing is spelled several ways across databases. Each tier
// has its own normalizer:
//
//   word   → hyphenated words use "~", lowercase
//   morph  → multiword morphs joined with ".", null morphemes → NULL
//   gloss  → Leipzig-style "." joins, affix glosses uppercase
//   POS    → no spaces, FLEx-inserted hyphens removed
//
// All functions are pure and total: unknown characters pass through.
//
// Reference: Leipzig Glossing Rules (rule 4, one-to-many correspondences)

use crate::domain::morpheme_type::MorphemeType;

/// Replaces word-internal hyphens so they never read as morpheme breaks
pub const HYPHEN_MARK: char = '~';

/// Canonical spelling of a null (zero) morpheme
pub const NULL_MORPH: &str = "NULL";

/// Null-morpheme spellings replaced before lowercasing.
/// "*0" is the Lezgi database convention.
const NULL_SPELLINGS: &[&str] = &["Ø", "∅", "*0"];

/// Written-out null morpheme, matched after lowercasing
const ZERO_WORD: &str = "zero";

/// POS spellings that FLEx writes with a hyphen.
const POS_REWRITES: &[(&str, &str)] = &[("pro-form", "proform"), ("Nom-1", "Nom1")];

/// Normalize the baseline text of a word.
///
/// A leading or trailing hyphen is an orthographic quotation mark in some
/// corpora (Cyrillic Lezgi), so it is stripped rather than converted.
pub fn normalize_word(s: &str) -> String {
    s.trim()
        .trim_matches('-')
        .replace('-', &HYPHEN_MARK.to_string())
        .to_lowercase()
        .trim()
        .to_string()
}

/// Normalize a surface morph or canonical morpheme form.
pub fn normalize_morph(s: &str) -> String {
    let mut out = s.trim().replace(' ', ".");

    for spelling in NULL_SPELLINGS {
        out = out.replace(spelling, NULL_MORPH);
    }

    let lowered = rewrite_tokens(&out, NULL_MORPH, NULL_MORPH, str::to_lowercase);
    rewrite_tokens(&lowered, ZERO_WORD, NULL_MORPH, str::to_string)
        .trim()
        .to_string()
}

/// Normalize a morpheme gloss. Affix glosses are uppercased; stem glosses
/// keep their case.
pub fn normalize_gloss(s: &str, morpheme_type: &MorphemeType) -> String {
    let joined = s.trim().replace(['-', ' '], ".");

    if morpheme_type.is_stem_like() {
        joined
    } else {
        joined.to_uppercase()
    }
}

/// Normalize a word-level or morpheme-level part-of-speech tag.
pub fn normalize_pos(s: &str) -> String {
    let mut out = s.replace(' ', "");

    for (from, to) in POS_REWRITES {
        out = out.replace(from, to);
    }

    out.trim().to_string()
}

/// Replace every standalone `token` in `s` with `with`, passing the text
/// between them through `rest`. A token is standalone when no letter
/// touches it on either side: `NULL`, `-NULL` and `NULL.x` match, the
/// `NULL` in `ANNULLED` does not.
fn rewrite_tokens(s: &str, token: &str, with: &str, rest: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;

    for (start, _) in s.match_indices(token) {
        let end = start + token.len();
        let before = s[..start].chars().next_back();
        let after = s[end..].chars().next();
        if before.is_some_and(char::is_alphabetic) || after.is_some_and(char::is_alphabetic) {
            continue;
        }
        out.push_str(&rest(&s[copied..start]));
        out.push_str(with);
        copied = end;
    }

    out.push_str(&rest(&s[copied..]));
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const MORPH_SAMPLES: &[&str] = &[
        "taka",
        "  Taka Si ",
        "Ø",
        "∅-",
        "zero",
        "ZERO",
        "*0",
        "a b  c",
        "NULL",
        "ANNULLED",
        "zeroth",
        "NULL.Pl",
        "Xa\tb",
        "",
    ];

    #[test]
    fn test_word_hyphen_becomes_tilde() {
        assert_eq!(normalize_word("Ada-Bada"), "ada~bada");
    }

    #[test]
    fn test_word_strips_quotation_hyphens() {
        assert_eq!(normalize_word("-Гьа-"), "гьа");
        assert_eq!(normalize_word(" -abc-def "), "abc~def");
    }

    #[test]
    fn test_word_bare_hyphen_is_empty() {
        assert_eq!(normalize_word("-"), "");
        assert_eq!(normalize_word("--"), "");
    }

    #[test]
    fn test_morph_spaces_become_periods() {
        assert_eq!(normalize_morph("Taka si"), "taka.si");
    }

    #[test]
    fn test_morph_never_contains_spaces() {
        for s in MORPH_SAMPLES {
            assert!(!normalize_morph(s).contains(' '), "space left in {s:?}");
        }
    }

    #[test]
    fn test_morph_null_spellings() {
        assert_eq!(normalize_morph("Ø"), "NULL");
        assert_eq!(normalize_morph("∅"), "NULL");
        assert_eq!(normalize_morph("zero"), "NULL");
        assert_eq!(normalize_morph("Zero"), "NULL");
        assert_eq!(normalize_morph("*0"), "NULL");
        assert_eq!(normalize_morph("-Ø"), "-NULL");
        assert_eq!(normalize_morph("NULL.Pl"), "NULL.pl");
    }

    #[test]
    fn test_morph_null_inside_a_word_is_lowercased() {
        assert_eq!(normalize_morph("ANNULLED"), "annulled");
        assert_eq!(normalize_morph("Zeroth"), "zeroth");
    }

    #[test]
    fn test_morph_is_idempotent() {
        for s in MORPH_SAMPLES {
            let once = normalize_morph(s);
            assert_eq!(normalize_morph(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_gloss_affix_is_uppercase() {
        assert_eq!(normalize_gloss("neg", &MorphemeType::Suffix), "NEG");
        assert_eq!(normalize_gloss("1sg-erg", &MorphemeType::Prefix), "1SG.ERG");
        assert_eq!(
            normalize_gloss("from there", &MorphemeType::Enclitic),
            "FROM.THERE"
        );
    }

    #[test]
    fn test_gloss_stem_keeps_case() {
        assert_eq!(normalize_gloss("go", &MorphemeType::Stem), "go");
        assert_eq!(normalize_gloss("Mary", &MorphemeType::Stem), "Mary");
        assert_eq!(normalize_gloss("go out", &MorphemeType::Stem), "go.out");
    }

    #[test]
    fn test_gloss_unrecognized_type_is_affix_like() {
        let t = MorphemeType::Unrecognized("simulfix".into());
        assert_eq!(normalize_gloss("pl", &t), "PL");
    }

    #[test]
    fn test_pos_rewrites() {
        assert_eq!(normalize_pos("pro-form"), "proform");
        assert_eq!(normalize_pos("Nom-1"), "Nom1");
        assert_eq!(normalize_pos(" coord conn "), "coordconn");
    }

    #[test]
    fn test_pos_unknown_passes_through() {
        assert_eq!(normalize_pos("weird-tag"), "weird-tag");
    }
}
