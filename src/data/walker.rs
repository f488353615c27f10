// ============================================================
// Layer 4 — Document Walker
// ============================================================
// Walks a parsed FLExText tree and builds the corpus records.
//
// The FLExText hierarchy looks like:
//
//   document-root
//     └── interlinear-text            → Document (title/comment items)
//           └── paragraphs/paragraph  (ignored, phrases are flattened)
//                 └── phrase          → Line (segnum item, gls items)
//                       └── word      → Word (txt|punct item, pos item)
//                             └── morphemes
//                                   └── morph → Morpheme (type attr)
//
// Every level is visited in document order; line ids and statistics
// depend on it.
//
// Extraction is a pure function of the tree: counters and warn-once
// diagnostics travel in a WalkState that is returned with the
// documents, and the phrase position used for fallback line ids is an
// explicit per-document counter.

use roxmltree::Node;
use std::collections::BTreeMap;

use crate::data::metadata::resolve_metadata;
use crate::data::morpheme::{extract_morpheme, MorphContext};
use crate::data::normalizer::{normalize_pos, normalize_word, HYPHEN_MARK};
use crate::domain::corpus::{Analysis, Document, Line, Word};
use crate::domain::tier::{TierItem, GLOSS, PUNCT, SEGNUM, WORD_POS};
use crate::infra::diagnostics::{Diagnostics, PosInventory};
use crate::infra::stats::CorpusStats;

/// POS assigned to words written only with digits
pub const NUMERAL_POS: &str = "num";

/// Language key for a free translation with no `lang` attribute
const UNDETERMINED_LANG: &str = "und";

const INTERLINEAR_TEXT: &str = "interlinear-text";
const PHRASE: &str = "phrase";
const WORD: &str = "word";
const MORPHEMES: &str = "morphemes";
const MORPH: &str = "morph";
const ITEM: &str = "item";

/// Result of walking one FLExText document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub documents: Vec<Document>,
    pub stats: CorpusStats,
    pub diagnostics: Diagnostics,
}

impl Extraction {
    /// Every kept word of the corpus, in document order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.documents.iter().flat_map(Document::words)
    }
}

/// Side channel threaded through the traversal.
struct WalkState<'a> {
    inventory: &'a PosInventory,
    stats: CorpusStats,
    diagnostics: Diagnostics,
}

/// Extract every interlinear text below `root`.
pub fn walk_corpus(root: Node<'_, '_>, inventory: &PosInventory) -> Extraction {
    let mut state = WalkState {
        inventory,
        stats: CorpusStats::default(),
        diagnostics: Diagnostics::default(),
    };

    let documents = descendants(root, INTERLINEAR_TEXT)
        .map(|text| walk_text(text, &mut state))
        .collect();

    Extraction {
        documents,
        stats: state.stats,
        diagnostics: state.diagnostics,
    }
}

fn walk_text(text: Node<'_, '_>, state: &mut WalkState<'_>) -> Document {
    state.stats.documents += 1;

    let metadata = resolve_metadata(&tier_items(text));

    let lines = descendants(text, PHRASE)
        .enumerate()
        .map(|(position, phrase)| walk_phrase(phrase, position, state))
        .collect();

    Document {
        title: metadata.title,
        comment: metadata.comment,
        lines,
    }
}

/// `position` is the zero-based index of the phrase within its document.
fn walk_phrase(phrase: Node<'_, '_>, position: usize, state: &mut WalkState<'_>) -> Line {
    state.stats.lines += 1;

    let items = tier_items(phrase);

    let id = items
        .first()
        .filter(|item| item.is(SEGNUM))
        .and_then(|item| item.text.as_deref())
        .map(|segnum| segnum.trim().to_string())
        .unwrap_or_else(|| position.to_string());

    let translations: BTreeMap<String, String> = items
        .iter()
        .filter(|item| item.is(GLOSS))
        .filter_map(|item| {
            let text = item.text.as_deref()?;
            let lang = item.lang.as_deref().unwrap_or(UNDETERMINED_LANG);
            Some((lang.to_string(), text.trim().to_string()))
        })
        .collect();

    let words: Vec<Word> = descendants(phrase, WORD)
        .filter_map(|word| walk_word(word, state))
        .collect();

    // One space between words; the baseline tier carries no separator of its own.
    let raw_text = words
        .iter()
        .map(|w| w.surface_form.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Line {
        id,
        raw_text,
        translations,
        words,
    }
}

/// Returns None for words that are excluded from the corpus.
fn walk_word(word: Node<'_, '_>, state: &mut WalkState<'_>) -> Option<Word> {
    let items = tier_items(word);
    let baseline = items.first();

    if baseline.is_some_and(|item| item.is(PUNCT)) {
        state.stats.punctuation += 1;
        return None;
    }

    let surface = normalize_word(baseline.and_then(|item| item.text.as_deref()).unwrap_or(""));
    if surface.is_empty() || surface == HYPHEN_MARK.to_string() {
        state.stats.dropped_empty += 1;
        return None;
    }

    // Decimal digits only; Roman numerals and fractions keep their annotated POS.
    let is_numeral = surface.chars().all(|c| c.is_ascii_digit());

    let part_of_speech = if is_numeral {
        state.stats.numerals += 1;
        Some(NUMERAL_POS.to_string())
    } else {
        state.stats.lexemes += 1;
        items
            .iter()
            .filter(|item| item.is(WORD_POS))
            .filter_map(|item| item.text.as_deref())
            .last()
            .map(normalize_pos)
    };

    if let Some(tag) = &part_of_speech {
        state.stats.pos_tags.insert(tag.clone());
        state.diagnostics.note_pos(tag, state.inventory);
    }

    let analysis = match children(word, MORPHEMES).next() {
        None => Analysis::Unanalyzed,
        Some(morphemes) => {
            let segments = descendants(morphemes, MORPH)
                .enumerate()
                .map(|(i, morph)| {
                    let ctx = MorphContext {
                        position: i + 1,
                        word_pos: part_of_speech.as_deref(),
                    };
                    let morpheme = extract_morpheme(&tier_items(morph), morph.attribute("type"), ctx);
                    state.diagnostics.note_morpheme_type(&morpheme.morpheme_type);
                    morpheme
                })
                .collect();
            Analysis::Segmented(segments)
        }
    };

    Some(Word::new(surface, part_of_speech, analysis))
}

// ─── Tree helpers ─────────────────────────────────────────────────────────────

fn is_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |n| is_named(n, name))
}

fn descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().filter(move |n| is_named(n, name))
}

/// The <item> children of a node, in document order.
fn tier_items(node: Node<'_, '_>) -> Vec<TierItem> {
    children(node, ITEM)
        .map(|item| TierItem::new(item.attribute("type").unwrap_or_default(), item.attribute("lang"), item.text()))
        .collect()
}
