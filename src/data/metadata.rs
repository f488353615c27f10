// ============================================================
// Layer 4 — Title/Comment Resolver
// ============================================================
// Reads the text-level items of one interlinear-text:
//
//   <item type="title" lang="en">Story</item>
//   <item type="title" lang="lez">Хкаят</item>
//   <item type="comment" lang="en">Recorded 2019</item>
//
// Some texts carry both an English and a vernacular title; both are
// kept, joined with " // ". The last item of each kind wins.

use crate::domain::corpus::{NO_COMMENT, NO_TITLE};
use crate::domain::tier::{TierItem, COMMENT, TITLE};

/// Resolved document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetadata {
    pub title: String,
    pub comment: String,
}

/// Resolve title and comment from a flat list of text-level items.
pub fn resolve_metadata(items: &[TierItem]) -> TextMetadata {
    let mut english_title: Option<&str> = None;
    let mut other_title: Option<&str> = None;
    let mut comment: Option<&str> = None;

    for item in items {
        let Some(text) = item.text.as_deref() else {
            continue;
        };

        if item.is(TITLE) {
            if item.is_english() {
                english_title = Some(text);
            } else {
                other_title = Some(text);
            }
        } else if item.is(COMMENT) && item.is_english() {
            comment = Some(text);
        }
    }

    let title = match (english_title, other_title) {
        (Some(eng), Some(other)) => format!("{eng} // {other}"),
        (Some(eng), None) => eng.to_string(),
        (None, Some(other)) => other.to_string(),
        (None, None) => NO_TITLE.to_string(),
    };

    TextMetadata {
        title,
        comment: comment.unwrap_or(NO_COMMENT).to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn title(lang: &str, text: &str) -> TierItem {
        TierItem::new(TITLE, Some(lang), Some(text))
    }

    #[test]
    fn test_english_title_only() {
        let meta = resolve_metadata(&[title("en", "Story")]);
        assert_eq!(meta.title, "Story");
    }

    #[test]
    fn test_both_titles_are_joined() {
        let meta = resolve_metadata(&[title("en", "Story"), title("id", "Hikaya")]);
        assert_eq!(meta.title, "Story // Hikaya");
    }

    #[test]
    fn test_vernacular_title_only() {
        let meta = resolve_metadata(&[title("id", "Hikaya")]);
        assert_eq!(meta.title, "Hikaya");
    }

    #[test]
    fn test_title_without_lang_counts_as_vernacular() {
        let meta = resolve_metadata(&[TierItem::new(TITLE, None, Some("Hikaya"))]);
        assert_eq!(meta.title, "Hikaya");
    }

    #[test]
    fn test_no_title() {
        let meta = resolve_metadata(&[]);
        assert_eq!(meta.title, "NO TITLE FOUND");
        assert_eq!(meta.comment, "No comment");
    }

    #[test]
    fn test_english_comment() {
        let meta = resolve_metadata(&[
            TierItem::new(COMMENT, Some("ru"), Some("Записано")),
            TierItem::new(COMMENT, Some("en"), Some("Recorded 2019")),
        ]);
        assert_eq!(meta.comment, "Recorded 2019");
    }

    #[test]
    fn test_empty_items_are_ignored() {
        let meta = resolve_metadata(&[
            title("en", "Story"),
            TierItem::new(TITLE, Some("id"), None),
        ]);
        assert_eq!(meta.title, "Story");
    }
}
