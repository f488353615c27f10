// ============================================================
// Layer 4 — FLExText Loader
// ============================================================
// Reads .flextext files from disk and hands the parsed XML tree to
// the Document Walker.
//
// A FLExText export is a single XML document; roxmltree parses it
// into a read-only tree that the walker traverses by element name.
// Corpora are field-linguistics scale, so the whole file is read
// into memory.
//
// Reference: roxmltree crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::walker::{walk_corpus, Extraction};
use crate::domain::traits::CorpusSource;
use crate::infra::diagnostics::PosInventory;

/// File extension of FLEx interlinear exports
pub const FLEXTEXT_EXT: &str = "flextext";

/// Loads one .flextext file.
pub struct FlextextLoader {
    path: PathBuf,
    name: String,
    inventory: PosInventory,
}

impl FlextextLoader {
    pub fn new(path: impl Into<PathBuf>, inventory: PosInventory) -> Self {
        let path = path.into();

        // Use the file stem as the corpus name: lez-all_txts.flextext → lez-all_txts
        let name = path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("corpus")
            .to_string();

        Self { path, name, inventory }
    }

    /// Expand a path into loaders: a file gives one loader, a directory
    /// gives one per .flextext file inside it, sorted by name.
    pub fn discover(path: &Path, inventory: &PosInventory) -> Result<Vec<Self>> {
        if !path.is_dir() {
            return Ok(vec![Self::new(path, inventory.clone())]);
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(path)
            .with_context(|| format!("Cannot read directory '{}'", path.display()))?
        {
            let entry = entry?;
            let file = entry.path();
            if file.extension().and_then(|e| e.to_str()) == Some(FLEXTEXT_EXT) {
                files.push(file);
            }
        }
        files.sort();

        if files.is_empty() {
            tracing::warn!("No .{} files found in '{}'", FLEXTEXT_EXT, path.display());
        }

        Ok(files
            .into_iter()
            .map(|file| Self::new(file, inventory.clone()))
            .collect())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse an in-memory FLExText document.
    pub fn extract_str(xml: &str, inventory: &PosInventory) -> Result<Extraction> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options)
            .context("Malformed FLExText XML")?;

        Ok(walk_corpus(doc.root(), inventory))
    }
}

impl CorpusSource for FlextextLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self) -> Result<Extraction> {
        let xml = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let extraction = Self::extract_str(&xml, &self.inventory)
            .with_context(|| format!("Cannot parse '{}'", self.path.display()))?;

        tracing::debug!(
            "Extracted {} documents from '{}'",
            extraction.documents.len(),
            self.path.display()
        );
        Ok(extraction)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<document>
  <interlinear-text>
    <item type="title" lang="en">Story</item>
    <paragraphs><paragraph><phrases><phrase>
      <words><word><item type="txt" lang="xx">taka</item></word></words>
    </phrase></phrases></paragraph></paragraphs>
  </interlinear-text>
</document>"#;

    #[test]
    fn test_name_is_file_stem() {
        let loader = FlextextLoader::new("data/lez-all_txts.flextext", PosInventory::default());
        assert_eq!(loader.name(), "lez-all_txts");
    }

    #[test]
    fn test_extract_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.flextext");
        fs::write(&path, MINIMAL).unwrap();

        let ex = FlextextLoader::new(&path, PosInventory::default()).extract().unwrap();
        assert_eq!(ex.documents[0].title, "Story");
        assert_eq!(ex.words().count(), 1);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let err = FlextextLoader::extract_str("<document><phrase>", &PosInventory::default());
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = FlextextLoader::new("/nonexistent/x.flextext", PosInventory::default());
        assert!(loader.extract().is_err());
    }

    #[test]
    fn test_discover_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.flextext"), MINIMAL).unwrap();
        fs::write(dir.path().join("a.flextext"), MINIMAL).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let loaders = FlextextLoader::discover(dir.path(), &PosInventory::default()).unwrap();
        let names: Vec<&str> = loaders.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
