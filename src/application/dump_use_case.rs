// ============================================================
// Layer 2 — DumpUseCase
// ============================================================
// Writes the full extracted record of one corpus as JSON, for
// inspecting what the walker produced before choosing a filter
// policy. Shape:
//
//   [{ "title": ..., "comment": ..., "lines": [
//       { "id": "3", "raw_text": ..., "words": [
//           { "surface_form": ..., "part_of_speech": ...,
//             "analysis": { "state": "segmented", "morphemes": [...] } }
//   ]}]}]

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::loader::FlextextLoader;
use crate::domain::traits::CorpusSource;
use crate::infra::diagnostics::PosInventory;

pub struct DumpUseCase {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl DumpUseCase {
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        Self { input, output }
    }

    /// Returns the JSON text; also writes it when an output path is set.
    pub fn execute(&self) -> Result<String> {
        let loader = FlextextLoader::new(&self.input, PosInventory::default());
        let extraction = loader.extract()?;
        extraction.stats.log(loader.name());

        let json = serde_json::to_string_pretty(&extraction.documents)?;

        if let Some(path) = &self.output {
            fs::write(path, &json)
                .with_context(|| format!("Cannot write '{}'", path.display()))?;
            tracing::info!("Wrote {} documents to '{}'", extraction.documents.len(), path.display());
        }

        Ok(json)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::Document;

    #[test]
    fn test_dump_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiny.flextext");
        let output = dir.path().join("tiny.json");
        fs::write(
            &input,
            r#"<document><interlinear-text><paragraphs><paragraph><phrases><phrase>
                 <words><word><item type="txt">ka</item></word></words>
               </phrase></phrases></paragraph></paragraphs></interlinear-text></document>"#,
        )
        .unwrap();

        let json = DumpUseCase::new(input, Some(output.clone())).execute().unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), json);

        let docs: Vec<Document> = serde_json::from_str(&json).unwrap();
        assert_eq!(docs[0].lines[0].words[0].surface_form, "ka");
        assert!(json.contains(r#""state": "unanalyzed""#));
    }
}
