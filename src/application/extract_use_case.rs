// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates one extraction run, per input corpus:
//
//   Step 1: Save the effective config       (Layer 6 - infra)
//   Step 2: Load and walk the .flextext     (Layer 4 - data)
//   Step 3: Report statistics               (Layer 6 - infra)
//   Step 4: Split trainable / unannotated   (Layer 4 - data)
//   Step 5: Emit files for every purpose    (Layer 4 - data)
//
// File naming: <out_dir>/<corpus>_<set>_<purpose>.{input,output}
// where <set> is L (trainable), U (unannotated) or M (all words).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    emitter::{emit, Purpose},
    filter::{partition, FilterPolicy},
    loader::FlextextLoader,
};
use crate::domain::{corpus::Word, traits::CorpusSource};
use crate::infra::{config_store::ConfigStore, diagnostics::PosInventory, stats::CorpusStats};

// ─── Extraction Configuration ────────────────────────────────────────────────
// Everything that decides what a run writes. Serialisable so it can be
// loaded from a file and saved next to the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// .flextext files, or directories containing them
    pub inputs: Vec<PathBuf>,
    pub out_dir: PathBuf,
    /// Output purposes; unknown names are reported and skipped
    pub purposes: Vec<String>,
    pub filter: FilterPolicy,
    /// Also write every extracted word to the `M` set
    pub write_master: bool,
    /// Write `<corpus>_stats.json`
    pub write_stats: bool,
    /// Replaces the built-in POS inventory used for diagnostics
    pub pos_inventory: Option<PosInventory>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            out_dir: PathBuf::from("data"),
            purposes: vec![
                Purpose::SurfaceSegmentation.to_string(),
                Purpose::Gloss.to_string(),
                Purpose::SurfaceSegmentationWithGloss.to_string(),
                Purpose::Pos.to_string(),
            ],
            filter: FilterPolicy::default(),
            write_master: false,
            write_stats: true,
            pos_inventory: None,
        }
    }
}

/// Word sets written per purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSet {
    Trainable,
    Unannotated,
    Master,
}

impl WordSet {
    pub fn tag(&self) -> &'static str {
        match self {
            WordSet::Trainable => "L",
            WordSet::Unannotated => "U",
            WordSet::Master => "M",
        }
    }
}

/// What one corpus produced.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    pub name: String,
    pub stats: CorpusStats,
    pub trainable: usize,
    pub unannotated: usize,
    /// Stems of the written file pairs
    pub written: Vec<PathBuf>,
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline for every configured input.
    pub fn execute(&self) -> Result<Vec<CorpusReport>> {
        let cfg = &self.config;

        if cfg.inputs.is_empty() {
            anyhow::bail!("No input files given");
        }

        // ── Step 1: Record the effective configuration ────────────────────────
        let store = ConfigStore::new(&cfg.out_dir)?;
        store.save_config(cfg)?;

        let purposes = self.purposes();
        let inventory = cfg.pos_inventory.clone().unwrap_or_default();
        if inventory.is_empty() {
            tracing::warn!("POS inventory is empty; every POS tag will be reported as unknown");
        }
        tracing::debug!(
            "{} purposes, {} known POS tags, output in '{}'",
            purposes.len(),
            inventory.len(),
            store.dir().display()
        );

        let mut reports = Vec::new();
        for input in &cfg.inputs {
            for loader in FlextextLoader::discover(input, &inventory)? {
                tracing::info!("Extracting '{}'", loader.path().display());
                reports.push(self.run_corpus(&loader, &purposes)?);
            }
        }

        Ok(reports)
    }

    fn run_corpus(&self, source: &dyn CorpusSource, purposes: &[Purpose]) -> Result<CorpusReport> {
        let cfg = &self.config;
        let name = source.name().to_string();

        // ── Step 2: Walk the corpus ───────────────────────────────────────────
        let extraction = source.extract()?;

        // ── Step 3: Statistics ────────────────────────────────────────────────
        extraction.stats.log(&name);
        if !extraction.diagnostics.is_clean() {
            tracing::warn!(
                "{}: {} unhandled morpheme types, {} unknown POS tags",
                name,
                extraction.diagnostics.unrecognized_morpheme_types.len(),
                extraction.diagnostics.unknown_pos_tags.len(),
            );
        }
        if cfg.write_stats {
            extraction
                .stats
                .write_summary(&cfg.out_dir.join(format!("{name}_stats.json")))?;
        }

        // ── Step 4: Quality filter ────────────────────────────────────────────
        let split = partition(extraction.words(), &cfg.filter);

        // ── Step 5: Emit ──────────────────────────────────────────────────────
        let mut written = Vec::new();
        for &purpose in purposes {
            written.push(self.emit_set(&name, WordSet::Trainable, purpose, &split.trainable)?);
            written.push(self.emit_set(&name, WordSet::Unannotated, purpose, &split.unannotated)?);
            if cfg.write_master {
                let all: Vec<&Word> = extraction.words().collect();
                written.push(self.emit_set(&name, WordSet::Master, purpose, &all)?);
            }
        }

        Ok(CorpusReport {
            name,
            trainable: split.trainable.len(),
            unannotated: split.unannotated.len(),
            stats: extraction.stats.clone(),
            written,
        })
    }

    fn emit_set(&self, name: &str, set: WordSet, purpose: Purpose, words: &[&Word]) -> Result<PathBuf> {
        let stem = stem_for(&self.config.out_dir, name, set, purpose);

        emit(words.iter().copied(), purpose, &stem)
            .with_context(|| format!("Emitting {} words for '{}' failed", set.tag(), purpose))?;

        Ok(stem)
    }

    /// Parse the configured purposes, skipping unknown ones.
    fn purposes(&self) -> Vec<Purpose> {
        self.config
            .purposes
            .iter()
            .filter_map(|raw| match raw.parse::<Purpose>() {
                Ok(purpose) => Some(purpose),
                Err(e) => {
                    tracing::warn!(
                        "Output format not found, skipping: {} (expected one of: {})",
                        e,
                        Purpose::ALL.map(|p| p.as_str()).join(", ")
                    );
                    None
                }
            })
            .collect()
    }
}

pub fn stem_for(out_dir: &Path, name: &str, set: WordSet, purpose: Purpose) -> PathBuf {
    out_dir.join(format!("{}_{}_{}", name, set.tag(), purpose))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CORPUS: &str = r#"<document>
  <interlinear-text>
    <item type="title" lang="en">Story</item>
    <paragraphs><paragraph><phrases><phrase>
      <item type="segnum" lang="en">1</item>
      <words>
        <word>
          <item type="txt" lang="xx">takasi</item>
          <item type="pos" lang="en">v</item>
          <morphemes>
            <morph type="stem"><item type="txt" lang="xx">taka</item><item type="gls" lang="en">go</item></morph>
            <morph type="suffix"><item type="txt" lang="xx">si</item><item type="gls" lang="en">neg</item></morph>
          </morphemes>
        </word>
        <word><item type="txt" lang="xx">alis</item></word>
        <word><item type="punct" lang="xx">.</item></word>
      </words>
    </phrase></phrases></paragraph></paragraphs>
  </interlinear-text>
</document>"#;

    fn setup(purposes: &[&str]) -> (tempfile::TempDir, ExtractConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiny.flextext");
        fs::write(&input, CORPUS).unwrap();

        let cfg = ExtractConfig {
            inputs: vec![input],
            out_dir: dir.path().join("out"),
            purposes: purposes.iter().map(|p| p.to_string()).collect(),
            ..ExtractConfig::default()
        };
        (dir, cfg)
    }

    #[test]
    fn test_end_to_end_surface_with_gloss() {
        let (dir, cfg) = setup(&["surface_segmentation_with_gloss"]);
        let reports = ExtractUseCase::new(cfg).execute().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "tiny");
        assert_eq!(reports[0].trainable, 1);
        assert_eq!(reports[0].unannotated, 1);
        assert_eq!(reports[0].stats.lexemes, 2);
        assert_eq!(reports[0].stats.punctuation, 1);

        let out = dir.path().join("out");
        let read = |f: &str| fs::read_to_string(out.join(f)).unwrap();
        assert_eq!(read("tiny_L_surface_segmentation_with_gloss.input"), "t a k a s i");
        assert_eq!(read("tiny_L_surface_segmentation_with_gloss.output"), "taka#go si#NEG");
        assert_eq!(read("tiny_U_surface_segmentation_with_gloss.input"), "a l i s");
        assert!(out.join("tiny_stats.json").exists());
        assert!(out.join("extract_config.json").exists());
    }

    #[test]
    fn test_unknown_purpose_is_skipped() {
        let (dir, cfg) = setup(&["lemma", "pos"]);
        let reports = ExtractUseCase::new(cfg).execute().unwrap();

        assert_eq!(reports[0].written.len(), 2);
        let out = dir.path().join("out");
        assert!(out.join("tiny_L_pos.output").exists());
        assert!(!out.join("tiny_L_lemma.output").exists());
    }

    #[test]
    fn test_master_set() {
        let (dir, mut cfg) = setup(&["pos"]);
        cfg.write_master = true;
        ExtractUseCase::new(cfg).execute().unwrap();

        let master = fs::read_to_string(dir.path().join("out").join("tiny_M_pos.output")).unwrap();
        assert_eq!(master, "v\n@@@");
    }

    #[test]
    fn test_no_inputs_is_an_error() {
        let cfg = ExtractConfig::default();
        assert!(ExtractUseCase::new(cfg).execute().is_err());
    }

    #[test]
    fn test_stem_naming() {
        let stem = stem_for(Path::new("data"), "lez", WordSet::Unannotated, Purpose::Gloss);
        assert_eq!(stem, Path::new("data").join("lez_U_gloss"));
    }
}
