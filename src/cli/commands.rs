// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `extract` and `dump`
// and all their configurable flags.
//
// Flags given on the command line override a config file passed
// with --config; anything not given keeps the file's (or the
// built-in) value.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::{collections::BTreeSet, path::PathBuf};

use crate::application::extract_use_case::ExtractConfig;
use crate::data::filter::FilterPolicy;
use crate::infra::config_store::ConfigStore;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build training datasets from .flextext exports
    Extract(ExtractArgs),

    /// Print everything extracted from one .flextext file as JSON
    Dump(DumpArgs),
}

/// All arguments for the `extract` command.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// .flextext files, or directories to search for them
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory the datasets are written to [default: data]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output purpose; repeat for several
    /// (pos, gloss, canonical_segmentation, surface_segmentation,
    /// surface_segmentation_with_gloss)
    #[arg(short, long = "purpose")]
    pub purposes: Vec<String>,

    /// JSON config file to start from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write every extracted word to the M set
    #[arg(long)]
    pub write_master: bool,

    /// Skip writing <corpus>_stats.json
    #[arg(long)]
    pub no_stats: bool,

    /// Keep words without complete glosses in the trainable set
    #[arg(long)]
    pub segmentation_only: bool,

    /// Only words with one of these POS tags are trainable
    #[arg(long = "pos", value_delimiter = ',')]
    pub pos_allowlist: Vec<String>,
}

impl ExtractArgs {
    /// Load the base config (file or defaults) and apply the flags.
    pub fn into_config(self) -> Result<ExtractConfig> {
        let base = match &self.config {
            Some(path) => ConfigStore::load_config(path)?,
            None => ExtractConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(self, mut cfg: ExtractConfig) -> ExtractConfig {
        cfg.inputs = self.inputs;

        if let Some(dir) = self.out_dir {
            cfg.out_dir = dir;
        }
        if !self.purposes.is_empty() {
            cfg.purposes = self.purposes;
        }
        if self.write_master {
            cfg.write_master = true;
        }
        if self.no_stats {
            cfg.write_stats = false;
        }
        if self.segmentation_only {
            cfg.filter = FilterPolicy {
                pos_allowlist: cfg.filter.pos_allowlist.take(),
                ..FilterPolicy::segmentation_only()
            };
        }
        if !self.pos_allowlist.is_empty() {
            cfg.filter.pos_allowlist = Some(self.pos_allowlist.into_iter().collect::<BTreeSet<_>>());
        }
        cfg
    }
}

/// All arguments for the `dump` command
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// The .flextext file to read
    pub input: PathBuf,

    /// Write the JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(inputs: &[&str]) -> ExtractArgs {
        ExtractArgs {
            inputs: inputs.iter().map(PathBuf::from).collect(),
            ..ExtractArgs::default()
        }
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let cfg = args(&["lez.flextext"]).into_config().unwrap();
        assert_eq!(cfg.inputs, vec![PathBuf::from("lez.flextext")]);
        assert_eq!(cfg.out_dir, PathBuf::from("data"));
        assert_eq!(cfg.purposes, ExtractConfig::default().purposes);
        assert!(cfg.write_stats);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("run.json");
        fs::write(&file, r#"{ "out_dir": "from_file", "purposes": ["gloss"], "write_master": true }"#).unwrap();

        let mut a = args(&["lez.flextext"]);
        a.config = Some(file);
        a.purposes = vec!["pos".into()];
        a.no_stats = true;
        let cfg = a.into_config().unwrap();

        assert_eq!(cfg.out_dir, PathBuf::from("from_file"));
        assert_eq!(cfg.purposes, vec!["pos".to_string()]);
        assert!(cfg.write_master);
        assert!(!cfg.write_stats);
    }

    #[test]
    fn test_filter_flags() {
        let mut a = args(&["lez.flextext"]);
        a.segmentation_only = true;
        a.pos_allowlist = vec!["n".into(), "v".into()];
        let cfg = a.into_config().unwrap();

        assert!(!cfg.filter.require_glosses);
        assert!(cfg.filter.require_segmented);
        assert_eq!(cfg.filter.pos_allowlist.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let mut a = args(&["lez.flextext"]);
        a.config = Some(PathBuf::from("/nonexistent/run.json"));
        assert!(a.into_config().is_err());
    }
}
