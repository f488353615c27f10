// ============================================================
// Layer 4 — Columnar Emitter
// ============================================================
// Writes a word list as two aligned files, one word per line:
//
//   <stem>.input   t a k a s i            (characters of the word)
//   <stem>.output  taka#go si#NEG         (depends on the purpose)
//
// Line N of the input file always pairs with line N of the output
// file. Both files are built in memory first; if any word fails the
// alignment check nothing is written.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;

use crate::domain::corpus::{Analysis, Morpheme, Word};

/// Written wherever a tier, an analysis or a POS tag is missing
pub const UNSET_TOKEN: &str = "@@@";

/// Joins a surface morph and its gloss
pub const GLOSS_JOINER: char = '#';

/// What the output-side file should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Pos,
    Gloss,
    CanonicalSegmentation,
    SurfaceSegmentation,
    SurfaceSegmentationWithGloss,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Pos,
        Purpose::Gloss,
        Purpose::CanonicalSegmentation,
        Purpose::SurfaceSegmentation,
        Purpose::SurfaceSegmentationWithGloss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Pos => "pos",
            Purpose::Gloss => "gloss",
            Purpose::CanonicalSegmentation => "canonical_segmentation",
            Purpose::SurfaceSegmentation => "surface_segmentation",
            Purpose::SurfaceSegmentationWithGloss => "surface_segmentation_with_gloss",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = EmitError;

    /// Accepts the full names and the short forms used in older scripts
    /// (`gls`, `canSeg`, `surSeg`, `surSegGls`), with or without a
    /// leading underscore.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('_') {
            "pos" => Ok(Purpose::Pos),
            "gloss" | "gls" => Ok(Purpose::Gloss),
            "canonical_segmentation" | "canSeg" | "can_seg" => Ok(Purpose::CanonicalSegmentation),
            "surface_segmentation" | "surSeg" | "surf_seg" => Ok(Purpose::SurfaceSegmentation),
            "surface_segmentation_with_gloss" | "surSegGls" | "surf_seg_gls" => {
                Ok(Purpose::SurfaceSegmentationWithGloss)
            }
            other => Err(EmitError::UnknownPurpose(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("word '{word}' has {morphs} morphs but {glosses} glosses; morphs and glosses must align")]
    Alignment {
        word: String,
        morphs: usize,
        glosses: usize,
    },

    #[error("unknown output purpose '{0}'")]
    UnknownPurpose(String),

    #[error("cannot write '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The two sides of a dataset, one entry per word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

/// Project words onto input/output columns for a purpose.
pub fn build_columns<'a, I>(words: I, purpose: Purpose) -> Result<Columns, EmitError>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut columns = Columns::default();

    for word in words {
        columns.input.push(spaced_characters(&word.surface_form));
        columns.output.push(output_line(word, purpose)?);
    }

    Ok(columns)
}

/// Build both columns and write `<stem>.input` and `<stem>.output`.
pub fn emit<'a, I>(words: I, purpose: Purpose, stem: &Path) -> Result<Columns, EmitError>
where
    I: IntoIterator<Item = &'a Word>,
{
    let columns = build_columns(words, purpose)?;

    write_column(&with_suffix(stem, "input"), &columns.input)?;
    write_column(&with_suffix(stem, "output"), &columns.output)?;

    tracing::debug!(
        "Wrote {} {} lines to '{}'",
        columns.input.len(),
        purpose,
        stem.display()
    );
    Ok(columns)
}

/// Fail unless every surface morph has exactly one gloss.
pub fn check_alignment(word: &str, morphs: &[&str], glosses: &[&str]) -> Result<(), EmitError> {
    if morphs.len() != glosses.len() {
        return Err(EmitError::Alignment {
            word: word.to_string(),
            morphs: morphs.len(),
            glosses: glosses.len(),
        });
    }
    Ok(())
}

/// `taka si` + `go NEG` → `taka#go si#NEG`
pub fn join_with_glosses(word: &str, morphs: &[&str], glosses: &[&str]) -> Result<String, EmitError> {
    check_alignment(word, morphs, glosses)?;

    Ok(morphs
        .iter()
        .zip(glosses)
        .map(|(morph, gloss)| format!("{morph}{GLOSS_JOINER}{gloss}"))
        .collect::<Vec<_>>()
        .join(" "))
}

fn output_line(word: &Word, purpose: Purpose) -> Result<String, EmitError> {
    let line = match purpose {
        Purpose::Pos => word.part_of_speech.as_deref().unwrap_or(UNSET_TOKEN).to_string(),
        Purpose::Gloss => tier(word, |m| m.gloss.as_deref()).join(" "),
        Purpose::CanonicalSegmentation => tier(word, |m| m.canonical_form.as_deref()).join(" "),
        Purpose::SurfaceSegmentation => tier(word, |m| m.surface_morph.as_deref()).join(" "),
        Purpose::SurfaceSegmentationWithGloss => {
            let morphs = tier(word, |m| m.surface_morph.as_deref());
            let glosses = tier(word, |m| m.gloss.as_deref());
            join_with_glosses(&word.surface_form, &morphs, &glosses)?
        }
    };
    Ok(line)
}

/// One tier of a word, with UNSET_TOKEN for missing values. An
/// unanalyzed word yields a single UNSET_TOKEN.
fn tier<'w>(word: &'w Word, field: impl Fn(&'w Morpheme) -> Option<&'w str>) -> Vec<&'w str> {
    match &word.analysis {
        Analysis::Unanalyzed => vec![UNSET_TOKEN],
        Analysis::Segmented(morphemes) => morphemes
            .iter()
            .map(|m| field(m).unwrap_or(UNSET_TOKEN))
            .collect(),
    }
}

fn spaced_characters(s: &str) -> String {
    s.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_column(path: &Path, lines: &[String]) -> Result<(), EmitError> {
    fs::write(path, lines.join("\n")).map_err(|source| EmitError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Appends `.ext` without replacing an existing extension, so a stem
/// like `lez-2019_L_pos` keeps its full name.
fn with_suffix(stem: &Path, ext: &str) -> PathBuf {
    let mut os = stem.as_os_str().to_owned();
    os.push(".");
    os.push(ext);
    os.into()
}
