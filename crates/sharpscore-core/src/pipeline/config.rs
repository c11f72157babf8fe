use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EXTENSION, DEFAULT_JPEG_QUALITY, DEFAULT_LABEL_PREFIX, DEFAULT_OUTPUT_FILE,
    DEFAULT_UNSHARP_AMOUNT, SHARPEN_EXTENSIONS,
};
use crate::error::{Result, SharpscoreError};
use crate::quality::BorderMode;
use crate::sharpen::SharpenMethod;

/// One input directory to score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub path: PathBuf,
    /// Column label; `Directory N` (1-based position) when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CollectionConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            label: None,
        }
    }
}

/// Everything a comparison run needs; nothing is read from globals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Where the score table is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// File extensions to score, without the dot, matched case-insensitively.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub border: BorderMode,
    pub collections: Vec<CollectionConfig>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            extensions: default_extensions(),
            border: BorderMode::default(),
            collections: vec![
                CollectionConfig::new("data/raw"),
                CollectionConfig::new("data/processed"),
            ],
        }
    }
}

impl CompareConfig {
    /// Config for the given directories with every other field defaulted.
    pub fn for_directories<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            collections: dirs.into_iter().map(CollectionConfig::new).collect(),
            ..Self::default()
        }
    }

    /// Display label of the collection at `index`.
    pub fn label_for(&self, index: usize) -> String {
        self.collections
            .get(index)
            .and_then(|c| c.label.clone())
            .unwrap_or_else(|| format!("{} {}", DEFAULT_LABEL_PREFIX, index + 1))
    }

    pub fn validate(&self) -> Result<()> {
        if self.collections.is_empty() {
            return Err(SharpscoreError::Config(
                "at least one collection is required".into(),
            ));
        }
        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(SharpscoreError::Config(
                "at least one file extension is required".into(),
            ));
        }
        Ok(())
    }
}

/// A batch sharpening run: every image in `input` is sharpened and written
/// as JPEG under the same file name in `output`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharpenConfig {
    pub input: PathBuf,
    /// Created if missing.
    pub output: PathBuf,
    #[serde(default)]
    pub method: SharpenMethod,
    /// Unsharp-mask strength; ignored by the Laplace filter.
    #[serde(default = "default_amount")]
    pub amount: f32,
    /// JPEG quality, 1-100.
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Tried in order; the first extension matching any file is the only one
    /// processed.
    #[serde(default = "default_sharpen_extensions")]
    pub extensions: Vec<String>,
}

fn default_amount() -> f32 {
    DEFAULT_UNSHARP_AMOUNT
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_sharpen_extensions() -> Vec<String> {
    SHARPEN_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for SharpenConfig {
    fn default() -> Self {
        Self::new("data/raw", "data/processed")
    }
}

impl SharpenConfig {
    /// Config for `input` -> `output` with every other field defaulted.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            method: SharpenMethod::default(),
            amount: default_amount(),
            quality: default_quality(),
            extensions: default_sharpen_extensions(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(SharpscoreError::Config(format!(
                "JPEG quality must be 1-100, got {}",
                self.quality
            )));
        }
        if !self.amount.is_finite() {
            return Err(SharpscoreError::Config(format!(
                "sharpening amount must be finite, got {}",
                self.amount
            )));
        }
        if self.input == self.output {
            return Err(SharpscoreError::Config(
                "input and output directories must differ".into(),
            ));
        }
        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            return Err(SharpscoreError::Config(
                "at least one file extension is required".into(),
            ));
        }
        Ok(())
    }
}
