use std::path::PathBuf;

use crate::io::table::TableColumn;

/// Pipeline stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Discovering,
    Scoring,
    Sharpening,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovering => write!(f, "Discovering images"),
            Self::Scoring => write!(f, "Scoring images"),
            Self::Sharpening => write!(f, "Sharpening images"),
            Self::Writing => write!(f, "Writing scores"),
        }
    }
}

/// Thread-safe progress reporting for a comparison or sharpening run.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Work on the collection labelled `label` is starting.
    fn begin_collection(&self, _label: &str) {}

    /// A new stage has started. `total_items` is the number of work items
    /// in this stage (e.g., file count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_comparison` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// A successfully scored image.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredImage {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub score: f64,
}

impl ScoredImage {
    /// Score divided by pixel count, for comparing images of different size.
    pub fn per_pixel(&self) -> f64 {
        self.score / (self.width * self.height) as f64
    }
}

/// An image that was skipped because it could not be loaded, scored or written.
#[derive(Clone, Debug, PartialEq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Scores of one input directory, in discovery order.
#[derive(Clone, Debug)]
pub struct CollectionScores {
    pub label: String,
    pub directory: PathBuf,
    pub images: Vec<ScoredImage>,
    pub failures: Vec<FileFailure>,
}

impl CollectionScores {
    pub fn scores(&self) -> Vec<f64> {
        self.images.iter().map(|i| i.score).collect()
    }

    /// Arithmetic mean of the scores; 0 when nothing was scored.
    pub fn mean(&self) -> f64 {
        if self.images.is_empty() {
            return 0.0;
        }
        self.images.iter().map(|i| i.score).sum::<f64>() / self.images.len() as f64
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Result of a full comparison run.
#[derive(Clone, Debug)]
pub struct ComparisonReport {
    pub collections: Vec<CollectionScores>,
    /// Path the score table was written to.
    pub output: PathBuf,
}

impl ComparisonReport {
    pub fn total_failures(&self) -> usize {
        self.collections.iter().map(|c| c.failures.len()).sum()
    }
}

/// Result of a batch sharpening run.
#[derive(Clone, Debug)]
pub struct SharpenReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Files written, in discovery order.
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Borrow each collection's scores as a table column.
pub(crate) fn table_columns<'a>(
    collections: &'a [CollectionScores],
    scores: &'a [Vec<f64>],
) -> Vec<TableColumn<'a>> {
    collections
        .iter()
        .zip(scores)
        .map(|(c, s)| TableColumn {
            label: &c.label,
            scores: s,
        })
        .collect()
}
