mod batch;
pub mod config;
mod orchestrator;
mod types;

pub use batch::{sharpen_directory, sharpen_directory_reported, sharpen_file, SHARPEN_LABEL};
pub use orchestrator::{run_comparison, run_comparison_reported, score_collection, score_file};
pub use types::{
    CollectionScores, ComparisonReport, FileFailure, NoOpReporter, PipelineStage,
    ProgressReporter, ScoredImage, SharpenReport,
};
