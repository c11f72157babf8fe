use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::io::discovery::discover_images;
use crate::io::image_io::load_grayscale;
use crate::io::table::save_score_table;
use crate::quality::{SharpnessScorer, Tenengrad};

use super::config::CompareConfig;
use super::types::{
    table_columns, CollectionScores, ComparisonReport, FileFailure, NoOpReporter, PipelineStage,
    ProgressReporter, ScoredImage,
};

/// Load one file as grayscale and score it.
pub fn score_file(path: &Path, scorer: &dyn SharpnessScorer) -> Result<ScoredImage> {
    let frame = load_grayscale(path)?;
    let score = scorer.score(&frame)?;
    Ok(ScoredImage {
        path: path.to_path_buf(),
        width: frame.width(),
        height: frame.height(),
        score,
    })
}

/// Discover and score every matching image in `dir`.
///
/// Files are scored in parallel; results keep discovery order. A file that
/// fails to load or score is logged, recorded in `failures`, and skipped.
/// Only an unreadable directory fails the call.
pub fn score_collection(
    label: &str,
    dir: &Path,
    extensions: &[String],
    scorer: &dyn SharpnessScorer,
    reporter: &dyn ProgressReporter,
) -> Result<CollectionScores> {
    reporter.begin_collection(label);

    reporter.begin_stage(PipelineStage::Discovering, None);
    let files = discover_images(dir, extensions)?;
    reporter.finish_stage();
    info!(
        collection = label,
        directory = %dir.display(),
        files = files.len(),
        "Scoring collection"
    );

    reporter.begin_stage(PipelineStage::Scoring, Some(files.len()));
    let done = AtomicUsize::new(0);
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = score_file(path, scorer);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(completed);
            (path, result)
        })
        .collect();
    reporter.finish_stage();

    let mut images = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(scored) => {
                debug!(path = %path.display(), score = scored.score, "Scored image");
                images.push(scored);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping image");
                failures.push(FileFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(CollectionScores {
        label: label.to_string(),
        directory: dir.to_path_buf(),
        images,
        failures,
    })
}

/// Score every configured collection and write the score table.
pub fn run_comparison(config: &CompareConfig) -> Result<ComparisonReport> {
    run_comparison_reported(config, &NoOpReporter)
}

/// Run a comparison with a thread-safe progress reporter.
pub fn run_comparison_reported(
    config: &CompareConfig,
    reporter: &dyn ProgressReporter,
) -> Result<ComparisonReport> {
    config.validate()?;
    let scorer = Tenengrad::new(config.border);
    info!(
        collections = config.collections.len(),
        border = %config.border,
        "Starting comparison"
    );

    let collections = config
        .collections
        .iter()
        .enumerate()
        .map(|(i, c)| {
            score_collection(
                &config.label_for(i),
                &c.path,
                &config.extensions,
                &scorer,
                reporter,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    reporter.begin_stage(PipelineStage::Writing, None);
    let scores: Vec<Vec<f64>> = collections.iter().map(|c| c.scores()).collect();
    save_score_table(&config.output, &table_columns(&collections, &scores))?;
    reporter.finish_stage();

    for c in &collections {
        info!(
            collection = %c.label,
            scored = c.len(),
            failed = c.failures.len(),
            mean = c.mean(),
            "Collection complete"
        );
    }
    info!(output = %config.output.display(), "Score table written");

    Ok(ComparisonReport {
        collections,
        output: config.output.clone(),
    })
}
