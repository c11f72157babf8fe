use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{InvalidImageError, Result, SharpscoreError};
use crate::io::discovery::discover_first_match;
use crate::io::image_io::save_jpeg;
use crate::sharpen::{sharpen_image, SharpenMethod};

use super::config::SharpenConfig;
use super::types::{FileFailure, NoOpReporter, PipelineStage, ProgressReporter, SharpenReport};

/// Label passed to [`ProgressReporter::begin_collection`] for a sharpening run.
pub const SHARPEN_LABEL: &str = "Sharpen";

/// Decode `src`, sharpen it and write it to `dest` as JPEG.
pub fn sharpen_file(
    src: &Path,
    dest: &Path,
    method: SharpenMethod,
    amount: f32,
    quality: u8,
) -> Result<()> {
    let img = image::open(src).map_err(|source| InvalidImageError::Decode {
        path: src.to_path_buf(),
        source,
    })?;
    let sharpened = sharpen_image(&img, method, amount);
    save_jpeg(&sharpened, dest, quality)
}

/// Sharpen every image in `config.input` into `config.output`.
pub fn sharpen_directory(config: &SharpenConfig) -> Result<SharpenReport> {
    sharpen_directory_reported(config, &NoOpReporter)
}

/// Batch sharpening with a thread-safe progress reporter.
///
/// The output directory is created first. Files are processed in parallel;
/// one that fails to decode or write is logged, recorded in `failures`, and
/// skipped. Only an unreadable input or uncreatable output directory fails
/// the call.
pub fn sharpen_directory_reported(
    config: &SharpenConfig,
    reporter: &dyn ProgressReporter,
) -> Result<SharpenReport> {
    config.validate()?;
    fs::create_dir_all(&config.output).map_err(|source| SharpscoreError::Directory {
        path: config.output.clone(),
        source,
    })?;

    reporter.begin_collection(SHARPEN_LABEL);
    reporter.begin_stage(PipelineStage::Discovering, None);
    let files = discover_first_match(&config.input, &config.extensions)?;
    reporter.finish_stage();

    if files.is_empty() {
        warn!(
            directory = %config.input.display(),
            extensions = ?config.extensions,
            "No images found"
        );
    }
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        method = %config.method,
        amount = config.amount,
        quality = config.quality,
        files = files.len(),
        "Sharpening directory"
    );

    reporter.begin_stage(PipelineStage::Sharpening, Some(files.len()));
    let done = AtomicUsize::new(0);
    let results: Vec<_> = files
        .par_iter()
        .map(|src| {
            let name = src.file_name().unwrap_or(src.as_os_str());
            let dest = config.output.join(name);
            debug!(path = %src.display(), "Processing");
            let result =
                sharpen_file(src, &dest, config.method, config.amount, config.quality);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(completed);
            (src, dest, result)
        })
        .collect();
    reporter.finish_stage();

    let mut written = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (src, dest, result) in results {
        match result {
            Ok(()) => written.push(dest),
            Err(e) => {
                warn!(path = %src.display(), error = %e, "Skipping image");
                failures.push(FileFailure {
                    path: src.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        written = written.len(),
        failed = failures.len(),
        "Finished processing images"
    );

    Ok(SharpenReport {
        input: config.input.clone(),
        output: config.output.clone(),
        written,
        failures,
    })
}
