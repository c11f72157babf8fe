use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use rayon::prelude::*;
use sharpscore_core::pipeline::score_file;
use sharpscore_core::quality::Tenengrad;

use super::BorderArg;

#[derive(Args)]
pub struct ScoreArgs {
    /// Image files to score
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Border-extension policy for the gradient kernel
    #[arg(long, value_enum, default_value = "reflect101")]
    pub border: BorderArg,

    /// Also show the score divided by pixel count
    #[arg(long)]
    pub per_pixel: bool,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let scorer = Tenengrad::new(args.border.into());

    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|path| (path, score_file(path, &scorer)))
        .collect();

    let mut scored = Vec::new();
    for (path, result) in results {
        match result {
            Ok(image) => scored.push(image),
            Err(e) => eprintln!("Skipping {}: {}", path.display(), e),
        }
    }

    if scored.is_empty() {
        bail!("None of the {} file(s) could be scored", args.files.len());
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    println!(
        "\nImages by sharpness [Tenengrad, {}] ({} of {}):",
        scorer.border,
        scored.len(),
        args.files.len()
    );
    if args.per_pixel {
        println!("{:>5}  {:>18}  {:>12}  {}", "Rank", "Score", "Per pixel", "File");
        println!("{}", "-".repeat(60));
    } else {
        println!("{:>5}  {:>18}  {}", "Rank", "Score", "File");
        println!("{}", "-".repeat(46));
    }

    for (rank, image) in scored.iter().enumerate() {
        if args.per_pixel {
            println!(
                "{:>5}  {:>18.2}  {:>12.4}  {}",
                rank + 1,
                image.score,
                image.per_pixel(),
                image.path.display()
            );
        } else {
            println!(
                "{:>5}  {:>18.2}  {}",
                rank + 1,
                image.score,
                image.path.display()
            );
        }
    }

    Ok(())
}
