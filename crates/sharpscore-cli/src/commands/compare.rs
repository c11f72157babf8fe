use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use sharpscore_core::pipeline::config::{CollectionConfig, CompareConfig};
use sharpscore_core::pipeline::run_comparison_reported;

use super::BorderArg;
use crate::progress::BarReporter;
use crate::summary::{print_compare_summary, print_report};

#[derive(Args)]
pub struct CompareArgs {
    /// Input directories, one column each
    pub dirs: Vec<PathBuf>,

    /// Comparison config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extension to include, repeatable (default: jpg)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Column label, repeatable, in directory order
    #[arg(long = "label")]
    pub labels: Vec<String>,

    /// Border-extension policy for the gradient kernel
    #[arg(long, value_enum)]
    pub border: Option<BorderArg>,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = build_config(args)?;

    print_compare_summary(&config);

    let reporter = BarReporter::new()?;
    let report = run_comparison_reported(&config, &reporter)?;
    reporter.finish();

    print_report(&report);
    Ok(())
}

/// Start from the config file (if any), then let explicit arguments win.
fn build_config(args: &CompareArgs) -> Result<CompareConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid comparison config")?
    } else {
        if args.dirs.is_empty() {
            bail!("Pass at least one input directory or --config");
        }
        CompareConfig::default()
    };

    if !args.dirs.is_empty() {
        config.collections = args.dirs.iter().cloned().map(CollectionConfig::new).collect();
    }
    if args.labels.len() > config.collections.len() {
        bail!(
            "{} label(s) given for {} collection(s)",
            args.labels.len(),
            config.collections.len()
        );
    }
    for (collection, label) in config.collections.iter_mut().zip(&args.labels) {
        collection.label = Some(label.clone());
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    if let Some(border) = args.border {
        config.border = border.into();
    }

    config.validate()?;
    Ok(config)
}
