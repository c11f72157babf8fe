use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sharpscore_core::pipeline::config::SharpenConfig;
use sharpscore_core::pipeline::sharpen_directory_reported;

use super::MethodArg;
use crate::progress::BarReporter;
use crate::summary::{print_sharpen_report, print_sharpen_summary};

#[derive(Args)]
pub struct SharpenArgs {
    /// Directory of original JPEGs (*.jpg, or *.jpeg if there are none)
    pub raw: PathBuf,

    /// Directory the sharpened copies are written to (created if missing)
    pub processed: PathBuf,

    /// Sharpening filter
    #[arg(long, value_enum, default_value = "unsharp")]
    pub method: MethodArg,

    /// Unsharp-mask strength
    #[arg(long, default_value = "1.35")]
    pub amount: f32,

    /// JPEG quality of the output (1-100)
    #[arg(long, default_value = "95", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,
}

pub fn run(args: &SharpenArgs) -> Result<()> {
    let config = SharpenConfig {
        method: args.method.into(),
        amount: args.amount,
        quality: args.quality,
        ..SharpenConfig::new(&args.raw, &args.processed)
    };
    config.validate()?;

    print_sharpen_summary(&config);

    let reporter = BarReporter::new()?;
    let report = sharpen_directory_reported(&config, &reporter)?;
    reporter.finish();

    print_sharpen_report(&report);
    Ok(())
}
