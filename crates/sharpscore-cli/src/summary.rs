use console::Style;
use sharpscore_core::pipeline::config::{CompareConfig, SharpenConfig};
use sharpscore_core::pipeline::{ComparisonReport, SharpenReport};
use sharpscore_core::sharpen::SharpenMethod;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_compare_summary(config: &CompareConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Sharpness Comparison"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(20)));
    println!();

    for (i, collection) in config.collections.iter().enumerate() {
        println!(
            "  {:<14}{}",
            s.label.apply_to(config.label_for(i)),
            s.path.apply_to(collection.path.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Extensions"),
        s.value.apply_to(config.extensions.join(", "))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Border"),
        s.method.apply_to(config.border)
    );
    println!();
}

pub fn print_report(report: &ComparisonReport) {
    let s = Styles::new();

    for collection in &report.collections {
        println!(
            "  {} {}",
            s.header.apply_to(&collection.label),
            s.path.apply_to(collection.directory.display())
        );
        for image in &collection.images {
            println!(
                "    {}: {}",
                file_name(&image.path),
                s.value.apply_to(format!("{:.2}", image.score))
            );
        }
        for failure in &collection.failures {
            println!(
                "    {}: {}",
                file_name(&failure.path),
                s.warning.apply_to(&failure.reason)
            );
        }
        println!();
    }

    println!("  {}", s.header.apply_to("Mean Scores"));
    for collection in &report.collections {
        println!(
            "    {:<14}{}  {}",
            s.label.apply_to(&collection.label),
            s.value.apply_to(format!("{:.2}", collection.mean())),
            s.label.apply_to(format!("({} images)", collection.len()))
        );
    }
    let failures = report.total_failures();
    if failures > 0 {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Skipped"),
            s.warning.apply_to(failures)
        );
    }
    println!();
    println!(
        "  Scores saved to {}",
        s.path.apply_to(report.output.display())
    );
}

pub fn print_sharpen_summary(config: &SharpenConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Batch Sharpening"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    match config.method {
        SharpenMethod::Unsharp => println!(
            "  {:<14}{} (amount {})",
            s.label.apply_to("Method"),
            s.method.apply_to(config.method),
            s.value.apply_to(config.amount)
        ),
        SharpenMethod::Laplace => println!(
            "  {:<14}{}",
            s.label.apply_to("Method"),
            s.method.apply_to(config.method)
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("JPEG quality"),
        s.value.apply_to(config.quality)
    );
    println!();
}

pub fn print_sharpen_report(report: &SharpenReport) {
    let s = Styles::new();

    if report.written.is_empty() && report.failures.is_empty() {
        println!(
            "  {}",
            s.warning.apply_to(format!(
                "No JPEG files found in {}",
                report.input.display()
            ))
        );
        return;
    }

    for path in &report.written {
        println!("    {}", file_name(path));
    }
    for failure in &report.failures {
        println!(
            "    {}: {}",
            file_name(&failure.path),
            s.warning.apply_to(&failure.reason)
        );
    }
    println!();
    println!(
        "  Sharpened {} image(s) into {}",
        s.value.apply_to(report.written.len()),
        s.path.apply_to(report.output.display())
    );
    if !report.failures.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.warning.apply_to(report.failures.len())
        );
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
