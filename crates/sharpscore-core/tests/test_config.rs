use std::path::PathBuf;

use sharpscore_core::pipeline::config::{CollectionConfig, CompareConfig};
use sharpscore_core::pipeline::PipelineStage;
use sharpscore_core::quality::BorderMode;

// ---------------------------------------------------------------------------
// CompareConfig defaults and labels
// ---------------------------------------------------------------------------

#[test]
fn test_default_config() {
    let config = CompareConfig::default();
    assert_eq!(config.output, PathBuf::from("clarity_scores.csv"));
    assert_eq!(config.extensions, vec!["jpg".to_string()]);
    assert_eq!(config.border, BorderMode::Reflect101);
    assert_eq!(config.collections.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_labels_default_to_position() {
    let mut config = CompareConfig::for_directories(["a", "b", "c"]);
    config.collections[1].label = Some("Sharpened".into());
    assert_eq!(config.label_for(0), "Directory 1");
    assert_eq!(config.label_for(1), "Sharpened");
    assert_eq!(config.label_for(2), "Directory 3");
}

#[test]
fn test_minimal_toml_fills_defaults() {
    let config: CompareConfig = toml::from_str(
        r#"
        [[collections]]
        path = "data/raw"

        [[collections]]
        path = "data/processed"
        label = "Processed"
        "#,
    )
    .unwrap();

    assert_eq!(config.output, PathBuf::from("clarity_scores.csv"));
    assert_eq!(config.extensions, vec!["jpg".to_string()]);
    assert_eq!(config.border, BorderMode::Reflect101);
    assert_eq!(config.collections[0], CollectionConfig::new("data/raw"));
    assert_eq!(config.label_for(1), "Processed");
}

#[test]
fn test_full_toml() {
    let config: CompareConfig = toml::from_str(
        r#"
        output = "out/scores.csv"
        extensions = ["jpg", "jpeg", "png"]
        border = "Replicate"

        [[collections]]
        path = "before"
        "#,
    )
    .unwrap();

    assert_eq!(config.output, PathBuf::from("out/scores.csv"));
    assert_eq!(config.extensions.len(), 3);
    assert_eq!(config.border, BorderMode::Replicate);
}

#[test]
fn test_unknown_border_is_rejected() {
    let result: Result<CompareConfig, _> = toml::from_str(
        r#"
        border = "Wrap"

        [[collections]]
        path = "x"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_default_config_round_trips_through_toml() {
    let config = CompareConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: CompareConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_border_mode_display() {
    assert_eq!(format!("{}", BorderMode::Reflect101), "Reflect 101");
    assert_eq!(format!("{}", BorderMode::Reflect), "Reflect");
    assert_eq!(format!("{}", BorderMode::Replicate), "Replicate");
}

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Scoring), "Scoring images");
    assert_eq!(format!("{}", PipelineStage::Writing), "Writing scores");
}
