//! detect-sections command tests

use super::test_helpers::{create_cli_test_config, write_paper};
use crate::common::sample_paper;
use paperchunk::cli::commands::sections::{execute, section_entries, SectionsArgs};
use paperchunk::cli::OutputFormat;

#[test]
fn test_section_entries() {
    let text = sample_paper();
    let entries = section_entries(&text, &create_cli_test_config());

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels[0], "Abstract");
    assert_eq!(labels[1], "1. Introduction");
    assert_eq!(entries[0].kind, "abstract");
    assert!(entries.iter().all(|e| e.heading_offset.is_some()));
    assert!(entries.iter().all(|e| e.preview.chars().count() <= 60));
}

#[test]
fn test_front_matter_can_be_enabled() {
    let mut config = (*create_cli_test_config()).clone();
    config.chunking.include_front_matter = true;

    let entries = section_entries(&sample_paper(), &config);
    assert_eq!(entries[0].label, "Front Matter");
    assert!(entries[0].heading_offset.is_none());
    assert_eq!(entries[1].label, "Abstract");
}

#[tokio::test]
async fn test_execute_json() {
    let (_temp, path) = write_paper("paper.txt", &sample_paper());
    let result = execute(SectionsArgs { path }, &create_cli_test_config(), OutputFormat::Json).await;
    assert!(result.is_ok());
}
