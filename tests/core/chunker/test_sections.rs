// Section detector properties
//
// Sections must be ordered, disjoint, and together with their headings
// reconstruct the document up to whitespace.

use crate::common::sample_paper;
use paperchunk::core::chunker::sections::{SectionKind, FULL_TEXT_LABEL};
use paperchunk::core::chunker::SectionDetector;

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn reconstruct(text: &str, detector: &SectionDetector) -> String {
    detector
        .detect(text)
        .iter()
        .map(|section| match section.heading_offset {
            Some(_) => format!("{} {}", section.label, section.text),
            None => section.text.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_sections_reconstruct_document() {
    let text = sample_paper();
    let detector = SectionDetector::new(true);

    assert_eq!(squash(&reconstruct(&text, &detector)), squash(&text));
}

#[test]
fn test_reconstruction_without_headings() {
    let text = "Just a note.\n\nNothing that looks like a heading.";
    let detector = SectionDetector::default();

    let sections = detector.detect(text);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].label, FULL_TEXT_LABEL);
    assert_eq!(squash(&reconstruct(text, &detector)), squash(text));
}

#[test]
fn test_sample_paper_labels() {
    let text = sample_paper();
    let sections = SectionDetector::default().detect(&text);

    let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Abstract,
            SectionKind::Introduction,
            SectionKind::RelatedWork,
            SectionKind::Methodology,
            SectionKind::Experiments,
            SectionKind::Conclusion,
            SectionKind::References,
        ]
    );
    assert_eq!(sections[1].label, "1. Introduction");
    assert_eq!(sections[3].label, "3. Methods");
}

#[test]
fn test_front_matter_is_opt_in() {
    let text = sample_paper();
    let sections = SectionDetector::new(true).detect(&text);

    assert_eq!(sections[0].kind, SectionKind::FrontMatter);
    assert_eq!(sections[0].text, "Sparse Routing for Long Documents\nA. Author, B. Author");
    assert_eq!(sections[1].kind, SectionKind::Abstract);
}

#[test]
fn test_sections_are_disjoint_and_ordered() {
    let text = sample_paper();
    let sections = SectionDetector::default().detect(&text);

    for pair in sections.windows(2) {
        let end = pair[0].offset + pair[0].text.len();
        let next_start = pair[1].heading_offset.unwrap_or(pair[1].offset);
        assert!(end <= next_start, "{} overlaps {}", pair[0].label, pair[1].label);
    }
}
