//! Structural heading detection for research papers.
//!
//! Scans raw extracted text for the usual paper headings (Abstract,
//! Introduction, ... References) and cuts the document into ordered,
//! non-overlapping sections. Headings are matched case-insensitively
//! and may carry a numeric prefix such as `3.` or `4 `.
//!
//! Heading text is removed by slicing at the match boundary, never by
//! feeding the matched text back into a pattern, so labels such as
//! `"1. Introduction"` are handled literally.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Label of the single section produced when no heading is found
pub const FULL_TEXT_LABEL: &str = "Full Text";

/// Label of the text preceding the first heading
pub const FRONT_MATTER_LABEL: &str = "Front Matter";

/// Canonical kind of a detected section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Abstract,
    Introduction,
    RelatedWork,
    Methodology,
    Experiments,
    Results,
    Discussion,
    Conclusion,
    References,
    FrontMatter,
    FullText,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Abstract => "abstract",
            SectionKind::Introduction => "introduction",
            SectionKind::RelatedWork => "related_work",
            SectionKind::Methodology => "methodology",
            SectionKind::Experiments => "experiments",
            SectionKind::Results => "results",
            SectionKind::Discussion => "discussion",
            SectionKind::Conclusion => "conclusion",
            SectionKind::References => "references",
            SectionKind::FrontMatter => "front_matter",
            SectionKind::FullText => "full_text",
        }
    }
}

struct HeadingPattern {
    kind: SectionKind,
    regex: Regex,
}

fn heading(kind: SectionKind, pattern: &str) -> HeadingPattern {
    HeadingPattern {
        kind,
        regex: Regex::new(&format!("(?i){pattern}")).unwrap(),
    }
}

/// Heading vocabulary in declaration order. When two headings start at
/// the same offset the earlier entry wins.
static HEADING_PATTERNS: Lazy<Vec<HeadingPattern>> = Lazy::new(|| {
    vec![
        heading(SectionKind::Abstract, r"\bAbstract\b"),
        heading(SectionKind::Introduction, r"\b(?:1\.?\s+)?Introduction\b"),
        heading(SectionKind::RelatedWork, r"\b(?:\d+\.?\s+)?Related\s+Work\b"),
        heading(
            SectionKind::Methodology,
            r"\b(?:\d+\.?\s+)?(?:Methodology|Methods|Approach)\b",
        ),
        heading(
            SectionKind::Experiments,
            r"\b(?:\d+\.?\s+)?(?:Experiments|Experimental\s+Results)\b",
        ),
        heading(SectionKind::Results, r"\b(?:\d+\.?\s+)?Results\b"),
        heading(SectionKind::Discussion, r"\b(?:\d+\.?\s+)?Discussion\b"),
        heading(SectionKind::Conclusion, r"\b(?:\d+\.?\s+)?Conclusion\b"),
        heading(SectionKind::References, r"\b(?:References|Bibliography)\b"),
    ]
});

/// A labeled span of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    pub kind: SectionKind,

    /// Verbatim heading text, or one of the synthetic labels
    pub label: &'a str,

    /// Section body with the heading removed and whitespace trimmed
    pub text: &'a str,

    /// Byte offset of `text` in the document
    pub offset: usize,

    /// Byte offset of the heading in the document, if there is one
    pub heading_offset: Option<usize>,
}

/// A heading occurrence in the source text
#[derive(Debug, Clone, Copy)]
struct HeadingMatch {
    kind: SectionKind,
    start: usize,
    end: usize,
}

/// Splits paper text into labeled sections.
#[derive(Debug, Clone)]
pub struct SectionDetector {
    include_front_matter: bool,
}

impl Default for SectionDetector {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SectionDetector {
    /// Create a detector.
    ///
    /// With `include_front_matter`, non-blank text before the first
    /// heading (title, authors) becomes a `"Front Matter"` section
    /// instead of being dropped.
    pub fn new(include_front_matter: bool) -> Self {
        Self {
            include_front_matter,
        }
    }

    /// Detect the sections of `text`, in document order.
    ///
    /// Blank input yields no sections. Input without any usable heading
    /// yields a single `"Full Text"` section holding the document with
    /// surrounding whitespace trimmed; its `offset` locates the trimmed
    /// text.
    pub fn detect<'a>(&self, text: &'a str) -> Vec<Section<'a>> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let headings = find_headings(text);
        let mut sections = Vec::with_capacity(headings.len() + 1);

        for (idx, current) in headings.iter().enumerate() {
            let end = headings
                .get(idx + 1)
                .map(|next| next.start)
                .unwrap_or(text.len());

            if let Some(body) = trimmed_span(text, current.end, end) {
                sections.push(Section {
                    kind: current.kind,
                    label: &text[current.start..current.end],
                    text: &text[body.0..body.1],
                    offset: body.0,
                    heading_offset: Some(current.start),
                });
            }
        }

        if sections.is_empty() {
            let (start, end) = trimmed_span(text, 0, text.len()).unwrap_or((0, text.len()));
            return vec![Section {
                kind: SectionKind::FullText,
                label: FULL_TEXT_LABEL,
                text: &text[start..end],
                offset: start,
                heading_offset: None,
            }];
        }

        if self.include_front_matter {
            let first = headings[0].start;
            if let Some((start, end)) = trimmed_span(text, 0, first) {
                sections.insert(
                    0,
                    Section {
                        kind: SectionKind::FrontMatter,
                        label: FRONT_MATTER_LABEL,
                        text: &text[start..end],
                        offset: start,
                        heading_offset: None,
                    },
                );
            }
        }

        tracing::trace!("Detected {} sections", sections.len());
        sections
    }
}

/// Find all heading matches, ordered by start offset.
///
/// A match that begins inside an earlier accepted match (for example
/// `Results` inside `Experimental Results`) is discarded so that
/// sections never overlap.
fn find_headings(text: &str) -> Vec<HeadingMatch> {
    let mut matches: Vec<HeadingMatch> = HEADING_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern.regex.find_iter(text).map(|m| HeadingMatch {
                kind: pattern.kind,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect();

    // Stable: ties keep declaration order
    matches.sort_by_key(|m| m.start);

    let mut accepted: Vec<HeadingMatch> = Vec::with_capacity(matches.len());
    for m in matches {
        if accepted.last().is_some_and(|prev| m.start < prev.end) {
            continue;
        }
        accepted.push(m);
    }
    accepted
}

/// Byte range of `text[start..end]` with surrounding whitespace removed,
/// or `None` when nothing but whitespace remains.
fn trimmed_span(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lead = raw.len() - raw.trim_start().len();
    Some((start + lead, start + lead + trimmed.len()))
}
