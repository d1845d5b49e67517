//! Bounded, overlapping text splitting.
//!
//! Splits text into contiguous spans that fit a size budget, preferring
//! structural boundaries in this order: blank line, line, sentence end
//! (`". "`), word, and finally a single character. Every separator is
//! kept at the end of the piece it terminates, so adjacent pieces are
//! contiguous in the source and every chunk is a real slice of it.
//!
//! Budgets are measured either in characters or in approximate tokens
//! (whitespace-delimited words). Character measurement goes through
//! `chars()`, never byte lengths, so multi-byte text never splits a
//! code point.
//!
//! # Example
//!
//! ```
//! use paperchunk::core::chunker::BoundedSplitter;
//!
//! let splitter = BoundedSplitter::new(20, 5);
//! let text = "First sentence here. Second sentence here. Third one.";
//! for chunk in splitter.split_text(text) {
//!     assert!(chunk.chars().count() <= 20);
//!     assert_eq!(chunk, chunk.trim());
//! }
//! ```

use std::collections::VecDeque;

/// Separators in order of preference. The character fallback is
/// implicit and always comes last.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Unit in which a splitter budget is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    /// Unicode scalar values
    Chars,
    /// Whitespace-delimited words
    Tokens,
}

impl SizeUnit {
    /// Measure `text` in this unit
    pub fn measure(&self, text: &str) -> usize {
        match self {
            SizeUnit::Chars => text.chars().count(),
            SizeUnit::Tokens => estimate_tokens(text),
        }
    }
}

/// Approximate token count: the number of whitespace-delimited words.
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte range into a source text.
///
/// Both ends always fall on character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the spanned text
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Shrink the span to exclude leading and trailing whitespace
    fn trimmed(&self, text: &str) -> Span {
        let raw = self.slice(text);
        let start = self.start + (raw.len() - raw.trim_start().len());
        let end = self.end - (raw.len() - raw.trim_end().len());
        if start >= end {
            Span::new(start, start)
        } else {
            Span::new(start, end)
        }
    }
}

/// A split candidate together with its measured size
#[derive(Debug, Clone, Copy)]
struct Piece {
    span: Span,
    size: usize,
    blank: bool,
}

/// Splits text into bounded, overlapping chunks.
#[derive(Debug, Clone)]
pub struct BoundedSplitter {
    /// Maximum chunk size, in `unit`
    chunk_size: usize,

    /// Maximum shared context between consecutive chunks, in `unit`
    overlap: usize,

    unit: SizeUnit,
}

impl BoundedSplitter {
    /// Create a character-bounded splitter.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0 or if `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self::with_unit(chunk_size, overlap, SizeUnit::Chars)
    }

    /// Create an approximate-token-bounded splitter.
    ///
    /// # Panics
    ///
    /// Panics if `max_tokens` is 0 or if `overlap >= max_tokens`.
    pub fn tokens(max_tokens: usize, overlap: usize) -> Self {
        Self::with_unit(max_tokens, overlap, SizeUnit::Tokens)
    }

    /// Create a splitter measuring its budget in `unit`.
    pub fn with_unit(chunk_size: usize, overlap: usize, unit: SizeUnit) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(overlap < chunk_size, "overlap must be < chunk_size");

        Self {
            chunk_size,
            overlap,
            unit,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn unit(&self) -> SizeUnit {
        self.unit
    }

    /// Split `text` and return the chunk spans in reading order.
    ///
    /// Spans are trimmed and never empty. Consecutive spans may
    /// overlap by at most `overlap` units; the overlapping bytes are
    /// always a suffix of the earlier span.
    pub fn split(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        if text.trim().is_empty() {
            return spans;
        }

        self.split_recursive(text, Span::new(0, text.len()), 0, &mut spans);
        spans
    }

    /// Split `text` and return the chunk slices in reading order.
    pub fn split_text<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split(text)
            .into_iter()
            .map(|span| span.slice(text))
            .collect()
    }

    fn split_recursive(&self, text: &str, span: Span, level: usize, out: &mut Vec<Span>) {
        let segment = span.slice(text);

        // First separator at or past `level` that occurs in the segment.
        let found = SEPARATORS
            .iter()
            .enumerate()
            .skip(level)
            .find(|(_, sep)| segment.contains(**sep));

        let (pieces, next_level) = match found {
            Some((idx, sep)) => (self.separator_pieces(text, span, sep), Some(idx + 1)),
            None => (self.char_pieces(text, span), None),
        };

        let mut fitting: Vec<Piece> = Vec::new();
        for piece in pieces {
            if piece.size <= self.chunk_size {
                fitting.push(piece);
                continue;
            }

            if !fitting.is_empty() {
                self.merge(text, &fitting, out);
                fitting.clear();
            }

            match next_level {
                Some(level) => self.split_recursive(text, piece.span, level, out),
                None => {
                    // A single character is never larger than a budget
                    // of at least one unit; keep it rather than drop it.
                    let trimmed = piece.span.trimmed(text);
                    if !trimmed.is_empty() {
                        out.push(trimmed);
                    }
                }
            }
        }

        if !fitting.is_empty() {
            self.merge(text, &fitting, out);
        }
    }

    /// Greedily pack pieces into chunks, carrying a tail of each chunk
    /// into the next as overlap.
    fn merge(&self, text: &str, pieces: &[Piece], out: &mut Vec<Span>) {
        let mut window: VecDeque<Piece> = VecDeque::new();
        let mut total = 0;
        // Whether the window holds content not yet emitted
        let mut fresh = false;

        for piece in pieces {
            if total + piece.size > self.chunk_size && !window.is_empty() {
                if fresh {
                    self.emit(text, &window, out);
                    fresh = false;
                }

                while total > self.overlap || (total + piece.size > self.chunk_size && total > 0) {
                    match window.pop_front() {
                        Some(front) => total -= front.size,
                        None => break,
                    }
                }
            }

            window.push_back(*piece);
            total += piece.size;
            fresh |= !piece.blank;
        }

        if fresh {
            self.emit(text, &window, out);
        }
    }

    fn emit(&self, text: &str, window: &VecDeque<Piece>, out: &mut Vec<Span>) {
        let (Some(first), Some(last)) = (window.front(), window.back()) else {
            return;
        };

        let span = Span::new(first.span.start, last.span.end).trimmed(text);
        if span.is_empty() {
            return;
        }

        // Whitespace-only windows can trim down to the previous chunk's tail
        if out
            .last()
            .is_some_and(|prev| prev.start <= span.start && span.end <= prev.end)
        {
            return;
        }

        out.push(span);
    }

    fn separator_pieces(&self, text: &str, span: Span, separator: &str) -> Vec<Piece> {
        let mut pieces = Vec::new();
        let mut offset = span.start;

        for part in span.slice(text).split_inclusive(separator) {
            let piece_span = Span::new(offset, offset + part.len());
            offset = piece_span.end;
            pieces.push(self.piece(part, piece_span));
        }

        pieces
    }

    fn char_pieces(&self, text: &str, span: Span) -> Vec<Piece> {
        span.slice(text)
            .char_indices()
            .map(|(idx, c)| {
                let start = span.start + idx;
                let piece_span = Span::new(start, start + c.len_utf8());
                self.piece(piece_span.slice(text), piece_span)
            })
            .collect()
    }

    fn piece(&self, part: &str, span: Span) -> Piece {
        Piece {
            span,
            size: self.unit.measure(part),
            blank: part.trim().is_empty(),
        }
    }
}
