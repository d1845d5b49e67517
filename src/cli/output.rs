//! Terminal rendering shared by the paperchunk commands
//!
//! Commands print either colored text or JSON. `colored` already honors
//! NO_COLOR.

use crate::cli::OutputFormat;

/// Palette used by every command
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Headers and field names
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Section labels and strategy names
    pub fn section(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Paths on disk
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Counts, sizes, offsets
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Skipped papers and other soft failures
    pub fn warning(s: &str) -> ColoredString {
        s.magenta()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Render a run duration given in milliseconds, e.g. `850ms`, `2.40s`,
/// `3m 12.0s`.
pub fn format_duration(millis: u64) -> String {
    if millis < 1000 {
        return format!("{millis}ms");
    }
    let secs = millis as f64 / 1000.0;
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let whole_mins = millis / 60_000;
        let rest = (millis % 60_000) as f64 / 1000.0;
        format!("{whole_mins}m {rest:.1}s")
    }
}

/// Shorten `text` to at most `max_chars` characters for previews.
///
/// Newlines are flattened to spaces; a cut preview ends with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

/// Bold title line, human output only
pub fn print_header(title: &str, format: OutputFormat) {
    if format == OutputFormat::Human {
        println!("{}", colors::label(title));
    }
}
