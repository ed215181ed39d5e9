use std::fmt;

use crate::ttml::{Document, Span};

// @module: Transcript extraction and timestamp formatting

/// One formatted, trimmed unit of output text, optionally carrying the
/// begin time of the paragraph it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    // @field: Begin time in seconds, carried through from the paragraph
    pub begin: Option<f64>,

    // @field: Trimmed transcript text
    pub text: String,
}

impl TranscriptLine {
    /// Render the line, prefixing `[HH:MM:SS]` when timestamps were
    /// requested and the source paragraph carried a begin time
    pub fn render(&self, include_timestamps: bool) -> String {
        match self.begin {
            Some(begin) if include_timestamps => {
                format!("[{}] {}", format_timestamp(begin), self.text)
            }
            _ => self.text.clone(),
        }
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Extract transcript lines from a parsed document, in document order.
///
/// Paragraphs with no span children are skipped. For each retained
/// paragraph the span tree is flattened depth-first: container spans are
/// recursed into, leaf fragments are appended followed by a single space.
/// Paragraphs whose concatenation trims to nothing produce no line.
pub fn extract_lines(document: &Document) -> Vec<TranscriptLine> {
    let mut lines = Vec::new();

    for paragraph in &document.paragraphs {
        if paragraph.spans.is_empty() {
            continue;
        }

        let mut text = String::new();
        collect_span_text(&paragraph.spans, &mut text);

        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        lines.push(TranscriptLine {
            begin: paragraph.begin,
            text: trimmed.to_string(),
        });
    }

    lines
}

// Pre-order walk over the span tree. A container's own text is never
// read; only leaf fragments contribute, each followed by one space.
fn collect_span_text(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Container(children) => collect_span_text(children, out),
            Span::Leaf(text) => {
                if !text.is_empty() {
                    out.push_str(text);
                    out.push(' ');
                }
            }
        }
    }
}

/// Extract the complete transcript artifact: rendered lines joined with
/// a blank line, no trailing separator. Pure with respect to the
/// document; calling it twice yields byte-identical output.
pub fn extract_transcript(document: &Document, include_timestamps: bool) -> String {
    extract_lines(document)
        .iter()
        .map(|line| line.render(include_timestamps))
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Format a begin time in seconds as `HH:MM:SS`.
///
/// Fractional seconds are truncated, never rounded up. Each field is
/// zero-padded to two digits; the hour field widens past two digits
/// rather than truncate for times of 100 hours or more.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
