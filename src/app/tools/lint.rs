//! Prose-style linting for the write-good panel.
//!
//! The linter scans the HTML-escaped buffer text and reports flagged spans
//! as `{index, offset, reason}` where `index` is the byte position and
//! `offset` the span length. [`annotate`] wraps each span in highlight
//! markup, working from the highest index down so that insertions never
//! invalidate the offsets of spans still pending.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::escape_html;

pub const PANEL_ID: &str = "writeGoodOutput";

/// One flagged region of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSpan {
    pub index: usize,
    pub offset: usize,
    pub reason: String,
}

fn weasel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:many|various|very|fairly|several|extremely|exceedingly|quite|remarkably|few|surprisingly|mostly|largely|huge|tiny|excellent|interestingly|significantly|substantially|clearly|vast|relatively|completely)\b",
        )
        .expect("weasel pattern")
    })
}

fn passive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:am|are|were|being|is|been|was|be)\s+(?:\w+ed|built|done|found|given|gone|held|kept|known|laid|left|lost|made|paid|put|said|seen|sent|set|shown|taken|told|thought|written)\b",
        )
        .expect("passive pattern")
    })
}

fn wordy_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:as far as|at the end of the day|in order to|in the process of|needless to say|a number of|the fact that)\b",
        )
        .expect("wordy pattern")
    })
}

fn so_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[.!?]\s+)(So)\b").expect("sentence-start pattern"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern"))
}

/// Scan `text` and return flagged spans, sorted by position with overlapping
/// suggestions merged (first match wins).
pub fn lint(text: &str) -> Vec<LintSpan> {
    let mut spans = Vec::new();

    for m in weasel_re().find_iter(text) {
        spans.push(LintSpan {
            index: m.start(),
            offset: m.len(),
            reason: format!("\"{}\" is a weasel word", m.as_str()),
        });
    }

    for m in passive_re().find_iter(text) {
        spans.push(LintSpan {
            index: m.start(),
            offset: m.len(),
            reason: format!("\"{}\" may be passive voice", m.as_str()),
        });
    }

    for m in wordy_re().find_iter(text) {
        spans.push(LintSpan {
            index: m.start(),
            offset: m.len(),
            reason: format!("\"{}\" is wordy or unneeded", m.as_str()),
        });
    }

    for caps in so_start_re().captures_iter(text) {
        if let Some(word) = caps.get(1) {
            spans.push(LintSpan {
                index: word.start(),
                offset: word.len(),
                reason: "\"So\" adds no meaning at the start of a sentence".to_string(),
            });
        }
    }

    spans.extend(doubled_words(text));

    spans.sort_by(|a, b| a.index.cmp(&b.index).then(b.offset.cmp(&a.offset)));

    // Merge overlaps so annotation never nests spans
    let mut merged: Vec<LintSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last() {
            Some(last) if span.index < last.index + last.offset => continue,
            _ => merged.push(span),
        }
    }
    merged
}

/// Lexical illusions: the same word twice in a row, separated by whitespace
/// only. The second occurrence is flagged.
fn doubled_words(text: &str) -> Vec<LintSpan> {
    let mut spans = Vec::new();
    let mut prev: Option<regex_lite::Match<'_>> = None;

    for word in word_re().find_iter(text) {
        if let Some(p) = prev {
            let gap = &text[p.end()..word.start()];
            if !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && word.as_str().eq_ignore_ascii_case(p.as_str())
            {
                spans.push(LintSpan {
                    index: word.start(),
                    offset: word.len(),
                    reason: format!("\"{}\" is repeated", word.as_str()),
                });
            }
        }
        prev = Some(word);
    }
    spans
}

/// Escape the text and wrap every flagged span in highlight markup, the
/// reason carried as a tooltip. Spans are applied in reverse document order
/// (highest index first); this is a correctness requirement, since inserting
/// markup at an earlier offset would shift every span recorded after it.
pub fn annotate(text: &str) -> String {
    let escaped = escape_html(text);
    let spans = lint(&escaped);

    let mut html = escaped;
    for span in spans.iter().rev() {
        let end = span.index + span.offset;
        let wrapped = format!(
            "<span class='highlight' title='{}'>{}</span>",
            span.reason,
            &html[span.index..end]
        );
        html.replace_range(span.index..end, &wrapped);
    }
    html
}
