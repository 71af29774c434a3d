//! Inline markup for comment text.
//!
//! Only four delimiter pairs are recognized, each rewritten into an inline
//! HTML element. The input must already be HTML-escaped: nothing else in
//! it is interpreted.

use regex::{Captures, Regex};

use crate::Theme;

#[derive(Clone, Copy, Debug)]
enum Style {
    Bold,
    Italic,
    Strike,
    Code,
}

// Order matters, each pass runs over the output of the previous one
const PASSES: [Style; 4] = [Style::Bold, Style::Italic, Style::Strike, Style::Code];

// Content is never empty, starts and ends with non-whitespace, and stops at
// the first closing delimiter that satisfies this
lazy_static::lazy_static! {
    static ref BOLD: Regex = Regex::new(r"(?s)\*(\S(?:.*?\S)??)\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"(?s)_(\S(?:.*?\S)??)_").unwrap();
    static ref STRIKE: Regex = Regex::new(r"(?s)~(\S(?:.*?\S)??)~").unwrap();
    static ref CODE: Regex = Regex::new(r"(?s)```(\S(?:.*?\S)??)```").unwrap();
}

impl Style {
    fn pattern(self) -> &'static Regex {
        match self {
            Style::Bold => &*BOLD,
            Style::Italic => &*ITALIC,
            Style::Strike => &*STRIKE,
            Style::Code => &*CODE,
        }
    }

    // Generated tags must never contain any delimiter
    fn tags(self, theme: Theme) -> (String, &'static str) {
        let text = theme.text();
        match self {
            Style::Bold => (format!(r#"<strong class="text-{text}">"#), "</strong>"),
            Style::Italic => (format!(r#"<em class="text-{text}">"#), "</em>"),
            Style::Strike => (format!(r#"<del class="text-{text}">"#), "</del>"),
            Style::Code => (
                format!(r#"<code class="font-monospace text-{text}">"#),
                "</code>",
            ),
        }
    }
}

pub fn escape_html(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#039;"),
            c => res.push(c),
        }
    }
    res
}

/// Applies bold, italic, strikethrough and code, in that order, to
/// already-escaped text
pub fn transform(escaped: &str, theme: Theme) -> String {
    PASSES.iter().fold(escaped.to_string(), |text, style| {
        let (open, close) = style.tags(theme);
        style
            .pattern()
            .replace_all(&text, |caps: &Captures| format!("{open}{}{close}", &caps[1]))
            .into_owned()
    })
}
