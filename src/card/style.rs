// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Styled text values and the per-service style table.  Styling travels
//! through the render pipeline as structured spans and is only serialised to
//! SGR form when a line is rendered, so measuring a span never requires
//! parsing escapes back out of a string.

use crate::card::colours::ColourPalette;
use unicode_width::UnicodeWidthStr;

/// Display role of a span.  Each role maps onto one palette sequence;
/// `Plain` always renders without styling, even with colours enabled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Plain,
    Label,
    Text,
    Muted,
    Green,
    Blue,
    Red,
    Cyan,
}

impl Tone {
    pub fn sgr(self, colours: ColourPalette) -> &'static str {
        match self {
            Tone::Plain => "",
            Tone::Label => colours.label,
            Tone::Text => colours.text,
            Tone::Muted => colours.muted,
            Tone::Green => colours.green,
            Tone::Blue => colours.blue,
            Tone::Red => colours.red,
            Tone::Cyan => colours.cyan,
        }
    }
}

/// One run of text with a single tone.
#[derive(Clone, Debug)]
pub struct Span {
    text: String,
    tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn visual_width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

/// An ordered run of spans making up one card line (no embedded newline).
#[derive(Clone, Debug, Default)]
pub struct StyledLine {
    spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn visual_width(&self) -> usize {
        self.spans.iter().map(Span::visual_width).sum()
    }

    /// Serialise to a single string, resetting after every toned span so the
    /// tones of neighbouring spans never bleed into each other.
    pub fn render(&self, colours: ColourPalette) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let sgr = span.tone.sgr(colours);
            if sgr.is_empty() {
                out.push_str(&span.text);
            } else {
                out.push_str(sgr);
                out.push_str(&span.text);
                out.push_str(colours.reset);
            }
        }
        out
    }
}

/// How a known service label decorates its value: a muted prefix (possibly
/// empty) in front of the value in the service's tone.
#[derive(Clone, Copy, Debug)]
pub struct ServiceStyle {
    pub prefix: &'static str,
    pub tone: Tone,
}

/// The closed service table, keyed by lowercased label.  Labels outside the
/// table get no decoration.
pub fn service_style(label: &str) -> Option<ServiceStyle> {
    let (prefix, tone) = match label.to_ascii_lowercase().as_str() {
        "github" => ("https://github.com/", Tone::Green),
        "keybase" => ("https://keybase.io/", Tone::Blue),
        "linkedin" => ("https://linkedin.com/in/", Tone::Blue),
        "npm" => ("https://www.npmjs.com/", Tone::Red),
        "twitter" => ("https://twitter.com/", Tone::Cyan),
        "web" => ("", Tone::Cyan),
        _ => return None,
    };
    Some(ServiceStyle { prefix, tone })
}

/// Resolve a value into spans.  Total: unknown labels fall back to a single
/// plain white span, known labels gain their prefix and tone.
pub fn resolve_value(label: &str, value: &str) -> Vec<Span> {
    match service_style(label) {
        Some(style) => {
            let mut spans = Vec::with_capacity(2);
            if !style.prefix.is_empty() {
                spans.push(Span::new(style.prefix, Tone::Muted));
            }
            spans.push(Span::new(value, style.tone));
            spans
        }
        None => vec![Span::new(value, Tone::Text)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::colours::{COLOURED, PLAIN};

    #[test]
    fn service_lookup_is_case_insensitive() {
        let lower = service_style("github").expect("known service");
        let mixed = service_style("GitHub").expect("known service");
        assert_eq!(lower.prefix, "https://github.com/");
        assert_eq!(mixed.prefix, lower.prefix);
        assert_eq!(mixed.tone, Tone::Green);
    }

    #[test]
    fn resolution_is_total() {
        // Any label resolves to at least one span, never an error.
        for label in ["", "Title", "GITHUB", "unheard-of", "övrig"] {
            assert!(!resolve_value(label, "value").is_empty());
        }
    }

    #[test]
    fn unknown_labels_pass_the_value_through() {
        let spans = resolve_value("Title", "Engineer");
        assert_eq!(spans.len(), 1);
        let mut line = StyledLine::new();
        line.push(spans[0].clone());
        assert_eq!(line.render(PLAIN), "Engineer");
    }

    #[test]
    fn known_labels_gain_prefix_and_tone() {
        let mut line = StyledLine::new();
        for span in resolve_value("GitHub", "octocat") {
            line.push(span);
        }
        assert_eq!(line.render(PLAIN), "https://github.com/octocat");
        let coloured = line.render(COLOURED);
        assert!(coloured.contains(COLOURED.muted));
        assert!(coloured.contains(COLOURED.green));
    }

    #[test]
    fn web_service_has_no_prefix() {
        let mut line = StyledLine::new();
        for span in resolve_value("web", "example.org") {
            line.push(span);
        }
        assert_eq!(line.render(PLAIN), "example.org");
    }

    #[test]
    fn line_width_sums_span_widths() {
        let mut line = StyledLine::new();
        line.push(Span::new("GitHub:", Tone::Label));
        line.push(Span::plain(" "));
        line.push(Span::new("漢字", Tone::Text));
        assert_eq!(line.visual_width(), 7 + 1 + 4);
    }

    #[test]
    fn rendered_line_width_matches_span_width() {
        let mut line = StyledLine::new();
        line.push(Span::new("x", Tone::Red));
        line.push(Span::plain(" "));
        line.push(Span::new("y", Tone::Label));
        let rendered = line.render(COLOURED);
        assert_eq!(crate::card::width::visible_width(&rendered), line.visual_width());
    }
}
