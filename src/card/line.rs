// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::card::style::{Span, StyledLine, Tone, resolve_value};
use crate::card::width::visible_width;

/// Format one `label: value` card line.  The label is right-aligned to
/// `label_width` visible columns and given the bold label tone together with
/// its colon; the value is resolved through the service table.
pub fn format_line(label: &str, value: &str, label_width: usize) -> StyledLine {
    format_line_spans(label, resolve_value(label, value), label_width)
}

/// As `format_line`, but with the value spans supplied by the caller.  Used
/// for composite values such as the synthetic Card line.
pub fn format_line_spans(label: &str, value_spans: Vec<Span>, label_width: usize) -> StyledLine {
    let pad = label_width.saturating_sub(visible_width(label));
    let mut line = StyledLine::new();
    line.push(Span::new(
        format!("{}{label}:", " ".repeat(pad)),
        Tone::Label,
    ));
    line.push(Span::plain(" "));
    for span in value_spans {
        line.push(span);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::colours::{COLOURED, PLAIN};

    #[test]
    fn label_is_right_aligned_to_the_column_width() {
        let line = format_line("Title", "Engineer", 8);
        assert_eq!(line.render(PLAIN), "   Title: Engineer");
    }

    #[test]
    fn label_at_full_width_gets_no_padding() {
        let line = format_line("Longest", "v", 7);
        assert_eq!(line.render(PLAIN), "Longest: v");
    }

    #[test]
    fn label_and_colon_share_the_bold_tone() {
        let rendered = format_line("GitHub", "octocat", 6).render(COLOURED);
        assert!(rendered.starts_with(COLOURED.label));
        assert!(rendered.contains("GitHub:"));
    }

    #[test]
    fn line_width_is_label_column_plus_value() {
        // label column (6) + colon + space + prefix (19) + value (7)
        let line = format_line("GitHub", "octocat", 6);
        assert_eq!(line.visual_width(), 6 + 1 + 1 + 19 + 7);
    }

    #[test]
    fn composite_values_keep_their_own_tones() {
        let value = vec![Span::new("npx", Tone::Red), Span::plain(" "), Span::new("cardgen", Tone::Text)];
        let line = format_line_spans("Card", value, 6);
        assert_eq!(line.render(PLAIN), "  Card: npx cardgen");
    }
}
