// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::card::colours::ColourPalette;
use crate::card::line::{format_line, format_line_spans};
use crate::card::style::{Span, StyledLine, Tone};
use crate::card::width::visible_width;

// The label-width pool includes the literal `npx` alongside the real labels,
// even though the rendered line's label is `Card`.  Existing cards size their
// column this way, so keep it.
const NPX_LABEL: &str = "npx";
const CARD_LABEL: &str = "Card";

/// The rendered sections together with the label-column width shared by
/// every line in them.
pub struct BuiltSections {
    pub sections: Vec<String>,
    pub label_width: usize,
}

impl BuiltSections {
    /// The card body: sections joined by a blank line.
    pub fn content(&self) -> String {
        self.sections.join("\n\n")
    }
}

/// Shared label-column width: the widest label across both pair sets and the
/// literal `npx` pseudo-label.
pub fn label_column_width(meta: &[(String, String)], links: &[(String, String)]) -> usize {
    meta.iter()
        .chain(links)
        .map(|(label, _)| visible_width(label))
        .chain(std::iter::once(visible_width(NPX_LABEL)))
        .max()
        .unwrap_or(0)
}

/// Build the card body: metadata lines, link lines, then the synthetic Card
/// line, in that order, blank-line separated.  Empty pair sets stay in the
/// join as empty blocks rather than being dropped.
pub fn build_sections(
    meta: &[(String, String)],
    links: &[(String, String)],
    package_name: &str,
    colours: ColourPalette,
) -> BuiltSections {
    let label_width = label_column_width(meta, links);
    let sections = vec![
        render_pairs(meta, label_width, colours),
        render_pairs(links, label_width, colours),
        card_line(package_name, label_width).render(colours),
    ];
    BuiltSections {
        sections,
        label_width,
    }
}

fn render_pairs(
    pairs: &[(String, String)],
    label_width: usize,
    colours: ColourPalette,
) -> String {
    pairs
        .iter()
        .map(|(label, value)| format_line(label, value, label_width).render(colours))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `Card: npx <name>` line advertising how to display the card.
fn card_line(package_name: &str, label_width: usize) -> StyledLine {
    let value = vec![
        Span::new(NPX_LABEL, Tone::Red),
        Span::plain(" "),
        Span::new(package_name, Tone::Text),
    ];
    format_line_spans(CARD_LABEL, value, label_width)
}
