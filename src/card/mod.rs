// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

pub mod boxes;
pub mod colours;
pub mod line;
pub mod section;
pub mod style;
pub mod title;
pub mod width;

pub use boxes::{BorderStyle, BoxOptions, compose};
pub use colours::{disable_colours, palette};
pub use section::build_sections;
pub use title::centre_title;

use colours::ColourPalette;
use style::{Span, StyledLine, Tone};

/// Render the complete card artifact: centred title, blank line, the three
/// sections, all wrapped in the bordered box.  Pure; the caller supplies the
/// palette and writes the result wherever it wants.
pub fn render_card(
    meta: &[(String, String)],
    links: &[(String, String)],
    package_name: &str,
    package_author: &str,
    opts: &BoxOptions,
    colours: ColourPalette,
) -> String {
    let sections = build_sections(meta, links, package_name, colours);
    let content = sections.content();
    let title = title_line(package_author, package_name).render(colours);
    let centred = centre_title(&title, &content);
    let body = format!("{centred}\n\n{content}");
    compose(&body, opts, colours)
}

/// The `author / name` banner shown above the sections.
fn title_line(author: &str, name: &str) -> StyledLine {
    let mut line = StyledLine::new();
    line.push(Span::new(author, Tone::Text));
    line.push(Span::plain(" / "));
    line.push(Span::new(name, Tone::Text));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::colours::PLAIN;
    use super::width::visible_width;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_a_complete_card() {
        let meta = pairs(&[("Title", "Engineer")]);
        let links = pairs(&[("GitHub", "octocat")]);
        let opts = BoxOptions::default();
        let card = render_card(&meta, &links, "cardgen", "Ada Lovelace", &opts, PLAIN);

        assert!(card.contains(" Title: Engineer"));
        assert!(card.contains("GitHub: https://github.com/octocat"));
        assert!(card.contains("  Card: npx cardgen"));
        assert!(card.contains('╭') && card.contains('╯'));

        // Margin rows aside, every line of the box is equally wide.
        let widths: Vec<usize> = card
            .lines()
            .filter(|l| !l.is_empty())
            .map(visible_width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn title_is_centred_against_the_widest_line() {
        let meta = pairs(&[("Title", "Engineer")]);
        let links = pairs(&[("GitHub", "octocat")]);
        let opts = BoxOptions {
            margin: 0,
            ..BoxOptions::default()
        };
        let card = render_card(&meta, &links, "cardgen", "Ada Lovelace", &opts, PLAIN);

        // Widest body line is the GitHub one (34 columns); the title
        // "Ada Lovelace / cardgen" is 22, so it gains (34 - 22) / 2 = 6 spaces.
        let title_row = card.lines().nth(2).expect("title row");
        assert_eq!(title_row, format!("│ {}Ada Lovelace / cardgen{} │", " ".repeat(6), " ".repeat(6)));
    }

    #[test]
    fn empty_inputs_still_render_a_card_line() {
        let card = render_card(&[], &[], "cardgen", "", &BoxOptions::default(), PLAIN);
        assert!(card.contains("Card: npx cardgen"));
    }
}
