// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Border composition.  Wraps a finished card body in a box-drawing border
//! with interior padding and vertical exterior margin.  All sizing goes
//! through the visual width helpers so SGR sequences inside the body never
//! skew the walls.

use crate::card::colours::ColourPalette;
use crate::card::width::{pad_ansi, widest_line_width};

/// Border glyph families, mirroring the usual terminal box styles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BorderStyle {
    Round,
    Single,
    Double,
    Thick,
}

struct BorderGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BorderStyle {
    /// Case-insensitive parse of a user-supplied style name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "round" => Some(Self::Round),
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "thick" | "bold" => Some(Self::Thick),
            _ => None,
        }
    }

    fn glyphs(self) -> BorderGlyphs {
        match self {
            Self::Round => BorderGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            Self::Single => BorderGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            Self::Double => BorderGlyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            Self::Thick => BorderGlyphs {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
        }
    }
}

/// Box geometry: padding is whitespace inside the border, margin is blank
/// lines outside it (vertical only).
pub struct BoxOptions {
    pub padding: usize,
    pub margin: usize,
    pub border: BorderStyle,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            margin: 1,
            border: BorderStyle::Round,
        }
    }
}

/// Wrap `body` in a border sized to its widest visible line plus padding,
/// painting the border glyphs in the outer border tone.
pub fn compose(body: &str, opts: &BoxOptions, colours: ColourPalette) -> String {
    let glyphs = opts.border.glyphs();
    let inner = widest_line_width(body);
    let content_width = inner + 2 * opts.padding;

    let paint = |text: String| {
        if colours.border.is_empty() {
            text
        } else {
            format!("{}{}{}", colours.border, text, colours.reset)
        }
    };

    let wall = paint(glyphs.vertical.to_string());
    let rule = String::from(glyphs.horizontal).repeat(content_width);
    let blank_row = format!("{wall}{}{wall}", " ".repeat(content_width));
    let side_pad = " ".repeat(opts.padding);

    let mut lines = Vec::new();
    for _ in 0..opts.margin {
        lines.push(String::new());
    }
    lines.push(paint(format!("{}{rule}{}", glyphs.top_left, glyphs.top_right)));
    for _ in 0..opts.padding {
        lines.push(blank_row.clone());
    }
    for line in body.lines() {
        lines.push(format!(
            "{wall}{side_pad}{}{side_pad}{wall}",
            pad_ansi(line, inner)
        ));
    }
    for _ in 0..opts.padding {
        lines.push(blank_row.clone());
    }
    lines.push(paint(format!(
        "{}{rule}{}",
        glyphs.bottom_left, glyphs.bottom_right
    )));
    for _ in 0..opts.margin {
        lines.push(String::new());
    }
    lines.join("\n")
}
