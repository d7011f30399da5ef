// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Visual width measurement for styled terminal text.  Widths are display
//! columns, not bytes or chars: embedded escape sequences count zero, CJK and
//! emoji count two, combining marks count zero.  Every helper here is pure
//! and total; malformed escapes are skipped rather than counted.

use unicode_width::UnicodeWidthChar;

/// Number of terminal columns `text` occupies once printed.
///
/// ESC-introduced sequences are skipped: a CSI sequence (`ESC [`) runs to its
/// final byte in `0x40..=0x7e`, anything else is treated as a two-character
/// escape.  A truncated sequence at end of input simply ends the scan.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for follower in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&follower) {
                        break;
                    }
                }
            } else {
                chars.next();
            }
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Widest visible line of a multi-line block.  Blank lines measure zero like
/// any other line.
pub fn widest_line_width(block: &str) -> usize {
    block.lines().map(visible_width).max().unwrap_or(0)
}

/// Right-pad `text` with spaces until its visible width reaches `width`.
/// Text already at or beyond the target is returned unchanged.
pub fn pad_ansi(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    if visible >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - visible))
}
