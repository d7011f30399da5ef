// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::card::width::{visible_width, widest_line_width};

/// Horizontally centre `title` against the widest visible line of `block`,
/// by prepending literal spaces.  A title as wide as (or wider than) the
/// block gets no padding; the clamp is deliberate policy, not an error.
pub fn centre_title(title: &str, block: &str) -> String {
    let pad = widest_line_width(block).saturating_sub(visible_width(title)) / 2;
    format!("{}{title}", " ".repeat(pad))
}
