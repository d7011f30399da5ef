// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colour palette used across card output. The fields hold the SGR sequences for each role.
#[derive(Clone, Copy)]
pub struct ColourPalette {
    pub reset: &'static str,
    /// Bold white, used for the label column.
    pub label: &'static str,
    /// Plain white, used for values without a service colour and the title line.
    pub text: &'static str,
    /// Grey, used for link prefixes such as `https://github.com/`.
    pub muted: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub red: &'static str,
    pub cyan: &'static str,
    /// Outer box colour.
    pub border: &'static str,
}

pub(crate) const COLOURED: ColourPalette = ColourPalette {
    reset: "\u{001b}[0m",
    label: "\u{001b}[1;97m",
    text: "\u{001b}[97m",
    muted: "\u{001b}[90m",
    green: "\u{001b}[32m",
    blue: "\u{001b}[34m",
    red: "\u{001b}[31m",
    cyan: "\u{001b}[36m",
    border: "\u{001b}[32m",
};

pub(crate) const PLAIN: ColourPalette = ColourPalette {
    reset: "",
    label: "",
    text: "",
    muted: "",
    green: "",
    blue: "",
    red: "",
    cyan: "",
    border: "",
};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Return the current colour palette, respecting the global enable/disable flag.
pub fn palette() -> ColourPalette {
    if ENABLED.load(Ordering::Relaxed) {
        COLOURED
    } else {
        PLAIN
    }
}

/// Disable ANSI colour output globally (used when the user asks for a plain card).
pub fn disable_colours() {
    ENABLED.store(false, Ordering::Relaxed);
}
