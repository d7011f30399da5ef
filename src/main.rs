// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

/// cardgen command-line entry point and CLI orchestration.
///
/// The binary ties together the card definition loading and the rendering
/// engine.  This file is intentionally light on layout logic; it wires user
/// input into the focused modules under `src/card` and writes the finished
/// artifact to disk so a display command can print it later.  The comments
/// favour UK English and aim to give future maintainers a quick reminder of
/// why each function exists and how it cooperates with the rest of the app.
mod card;
mod config;

use anyhow::{Context, Result, anyhow};
use card::{BorderStyle, BoxOptions};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use config::CardConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Build-time version information.  The CI pipeline bakes in the most recent
/// tag via `CARDGEN_VERSION`; otherwise we fall back to Cargo’s package
/// version which tracks the published crate.
const VERSION: &str = match option_env!("CARDGEN_VERSION") {
    Some(tag) => tag,
    None => env!("CARGO_PKG_VERSION"),
};

/// Determine the current Git branch, defaulting to `main` when the metadata
/// was not injected during the build.
fn branch() -> &'static str {
    option_env!("CARDGEN_BRANCH").unwrap_or("main")
}

/// Determine the short Git commit that went into the binary.  We rely on CI
/// to provide this, but fall back to a recognisable placeholder.
fn sha() -> &'static str {
    option_env!("CARDGEN_COMMIT").unwrap_or("0000000")
}

/// Determine the rustc version baked in at build time.
fn rust_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Human-friendly version banner including branch and commit.
fn version_string() -> String {
    format!(
        "cardgen {VERSION} (branch:{}, commit:{}) [rust:{}]",
        branch(),
        sha(),
        rust_version()
    )
}

/// Cached version string with a 'static lifetime for clap metadata.
fn version_str() -> &'static str {
    static VERSION_STR: OnceLock<String> = OnceLock::new();
    VERSION_STR.get_or_init(version_string).as_str()
}

/// Conventional `main` that defers to `run` so tests can call the logic
/// without having to spin up a separate process.
fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    });
}

/// Parse CLI arguments, load the card definition, render and store the card,
/// or re-display a previously stored one.  Everything user-facing goes
/// through here, so the structure favours clarity over cleverness.
fn run() -> Result<i32> {
    let cmd = build_cli();
    let matches = match cmd.try_get_matches() {
        Ok(m) => m,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                if err.kind() == ErrorKind::DisplayHelp {
                    print_usage();
                }
                return Ok(0);
            }
            _ => err.exit(),
        },
    };

    let opts = CliOptions::from_matches(&matches)?;

    if opts.show_version {
        println!("{}", version_string());
        return Ok(0);
    }

    if let Some(force_colour) = opts.colour {
        if !force_colour {
            card::disable_colours();
        }
    }

    if opts.show {
        return show_card(&opts.output);
    }

    let cfg = CardConfig::load(&opts.config)?;
    let package = cfg.package_info();
    let box_opts = resolve_box_options(&cfg.box_options, &opts)?;

    let rendered = card::render_card(
        &cfg.meta,
        &cfg.links,
        &package.name,
        &package.author,
        &box_opts,
        card::palette(),
    );
    fs::write(&opts.output, &rendered)
        .with_context(|| format!("failed to write {}", opts.output.display()))?;
    Ok(0)
}

/// Print a previously rendered card verbatim.  The artifact carries its own
/// styling, so no palette work happens here.
fn show_card(path: &Path) -> Result<i32> {
    let artifact = fs::read_to_string(path)
        .with_context(|| format!("no rendered card at {} (render one first)", path.display()))?;
    println!("{artifact}");
    Ok(0)
}

/// Construct the `clap` command with all supported arguments.  Options are
/// grouped roughly by feature area (definition IO, display, box geometry).
fn build_cli() -> Command {
    Command::new("cardgen")
        .about("Terminal business card renderer - builds a boxed, coloured card and stores it for display")
        .disable_version_flag(true)
        .version(version_str())
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .default_value("card.json")
                .help("Card definition to render"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .default_value("card.out")
                .help("Where the rendered card is written"),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .action(ArgAction::SetTrue)
                .help("Print the previously rendered card and exit"),
        )
        .arg(
            Arg::new("colour")
                .long("colour")
                .num_args(0..=1)
                .value_name("yes|no")
                .require_equals(false)
                .default_missing_value("true")
                .help("Force coloured output"),
        )
        .arg(
            Arg::new("padding")
                .long("padding")
                .value_name("N")
                .help("Blank cells between the card text and its border"),
        )
        .arg(
            Arg::new("margin")
                .long("margin")
                .value_name("N")
                .help("Blank lines above and below the box"),
        )
        .arg(
            Arg::new("border")
                .long("border")
                .value_name("STYLE")
                .help("Border style: round, single, double or thick"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information and exit"),
        )
}

/// Structured view of the CLI flags so downstream code gets type-safe access
/// to user intent.
struct CliOptions {
    config: PathBuf,
    output: PathBuf,
    show: bool,
    colour: Option<bool>,
    padding: Option<usize>,
    margin: Option<usize>,
    border: Option<BorderStyle>,
    show_version: bool,
}

impl CliOptions {
    /// Translate clap’s `ArgMatches` into our strongly typed `CliOptions`.
    /// The function centralises validation so the rest of the code can assume
    /// sane defaults and bail out early when a user supplies nonsense.
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            config: matches
                .get_one::<String>("config")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("card.json")),
            output: matches
                .get_one::<String>("output")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("card.out")),
            show: matches.get_flag("show"),
            colour: parse_colour(matches.get_one::<String>("colour"))?,
            padding: parse_count(matches.get_one::<String>("padding"), "padding")?,
            margin: parse_count(matches.get_one::<String>("margin"), "margin")?,
            border: parse_border(matches.get_one::<String>("border"))?,
            show_version: matches.get_flag("version"),
        })
    }
}

/// Interpret command-line colour overrides, keeping support for human-friendly
/// words like “yes” and “no”.  This is kept separate so unit tests can focus
/// on the parsing logic.
fn parse_colour(value: Option<&String>) -> Result<Option<bool>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(Some(true)),
            "false" | "no" => Ok(Some(false)),
            other => {
                print_usage();
                Err(anyhow!("invalid value for --colour: {other}"))
            }
        },
    }
}

/// Parse a non-negative cell count for `--padding` / `--margin`.
fn parse_count(value: Option<&String>, flag: &str) -> Result<Option<usize>> {
    match value {
        None => Ok(None),
        Some(v) => v.parse::<usize>().map(Some).map_err(|_| {
            print_usage();
            anyhow!("invalid value for --{flag}: {v}")
        }),
    }
}

/// Parse the `--border` style name.
fn parse_border(value: Option<&String>) -> Result<Option<BorderStyle>> {
    match value {
        None => Ok(None),
        Some(v) => BorderStyle::parse(v).map(Some).ok_or_else(|| {
            print_usage();
            anyhow!("invalid value for --border: {v}")
        }),
    }
}

/// Combine box geometry from three layers: CLI flags beat the definition
/// file, which beats the system defaults of padding 1, margin 1, round.
fn resolve_box_options(cfg: &config::BoxConfig, opts: &CliOptions) -> Result<BoxOptions> {
    let defaults = BoxOptions::default();
    let border = match opts.border {
        Some(style) => style,
        None => match cfg.border.as_deref() {
            Some(name) => BorderStyle::parse(name)
                .ok_or_else(|| anyhow!("invalid border style in card definition: {name}"))?,
            None => defaults.border,
        },
    };
    Ok(BoxOptions {
        padding: opts.padding.or(cfg.padding).unwrap_or(defaults.padding),
        margin: opts.margin.or(cfg.margin).unwrap_or(defaults.margin),
        border,
    })
}

/// Print the condensed usage guide.  Kept in one function so we can reuse it
/// whenever argument parsing fails.
fn print_usage() {
    static USAGE: &str = include_str!("../resources/messages/usage_en.txt");
    println!("\n{USAGE}");
}
