// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Card definition loading.  The definition is a JSON document whose `meta`
//! and `links` entries are explicit `[label, value]` arrays; document order
//! is the display order, so no mapping iteration semantics are involved.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub package: PackageOverride,
    #[serde(default)]
    pub meta: Vec<(String, String)>,
    #[serde(default)]
    pub links: Vec<(String, String)>,
    #[serde(default, rename = "box")]
    pub box_options: BoxConfig,
}

/// Optional overrides for the package identity shown on the card.
#[derive(Debug, Default, Deserialize)]
pub struct PackageOverride {
    pub name: Option<String>,
    pub author: Option<String>,
}

/// Box geometry straight from the definition file; CLI flags win over these,
/// and anything left unset falls back to the system defaults.
#[derive(Debug, Default, Deserialize)]
pub struct BoxConfig {
    pub padding: Option<usize>,
    pub margin: Option<usize>,
    pub border: Option<String>,
}

/// The package identity rendered on the card: the title banner and the
/// `npx <name>` line.
pub struct PackageInfo {
    pub name: String,
    pub author: String,
}

impl CardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse card definition from {}", path.display()))
    }

    /// Resolve the package identity, preferring definition-file overrides and
    /// falling back to the crate metadata baked in at build time.
    pub fn package_info(&self) -> PackageInfo {
        PackageInfo {
            name: self
                .package
                .name
                .clone()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
            author: self.package.author.clone().unwrap_or_else(default_author),
        }
    }
}

/// First entry of `CARGO_PKG_AUTHORS`, with any `<email>` part dropped.
fn default_author() -> String {
    let authors = env!("CARGO_PKG_AUTHORS");
    let first = authors.split(':').next().unwrap_or(authors);
    first.split('<').next().unwrap_or(first).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{json}").expect("write config");
        file
    }

    #[test]
    fn loads_ordered_pairs_as_written() {
        let file = write_config(
            r#"{
                "meta": [["Zed", "1"], ["Alpha", "2"]],
                "links": [["GitHub", "octocat"]]
            }"#,
        );
        let cfg = CardConfig::load(file.path()).expect("valid config");
        assert_eq!(cfg.meta[0].0, "Zed");
        assert_eq!(cfg.meta[1].0, "Alpha");
        assert_eq!(cfg.links.len(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let file = write_config("{}");
        let cfg = CardConfig::load(file.path()).expect("valid config");
        assert!(cfg.meta.is_empty());
        assert!(cfg.links.is_empty());
        assert!(cfg.box_options.padding.is_none());
    }

    #[test]
    fn package_overrides_beat_crate_metadata() {
        let file = write_config(
            r#"{"package": {"name": "mycard", "author": "Ada Lovelace"}}"#,
        );
        let cfg = CardConfig::load(file.path()).expect("valid config");
        let package = cfg.package_info();
        assert_eq!(package.name, "mycard");
        assert_eq!(package.author, "Ada Lovelace");
    }

    #[test]
    fn crate_metadata_fills_the_gaps() {
        let cfg = CardConfig::default();
        let package = cfg.package_info();
        assert_eq!(package.name, env!("CARGO_PKG_NAME"));
        assert!(!package.author.contains('<'));
    }

    #[test]
    fn unreadable_and_malformed_files_are_errors() {
        assert!(CardConfig::load(Path::new("/no/such/card.json")).is_err());
        let file = write_config("{not json");
        assert!(CardConfig::load(file.path()).is_err());
    }

    #[test]
    fn box_options_deserialise() {
        let file = write_config(
            r#"{"box": {"padding": 2, "margin": 0, "border": "double"}}"#,
        );
        let cfg = CardConfig::load(file.path()).expect("valid config");
        assert_eq!(cfg.box_options.padding, Some(2));
        assert_eq!(cfg.box_options.margin, Some(0));
        assert_eq!(cfg.box_options.border.as_deref(), Some("double"));
    }
}
