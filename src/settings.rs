// bopo-create/src/settings.rs
//! Generator settings: built-in defaults, optionally overridden by a TOML
//! file (`--config <path>` or `./bopo.toml`), then by command-line flags.
//!
//! ```toml
//! default_scope = "@acme"
//! dest_dir = "packages"
//!
//! [debrief]
//! depth = 3
//! round = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{catalog::Bundler, debrief::DebriefOptions, registry::DEFAULT_REGISTRY_URL};

pub const CONFIG_FILE_NAME: &str = "bopo.toml";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_scope: String,
    pub default_name: String,
    pub default_entry: String,
    pub default_bundler: Bundler,
    /// Where packages land normally.
    pub dest_dir: PathBuf,
    /// Where packages land with `--temp`.
    pub temp_dir: PathBuf,
    pub registry_url: String,
    /// Bounds for structures rendered in debug logs.
    pub debrief: DebriefOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_scope: "@braebo".into(),
            default_name: "my-package".into(),
            default_entry: "index".into(),
            default_bundler: Bundler::Tsup,
            dest_dir: PathBuf::from("../../packages"),
            temp_dir: PathBuf::from("tmp"),
            registry_url: DEFAULT_REGISTRY_URL.into(),
            debrief: DebriefOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit path must exist; without one,
    /// `./bopo.toml` is read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if !local.is_file() {
                    debug!("no {CONFIG_FILE_NAME}; using defaults");
                    return Ok(Self::default());
                }
                local
            }
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let settings = Self::from_toml_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Base folder for a generated package.
    pub fn output_base(&self, temp: bool) -> &Path {
        if temp { &self.temp_dir } else { &self.dest_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_override() {
        let s = Settings::from_toml_str(
            r#"
default_scope = "@acme"
default_bundler = "bun"

[debrief]
depth = 5
round = false
preserveRootSiblings = true
"#,
        )
        .unwrap();
        assert_eq!(s.default_scope, "@acme");
        assert_eq!(s.default_bundler, Bundler::Bun);
        assert_eq!(s.debrief.depth, 5);
        assert_eq!(s.debrief.round, None);
        assert!(s.debrief.preserve_root_siblings);
        assert_eq!(s.debrief.siblings, DebriefOptions::default().siblings);
        assert_eq!(s.default_name, "my-package");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Settings::from_toml_str("bundler = \"tsup\"").is_err());
    }

    #[test]
    fn negative_bounds_rejected() {
        assert!(Settings::from_toml_str("[debrief]\nsiblings = -1").is_err());
    }

    #[test]
    fn explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "temp_dir = \"scratch\"\n").unwrap();
        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.output_base(true), Path::new("scratch"));
        assert_eq!(s.output_base(false), Path::new("../../packages"));
    }
}
