// bopo-create/src/catalog.rs
//! Bundlers and addons the generator knows how to wire up.
//!
//! Script strings may contain `_PATH_`, which is later replaced with the entry
//! file name (without extension).

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/* ================================== Bundler ================================== */

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    #[default]
    Tsup,
    Bun,
    Tsc,
}

/// `dev`, `build` and `build:watch` scripts for `package.json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scripts {
    pub dev: &'static str,
    pub build: &'static str,
    pub build_watch: &'static str,
}

impl Bundler {
    /// Prompt order.
    pub const ALL: [Bundler; 3] = [Bundler::Tsup, Bundler::Bun, Bundler::Tsc];

    pub fn name(self) -> &'static str {
        match self {
            Bundler::Tsup => "tsup",
            Bundler::Bun => "bun",
            Bundler::Tsc => "tsc",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Bundler::Tsup => "default",
            Bundler::Bun => "",
            Bundler::Tsc => "no bundler",
        }
    }

    pub fn scripts(self) -> Scripts {
        match self {
            Bundler::Tsup => Scripts {
                dev: "vite-node --watch src/_PATH_",
                build: "tsup",
                build_watch: "tsup --watch",
            },
            Bundler::Bun => Scripts {
                dev: "bun run src/_PATH_ --watch",
                build: "bun build src/_PATH_ --out-dir dist",
                build_watch: "bun build src/_PATH_ --out-dir dist -w",
            },
            Bundler::Tsc => Scripts {
                dev: "vite-node --watch",
                build: "tsc",
                build_watch: "tsc --watch",
            },
        }
    }

    /// Dev dependencies the bundler needs. `bun` itself is only pulled in
    /// when a bun install is already visible on `PATH`.
    pub fn dev_dependencies(self, bun_on_path: bool) -> Vec<&'static str> {
        match self {
            Bundler::Tsup => vec!["tsup", "vite-node"],
            Bundler::Bun if bun_on_path => vec!["bun", "@types/bun"],
            Bundler::Bun => vec!["@types/bun"],
            Bundler::Tsc => vec!["vite-node"],
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bundler {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Bundler::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("unknown bundler `{}` (expected tsup, bun or tsc)", s.trim()))
    }
}

/* =================================== Addon =================================== */

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Addon {
    Prettier,
    Vitest,
    Jsr,
    #[value(name = "ghWorkflow")]
    GhWorkflow,
}

impl Addon {
    /// Prompt order; all are selected by default.
    pub const ALL: [Addon; 4] = [Addon::Prettier, Addon::Vitest, Addon::Jsr, Addon::GhWorkflow];

    /// Stable identifier used on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            Addon::Prettier => "prettier",
            Addon::Vitest => "vitest",
            Addon::Jsr => "jsr",
            Addon::GhWorkflow => "ghWorkflow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Addon::GhWorkflow => "github action",
            other => other.key(),
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Addon::GhWorkflow => "Changesets / JSR",
            _ => "",
        }
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Addon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        Addon::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(t) || a.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| anyhow!("unknown addon `{t}`"))
    }
}
