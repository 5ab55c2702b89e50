// bopo-create/src/cli.rs

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::{
    catalog::{Addon, Bundler},
    debrief::DebriefOptions,
    prompt::Preset,
    settings::Settings,
};

/// NPM + JSR package template generator.
#[derive(Parser, Debug, Default)]
#[command(name = "bopo-create", author, version, about, long_about = None)]
pub struct Cli {
    /// Write generated files to the temporary testing folder
    #[arg(short = 't', long)]
    pub temp: bool,

    /// Folder new packages are created in (overrides `dest_dir`)
    #[arg(long, env = "BOPO_DEST")]
    pub dest: Option<PathBuf>,

    /// Settings file (defaults to ./bopo.toml when present)
    #[arg(long, env = "BOPO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Accept defaults for every question not answered by a flag
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Package scope, e.g. @acme
    #[arg(long)]
    pub scope: Option<String>,

    /// Package name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Entry file, with or without `.ts`
    #[arg(long)]
    pub entry: Option<String>,

    #[arg(long, value_enum)]
    pub bundler: Option<Bundler>,

    /// Comma separated addons
    #[arg(long, value_enum, value_delimiter = ',', conflicts_with = "no_addons")]
    pub addons: Option<Vec<Addon>>,

    /// Skip all addons
    #[arg(long)]
    pub no_addons: bool,

    /// Do not run the package manager afterwards
    #[arg(long)]
    pub no_install: bool,

    /// Skip registry lookups; dependencies are pinned to `latest`
    #[arg(long, env = "BOPO_OFFLINE")]
    pub offline: bool,

    /// Registry used for version lookups (overrides `registry_url`)
    #[arg(long, env = "BOPO_REGISTRY")]
    pub registry: Option<String>,

    /// Nesting depth shown for structures in debug logs
    #[arg(long)]
    pub debrief_depth: Option<usize>,

    /// Entries shown per container in debug logs
    #[arg(long)]
    pub debrief_siblings: Option<usize>,

    /// Characters kept from long strings in debug logs
    #[arg(long)]
    pub debrief_trim: Option<usize>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flag answers; `None` fields are prompted for (or defaulted with `--yes`).
    pub fn preset(&self) -> Preset {
        let addons = if self.no_addons { Some(Vec::new()) } else { self.addons.clone() };
        Preset {
            scope: self.scope.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            entry: self.entry.clone(),
            bundler: self.bundler,
            addons,
            install: self.no_install.then_some(false),
        }
    }

    /// Layer flag overrides on top of file/default settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dest) = &self.dest {
            settings.dest_dir = dest.clone();
        }
        if let Some(url) = &self.registry {
            settings.registry_url = url.clone();
        }
        settings.debrief = DebriefOptions {
            depth: self.debrief_depth.unwrap_or(settings.debrief.depth),
            siblings: self.debrief_siblings.unwrap_or(settings.debrief.siblings),
            trim: self.debrief_trim.unwrap_or(settings.debrief.trim),
            ..settings.debrief
        };
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn addons_comma_list() {
        let cli = Cli::try_parse_from(["bopo-create", "--addons", "prettier,ghWorkflow", "-t"]).unwrap();
        assert!(cli.temp);
        assert_eq!(cli.preset().addons, Some(vec![Addon::Prettier, Addon::GhWorkflow]));
    }

    #[test]
    fn no_addons_and_no_install() {
        let cli = Cli::try_parse_from(["bopo-create", "--no-addons", "--no-install", "--bundler", "bun"]).unwrap();
        let p = cli.preset();
        assert_eq!(p.addons, Some(vec![]));
        assert_eq!(p.install, Some(false));
        assert_eq!(p.bundler, Some(Bundler::Bun));
        assert_eq!(p.scope, None);
    }

    #[test]
    fn negative_bounds_rejected() {
        assert!(Cli::try_parse_from(["bopo-create", "--debrief-siblings", "-1"]).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "bopo-create",
            "--dest",
            "out",
            "--debrief-depth",
            "7",
            "--registry",
            "http://localhost:1",
        ])
        .unwrap();
        let s = cli.apply(Settings::default());
        assert_eq!(s.dest_dir, PathBuf::from("out"));
        assert_eq!(s.debrief.depth, 7);
        assert_eq!(s.debrief.siblings, DebriefOptions::default().siblings);
        assert_eq!(s.registry_url, "http://localhost:1");
    }
}
