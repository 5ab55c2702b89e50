// bopo-create/src/plan.rs
//! Everything that will be written, computed before touching the disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::{
    catalog::{Addon, Bundler},
    debrief::{debrief, DebriefOptions, Value},
    manifest::Manifest,
    registry::VersionResolver,
    templates::{self, Placeholders},
    util,
};

/// The user's choices, from prompts or flags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Answers {
    pub scope: String,
    pub name: String,
    pub description: String,
    /// Entry file name without `.ts`.
    pub entry: String,
    pub bundler: Bundler,
    pub addons: Vec<Addon>,
    pub install: bool,
}

impl Answers {
    pub fn has(&self, addon: Addon) -> bool {
        self.addons.contains(&addon)
    }

    fn placeholders(&self) -> Placeholders<'_> {
        Placeholders { entry: &self.entry, name: &self.name, scope: &self.scope }
    }
}

/// Facts about the machine that change what gets generated.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostInfo {
    pub bun_on_path: bool,
}

impl HostInfo {
    pub fn detect() -> Self {
        let bun_on_path = std::env::var("PATH").map(|p| p.contains("bun")).unwrap_or(false);
        Self { bun_on_path }
    }
}

/// One output file, relative to the package folder.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: String,
    pub contents: String,
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct Plan {
    /// Insertion order is write order.
    pub files: Vec<PlannedFile>,
    /// Extra folders to create (parents of files are created regardless).
    pub folders: BTreeSet<String>,
}

impl Plan {
    /// Add or replace a file.
    pub fn set(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        let path = path.into();
        let contents = contents.into();
        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => existing.contents = contents,
            None => self.files.push(PlannedFile { path, contents }),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.iter().find(|f| f.path == path).map(|f| f.contents.as_str())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Bounded `{ files: [...], folders: [...] }` view for logs; contents are left out.
    pub fn summary(&self, opts: DebriefOptions) -> Value {
        let files: Vec<Value> = self.paths().map(Value::from).collect();
        let folders: Vec<Value> = self.folders.iter().map(|f| Value::from(f.as_str())).collect();
        debrief(&Value::object([("files", files), ("folders", folders)]), opts)
    }
}

/// Resolve templates, the manifest and dependency versions into a [`Plan`].
pub fn build_plan(
    answers: &Answers,
    host: HostInfo,
    resolver: &dyn VersionResolver,
    log_opts: DebriefOptions,
) -> Result<Plan> {
    let summary = debrief(&Value::from_serialize(answers), log_opts);
    debug!(answers = %summary, "building plan");

    let ph = answers.placeholders();
    let mut plan = Plan::default();
    plan.set(".gitignore", templates::GITIGNORE);
    plan.set("tsconfig.json", templates::TSCONFIG);

    // --- manifest ---
    let mut manifest = Manifest::from_template(templates::PACKAGE_JSON)?;
    manifest.set_identity(&answers.scope, &answers.name, &answers.description);
    manifest.set_scripts(&answers.bundler.scripts(), &answers.entry);

    let mut dev_deps = manifest.dev_dependency_names();
    dev_deps.extend(answers.bundler.dev_dependencies(host.bun_on_path).into_iter().map(String::from));

    // --- bundler ---
    if answers.bundler == Bundler::Tsup {
        plan.set("tsup.config.ts", ph.render_path(templates::TSUP_CONFIG));
    }

    // --- addons ---
    if answers.has(Addon::Prettier) {
        plan.set(".prettierrc", templates::PRETTIER);
    }
    if answers.has(Addon::Jsr) {
        plan.set("jsr.json", ph.render(templates::JSR));
    }
    if answers.has(Addon::Vitest) {
        dev_deps.push("vitest".into());
    }
    if answers.has(Addon::GhWorkflow) {
        plan.folders.insert(".github/workflows".into());
        plan.set(".github/workflows/release.yml", templates::WORKFLOW);
    }

    // --- versions ---
    let dev_deps = util::dedup_preserve_order(dev_deps);
    let versions = resolver
        .resolve(&dev_deps)
        .context("resolving latest dependency versions")?;
    manifest.merge_dev_dependencies(&versions);
    let summary = debrief(&Value::from(manifest.to_value()), log_opts);
    debug!(manifest = %summary, "package.json");

    plan.set("package.json", manifest.render(&answers.entry)?);

    // --- source ---
    plan.folders.insert("src".into());
    plan.set(format!("src/{}.ts", answers.entry), templates::entry_module(&answers.description));

    let summary = plan.summary(log_opts);
    debug!(plan = %summary, "plan ready");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Offline;
    use anyhow::anyhow;
    use std::{
        collections::BTreeMap,
        io,
        sync::{Arc, Mutex},
    };

    fn answers() -> Answers {
        Answers {
            scope: "@acme".into(),
            name: "widget".into(),
            description: "widgets!".into(),
            entry: "main".into(),
            bundler: Bundler::Tsup,
            addons: Addon::ALL.to_vec(),
            install: false,
        }
    }

    struct Fixed;
    impl VersionResolver for Fixed {
        fn resolve(&self, names: &[String]) -> Result<BTreeMap<String, String>> {
            Ok(names.iter().map(|n| (n.clone(), "1.2.3".to_string())).collect())
        }
    }

    struct Down;
    impl VersionResolver for Down {
        fn resolve(&self, _: &[String]) -> Result<BTreeMap<String, String>> {
            Err(anyhow!("registry down"))
        }
    }

    #[test]
    fn full_plan_has_every_file() {
        let plan = build_plan(&answers(), HostInfo::default(), &Offline, DebriefOptions::default()).unwrap();
        let paths: Vec<&str> = plan.paths().collect();
        for want in [
            ".gitignore",
            "tsconfig.json",
            "tsup.config.ts",
            ".prettierrc",
            "jsr.json",
            ".github/workflows/release.yml",
            "package.json",
            "src/main.ts",
        ] {
            assert!(paths.contains(&want), "missing {want} in {paths:?}");
        }
        assert!(plan.folders.contains(".github/workflows"));
        assert!(plan.get("jsr.json").unwrap().contains("@acme/widget"));
    }

    #[test]
    fn minimal_plan_skips_addons_and_tsup_config() {
        let a = Answers { bundler: Bundler::Tsc, addons: vec![], ..answers() };
        let plan = build_plan(&a, HostInfo::default(), &Offline, DebriefOptions::default()).unwrap();
        let paths: Vec<&str> = plan.paths().collect();
        assert_eq!(paths, vec![".gitignore", "tsconfig.json", "package.json", "src/main.ts"]);
        assert!(!plan.folders.contains(".github/workflows"));
    }

    #[test]
    fn manifest_carries_resolved_versions() {
        let plan = build_plan(&answers(), HostInfo::default(), &Fixed, DebriefOptions::default()).unwrap();
        let pkg: serde_json::Value = serde_json::from_str(plan.get("package.json").unwrap()).unwrap();
        assert_eq!(pkg["name"], "@acme/widget");
        assert_eq!(pkg["scripts"]["dev"], "vite-node --watch src/main");
        for dep in ["tsup", "vite-node", "vitest", "typescript"] {
            assert_eq!(pkg["devDependencies"][dep], "1.2.3", "{dep}");
        }
    }

    #[test]
    fn bun_dependency_follows_host() {
        let a = Answers { bundler: Bundler::Bun, addons: vec![], ..answers() };
        let with = build_plan(&a, HostInfo { bun_on_path: true }, &Offline, DebriefOptions::default()).unwrap();
        let without = build_plan(&a, HostInfo { bun_on_path: false }, &Offline, DebriefOptions::default()).unwrap();
        let dev = |p: &Plan| -> serde_json::Value {
            serde_json::from_str::<serde_json::Value>(p.get("package.json").unwrap()).unwrap()["devDependencies"].clone()
        };
        assert!(dev(&with).get("bun").is_some());
        assert!(dev(&without).get("bun").is_none());
        assert!(dev(&without).get("@types/bun").is_some());
    }

    #[test]
    fn resolver_failure_propagates() {
        let err = build_plan(&answers(), HostInfo::default(), &Down, DebriefOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("registry down"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn debug_logs_carry_debriefed_structures() {
        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            build_plan(&answers(), HostInfo::default(), &Fixed, DebriefOptions::default()).unwrap();
        });

        let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("building plan"), "{logs}");
        assert!(logs.contains("scope: '@acme'"), "{logs}");
        // package.json has more than `siblings` top-level keys
        assert!(logs.contains("name: '@acme/widget'"), "{logs}");
        assert!(logs.contains("'...': '"), "{logs}");
        assert!(logs.contains("plan ready"), "{logs}");
    }

    #[test]
    fn plan_summary_is_bounded() {
        let plan = build_plan(&answers(), HostInfo::default(), &Offline, DebriefOptions::default()).unwrap();
        let summary = plan.summary(DebriefOptions::default());
        let Value::Object(entries) = &summary else { panic!("object summary") };
        assert_eq!(entries[0].0, "files");
        let Value::Array(files) = &entries[0].1 else { panic!("files array") };
        // 8 files at level 1: four shown plus an "N more" marker
        assert_eq!(files.len(), 5);
        assert_eq!(files[0], Value::from(".gitignore"));
        assert_eq!(files[4], Value::from("...4 more"));
        assert_eq!(
            summary.to_string(),
            "{ files: [ '.gitignore', 'tsconfig.json', 'tsup.config.ts', '.prettierrc', '...4 more' ], \
             folders: [ '.github/workflows', 'src' ] }"
        );
    }

    #[test]
    fn set_replaces_existing() {
        let mut p = Plan::default();
        p.set("a", "1");
        p.set("b", "2");
        p.set("a", "3");
        assert_eq!(p.paths().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(p.get("a"), Some("3"));
    }
}
