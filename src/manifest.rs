// bopo-create/src/manifest.rs
//! `package.json` built from the embedded template.
//!
//! Key order of the template is kept (serde_json `preserve_order`), new
//! dev dependencies are appended after the template's own.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{catalog::Scripts, templates::PATH_TOKEN};

#[derive(Clone, Debug)]
pub struct Manifest {
    doc: Map<String, Value>,
}

impl Manifest {
    pub fn from_template(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("parsing package.json template")?;
        match value {
            Value::Object(doc) => Ok(Self { doc }),
            other => Err(anyhow!("package.json template is not an object (got {other})")),
        }
    }

    /// Names listed under `devDependencies`, in template order.
    pub fn dev_dependency_names(&self) -> Vec<String> {
        self.doc
            .get("devDependencies")
            .and_then(Value::as_object)
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Sets `name` to `scope/name` and the description.
    pub fn set_identity(&mut self, scope: &str, name: &str, description: &str) {
        self.doc.insert("name".into(), Value::String(format!("{scope}/{name}")));
        self.doc.insert("description".into(), Value::String(description.to_string()));
    }

    /// Writes `dev`, `build` and `build:watch`, substituting the entry path.
    pub fn set_scripts(&mut self, scripts: &Scripts, entry: &str) {
        let table = self.object_mut("scripts");
        for (key, cmd) in [
            ("dev", scripts.dev),
            ("build", scripts.build),
            ("build:watch", scripts.build_watch),
        ] {
            table.insert(key.into(), Value::String(cmd.replacen(PATH_TOKEN, entry, 1)));
        }
    }

    /// Overwrites or appends `devDependencies` entries.
    pub fn merge_dev_dependencies(&mut self, versions: &BTreeMap<String, String>) {
        let deps = self.object_mut("devDependencies");
        for (name, version) in versions {
            deps.insert(name.clone(), Value::String(version.clone()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    /// Whole document as JSON, for logging.
    pub fn to_value(&self) -> Value {
        Value::Object(self.doc.clone())
    }

    /// Pretty JSON (2-space indent, trailing newline) with leftover
    /// `_PATH_` tokens replaced by the entry.
    pub fn render(&self, entry: &str) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.doc).context("serializing package.json")?;
        out = out.replace(PATH_TOKEN, entry);
        out.push('\n');
        Ok(out)
    }

    fn object_mut(&mut self, key: &str) -> &mut Map<String, Value> {
        let slot = self
            .doc
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!("slot was just made an object"),
        }
    }
}
