// bopo-create/src/registry.rs
//! Latest-version lookup for dev dependencies.
//!
//! The registry endpoint takes `+`-joined package names in the path and
//! answers with either one `{ name, version }` object (single package) or an
//! array of them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeMap, time::Duration};
use tracing::{debug, warn};

pub const DEFAULT_REGISTRY_URL: &str = "https://npm.antfu.dev";

/// Version used when no lookup is made.
pub const LATEST: &str = "latest";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Maps package names to the version string written into `package.json`.
pub trait VersionResolver {
    fn resolve(&self, names: &[String]) -> Result<BTreeMap<String, String>>;
}

/* ================================ Npm registry ================================ */

pub struct NpmRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl NpmRegistry {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building registry http client")?;
        Ok(Self { base_url: base_url.into(), client })
    }

    fn url_for(&self, names: &[String]) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), names.join("+"))
    }
}

impl VersionResolver for NpmRegistry {
    fn resolve(&self, names: &[String]) -> Result<BTreeMap<String, String>> {
        if names.is_empty() {
            return Ok(BTreeMap::new());
        }
        let url = self.url_for(names);
        debug!(%url, count = names.len(), "resolving latest versions");

        let body: serde_json::Value = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("registry rejected {url}"))?
            .json()
            .with_context(|| format!("decoding response from {url}"))?;

        let versions = parse_versions(body)?;
        for missing in names.iter().filter(|n| !versions.contains_key(*n)) {
            warn!(package = %missing, "registry returned no version");
        }
        Ok(versions)
    }
}

/* ================================== Offline ================================== */

/// Pins every package to `latest`; no network.
pub struct Offline;

impl VersionResolver for Offline {
    fn resolve(&self, names: &[String]) -> Result<BTreeMap<String, String>> {
        Ok(names.iter().map(|n| (n.clone(), LATEST.to_string())).collect())
    }
}

/* ---------------------------------- parsing ---------------------------------- */

#[derive(Debug, Deserialize)]
struct PackageVersion {
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryResponse {
    Many(Vec<PackageVersion>),
    One(PackageVersion),
}

/// Fold a registry response into `name -> version`.
pub fn parse_versions(body: serde_json::Value) -> Result<BTreeMap<String, String>> {
    let parsed: RegistryResponse =
        serde_json::from_value(body).context("unexpected registry response shape")?;
    let list = match parsed {
        RegistryResponse::Many(v) => v,
        RegistryResponse::One(v) => vec![v],
    };
    Ok(list.into_iter().map(|p| (p.name, p.version)).collect())
}
