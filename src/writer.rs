// bopo-create/src/writer.rs
//! Puts a [`Plan`] on disk. The target folder is replaced wholesale.

use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use tracing::{debug, info};

use crate::plan::Plan;

/// `<base>/<name>`, where `name` must be a single plain folder name.
pub fn output_folder(base: &Path, name: &str) -> Result<PathBuf> {
    let mut parts = Path::new(name).components();
    match (parts.next(), parts.next()) {
        (Some(Component::Normal(_)), None) => Ok(base.join(name)),
        _ => Err(anyhow!("package name {name:?} is not a single folder name")),
    }
}

pub fn write_plan(plan: &Plan, out: &Path) -> Result<()> {
    if out.exists() {
        info!(path = %out.display(), "removing existing output folder");
        fs::remove_dir_all(out).with_context(|| format!("removing {}", out.display()))?;
    }
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    for folder in &plan.folders {
        let dir = out.join(checked_rel(folder)?);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for file in &plan.files {
        let path = out.join(checked_rel(&file.path)?);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, &file.contents).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote");
    }
    Ok(())
}

/// Planned paths must stay inside the output folder.
fn checked_rel(rel: &str) -> Result<&Path> {
    let p = Path::new(rel);
    if p.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
        Ok(p)
    } else {
        Err(anyhow!("refusing to write outside the package folder: {rel}"))
    }
}
