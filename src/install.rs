// bopo-create/src/install.rs

use anyhow::{bail, Context, Result};
use std::{path::Path, process::Command};
use tracing::info;

pub const PACKAGE_MANAGER: &str = "pnpm";
pub const INSTALL_ARGS: [&str; 2] = ["update", "--latest"];

/// Run `pnpm update --latest` inside `dir`, streaming its output.
pub fn install_dependencies(dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "installing dependencies");
    let status = Command::new(PACKAGE_MANAGER)
        .args(INSTALL_ARGS)
        .current_dir(dir)
        .status()
        .with_context(|| format!("spawning `{PACKAGE_MANAGER}` in {}", dir.display()))?;
    if !status.success() {
        bail!(
            "`{PACKAGE_MANAGER} {}` failed in {} ({status})",
            INSTALL_ARGS.join(" "),
            dir.display()
        );
    }
    Ok(())
}
