// bopo-create/src/report.rs

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::{style::dim, util};

/// Indented listing of a generated package, directories first.
///
/// Output format (example):
/// ```text
/// widget/
///   .github/
///     workflows/
///       release.yml  868 B
///   src/
///     index.ts  110 B
///   package.json  1.1 KB
/// ```
pub fn render_tree(root: &Path) -> Result<String> {
    let mut out = String::new();
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    out.push_str(&format!("{root_name}/\n"));

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by(|a, b| {
            // directories before files, then by name
            let ka = (!a.file_type().is_dir(), a.file_name().to_os_string());
            let kb = (!b.file_type().is_dir(), b.file_name().to_os_string());
            ka.cmp(&kb)
        });

    for dent in walker {
        let dent = dent.with_context(|| format!("walking {}", root.display()))?;
        let indent = "  ".repeat(dent.depth());
        let name = dent.file_name().to_string_lossy();
        if dent.file_type().is_dir() {
            out.push_str(&format!("{indent}{name}/\n"));
        } else {
            let meta = dent
                .metadata()
                .with_context(|| format!("stat {}", util::normalize_rel(root, dent.path())))?;
            out.push_str(&format!("{indent}{name}  {}\n", dim(&util::human_size(meta.len()))));
        }
    }
    Ok(out)
}
