// bopo-create/src/util.rs

use std::path::Path;

/// Deduplicate while preserving first occurrence order.
pub fn dedup_preserve_order(v: Vec<String>) -> Vec<String> {
    use std::collections::HashSet;
    let mut seen: HashSet<String> = HashSet::with_capacity(v.len());
    let mut out = Vec::with_capacity(v.len());
    for s in v {
        if seen.insert(s.clone()) {
            out.push(s);
        }
    }
    out
}

/// Relative, forward-slash path for display.
pub fn normalize_rel(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// 1536 -> "1.5 KB"; small sizes stay in bytes.
pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// Entry names are stored without extension; accept `index.ts` too.
pub fn strip_ts_ext(entry: &str) -> &str {
    let e = entry.trim();
    e.strip_suffix(".ts").unwrap_or(e)
}

/// npm-ish name check: returns a reason when the name is unusable.
pub fn invalid_package_name(name: &str) -> Option<String> {
    let n = name.trim();
    if n.is_empty() {
        return Some("Name cannot be empty".into());
    }
    if n.len() > 214 {
        return Some("Name must be at most 214 characters".into());
    }
    if n.starts_with('.') || n.starts_with('_') {
        return Some("Name cannot start with \".\" or \"_\"".into());
    }
    if let Some(ch) = n
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~')))
    {
        return Some(format!("Name cannot contain {ch:?} (use lowercase letters, digits, - . _ ~)"));
    }
    None
}
