use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extension des fichiers de niveau quand le motif désigne un dossier.
const LEVEL_EXT: &str = "txt";

/// `*` matches any run of characters, `?` exactly one. A leading `.` in
/// `text` (hidden file) only matches a literal leading `.` in `pattern`.
///
/// # Example
/// ```
/// use lv_app::inputs::wildcard_match;
/// assert!(wildcard_match("mario-*.txt", "mario-1-1.txt"));
/// assert!(wildcard_match("?-1.txt", "8-1.txt"));
/// assert!(!wildcard_match("*.txt", "notes.md"));
/// assert!(!wildcard_match("*.txt", ".hidden.txt"));
/// ```
#[must_use]
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    if text.starts_with('.') && !pattern.starts_with('.') {
        return false;
    }
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0, 0);
    // position of the last `*` in p, and the text index it resumes from
    let mut star: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ti));
            pi += 1;
        } else if let Some((sp, st)) = star {
            pi = sp + 1;
            ti = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}

fn has_wildcards(s: &str) -> bool {
    s.contains(['*', '?'])
}

/// Résout un motif de fichiers en chemins triés lexicographiquement.
///
/// - an existing directory matches every `*.txt` file inside it;
/// - otherwise the directory part is literal and the file name part may use
///   `*` and `?`;
/// - a pattern without wildcards matches itself if it is a file.
///
/// A missing directory simply matches nothing.
///
/// # Errors
/// Returns an error if an existing directory cannot be listed.
pub fn resolve_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(pattern);

    if path.is_dir() {
        return list_matching(path, &format!("*.{LEVEL_EXT}"));
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(Vec::new());
    };
    if !has_wildcards(name) {
        return Ok(if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    list_matching(dir, name)
}

fn list_matching(dir: &Path, name_pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Lecture de {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| wildcard_match(name_pattern, n))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
