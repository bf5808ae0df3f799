//! Source file discovery.
//!
//! Walks the source directory recursively and collects every file the
//! classifier supports. Exclusion patterns are glob expressions tested
//! against both the entry's path and its bare name; an excluded directory is
//! pruned without descending into it. Unsupported files are skipped silently.

use crate::codefile::CodeFile;
use anyhow::{Context, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Compile exclusion flag values into glob patterns.
pub fn compile_excludes(excludes: &[String]) -> Result<Vec<Pattern>> {
    excludes
        .iter()
        .map(|raw| Pattern::new(raw).with_context(|| format!("invalid exclude pattern: {raw}")))
        .collect()
}

/// Find all supported source files beneath `source_dir`, sorted by path for
/// deterministic output.
pub fn find_code_files(source_dir: &Path, excludes: &[Pattern]) -> Result<Vec<CodeFile>> {
    let mut files = Vec::new();
    walk(source_dir, excludes, &mut files)?;
    files.sort_by_key(|file| file.full_path());
    Ok(files)
}

fn walk(dir: &Path, excludes: &[Pattern], files: &mut Vec<CodeFile>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if is_excluded(&path, excludes) {
            continue;
        }
        if path.is_dir() {
            walk(&path, excludes, files)?;
        } else if path.is_file() {
            let file = CodeFile::new(&path.to_string_lossy());
            if file.is_supported() {
                files.push(file);
            }
        }
    }
    Ok(())
}

fn is_excluded(path: &Path, excludes: &[Pattern]) -> bool {
    excludes.iter().any(|pattern| {
        pattern.matches_path(path)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}
