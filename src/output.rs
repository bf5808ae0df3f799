//! Output path resolution and document writing.
//!
//! The output tree mirrors the source tree: the source directory is appended
//! to the output root unchanged, and the filename is rewritten into a
//! kebab-case `.adoc` name (`My.File.YML` becomes `my-file-yml.adoc`).

use crate::codefile::CodeFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of every generated document file.
const DOC_SUFFIX: &str = ".adoc";

/// Transform a source filename into its document filename: dots become
/// dashes, everything lowercased, suffix appended.
pub fn doc_file_name(name: &str) -> String {
    let mut doc_name = name.replace('.', "-").to_lowercase();
    doc_name.push_str(DOC_SUFFIX);
    doc_name
}

/// Resolve the output path for a source file beneath `output_root`.
///
/// Leading separators are trimmed from the mirrored directory so an absolute
/// source path nests under the root instead of replacing it.
pub fn resolve_output_path(file: &CodeFile, output_root: &Path) -> PathBuf {
    output_root
        .join(file.path().trim_start_matches('/'))
        .join(doc_file_name(file.name()))
}

/// Write `document` to `path`, creating the directory chain first.
///
/// Directory creation is idempotent and safe to race; an existing file at
/// `path` is truncated and fully replaced.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, document)
        .with_context(|| format!("failed to write documentation file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_file_name_replaces_dots_and_lowercases() {
        assert_eq!(doc_file_name("small-comment.sh"), "small-comment-sh.adoc");
        assert_eq!(doc_file_name("My.File.YML"), "my-file-yml.adoc");
        assert_eq!(doc_file_name("Dockerfile"), "dockerfile.adoc");
    }

    #[test]
    fn output_path_mirrors_source_directory() {
        let file = CodeFile::new("a/b/Dockerfile");
        assert_eq!(
            resolve_output_path(&file, Path::new("out")),
            PathBuf::from("out/a/b/dockerfile.adoc")
        );
    }

    #[test]
    fn output_path_for_bare_filename() {
        let file = CodeFile::new("script.sh");
        assert_eq!(
            resolve_output_path(&file, Path::new("out")),
            PathBuf::from("out/script-sh.adoc")
        );
    }

    #[test]
    fn absolute_source_path_stays_under_output_root() {
        let file = CodeFile::new("/etc/deploy/config.yml");
        assert_eq!(
            resolve_output_path(&file, Path::new("out")),
            PathBuf::from("out/etc/deploy/config-yml.adoc")
        );
    }

    #[test]
    fn write_creates_parents_and_truncates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a/b/doc.adoc");

        write_document(&path, "first version, long enough to notice\n").unwrap();
        write_document(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }
}
