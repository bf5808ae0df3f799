//! Source file model and lifecycle.
//!
//! A discovered file moves through three states, each owned by its own type
//! so the compiler rules out consulting content before the read step or
//! sections before the parse step:
//!
//! - [`CodeFile`] — identity and classification, straight from discovery
//! - [`ReadCodeFile`] — identity plus raw content
//! - [`ParsedCodeFile`] — identity plus the assembled documentation sections
//!
//! Each transition consumes the previous state; a file is created once per
//! discovered path and never reused across runs.

use crate::document::{self, Section};
use crate::extract;
use crate::lang::{self, Language};
use crate::output;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Split a full path into directory and filename on the last `/`.
///
/// No separator means the whole input is the filename and the directory is
/// empty. Trailing separators are stripped from the directory component, so
/// re-applying the function to its own filename output is a no-op.
pub fn split_path_and_filename(full_path: &str) -> (&str, &str) {
    match full_path.rfind('/') {
        Some(idx) => {
            let dir = full_path[..idx].trim_end_matches('/');
            (dir, &full_path[idx + 1..])
        }
        None => ("", full_path),
    }
}

/// A discovered source file: identity and classification only.
#[derive(Debug)]
pub struct CodeFile {
    path: String,
    name: String,
    lang: Option<Language>,
}

impl CodeFile {
    pub fn new(full_path: &str) -> Self {
        let (path, name) = split_path_and_filename(full_path);
        let lang = lang::classify(name);
        CodeFile {
            path: path.to_string(),
            name: name.to_string(),
            lang,
        }
    }

    /// Directory component of the source path. Empty for bare filenames.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filename component of the source path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classified language identifier, or the `unsupported` sentinel.
    pub fn language_id(&self) -> &'static str {
        self.lang.map_or(lang::UNSUPPORTED, Language::id)
    }

    pub fn is_supported(&self) -> bool {
        self.lang.is_some()
    }

    /// Logical source path: `<dir>/<name>`, or just `<name>` when the
    /// directory is empty.
    pub fn full_path(&self) -> String {
        if self.path.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.path, self.name)
        }
    }

    /// Read the file's content from the filesystem.
    pub fn read(self) -> Result<ReadCodeFile> {
        let full_path = self.full_path();
        let content = fs::read_to_string(&full_path)
            .with_context(|| format!("failed to read code file: {full_path}"))?;
        Ok(ReadCodeFile {
            file: self,
            content,
        })
    }
}

/// A source file whose content has been read.
#[derive(Debug)]
pub struct ReadCodeFile {
    file: CodeFile,
    content: String,
}

impl ReadCodeFile {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Extract the documentation sections from the content. Infallible:
    /// content without header comments yields an empty header section.
    pub fn parse(self) -> ParsedCodeFile {
        let header = extract::extract_header(&self.content);
        let sections = vec![
            document::metadata_section(&self.file),
            document::header_section(header),
        ];
        ParsedCodeFile {
            file: self.file,
            sections,
        }
    }
}

/// A source file with its documentation sections assembled.
#[derive(Debug)]
pub struct ParsedCodeFile {
    file: CodeFile,
    sections: Vec<Section>,
}

impl ParsedCodeFile {
    pub fn source_path(&self) -> String {
        self.file.full_path()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The final document text: all sections concatenated in order.
    pub fn document(&self) -> String {
        document::assemble(&self.sections)
    }

    /// Write the document beneath `output_root`, mirroring the source
    /// directory layout. Returns the path written to.
    pub fn write(&self, output_root: &Path) -> Result<PathBuf> {
        let out_path = output::resolve_output_path(&self.file, output_root);
        output::write_document(&out_path, &self.document())?;
        Ok(out_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_and_filename() {
        assert_eq!(split_path_and_filename("a/b/c.sh"), ("a/b", "c.sh"));
        assert_eq!(
            split_path_and_filename("/path/to/source.sh"),
            ("/path/to", "source.sh")
        );
        assert_eq!(
            split_path_and_filename("path/to/Dockerfile"),
            ("path/to", "Dockerfile")
        );
    }

    #[test]
    fn split_without_separator_yields_empty_dir() {
        assert_eq!(split_path_and_filename("c.sh"), ("", "c.sh"));
    }

    #[test]
    fn split_is_idempotent_on_filename() {
        let (_, name) = split_path_and_filename("a/b/c.sh");
        assert_eq!(split_path_and_filename(name), ("", "c.sh"));
    }

    #[test]
    fn new_classifies_from_filename() {
        let file = CodeFile::new("path/to/script.sh");
        assert_eq!(file.path(), "path/to");
        assert_eq!(file.name(), "script.sh");
        assert_eq!(file.language_id(), "bash");
        assert!(file.is_supported());
    }

    #[test]
    fn new_flags_unsupported_filename() {
        let file = CodeFile::new("src/main.go");
        assert!(!file.is_supported());
        assert_eq!(file.language_id(), "unsupported");
    }

    #[test]
    fn full_path_omits_empty_directory() {
        assert_eq!(CodeFile::new("script.sh").full_path(), "script.sh");
        assert_eq!(CodeFile::new("a/script.sh").full_path(), "a/script.sh");
    }

    #[test]
    fn read_populates_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("read-me.sh");
        fs::write(&path, "## hello\n").unwrap();

        let read = CodeFile::new(&path.to_string_lossy()).read().unwrap();
        assert_eq!(read.content(), "## hello\n");
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = CodeFile::new("no/such/file.sh").read().unwrap_err();
        assert!(err.to_string().contains("no/such/file.sh"));
    }

    #[test]
    fn parse_builds_metadata_then_header() {
        let read = ReadCodeFile {
            file: CodeFile::new("good/small-comment.sh"),
            content: "#!/bin/bash\n## Lorem ipsum\n\n## not part of the header\n".to_string(),
        };
        let parsed = read.parse();

        let expected = "= small-comment.sh\n\
                        \n\
                        [cols=\"1,5\"]\n\
                        |===\n\
                        |Language |bash\n\
                        |Path |good/small-comment.sh\n\
                        |===\n\
                        \n\
                        Lorem ipsum\n";
        assert_eq!(parsed.document(), expected);
    }

    #[test]
    fn sections_are_metadata_then_header() {
        use crate::document::SectionKind;

        let read = ReadCodeFile {
            file: CodeFile::new("script.sh"),
            content: "## doc\n".to_string(),
        };
        let parsed = read.parse();
        let kinds: Vec<_> = parsed.sections().iter().map(Section::kind).collect();
        assert_eq!(kinds, [SectionKind::Metadata, SectionKind::Header]);
    }

    #[test]
    fn parse_with_interleaved_comment_line() {
        let read = ReadCodeFile {
            file: CodeFile::new("script.sh"),
            content: "#!/bin/bash\n\
                      ## Line one.\n\
                      # ignore me, I do not follow the convention\n\
                      ## Line two.\n\
                      \n\
                      ## Never reached\n"
                .to_string(),
        };
        let parsed = read.parse();
        assert!(parsed.document().ends_with("Line one.\nLine two.\n"));
    }
}
