//! Document sections and assembly.
//!
//! A document is an ordered sequence of immutable, pre-rendered sections —
//! metadata first, then the extracted header — concatenated verbatim at the
//! end. Each section embeds its own trailing spacing; assembly adds nothing.

use crate::codefile::CodeFile;

/// Kind tag for a documentation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Metadata,
    Header,
}

/// One tagged block of pre-rendered document text.
#[derive(Debug)]
pub struct Section {
    kind: SectionKind,
    text: String,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Build the metadata section: document title plus a language/path table.
pub fn metadata_section(file: &CodeFile) -> Section {
    let mut text = String::new();
    text.push_str("= ");
    text.push_str(file.name());
    text.push_str("\n\n");
    text.push_str("[cols=\"1,5\"]\n");
    text.push_str("|===\n");
    text.push_str("|Language |");
    text.push_str(file.language_id());
    text.push('\n');
    text.push_str("|Path |");
    text.push_str(&file.full_path());
    text.push('\n');
    text.push_str("|===\n\n");

    Section {
        kind: SectionKind::Metadata,
        text,
    }
}

/// Wrap already-extracted header text as a section, verbatim.
pub fn header_section(header: String) -> Section {
    Section {
        kind: SectionKind::Header,
        text: header,
    }
}

/// Concatenate sections in order. No separators, no reordering, no
/// deduplication.
pub fn assemble(sections: &[Section]) -> String {
    let mut document = String::new();
    for section in sections {
        document.push_str(&section.text);
    }
    document
}
