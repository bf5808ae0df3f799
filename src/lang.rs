//! Language classification from filenames.
//!
//! A file is classified purely by its name — no content sniffing. Each rule
//! pairs a filename pattern with a language; a filename matches a rule when
//! it ends with the pattern or starts with the language's canonical
//! identifier (so `Dockerfile.prod` matches the `Dockerfile` rule by prefix).

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Yaml,
    Dockerfile,
    Vagrantfile,
    Makefile,
    Bash,
}

impl Language {
    /// Canonical identifier, used in generated documents and as the
    /// prefix probe during classification.
    pub fn id(self) -> &'static str {
        match self {
            Language::Yaml => "yaml",
            Language::Dockerfile => "Dockerfile",
            Language::Vagrantfile => "Vagrantfile",
            Language::Makefile => "Makefile",
            Language::Bash => "bash",
        }
    }
}

/// Identifier reported for files no rule matches.
pub const UNSUPPORTED: &str = "unsupported";

/// Classification rules, evaluated in order — first match wins.
///
/// The rule set is disjoint for well-formed filenames; the fixed order only
/// decides degenerate names like `Dockerfile.yml`.
const RULES: &[(&str, Language)] = &[
    (".yml", Language::Yaml),
    (".yaml", Language::Yaml),
    ("Dockerfile", Language::Dockerfile),
    ("Vagrantfile", Language::Vagrantfile),
    ("Makefile", Language::Makefile),
    (".sh", Language::Bash),
];

/// Classify a filename (not a full path). `None` means unsupported, which is
/// informational — callers decide whether to skip or warn.
pub fn classify(filename: &str) -> Option<Language> {
    RULES
        .iter()
        .find(|(pattern, lang)| filename.ends_with(pattern) || filename.starts_with(lang.id()))
        .map(|(_, lang)| *lang)
}

/// Filename patterns recognized by the classifier, for help text.
pub fn supported_patterns() -> Vec<&'static str> {
    RULES.iter().map(|(pattern, _)| *pattern).collect()
}
