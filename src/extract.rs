//! Header documentation extraction.
//!
//! The header block is the contiguous run of `##` comment lines at the top of
//! a file, terminated by the first raw empty line. Lines that neither carry
//! the marker nor are empty (shebangs, plain `#` comments, stray code) are
//! skipped without terminating the scan — only a truly blank line ends the
//! header. Headerless or empty content yields an empty string, never an
//! error.

/// Marker that promotes a comment line into the header documentation.
const MARKER: &str = "##";

/// Extract the header documentation from raw file content.
///
/// Matched lines are emitted in order, marker stripped and whitespace
/// trimmed, one per line with a trailing newline each.
pub fn extract_header(content: &str) -> String {
    let mut header = String::new();
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(MARKER) {
            header.push_str(rest.trim());
            header.push('\n');
        } else if line.is_empty() {
            break;
        }
    }
    header
}
