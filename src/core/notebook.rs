//! Notebook glue around the header engine
//!
//! Small primitives the commands compose with the core: the MD5 checksum
//! used to detect whether an external edit changed a note, the rule for
//! merging a freshly generated header into existing note text, and the
//! filename convention for new topic notes.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::wikifile::NOTE_EXTENSION;

/// MD5 checksum of a file's bytes as a hexadecimal string.
pub fn checksum(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    Ok(format!("{:x}", md5::compute(&data)))
}

/// Whether the file's current checksum differs from a previously recorded
/// one. This is the edit-detection primitive: snapshot before handing the
/// note to an editor, compare after.
pub fn has_changed(path: &Path, previous_digest: &str) -> Result<bool> {
    Ok(checksum(path)? != previous_digest)
}

/// Merge a generated header into existing note text.
///
/// A first line containing `|` is an existing navigation line and is
/// replaced wholesale; any other first line is preserved and the header is
/// prepended above it. Empty input becomes just the header.
pub fn merge_header(existing: &str, header: &str) -> String {
    if existing.is_empty() {
        return header.to_string();
    }

    let (first, rest) = match existing.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (existing, None),
    };

    let mut out = String::from(header);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if first.contains('|') {
        if let Some(rest) = rest {
            out.push_str(rest);
        }
    } else {
        out.push_str(existing);
    }
    out
}

/// Filename for a new topic note: `"<date>-<Dashed-Title>.md"`.
pub fn topic_filename(title: &str, date: NaiveDate) -> String {
    format!("{date}-{}{NOTE_EXTENSION}", render_name(title))
}

/// A title in filename form, spaces turned into dashes.
pub fn render_name(title: &str) -> String {
    title.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_merge_into_empty() {
        assert_eq!(merge_header("", "# 2020\n"), "# 2020\n");
    }

    #[test]
    fn test_merge_replaces_navigation_line() {
        let existing = "[[2019]] | [[Home]] | [[2021]]\nBody text\n";
        let merged = merge_header(existing, "# New | header");
        assert_eq!(merged, "# New | header\nBody text\n");
    }

    #[test]
    fn test_merge_prepends_when_no_navigation_line() {
        let existing = "Body text\nMore body\n";
        let merged = merge_header(existing, "# Title");
        assert_eq!(merged, "# Title\nBody text\nMore body\n");
    }

    #[test]
    fn test_merge_keeps_single_line_without_pipe() {
        let merged = merge_header("just a note", "# Title");
        assert_eq!(merged, "# Title\njust a note");
    }

    #[test]
    fn test_topic_filename() {
        assert_eq!(
            topic_filename("Sheep Like That", date(2020, 4, 26)),
            "2020-04-26-Sheep-Like-That.md"
        );
    }

    #[test]
    fn test_checksum_detects_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2020-05-01.md");
        fs::write(&path, "before").unwrap();
        let digest = checksum(&path).unwrap();
        assert!(!has_changed(&path, &digest).unwrap());
        fs::write(&path, "after").unwrap();
        assert!(has_changed(&path, &digest).unwrap());
    }
}
