//! Parsing of checklist notes.
//!
//! A note is scanned line by line in a single forward pass. Every top-level
//! checklist line opens an entry; the immediately following indented
//! checklist lines are attached to it as children. Anything else is dropped
//! silently, so a note can freely mix headings, prose and blank lines with
//! its checklists.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::domain::{Document, Entry, Item};

/// A top-level checklist line: dash, space, single bracketed marker
/// character, space, free text.
static PARENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[(.)\] (.+)$").expect("parent pattern is valid"));

/// An indented checklist line: the same shape preceded by any run of leading
/// whitespace.
static CHILD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+- \[(.)\] (.+)$").expect("child pattern is valid"));

/// Classification of one raw line of note text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// A top-level checklist line.
    Parent { marker: char, text: &'a str },
    /// An indented checklist line.
    Child { marker: char, text: &'a str },
    /// Anything else: blank lines, headings, prose, dashes without a
    /// checkbox.
    Other,
}

/// Decides whether a raw line is a top-level checklist line, an indented
/// one, or neither. Pure classification, no side effects.
fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_end();
    if let Some(captures) = PARENT.captures(line) {
        return LineKind::Parent {
            marker: marker_char(&captures),
            text: captures.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(captures) = CHILD.captures(line) {
        return LineKind::Child {
            marker: marker_char(&captures),
            text: captures.get(2).map_or("", |m| m.as_str()),
        };
    }
    LineKind::Other
}

fn marker_char(captures: &regex::Captures<'_>) -> char {
    captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or(' ')
}

/// The completion policy: exactly lowercase `x` marks an item completed.
/// Uppercase `X` (or any other marker character) does not.
const fn is_completed(marker: char) -> bool {
    marker == 'x'
}

/// Groups classified lines into entries.
///
/// A single forward pass: each parent line consumes every immediately
/// contiguous child line after it. The first line failing the child pattern
/// terminates the run and is re-examined by the outer scan, so a blank line
/// between a parent and later indented lines orphans those lines.
fn parse(lines: &[String]) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let LineKind::Parent { marker, text } = classify(&lines[cursor]) else {
            cursor += 1;
            continue;
        };
        let parent = Item::new(text, is_completed(marker));

        let mut children = Vec::new();
        let mut next = cursor + 1;
        while next < lines.len() {
            let LineKind::Child { marker, text } = classify(&lines[next]) else {
                break;
            };
            children.push(Item::new(text, is_completed(marker)));
            next += 1;
        }

        entries.push(Entry { parent, children });
        cursor = next;
    }

    entries
}

/// Reads a checklist note from any buffered reader.
///
/// # Errors
///
/// Returns an error if a line cannot be read or decoded as UTF-8.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Entry>, LoadError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(parse(&lines))
}

/// Loads a checklist note from a file path.
///
/// The document title is the file stem of the path.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist, and
/// [`LoadError::Io`] for any other read or decode failure.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(io_error),
    })?;

    let entries = read(BufReader::new(file))?;
    Ok(Document::new(title_of(path), entries))
}

/// The note title for a path: its file stem, or the whole file name when
/// there is no stem to take.
#[must_use]
pub fn title_of(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map_or_else(|| "note".to_string(), |stem| stem.to_string_lossy().into_owned())
}

/// Errors that can occur when loading a checklist note.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The note file was not found.
    #[error("note file not found")]
    NotFound,
    /// The note could not be read or decoded as UTF-8.
    #[error("failed to read note: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::TempDir;

    use super::*;

    fn read_str(input: &str) -> Vec<Entry> {
        read(Cursor::new(input)).unwrap()
    }

    #[test]
    fn lowercase_x_is_completed() {
        let entries = read_str("- [x] done thing\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].parent.completed);
    }

    #[test]
    fn space_marker_is_not_completed() {
        let entries = read_str("- [ ] open thing\n");
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].parent.completed);
    }

    #[test]
    fn other_markers_are_not_completed() {
        // The policy is an exact match on lowercase 'x', not case-insensitive.
        for line in ["- [X] shouted\n", "- [-] dashed\n", "- [?] unsure\n"] {
            let entries = read_str(line);
            assert_eq!(entries.len(), 1, "line {line:?} should parse as an entry");
            assert!(!entries[0].parent.completed, "line {line:?} must stay open");
        }
    }

    #[test]
    fn multi_character_markers_are_not_items() {
        assert!(read_str("- [xx] too wide\n").is_empty());
        assert!(read_str("- [] too narrow\n").is_empty());
    }

    #[test]
    fn non_checklist_lines_are_dropped() {
        let input = "# Heading\n\nsome prose\n- a dash without a checkbox\n* [ ] wrong bullet\n";
        assert!(read_str(input).is_empty());
    }

    #[test]
    fn children_attach_in_file_order() {
        let input = "- [ ] Parent A\n  - [x] Child A1\n  - [ ] Child A2\n- [x] Parent B\n";
        let entries = read_str(input);

        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert!(!first.parent.completed);
        assert_eq!(first.children.len(), 2);
        assert_eq!(first.children[0].text, "Child A1");
        assert!(first.children[0].completed);
        assert_eq!(first.children[1].text, "Child A2");
        assert!(!first.children[1].completed);

        let second = &entries[1];
        assert!(second.parent.completed);
        assert!(second.children.is_empty());
    }

    #[test]
    fn any_leading_whitespace_marks_a_child() {
        let input = "- [ ] parent\n\t- [ ] tabbed\n    - [x] four spaces\n - [ ] one space\n";
        let entries = read_str(input);

        assert_eq!(entries.len(), 1);
        let children: Vec<&str> = entries[0]
            .children
            .iter()
            .map(|child| child.text.as_str())
            .collect();
        assert_eq!(children, ["tabbed", "four spaces", "one space"]);
    }

    #[test]
    fn blank_line_terminates_a_child_run() {
        let input = "- [ ] parent\n  - [ ] attached\n\n  - [ ] orphaned\n";
        let entries = read_str(input);

        // The orphaned indented line follows a non-child line, so the outer
        // scan skips it without creating an entry.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].children.len(), 1);
        assert_eq!(entries[0].children[0].text, "attached");
    }

    #[test]
    fn prose_terminates_a_child_run_and_is_reexamined() {
        let input = "- [ ] first\n  - [ ] child\nnot a checklist line\n- [ ] second\n";
        let entries = read_str(input);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].children.len(), 1);
        assert_eq!(entries[1].parent.text, "second");
    }

    #[test]
    fn leading_orphan_children_are_skipped() {
        let input = "  - [ ] floating child\n- [ ] parent\n";
        let entries = read_str(input);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].parent.text, "parent");
        assert!(entries[0].children.is_empty());
    }

    #[test]
    fn links_are_extracted_during_parsing() {
        let input = "- [ ] Read [Design Doc](https://example.com/doc)\n";
        let entries = read_str(input);

        let link = entries[0].parent.link.as_ref().unwrap();
        assert_eq!(link.title, "Design Doc");
        assert_eq!(link.url, "https://example.com/doc");
    }

    #[test]
    fn trailing_whitespace_and_cr_are_tolerated() {
        let input = "- [x] crlf line\r\n- [ ] padded line   \n";
        let entries = read_str(input);

        assert_eq!(entries.len(), 2);
        assert!(entries[0].parent.completed);
        assert_eq!(entries[0].parent.text, "crlf line");
        assert_eq!(entries[1].parent.text, "padded line");
    }

    #[test]
    fn empty_note_parses_to_empty_document() {
        assert!(read_str("").is_empty());
        assert!(read_str("# Only a heading\n\nand prose\n").is_empty());
    }

    #[test]
    fn load_builds_title_from_file_stem() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reading.md");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"- [ ] Parent A\n  - [x] Child A1\n").unwrap();

        let document = load(&path).unwrap();
        assert_eq!(document.title(), "reading");
        assert_eq!(document.entries().len(), 1);
        assert_eq!(document.entries()[0].children.len(), 1);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = load(&tmp.path().join("missing.md"));
        assert!(matches!(result, Err(LoadError::NotFound)));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let result = read(Cursor::new(b"- [ ] fine\n\xff\xfe broken\n".as_slice()));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
