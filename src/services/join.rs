//! Line joining for the "Join Lines" page.
//!
//! Splits raw text on every line boundary the input may contain, drops lines that are
//! blank once trimmed, and joins what is left with [`SEPARATOR`].
//!
//! # Examples
//!
//! ```
//! use text_utils::services::join_lines;
//!
//! assert_eq!(join_lines("a\n\nb\n  \nc"), "a; b; c");
//! assert_eq!(join_lines(""), "");
//! ```
//!
//! Joining is not idempotent in general: a surviving line that already contains
//! `"; "` cannot be told apart from two joined lines afterwards.

/// Separator placed between surviving lines
pub const SEPARATOR: &str = "; ";

/// Returns true if `c` ends a line.
///
/// Covers `\n`, `\r` (and therefore `\r\n`), vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// `\r\n` counts as a single boundary. A trailing terminator does not yield an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }

        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();

        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Iterate over the lines of `text` that are not blank after trimming.
///
/// Lines are yielded untrimmed, in input order, duplicates included.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    split_lines(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
}

/// Join the non-blank lines of `raw_text` with [`SEPARATOR`].
///
/// Total over all inputs. Returns an empty string when no line survives.
pub fn join_lines(raw_text: &str) -> String {
    non_blank_lines(raw_text).collect::<Vec<_>>().join(SEPARATOR)
}
