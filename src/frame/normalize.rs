//! Frame normalization: square a set of raw art blocks.
//!
//! Figures are animated by redrawing the whole screen each frame, so every
//! frame in a set must occupy the same character grid or the figure visibly
//! jitters. Normalization pads each frame to the union bounding box of the
//! whole set rather than each frame's own bounding box.

use unicode_width::UnicodeWidthStr;

use crate::error::Error;

/// Normalize a set of raw frame blocks into equal-sized frames.
///
/// Each block is independently stripped of its common leading indentation
/// and of leading/trailing blank lines. Every remaining line is then
/// right-padded with spaces to the maximum display width found across
/// *all* frames, and blank lines are appended until every frame reaches
/// the maximum line count. Lines are joined with `\n`.
///
/// Normalizing already-normalized output is a no-op (byte-identical).
///
/// # Errors
///
/// Returns [`Error::EmptyFrameSet`] if `raw_frames` is empty, and
/// [`Error::BlankFrame`] if any block has no visible content left after
/// trimming; both would leave the target grid size undefined.
pub fn normalize_frames<S: AsRef<str>>(raw_frames: &[S]) -> Result<Vec<String>, Error> {
    if raw_frames.is_empty() {
        return Err(Error::EmptyFrameSet);
    }

    let mut split_frames = Vec::with_capacity(raw_frames.len());
    for (index, raw) in raw_frames.iter().enumerate() {
        let lines = dedent_lines(raw.as_ref());
        if lines.is_empty() {
            return Err(Error::BlankFrame { index });
        }
        split_frames.push(lines);
    }

    // Union bounding box across the whole set, not per frame.
    let width = split_frames
        .iter()
        .flatten()
        .map(|line| line.width())
        .max()
        .unwrap_or(0);
    let height = split_frames.iter().map(Vec::len).max().unwrap_or(0);

    let mut normalized = Vec::with_capacity(split_frames.len());
    for lines in &split_frames {
        let mut padded: Vec<String> = lines.iter().map(|line| pad_line(line, width)).collect();
        while padded.len() < height {
            padded.push(" ".repeat(width));
        }
        normalized.push(padded.join("\n"));
    }
    Ok(normalized)
}

/// Strip the common leading indentation of a block and trim surrounding
/// blank lines.
///
/// Whitespace-only lines are ignored when computing the common prefix and
/// are normalized to empty, so interior spacer lines never pin the indent
/// at zero.
fn dedent_lines(block: &str) -> Vec<String> {
    let mut prefix: Option<&str> = None;
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent_end = line.len() - line.trim_start().len();
        let indent = &line[..indent_end];
        prefix = Some(match prefix {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let prefix = prefix.unwrap_or("");

    let mut lines: Vec<String> = block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.strip_prefix(prefix).unwrap_or(line).to_owned()
            }
        })
        .collect();

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Longest shared prefix of two indentation strings.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(left, right)| left == right)
        .count();
    &a[..len]
}

/// Right-pad a line with spaces to the target display width.
fn pad_line(line: &str, width: usize) -> String {
    let deficit = width.saturating_sub(line.width());
    let mut padded = String::with_capacity(line.len() + deficit);
    padded.push_str(line);
    padded.extend(std::iter::repeat(' ').take(deficit));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dimensions(frame: &str) -> (usize, usize) {
        let height = frame.lines().count();
        let width = frame.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        (height, width)
    }

    #[test]
    fn test_uniform_dimensions() {
        let raw = [
            "\n    ab\n    cdef\n",
            "\n        x\n        y\n        z\n",
            "\n  longest line here\n",
        ];
        let frames = normalize_frames(&raw).unwrap();

        let first = dimensions(&frames[0]);
        for frame in &frames[1..] {
            assert_eq!(first, dimensions(frame));
        }
        assert_eq!(first, (3, 17)); // "longest line here"
    }

    #[test]
    fn test_every_line_padded_to_width() {
        let frames = normalize_frames(&["a\nbb\nccc"]).unwrap();
        for line in frames[0].lines() {
            assert_eq!(line.len(), 3);
        }
    }

    #[test]
    fn test_idempotent() {
        let raw = ["\n   /\\\n  /--\\\n", "\n   ||\n"];
        let once = normalize_frames(&raw).unwrap();
        let twice = normalize_frames(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_rejected() {
        let raw: [&str; 0] = [];
        assert!(matches!(
            normalize_frames(&raw),
            Err(Error::EmptyFrameSet)
        ));
    }

    #[test]
    fn test_blank_frame_rejected() {
        let raw = ["ok", "\n   \n \n"];
        assert!(matches!(
            normalize_frames(&raw),
            Err(Error::BlankFrame { index: 1 })
        ));
    }

    #[test]
    fn test_interior_blank_line_kept_and_padded() {
        let frames = normalize_frames(&["  top\n\n  bottom"]).unwrap();
        let lines: Vec<&str> = frames[0].lines().collect();
        assert_eq!(lines, vec!["top   ", "      ", "bottom"]);
    }

    #[test]
    fn test_common_indent_stripped_per_block() {
        let frames = normalize_frames(&["    a\n     b", "  c"]).unwrap();
        // First block shares 4 columns of indent, second shares 2.
        assert_eq!(frames[0].lines().next().unwrap().trim_end(), "a");
        assert_eq!(frames[1].lines().next().unwrap().trim_end(), "c");
    }

    #[test]
    fn test_wide_characters_measured_by_display_width() {
        let frames = normalize_frames(&["日本", "abcd"]).unwrap();
        // Both render four columns wide: no padding needed on either.
        assert_eq!(frames[0], "日本");
        assert_eq!(frames[1], "abcd");
    }
}
