//! Text Measurement
//!
//! Utilities for measuring and wrapping text in terminal cells.
//!
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells
//! - Control and zero-width characters: 0 cells
//!
//! Widths come from `unicode-width`; grapheme and word boundaries from
//! `unicode-segmentation`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint in terminal cells.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Emoji blocks render wide in practically every terminal
        0x2600..=0x27BF | 0x1F300..=0x1F64F | 0x1F680..=0x1F6FF | 0x1F900..=0x1F9FF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster.
///
/// A base character followed by combining marks takes the base's width.
/// ZWJ sequences and emoji presentation selectors are treated as one wide glyph.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    let is_emoji_sequence = grapheme.chars().any(|c| c == '\u{200D}' || c == '\u{FE0F}');
    if is_emoji_sequence {
        return 2;
    }

    char_width(first)
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Word-wrap a single line of text to `max_width` cells.
///
/// Breaks at word boundaries; a word wider than the line is broken between
/// graphemes. Whitespace at a wrap point is dropped and no row after the first
/// starts with whitespace, so every row has visible content. Empty input gives
/// an empty `Vec`; a zero width disables wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for segment in text.split_word_bounds() {
        let seg_width = string_width(segment);
        let is_space = segment.chars().all(char::is_whitespace);

        if is_space && current.is_empty() && !lines.is_empty() {
            continue;
        }

        if current_width + seg_width > max_width {
            if current_width > 0 {
                push_row(&mut lines, &current);
                current.clear();
                current_width = 0;
            }

            if is_space {
                continue;
            }

            if seg_width > max_width {
                for grapheme in segment.graphemes(true) {
                    let width = grapheme_width(grapheme);
                    if current_width + width > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push_str(grapheme);
                    current_width += width;
                }
                continue;
            }
        }

        current.push_str(segment);
        current_width += seg_width;
    }

    push_row(&mut lines, &current);
    lines
}

fn push_row(lines: &mut Vec<String>, row: &str) {
    let row = row.trim_end();
    if !row.is_empty() {
        lines.push(row.to_string());
    }
}
