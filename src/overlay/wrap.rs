//! Word wrapping for text labels.

use bevy::prelude::*;

use crate::constants::{LABEL_LINE_HEIGHT, LABEL_WORDS_PER_LINE};

/// Split `text` on single spaces and regroup every `words_per_line` words into one line.
///
/// Splitting is on literal `' '` so consecutive spaces survive as empty words,
/// the same way the label was typed. A `words_per_line` of zero is treated as one.
pub fn wrap_words(text: &str, words_per_line: usize) -> Vec<String> {
    let words: Vec<&str> = text.split(' ').collect();
    words
        .chunks(words_per_line.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Lines of a label paired with their offset from the label anchor.
pub fn layout_label(content: &str, font_size: f32) -> Vec<(String, Vec2)> {
    wrap_words(content, LABEL_WORDS_PER_LINE)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let dy = i as f32 * font_size * LABEL_LINE_HEIGHT;
            (line, Vec2::new(0.0, dy))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_seven_words_into_two_lines() {
        let lines = wrap_words("a b c d e f g", 5);
        assert_eq!(lines, vec!["a b c d e".to_string(), "f g".to_string()]);
    }

    #[test]
    fn test_wrap_exact_multiple() {
        let lines = wrap_words("one two three four five six", 3);
        assert_eq!(lines, vec!["one two three", "four five six"]);
    }

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(wrap_words("Hello World", 5), vec!["Hello World"]);
    }

    #[test]
    fn test_wrap_zero_words_per_line() {
        assert_eq!(wrap_words("a b", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_layout_offsets_by_line_height() {
        let layout = layout_label("a b c d e f g h i j k", 20.0);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0].1, Vec2::ZERO);
        assert!((layout[1].1.y - 24.0).abs() < 1e-4);
        assert!((layout[2].1.y - 48.0).abs() < 1e-4);
        assert_eq!(layout[2].0, "k");
    }
}
