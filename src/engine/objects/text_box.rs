use crate::engine::geometry::{TEXT_BOX, TEXT_BOX_BORDER, TEXT_LINE_SPACING, TEXT_PADDING};
use crate::engine::palette;
use crate::types::{DrawOp, Point};

use super::Draw;
use super::font;

/// Greedy word wrap.
///
/// Words are measured with a trailing space and accumulated while the running
/// width stays strictly below `max_width`. The overflowing word starts the next
/// line. A word that is wider than `max_width` on its own ends up alone on its
/// line; no empty lines are produced.
pub fn wrap_words(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = measure(&format!("{word} "));
        if current_width + word_width < max_width {
            current.push(word);
            current_width += word_width;
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
            }
            current = vec![word];
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// The bordered message box at the bottom of the screen.
pub struct TextBox<'a> {
    pub message: &'a str,
}

impl TextBox<'_> {
    pub fn lines(&self) -> Vec<String> {
        wrap_words(
            self.message,
            TEXT_BOX.width - 2 * TEXT_PADDING,
            font::text_width,
        )
    }
}

impl Draw for TextBox<'_> {
    fn draw(&self, ops: &mut Vec<DrawOp>) {
        ops.push(DrawOp::FillRect {
            rect: TEXT_BOX,
            color: palette::DARK_GRAY,
        });
        ops.push(DrawOp::StrokeRect {
            rect: TEXT_BOX,
            color: palette::PAPER_WHITE,
            thickness: TEXT_BOX_BORDER,
        });
        for (i, line) in self.lines().into_iter().enumerate() {
            ops.push(DrawOp::Text {
                at: Point::new(
                    TEXT_BOX.x + TEXT_PADDING,
                    TEXT_BOX.y + TEXT_PADDING + i as i32 * TEXT_LINE_SPACING,
                ),
                text: line,
                color: palette::PAPER_WHITE,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::{DESK_MESSAGE, NAIL_BUNNY_MESSAGE};
    use super::font::text_width;

    fn words_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn lines_stay_under_the_limit() {
        for message in [DESK_MESSAGE, NAIL_BUNNY_MESSAGE] {
            let lines = wrap_words(message, 680, text_width);
            for line in &lines {
                assert!(text_width(line) < 680, "too wide: {line:?}");
            }
            assert_eq!(words_of(&lines), words_of(&[message.to_string()]));
        }
    }

    #[test]
    fn generated_texts_wrap_within_limit_or_alone() {
        let alphabet: Vec<char> = ('a'..='z').collect();
        for seed in 0..40usize {
            let words: Vec<String> = (0..25)
                .map(|i| {
                    let len = (i * 7 + seed * 3) % 13 + 1;
                    (0..len).map(|j| alphabet[(i + j + seed) % 26]).collect()
                })
                .collect();
            let text = words.join(" ");

            for max_width in (20..=320).step_by(17) {
                let lines = wrap_words(&text, max_width, text_width);
                assert_eq!(words_of(&lines), words, "words lost at width {max_width}");
                for line in &lines {
                    assert!(!line.is_empty());
                    let single = !line.contains(' ');
                    assert!(
                        text_width(line) < max_width || single,
                        "{line:?} overflows {max_width}"
                    );
                }
                // greedy: the next line's first word would not have fit
                for pair in lines.windows(2) {
                    let next = pair[1].split(' ').next().unwrap_or_default();
                    let joined = format!("{} {next} ", pair[0]);
                    assert!(text_width(&joined) >= max_width, "{pair:?} at {max_width}");
                }
            }
        }
    }

    #[test]
    fn nail_bunny_message_needs_two_lines() {
        let lines = TextBox { message: NAIL_BUNNY_MESSAGE }.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(TextBox { message: DESK_MESSAGE }.lines().len(), 1);
    }

    #[test]
    fn oversized_word_sits_alone() {
        let lines = wrap_words("a bbbbbbbbbbbb c", 50, text_width);
        assert_eq!(lines, vec!["a", "bbbbbbbbbbbb", "c"]);

        let lines = wrap_words("bbbbbbbbbbbb", 50, text_width);
        assert_eq!(lines, vec!["bbbbbbbbbbbb"]);
    }

    #[test]
    fn width_limit_is_strict() {
        // "ab " and "cd " are 30 each; together they hit 60, which is not < 60
        assert_eq!(wrap_words("ab cd", 60, text_width), vec!["ab", "cd"]);
        assert_eq!(wrap_words("ab cd", 61, text_width), vec!["ab cd"]);
    }

    #[test]
    fn empty_message_has_no_lines() {
        assert!(wrap_words("   ", 100, text_width).is_empty());
    }

    #[test]
    fn draws_box_border_then_lines() {
        let mut ops = Vec::new();
        TextBox { message: NAIL_BUNNY_MESSAGE }.draw(&mut ops);
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[1], DrawOp::StrokeRect { thickness: 2, .. }));
        match &ops[3] {
            DrawOp::Text { at, .. } => assert_eq!(*at, Point::new(60, 520)),
            other => panic!("expected text, got {other:?}"),
        }
    }
}
