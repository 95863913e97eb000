//! Text layout and line breaking
//!
//! Greedy word wrapping against the Helvetica width tables. A word is added
//! to the current line unless the line would then exceed the width budget and
//! already holds at least one word. Words wider than the budget are never
//! split; they get a line of their own and overflow the column.

use crate::font_metrics::StandardFont;
use crate::types::FontWeight;

/// A single wrapped line and its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f64,
}

/// Line breaker for wrapping text
pub struct LineBreaker {
    max_width: f64,
}

impl LineBreaker {
    pub fn new(max_width: f64) -> Self {
        Self { max_width }
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Break `text` into lines no wider than the budget.
    ///
    /// Runs of whitespace collapse to a single space. Newlines are hard
    /// breaks: each newline-separated segment is wrapped on its own, and
    /// blank segments produce no lines.
    pub fn break_text(&self, text: &str, weight: FontWeight, font_size: f64) -> Vec<TextLine> {
        let font = StandardFont::for_weight(weight);
        let space_width = font.text_width(" ", font_size);
        let mut lines = Vec::new();

        for segment in text.lines() {
            let mut current = String::new();
            let mut current_width = 0.0;

            for word in segment.split_whitespace() {
                let word_width = font.text_width(word, font_size);

                if current.is_empty() {
                    current.push_str(word);
                    current_width = word_width;
                    continue;
                }

                let needed_width = current_width + space_width + word_width;
                if needed_width > self.max_width {
                    lines.push(TextLine {
                        text: std::mem::take(&mut current),
                        width: current_width,
                    });
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    current.push(' ');
                    current.push_str(word);
                    current_width = needed_width;
                }
            }

            if !current.is_empty() {
                lines.push(TextLine {
                    text: current,
                    width: current_width,
                });
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_metrics::measure;
    use pretty_assertions::assert_eq;

    const LOREM: &str = "Regenerative soil programmes pair agronomic data with \
        long-term offtake agreements so that growers can invest in cover crops, \
        reduced tillage and biological inputs without carrying the transition \
        risk alone. The platform aggregates field telemetry across partner farms.";

    #[test]
    fn test_lines_fit_budget() {
        let breaker = LineBreaker::new(495.0);
        let lines = breaker.break_text(LOREM, FontWeight::Regular, 10.5);
        assert!(lines.len() > 1);
        for line in &lines {
            let measured = measure(&line.text, FontWeight::Regular, 10.5);
            assert!(measured <= 495.0, "line too wide: {} ({})", line.text, measured);
            assert!((measured - line.width).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rejoined_lines_reproduce_words() {
        let breaker = LineBreaker::new(200.0);
        let lines = breaker.break_text(LOREM, FontWeight::Regular, 10.5);
        let rejoined: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        let expected: Vec<&str> = LOREM.split_whitespace().collect();
        assert_eq!(rejoined.join(" ").split(' ').collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_greedy_fills_each_line() {
        let breaker = LineBreaker::new(300.0);
        let lines = breaker.break_text(LOREM, FontWeight::Regular, 10.5);
        // Every line but the last must be unable to take the next line's first word.
        for pair in lines.windows(2) {
            let next_word = pair[1].text.split(' ').next().unwrap();
            let extended = format!("{} {}", pair[0].text, next_word);
            assert!(measure(&extended, FontWeight::Regular, 10.5) > 300.0);
        }
    }

    #[test]
    fn test_overwide_word_is_not_split() {
        let breaker = LineBreaker::new(60.0);
        let url = "https://example.com/a/very/long/unbroken/path";
        let lines = breaker.break_text(&format!("see {} now", url), FontWeight::Regular, 10.0);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["see", url, "now"]);
        assert!(lines[1].width > 60.0);
    }

    #[test]
    fn test_single_overwide_word_on_empty_line() {
        let breaker = LineBreaker::new(10.0);
        let lines = breaker.break_text("Supercalifragilistic", FontWeight::Bold, 12.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Supercalifragilistic");
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        let breaker = LineBreaker::new(495.0);
        assert!(breaker.break_text("", FontWeight::Regular, 10.5).is_empty());
        assert!(breaker.break_text("   \n\t ", FontWeight::Regular, 10.5).is_empty());
    }

    #[test]
    fn test_hard_breaks_and_collapsed_whitespace() {
        let breaker = LineBreaker::new(495.0);
        let lines = breaker.break_text("First   line\n\nSecond\tline", FontWeight::Regular, 10.5);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["First line", "Second line"]);
    }

    #[test]
    fn test_accented_lines_fit_budget() {
        let breaker = LineBreaker::new(495.0);
        let text = "ÆÜÉ ".repeat(60);
        let lines = breaker.break_text(&text, FontWeight::Regular, 10.5);
        assert!(lines.len() > 1);
        for line in &lines {
            // 'Æ' + 'Ü' + 'É' = 1000 + 722 + 667 units per word
            let words = line.text.split(' ').count() as f64;
            let expected = (words * 2389.0 + (words - 1.0) * 278.0) * 10.5 / 1000.0;
            assert!((line.width - expected).abs() < 1e-6);
            assert!(line.width <= 495.0);
        }
    }
}
