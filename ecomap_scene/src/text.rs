// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximate text metrics and line clamping.
//!
//! There is no font shaping here. Widths are estimated from an average glyph
//! advance, which is good enough to decide where a label wraps and when it
//! needs an ellipsis.

/// Font weight used by text nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular body text.
    #[default]
    Normal,
    /// Medium emphasis.
    Medium,
    /// Semi-bold headings.
    SemiBold,
    /// Bold headings.
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    #[must_use]
    pub const fn css(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }

    /// Average glyph advance as a fraction of the font size.
    const fn advance(self) -> f64 {
        match self {
            Self::Normal => 0.52,
            Self::Medium => 0.55,
            Self::SemiBold | Self::Bold => 0.58,
        }
    }
}

const ELLIPSIS: char = '\u{2026}';

/// Estimated width of `text` at `font_size`.
#[must_use]
pub fn measure(text: &str, font_size: f64, weight: FontWeight) -> f64 {
    text.chars().count() as f64 * font_size * weight.advance()
}

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Words are kept whole when they fit; a single word wider than a line is
/// broken by characters. When the text does not fit, the last kept line ends
/// with an ellipsis. `max_lines == 0` yields no lines.
#[must_use]
pub fn clamp_lines(
    text: &str,
    font_size: f64,
    weight: FontWeight,
    max_width: f64,
    max_lines: usize,
) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }
    let per_char = font_size * weight.advance();
    let max_chars = if per_char > 0.0 {
        ((max_width / per_char).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let lines = wrap(text, max_chars);
    if lines.len() <= max_lines {
        return lines;
    }

    let mut kept: Vec<String> = lines.into_iter().take(max_lines).collect();
    if let Some(last) = kept.last_mut() {
        let mut chars: Vec<char> = last.chars().collect();
        while chars.len() + 1 > max_chars && !chars.is_empty() {
            chars.pop();
        }
        while chars.last().is_some_and(|c| c.is_whitespace()) {
            chars.pop();
        }
        chars.push(ELLIPSIS);
        *last = chars.into_iter().collect();
    }
    kept
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        let sep = usize::from(current_len > 0);
        if current_len + sep + word.len() <= max_chars {
            if sep == 1 {
                current.push(' ');
            }
            current.extend(word.iter());
            current_len += sep + word.len();
            continue;
        }
        if current_len > 0 {
            lines.push(core::mem::take(&mut current));
            current_len = 0;
        }
        while word.len() > max_chars {
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current_len = word.len();
        current = word.into_iter().collect();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        let lines = clamp_lines("Ref Finance", 14.0, FontWeight::Normal, 200.0, 2);
        assert_eq!(lines, ["Ref Finance"]);
    }

    #[test]
    fn long_text_wraps_then_ellipsizes() {
        // 10 characters per line.
        let max_width = 10.0 * 10.0 * FontWeight::Normal.advance();
        let lines = clamp_lines(
            "alpha beta gamma delta epsilon",
            10.0,
            FontWeight::Normal,
            max_width,
            2,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "alpha beta");
        assert!(lines[1].ends_with(ELLIPSIS));
        assert!(lines[1].chars().count() <= 10);
    }

    #[test]
    fn oversized_words_are_broken() {
        let max_width = 4.0 * 10.0 * FontWeight::Normal.advance();
        let lines = clamp_lines("abcdefghij", 10.0, FontWeight::Normal, max_width, 5);
        assert_eq!(lines, ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn zero_lines_is_empty() {
        assert!(clamp_lines("anything", 12.0, FontWeight::Bold, 100.0, 0).is_empty());
        assert!(clamp_lines("   ", 12.0, FontWeight::Bold, 100.0, 2).is_empty());
    }
}
