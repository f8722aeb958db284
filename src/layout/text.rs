//! Fonts, text measurement and word wrapping

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A font description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name, e.g. `HelveticaNeue`
    pub family: String,
    /// Point size
    pub size: f64,
    /// Whether the face is bold
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    /// A regular-weight font
    #[must_use]
    pub fn regular(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// A bold font
    #[must_use]
    pub fn bold(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: true,
        }
    }
}

/// Measures how tall a piece of text is once wrapped to a width.
pub trait TextMeasurer {
    /// Height in points of `text` set in `font` and wrapped at `max_width` points.
    ///
    /// The result is not rounded; callers round up to whole points.
    fn measure_height(&self, text: &str, font: &Font, max_width: f64) -> f64;
}

/// Measurer that treats every font as monospaced.
///
/// Each column is `advance_ratio × size` points wide and each line is
/// `line_height_ratio × size` points tall. Wrapping follows [`wrap_lines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Column width as a fraction of the point size
    pub advance_ratio: f64,
    /// Line height as a multiple of the point size
    pub line_height_ratio: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl MonospaceMeasurer {
    /// Number of columns that fit in `max_width` points
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "floored and clamped to at least one column"
    )]
    pub fn columns(&self, font: &Font, max_width: f64) -> usize {
        let advance = font.size * self.advance_ratio;
        if advance <= 0.0 {
            return 1;
        }
        (max_width / advance).floor().max(1.0) as usize
    }

    /// Height of one line in points
    #[must_use]
    pub fn line_height(&self, font: &Font) -> f64 {
        font.size * self.line_height_ratio
    }
}

impl TextMeasurer for MonospaceMeasurer {
    #[expect(
        clippy::cast_precision_loss,
        reason = "line counts are far below f64's exact integer range"
    )]
    fn measure_height(&self, text: &str, font: &Font, max_width: f64) -> f64 {
        let lines = wrap_lines(text, self.columns(font, max_width)).len();
        lines as f64 * self.line_height(font)
    }
}

/// Greedy word wrap by display width.
///
/// Explicit newlines start a new line (blank lines are kept), runs of
/// whitespace collapse to one space and words wider than `max_width` are
/// split across lines. A zero width yields no lines.
#[must_use]
pub fn wrap_lines(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if current_width > 0 && current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Hard-break a word that cannot fit on a line of its own
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > max_width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}
