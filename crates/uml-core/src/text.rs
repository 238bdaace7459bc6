//! Text measurement used by text-sized shapes.

/// Font every diagram uses for labels and compartments.
pub const FONT: &str = "13px Arial";

/// Bold variant for shape titles.
pub const TITLE_FONT: &str = "bold 13px Arial";

/// Measures the advance width of a single line of text in [`FONT`].
///
/// The browser build measures with the canvas; headless callers use
/// [`FixedAdvance`].
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f64;

    /// Width in the bold face used for shape titles.
    fn title_width(&self, text: &str) -> f64 {
        self.text_width(text)
    }
}

/// Every character advances by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub char_width: f64,
}

impl FixedAdvance {
    /// Average advance of 13px Arial.
    pub const ARIAL_13: FixedAdvance = FixedAdvance { char_width: 7.0 };

    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::ARIAL_13
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str) -> f64 {
        (**self).text_width(text)
    }

    fn title_width(&self, text: &str) -> f64 {
        (**self).title_width(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let m = FixedAdvance::new(10.0);
        assert_eq!(m.text_width("abc"), 30.0);
        assert_eq!(m.text_width("año"), 30.0);
        assert_eq!(m.text_width(""), 0.0);
    }
}
