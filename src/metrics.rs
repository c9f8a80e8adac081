use crate::font::{encode_winansi, FontFamily, SpanFont};
use crate::units::Pt;
use std::borrow::Cow;

/// Measures text for layout. Implemented by [FontBook](crate::FontBook) for real
/// faces; anything that can report string widths will do.
pub trait Metrics {
    /// Rendered width of `text` set in `font`
    fn width_of(&self, text: &str, font: SpanFont) -> Pt;

    /// Divisor turning a font size into a line height in page units
    fn scale_factor(&self) -> f32 {
        1.0
    }

    /// Vertical distance between consecutive baselines of `font`
    fn line_height(&self, font: SpanFont) -> Pt {
        font.size / self.scale_factor()
    }

    /// Font-specific character substitution applied before text is measured or
    /// drawn. The base-14 families only know WinAnsi.
    fn encode<'t>(&self, text: &'t str, family: FontFamily) -> Cow<'t, str> {
        if family.requires_encoding() {
            encode_winansi(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}
