use crate::metrics::Metrics;
use crate::style::{Align, TextStyle};
use crate::surface::GridSurface;
use crate::units::Pt;
use crate::SpanFont;
use derive_more::{Deref, Into};
use tracing::trace;

/// Appended after every token when tokens are packed into lines
const SEPARATOR: char = ' ';

/// The lines a piece of text was broken into, in reading order. There is always
/// at least one line, even for empty text.
#[derive(Debug, Clone, PartialEq, Deref, Into)]
pub struct WrapResult {
    lines: Vec<String>,
}

impl WrapResult {
    fn single(line: String) -> WrapResult {
        WrapResult { lines: vec![line] }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Splits text into tokens that each fit within `width`, measuring character by
/// character. A character that doesn't fit on its own still becomes a token.
///
/// Tokens ignore whitespace entirely, which is what lets scripts without spaces
/// between words (Chinese, Japanese, …) break at all.
fn segment<'t, M: Metrics + ?Sized>(
    metrics: &M,
    text: &'t str,
    font: SpanFont,
    width: Pt,
) -> Vec<&'t str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        if i > start && metrics.width_of(&text[start..i + ch.len_utf8()], font) > width {
            tokens.push(&text[start..i]);
            start = i;
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Greedily packs tokens into lines, a separator after each. A token always lands
/// on a line by itself if the line is empty.
fn reflow<M: Metrics + ?Sized>(
    metrics: &M,
    tokens: &[&str],
    font: SpanFont,
    width: Pt,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = Pt(0.0);

    for token in tokens {
        let mut padded = String::with_capacity(token.len() + 1);
        padded.push_str(token);
        padded.push(SEPARATOR);
        let padded_width = metrics.width_of(&padded, font);

        if !line.is_empty() && line_width + padded_width >= width {
            lines.push(close_line(std::mem::take(&mut line)));
            line_width = Pt(0.0);
        }

        line.push_str(&padded);
        line_width += padded_width;
    }
    if !line.is_empty() {
        lines.push(close_line(line));
    }

    lines
}

fn close_line(mut line: String) -> String {
    line.truncate(line.trim_end().len());
    line
}

/// Break `text` into the lines it occupies when set in `style` within `width`.
///
/// Text that already fits, or whose style asks to
/// [extrapolate](TextStyle::extrapolate), comes back as a single line. Anything
/// else is split into width-exact tokens, which are then packed greedily into
/// lines. Text is passed through [Metrics::encode] first, so the lines are what
/// should actually be drawn.
pub fn wrap_text<M: Metrics + ?Sized>(
    metrics: &M,
    text: &str,
    style: &TextStyle,
    width: Pt,
) -> WrapResult {
    let font = style.span_font();
    let text = metrics.encode(text, style.family);

    if text.is_empty() || style.extrapolate || metrics.width_of(&text, font) < width {
        return WrapResult::single(text.into_owned());
    }

    let tokens = segment(metrics, &text, font, width);
    let lines = reflow(metrics, &tokens, font, width);
    trace!(tokens = tokens.len(), lines = lines.len(), "wrapped text");

    WrapResult { lines }
}

/// The number of lines [wrap_text] would produce, without building them where
/// possible. Used to size table rows before anything is drawn.
pub fn count_lines<M: Metrics + ?Sized>(
    metrics: &M,
    text: &str,
    style: &TextStyle,
    width: Pt,
) -> usize {
    let font = style.span_font();
    let text = metrics.encode(text, style.family);

    if text.is_empty() || style.extrapolate || metrics.width_of(&text, font) < width {
        return 1;
    }

    let tokens = segment(metrics, &text, font, width);
    if tokens.len() == 1 {
        return 1;
    }

    reflow(metrics, &tokens, font, width).len()
}

/// Horizontal offset of a line of text within its cell
fn align_offset(align: Align, cell_width: Pt, text_width: Pt) -> Pt {
    match align {
        Align::Left => Pt(0.0),
        Align::Center => (cell_width - text_width) / 2.0,
        Align::Right => cell_width - text_width,
    }
}

/// Wrap `text` into the surface's current cell and draw it one line at a time.
///
/// The first baseline sits one line height below `style.top`; each following line
/// is a line height plus the style's vertical padding further down.
pub fn draw_text<M, S>(metrics: &M, surface: &mut S, text: &str, style: &TextStyle)
where
    M: Metrics + ?Sized,
    S: GridSurface,
{
    let cell = surface.current_cell();
    let font = style.span_font();
    let line_height = metrics.line_height(font);
    let baseline = cell.y + style.top + line_height;

    let lines = wrap_text(metrics, text, style, cell.width);
    for (index, line) in lines.iter().enumerate() {
        let line_width = metrics.width_of(line, font);
        let x = cell.x + align_offset(style.align, cell.width, line_width);
        let y = baseline + (line_height + style.vertical_padding) * index as f32;
        surface.draw_text(line, (x, y), style);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::FontFamily;

    /// 5pt per ASCII character and 10pt per anything wider, at any size
    struct Fixed;

    impl Metrics for Fixed {
        fn width_of(&self, text: &str, _font: SpanFont) -> Pt {
            text.chars()
                .map(|ch| if ch.is_ascii() { Pt(5.0) } else { Pt(10.0) })
                .sum()
        }
    }

    fn embedded() -> TextStyle {
        TextStyle {
            family: FontFamily::Embedded(0),
            ..Default::default()
        }
    }

    #[test]
    fn short_text_is_returned_as_is() {
        let style = TextStyle::default();
        let lines = wrap_text(&Fixed, "Alice", &style, Pt(100.0));
        assert_eq!(lines.into_lines(), vec!["Alice".to_string()]);
        assert_eq!(count_lines(&Fixed, "Alice", &style, Pt(100.0)), 1);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let style = TextStyle::default();
        assert_eq!(wrap_text(&Fixed, "", &style, Pt(0.0)).len(), 1);
        assert_eq!(wrap_text(&Fixed, "", &style, Pt(0.0))[0], "");
        assert_eq!(count_lines(&Fixed, "", &style, Pt(0.0)), 1);
    }

    #[test]
    fn extrapolate_forces_a_single_line() {
        let style = TextStyle {
            extrapolate: true,
            ..Default::default()
        };
        let text = "far too long to fit in a narrow column";
        assert_eq!(wrap_text(&Fixed, text, &style, Pt(20.0)).len(), 1);
        assert_eq!(count_lines(&Fixed, text, &style, Pt(20.0)), 1);
    }

    #[test]
    fn spaced_text_breaks_into_fitting_lines() {
        let style = TextStyle::default();
        let lines = wrap_text(&Fixed, "hello world", &style, Pt(30.0));
        assert_eq!(lines.into_lines(), vec!["hello", "world"]);
        assert_eq!(count_lines(&Fixed, "hello world", &style, Pt(30.0)), 2);
    }

    #[test]
    fn unspaced_text_still_breaks() {
        let style = embedded();
        let lines = wrap_text(&Fixed, "漢字漢字漢字漢字", &style, Pt(35.0));
        assert_eq!(lines.into_lines(), vec!["漢字漢", "字漢字", "漢字"]);
        assert_eq!(count_lines(&Fixed, "漢字漢字漢字漢字", &style, Pt(35.0)), 3);
    }

    #[test]
    fn overwide_character_is_its_own_token() {
        let style = embedded();
        let lines = wrap_text(&Fixed, "漢字", &style, Pt(3.0));
        assert_eq!(lines.into_lines(), vec!["漢", "字"]);
        assert_eq!(count_lines(&Fixed, "漢", &style, Pt(3.0)), 1);
    }

    #[test]
    fn text_is_encoded_before_wrapping() {
        let lines = wrap_text(&Fixed, "漢字", &TextStyle::default(), Pt(100.0));
        assert_eq!(lines.into_lines(), vec!["??"]);
    }

    #[test]
    fn segments_are_char_boundaries() {
        let font = embedded().span_font();
        let tokens = segment(&Fixed, "aé漢b", font, Pt(15.0));
        assert_eq!(tokens, vec!["aé", "漢b"]);
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(align_offset(Align::Left, Pt(100.0), Pt(40.0)), Pt(0.0));
        assert_eq!(align_offset(Align::Center, Pt(100.0), Pt(40.0)), Pt(30.0));
        assert_eq!(align_offset(Align::Right, Pt(100.0), Pt(40.0)), Pt(60.0));
    }
}
