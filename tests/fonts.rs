use owned_ttf_parser::AsFaceRef;
use pdf_tablelist::layout::{layout_table, Margins};
use pdf_tablelist::pagesize::A5;
use pdf_tablelist::{
    Font, FontBook, FontFamily, FontResources, FontStyle, Metrics, Page, Pt, SpanFont, TableStyle,
};

const DEJAVU_MONO: &[u8] = include_bytes!("assets/DejaVuSansMono.ttf");

fn dejavu() -> Font {
    Font::load(DEJAVU_MONO.to_vec()).unwrap()
}

fn span(family: FontFamily, style: FontStyle) -> SpanFont {
    SpanFont {
        family,
        style,
        size: Pt(12.0),
    }
}

#[test]
fn widths_are_advances_scaled_by_size_per_em() {
    let book = FontBook::new(dejavu());
    let font = span(FontFamily::Embedded(0), FontStyle::Normal);
    let face = book.get(book.font_id(font)).unwrap().face.as_face_ref();

    let glyph = face.glyph_index('A').unwrap();
    let advance = face.glyph_hor_advance(glyph).unwrap() as f32;
    let expected = 3.0 * advance * 12.0 / face.units_per_em() as f32;

    let width = book.width_of("AAA", font);
    assert!((width.0 - expected).abs() < 1e-3, "{width} != {expected}");
    // monospaced face: every ASCII letter has the same advance
    assert!((book.width_of("iii", font).0 - expected).abs() < 1e-3);
}

#[test]
fn characters_without_glyphs_have_no_width() {
    let book = FontBook::new(dejavu());
    let font = span(FontFamily::Embedded(0), FontStyle::Normal);
    assert_eq!(book.width_of("A漢", font), book.width_of("A", font));
}

#[test]
fn lookups_fall_back_to_normal_style_then_default() {
    let mut book = FontBook::new(dejavu());
    let regular = book.add_font(FontFamily::Embedded(1), FontStyle::Normal, dejavu());
    let bold = book.add_font(FontFamily::Embedded(1), FontStyle::Bold, dejavu());

    assert_eq!(book.font_id(span(FontFamily::Embedded(1), FontStyle::Bold)), bold);
    assert_eq!(book.font_id(span(FontFamily::Embedded(1), FontStyle::Italic)), regular);

    let default = book.font_id(span(FontFamily::Embedded(7), FontStyle::Bold));
    assert_eq!(default.index(), 0);
    assert_ne!(default, regular);
    assert_eq!(book.font_id(span(FontFamily::Helvetica, FontStyle::Normal)), default);
}

#[test]
fn embedded_text_is_written_as_big_endian_glyph_ids() {
    let book = FontBook::new(dejavu());
    let font = span(FontFamily::Embedded(0), FontStyle::Normal);
    let face = book.get(book.font_id(font)).unwrap();

    let a = face.glyph_id('A').unwrap();
    let mut expected = a.to_be_bytes().to_vec();
    expected.extend(
        face.replacement_glyph_id()
            .into_iter()
            .flat_map(u16::to_be_bytes),
    );

    assert_eq!(book.encode_text("A漢", font), expected);
    assert_eq!(book.resource_name(font), "F0");
}

#[test]
fn base_fonts_are_written_as_winansi() {
    let book = FontBook::new(dejavu());
    let font = span(FontFamily::Helvetica, FontStyle::Normal);
    assert_eq!(book.encode_text("café €5 漢", font), b"caf\xE9 \x805 ?".to_vec());
}

#[test]
fn a_real_face_drives_table_layout() {
    let book = FontBook::new(dejavu());
    let rows: Vec<[String; 2]> = (0..200)
        .map(|i| [format!("item {i}"), lipsum::lipsum(4 + i % 9)])
        .collect();

    let mut page = Page::new(A5, Margins::all(Pt(36.0)));
    let placed = layout_table(&book, &mut page, &["Item", "Notes"], &rows, &TableStyle::default())
        .unwrap();
    assert!(placed > 0 && placed < rows.len());

    let stream = page.render(&book);
    assert!(stream.windows(3).any(|w| w == b"/F0"));
}
