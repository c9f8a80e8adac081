use crate::{metrics::Metrics, LayoutError, Pt};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// The font families text can be set in. The first five are the PDF base-14
/// families that are written with single-byte WinAnsi strings; `Embedded`
/// refers to any other face registered with a [FontBook], by slot.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Arial,
    Helvetica,
    Courier,
    Symbol,
    ZapfDingbats,
    Embedded(u16),
}

impl FontFamily {
    /// Whether text in this family must be substituted into the WinAnsi
    /// (Windows-1252) character set before it is measured or drawn
    pub fn requires_encoding(&self) -> bool {
        !matches!(self, FontFamily::Embedded(_))
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Everything needed to measure or draw a run of text: which face, and how big
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: Pt,
}

/// A parsed font object. Fonts can be TTF or OTF fonts.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text at the given font size. Characters
    /// without a glyph in the face don't contribute any width.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = size / self.face.as_face_ref().units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// Maps (family, style) pairs onto loaded fonts, and measures text with them.
///
/// Lookups fall back to the normal style of the same family, then to the default
/// font the book was created with, so measuring never fails. To measure a base-14
/// family, register a metric-compatible face under it (e.g. Liberation Sans for
/// [FontFamily::Helvetica]).
pub struct FontBook {
    fonts: Arena<Font>,
    faces: HashMap<(FontFamily, FontStyle), Id<Font>>,
    default: Id<Font>,
}

impl FontBook {
    pub fn new(default: Font) -> FontBook {
        let mut fonts = Arena::new();
        let default = fonts.alloc(default);
        FontBook {
            fonts,
            faces: HashMap::new(),
            default,
        }
    }

    /// Register a font for a family and style, replacing any previous registration
    pub fn add_font(&mut self, family: FontFamily, style: FontStyle, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.faces.insert((family, style), id);
        id
    }

    /// Resolve the font that will be used for the given span
    pub fn font_id(&self, font: SpanFont) -> Id<Font> {
        self.faces
            .get(&(font.family, font.style))
            .or_else(|| self.faces.get(&(font.family, FontStyle::Normal)))
            .copied()
            .unwrap_or(self.default)
    }

    pub fn get(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }

    fn resolve(&self, font: SpanFont) -> &Font {
        &self.fonts[self.font_id(font)]
    }
}

impl Metrics for FontBook {
    fn width_of(&self, text: &str, font: SpanFont) -> Pt {
        self.resolve(font).width_of_text(text, font.size)
    }
}

/// Turns laid out text into the operands of a PDF `Tj` operator
pub trait FontResources {
    /// Name of the font in the page's resource dictionary
    fn resource_name(&self, font: SpanFont) -> String;
    /// The string bytes to show for `text` in `font`
    fn encode_text(&self, text: &str, font: SpanFont) -> Vec<u8>;
}

impl FontResources for FontBook {
    fn resource_name(&self, font: SpanFont) -> String {
        format!("F{}", self.font_id(font).index())
    }

    fn encode_text(&self, text: &str, font: SpanFont) -> Vec<u8> {
        if font.family.requires_encoding() {
            return text.chars().map(|ch| winansi_byte(ch).unwrap_or(b'?')).collect();
        }

        // embedded faces are written as Identity-H, two bytes per glyph
        let face = self.resolve(font);
        text.chars()
            .filter_map(|ch| face.glyph_id(ch).or_else(|| face.replacement_glyph_id()))
            .flat_map(u16::to_be_bytes)
            .collect()
    }
}

// code points 0x80..=0x9F of Windows-1252; 0x81, 0x8D, 0x8F, 0x90, 0x9D are unassigned
const WINANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// The Windows-1252 byte for a character, if it has one
pub fn winansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u8),
        _ => WINANSI_HIGH
            .iter()
            .position(|&c| c == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}

/// Substitute every character that WinAnsi can't represent with `?`. Borrows the
/// input when nothing needs replacing.
pub fn encode_winansi(text: &str) -> Cow<'_, str> {
    if text.chars().all(|ch| winansi_byte(ch).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| if winansi_byte(ch).is_some() { ch } else { '?' })
            .collect(),
    )
}
