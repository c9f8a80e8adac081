//! Styling for text and tables.
//!
//! All of these are plain values that can be built in code or deserialised from
//! JSON; missing fields take their [Default] values.

use crate::colour::{colours, Colour};
use crate::font::{FontFamily, FontStyle, SpanFont};
use crate::units::Pt;
use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// Grid units shared out between columns when a table doesn't say otherwise
pub const DEFAULT_GRID_TOTAL: u32 = 12;

const DEFAULT_FONT_SIZE: Pt = Pt(10.0);
const DEFAULT_HEADER_CONTENT_SPACE: Pt = Pt(4.0);

/// Horizontal placement of a line of text within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a single piece of text is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: Pt,
    pub colour: Colour,
    pub align: Align,
    /// Keep the text on one line even when it overflows its cell
    pub extrapolate: bool,
    /// Extra space added below every wrapped line
    pub vertical_padding: Pt,
    /// Offset of the text block from the top of its cell
    pub top: Pt,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            family: FontFamily::default(),
            style: FontStyle::Normal,
            size: DEFAULT_FONT_SIZE,
            colour: colours::BLACK,
            align: Align::Left,
            extrapolate: false,
            vertical_padding: Pt(0.0),
            top: Pt(0.0),
        }
    }
}

impl TextStyle {
    pub fn span_font(&self) -> SpanFont {
        SpanFont {
            family: self.family,
            style: self.style,
            size: self.size,
        }
    }
}

/// Width of a table column in grid units, and how its cells are aligned
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    pub units: u32,
    pub align: Align,
}

impl ColumnSpec {
    pub fn new(units: u32) -> ColumnSpec {
        ColumnSpec {
            units,
            align: Align::Left,
        }
    }

    pub fn aligned(units: u32, align: Align) -> ColumnSpec {
        ColumnSpec { units, align }
    }
}

/// Text settings and column layout for either the header or the body of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSection {
    pub family: FontFamily,
    /// Left unset, headers are bold and content is normal
    pub style: Option<FontStyle>,
    pub size: Pt,
    pub colour: Colour,
    pub columns: Vec<ColumnSpec>,
}

impl Default for TableSection {
    fn default() -> Self {
        TableSection {
            family: FontFamily::default(),
            style: None,
            size: DEFAULT_FONT_SIZE,
            colour: colours::BLACK,
            columns: Vec::new(),
        }
    }
}

impl TableSection {
    /// The style one cell of this section is drawn with
    pub fn text_style(&self, align: Align, top: Pt) -> TextStyle {
        TextStyle {
            family: self.family,
            style: self.style.unwrap_or_default(),
            size: self.size,
            colour: self.colour,
            align,
            extrapolate: false,
            vertical_padding: Pt(0.0),
            top,
        }
    }

    fn make_valid(&mut self, columns: usize, style: FontStyle) {
        if self.size.0 <= 0.0 {
            self.size = DEFAULT_FONT_SIZE;
        }
        if self.style.is_none() {
            self.style = Some(style);
        }
        if self.columns.is_empty() {
            let units = (DEFAULT_GRID_TOTAL / columns.max(1) as u32).max(1);
            self.columns = vec![ColumnSpec::new(units); columns];
        }
    }
}

/// Everything that controls how [layout_table](crate::layout::layout_table) draws a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub header: TableSection,
    pub content: TableSection,
    /// Per-column alignment applied to both sections, overriding the column specs
    pub aligns: Vec<Align>,
    /// Height of the gap between the header and the first content row
    pub header_content_space: Pt,
    /// Extra height given to every content row, split above and below the text
    pub vertical_content_padding: Pt,
    /// Background painted behind every other content row, starting with the first
    pub alternated_background: Option<Colour>,
    /// Draw a separator line beneath every content row
    pub line: bool,
    /// Lower bound for the grid total the column units are divided by
    pub min_grid_total: Option<f32>,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            header: TableSection::default(),
            content: TableSection::default(),
            aligns: Vec::new(),
            header_content_space: DEFAULT_HEADER_CONTENT_SPACE,
            vertical_content_padding: Pt(0.0),
            alternated_background: None,
            line: false,
            min_grid_total: None,
        }
    }
}

impl TableStyle {
    /// Parse a table style from JSON
    pub fn from_json(json: &str) -> Result<TableStyle, LayoutError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Fill in anything left unset for a table with `columns` header cells: font
    /// sizes, header/content font styles, evenly shared columns, and the gap below
    /// the header. A section without columns borrows the other section's, so both
    /// rows share one grid.
    pub fn make_valid(&mut self, columns: usize) {
        if self.header.columns.is_empty() {
            self.header.columns = self.content.columns.clone();
        } else if self.content.columns.is_empty() {
            self.content.columns = self.header.columns.clone();
        }
        self.header.make_valid(columns, FontStyle::Bold);
        self.content.make_valid(columns, FontStyle::Normal);
        if self.header_content_space.0 == 0.0 {
            self.header_content_space = DEFAULT_HEADER_CONTENT_SPACE;
        }
    }

    /// Alignment of the cells in column `index` of a section
    pub fn align(&self, section: &TableSection, index: usize) -> Align {
        self.aligns
            .get(index)
            .copied()
            .or_else(|| section.columns.get(index).map(|c| c.align))
            .unwrap_or_default()
    }

    /// Check that the header, every content row, and the alignment list all agree
    /// with the column specs
    pub fn check_shape<H, R, C>(&self, header: &[H], contents: &[R]) -> Result<(), LayoutError>
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let expected = self.header.columns.len();
        if header.len() != expected {
            return Err(LayoutError::HeaderMismatch {
                expected,
                found: header.len(),
            });
        }
        if !self.aligns.is_empty() && self.aligns.len() != header.len() {
            return Err(LayoutError::AlignMismatch {
                expected: header.len(),
                found: self.aligns.len(),
            });
        }

        let expected = self.content.columns.len();
        match contents
            .iter()
            .position(|row| row.as_ref().len() != expected)
        {
            Some(row) => Err(LayoutError::RowMismatch {
                row,
                expected,
                found: contents[row].as_ref().len(),
            }),
            None => Ok(()),
        }
    }
}
