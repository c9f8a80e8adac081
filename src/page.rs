use crate::colour::{colours, Colour};
use crate::font::{FontResources, SpanFont};
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{TextStyle, DEFAULT_GRID_TOTAL};
use crate::surface::{Cell, GridSurface};
use crate::units::Pt;
use pdf_writer::{Content, Name, Str};

/// Stroke width of cell borders
const OUTLINE_WIDTH: Pt = Pt(0.5);

/// A single line of text, positioned at its baseline in page coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// Everything that can be drawn on a page, in PDF page coordinates (origin at the
/// bottom left)
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    /// A cell's background
    Fill { rect: Rect, colour: Colour },
    /// A cell's border
    Outline { rect: Rect },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        thickness: Pt,
    },
}

/// A page that tables are laid out on, row by row from the top of its content box.
///
/// The page only records what is drawn; [Page::render] turns that into a PDF
/// content stream. Fonts referenced by the stream must be provided by the page's
/// resource dictionary under the names the [FontResources] passed to `render`
/// hands out.
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    pub margins: Margins,
    /// The laid out content
    pub contents: Vec<PageContents>,
    offset: Pt,
    row_height: Pt,
    cell: Cell,
    background: Colour,
    border: bool,
}

impl Page {
    pub fn new(size: PageSize, margins: Margins) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            margins,
            contents: Vec::default(),
            offset: Pt(0.0),
            row_height: Pt(0.0),
            cell: Cell::default(),
            background: colours::WHITE,
            border: false,
        }
    }

    /// Convert a position relative to the top left of the content box into page
    /// coordinates
    fn to_page(&self, (x, y): (Pt, Pt)) -> (Pt, Pt) {
        (self.content_box.x1 + x, self.content_box.y2 - y)
    }

    fn open_column(&mut self, width: Pt) {
        self.cell = Cell {
            x: self.cell.x + self.cell.width,
            y: self.offset,
            width,
        };

        let (x1, y2) = self.to_page((self.cell.x, self.cell.y));
        let rect = Rect {
            x1,
            y1: y2 - self.row_height,
            x2: x1 + width,
            y2,
        };
        if !self.background.is_white() {
            self.contents.push(PageContents::Fill {
                rect,
                colour: self.background,
            });
        }
        if self.border {
            self.contents.push(PageContents::Outline { rect });
        }
    }

    fn column_width(&self, units: u32, grid_total: f32) -> Pt {
        let usable = self.content_box.width();
        if units == 0 {
            usable - (self.cell.x + self.cell.width)
        } else {
            usable * (units as f32 / grid_total)
        }
    }

    /// Render the page contents to a PDF content stream
    pub fn render<F: FontResources + ?Sized>(&self, fonts: &F) -> Vec<u8> {
        let mut content = Content::new();

        for item in self.contents.iter() {
            content.save_state();
            match item {
                PageContents::Text(span) => {
                    let name = fonts.resource_name(span.font);
                    set_fill(&mut content, span.colour);
                    content.begin_text();
                    content.set_font(Name(name.as_bytes()), span.font.size.0);
                    content.next_line(span.coords.0 .0, span.coords.1 .0);
                    content.show(Str(&fonts.encode_text(&span.text, span.font)));
                    content.end_text();
                }
                PageContents::Fill { rect, colour } => {
                    set_fill(&mut content, *colour);
                    content.rect(rect.x1.0, rect.y1.0, rect.width().0, rect.height().0);
                    content.fill_nonzero();
                }
                PageContents::Outline { rect } => {
                    content.set_line_width(OUTLINE_WIDTH.0);
                    content.rect(rect.x1.0, rect.y1.0, rect.width().0, rect.height().0);
                    content.stroke();
                }
                PageContents::Line {
                    from,
                    to,
                    thickness,
                } => {
                    content.set_line_width(thickness.0);
                    content.move_to(from.0 .0, from.1 .0);
                    content.line_to(to.0 .0, to.1 .0);
                    content.stroke();
                }
            }
            content.restore_state();
        }

        content.finish()
    }

    /// Render the page contents to a zlib-compressed content stream, to be written
    /// with a `FlateDecode` filter
    pub fn render_compressed<F: FontResources + ?Sized>(&self, fonts: &F) -> Vec<u8> {
        miniz_oxide::deflate::compress_to_vec_zlib(
            &self.render(fonts),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        )
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

impl GridSurface for Page {
    fn row<F>(&mut self, height: Pt, content: F)
    where
        F: FnOnce(&mut Self),
    {
        let top = self.offset;
        self.row_height = height;
        self.cell = Cell {
            x: Pt(0.0),
            y: top,
            width: Pt(0.0),
        };
        content(self);
        self.offset = top + height;
    }

    fn column_with_grid_total<F>(&mut self, units: u32, grid_total: f32, content: F)
    where
        F: FnOnce(&mut Self),
    {
        let width = self.column_width(units, grid_total);
        self.open_column(width);
        content(self);
    }

    fn column_spacer(&mut self, units: u32) {
        let width = self.column_width(units, DEFAULT_GRID_TOTAL as f32);
        self.open_column(width);
    }

    fn current_cell(&self) -> Cell {
        self.cell
    }

    fn draw_text(&mut self, text: &str, position: (Pt, Pt), style: &TextStyle) {
        let coords = self.to_page(position);
        self.contents.push(PageContents::Text(SpanLayout {
            text: text.to_string(),
            font: style.span_font(),
            colour: style.colour,
            coords,
        }));
    }

    fn line(&mut self, thickness: Pt) {
        let middle = self.offset + thickness / 2.0;
        let from = self.to_page((Pt(0.0), middle));
        let to = self.to_page((self.content_box.width(), middle));
        self.contents.push(PageContents::Line {
            from,
            to,
            thickness,
        });
        self.offset += thickness;
    }

    fn set_background_colour(&mut self, colour: Colour) {
        self.background = colour;
    }

    fn set_border(&mut self, on: bool) {
        self.border = on;
    }

    fn current_offset(&self) -> Pt {
        self.offset
    }

    fn page_size(&self) -> (Pt, Pt) {
        (self.media_box.width(), self.media_box.height())
    }

    fn page_margins(&self) -> Margins {
        self.margins
    }
}
