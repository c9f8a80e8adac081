use crate::colour::Colour;
use crate::layout::Margins;
use crate::style::TextStyle;
use crate::units::Pt;

/// The box a piece of text is wrapped into: the current column of the current row.
/// Coordinates are relative to the top left corner of the page's content box,
/// growing rightwards and downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cell {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
}

/// A page divided into a grid of rows and columns, which tables are drawn onto.
///
/// The surface owns the vertical position on the page; each [row](GridSurface::row)
/// advances it by the row's height. [Page](crate::Page) is the implementation that
/// records PDF content.
pub trait GridSurface {
    /// Start a row of the given height at the current offset, fill it with columns
    /// in `content`, then move the offset below it
    fn row<F>(&mut self, height: Pt, content: F)
    where
        F: FnOnce(&mut Self);

    /// Add a column `units / grid_total` of the content width wide to the current
    /// row; `content` draws into it
    fn column_with_grid_total<F>(&mut self, units: u32, grid_total: f32, content: F)
    where
        F: FnOnce(&mut Self);

    /// Add an empty column; `0` units spans whatever is left of the row
    fn column_spacer(&mut self, units: u32);

    /// The cell of the column currently being drawn
    fn current_cell(&self) -> Cell;

    /// Draw one line of already wrapped text with its baseline at `position`
    fn draw_text(&mut self, text: &str, position: (Pt, Pt), style: &TextStyle);

    /// A full-width horizontal rule occupying `thickness` of vertical space
    fn line(&mut self, thickness: Pt);

    /// Colour that columns are filled with from now on
    fn set_background_colour(&mut self, colour: Colour);

    /// Whether columns get an outline from now on
    fn set_border(&mut self, on: bool);

    /// How far below the top of the content box the next row starts
    fn current_offset(&self) -> Pt;

    /// Page (width, height)
    fn page_size(&self) -> (Pt, Pt);

    fn page_margins(&self) -> Margins;
}
