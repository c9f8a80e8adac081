use crate::colour::colours;
use crate::layout::text::{count_lines, draw_text};
use crate::metrics::Metrics;
use crate::style::{TableSection, TableStyle};
use crate::surface::GridSurface;
use crate::units::Pt;
use crate::LayoutError;
use tracing::{debug, trace};

/// Added to the height of every header and content row
const ROW_PADDING: Pt = Pt(1.0);
/// Room kept free at the bottom of the page before a row is allowed to start
const PAGE_SLACK: Pt = Pt(7.0);
/// Vertical space taken by the separator drawn after each content row
const SEPARATOR_THICKNESS: Pt = Pt(1.0);

/// The denominator column units are divided by to get their share of the page
/// width: the sum of the units, but never less than the number of header columns
/// or the configured minimum.
pub fn effective_grid_total(units: &[u32], header_columns: usize, minimum: Option<f32>) -> f32 {
    let sum = units.iter().map(|&u| u64::from(u)).sum::<u64>() as f32;
    let total = sum.max(header_columns as f32);
    match minimum {
        Some(minimum) => total.max(minimum),
        None => total,
    }
}

/// Measured height of one table row
struct RowHeights {
    /// Height of the tallest cell
    row: Pt,
    /// Height of each cell's text
    cells: Vec<Pt>,
}

fn measure_row<M, C>(
    metrics: &M,
    cells: &[C],
    section: &TableSection,
    usable_width: Pt,
    grid_total: f32,
) -> RowHeights
where
    M: Metrics + ?Sized,
    C: AsRef<str>,
{
    let style = section.text_style(Default::default(), Pt(0.0));
    let line_height = metrics.line_height(style.span_font());

    let cells: Vec<Pt> = cells
        .iter()
        .zip(section.columns.iter())
        .map(|(text, column)| {
            let width = usable_width * (column.units as f32 / grid_total);
            line_height * count_lines(metrics, text.as_ref(), &style, width) as f32
        })
        .collect();
    let row = cells.iter().copied().fold(line_height, Pt::max);

    RowHeights { row, cells }
}

/// Draw a table with a header row and as many of the `contents` rows as fit on the
/// surface's current page.
///
/// Each row is as tall as its cell with the most wrapped lines. Before a content
/// row is drawn, the remaining page space is checked; if the row can't finish on
/// this page, layout stops there. No page is ever added: the return value is the
/// number of content rows that were drawn, and the caller is expected to start a
/// new page and call this again with the rest.
///
/// Returns `Ok(0)` without drawing when either the header or the contents are
/// empty. Rows that don't match the column specs are rejected before anything
/// is drawn.
pub fn layout_table<M, S, H, R, C>(
    metrics: &M,
    surface: &mut S,
    header: &[H],
    contents: &[R],
    style: &TableStyle,
) -> Result<usize, LayoutError>
where
    M: Metrics + ?Sized,
    S: GridSurface,
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    if header.is_empty() || contents.is_empty() {
        return Ok(0);
    }

    let mut style = style.clone();
    style.make_valid(header.len());
    if let Err(err) = style.check_shape(header, contents) {
        debug!(%err, "table rejected");
        return Err(err);
    }

    let units: Vec<u32> = style.content.columns.iter().map(|c| c.units).collect();
    let grid_total = effective_grid_total(&units, header.len(), style.min_grid_total);
    let (page_width, page_height) = surface.page_size();
    let margins = surface.page_margins();
    let usable_width = margins.usable_width(page_width);
    let max_offset = margins.usable_height(page_height);

    let heights = measure_row(metrics, header, &style.header, usable_width, grid_total);
    surface.row(heights.row + ROW_PADDING, |surface| {
        for (i, (text, column)) in header.iter().zip(style.header.columns.iter()).enumerate() {
            let top = (heights.row - heights.cells[i]) / 2.0;
            let text_style = style.header.text_style(style.align(&style.header, i), top);
            surface.column_with_grid_total(column.units, grid_total, |surface| {
                draw_text(metrics, surface, text.as_ref(), &text_style)
            });
        }
    });

    surface.row(style.header_content_space, |surface| surface.column_spacer(0));

    for (index, row) in contents.iter().enumerate() {
        let row = row.as_ref();
        let heights = measure_row(metrics, row, &style.content, usable_width, grid_total);
        let padded = heights.row + style.vertical_content_padding;

        let offset = surface.current_offset();
        if offset > max_offset - heights.row - ROW_PADDING - PAGE_SLACK {
            surface.set_border(false);
            debug!(
                placed = index,
                remaining = contents.len() - index,
                %offset,
                "table stopped at the bottom of the page"
            );
            return Ok(index);
        }

        let background = style.alternated_background.filter(|_| index % 2 == 0);
        if let Some(colour) = background {
            surface.set_background_colour(colour);
        }

        trace!(index, height = %padded, "table row");
        surface.row(padded + ROW_PADDING, |surface| {
            for (i, (text, column)) in row.iter().zip(style.content.columns.iter()).enumerate() {
                let top = (heights.row - heights.cells[i]) / 2.0
                    + style.vertical_content_padding / 2.0;
                let text_style = style.content.text_style(style.align(&style.content, i), top);
                surface.column_with_grid_total(column.units, grid_total, |surface| {
                    draw_text(metrics, surface, text.as_ref(), &text_style)
                });
            }
        });

        if background.is_some() {
            surface.set_background_colour(colours::WHITE);
        }
        if style.line {
            surface.line(SEPARATOR_THICKNESS);
        }
    }

    surface.set_border(false);
    Ok(contents.len())
}
