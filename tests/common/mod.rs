#![allow(dead_code)]

use pdf_tablelist::layout::Margins;
use pdf_tablelist::{Cell, Colour, GridSurface, Metrics, Pt, SpanFont, TextStyle};

/// Half an em per ASCII character, a full em for anything else
pub struct Mono;

impl Metrics for Mono {
    fn width_of(&self, text: &str, font: SpanFont) -> Pt {
        text.chars()
            .map(|ch| if ch.is_ascii() { font.size * 0.5 } else { font.size })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Row { height: Pt },
    Column { units: u32, grid_total: f32 },
    Spacer { units: u32 },
    Text { text: String, position: (Pt, Pt) },
    Line { thickness: Pt },
    Background(Colour),
    Border(bool),
}

/// A surface that remembers every call made to it and moves down the page the
/// way a real one would
pub struct Recorder {
    pub calls: Vec<Call>,
    size: (Pt, Pt),
    margins: Margins,
    offset: Pt,
    cell: Cell,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Recorder {
        Recorder {
            calls: Vec::new(),
            size: (Pt(width), Pt(height)),
            margins: Margins::default(),
            offset: Pt(0.0),
            cell: Cell::default(),
        }
    }

    /// A page tall enough that no table ever runs out of room
    pub fn unbounded(width: f32) -> Recorder {
        Recorder::new(width, 1.0e9)
    }

    pub fn rows(&self) -> Vec<Pt> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Row { height } => Some(*height),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn position_of(&self, needle: &str) -> Option<(Pt, Pt)> {
        self.calls.iter().find_map(|call| match call {
            Call::Text { text, position } if text == needle => Some(*position),
            _ => None,
        })
    }
}

impl GridSurface for Recorder {
    fn row<F>(&mut self, height: Pt, content: F)
    where
        F: FnOnce(&mut Self),
    {
        self.calls.push(Call::Row { height });
        let top = self.offset;
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
        self.calls.push(Call::Column { units, grid_total });
        let usable = self.margins.usable_width(self.size.0);
        self.cell = Cell {
            x: self.cell.x + self.cell.width,
            y: self.offset,
            width: usable * (units as f32 / grid_total),
        };
        content(self);
    }

    fn column_spacer(&mut self, units: u32) {
        self.calls.push(Call::Spacer { units });
    }

    fn current_cell(&self) -> Cell {
        self.cell
    }

    fn draw_text(&mut self, text: &str, position: (Pt, Pt), _style: &TextStyle) {
        self.calls.push(Call::Text {
            text: text.to_string(),
            position,
        });
    }

    fn line(&mut self, thickness: Pt) {
        self.calls.push(Call::Line { thickness });
        self.offset += thickness;
    }

    fn set_background_colour(&mut self, colour: Colour) {
        self.calls.push(Call::Background(colour));
    }

    fn set_border(&mut self, on: bool) {
        self.calls.push(Call::Border(on));
    }

    fn current_offset(&self) -> Pt {
        self.offset
    }

    fn page_size(&self) -> (Pt, Pt) {
        self.size
    }

    fn page_margins(&self) -> Margins {
        self.margins
    }
}
