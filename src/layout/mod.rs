//! Text wrapping and table layout.
//!
//! Text is wrapped with [`wrap_text`](crate::layout::wrap_text), which first cuts it
//! into tokens that each fit the available width, then packs those tokens greedily
//! into lines. Because tokens don't depend on whitespace, text in scripts without
//! spaces between words wraps just as well as text with them.
//! [`count_lines`](crate::layout::count_lines) gives the line count alone.
//!
//! [`layout_table`](crate::layout::layout_table) draws a header and as many content
//! rows as fit on the current page of a [`GridSurface`](crate::GridSurface), sizing
//! every row by its most wrapped cell. It reports how many rows it placed so the
//! caller can continue on a fresh page.
//!
//! # Example
//!
//! ```
//! use pdf_tablelist::layout::{layout_table, Margins};
//! use pdf_tablelist::{pagesize, Metrics, Page, Pt, SpanFont, TableStyle};
//!
//! // every character is half an em wide
//! struct Monospace;
//!
//! impl Metrics for Monospace {
//!     fn width_of(&self, text: &str, font: SpanFont) -> Pt {
//!         font.size * 0.5 * text.chars().count() as f32
//!     }
//! }
//!
//! let rows: Vec<Vec<String>> = (1..=100)
//!     .map(|i| vec![format!("Item {i}"), format!("{}", i * 3)])
//!     .collect();
//!
//! let mut pages = Vec::new();
//! let mut remaining = &rows[..];
//! while !remaining.is_empty() {
//!     let mut page = Page::new(pagesize::A4, Margins::all(Pt(36.0)));
//!     let placed = layout_table(
//!         &Monospace,
//!         &mut page,
//!         &["Item", "Quantity"],
//!         remaining,
//!         &TableStyle::default(),
//!     )
//!     .expect("rows match the header");
//!     remaining = &remaining[placed..];
//!     pages.push(page);
//! }
//! assert!(pages.len() > 1);
//! ```

mod margins;
mod table;
mod text;

pub use margins::*;
pub use table::*;
pub use text::*;
