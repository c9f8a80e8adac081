//! Line wrapping and page-bounded table layout for PDF generation.
//!
//! Text is broken into lines that fit a width under any [Metrics] implementation,
//! and tables are drawn row by row onto a [GridSurface] until the page runs out.
//! [Page] is a surface that records the result and renders it to a PDF content
//! stream; [FontBook] measures text with real TrueType/OpenType faces.

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Text wrapping and table layout
pub mod layout;

mod metrics;
pub use metrics::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

mod style;
pub use style::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, for embedding rendered content streams
pub use pdf_writer;
