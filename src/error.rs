use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid table style: {0}")]
    /// A table style could not be deserialised
    Config(#[from] serde_json::Error),

    #[error("header has {found} cells but the header section defines {expected} columns")]
    /// The header row and the header column specs disagree on the column count
    HeaderMismatch { expected: usize, found: usize },

    #[error("content row {row} has {found} cells but the content section defines {expected} columns")]
    /// A content row and the content column specs disagree on the column count
    RowMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{found} column alignments were given for a {expected} column table")]
    /// The alignment override list doesn't cover every column
    AlignMismatch { expected: usize, found: usize },
}
