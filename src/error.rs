use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cost table is {rows}x{cols} but there are {sources} sources and {destinations} destinations")]
    Shape {
        rows: usize,
        cols: usize,
        sources: usize,
        destinations: usize,
    },
    #[error("cost row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("problem needs at least one source and one destination")]
    Empty,
    #[error("negative {what} at {at}: {value}")]
    Negative {
        what: &'static str,
        at: String,
        value: String,
    },
    #[error("{what} does not fit in the element type")]
    Overflow { what: &'static str },
    #[error("total supply {supply} differs from total demand {demand}")]
    Unbalanced { supply: String, demand: String },
    #[error("token {position}: {reason}")]
    Parse { position: usize, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the shape, sign and range violations that reject a problem before any solver runs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::Shape { .. }
                | Error::Ragged { .. }
                | Error::Empty
                | Error::Negative { .. }
                | Error::Overflow { .. }
        )
    }
}
