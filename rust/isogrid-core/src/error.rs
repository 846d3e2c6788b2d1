use isogrid_encoding::EncodingError;
use thiserror::Error;

/// Failures parsing or producing map cell data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapDataError {
    #[error("invalid map data: length {0} is not a multiple of 10")]
    InvalidLength(usize),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Failures decoding a path or searching for one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid path: length {0} is not a multiple of 3")]
    InvalidLength(usize),
    #[error("invalid path: bad direction {0:?}")]
    InvalidDirection(char),
    #[error("invalid path: cell {cell} is not on a map of {size} cells")]
    CellOutOfRange { cell: u64, size: usize },
    #[error("invalid path: moving {direction:?} from cell {from} leaves the map")]
    OffMap { from: usize, direction: crate::grid::Direction },
    #[error("invalid path: could not reach cell {target} from {from} within {limit} steps")]
    StepLimitExceeded { from: usize, target: usize, limit: usize },
    #[error("no path found from {from} to {to}")]
    NoPathFound { from: usize, to: usize },
    #[error("search limit exceeded: more than {limit} cells explored")]
    SearchLimitExceeded { limit: usize },
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl PathError {
    /// Malformed wire data, as opposed to a search outcome.
    pub fn is_invalid_path(&self) -> bool {
        !matches!(self, PathError::NoPathFound { .. } | PathError::SearchLimitExceeded { .. })
    }
}
