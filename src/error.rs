use crate::constants::MATRIX_SIZE;
use thiserror::Error;

/// Failures decoding a packed polygon buffer handed over from JS.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MemSegError {
    #[error("memory segment is empty")]
    Empty,

    #[error("invalid contour count: {0}")]
    InvalidCount(f64),

    #[error("header needs {expected} entries, buffer has {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("contour {contour} has invalid offset {offset} (data length {data_len})")]
    InvalidOffset {
        contour: usize,
        offset: f64,
        data_len: usize,
    },

    #[error("contour {contour} has an odd coordinate count: {len}")]
    OddCoordinates { contour: usize, len: usize },
}

/// Failures of the exported entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BooleanError {
    #[error(transparent)]
    MemSeg(#[from] MemSegError),

    #[error("unknown boolean operation: {0}")]
    UnknownOperation(u8),

    #[error("matrix needs {expected} values, got {0}", expected = MATRIX_SIZE)]
    InvalidMatrix(usize),
}

#[cfg(test)]
mod tests {
    use super::{BooleanError, MemSegError};

    #[test]
    fn mem_seg_errors_pass_through() {
        let error: BooleanError = MemSegError::Empty.into();

        assert_eq!(error.to_string(), "memory segment is empty");
        assert_eq!(
            BooleanError::UnknownOperation(7).to_string(),
            "unknown boolean operation: 7"
        );
    }
}
