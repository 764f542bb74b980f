use thiserror::Error;

/// Failure modes shared by the fallible exercises.
///
/// Everything else in the crate is total; only out-of-domain numeric
/// arguments, foreign characters in bracket input, and non-conformable
/// matrix shapes are reported as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KataError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("unexpected character {found:?} at byte {position}; allowed are whitespace and [](){{}}<>")]
    InvalidCharacter { found: char, position: usize },

    #[error("dimension mismatch: cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
}
