use crate::base::database::ColumnType;
use snafu::Snafu;

/// Errors from invoking operators and support routines.
#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// An argument does not have the type the routine was declared with
    #[snafu(display(
        "argument {position} of {routine} has type {actual}, expected {expected}"
    ))]
    ArgumentTypeMismatch {
        /// Name of the routine
        routine: String,
        /// Zero-based argument position
        position: usize,
        /// Declared type
        expected: ColumnType,
        /// Supplied type
        actual: ColumnType,
    },

    /// The routine was called with the wrong number of arguments
    #[snafu(display("{routine} takes {expected} arguments, got {actual}"))]
    ArgumentCount {
        /// Name of the routine
        routine: String,
        /// Declared argument count
        expected: usize,
        /// Supplied argument count
        actual: usize,
    },
}

/// Result type for routine evaluation
pub type EvaluationResult<T> = Result<T, EvaluationError>;
