use thiserror::Error;

/// Errors raised while constructing evaluations.
///
/// The elementary functions themselves never fail; bad inputs show up as
/// NaN or infinity in the result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected {expected} derivatives, got {actual}")]
    DerivativeCount { expected: usize, actual: usize },

    #[error("variable index {index} out of range for {num_vars} variables")]
    VariableIndexOutOfRange { index: usize, num_vars: usize },

    #[error("plain floating point values cannot represent variables")]
    NotAnEvaluation,
}

pub type Result<T> = std::result::Result<T, Error>;
