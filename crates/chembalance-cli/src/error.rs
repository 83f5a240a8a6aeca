use chembalance::model::equation::EquationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no catalog equation at index {index}; `chembal list` shows indices 0..{count}")]
    UnknownEquation { index: usize, count: usize },

    #[error(
        "expected {expected} coefficients for '{equation}' (reactants then products), got {actual}"
    )]
    WrongCoefficientCount {
        equation: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Equation(#[from] EquationError),
}
