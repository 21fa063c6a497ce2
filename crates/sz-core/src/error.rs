use thiserror::Error;

pub type SzResult<T> = Result<T, SzError>;

/// Domain violations raised by the sizing formulas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SzError {
    #[error("Zero denominator: {what}")]
    ZeroDenominator { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Out of range: {what} = {value} (expected {min} to {max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl SzError {
    /// Name of the offending quantity.
    pub fn what(&self) -> &'static str {
        match self {
            SzError::ZeroDenominator { what }
            | SzError::NonFinite { what, .. }
            | SzError::OutOfRange { what, .. }
            | SzError::InvalidArg { what } => what,
        }
    }
}
