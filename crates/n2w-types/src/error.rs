use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced while parsing a numeric literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("empty numeric literal")]
    Empty,

    #[error("invalid character {found:?} at byte {index}")]
    InvalidChar { found: char, index: usize },
}

/// Errors produced by a conversion.
///
/// Message-carrying variants hold text already rendered from the locale's
/// templates; callers surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value to convert is not numeric.
    #[error("{0}")]
    InvalidInput(String),

    /// The absolute value exceeds the largest representable scale.
    #[error("{0}")]
    MagnitudeExceeded(String),

    /// The value cannot be rendered as an ordinal (fractional or negative).
    #[error("{0}")]
    InvalidOrdinal(String),

    /// No currency forms are registered for the code.
    #[error("currency code \"{code}\" not implemented for \"{locale}\"")]
    UnknownCurrency { code: String, locale: String },

    /// The locale deliberately does not implement the operation.
    #[error("{operation} is not implemented for \"{locale}\"")]
    NotImplemented {
        operation: &'static str,
        locale: String,
    },

    /// The vocabulary has no card able to express this value.
    #[error("vocabulary cannot express {0}")]
    IncompleteVocabulary(BigUint),
}

impl ConvertError {
    /// Create a not-implemented error for an operation on a locale.
    pub fn not_implemented(operation: &'static str, locale: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation,
            locale: locale.into(),
        }
    }

    /// Returns `true` for the not-implemented signal of degraded locales.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = Result<T, ConvertError>;
