//! Foundation types for n2w, a number-to-words library.
//!
//! Every other n2w crate depends on `n2w-types`.
//!
//! # Key Types
//!
//! - [`Fragment`]: A `(text, value)` piece of a number being spelled out
//! - [`Number`]: A parsed decimal literal (sign, integer part, fractional digits)
//! - [`CurrencyForms`]: Singular/plural names for a currency's major and minor units
//! - [`ConvertError`]: Everything a conversion can fail with

pub mod currency;
pub mod error;
pub mod fragment;
pub mod number;

pub use currency::{CurrencyForms, PluralForms};
pub use error::{ConvertError, ConvertResult, ParseNumberError};
pub use fragment::Fragment;
pub use number::Number;

// Magnitudes are arbitrary precision.
pub use num_bigint::BigUint;
