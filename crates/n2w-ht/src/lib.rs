//! Haitian Creole (Kreyòl ayisyen) locale for n2w.
//!
//! Supplies the vocabulary tables and the merge rule that applies Creole
//! liaison and elision when two number words meet (`venteyen`, `trannsenk`,
//! `si san`, `yon milyon`), plus ordinals and currency names.
//!
//! # Quick Start
//!
//! ```rust
//! use n2w_core::{ConversionKind, Converter};
//! use n2w_ht::HaitianCreole;
//!
//! let converter = Converter::new(HaitianCreole::new());
//! assert_eq!(converter.convert("21", ConversionKind::Cardinal).unwrap(), "venteyen");
//! assert_eq!(converter.convert("600", ConversionKind::Cardinal).unwrap(), "si san");
//! assert_eq!(converter.convert("2", ConversionKind::Ordinal).unwrap(), "dezyem");
//! ```

pub mod merge;
pub mod ordinal;
pub mod vocabulary;

use num_traits::One;
use serde::{Deserialize, Serialize};
use tracing::debug;

use n2w_core::{
    int_to_cardinal, verify_ordinal, CurrencyOptions, CurrencyValue, LocaleText, NumeralLocale,
    Vocabulary,
};
use n2w_types::{ConvertError, ConvertResult, CurrencyForms, Fragment, Number};

pub use merge::merge;
pub use ordinal::{ordinal_from_cardinal, ordinal_num};

/// Language code registered for this locale.
pub const LANG: &str = "ht";

/// Which optional conversions the locale provides.
///
/// A disabled conversion fails with [`ConvertError::NotImplemented`] instead
/// of producing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// `to_ordinal` and `to_ordinal_num`.
    pub ordinals: bool,
    /// `to_currency`.
    pub currency: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            ordinals: true,
            currency: true,
        }
    }
}

impl Features {
    /// Cardinals only.
    pub fn cardinal_only() -> Self {
        Self {
            ordinals: false,
            currency: false,
        }
    }
}

/// The Haitian Creole locale.
#[derive(Clone, Debug)]
pub struct HaitianCreole {
    vocabulary: Vocabulary,
    features: Features,
}

impl Default for HaitianCreole {
    fn default() -> Self {
        Self::new()
    }
}

impl HaitianCreole {
    pub fn new() -> Self {
        Self::with_features(Features::default())
    }

    pub fn with_features(features: Features) -> Self {
        Self {
            vocabulary: vocabulary::build(),
            features,
        }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    fn require(&self, enabled: bool, operation: &'static str) -> ConvertResult<()> {
        if enabled {
            Ok(())
        } else {
            debug!(operation, "conversion disabled for locale");
            Err(ConvertError::not_implemented(operation, LANG))
        }
    }
}

impl NumeralLocale for HaitianCreole {
    fn lang(&self) -> &str {
        LANG
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn text(&self) -> &LocaleText {
        &vocabulary::TEXT
    }

    fn merge(&self, current: Fragment, next: Fragment) -> Fragment {
        merge::merge(current, next)
    }

    fn to_ordinal(&self, value: &Number) -> ConvertResult<String> {
        self.require(self.features.ordinals, "to_ordinal")?;
        let n = verify_ordinal(self, value)?;
        if n.is_one() {
            return Ok(vocabulary::FIRST_ORDINAL.to_string());
        }
        let cardinal = int_to_cardinal(self, false, &n)?;
        Ok(ordinal_from_cardinal(&cardinal))
    }

    fn to_ordinal_num(&self, value: &Number) -> ConvertResult<String> {
        self.require(self.features.ordinals, "to_ordinal_num")?;
        let n = verify_ordinal(self, value)?;
        Ok(ordinal_num(&n))
    }

    fn currency_forms(&self, code: &str) -> Option<CurrencyForms> {
        vocabulary::currency_forms(code)
    }

    fn default_separator(&self) -> &str {
        vocabulary::CURRENCY_SEPARATOR
    }

    fn to_currency(&self, value: &CurrencyValue, options: &CurrencyOptions) -> ConvertResult<String> {
        self.require(self.features.currency, "to_currency")?;
        n2w_core::currency::to_currency(self, value, options)
    }
}
