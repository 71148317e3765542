//! Locale-independent numeral composer for n2w.
//!
//! A locale supplies a [`Vocabulary`] and a pairwise `merge` rule through the
//! [`NumeralLocale`] trait. The [`NumeralComposer`] splits a magnitude into
//! vocabulary cards and folds them left-to-right with that rule. Ordinal,
//! year and currency conversion are layered on top of the cardinal path.
//!
//! # Quick Start
//!
//! ```rust
//! use n2w_core::{Converter, ConversionKind, Fragment, LocaleText, NumeralLocale, Vocabulary};
//!
//! struct Digits {
//!     vocabulary: Vocabulary,
//!     text: LocaleText,
//! }
//!
//! impl NumeralLocale for Digits {
//!     fn lang(&self) -> &str { "digits" }
//!     fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }
//!     fn text(&self) -> &LocaleText { &self.text }
//!     fn merge(&self, current: Fragment, next: Fragment) -> Fragment {
//!         let (ctext, cnum) = current.into_parts();
//!         let (ntext, nnum) = next.into_parts();
//!         Fragment::new(format!("{ctext}-{ntext}"), cnum + nnum)
//!     }
//! }
//!
//! let locale = Digits {
//!     vocabulary: Vocabulary::builder()
//!         .low(&["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"])
//!         .build(),
//!     text: LocaleText::default(),
//! };
//! let converter = Converter::new(locale);
//! assert_eq!(converter.convert("2", ConversionKind::Cardinal).unwrap(), "one-two");
//! ```

pub mod cardinal;
pub mod compose;
pub mod config;
pub mod converter;
pub mod currency;
pub mod locale;
pub mod text;
pub mod validate;
pub mod vocabulary;

pub use cardinal::{int_to_cardinal, to_cardinal};
pub use compose::NumeralComposer;
pub use config::ConverterConfig;
pub use converter::{ConversionKind, Converter};
pub use currency::{CurrencyOptions, CurrencyParts, CurrencyValue};
pub use locale::NumeralLocale;
pub use text::{interpolate, title_case};
pub use validate::{parse_number, verify_ordinal};
pub use vocabulary::{european_scale_words, LocaleText, Vocabulary, VocabularyBuilder};

// Re-export the shared value types.
pub use n2w_types::{
    BigUint, ConvertError, ConvertResult, CurrencyForms, Fragment, Number, PluralForms,
};
