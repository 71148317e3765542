use num_bigint::BigUint;
use num_traits::One;

use n2w_types::{ConvertResult, CurrencyForms, Fragment, Number};

use crate::currency::{self, CurrencyOptions, CurrencyValue};
use crate::vocabulary::{LocaleText, Vocabulary};
use crate::{cardinal, validate};

/// A language plugged into the shared composer.
///
/// A locale must supply its vocabulary, its surrounding strings and the
/// pairwise `merge` rule. Everything else has a default built on the
/// cardinal path; locales override the conversions their grammar needs.
///
/// The trait is object-safe and `Send + Sync` so locales can be selected at
/// runtime and shared across threads as `Box<dyn NumeralLocale>`.
pub trait NumeralLocale: Send + Sync {
    /// Language code, e.g. `"ht"`.
    fn lang(&self) -> &str;

    /// Cards the composer splits magnitudes into.
    fn vocabulary(&self) -> &Vocabulary;

    /// Negative/decimal markers and error templates.
    fn text(&self) -> &LocaleText;

    /// Combine two adjacent fragments, `current` being the more significant,
    /// already-accumulated one.
    ///
    /// Must be pure. The result's value is the sum of both inputs, except
    /// when the rule drops `current` and returns `next` unchanged.
    fn merge(&self, current: Fragment, next: Fragment) -> Fragment;

    fn to_cardinal(&self, value: &Number) -> ConvertResult<String> {
        cardinal::to_cardinal(self, value)
    }

    fn to_ordinal(&self, value: &Number) -> ConvertResult<String> {
        validate::verify_ordinal(self, value)?;
        self.to_cardinal(value)
    }

    fn to_ordinal_num(&self, value: &Number) -> ConvertResult<String> {
        let n = validate::verify_ordinal(self, value)?;
        Ok(n.to_string())
    }

    fn to_year(&self, value: &Number) -> ConvertResult<String> {
        self.to_cardinal(value)
    }

    /// Names for the currency's units, or `None` if the code is unsupported.
    fn currency_forms(&self, _code: &str) -> Option<CurrencyForms> {
        None
    }

    /// Adjective placed before the major unit name when requested.
    fn currency_adjective(&self, code: &str) -> Option<&'static str> {
        currency::european_adjective(code)
    }

    /// Pick the singular or plural form for `n` units.
    fn pluralize<'a>(&self, n: &BigUint, singular: &'a str, plural: &'a str) -> &'a str {
        if n.is_one() {
            singular
        } else {
            plural
        }
    }

    /// Text placed between the major and minor amounts.
    fn default_separator(&self) -> &str {
        ","
    }

    fn to_currency(&self, value: &CurrencyValue, options: &CurrencyOptions) -> ConvertResult<String> {
        currency::to_currency(self, value, options)
    }
}
