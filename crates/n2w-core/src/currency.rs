//! Shared currency formatter.
//!
//! Locales contribute a currency table, an optional adjective table, a
//! plural rule and a default separator; the magnitude-to-words work reuses
//! the cardinal path.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use n2w_types::{ConvertError, ConvertResult, Number};

use crate::cardinal::int_to_cardinal;
use crate::locale::NumeralLocale;

/// An amount of money to spell out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrencyValue {
    /// An integer count of minor units: `1234` is 12.34.
    Cents(i128),
    /// A decimal amount of major units, rounded half-up to two places.
    Amount(Number),
}

impl From<i64> for CurrencyValue {
    fn from(cents: i64) -> Self {
        Self::Cents(i128::from(cents))
    }
}

impl From<Number> for CurrencyValue {
    fn from(amount: Number) -> Self {
        Self::Amount(amount)
    }
}

/// An amount split into whole major units and remaining minor units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyParts {
    pub integer: BigUint,
    pub cents: u32,
    pub negative: bool,
}

impl CurrencyParts {
    /// Split a currency value.
    ///
    /// With `int_with_cents` set, `Cents` values are divided by 100;
    /// otherwise they count whole units. `Amount` values are rounded
    /// half-up to two decimals first; an amount that rounds to zero is not
    /// negative.
    pub fn from_value(value: &CurrencyValue, int_with_cents: bool) -> Self {
        match value {
            CurrencyValue::Cents(v) => {
                let magnitude = v.unsigned_abs();
                let (integer, cents) = if int_with_cents {
                    (magnitude / 100, (magnitude % 100) as u32)
                } else {
                    (magnitude, 0)
                };
                Self {
                    integer: BigUint::from(integer),
                    cents,
                    negative: *v < 0,
                }
            }
            CurrencyValue::Amount(n) => {
                let digits: Vec<u32> = n
                    .fraction_digits()
                    .chars()
                    .filter_map(|c| c.to_digit(10))
                    .collect();
                let digit = |i: usize| digits.get(i).copied().unwrap_or(0);

                let mut integer = n.integer_part().clone();
                let mut cents = digit(0) * 10 + digit(1);
                if digit(2) >= 5 {
                    cents += 1;
                    if cents == 100 {
                        cents = 0;
                        integer += 1u32;
                    }
                }
                let negative = n.is_negative() && (!integer.is_zero() || cents != 0);
                Self {
                    integer,
                    cents,
                    negative,
                }
            }
        }
    }
}

/// Options for [`to_currency`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// Currency code looked up in the locale's table.
    pub currency: String,
    /// Spell out the minor units; when `false` they are written as two digits.
    pub cents: bool,
    /// Text between the two amounts; `None` uses the locale's default.
    pub separator: Option<String>,
    /// Prefix the major unit with the locale's adjective for the currency.
    pub adjective: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: "EUR".into(),
            cents: true,
            separator: None,
            adjective: false,
        }
    }
}

impl CurrencyOptions {
    /// Options for a currency code, everything else default.
    pub fn for_currency(code: impl Into<String>) -> Self {
        Self {
            currency: code.into(),
            ..Default::default()
        }
    }
}

/// Format an amount as `"{minus}{major} {major-name}{separator} {minor} {minor-name}"`.
pub fn to_currency<L: NumeralLocale + ?Sized>(
    locale: &L,
    value: &CurrencyValue,
    options: &CurrencyOptions,
) -> ConvertResult<String> {
    let forms = locale
        .currency_forms(&options.currency)
        .ok_or_else(|| ConvertError::UnknownCurrency {
            code: options.currency.clone(),
            locale: locale.lang().to_string(),
        })?;

    let (mut major_one, mut major_many) =
        (forms.major.singular.to_string(), forms.major.plural.to_string());
    if options.adjective {
        if let Some(adjective) = locale.currency_adjective(&options.currency) {
            major_one = format!("{adjective} {major_one}");
            major_many = format!("{adjective} {major_many}");
        }
    }

    let parts = CurrencyParts::from_value(value, true);
    let minus = if parts.negative {
        format!("{} ", locale.text().negword.trim())
    } else {
        String::new()
    };
    let cents_value = BigUint::from(parts.cents);
    let money = int_to_cardinal(locale, false, &parts.integer)?;
    let cents = if options.cents {
        int_to_cardinal(locale, false, &cents_value)?
    } else {
        format!("{:02}", parts.cents)
    };
    let separator = options
        .separator
        .as_deref()
        .unwrap_or_else(|| locale.default_separator());

    Ok(format!(
        "{minus}{money} {}{separator} {cents} {}",
        locale.pluralize(&parts.integer, &major_one, &major_many),
        locale.pluralize(&cents_value, forms.minor.singular, forms.minor.plural),
    ))
}

/// Adjectives of the European currency table.
pub fn european_adjective(code: &str) -> Option<&'static str> {
    let adjective = match code {
        "AUD" => "Australian",
        "BYN" => "Belarusian",
        "CAD" => "Canadian",
        "EEK" => "Estonian",
        "USD" => "US",
        "RUB" => "Russian",
        "NOK" => "Norwegian",
        "MXN" => "Mexican",
        "RON" => "Romanian",
        "INR" => "Indian",
        "HUF" => "Hungarian",
        "ISK" => "íslenskar",
        "UZS" => "Uzbekistan",
        "SAR" => "Saudi",
        "JPY" => "Japanese",
        "KRW" => "Korean",
        _ => return None,
    };
    Some(adjective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use crate::vocabulary::{LocaleText, Vocabulary};
    use n2w_types::{CurrencyForms, Fragment};

    fn amount(s: &str) -> CurrencyValue {
        CurrencyValue::Amount(s.parse().unwrap())
    }

    #[test]
    fn cents_integer_is_divided_by_hundred() {
        let parts = CurrencyParts::from_value(&CurrencyValue::Cents(-1234), true);
        assert_eq!(
            parts,
            CurrencyParts {
                integer: BigUint::from(12u32),
                cents: 34,
                negative: true
            }
        );
        let whole = CurrencyParts::from_value(&CurrencyValue::Cents(1234), false);
        assert_eq!((whole.integer, whole.cents), (BigUint::from(1234u32), 0));
    }

    #[test]
    fn amount_rounds_half_up() {
        let p = CurrencyParts::from_value(&amount("1.125"), true);
        assert_eq!((p.integer, p.cents), (BigUint::from(1u32), 13));
        let p = CurrencyParts::from_value(&amount("1.1249"), true);
        assert_eq!((p.integer, p.cents), (BigUint::from(1u32), 12));
        let p = CurrencyParts::from_value(&amount("1.5"), true);
        assert_eq!((p.integer, p.cents), (BigUint::from(1u32), 50));
    }

    #[test]
    fn rounding_carries_into_integer() {
        let p = CurrencyParts::from_value(&amount("9.995"), true);
        assert_eq!((p.integer, p.cents), (BigUint::from(10u32), 0));
    }

    #[test]
    fn amount_rounding_to_zero_is_not_negative() {
        let p = CurrencyParts::from_value(&amount("-0.001"), true);
        assert!(!p.negative);
        assert!(CurrencyParts::from_value(&amount("-0.01"), true).negative);
    }

    struct Coins(Vocabulary, LocaleText);

    impl NumeralLocale for Coins {
        fn lang(&self) -> &str {
            "coins"
        }
        fn vocabulary(&self) -> &Vocabulary {
            &self.0
        }
        fn text(&self) -> &LocaleText {
            &self.1
        }
        fn merge(&self, current: Fragment, next: Fragment) -> Fragment {
            if current.value().is_one() {
                return next;
            }
            let (ctext, cnum) = current.into_parts();
            let (ntext, nnum) = next.into_parts();
            Fragment::new(format!("{ctext}-{ntext}"), cnum + nnum)
        }
        fn currency_forms(&self, code: &str) -> Option<CurrencyForms> {
            (code == "USD").then_some(CurrencyForms::new(("dollar", "dollars"), ("cent", "cents")))
        }
    }

    fn coins() -> Coins {
        Coins(
            Vocabulary::builder()
                .mid(&[(100, "hundred"), (10, "ten")])
                .low(&["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"])
                .build(),
            LocaleText {
                negword: "minus ",
                ..LocaleText::default()
            },
        )
    }

    #[test]
    fn formats_with_default_separator_and_plurals() {
        let out = to_currency(&coins(), &amount("1.02"), &CurrencyOptions::for_currency("USD")).unwrap();
        assert_eq!(out, "one dollar, two cents");
    }

    #[test]
    fn terse_cents_and_custom_separator() {
        let options = CurrencyOptions {
            currency: "USD".into(),
            cents: false,
            separator: Some(" and".into()),
            adjective: false,
        };
        let out = to_currency(&coins(), &CurrencyValue::Cents(-205), &options).unwrap();
        assert_eq!(out, "minus two dollars and 05 cents");
    }

    #[test]
    fn adjective_prefixes_major_unit() {
        let options = CurrencyOptions {
            adjective: true,
            ..CurrencyOptions::for_currency("USD")
        };
        let out = to_currency(&coins(), &amount("2"), &options).unwrap();
        assert_eq!(out, "two US dollars, zero cents");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = to_currency(&coins(), &amount("1"), &CurrencyOptions::for_currency("XYZ")).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownCurrency {
                code: "XYZ".into(),
                locale: "coins".into()
            }
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CurrencyOptions = serde_json::from_str(r#"{"currency":"GBP"}"#).unwrap();
        assert_eq!(options.currency, "GBP");
        assert!(options.cents);
        assert!(options.separator.is_none());
    }
}
