use num_bigint::BigUint;

use n2w_types::{ConvertError, ConvertResult, Number};

use crate::compose::NumeralComposer;
use crate::locale::NumeralLocale;
use crate::text::interpolate;

/// Spell out a number: integers directly, decimals digit by digit after the
/// locale's point word.
///
/// Integral decimals such as `2.00` take the integer path.
pub fn to_cardinal<L: NumeralLocale + ?Sized>(locale: &L, value: &Number) -> ConvertResult<String> {
    if value.is_integral() {
        int_to_cardinal(locale, value.is_negative(), value.integer_part())
    } else {
        decimal_to_cardinal(locale, value)
    }
}

/// Spell out an integer given its sign and magnitude.
///
/// The negative word is prefixed once. Magnitudes at or above the
/// vocabulary's limit fail with the locale's `errmsg_toobig`.
pub fn int_to_cardinal<L: NumeralLocale + ?Sized>(
    locale: &L,
    negative: bool,
    magnitude: &BigUint,
) -> ConvertResult<String> {
    if *magnitude >= locale.vocabulary().max_value() {
        return Err(too_big(locale, &magnitude.to_string()));
    }

    let words = NumeralComposer::new(locale).compose(magnitude)?.into_text();
    if negative {
        Ok(format!("{} {words}", locale.text().negword.trim()))
    } else {
        Ok(words)
    }
}

/// The locale's magnitude error for a value given as text.
pub fn too_big<L: NumeralLocale + ?Sized>(locale: &L, value: &str) -> ConvertError {
    let limit = locale.vocabulary().max_value().to_string();
    ConvertError::MagnitudeExceeded(interpolate(
        locale.text().errmsg_toobig,
        &[("value", value), ("limit", &limit)],
    ))
}

fn decimal_to_cardinal<L: NumeralLocale + ?Sized>(locale: &L, value: &Number) -> ConvertResult<String> {
    let digits = value.fraction_digits();
    let mut out = Vec::with_capacity(digits.len() + 2);

    // A negative value with a zero integer part still gets its sign here.
    out.push(int_to_cardinal(locale, value.is_negative(), value.integer_part())?);
    out.push(locale.text().pointword.trim().to_string());

    for digit in digits.chars().filter_map(|c| c.to_digit(10)) {
        out.push(int_to_cardinal(locale, false, &BigUint::from(digit))?);
    }

    Ok(out.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use crate::vocabulary::{LocaleText, Vocabulary};
    use n2w_types::Fragment;

    struct Plain {
        vocabulary: Vocabulary,
        text: LocaleText,
    }

    impl NumeralLocale for Plain {
        fn lang(&self) -> &str {
            "plain"
        }
        fn vocabulary(&self) -> &Vocabulary {
            &self.vocabulary
        }
        fn text(&self) -> &LocaleText {
            &self.text
        }
        fn merge(&self, current: Fragment, next: Fragment) -> Fragment {
            if current.value().is_one() {
                return next;
            }
            let (ctext, cnum) = current.into_parts();
            let (ntext, nnum) = next.into_parts();
            Fragment::new(format!("{ctext} {ntext}"), cnum + nnum)
        }
    }

    fn plain() -> Plain {
        Plain {
            vocabulary: Vocabulary::builder()
                .mid(&[(10, "ten")])
                .low(&["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"])
                .build(),
            text: LocaleText {
                negword: "minus ",
                pointword: "point",
                ..LocaleText::default()
            },
        }
    }

    #[test]
    fn integer_path() {
        let n: Number = "7".parse().unwrap();
        assert_eq!(to_cardinal(&plain(), &n).unwrap(), "seven");
    }

    #[test]
    fn negative_integer_has_one_negword() {
        let n: Number = "-7".parse().unwrap();
        assert_eq!(to_cardinal(&plain(), &n).unwrap(), "minus seven");
    }

    #[test]
    fn decimal_reads_each_digit() {
        let n: Number = "3.05".parse().unwrap();
        assert_eq!(to_cardinal(&plain(), &n).unwrap(), "three point zero five");
    }

    #[test]
    fn negative_decimal_below_one_keeps_sign() {
        let n: Number = "-0.5".parse().unwrap();
        let out = to_cardinal(&plain(), &n).unwrap();
        assert_eq!(out, "minus zero point five");
        assert_eq!(out.matches("minus").count(), 1);
    }

    #[test]
    fn integral_decimal_takes_integer_path() {
        let n: Number = "4.000".parse().unwrap();
        assert_eq!(to_cardinal(&plain(), &n).unwrap(), "four");
    }

    #[test]
    fn magnitude_limit_is_exclusive() {
        let locale = plain();
        assert_eq!(locale.vocabulary().max_value(), BigUint::from(10_000u32));
        assert!(int_to_cardinal(&locale, false, &BigUint::from(9_999u32)).is_ok());
        let err = int_to_cardinal(&locale, false, &BigUint::from(10_000u32)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::MagnitudeExceeded("abs(10000) must be less than 10000.".into())
        );
    }
}
