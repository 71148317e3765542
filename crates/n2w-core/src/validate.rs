use num_bigint::BigUint;

use n2w_types::{ConvertError, ConvertResult, Number};

use crate::locale::NumeralLocale;
use crate::text::interpolate;

/// Check that `value` can be read as an ordinal and return its magnitude.
///
/// Zero is accepted. Fractional and negative values fail with the locale's
/// `errmsg_floatord` / `errmsg_negord`.
pub fn verify_ordinal<L: NumeralLocale + ?Sized>(locale: &L, value: &Number) -> ConvertResult<BigUint> {
    let rendered = value.to_string();
    if !value.is_integral() {
        return Err(ConvertError::InvalidOrdinal(interpolate(
            locale.text().errmsg_floatord,
            &[("value", &rendered)],
        )));
    }
    if value.is_negative() {
        return Err(ConvertError::InvalidOrdinal(interpolate(
            locale.text().errmsg_negord,
            &[("value", &rendered)],
        )));
    }
    Ok(value.integer_part().clone())
}

/// Parse user input into a [`Number`], reporting failures with the locale's
/// `errmsg_nonnum`.
///
/// Any length of digits parses; the magnitude limit is checked on conversion.
pub fn parse_number<L: NumeralLocale + ?Sized>(locale: &L, input: &str) -> ConvertResult<Number> {
    input.parse::<Number>().map_err(|_| {
        ConvertError::InvalidInput(interpolate(
            locale.text().errmsg_nonnum,
            &[("value", input.trim())],
        ))
    })
}
