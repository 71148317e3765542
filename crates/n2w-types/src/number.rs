use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::ParseNumberError;

/// A decimal literal split into sign, integer part, and fractional digits.
///
/// Fractional digits are kept exactly as written (`"1.50"` keeps `"50"`), so
/// the number of spoken decimal places follows the input rather than any
/// binary floating-point rendering. The integer part is unbounded.
///
/// Serialized as its decimal string; deserializing goes through [`FromStr`],
/// so the fraction always holds ASCII digits only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Number {
    negative: bool,
    integer: BigUint,
    fraction: String,
}

impl Number {
    /// Build a number from its parts.
    ///
    /// `fraction` must contain only ASCII digits.
    pub fn from_parts(
        negative: bool,
        integer: impl Into<BigUint>,
        fraction: impl Into<String>,
    ) -> Result<Self, ParseNumberError> {
        let fraction = fraction.into();
        if let Some((index, found)) = fraction.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseNumberError::InvalidChar { found, index });
        }
        Ok(Self {
            negative,
            integer: integer.into(),
            fraction,
        })
    }

    /// An integer with the given sign and magnitude.
    pub fn integer(negative: bool, magnitude: impl Into<BigUint>) -> Self {
        Self {
            negative,
            integer: magnitude.into(),
            fraction: String::new(),
        }
    }

    /// Returns `true` if the value is strictly below zero (`-0` is not).
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Returns `true` if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.fraction.bytes().all(|b| b == b'0')
    }

    /// Returns `true` if there is no non-zero fractional digit.
    pub fn is_integral(&self) -> bool {
        self.fraction.bytes().all(|b| b == b'0')
    }

    /// Absolute value of the integer part.
    pub fn integer_part(&self) -> &BigUint {
        &self.integer
    }

    /// Fractional digits as written, without the decimal point.
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Number of fractional digits as written.
    pub fn precision(&self) -> usize {
        self.fraction.len()
    }

    /// The same number without its sign.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let offset = s.len() - s.trim_start().len();
        let (negative, body, sign_len) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..], 1),
            Some(b'+') => (false, &trimmed[1..], 1),
            _ => (false, trimmed, 0),
        };

        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (body, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(ParseNumberError::Empty);
        }

        let base = offset + sign_len;
        if let Some((i, found)) = int_digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseNumberError::InvalidChar {
                found,
                index: base + i,
            });
        }
        let frac_base = base + int_digits.len() + 1;
        if let Some((i, found)) = frac_digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseNumberError::InvalidChar {
                found,
                index: frac_base + i,
            });
        }

        let integer = if int_digits.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(int_digits.as_bytes(), 10).ok_or(ParseNumberError::Empty)?
        };

        Ok(Self {
            negative,
            integer,
            fraction: frac_digits.to_string(),
        })
    }
}

impl TryFrom<String> for Number {
    type Error = ParseNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Number> for String {
    fn from(value: Number) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::integer(false, value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::integer(value < 0, value.unsigned_abs())
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Self::integer(false, value)
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Self::integer(value < 0, value.unsigned_abs())
    }
}

impl From<BigUint> for Number {
    fn from(value: BigUint) -> Self {
        Self::integer(false, value)
    }
}
