use num_bigint::BigUint;
use num_traits::One;

use crate::vocabulary::{FIRST_ORDINAL_NUM_SUFFIX, ORDINAL_SUFFIX, ORDINAL_SUFFIXES};

/// Turn a cardinal phrase into its ordinal.
///
/// The irregular table is scanned in order and only the first matching
/// suffix is replaced (`de` -> `dezyem`). Otherwise one trailing `e` is
/// dropped and `yèm` appended.
pub fn ordinal_from_cardinal(cardinal: &str) -> String {
    for (suffix, replacement) in ORDINAL_SUFFIXES {
        if let Some(stem) = cardinal.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    let stem = cardinal.strip_suffix('e').unwrap_or(cardinal);
    format!("{stem}{ORDINAL_SUFFIX}")
}

/// `1er`, `2yèm`, `10yèm`, …
pub fn ordinal_num(value: &BigUint) -> String {
    if value.is_one() {
        format!("{value}{FIRST_ORDINAL_NUM_SUFFIX}")
    } else {
        format!("{value}{ORDINAL_SUFFIX}")
    }
}
