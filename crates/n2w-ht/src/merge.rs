//! Joining two adjacent Haitian Creole numeral fragments.
//!
//! The composer folds fragments left to right, so `current` is always the
//! more significant, already-accumulated part. Exactly one rule applies per
//! call, chosen by comparing values in this order:
//!
//! | Rule | Guard | Effect |
//! |------|-------|--------|
//! | Elision | `cnum == 1`, `nnum < 10^6` | `next` returned unchanged (`san`, not `en san`) |
//! | Tens + unit | `nnum < cnum < 100` | glued without a space, with liaison (see [`merge`]) |
//! | Multiplier | `nnum > cnum`, `nnum % 100 == 0` | `yon` before scales, `si`/`ui` before cards, space-joined |
//! | Default | otherwise | space-joined |
//!
//! Every guard looks at values only, never at the words, so the rules keep
//! working if a spelling in the tables changes.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use n2w_types::Fragment;

use crate::vocabulary::{ONE_BEFORE_SCALE, ONE_INFIX};

const MILLION: u32 = 1_000_000;
const BILLION: u32 = 1_000_000_000;

/// Merge `current` with the fragment that follows it.
///
/// Apart from elision, the result's value is `cnum + nnum`.
///
/// Tens followed by a unit:
/// - a unit ending in one takes the `ey` infix, and 20 gains a `t` first
///   (`venteyen`, `tranteyen`, `swasanteyonz`);
/// - before 8 or 9 a word ending in `n` gains a `t` (`ventuit`), while a
///   word ending in `nt` is kept (`swasantuit`);
/// - before anything else a final `n` or `nt` becomes `nn` (`vennde`,
///   `trannsenk`, `swasanndis`);
/// - 80 takes none of the above (`katrevenen`, `katrevenonz`).
pub fn merge(current: Fragment, next: Fragment) -> Fragment {
    if current.value().is_one() && *next.value() < BigUint::from(MILLION) {
        return next;
    }

    let (ctext, cnum) = current.into_parts();
    let (ntext, nnum) = next.into_parts();

    if let (Some(c), Some(n)) = (cnum.to_u32(), nnum.to_u32()) {
        if n < c && c < 100 {
            return Fragment::new(join_tens(ctext, c, &ntext, n), c + n);
        }
    }

    let mut ctext = ctext;
    if nnum > cnum && (&nnum % 100u32).is_zero() {
        let scale = (&nnum % MILLION).is_zero() || (&nnum % BILLION).is_zero();
        match cnum.to_u32() {
            Some(1) if scale => ctext = ONE_BEFORE_SCALE.to_string(),
            // sis san -> si san, uit mil -> ui mil
            Some(6 | 8) => {
                ctext.pop();
            }
            _ => {}
        }
    }

    Fragment::new(format!("{ctext} {ntext}"), cnum + nnum)
}

/// Glue a tens word (`cnum < 100`) to a smaller unit.
fn join_tens(mut ctext: String, cnum: u32, ntext: &str, nnum: u32) -> String {
    if cnum == 80 {
        return format!("{ctext}{ntext}");
    }

    if nnum % 10 == 1 {
        if cnum == 20 {
            ctext.push('t');
        }
        return format!("{ctext}{ONE_INFIX}{ntext}");
    }

    if matches!(nnum, 8 | 9) {
        if ctext.ends_with('n') {
            ctext.push('t');
        }
    } else if ctext.ends_with('n') || ctext.ends_with("nt") {
        if ctext.ends_with('t') {
            ctext.pop();
        }
        ctext.push('n');
    }
    format!("{ctext}{ntext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(c: (&str, u128), n: (&str, u128)) -> Fragment {
        merge(Fragment::from(c), Fragment::from(n))
    }

    const MILLION: u128 = 1_000_000;
    const BILLION: u128 = 1_000_000_000;

    #[test]
    fn one_is_elided_before_small_cards() {
        assert_eq!(m(("en", 1), ("san", 100)), Fragment::new("san", 100u32));
        assert_eq!(m(("en", 1), ("mil", 1000)), Fragment::new("mil", 1000u32));
        assert_eq!(m(("en", 1), ("en", 1)), Fragment::new("en", 1u32));
    }

    #[test]
    fn one_becomes_yon_before_scales() {
        assert_eq!(m(("en", 1), ("milyon", MILLION)), Fragment::new("yon milyon", MILLION + 1));
        assert_eq!(m(("en", 1), ("milya", BILLION)), Fragment::new("yon milya", BILLION + 1));
    }

    #[test]
    fn one_becomes_yon_before_large_scales() {
        let sextilyon = BigUint::from(10u32).pow(36);
        let merged = merge(Fragment::new("en", 1u32), Fragment::new("sextilyon", sextilyon.clone()));
        assert_eq!(merged.text(), "yon sextilyon");
        assert_eq!(*merged.value(), sextilyon + 1u32);
    }

    #[test]
    fn twenty_one_takes_t_and_infix() {
        assert_eq!(m(("ven", 20), ("en", 1)), Fragment::new("venteyen", 21u32));
    }

    #[test]
    fn other_tens_take_infix_only() {
        assert_eq!(m(("trant", 30), ("en", 1)).text(), "tranteyen");
        assert_eq!(m(("swasant", 60), ("onz", 11)).text(), "swasanteyonz");
    }

    #[test]
    fn eighty_is_glued_without_adjustment() {
        assert_eq!(m(("katreven", 80), ("en", 1)), Fragment::new("katrevenen", 81u32));
        assert_eq!(m(("katreven", 80), ("onz", 11)).text(), "katrevenonz");
        assert_eq!(m(("katreven", 80), ("de", 2)).text(), "katrevende");
        assert_eq!(m(("katreven", 80), ("uit", 8)).text(), "katrevenuit");
    }

    #[test]
    fn n_gains_t_before_eight_and_nine() {
        assert_eq!(m(("ven", 20), ("uit", 8)).text(), "ventuit");
        assert_eq!(m(("ven", 20), ("nèf", 9)).text(), "ventnèf");
    }

    #[test]
    fn nt_is_kept_before_eight_and_nine() {
        assert_eq!(m(("swasant", 60), ("uit", 8)).text(), "swasantuit");
        assert_eq!(m(("trant", 30), ("nèf", 9)).text(), "trantnèf");
    }

    #[test]
    fn nt_and_n_double_before_other_units() {
        assert_eq!(m(("trant", 30), ("senk", 5)).text(), "trannsenk");
        assert_eq!(m(("ven", 20), ("de", 2)).text(), "vennde");
        assert_eq!(m(("swasant", 60), ("dis", 10)).text(), "swasanndis");
        assert_eq!(m(("swasant", 60), ("dizuit", 18)).text(), "swasanndizuit");
    }

    #[test]
    fn six_and_eight_drop_last_letter_before_cards() {
        assert_eq!(m(("sis", 6), ("san", 100)).text(), "si san");
        assert_eq!(m(("uit", 8), ("san", 100)).text(), "ui san");
        assert_eq!(m(("uit", 8), ("mil", 1000)).text(), "ui mil");
        assert_eq!(m(("senk", 5), ("san", 100)).text(), "senk san");
    }

    #[test]
    fn default_is_space_joined() {
        assert_eq!(m(("san", 100), ("senk", 5)), Fragment::new("san senk", 105u32));
        assert_eq!(m(("mil", 1000), ("san", 100)).text(), "mil san");
    }

    #[test]
    fn merge_is_additive_outside_elision() {
        let pairs = [
            (("ven", 20), ("en", 1)),
            (("katreven", 80), ("nèf", 9)),
            (("sis", 6), ("san", 100)),
            (("en", 1), ("milya", BILLION)),
            (("mil", 1000), ("san", 100)),
        ];
        for (c, n) in pairs {
            assert_eq!(*m(c, n).value(), BigUint::from(c.1 + n.1));
        }
    }
}
